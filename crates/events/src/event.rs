use chrono::{DateTime, Utc};

/// A recorded fact about a session ("bouquet 3 was added to the cart").
///
/// Payloads are never edited after being recorded; a later change is a new event.
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Dotted name such as `cart.item.removed`. Never changes once published.
    fn event_type(&self) -> &'static str;

    /// Payload schema version.
    fn version(&self) -> u32;

    /// Wall-clock time of the action that produced the event.
    fn occurred_at(&self) -> DateTime<Utc>;
}
