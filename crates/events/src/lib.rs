//! Storefront events: the facts produced by accepted actions.
//!
//! Events are recorded per session in an append-only [`EventLog`] so the current
//! state can always be explained (and rebuilt) from what happened.

pub mod envelope;
pub mod event;
pub mod log;

pub use envelope::EventEnvelope;
pub use event::Event;
pub use log::EventLog;
