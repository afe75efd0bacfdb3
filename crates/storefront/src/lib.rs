//! `flora-storefront`
//!
//! **Responsibility:** the state of one shopping session and the pure transitions
//! over it.
//!
//! - [`StorefrontState`] + [`Action`]: explicit state and a reducer
//! - [`Storefront`]: a session wrapper owning the injected catalog, the state and
//!   the cart event history
//! - [`view`]: read-only projections of the state for a presentation layer
//! - [`content`]: static copy for the informational sections

pub mod content;
pub mod section;
pub mod session;
pub mod state;
pub mod view;

pub use section::{Section, UnknownSection};
pub use session::Storefront;
pub use state::{Action, StorefrontState};
pub use view::{CartView, CatalogView, HomeView, Page};
