use std::sync::Arc;

use chrono::Utc;

use flora_cart::{Cart, CartEvent};
use flora_catalog::{Catalog, PriceFilter};
use flora_core::{DomainResult, Price, ProductId, SessionId};
use flora_events::{EventEnvelope, EventLog};

use crate::section::Section;
use crate::state::{Action, StorefrontState};
use crate::view::{CartView, Page};

/// One shopping session: injected catalog, current state, and the cart history.
///
/// Every accepted cart change is recorded, so the cart can always be rebuilt from
/// [`Storefront::history`].
#[derive(Debug, Clone)]
pub struct Storefront {
    session_id: SessionId,
    catalog: Arc<Catalog>,
    state: StorefrontState,
    history: EventLog<CartEvent>,
}

impl Storefront {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_session_id(SessionId::new(), catalog)
    }

    pub fn with_session_id(session_id: SessionId, catalog: Arc<Catalog>) -> Self {
        tracing::info!(%session_id, products = catalog.len(), "storefront session started");
        Self {
            session_id,
            catalog,
            state: StorefrontState::new(session_id),
            history: EventLog::new(session_id),
        }
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &StorefrontState {
        &self.state
    }

    pub fn cart(&self) -> &Cart {
        self.state.cart()
    }

    pub fn history(&self) -> &[EventEnvelope<CartEvent>] {
        self.history.entries()
    }

    /// Apply a user action and record the cart events it produced.
    pub fn dispatch(&mut self, action: Action) -> DomainResult<Vec<CartEvent>> {
        match self.state.reduce(&self.catalog, &action, Utc::now()) {
            Ok(events) => {
                tracing::debug!(
                    session_id = %self.session_id,
                    action = action.kind(),
                    events = events.len(),
                    "action applied"
                );
                self.history.append(events.iter().cloned());
                Ok(events)
            }
            Err(err) => {
                tracing::warn!(
                    session_id = %self.session_id,
                    action = action.kind(),
                    error = %err,
                    "action rejected"
                );
                Err(err)
            }
        }
    }

    pub fn set_active_section(&mut self, section: Section) {
        self.state_only(Action::Navigate(section));
    }

    pub fn set_price_filter(&mut self, mode: PriceFilter) {
        self.state_only(Action::SetPriceFilter(mode));
    }

    pub fn add_to_cart(&mut self, product_id: ProductId) -> DomainResult<Vec<CartEvent>> {
        self.dispatch(Action::AddToCart(product_id))
    }

    pub fn remove_from_cart(&mut self, product_id: ProductId) -> DomainResult<Vec<CartEvent>> {
        self.dispatch(Action::RemoveFromCart(product_id))
    }

    pub fn update_quantity(
        &mut self,
        product_id: ProductId,
        quantity: i64,
    ) -> DomainResult<Vec<CartEvent>> {
        self.dispatch(Action::UpdateQuantity {
            product_id,
            quantity,
        })
    }

    pub fn total_price(&self) -> Price {
        self.cart().total_price()
    }

    pub fn item_count(&self) -> u64 {
        self.cart().item_count()
    }

    pub fn page(&self) -> Page<'_> {
        Page::build(&self.catalog, &self.state)
    }

    pub fn cart_view(&self) -> CartView<'_> {
        CartView::new(self.state.cart())
    }

    /// Cart rebuilt from the recorded history alone.
    pub fn replay_history(&self) -> Cart {
        Cart::replay(self.session_id, self.history.payloads())
    }

    fn state_only(&mut self, action: Action) {
        // Navigation and filter changes cannot fail.
        if let Err(err) = self.dispatch(action) {
            tracing::error!(session_id = %self.session_id, error = %err, "state change failed");
        }
    }
}
