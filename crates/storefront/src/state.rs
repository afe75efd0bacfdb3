use chrono::{DateTime, Utc};

use flora_cart::{AddToCart, Cart, CartCommand, CartEvent, RemoveFromCart, UpdateQuantity};
use flora_catalog::{Catalog, PriceFilter};
use flora_core::{Aggregate, DomainResult, ProductId, SessionId};

use crate::section::Section;

/// A user interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Navigate(Section),
    SetPriceFilter(PriceFilter),
    /// Add one unit of a catalog product.
    AddToCart(ProductId),
    RemoveFromCart(ProductId),
    /// Set an exact quantity; 0 removes the line, negative is rejected.
    UpdateQuantity { product_id: ProductId, quantity: i64 },
    /// Cart panel "+": quantity + 1 for an existing line.
    Increment(ProductId),
    /// Cart panel "−": quantity − 1 for an existing line, removing it at 0.
    Decrement(ProductId),
}

impl Action {
    /// Short name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::Navigate(_) => "navigate",
            Action::SetPriceFilter(_) => "set_price_filter",
            Action::AddToCart(_) => "add_to_cart",
            Action::RemoveFromCart(_) => "remove_from_cart",
            Action::UpdateQuantity { .. } => "update_quantity",
            Action::Increment(_) => "increment",
            Action::Decrement(_) => "decrement",
        }
    }
}

/// Everything one session can change: the cart, the open section and the filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontState {
    cart: Cart,
    section: Section,
    price_filter: PriceFilter,
}

impl StorefrontState {
    pub fn new(session_id: SessionId) -> Self {
        Self {
            cart: Cart::empty(session_id),
            section: Section::default(),
            price_filter: PriceFilter::default(),
        }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn price_filter(&self) -> PriceFilter {
        self.price_filter
    }

    /// Apply one action.
    ///
    /// Returns the cart events it produced (empty for navigation, filter changes and
    /// no-ops). On error nothing has changed.
    pub fn reduce(
        &mut self,
        catalog: &Catalog,
        action: &Action,
        now: DateTime<Utc>,
    ) -> DomainResult<Vec<CartEvent>> {
        match *action {
            Action::Navigate(section) => {
                self.section = section;
                Ok(Vec::new())
            }
            Action::SetPriceFilter(mode) => {
                self.price_filter = mode;
                Ok(Vec::new())
            }
            Action::AddToCart(product_id) => {
                let product = catalog.require(product_id)?.clone();
                self.cart.execute(&CartCommand::AddToCart(AddToCart {
                    product,
                    occurred_at: now,
                }))
            }
            Action::RemoveFromCart(product_id) => {
                self.cart.execute(&CartCommand::RemoveFromCart(RemoveFromCart {
                    product_id,
                    occurred_at: now,
                }))
            }
            Action::UpdateQuantity {
                product_id,
                quantity,
            } => self.set_quantity(product_id, quantity, now),
            Action::Increment(product_id) => match self.cart.get(product_id) {
                Some(item) => {
                    let quantity = i64::from(item.quantity()) + 1;
                    self.set_quantity(product_id, quantity, now)
                }
                None => Ok(Vec::new()),
            },
            Action::Decrement(product_id) => match self.cart.get(product_id) {
                Some(item) => {
                    let quantity = i64::from(item.quantity()) - 1;
                    self.set_quantity(product_id, quantity, now)
                }
                None => Ok(Vec::new()),
            },
        }
    }

    fn set_quantity(
        &mut self,
        product_id: ProductId,
        quantity: i64,
        now: DateTime<Utc>,
    ) -> DomainResult<Vec<CartEvent>> {
        self.cart.execute(&CartCommand::UpdateQuantity(UpdateQuantity {
            product_id,
            quantity,
            occurred_at: now,
        }))
    }
}
