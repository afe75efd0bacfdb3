//! Read-only views handed to the presentation layer.
//!
//! Views borrow from the catalog and state; they are rebuilt after every action
//! and never cached.

use flora_cart::{Cart, CartItem};
use flora_catalog::{Catalog, PriceFilter, Product};
use flora_core::Price;

use crate::content::{self, Hero, SectionContent};
use crate::section::Section;
use crate::state::StorefrontState;

/// The cart side panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView<'a> {
    pub lines: &'a [CartItem],
    pub total: Price,
    pub item_count: u64,
}

impl<'a> CartView<'a> {
    pub fn new(cart: &'a Cart) -> Self {
        Self {
            lines: cart.items(),
            total: cart.total_price(),
            item_count: cart.item_count(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number shown on the cart button; hidden while the cart is empty.
    pub fn badge(&self) -> Option<u64> {
        (!self.is_empty()).then_some(self.item_count)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeView<'a> {
    pub hero: Hero,
    pub featured: &'a [Product],
}

/// Catalog section: the filter toolbar and the filtered products.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogView<'a> {
    pub active_filter: PriceFilter,
    pub products: Vec<&'a Product>,
}

impl CatalogView<'_> {
    /// Toolbar buttons with the active one flagged.
    pub fn toolbar(&self) -> impl Iterator<Item = (PriceFilter, bool)> + '_ {
        PriceFilter::ALL
            .into_iter()
            .map(|mode| (mode, mode == self.active_filter))
    }
}

/// Main content area for the active section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page<'a> {
    Home(HomeView<'a>),
    Catalog(CatalogView<'a>),
    Info(&'static SectionContent),
}

impl<'a> Page<'a> {
    pub fn build(catalog: &'a Catalog, state: &StorefrontState) -> Self {
        match state.section() {
            Section::Home => Page::Home(HomeView {
                hero: content::HERO,
                featured: catalog.featured(content::FEATURED_COUNT),
            }),
            Section::Catalog => Page::Catalog(CatalogView {
                active_filter: state.price_filter(),
                products: catalog.filtered(state.price_filter()),
            }),
            section => match content::section_content(section) {
                Some(info) => Page::Info(info),
                // Home and catalog are handled above; every other section has content.
                None => Page::Home(HomeView {
                    hero: content::HERO,
                    featured: catalog.featured(content::FEATURED_COUNT),
                }),
            },
        }
    }
}
