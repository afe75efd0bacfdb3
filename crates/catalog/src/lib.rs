//! Bouquet catalog: products, the ordered catalog, and price filtering.
//!
//! Everything here is deterministic domain logic. The catalog is injected (a
//! built-in fixture or a JSON document), never fetched.

pub mod catalog;
pub mod filter;
pub mod fixture;
pub mod product;

pub use catalog::{Catalog, CatalogError};
pub use filter::{PriceFilter, UnknownPriceFilter, filter};
pub use fixture::sample_bouquets;
pub use product::{Category, Product};
