use std::collections::HashSet;
use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use flora_core::{DomainError, DomainResult, ProductId};

use crate::filter::{PriceFilter, filter};
use crate::product::Product;

/// Errors raised while loading an injected catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] DomainError),
}

/// Ordered, immutable product list. Ids are unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, checking that ids are unique and names are present.
    pub fn new(products: Vec<Product>) -> DomainResult<Self> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id_typed()) {
                return Err(DomainError::invariant(format!(
                    "duplicate product id {} in catalog",
                    product.id_typed()
                )));
            }
            if product.name().trim().is_empty() {
                return Err(DomainError::validation(format!(
                    "product {} has an empty name",
                    product.id_typed()
                )));
            }
        }
        Ok(Self { products })
    }

    /// Built-in data that is known to be valid at compile time.
    pub(crate) fn from_fixture(products: Vec<Product>) -> Self {
        debug_assert!(Self::new(products.clone()).is_ok());
        Self { products }
    }

    /// Parse a JSON array of product records.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Ok(Self::new(products)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_json_str(&json)?;
        tracing::info!(
            path = %path.display(),
            products = catalog.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id_typed() == id)
    }

    /// Like [`Catalog::get`], but a missing id is an `UnknownProduct` error.
    pub fn require(&self, id: ProductId) -> DomainResult<&Product> {
        self.get(id).ok_or(DomainError::unknown_product(id))
    }

    /// The first `count` products, shown on the home section.
    pub fn featured(&self, count: usize) -> &[Product] {
        &self.products[..count.min(self.products.len())]
    }

    pub fn filtered(&self, mode: PriceFilter) -> Vec<&Product> {
        filter(&self.products, mode)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
