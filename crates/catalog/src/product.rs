use serde::{Deserialize, Serialize};

use flora_core::{Entity, Price, ProductId, ValueObject};

/// Display category of a bouquet ("Розы", "Тюльпаны", ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl ValueObject for Category {}

impl Category {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.pad(&self.0)
    }
}

/// A catalog record. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Price,
    /// Image URI, passed through to the presentation layer untouched.
    image: String,
    category: Category,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: Price,
        image: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            image: image.into(),
            category,
        }
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn category(&self) -> &Category {
        &self.category
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> ProductId {
        self.id
    }
}
