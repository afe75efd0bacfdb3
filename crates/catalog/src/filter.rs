//! Price-range filtering over the catalog.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use flora_core::Price;

use crate::product::Product;

const LOW_BOUNDARY: Price = Price::new(3000);
const HIGH_BOUNDARY: Price = Price::new(5000);

/// Price filter selected in the catalog section.
///
/// The three bounded variants partition all prices: every price matches exactly
/// one of them (3000 and 5000 fall into the upper bucket).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriceFilter {
    #[default]
    #[serde(rename = "all")]
    All,
    /// `price < 3000`
    #[serde(rename = "under3000")]
    Under3000,
    /// `3000 <= price < 5000`
    #[serde(rename = "3000to5000")]
    From3000To5000,
    /// `price >= 5000`
    #[serde(rename = "over5000")]
    From5000,
}

impl PriceFilter {
    /// Every filter, in the order the catalog toolbar shows them.
    pub const ALL: [PriceFilter; 4] = [
        PriceFilter::All,
        PriceFilter::Under3000,
        PriceFilter::From3000To5000,
        PriceFilter::From5000,
    ];

    pub fn matches(self, price: Price) -> bool {
        match self {
            PriceFilter::All => true,
            PriceFilter::Under3000 => price < LOW_BOUNDARY,
            PriceFilter::From3000To5000 => LOW_BOUNDARY <= price && price < HIGH_BOUNDARY,
            PriceFilter::From5000 => price >= HIGH_BOUNDARY,
        }
    }

    /// Stable key used in commands and serialized state.
    pub fn as_str(self) -> &'static str {
        match self {
            PriceFilter::All => "all",
            PriceFilter::Under3000 => "under3000",
            PriceFilter::From3000To5000 => "3000to5000",
            PriceFilter::From5000 => "over5000",
        }
    }

    /// Toolbar label.
    pub fn label(self) -> &'static str {
        match self {
            PriceFilter::All => "Все букеты",
            PriceFilter::Under3000 => "До 3000 ₽",
            PriceFilter::From3000To5000 => "От 3000 ₽",
            PriceFilter::From5000 => "От 5000 ₽",
        }
    }
}

impl core::fmt::Display for PriceFilter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a filter key is not one of [`PriceFilter::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown price filter '{0}' (expected all, under3000, 3000to5000 or over5000)")]
pub struct UnknownPriceFilter(pub String);

impl FromStr for PriceFilter {
    type Err = UnknownPriceFilter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        PriceFilter::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(key))
            .ok_or_else(|| UnknownPriceFilter(key.to_string()))
    }
}

/// Products passing `mode`, in their original order.
pub fn filter<'a, I>(products: I, mode: PriceFilter) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    products
        .into_iter()
        .filter(|p| mode.matches(p.price()))
        .collect()
}
