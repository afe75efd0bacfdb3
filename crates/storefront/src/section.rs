use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Section currently shown. Closed set; switching never touches cart or filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Home,
    Catalog,
    Delivery,
    Payment,
    About,
    Contacts,
}

impl Section {
    /// Navigation bar order.
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::Catalog,
        Section::Delivery,
        Section::Payment,
        Section::About,
        Section::Contacts,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Catalog => "catalog",
            Section::Delivery => "delivery",
            Section::Payment => "payment",
            Section::About => "about",
            Section::Contacts => "contacts",
        }
    }

    /// Navigation bar label.
    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Главная",
            Section::Catalog => "Каталог",
            Section::Delivery => "Доставка",
            Section::Payment => "Оплата",
            Section::About => "О нас",
            Section::Contacts => "Контакты",
        }
    }
}

impl core::fmt::Display for Section {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown section '{0}'")]
pub struct UnknownSection(pub String);

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Section::ALL
            .into_iter()
            .find(|section| section.as_str().eq_ignore_ascii_case(key))
            .ok_or_else(|| UnknownSection(key.to_string()))
    }
}
