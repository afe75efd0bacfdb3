//! Static copy for the home hero and the informational sections.

use crate::section::Section;

/// One card in an informational section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfoCard {
    /// Icon name understood by the presentation layer.
    pub icon: &'static str,
    pub title: &'static str,
    pub lines: &'static [&'static str],
}

/// A headline figure on the about page ("10+ лет опыта").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub value: &'static str,
    pub caption: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionContent {
    pub title: &'static str,
    pub paragraphs: &'static [&'static str],
    pub cards: &'static [InfoCard],
    pub highlights: &'static [Highlight],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hero {
    pub title: &'static str,
    pub subtitle: &'static str,
    /// Button label; pressing it opens the catalog.
    pub call_to_action: &'static str,
}

pub const SHOP_NAME: &str = "Флора";
pub const FOOTER: &str = "© 2024 Флора. Все права защищены";
pub const CATALOG_TITLE: &str = "Каталог букетов";
pub const CART_TITLE: &str = "Корзина";
pub const EMPTY_CART: &str = "Корзина пуста";
pub const TOTAL_LABEL: &str = "Итого:";
pub const CHECKOUT_LABEL: &str = "Оформить заказ";
pub const ADD_TO_CART_LABEL: &str = "В корзину";

/// Number of products shown on the home section.
pub const FEATURED_COUNT: usize = 3;

pub const HERO: Hero = Hero {
    title: "Цветы для особых моментов",
    subtitle: "Свежие букеты с доставкой по городу. Создаём настроение каждый день",
    call_to_action: "Смотреть каталог",
};

const DELIVERY: SectionContent = SectionContent {
    title: "Доставка",
    paragraphs: &[],
    cards: &[
        InfoCard {
            icon: "Truck",
            title: "Доставка по городу",
            lines: &["Бесплатная доставка при заказе от 3000 ₽. Стандартная доставка — 300 ₽"],
        },
        InfoCard {
            icon: "Clock",
            title: "Срочная доставка",
            lines: &["Доставим за 2 часа в пределах города — 500 ₽"],
        },
        InfoCard {
            icon: "MapPin",
            title: "Самовывоз",
            lines: &["Можете забрать заказ сами из нашего салона по адресу: ул. Цветочная, 15"],
        },
    ],
    highlights: &[],
};

const PAYMENT: SectionContent = SectionContent {
    title: "Оплата",
    paragraphs: &[],
    cards: &[
        InfoCard {
            icon: "CreditCard",
            title: "Картой онлайн",
            lines: &["Принимаем все банковские карты. Безопасная оплата через защищённое соединение"],
        },
        InfoCard {
            icon: "Banknote",
            title: "Наличными курьеру",
            lines: &["Оплата при получении заказа"],
        },
        InfoCard {
            icon: "Smartphone",
            title: "Переводом на карту",
            lines: &["СБП и банковские переводы"],
        },
    ],
    highlights: &[],
};

const ABOUT: SectionContent = SectionContent {
    title: "О нас",
    paragraphs: &[
        "Мы — команда флористов с 10-летним опытом создания букетов для особых моментов. \
         Каждый букет собирается вручную из свежих цветов, которые мы получаем напрямую от проверенных поставщиков.",
        "Наша миссия — дарить радость и создавать незабываемые впечатления через красоту цветов. \
         Мы работаем с любовью к своему делу и вниманием к каждой детали.",
    ],
    cards: &[],
    highlights: &[
        Highlight {
            value: "10+",
            caption: "лет опыта",
        },
        Highlight {
            value: "5000+",
            caption: "счастливых клиентов",
        },
        Highlight {
            value: "100%",
            caption: "свежие цветы",
        },
    ],
};

const CONTACTS: SectionContent = SectionContent {
    title: "Контакты",
    paragraphs: &[],
    cards: &[
        InfoCard {
            icon: "Phone",
            title: "Телефон",
            lines: &["+7 (999) 123-45-67", "Ежедневно с 9:00 до 21:00"],
        },
        InfoCard {
            icon: "Mail",
            title: "Email",
            lines: &["info@flora.shop", "Ответим в течение часа"],
        },
        InfoCard {
            icon: "MapPin",
            title: "Адрес",
            lines: &["ул. Цветочная, 15", "м. Парк Культуры"],
        },
        InfoCard {
            icon: "MessageCircle",
            title: "Мессенджеры",
            lines: &["WhatsApp, Telegram", "Быстрая связь"],
        },
    ],
    highlights: &[],
};

/// Static content of a section. `None` for home and catalog, which are built from
/// the catalog and state.
pub fn section_content(section: Section) -> Option<&'static SectionContent> {
    match section {
        Section::Home | Section::Catalog => None,
        Section::Delivery => Some(&DELIVERY),
        Section::Payment => Some(&PAYMENT),
        Section::About => Some(&ABOUT),
        Section::Contacts => Some(&CONTACTS),
    }
}
