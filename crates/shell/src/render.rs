//! Plain-text rendering of storefront views.

use std::io::{self, Write};

use flora_cart::CartEvent;
use flora_catalog::Product;
use flora_events::{Event, EventEnvelope};
use flora_storefront::content::{self, SectionContent};
use flora_storefront::{CartView, CatalogView, HomeView, Page, Section, Storefront};

/// Navigation bar with the active section in brackets and the cart badge.
pub fn header(out: &mut impl Write, shop: &Storefront) -> io::Result<()> {
    let active = shop.state().section();
    let nav: Vec<String> = Section::ALL
        .into_iter()
        .map(|section| {
            if section == active {
                format!("[{}]", section.label())
            } else {
                section.label().to_string()
            }
        })
        .collect();

    write!(out, "{}  |  {}  |  {}", content::SHOP_NAME, nav.join(" "), content::CART_TITLE)?;
    match shop.cart_view().badge() {
        Some(count) => writeln!(out, " ({count})"),
        None => writeln!(out),
    }
}

fn product_card(out: &mut impl Write, product: &Product) -> io::Result<()> {
    writeln!(
        out,
        "  #{:<3} {:<12} {:<10} {:>8}   [{}: add {}]",
        product.id_typed(),
        product.name(),
        product.category(),
        product.price().to_string(),
        content::ADD_TO_CART_LABEL,
        product.id_typed()
    )
}

fn home(out: &mut impl Write, view: &HomeView<'_>) -> io::Result<()> {
    writeln!(out, "{}", view.hero.title)?;
    writeln!(out, "{}", view.hero.subtitle)?;
    writeln!(out, "  -> {} (catalog)", view.hero.call_to_action)?;
    writeln!(out)?;
    for product in view.featured {
        product_card(out, product)?;
    }
    Ok(())
}

fn catalog(out: &mut impl Write, view: &CatalogView<'_>) -> io::Result<()> {
    writeln!(out, "{}", content::CATALOG_TITLE)?;
    let toolbar: Vec<String> = view
        .toolbar()
        .map(|(mode, active)| {
            if active {
                format!("[{}]", mode.label())
            } else {
                format!("{} ({})", mode.label(), mode.as_str())
            }
        })
        .collect();
    writeln!(out, "  {}", toolbar.join("  "))?;
    writeln!(out)?;

    if view.products.is_empty() {
        writeln!(out, "  (нет букетов в этом диапазоне)")?;
    }
    for product in &view.products {
        product_card(out, product)?;
    }
    Ok(())
}

fn info(out: &mut impl Write, info: &SectionContent) -> io::Result<()> {
    writeln!(out, "{}", info.title)?;
    for paragraph in info.paragraphs {
        writeln!(out, "  {paragraph}")?;
    }
    for card in info.cards {
        writeln!(out, "  * {}", card.title)?;
        for line in card.lines {
            writeln!(out, "      {line}")?;
        }
    }
    if !info.highlights.is_empty() {
        let highlights: Vec<String> = info
            .highlights
            .iter()
            .map(|h| format!("{} {}", h.value, h.caption))
            .collect();
        writeln!(out, "  {}", highlights.join("  ·  "))?;
    }
    Ok(())
}

pub fn page(out: &mut impl Write, page: &Page<'_>) -> io::Result<()> {
    match page {
        Page::Home(view) => home(out, view),
        Page::Catalog(view) => catalog(out, view),
        Page::Info(content) => info(out, content),
    }
}

/// Cart side panel.
pub fn cart(out: &mut impl Write, view: &CartView<'_>) -> io::Result<()> {
    writeln!(out, "{}", content::CART_TITLE)?;
    if view.is_empty() {
        return writeln!(out, "  {}", content::EMPTY_CART);
    }

    for line in view.lines {
        let product = line.product();
        writeln!(
            out,
            "  #{:<3} {:<12} {:>8} x {:<3} = {:>9}   [- dec {id}] [+ inc {id}] [x remove {id}]",
            product.id_typed(),
            product.name(),
            product.price().to_string(),
            line.quantity(),
            line.line_total().to_string(),
            id = product.id_typed(),
        )?;
    }
    writeln!(out, "  {} {}", content::TOTAL_LABEL, view.total)?;
    writeln!(out, "  [{}: checkout]", content::CHECKOUT_LABEL)
}

pub fn history(out: &mut impl Write, entries: &[EventEnvelope<CartEvent>]) -> io::Result<()> {
    if entries.is_empty() {
        return writeln!(out, "  (история пуста)");
    }
    for entry in entries {
        let event = entry.payload();
        let detail = match event {
            CartEvent::ItemAdded(e) => format!("{} x1", e.product.name()),
            CartEvent::QuantityIncremented(e) => format!("#{} -> {}", e.product_id, e.quantity),
            CartEvent::QuantityChanged(e) => format!("#{} -> {}", e.product_id, e.quantity),
            CartEvent::ItemRemoved(e) => format!("#{}", e.product_id),
        };
        writeln!(
            out,
            "  {:>3}. {:<27} {}",
            entry.sequence_number(),
            event.event_type(),
            detail
        )?;
    }
    Ok(())
}
