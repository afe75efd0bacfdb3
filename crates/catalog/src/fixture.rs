//! The shop's own bouquets, used when no catalog file is configured.

use flora_core::{Price, ProductId};

use crate::catalog::Catalog;
use crate::product::{Category, Product};

const IMAGE_BASE: &str = "https://cdn.poehali.dev/projects/e8049b84-d597-4a27-8a3b-e157c1d6faa7/files";

const ROSES_IMAGE: &str = "80122833-9c97-4bdd-afe7-35603e8faa1b.jpg";
const ROMANCE_IMAGE: &str = "e89e82bd-4e99-4ce1-966a-c57227302f15.jpg";
const SPRING_IMAGE: &str = "d3fde669-c415-4d98-a35f-4ed07a290e05.jpg";

fn bouquet(id: u32, name: &str, price: u64, image: &str, category: &str) -> Product {
    Product::new(
        ProductId::new(id),
        name,
        Price::new(price),
        format!("{IMAGE_BASE}/{image}"),
        Category::new(category),
    )
}

/// Six bouquets, priced 2800 to 6200.
pub fn sample_bouquets() -> Catalog {
    Catalog::from_fixture(vec![
        bouquet(1, "Нежность", 3500, ROSES_IMAGE, "Розы"),
        bouquet(2, "Свадебный", 5500, ROMANCE_IMAGE, "Романтика"),
        bouquet(3, "Весенний", 2800, SPRING_IMAGE, "Тюльпаны"),
        bouquet(4, "Элегант", 4200, ROSES_IMAGE, "Розы"),
        bouquet(5, "Праздник", 3800, SPRING_IMAGE, "Микс"),
        bouquet(6, "Романс", 6200, ROMANCE_IMAGE, "Романтика"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_is_a_valid_catalog() {
        let catalog = sample_bouquets();
        assert!(Catalog::new(catalog.products().to_vec()).is_ok());
        assert_eq!(catalog.len(), 6);
    }

    #[test]
    fn fixture_prices() {
        let prices: Vec<u64> = sample_bouquets()
            .products()
            .iter()
            .map(|p| p.price().amount())
            .collect();
        assert_eq!(prices, vec![3500, 5500, 2800, 4200, 3800, 6200]);
    }

    #[test]
    fn images_are_absolute_uris() {
        assert!(
            sample_bouquets()
                .products()
                .iter()
                .all(|p| p.image().starts_with("https://"))
        );
    }
}
