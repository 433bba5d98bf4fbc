//! Opening stock: the built-in list, or one loaded from a JSON file.

use std::path::Path;

use anyhow::Context;

use gildedrose_core::DomainResult;
use gildedrose_inventory::{BACKSTAGE_PASS_NAME, BRIE_NAME, Inventory, LEGENDARY_NAME, NewItem};

/// The shop's standard opening stock.
pub fn standard() -> DomainResult<Inventory> {
    Inventory::from_triples([
        ("+5 Dexterity Vest", 10, 20),
        (BRIE_NAME, 2, 0),
        ("Elixir of the Mongoose", 5, 7),
        (LEGENDARY_NAME, 0, 80),
        (LEGENDARY_NAME, -1, 80),
        (BACKSTAGE_PASS_NAME, 15, 20),
        (BACKSTAGE_PASS_NAME, 10, 49),
        (BACKSTAGE_PASS_NAME, 5, 49),
        // Conjured items have no rule of their own.
        ("Conjured Mana Cake", 3, 6),
    ])
}

/// Parse a JSON array of `{ "name", "sellIn", "quality" }` records.
pub fn parse(json: &str) -> anyhow::Result<Inventory> {
    let records: Vec<NewItem> = serde_json::from_str(json).context("malformed stock JSON")?;
    Ok(Inventory::try_from_records(records)?)
}

pub fn load(path: &Path) -> anyhow::Result<Inventory> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read stock file {}", path.display()))?;
    let inventory =
        parse(&json).with_context(|| format!("invalid stock file {}", path.display()))?;
    tracing::info!(path = %path.display(), items = inventory.len(), "loaded stock");
    Ok(inventory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gildedrose_inventory::Category;

    #[test]
    fn standard_stock_has_every_category() {
        let stock = standard().unwrap();
        assert_eq!(stock.len(), 9);
        for category in [
            Category::Legendary,
            Category::Brie,
            Category::BackstagePass,
            Category::Ordinary,
        ] {
            assert!(stock.iter().any(|i| i.category() == category), "{category} missing");
        }
    }

    #[test]
    fn parse_reads_camel_case_records() {
        let stock = parse(r#"[{ "name": "Aged Brie", "sellIn": 2, "quality": 0 }]"#).unwrap();
        let brie = stock.get(0).unwrap();
        assert_eq!((brie.name(), brie.sell_in(), brie.quality()), ("Aged Brie", 2, 0));
    }

    #[test]
    fn parse_rejects_blank_names() {
        let err = parse(r#"[{ "name": " ", "sellIn": 2, "quality": 0 }]"#).unwrap_err();
        assert!(format!("{err:#}").contains("invalid item"), "{err:#}");
    }

    #[test]
    fn parse_rejects_malformed_json() {
        let err = parse(r#"[{ "name": "Aged Brie" }]"#).unwrap_err();
        assert!(err.to_string().contains("malformed stock JSON"));
    }
}
