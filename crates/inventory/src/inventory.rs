use serde::{Deserialize, Serialize};

use gildedrose_core::DomainResult;

use crate::item::{Item, NewItem};
use crate::rules;

/// Advance every item in `items` by one day, in order.
pub fn update_all(items: &mut [Item]) {
    tracing::debug!(items = items.len(), "advancing inventory one day");
    for item in items.iter_mut() {
        let (sell_in, quality) = (item.sell_in(), item.quality());
        rules::update(item);
        tracing::trace!(
            item = item.name(),
            category = %item.category(),
            sell_in_before = sell_in,
            quality_before = quality,
            sell_in = item.sell_in(),
            quality = item.quality(),
            "item aged"
        );
    }
}

/// Ordered collection of stocked items.
///
/// Items keep their insertion position for the lifetime of the inventory;
/// updates never reorder, add or remove items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Build from `(name, sell_in, quality)` triples; fails on the first invalid one.
    pub fn from_triples<I, S>(triples: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = (S, i32, i32)>,
        S: Into<String>,
    {
        let items = triples
            .into_iter()
            .map(|(name, sell_in, quality)| Item::new(name, sell_in, quality))
            .collect::<DomainResult<Vec<_>>>()?;
        Ok(Self::new(items))
    }

    pub fn try_from_records(records: impl IntoIterator<Item = NewItem>) -> DomainResult<Self> {
        let items = records
            .into_iter()
            .map(Item::try_from)
            .collect::<DomainResult<Vec<_>>>()?;
        Ok(Self::new(items))
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    /// Advance every item by one day, in place.
    pub fn update_quality(&mut self) {
        update_all(&mut self.items);
    }

    /// Equivalent to `days` successive calls to [`Inventory::update_quality`].
    pub fn advance_days(&mut self, days: u32) {
        for _ in 0..days {
            self.update_quality();
        }
    }

    /// The inventory as it will look tomorrow; `self` is left untouched.
    pub fn advanced(&self) -> Inventory {
        let mut next = self.clone();
        next.update_quality();
        next
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a Item;
    type IntoIter = core::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl FromIterator<Item> for Inventory {
    fn from_iter<T: IntoIterator<Item = Item>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::{BACKSTAGE_PASS_NAME, BRIE_NAME, LEGENDARY_NAME};
    use crate::rules::{LEGENDARY_QUALITY, MAX_QUALITY, MIN_QUALITY};
    use gildedrose_core::DomainError;
    use proptest::prelude::*;

    fn snapshot(inventory: &Inventory) -> Vec<(String, i32, i32)> {
        inventory
            .iter()
            .map(|i| (i.name().to_string(), i.sell_in(), i.quality()))
            .collect()
    }

    #[test]
    fn empty_inventory_is_a_no_op() {
        let mut inventory = Inventory::default();
        inventory.update_quality();
        assert!(inventory.is_empty());

        update_all(&mut []);
    }

    #[test]
    fn updates_every_item_once_in_order() {
        let mut inventory = Inventory::from_triples([
            ("Elixir of the Mongoose", 5, 7),
            (BRIE_NAME, 2, 0),
            (LEGENDARY_NAME, 0, 80),
            (BACKSTAGE_PASS_NAME, 15, 20),
        ])
        .unwrap();

        inventory.update_quality();

        assert_eq!(
            snapshot(&inventory),
            vec![
                ("Elixir of the Mongoose".to_string(), 4, 6),
                (BRIE_NAME.to_string(), 1, 1),
                (LEGENDARY_NAME.to_string(), 0, 80),
                (BACKSTAGE_PASS_NAME.to_string(), 14, 21),
            ]
        );
    }

    #[test]
    fn from_triples_rejects_blank_name() {
        let err = Inventory::from_triples([("Aged Brie", 1, 1), ("  ", 1, 1)]).unwrap_err();
        match err {
            DomainError::InvalidItem(_) => {}
            other => panic!("Expected InvalidItem, got {other:?}"),
        }
    }

    #[test]
    fn records_build_the_same_inventory_as_triples() {
        let from_records = Inventory::try_from_records(vec![
            NewItem::new(BRIE_NAME, 2, 0),
            NewItem::new("Elixir of the Mongoose", 5, 7),
        ])
        .unwrap();
        let from_triples =
            Inventory::from_triples([(BRIE_NAME, 2, 0), ("Elixir of the Mongoose", 5, 7)]).unwrap();
        assert_eq!(from_records, from_triples);
    }

    #[test]
    fn advanced_leaves_original_untouched() {
        let inventory = Inventory::from_triples([(BRIE_NAME, 2, 0)]).unwrap();
        let tomorrow = inventory.advanced();

        assert_eq!(inventory.get(0).map(|i| (i.sell_in(), i.quality())), Some((2, 0)));
        assert_eq!(tomorrow.get(0).map(|i| (i.sell_in(), i.quality())), Some((1, 1)));
        assert!(inventory.get(1).is_none());
    }

    #[test]
    fn serializes_as_a_plain_list() {
        let inventory = Inventory::from_triples([(BRIE_NAME, 2, 0)]).unwrap();
        let json = serde_json::to_string(&inventory).unwrap();
        assert_eq!(
            json,
            r#"[{"name":"Aged Brie","sellIn":2,"quality":0,"category":"brie"}]"#
        );
        let back: Inventory = serde_json::from_str(&json).unwrap();
        assert_eq!(back, inventory);
    }

    fn arb_item() -> impl Strategy<Value = Item> {
        (
            prop::sample::select(vec![
                BRIE_NAME,
                BACKSTAGE_PASS_NAME,
                LEGENDARY_NAME,
                "+5 Dexterity Vest",
                "Conjured Mana Cake",
            ]),
            -30i32..30,
            0i32..=50,
        )
            .prop_map(|(name, sell_in, quality)| {
                let quality = if name == LEGENDARY_NAME { LEGENDARY_QUALITY } else { quality };
                Item::new(name, sell_in, quality).unwrap()
            })
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: n passes equal n independent daily advances.
        #[test]
        fn repeated_passes_compose(items in prop::collection::vec(arb_item(), 0..12), days in 0u32..40) {
            let mut batched = Inventory::new(items.clone());
            batched.advance_days(days);

            let mut stepped = Inventory::new(items);
            for _ in 0..days {
                stepped = stepped.advanced();
            }

            prop_assert_eq!(batched, stepped);
        }

        /// Property: each item evolves independently of its neighbours.
        #[test]
        fn items_are_independent(items in prop::collection::vec(arb_item(), 1..12)) {
            let mut together = Inventory::new(items.clone());
            together.update_quality();

            for (index, item) in items.into_iter().enumerate() {
                let mut alone = item;
                rules::update(&mut alone);
                prop_assert_eq!(Some(&alone), together.get(index));
            }
        }

        /// Property: order and names survive any number of passes, and quality stays legal.
        #[test]
        fn order_and_range_are_preserved(items in prop::collection::vec(arb_item(), 0..12), days in 0u32..60) {
            let names: Vec<String> = items.iter().map(|i| i.name().to_string()).collect();
            let mut inventory = Inventory::new(items);
            inventory.advance_days(days);

            let after: Vec<String> = inventory.iter().map(|i| i.name().to_string()).collect();
            prop_assert_eq!(names, after);
            for item in &inventory {
                if item.name() == LEGENDARY_NAME {
                    prop_assert_eq!(item.quality(), LEGENDARY_QUALITY);
                } else {
                    prop_assert!((MIN_QUALITY..=MAX_QUALITY).contains(&item.quality()));
                }
            }
        }
    }
}
