//! Daily aging rules.
//!
//! One call to [`update`] advances a single item by one day: the sell-by
//! countdown moves first, then the category rule computes the new quality from
//! the already-decremented `sell_in`, then the result is clamped.

use crate::category::Category;
use crate::item::Item;

pub const MIN_QUALITY: i32 = 0;
pub const MAX_QUALITY: i32 = 50;
pub const LEGENDARY_QUALITY: i32 = 80;

/// Advance one item by one day, in place.
pub fn update(item: &mut Item) {
    adjust_sell_in(item);
    item.quality = next_quality(item);
}

fn adjust_sell_in(item: &mut Item) {
    if item.category().has_expiry_date() {
        item.sell_in = item.sell_in.saturating_sub(1);
    }
}

/// Quality after today's change, clamped. Legendary bypasses the clamp.
fn next_quality(item: &Item) -> i32 {
    let quality = raw_quality(item);
    match item.category() {
        Category::Legendary => quality,
        _ => clamp_quality(quality),
    }
}

fn raw_quality(item: &Item) -> i32 {
    match item.category() {
        Category::Legendary => LEGENDARY_QUALITY,
        Category::BackstagePass => {
            if item.sell_date_passed() {
                0
            } else {
                item.quality.saturating_add(backstage_increment(item.sell_in))
            }
        }
        Category::Brie => item.quality.saturating_add(velocity(item)),
        Category::Ordinary => item.quality.saturating_sub(velocity(item)),
    }
}

/// Per-day magnitude of change for Brie and ordinary items: doubles once the
/// sell-by date has passed.
pub fn velocity(item: &Item) -> i32 {
    if item.sell_date_passed() { 2 } else { 1 }
}

/// Daily gain of a backstage pass given the (post-decrement) days left.
pub fn backstage_increment(sell_in: i32) -> i32 {
    let mut increment = 1;
    if sell_in < 10 {
        increment += 1;
    }
    if sell_in < 5 {
        increment += 1;
    }
    increment
}

pub fn clamp_quality(quality: i32) -> i32 {
    quality.clamp(MIN_QUALITY, MAX_QUALITY)
}
