//! Inventory domain module.
//!
//! This crate contains the daily aging rules for stocked items, implemented
//! purely as deterministic domain logic (no IO, no storage).

pub mod category;
pub mod inventory;
pub mod item;
pub mod rules;

pub use category::{BACKSTAGE_PASS_NAME, BRIE_NAME, Category, LEGENDARY_NAME};
pub use inventory::{Inventory, update_all};
pub use item::{Item, NewItem};
pub use rules::{LEGENDARY_QUALITY, MAX_QUALITY, MIN_QUALITY, update};
