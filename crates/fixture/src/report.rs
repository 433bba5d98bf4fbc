//! Per-day listings.

use std::io::Write;

use serde::Serialize;

use gildedrose_inventory::{Inventory, Item};

pub const HEADER: &str = "name, sellIn, quality";

#[derive(Debug, Serialize)]
struct DayListing<'a> {
    day: u32,
    items: &'a [Item],
}

pub fn write_text(out: &mut impl Write, day: u32, inventory: &Inventory) -> std::io::Result<()> {
    writeln!(out, "-------- day {day} --------")?;
    writeln!(out, "{HEADER}")?;
    for item in inventory {
        writeln!(out, "{item}")?;
    }
    writeln!(out)
}

pub fn write_json(out: &mut impl Write, day: u32, inventory: &Inventory) -> anyhow::Result<()> {
    let listing = DayListing {
        day,
        items: inventory.items(),
    };
    serde_json::to_writer(&mut *out, &listing)?;
    writeln!(out)?;
    Ok(())
}
