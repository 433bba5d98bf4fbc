//! Day-by-day stock listing for the Gilded Rose inn.
//!
//! Builds the opening stock, prints it, ages it one day, and repeats.

pub mod cli;
pub mod report;
pub mod stock;

use std::io::Write;

pub use cli::{Cli, ListingFormat};

/// Run the listing for `cli.days` days, writing to `out`.
pub fn run(cli: &Cli, out: &mut impl Write) -> anyhow::Result<()> {
    let mut inventory = match &cli.inventory {
        Some(path) => stock::load(path)?,
        None => stock::standard()?,
    };

    tracing::info!(days = cli.days, items = inventory.len(), "starting listing");

    for day in 0..cli.days {
        match cli.format {
            ListingFormat::Text => report::write_text(&mut *out, day, &inventory)?,
            ListingFormat::Json => report::write_json(&mut *out, day, &inventory)?,
        }
        inventory.update_quality();
    }

    out.flush()?;
    Ok(())
}
