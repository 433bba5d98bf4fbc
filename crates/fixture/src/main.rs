use clap::Parser;

use gildedrose_fixture::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    gildedrose_observability::init_with_format(cli.log_format.into());

    let stdout = std::io::stdout();
    gildedrose_fixture::run(&cli, &mut stdout.lock()).inspect_err(|err| {
        tracing::error!(error = %format!("{err:#}"), "listing failed");
    })
}
