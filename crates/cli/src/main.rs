use clap::Parser;

use stockworth_cli::cli::Cli;
use stockworth_cli::config::Settings;

fn main() -> anyhow::Result<()> {
    stockworth_observability::init();

    let cli = Cli::parse();
    let settings = Settings::from_env();

    let output = stockworth_cli::run(cli, &settings)?;
    println!("{output}");
    Ok(())
}
