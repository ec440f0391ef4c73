// src/bin/cli.rs
use clap::Parser;
use fondos_scrape::{cli, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = cli::Args::parse();
    let _guard = log::init(&args.log_dir)?;

    cli::run(&args)?;
    Ok(())
}
