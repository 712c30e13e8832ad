use anyhow::Result;
use clap::Parser;
use ipmac_validate::{extract_cmd, logging};

mod cli;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init();

    let json = extract_cmd::extract_json(&cli.file)?;
    println!("{json}");
    Ok(())
}
