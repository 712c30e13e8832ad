use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "ipmac-validate")]
#[command(version)]
#[command(
    about = "Extract host name, fixed address and hardware address records from an ISC dhcpd config"
)]
pub struct Cli {
    /// ISC dhcpd config file.
    #[arg(short, long)]
    pub file: PathBuf,
}
