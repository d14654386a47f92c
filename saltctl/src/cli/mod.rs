mod decode;
mod encode;
mod hex;

use anyhow::Result;
use clap::{Parser, Subcommand};
use decode::DecodeCommand;
use encode::EncodeCommand;
use hex::HexCommand;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    color: colorchoice_clap::Color,

    #[command(subcommand)]
    command: Commands,

    /// Output plain JSON without color
    #[arg(short, long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    Decode(DecodeCommand),
    Encode(EncodeCommand),
    Hex(HexCommand),
}

pub fn execute() -> Result<()> {
    let cli = Cli::parse();

    cli.color.write_global();

    match &cli.command {
        Commands::Decode(cmd) => cmd.execute(&cli),
        Commands::Encode(cmd) => cmd.execute(&cli),
        Commands::Hex(cmd) => cmd.execute(&cli),
    }
}
