use anyhow::Result;
use clap::Parser;

mod cli;
mod convert_cmd;
mod generate_cmd;
mod path_guard;

use cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::ConvertLegacy(args) => convert_cmd::run_convert_legacy(args),
        Command::Generate(args) => generate_cmd::run_generate(args),
    }
}
