mod cli;
mod config;
mod convert;
mod date_cmd;
mod logging;
mod output;
mod schedule_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Date(args) => date_cmd::run(args),
        Command::Schedule(args) => schedule_cmd::run(args),
    }
}
