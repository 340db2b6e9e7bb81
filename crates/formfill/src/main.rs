mod cli;
mod config;
mod fill;
mod inspect;
mod logging;
mod pack;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let verbose = if cli.verbose {
        true
    } else {
        logging::env_flag()
    };
    logging::init(verbose);
    match cli.command {
        Command::Fill {
            template,
            output,
            job,
        } => fill::run(template, output, job),
        Command::Inspect { template } => inspect::run(template),
        Command::Pack { input, output } => pack::pack(input, output),
        Command::Unpack { template, output } => pack::unpack(template, output),
    }
}
