use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "formfill", about = "fill a document template with prepared answers")]
pub struct Cli {
    #[arg(long, global = true, action = ArgAction::SetTrue)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    Fill {
        template: String,
        #[arg(long)]
        output: String,
        #[arg(long, default_value = "fill_job.yaml")]
        job: String,
    },
    Inspect {
        template: String,
    },
    Pack {
        input: String,
        #[arg(long)]
        output: String,
    },
    Unpack {
        template: String,
        #[arg(long)]
        output: String,
    },
}
