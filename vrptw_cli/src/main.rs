use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;

use crate::{generate::GenerateArgs, solve::SolveArgs};

mod generate;
mod parsers;
mod solve;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve an instance file and write the answer next to it
    #[command(visible_alias = "s")]
    Solve {
        #[command(flatten)]
        args: SolveArgs,
    },
    /// Write a batch of random instances
    #[command(visible_alias = "g")]
    Generate {
        #[command(flatten)]
        args: GenerateArgs,
    },
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Commands::Solve { args } => solve::run(args)?,
        Commands::Generate { args } => generate::run(args)?,
    }

    Ok(())
}
