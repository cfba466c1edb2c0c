use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;

use crate::{generate::GenerateSubcommands, interpolate::InterpolateArgs, sample::SampleArgs};

mod generate;
mod interpolate;
mod parsers;
mod sample;
mod spec_file;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the position at one or more instants
    #[command(visible_alias = "i")]
    Interpolate {
        #[command(flatten)]
        args: InterpolateArgs,
    },
    /// Print positions sampled at a fixed step
    Sample {
        #[command(flatten)]
        args: SampleArgs,
    },
    #[command(visible_alias = "g")]
    Generate {
        #[command(subcommand)]
        commands: GenerateSubcommands,
    },
}

fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Interpolate { args }) => interpolate::run(args)?,
        Some(Commands::Sample { args }) => sample::run(args)?,
        Some(Commands::Generate { commands }) => generate::run(commands)?,
        None => {
            tracing::warn!("no command provided, see --help");
        }
    }

    Ok(())
}
