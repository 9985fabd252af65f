//! rotsort CLI - Burrows-Wheeler and Move-to-Front transforms
//!
//! Reads a whole input into memory, applies one reversible stage (or the
//! combined pipeline) and writes the transformed bytes.

mod commands;
mod utils;

use clap::{Args, Parser, Subcommand};
use commands::{cmd_info, cmd_transform};
use rotsort_bwt::{BwtStage, MtfStage, Pipeline, RankerConfig};
use rotsort_core::Direction;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "rotsort")]
#[command(
    author,
    version,
    about = "Burrows-Wheeler and Move-to-Front transforms"
)]
#[command(long_about = "
rotsort applies the reversible block-sorting front end of a compressor.
BWT output is a 32-bit big-endian first-row index followed by the
transformed bytes; MTF output is one index byte per input byte.

Examples:
  rotsort bwt input.txt -o input.bwt
  rotsort bwt -d input.bwt -o input.txt
  rotsort mtf input.bwt -o input.mtf
  rotsort pipe input.txt -o input.bm
  rotsort pipe -d input.bm -o input.txt
  cat input.txt | rotsort bwt | rotsort mtf > input.bm
  rotsort info input.txt --json
")]
struct Cli {
    /// Log progress to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Burrows-Wheeler transform
    Bwt(StageArgs),

    /// Move-to-front encoding
    Mtf(StageArgs),

    /// BWT followed by MTF
    #[command(alias = "p")]
    Pipe(StageArgs),

    /// Show transform statistics for an input
    #[command(alias = "i")]
    Info {
        /// Input file ("-" for stdin)
        #[arg(default_value = utils::STDIO)]
        input: PathBuf,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,

        /// Rotations below this count are insertion sorted
        #[arg(long, default_value_t = RankerConfig::DEFAULT.insertion_cutoff)]
        cutoff: usize,
    },
}

#[derive(Args)]
struct StageArgs {
    /// Input file ("-" for stdin)
    #[arg(default_value = utils::STDIO)]
    input: PathBuf,

    /// Output file ("-" for stdout)
    #[arg(short, long, default_value = utils::STDIO)]
    output: PathBuf,

    /// Run the inverse transform
    #[arg(short = 'd', long, alias = "decode")]
    inverse: bool,

    /// Rotations below this count are insertion sorted
    #[arg(long, default_value_t = RankerConfig::DEFAULT.insertion_cutoff)]
    cutoff: usize,
}

impl StageArgs {
    fn direction(&self) -> Direction {
        Direction::from_inverse(self.inverse)
    }

    fn config(&self) -> RankerConfig {
        RankerConfig::new(self.cutoff)
    }
}

fn init_logging(verbose: bool) -> anyhow::Result<()> {
    let default = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .event_format(fmt::format().compact())
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .try_init()?;
    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    init_logging(cli.verbose)?;

    match cli.command {
        Commands::Bwt(args) => cmd_transform(
            &BwtStage::new(args.config()),
            args.direction(),
            &args.input,
            &args.output,
        ),
        Commands::Mtf(args) => {
            cmd_transform(&MtfStage, args.direction(), &args.input, &args.output)
        }
        Commands::Pipe(args) => cmd_transform(
            &Pipeline::new(args.config()),
            args.direction(),
            &args.input,
            &args.output,
        ),
        Commands::Info {
            input,
            json,
            cutoff,
        } => cmd_info(&input, json, RankerConfig::new(cutoff)),
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
