//! CLI for COMMAREA layouts.
//!
//! Encodes JSON records into the fixed-width buffers a transaction program
//! expects, decodes reply buffers back to JSON, and prints the byte map of a
//! layout file.
//!
//! # Examples
//!
//! ```bash
//! # Show field offsets
//! commarea map customer.toml
//!
//! # JSON record to buffer, as hex
//! commarea encode customer.toml customer.json --hex
//!
//! # Buffer to JSON, in CP037
//! commarea decode customer.toml reply.bin --code-page CP037
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use miette::Result;

mod commands;
mod json;

#[derive(Parser, Debug)]
#[command(name = "commarea")]
#[command(author, version, about = "COMMAREA record codec", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the byte map of a layout
    Map {
        /// Layout file (TOML)
        #[arg(value_name = "LAYOUT")]
        layout: PathBuf,
    },

    /// Encode a JSON record into a buffer
    Encode {
        /// Layout file (TOML)
        #[arg(value_name = "LAYOUT")]
        layout: PathBuf,

        /// JSON object keyed by field name
        #[arg(value_name = "RECORD")]
        record: PathBuf,

        /// Output file path (stdout if omitted)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        buffer: BufferArgs,
    },

    /// Decode a buffer into a JSON record
    Decode {
        /// Layout file (TOML)
        #[arg(value_name = "LAYOUT")]
        layout: PathBuf,

        /// Buffer file
        #[arg(value_name = "BUFFER")]
        buffer_file: PathBuf,

        #[command(flatten)]
        buffer: BufferArgs,
    },
}

/// Buffer format options shared by encode and decode.
#[derive(Args, Debug)]
pub struct BufferArgs {
    /// Buffer is hex text instead of raw bytes
    #[arg(long)]
    pub hex: bool,

    /// Code page name or CCSID (CP1047, IBM-037, 500, ...)
    #[arg(long, value_name = "CODE_PAGE")]
    pub code_page: Option<String>,

    /// Gateway configuration supplying the code page
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so encoded buffers and JSON stay clean on stdout.
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Map { layout } => commands::map::run(layout),
        Commands::Encode {
            layout,
            record,
            output,
            buffer,
        } => commands::encode::run(layout, record, output, buffer),
        Commands::Decode {
            layout,
            buffer_file,
            buffer,
        } => commands::decode::run(layout, buffer_file, buffer),
    }
}
