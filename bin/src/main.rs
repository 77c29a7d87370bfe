//! obligo CLI - Bond list parsing and pricing.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod display;

use display::Format;

#[derive(Parser)]
#[command(name = "obligo")]
#[command(about = "Bond list parsing and pricing toolkit", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a bond list and show its records
    Show {
        /// Path to the comma-delimited bond list
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: Format,

        /// Skip malformed lines instead of failing on the first one
        #[arg(long)]
        skip_bad: bool,
    },

    /// Solve the yield to maturity of every bond in a list
    Yields {
        /// Path to the comma-delimited bond list
        file: PathBuf,

        /// Valuation date (YYYY-MM-DD). Defaults to today.
        #[arg(short, long)]
        asof: Option<String>,
    },

    /// Price a bond from its cash flow terms
    Price {
        /// Nominal (face) amount
        #[arg(short, long, default_value = "100")]
        nominal: f64,

        /// Annual coupon rate as a decimal (e.g. 0.045)
        #[arg(short, long)]
        coupon: f64,

        /// Whole years to maturity
        #[arg(short, long)]
        years: usize,

        /// Flat annual discount rate as a decimal
        #[arg(short, long, conflicts_with = "curve")]
        rate: Option<f64>,

        /// Per-year zero rates, comma-separated, year 1 first
        #[arg(long)]
        curve: Option<String>,

        /// Price at a non-quoted tenor by interpolating on the curve
        #[arg(long, requires = "curve")]
        tenor: Option<f64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Show {
            file,
            format,
            skip_bad,
        } => commands::show::show(&file, format, skip_bad),
        Commands::Yields { file, asof } => commands::yields::yields(&file, asof.as_deref()),
        Commands::Price {
            nominal,
            coupon,
            years,
            rate,
            curve,
            tenor,
        } => commands::price::price(nominal, coupon, years, rate, curve.as_deref(), tenor),
    }
}
