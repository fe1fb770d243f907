//! CLI Argument Parsing
//!
//! Global flags (--json, --config, --precision, --verbose) are inherited by
//! all subcommands. Category and material stay plain strings here so that
//! unknown names are reported by the calculator's own validation.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::MAX_PRECISION;

/// garment-impact - environmental savings of digital garments
#[derive(Parser, Debug)]
#[command(name = "garment-impact")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Print one-line JSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (overrides GARMENT_IMPACT_CONFIG and discovery)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Decimal places in text output (0-10)
    #[arg(long, global = true, value_name = "N", value_parser = parse_precision)]
    pub precision: Option<usize>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

fn parse_precision(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(p) if p <= MAX_PRECISION => Ok(p),
        _ => Err(format!("expected an integer from 0 to {}", MAX_PRECISION)),
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the impact of one garment choice
    Calculate {
        /// top, bottom, dress, outerwear, accessory
        #[arg(short, long)]
        category: String,

        /// cotton, polyester, recycled, organic, synthetic-blend
        #[arg(short, long)]
        material: String,

        /// Number of garments
        #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
        quantity: i64,
    },

    /// Compute the combined impact of a JSON list of garments ("-" for stdin)
    Collection {
        /// JSON file containing an array of {category, material, quantity}
        file: PathBuf,
    },

    /// List the effective factor table and equivalent divisors
    Factors {
        /// Only show this category
        #[arg(long)]
        category: Option<String>,

        /// Only show this material
        #[arg(long)]
        material: Option<String>,
    },

    /// Show fashion-industry baseline figures, optionally compared to a garment
    Industry {
        #[arg(long, requires = "material")]
        category: Option<String>,

        #[arg(long, requires = "category")]
        material: Option<String>,

        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        quantity: i64,
    },

    /// Validate configuration and the factor table it produces
    Check,
}
