use clap::{Args, Parser, Subcommand};

use crate::config::parse_region_entry;

#[derive(Parser, Debug)]
#[command(name = "retail-calc", version, about = "Retail price calculator")]
pub struct Cli {
    /// Add a region to the tax table for this run (repeatable)
    #[arg(long = "add-region", value_name = "CODE=RATE", value_parser = parse_region_entry, global = true)]
    pub add_regions: Vec<(String, f64)>,

    /// Remove a region from the tax table for this run (repeatable)
    #[arg(long = "remove-region", value_name = "CODE", global = true)]
    pub remove_regions: Vec<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Price an order line: total, discount, tax, final total
    Quote(QuoteArgs),

    /// List the region tax table in effect
    Regions {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show the effective configuration as JSON
    Config,
}

/// Raw quote form fields. Kept as strings so the form rules, not clap,
/// decide what is valid.
#[derive(Args, Debug, Clone)]
pub struct QuoteArgs {
    /// Number of items (positive integer)
    #[arg(short, long, allow_hyphen_values = true)]
    pub quantity: String,

    /// Price per item (positive number)
    #[arg(short, long, allow_hyphen_values = true)]
    pub price: String,

    /// 3-letter region code, case-insensitive
    #[arg(short, long)]
    pub region: String,

    /// Print the breakdown as JSON
    #[arg(long)]
    pub json: bool,
}
