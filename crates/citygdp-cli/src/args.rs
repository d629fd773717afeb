use clap::{Parser, Subcommand};

/// CLI arguments for citygdp
#[derive(Debug, Parser)]
#[command(
    name = "citygdp",
    version,
    about = "CLI for exploring and comparing city GDP figures"
)]
pub struct CliArgs {
    /// Path to a dataset JSON (or .json.gz with the `compact` feature). Default: embedded dataset
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    /// Fetch the dataset from a URL instead of reading a file
    #[cfg(feature = "fetch")]
    #[arg(long = "url", global = true, conflicts_with = "input")]
    pub url: Option<String>,

    /// Optional comma-separated list of regions to load (e.g. 华东,south)
    #[arg(short = 'r', long = "regions", global = true)]
    pub regions: Option<String>,

    /// Unit of the dataset's population field: ten-thousand (万人) or persons
    #[arg(long = "population-unit", global = true, default_value = "ten-thousand")]
    pub population_unit: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the dashboard headline figures
    Stats,

    /// List cities, optionally filtered and sorted
    Cities {
        /// Substring of the Chinese or English name (case-insensitive)
        #[arg(short, long, default_value = "")]
        search: String,

        /// Region label or slug (e.g. 华南, south)
        #[arg(long)]
        region: Option<String>,

        /// gdp-desc, gdp-asc, growth-desc or name
        #[arg(long)]
        sort: Option<String>,
    },

    /// Show one city with its yearly growth table
    City {
        /// City id, or its Chinese/English name
        id: String,
    },

    /// Compare 2 to 4 cities side by side
    Compare {
        /// City ids in selection order
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// GDP ranking and the trend series of the largest economies
    Top {
        /// Number of trend series
        #[arg(short = 'n', long, default_value_t = 5)]
        n: usize,
    },
}
