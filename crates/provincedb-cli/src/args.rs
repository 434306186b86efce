use clap::{Parser, Subcommand};

/// CLI arguments for provincedb
#[derive(Debug, Parser)]
#[command(
    name = "provincedb",
    version,
    about = "Look up Thai postal records by zip, district or province"
)]
pub struct CliArgs {
    /// Dataset to load: JSON record array (.json / .json.gz) or a .bin snapshot.
    /// Defaults to the dataset bundled with provincedb-core.
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    /// Locale for name lookups and listings (en or th)
    #[arg(short = 'l', long = "locale", global = true, default_value = "th")]
    pub locale: String,

    /// Print results as JSON
    #[arg(long = "json", global = true)]
    pub json: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the dataset
    Stats,

    /// Records for a zip code
    Zip {
        /// Zip code, e.g. 10200
        zip: String,
    },

    /// Records for a district (amphoe / khet)
    District {
        /// District name (case and surrounding spaces are ignored)
        name: String,
    },

    /// Records for a province
    City {
        /// Province name (case and surrounding spaces are ignored)
        name: String,
    },

    /// List distinct province names
    Cities,

    /// List distinct district names
    Districts,

    /// List distinct zip codes
    Zips,

    /// Write a bincode snapshot of the loaded dataset
    Build {
        /// Output path, e.g. provinces.bin
        out: String,

        /// Skip gzip compression
        #[arg(long = "no-compress")]
        no_compress: bool,
    },
}
