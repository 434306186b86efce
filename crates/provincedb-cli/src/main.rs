//! provincedb: command-line interface for provincedb-core
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ provincedb stats
//!
//! - Records for a zip code
//!   $ provincedb zip 10200
//!
//! - Records for a district / province (Thai by default)
//!   $ provincedb district พระนคร
//!   $ provincedb --locale en city bangkok
//!
//! - Distinct names and zips
//!   $ provincedb --locale en cities
//!   $ provincedb zips
//!
//! - Snapshot a custom dataset for fast loading
//!   $ provincedb --input provinces.json.gz build provinces.bin
//!
//! Data source
//! -----------
//!
//! Without `--input` the dataset bundled into `provincedb-core` is used. A
//! custom `.json`/`.json.gz` source gets a bincode cache written next to it
//! on first load; `.bin` inputs are read as snapshots directly.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use provincedb_core::{CompressionMode, Locale, Province, ProvinceDb, ProvinceSearch};
use serde::Serialize;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    let locale: Locale = args.locale.parse()?;
    log::debug!("locale={locale} input={:?}", args.input);

    let owned;
    let db: &ProvinceDb = match &args.input {
        Some(path) => {
            owned = ProvinceDb::load_from_path(path)
                .with_context(|| format!("loading dataset from {path}"))?;
            &owned
        }
        None => bundled()?,
    };

    match args.command {
        Commands::Stats => {
            let stats = db.stats();
            if args.json {
                return print_json(&stats);
            }
            println!("Dataset statistics:");
            println!("  Records: {}", stats.provinces);
            println!("  Zip codes: {}", stats.zips);
            println!("  Districts: {}", stats.districts);
            println!("  Provinces: {}", stats.cities);
        }

        Commands::Zip { zip } => {
            print_records(db.provinces_by_zip(zip.as_str()), locale, args.json, &zip)?;
        }

        Commands::District { name } => {
            print_records(db.provinces_by_district(&name, locale), locale, args.json, &name)?;
        }

        Commands::City { name } => {
            print_records(db.provinces_by_city(&name, locale), locale, args.json, &name)?;
        }

        Commands::Cities => print_list(db.cities(locale), args.json)?,

        Commands::Districts => print_list(db.districts(locale), args.json)?,

        Commands::Zips => print_list(db.zips(), args.json)?,

        Commands::Build { out, no_compress } => {
            let compression = if no_compress {
                CompressionMode::None
            } else {
                CompressionMode::default()
            };
            db.save_with(&out, compression)
                .with_context(|| format!("writing snapshot to {out}"))?;
            println!("Wrote {} records to {out} ({compression:?})", db.len());
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

#[cfg(feature = "json")]
fn bundled() -> anyhow::Result<&'static ProvinceDb> {
    Ok(ProvinceDb::load()?)
}

#[cfg(not(feature = "json"))]
fn bundled() -> anyhow::Result<&'static ProvinceDb> {
    anyhow::bail!("no --input given and the bundled dataset needs the 'json' feature")
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_records(
    records: &[Province],
    locale: Locale,
    json: bool,
    query: &str,
) -> anyhow::Result<()> {
    if json {
        return print_json(records);
    }
    if records.is_empty() {
        println!("No records found for: {query}");
        return Ok(());
    }
    for p in records {
        println!(
            "{}  {} / {} / {}",
            p.zip,
            p.subdistrict_name(locale),
            p.district_name(locale),
            p.city_name(locale)
        );
    }
    Ok(())
}

fn print_list<T: Serialize + std::fmt::Display>(items: &[T], json: bool) -> anyhow::Result<()> {
    if json {
        return print_json(items);
    }
    for item in items {
        println!("{item}");
    }
    Ok(())
}
