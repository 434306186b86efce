//! Error handling example for provincedb-rs
//!
//! Lookups never fail (a miss is an empty slice); only loading can.

use provincedb_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== provincedb-rs Error Handling Example ===\n");

    // Example 1: Handling load errors
    println!("--- Example 1: Loading a missing dataset ---");
    match ProvinceDb::load_from_path("does/not/exist.json") {
        Ok(db) => println!("  unexpectedly loaded {} records", db.len()),
        Err(e) => println!("  ✗ {e}"),
    }
    println!();

    let db = ProvinceDb::load()?;

    // Example 2: misses are empty, not errors
    println!("--- Example 2: Lookups that match nothing ---");
    for zip in ["99999", "", "abc", "010200"] {
        println!("  zip {zip:?}: {} records", db.provinces_by_zip(zip).len());
    }
    println!("  zip -1: {} records", db.provinces_by_zip(-1).len());
    for name in ["", "   ", "Atlantis"] {
        println!(
            "  district {name:?}: {} records",
            db.provinces_by_district(name, Locale::En).len()
        );
    }
    println!();

    // Example 3: strict locale parsing is the only fallible query input
    println!("--- Example 3: Strict locale parsing ---");
    match "jp".parse::<Locale>() {
        Ok(locale) => println!("  parsed {locale}"),
        Err(e) => println!("  ✗ {e}"),
    }

    Ok(())
}
