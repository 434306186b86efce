//! Basic usage example for provincedb-rs
//!
//! This example demonstrates how to:
//! - Load the bundled dataset
//! - Look records up by zip, district and province
//! - List distinct names and zips

use provincedb_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== provincedb-rs Basic Usage Example ===\n");

    println!("Loading province dataset...");
    let db = ProvinceDb::load()?;
    let stats = db.stats();
    println!(
        "✓ {} records, {} zips, {} districts, {} provinces\n",
        stats.provinces, stats.zips, stats.districts, stats.cities
    );

    // Example 1: zip lookup, number or string
    println!("--- Example 1: Records for zip 10200 ---");
    for p in db.provinces_by_zip(10200) {
        println!("{} ({}) - {}", p.subdistrict, p.subdistrict_th, p.district);
    }
    assert_eq!(db.provinces_by_zip("10200"), db.provinces_by_zip(10200));
    println!();

    // Example 2: district lookup, Thai by default
    println!("--- Example 2: District พระนคร ---");
    let phra_nakhon = db.provinces_by_district("พระนคร", None);
    println!("{} subdistricts", phra_nakhon.len());
    println!();

    // Example 3: province lookup in English, case and padding ignored
    println!("--- Example 3: Province ' chiang MAI ' (en) ---");
    for p in db.provinces_by_city(" chiang MAI ", Locale::En) {
        println!("{}  {}", p.zip, p.subdistrict);
    }
    println!();

    // Example 4: listings
    println!("--- Example 4: Listings ---");
    println!("Provinces (th): {}", db.cities(None).join(", "));
    println!("Provinces (en): {}", db.cities(Locale::En).join(", "));
    println!("Districts (en): {}", db.districts(Locale::En).join(", "));
    let zips: Vec<String> = db.zips().iter().map(u32::to_string).collect();
    println!("Zips: {}", zips.join(", "));

    println!("\n=== Example completed successfully ===");
    Ok(())
}
