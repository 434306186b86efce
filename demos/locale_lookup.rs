//! Locale handling and bulk index access for provincedb-rs
//!
//! This example demonstrates:
//! - Lenient vs strict locale parsing
//! - Walking the whole district index for one locale
//! - Building a database from your own records

use provincedb_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== provincedb-rs Locale Example ===\n");

    let db = ProvinceDb::load()?;

    // Example 1: lenient tags never fail; anything but "th" means English
    println!("--- Example 1: Lenient locale tags ---");
    for tag in ["th", "TH", "en", "fr", ""] {
        let locale = Locale::from_tag(tag);
        println!("{tag:>4?} -> {locale}: {} provinces", db.cities(locale).len());
    }
    println!();

    // Example 2: strict parsing for user input
    println!("--- Example 2: Strict locale parsing ---");
    for tag in ["en", "de"] {
        match tag.parse::<Locale>() {
            Ok(locale) => println!("  {tag}: {locale}"),
            Err(e) => println!("  {tag}: {e}"),
        }
    }
    println!();

    // Example 3: bulk consumers read the index directly
    println!("--- Example 3: District index (en) ---");
    let mut keys: Vec<_> = db.district_map(Locale::En).iter().collect();
    keys.sort_by(|a, b| a.0.cmp(b.0));
    for (key, records) in keys {
        let zips: std::collections::BTreeSet<u32> = records.iter().map(|p| p.zip).collect();
        println!("  {key:<20} {} records, zips {zips:?}", records.len());
    }
    println!();

    // Example 4: an isolated database from custom records
    println!("--- Example 4: Custom records ---");
    let custom: ProvinceDb = db
        .provinces_by_city("ภูเก็ต", None)
        .iter()
        .cloned()
        .collect();
    println!(
        "Phuket only: {} records, districts (th): {}",
        custom.len(),
        custom.districts(None).join(", ")
    );

    Ok(())
}
