//! Normalized index grouping vs raw unique-list dedup.
//!
//! The two deliberately disagree: lookups fold case and padding, listings
//! keep every distinct raw spelling.

use provincedb_core::prelude::*;

fn record(sub: &str, district: &str, city: &str) -> Province {
    Province {
        zip: 10400,
        subdistrict: sub.to_string(),
        subdistrict_th: sub.to_string(),
        district: district.to_string(),
        district_th: district.to_string(),
        district_zip: 10400,
        city: city.to_string(),
        city_th: city.to_string(),
    }
}

fn db() -> ProvinceDb {
    vec![
        record("Phaya Thai", "Phaya Thai", "Bangkok"),
        record("Sam Sen Nai", "Phaya Thai", "bangkok"),
        record("Thanon Phaya Thai", " Phaya Thai ", "BANGKOK "),
    ]
    .into_iter()
    .collect()
}

#[test]
fn index_collapses_spellings_into_one_bucket() {
    let db = db();
    assert_eq!(db.city_map(Locale::En).len(), 1);
    assert_eq!(db.provinces_by_city("bangkok", Locale::En).len(), 3);
    assert_eq!(db.provinces_by_district("PHAYA THAI", Locale::En).len(), 3);
}

#[test]
fn unique_list_keeps_each_raw_spelling() {
    let db = db();
    assert_eq!(db.cities(Locale::En), ["Bangkok", "bangkok", "BANGKOK "]);
    assert_eq!(db.districts(Locale::En), ["Phaya Thai", " Phaya Thai "]);
    assert_eq!(db.stats().cities, 3);
}

#[test]
fn duplicate_records_are_retained() {
    let dup = record("Phaya Thai", "Phaya Thai", "Bangkok");
    let db = ProvinceDb::new(vec![dup.clone(), dup]);
    assert_eq!(db.provinces_by_zip(10400).len(), 2);
    assert_eq!(db.cities(Locale::En), ["Bangkok"]);
    assert_eq!(db.zips(), [10400]);
}

#[test]
fn name_match_uses_the_index_rule() {
    let p = record("Phaya Thai", " Phaya Thai ", "BANGKOK ");
    assert!(p.is_city_named("bangkok", Locale::En));
    assert!(p.is_district_named("phaya thai", Locale::Th));
    assert!(p.is_named(Field::Subdistrict, "PHAYA THAI", Locale::En));
    assert!(!p.is_city_named("bang kok", Locale::En));
}
