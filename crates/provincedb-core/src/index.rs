// crates/provincedb-core/src/index.rs

//! # Index Builder
//!
//! Derives the lookup structures from the flat record list. Every builder is
//! a single pass over the records and keeps record order inside each group;
//! nothing is sorted and duplicates are retained.
//!
//! Note the deliberate asymmetry between the two families:
//! - the field indices group by the *normalized* value (trim + lowercase),
//! - the unique lists deduplicate the *raw* value.
//!
//! So `"Bangkok"` and `" bangkok"` share one index bucket but are two entries
//! in [`build_unique_list`].

use crate::model::{Field, Locale, LocaleTable, Province};
use crate::text::{normalize_key, zip_key};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Index key -> records sharing that key, in dataset order.
pub type ProvinceMap = HashMap<String, Vec<Province>>;

/// Groups records by the decimal string of their `zip`.
pub fn build_zip_index(records: &[Province]) -> ProvinceMap {
    let mut out = ProvinceMap::new();
    for p in records {
        out.entry(zip_key(p.zip)).or_default().push(p.clone());
    }
    out
}

/// Groups records by the normalized value of `field` in `locale`.
pub fn build_field_index(records: &[Province], field: Field, locale: Locale) -> ProvinceMap {
    let mut out = ProvinceMap::new();
    for p in records {
        out.entry(normalize_key(p.field(field, locale)))
            .or_default()
            .push(p.clone());
    }
    out
}

/// Distinct raw values of `field` in `locale`, first-occurrence order.
pub fn build_unique_list(records: &[Province], field: Field, locale: Locale) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut out = Vec::new();
    for p in records {
        let value = p.field(field, locale);
        if seen.insert(value) {
            out.push(value.to_string());
        }
    }
    out
}

/// Distinct zips, first-occurrence order.
pub fn build_unique_zips(records: &[Province]) -> Vec<u32> {
    let mut seen = HashSet::new();
    records
        .iter()
        .map(|p| p.zip)
        .filter(|zip| seen.insert(*zip))
        .collect()
}

/// Every secondary structure derived from the record list.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ProvinceIndex {
    pub by_zip: ProvinceMap,
    pub by_district: LocaleTable<ProvinceMap>,
    pub by_city: LocaleTable<ProvinceMap>,
    pub cities: LocaleTable<Vec<String>>,
    pub districts: LocaleTable<Vec<String>>,
    pub zips: Vec<u32>,
}

impl ProvinceIndex {
    /// Eagerly builds all indices and lists. Never fails.
    pub fn build(records: &[Province]) -> Self {
        let index = ProvinceIndex {
            by_zip: build_zip_index(records),
            by_district: LocaleTable::from_fn(|l| build_field_index(records, Field::District, l)),
            by_city: LocaleTable::from_fn(|l| build_field_index(records, Field::City, l)),
            cities: LocaleTable::from_fn(|l| build_unique_list(records, Field::City, l)),
            districts: LocaleTable::from_fn(|l| build_unique_list(records, Field::District, l)),
            zips: build_unique_zips(records),
        };

        log::debug!(
            "Built province index: {} records, {} zips, {} districts, {} cities",
            records.len(),
            index.zips.len(),
            index.districts.th.len(),
            index.cities.th.len()
        );

        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(zip: u32, sub: &str, district: &str, district_th: &str, city: &str) -> Province {
        Province {
            zip,
            subdistrict: sub.to_string(),
            subdistrict_th: format!("{sub}-th"),
            district: district.to_string(),
            district_th: district_th.to_string(),
            district_zip: zip,
            city: city.to_string(),
            city_th: format!("{}-th", city.trim().to_lowercase()),
        }
    }

    fn sample() -> Vec<Province> {
        vec![
            record(10200, "A", "Phra Nakhon", "พระนคร", "Bangkok"),
            record(10300, "B", "Dusit", "ดุสิต", "Bangkok"),
            record(10200, "C", "Phra Nakhon", "พระนคร", "Bangkok"),
            record(50200, "D", " phra nakhon ", "พระนคร ", "bangkok"),
        ]
    }

    #[test]
    fn zip_index_groups_in_record_order() {
        let idx = build_zip_index(&sample());
        let subs: Vec<_> = idx["10200"].iter().map(|p| p.subdistrict.as_str()).collect();
        assert_eq!(subs, ["A", "C"]);
        assert_eq!(idx.len(), 3);
        assert!(!idx.contains_key("10201"));
    }

    #[test]
    fn field_index_collapses_case_and_padding() {
        let records = sample();
        let en = build_field_index(&records, Field::District, Locale::En);
        let subs: Vec<_> = en["phra nakhon"].iter().map(|p| p.subdistrict.as_str()).collect();
        assert_eq!(subs, ["A", "C", "D"]);

        let th = build_field_index(&records, Field::District, Locale::Th);
        assert_eq!(th["พระนคร"].len(), 3);
        assert_eq!(th["ดุสิต"].len(), 1);
    }

    #[test]
    fn field_index_keeps_duplicate_records() {
        let mut records = sample();
        records.push(records[0].clone());
        let idx = build_field_index(&records, Field::City, Locale::En);
        assert_eq!(idx["bangkok"].len(), 5);
    }

    #[test]
    fn unique_list_dedups_raw_values_only() {
        let records = sample();
        let cities = build_unique_list(&records, Field::City, Locale::En);
        // "Bangkok" and "bangkok" collapse in the index but not here.
        assert_eq!(cities, ["Bangkok", "bangkok"]);
        assert_eq!(
            build_field_index(&records, Field::City, Locale::En).len(),
            1
        );

        let districts = build_unique_list(&records, Field::District, Locale::Th);
        assert_eq!(districts, ["พระนคร", "ดุสิต", "พระนคร "]);
    }

    #[test]
    fn unique_zips_first_occurrence_order() {
        assert_eq!(build_unique_zips(&sample()), [10200, 10300, 50200]);
    }

    #[test]
    fn empty_records_build_empty_index() {
        let idx = ProvinceIndex::build(&[]);
        assert!(idx.by_zip.is_empty());
        assert!(idx.by_city.get(Locale::Th).is_empty());
        assert!(idx.districts.get(Locale::En).is_empty());
        assert!(idx.zips.is_empty());
    }

    #[test]
    fn build_is_deterministic() {
        let records = sample();
        let a = ProvinceIndex::build(&records);
        let b = ProvinceIndex::build(&records);
        assert_eq!(a.by_zip, b.by_zip);
        assert_eq!(a.by_district, b.by_district);
        assert_eq!(a.cities, b.cities);
        assert_eq!(a.zips, b.zips);
    }
}
