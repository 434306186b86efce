// crates/provincedb-core/src/model/search.rs
use super::flat::{Province, ProvinceDb};
use super::locale::Locale;
use crate::common::DbStats;
use crate::index::ProvinceMap;
use crate::text::normalize_key;
use crate::traits::{ProvinceSearch, ZipQuery};

/// Shared lookup for the district/city indices: normalize, guard the empty
/// key (it would otherwise hit a bucket of blank names), then probe the map.
fn lookup_normalized<'a>(map: &'a ProvinceMap, name: &str) -> &'a [Province] {
    let key = normalize_key(name);
    if key.is_empty() {
        return &[];
    }
    map.get(&key).map(Vec::as_slice).unwrap_or(&[])
}

impl ProvinceSearch for ProvinceDb {
    fn stats(&self) -> DbStats {
        DbStats {
            provinces: self.provinces.len(),
            zips: self.index.zips.len(),
            districts: self.index.districts.th.len(),
            cities: self.index.cities.th.len(),
        }
    }

    fn provinces(&self) -> &[Province] {
        &self.provinces
    }

    fn provinces_by_zip<Z: ZipQuery>(&self, zip: Z) -> &[Province] {
        zip.zip_key()
            .and_then(|key| self.index.by_zip.get(&*key))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn provinces_by_district<L: Into<Option<Locale>>>(
        &self,
        district: &str,
        locale: L,
    ) -> &[Province] {
        let map = self.index.by_district.get(Locale::resolve(locale));
        lookup_normalized(map, district)
    }

    fn provinces_by_city<L: Into<Option<Locale>>>(&self, city: &str, locale: L) -> &[Province] {
        let map = self.index.by_city.get(Locale::resolve(locale));
        lookup_normalized(map, city)
    }

    fn cities<L: Into<Option<Locale>>>(&self, locale: L) -> &[String] {
        self.index.cities.get(Locale::resolve(locale))
    }

    fn districts<L: Into<Option<Locale>>>(&self, locale: L) -> &[String] {
        self.index.districts.get(Locale::resolve(locale))
    }

    fn zips(&self) -> &[u32] {
        &self.index.zips
    }

    fn zip_map(&self) -> &ProvinceMap {
        &self.index.by_zip
    }

    fn district_map<L: Into<Option<Locale>>>(&self, locale: L) -> &ProvinceMap {
        self.index.by_district.get(Locale::resolve(locale))
    }

    fn city_map<L: Into<Option<Locale>>>(&self, locale: L) -> &ProvinceMap {
        self.index.by_city.get(Locale::resolve(locale))
    }
}
