// crates/provincedb-core/src/model/flat.rs
use super::locale::{Field, Locale};
use crate::index::ProvinceIndex;
use crate::traits::NameMatch;
use serde::{Deserialize, Serialize};

/// One postal/administrative record.
///
/// The flat shape of the upstream dataset is kept as-is: a zip can span
/// several subdistricts, and district/city names repeat across records.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Province {
    pub zip: u32,
    pub subdistrict: String,
    pub subdistrict_th: String,
    pub district: String,
    pub district_th: String,
    /// District-level zip; not necessarily equal to `zip`.
    pub district_zip: u32,
    pub city: String,
    pub city_th: String,
}

impl Province {
    /// Raw (un-normalized) value of a localized name column.
    #[inline]
    pub fn field(&self, field: Field, locale: Locale) -> &str {
        match (field, locale) {
            (Field::Subdistrict, Locale::En) => &self.subdistrict,
            (Field::Subdistrict, Locale::Th) => &self.subdistrict_th,
            (Field::District, Locale::En) => &self.district,
            (Field::District, Locale::Th) => &self.district_th,
            (Field::City, Locale::En) => &self.city,
            (Field::City, Locale::Th) => &self.city_th,
        }
    }

    pub fn subdistrict_name(&self, locale: Locale) -> &str {
        self.field(Field::Subdistrict, locale)
    }

    pub fn district_name(&self, locale: Locale) -> &str {
        self.field(Field::District, locale)
    }

    /// Province (changwat) name; called "city" throughout the dataset.
    pub fn city_name(&self, locale: Locale) -> &str {
        self.field(Field::City, locale)
    }

    /// True if the district name matches `name` after trim + case-fold.
    #[inline]
    pub fn is_district_named(&self, name: &str, locale: Locale) -> bool {
        self.is_named(Field::District, name, locale)
    }

    /// True if the city name matches `name` after trim + case-fold.
    #[inline]
    pub fn is_city_named(&self, name: &str, locale: Locale) -> bool {
        self.is_named(Field::City, name, locale)
    }
}

impl NameMatch for Province {
    #[inline]
    fn name_str(&self, field: Field, locale: Locale) -> &str {
        self.field(field, locale)
    }
}

/// The master database: the immutable record list plus every derived index.
///
/// Built once by [`ProvinceDb::new`] (or a loader) and read-only afterwards,
/// so a shared `&ProvinceDb` can be queried from any number of threads.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProvinceDb {
    pub(crate) provinces: Vec<Province>,
    pub(crate) index: ProvinceIndex,
}

impl ProvinceDb {
    /// Explicit factory: takes ownership of the records and eagerly builds
    /// all indices.
    ///
    /// ```rust
    /// use provincedb_core::{Locale, Province, ProvinceDb, ProvinceSearch};
    ///
    /// let db = ProvinceDb::new(vec![Province {
    ///     zip: 10200,
    ///     subdistrict: "Phra Borom Maha Ratchawang".into(),
    ///     subdistrict_th: "พระบรมมหาราชวัง".into(),
    ///     district: "Phra Nakhon".into(),
    ///     district_th: "พระนคร".into(),
    ///     district_zip: 10200,
    ///     city: "Bangkok".into(),
    ///     city_th: "กรุงเทพมหานคร".into(),
    /// }]);
    ///
    /// assert_eq!(db.provinces_by_zip(10200).len(), 1);
    /// assert_eq!(db.provinces_by_city(" BANGKOK ", Locale::En).len(), 1);
    /// ```
    pub fn new(provinces: Vec<Province>) -> Self {
        let index = ProvinceIndex::build(&provinces);
        ProvinceDb { provinces, index }
    }

    /// Read-only view of the derived indices.
    pub fn index(&self) -> &ProvinceIndex {
        &self.index
    }

    pub fn len(&self) -> usize {
        self.provinces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.provinces.is_empty()
    }
}

impl From<Vec<Province>> for ProvinceDb {
    fn from(provinces: Vec<Province>) -> Self {
        ProvinceDb::new(provinces)
    }
}

impl FromIterator<Province> for ProvinceDb {
    fn from_iter<I: IntoIterator<Item = Province>>(iter: I) -> Self {
        ProvinceDb::new(iter.into_iter().collect())
    }
}
