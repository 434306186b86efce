// crates/provincedb-core/src/loader/json.rs

// ---------------------------------------------------------------------------
// FILE GUARD: This entire file is skipped if 'json' feature is missing.
// ---------------------------------------------------------------------------
#![cfg(feature = "json")]

use super::common_io;
use crate::error::Result;
use crate::model::{Province, ProvinceDb};
use std::io::Read;
use std::path::Path;

impl ProvinceDb {
    /// Parses a JSON array of records and builds the indices.
    ///
    /// Record order in the array becomes the dataset order every lookup and
    /// listing preserves.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let records: Vec<Province> = serde_json::from_reader(reader)?;
        Ok(Self::new(records))
    }

    /// ```rust
    /// use provincedb_core::{ProvinceDb, ProvinceSearch};
    ///
    /// let db = ProvinceDb::from_json_str(r#"[{
    ///     "zip": 10300, "subdistrict": "Dusit", "subdistrict_th": "ดุสิต",
    ///     "district": "Dusit", "district_th": "ดุสิต", "district_zip": 10300,
    ///     "city": "Bangkok", "city_th": "กรุงเทพมหานคร"
    /// }]"#).unwrap();
    /// assert_eq!(db.zips(), [10300]);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: Vec<Province> = serde_json::from_str(json)?;
        Ok(Self::new(records))
    }

    /// Reads a `.json` or `.json.gz` record array from disk, no caching.
    pub fn load_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let db = Self::from_json_reader(common_io::open_stream(path)?)?;
        log::info!("Loaded {} province records from {}", db.len(), path.display());
        Ok(db)
    }
}
