// crates/provincedb-core/src/loader/mod.rs

//! # Data Loader
//!
//! The record list is supplied from outside the index layer. This module is
//! the boundary: it reads JSON record arrays or bincode snapshots (optionally
//! gzipped) and hands the records to [`ProvinceDb::new`].

use crate::error::Result;
use crate::model::ProvinceDb;
#[cfg(feature = "json")]
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

mod builder;
pub mod common_io;
mod json;
mod standard;

pub use standard::CompressionMode;

/// Process-wide instance, built once from the bundled dataset.
#[cfg(feature = "json")]
static PROVINCE_DB: OnceCell<ProvinceDb> = OnceCell::new();

#[cfg(feature = "json")]
static BUNDLED_DATASET: &str = include_str!("../../data/provinces.json");

impl ProvinceDb {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "provinces.json"
    }

    /// The shared database built from the dataset bundled into the crate.
    ///
    /// The first call parses and indexes the records; every later call
    /// returns the same instance. Lookups on it need no synchronization.
    ///
    /// ```rust
    /// use provincedb_core::{ProvinceDb, ProvinceSearch};
    ///
    /// let a = ProvinceDb::load().unwrap();
    /// let b = ProvinceDb::load().unwrap();
    /// assert!(std::ptr::eq(a, b));
    /// assert!(a.zips().contains(&10200));
    /// ```
    #[cfg(feature = "json")]
    pub fn load() -> Result<&'static ProvinceDb> {
        PROVINCE_DB.get_or_try_init(|| {
            let db = Self::from_json_str(BUNDLED_DATASET)?;
            log::info!("Loaded bundled province dataset ({} records)", db.len());
            Ok(db)
        })
    }

    /// Loads a database from disk.
    ///
    /// - `*.bin` is read as a bincode snapshot.
    /// - Anything else is a JSON record array (plain or gzipped). With the
    ///   `builder` feature a `<file>.provincedb.bin` cache is kept next to it.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if common_io::is_snapshot(path) {
            return Self::load_binary_file(path);
        }
        Self::load_source(path)
    }

    #[cfg(feature = "builder")]
    fn load_source(path: &Path) -> Result<Self> {
        Self::load_via_builder(path)
    }

    #[cfg(all(feature = "json", not(feature = "builder")))]
    fn load_source(path: &Path) -> Result<Self> {
        Self::load_json_file(path)
    }

    #[cfg(not(feature = "json"))]
    fn load_source(path: &Path) -> Result<Self> {
        Err(crate::error::ProvinceError::InvalidData(format!(
            "{}: JSON sources need the 'json' feature",
            path.display()
        )))
    }
}

#[cfg(all(test, feature = "json"))]
mod tests {
    use super::*;
    use crate::traits::ProvinceSearch;

    #[test]
    fn bundled_dataset_matches_file_on_disk() {
        let path = ProvinceDb::default_data_dir().join(ProvinceDb::default_dataset_filename());
        let from_disk = ProvinceDb::load_json_file(path).unwrap();
        assert_eq!(from_disk.provinces(), ProvinceDb::load().unwrap().provinces());
    }

    #[test]
    fn snapshot_paths_skip_json_parsing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshot.bin");
        ProvinceDb::load().unwrap().save_as(&path).unwrap();

        let db = ProvinceDb::load_from_path(&path).unwrap();
        assert_eq!(db.stats(), ProvinceDb::load().unwrap().stats());
    }
}
