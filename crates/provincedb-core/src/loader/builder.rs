// crates/provincedb-core/src/loader/builder.rs
#![cfg(feature = "builder")]

use super::common_io;
use crate::error::Result;
use crate::model::ProvinceDb;
use std::fs;
use std::path::Path;

impl ProvinceDb {
    /// **Smart Load:** reuse a fresh bincode cache next to the JSON source,
    /// otherwise parse the source and (best effort) refresh the cache.
    pub(super) fn load_via_builder(path: &Path) -> Result<Self> {
        let cache_path = common_io::get_cache_path(path);

        // 1. Check Cache
        if is_cache_fresh(path, &cache_path) {
            match Self::load_binary_file(&cache_path) {
                Ok(db) => return Ok(db),
                Err(e) => log::warn!(
                    "Failed to read cache {}, rebuilding: {}",
                    cache_path.display(),
                    e
                ),
            }
        }

        // 2. Build
        let db = Self::load_json_file(path)?;

        // 3. Cache
        if let Err(e) = db.save_as(&cache_path) {
            log::warn!("Failed to write cache {}: {}", cache_path.display(), e);
        }

        Ok(db)
    }
}

/// A cache is usable only if it exists and is not older than its source.
fn is_cache_fresh(source: &Path, cache: &Path) -> bool {
    let cache_time = match fs::metadata(cache).and_then(|m| m.modified()) {
        Ok(t) => t,
        Err(_) => return false,
    };
    match fs::metadata(source).and_then(|m| m.modified()) {
        Ok(source_time) => source_time <= cache_time,
        Err(_) => false,
    }
}
