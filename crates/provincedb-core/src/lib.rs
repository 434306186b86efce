// crates/provincedb-core/src/lib.rs

//! # provincedb-core
//!
//! Locale-aware lookups over Thai postal/administrative records: zip,
//! subdistrict, district and city (province), each named in English and Thai.
//!
//! The record list is indexed once, eagerly, into exact-match maps (by zip,
//! and by normalized district/city name per locale) plus deduplicated
//! listings. Every query afterwards is a read of those immutable indices.
//!
//! ```rust
//! use provincedb_core::prelude::*;
//!
//! let db = ProvinceDb::load()?;
//!
//! let bangkok = db.provinces_by_city("กรุงเทพมหานคร", None);
//! assert!(bangkok.iter().any(|p| p.zip == 10200));
//!
//! let phra_nakhon = db.provinces_by_district(" phra nakhon ", Locale::En);
//! assert!(phra_nakhon.iter().all(|p| p.district == "Phra Nakhon"));
//!
//! assert!(db.provinces_by_zip("99999").is_empty());
//! # Ok::<(), provincedb_core::ProvinceError>(())
//! ```

pub mod common;
pub mod error;
pub mod index;
pub mod loader; // The public loader
pub mod model;
pub mod prelude;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::common::DbStats;
pub use crate::error::{ProvinceError, Result};
pub use crate::index::{ProvinceIndex, ProvinceMap};
pub use crate::loader::CompressionMode;
pub use crate::model::{Field, Locale, LocaleTable, Province, ProvinceDb};
// Export the Search Trait (Crucial for users!)
pub use crate::traits::{NameMatch, ProvinceSearch, ZipQuery};
