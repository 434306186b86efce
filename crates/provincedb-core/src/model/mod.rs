// crates/provincedb-core/src/model/mod.rs
pub mod flat;
pub mod load;
pub mod locale;
pub mod search;
pub use flat::{Province, ProvinceDb};
pub use locale::{Field, Locale, LocaleTable};

/// File suffix appended to a JSON source for its bincode cache.
pub const CACHE_SUFFIX: &str = ".provincedb.bin";
