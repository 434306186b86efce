// crates/provincedb-core/src/common.rs
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for the database.
///
/// Returned by [`ProvinceSearch::stats`](crate::ProvinceSearch::stats). The
/// district and city counts are the lengths of the Thai unique lists, i.e.
/// distinct raw names in first-occurrence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbStats {
    pub provinces: usize,
    pub zips: usize,
    pub districts: usize,
    pub cities: usize,
}
