//! provincedb prelude: bring common types and traits into scope.

pub use crate::common::DbStats;
pub use crate::error::{ProvinceError, Result};
pub use crate::model::{Field, Locale, Province, ProvinceDb};
pub use crate::text::{equals_normalized, normalize_key};
pub use crate::traits::{NameMatch, ProvinceSearch, ZipQuery};
