// crates/provincedb-core/src/traits.rs
use crate::common::DbStats;
use crate::index::ProvinceMap;
use crate::model::{Field, Locale, Province};
use crate::text::equals_normalized;
use std::borrow::Cow;

/// Name-based matching helpers for types that expose localized names.
///
/// Implementors provide a `&str` view per [`Field`] and [`Locale`] via
/// [`NameMatch::name_str`], and get [`NameMatch::is_named`]: equality after
/// trim + lowercase, the same rule the indices use.
///
/// # Examples
/// ```rust
/// use provincedb_core::traits::NameMatch;
/// use provincedb_core::{Field, Locale};
///
/// struct Place(&'static str, &'static str);
/// impl NameMatch for Place {
///     fn name_str(&self, _field: Field, locale: Locale) -> &str {
///         match locale {
///             Locale::En => self.0,
///             Locale::Th => self.1,
///         }
///     }
/// }
///
/// let p = Place("Dusit", "ดุสิต");
/// assert!(p.is_named(Field::District, " DUSIT", Locale::En));
/// assert!(p.is_named(Field::District, "ดุสิต ", Locale::Th));
/// ```
pub trait NameMatch {
    /// Returns the raw localized name used for matching.
    fn name_str(&self, field: Field, locale: Locale) -> &str;

    /// Case-insensitive, whitespace-trimmed name comparison.
    #[inline]
    fn is_named(&self, field: Field, q: &str, locale: Locale) -> bool {
        equals_normalized(self.name_str(field, locale), q)
    }
}

/// Anything usable as a zip lookup key.
///
/// Numbers are encoded as plain decimal strings; strings are used verbatim
/// (no trimming or numeric parsing, so neither `" 10200"` nor `"010200"`
/// matches `10200`). Negative numbers can never match and yield `None`.
pub trait ZipQuery {
    fn zip_key(&self) -> Option<Cow<'_, str>>;
}

macro_rules! unsigned_zip_query {
    ($($t:ty),*) => {$(
        impl ZipQuery for $t {
            #[inline]
            fn zip_key(&self) -> Option<Cow<'_, str>> {
                Some(Cow::Owned(self.to_string()))
            }
        }
    )*};
}

macro_rules! signed_zip_query {
    ($($t:ty),*) => {$(
        impl ZipQuery for $t {
            #[inline]
            fn zip_key(&self) -> Option<Cow<'_, str>> {
                (*self >= 0).then(|| Cow::Owned(self.to_string()))
            }
        }
    )*};
}

unsigned_zip_query!(u16, u32, u64, usize);
signed_zip_query!(i32, i64);

impl ZipQuery for str {
    #[inline]
    fn zip_key(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self))
    }
}

impl ZipQuery for String {
    #[inline]
    fn zip_key(&self) -> Option<Cow<'_, str>> {
        self.as_str().zip_key()
    }
}

impl<T: ZipQuery + ?Sized> ZipQuery for &T {
    #[inline]
    fn zip_key(&self) -> Option<Cow<'_, str>> {
        (**self).zip_key()
    }
}

/// The query facade over a built database.
///
/// Every method is total: a miss is an empty slice, never an error. Results
/// borrow from the database's indices, so they are shared, not copied.
/// Locale parameters accept a [`Locale`] or `None` for the default (`th`).
pub trait ProvinceSearch {
    fn stats(&self) -> DbStats;

    /// The full record sequence in dataset order.
    fn provinces(&self) -> &[Province];

    /// Records whose `zip` equals the key, in dataset order.
    ///
    /// ```rust
    /// use provincedb_core::{ProvinceDb, ProvinceSearch};
    ///
    /// let db = ProvinceDb::load().unwrap();
    /// let by_number = db.provinces_by_zip(10200);
    /// let by_string = db.provinces_by_zip("10200");
    /// assert!(!by_number.is_empty());
    /// assert_eq!(by_number, by_string);
    /// assert!(db.provinces_by_zip(99999).is_empty());
    /// ```
    fn provinces_by_zip<Z: ZipQuery>(&self, zip: Z) -> &[Province];

    /// Records whose district name equals `district` after trim + lowercase.
    ///
    /// An input that normalizes to `""` always yields an empty slice.
    ///
    /// ```rust
    /// use provincedb_core::{Locale, ProvinceDb, ProvinceSearch};
    ///
    /// let db = ProvinceDb::load().unwrap();
    /// assert!(!db.provinces_by_district("พระนคร", None).is_empty());
    /// assert!(!db.provinces_by_district("phra nakhon", Locale::En).is_empty());
    /// assert!(db.provinces_by_district("  ", Locale::En).is_empty());
    /// ```
    fn provinces_by_district<L: Into<Option<Locale>>>(
        &self,
        district: &str,
        locale: L,
    ) -> &[Province];

    /// Records whose city (province) name equals `city` after trim + lowercase.
    fn provinces_by_city<L: Into<Option<Locale>>>(&self, city: &str, locale: L) -> &[Province];

    /// Distinct raw city names in first-occurrence order.
    ///
    /// Deduplication is exact, *not* normalized: `"Bangkok"` and `"bangkok"`
    /// would both be listed even though they share one index bucket.
    fn cities<L: Into<Option<Locale>>>(&self, locale: L) -> &[String];

    /// Distinct raw district names in first-occurrence order (exact dedup).
    fn districts<L: Into<Option<Locale>>>(&self, locale: L) -> &[String];

    /// Distinct zips in first-occurrence order.
    fn zips(&self) -> &[u32];

    /// The whole zip index, keyed by the decimal zip string.
    fn zip_map(&self) -> &ProvinceMap;

    /// The whole district index for one locale, keyed by normalized name.
    fn district_map<L: Into<Option<Locale>>>(&self, locale: L) -> &ProvinceMap;

    /// The whole city index for one locale, keyed by normalized name.
    fn city_map<L: Into<Option<Locale>>>(&self, locale: L) -> &ProvinceMap;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_keys_encode_as_decimal() {
        assert_eq!(10200u32.zip_key().as_deref(), Some("10200"));
        assert_eq!(10200i64.zip_key().as_deref(), Some("10200"));
        assert_eq!(83150usize.zip_key().as_deref(), Some("83150"));
    }

    #[test]
    fn negative_keys_never_match() {
        assert_eq!((-10200i32).zip_key(), None);
    }

    #[test]
    fn string_keys_are_used_verbatim() {
        assert_eq!(" 10200 ".zip_key().as_deref(), Some(" 10200 "));
        assert_eq!(String::from("010200").zip_key().as_deref(), Some("010200"));
        let owned = String::from("50000");
        assert_eq!((&owned).zip_key().as_deref(), Some("50000"));
    }
}
