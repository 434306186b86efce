// crates/provincedb-core/src/model/locale.rs
use crate::error::ProvinceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Language selector for name fields.
///
/// `Th` is the default for every district/city lookup and listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    #[default]
    Th,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Th];

    /// Lenient tag parsing: `"th"` (trimmed, ASCII case-insensitive) is Thai,
    /// anything else is English.
    ///
    /// ```rust
    /// use provincedb_core::Locale;
    ///
    /// assert_eq!(Locale::from_tag("TH"), Locale::Th);
    /// assert_eq!(Locale::from_tag("en"), Locale::En);
    /// assert_eq!(Locale::from_tag("fr"), Locale::En);
    /// ```
    pub fn from_tag(tag: &str) -> Self {
        if tag.trim().eq_ignore_ascii_case("th") {
            Locale::Th
        } else {
            Locale::En
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Th => "th",
        }
    }

    /// Resolves an optional selector, falling back to [`Locale::default`].
    #[inline]
    pub(crate) fn resolve(locale: impl Into<Option<Locale>>) -> Locale {
        locale.into().unwrap_or_default()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict parsing, rejects anything but `en` / `th`.
impl FromStr for Locale {
    type Err = ProvinceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "th" => Ok(Locale::Th),
            _ => Err(ProvinceError::UnknownLocale(s.to_string())),
        }
    }
}

/// The localized name columns of a [`Province`](super::Province).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Subdistrict,
    District,
    City,
}

/// One value per [`Locale`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleTable<T> {
    pub en: T,
    pub th: T,
}

impl<T> LocaleTable<T> {
    /// Builds both entries with the same constructor.
    pub fn from_fn(mut f: impl FnMut(Locale) -> T) -> Self {
        LocaleTable {
            en: f(Locale::En),
            th: f(Locale::Th),
        }
    }

    #[inline]
    pub fn get(&self, locale: Locale) -> &T {
        match locale {
            Locale::En => &self.en,
            Locale::Th => &self.th,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_locale_is_thai() {
        assert_eq!(Locale::default(), Locale::Th);
        assert_eq!(Locale::resolve(None), Locale::Th);
        assert_eq!(Locale::resolve(Locale::En), Locale::En);
    }

    #[test]
    fn lenient_tag_treats_unknown_as_english() {
        assert_eq!(Locale::from_tag(" th "), Locale::Th);
        assert_eq!(Locale::from_tag(""), Locale::En);
        assert_eq!(Locale::from_tag("thai"), Locale::En);
    }

    #[test]
    fn strict_parse_rejects_unknown() {
        assert_eq!("EN".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("th".parse::<Locale>().unwrap(), Locale::Th);
        let err = "de".parse::<Locale>().unwrap_err();
        assert!(matches!(err, ProvinceError::UnknownLocale(ref tag) if tag == "de"));
    }

    #[test]
    fn table_selects_by_locale() {
        let table = LocaleTable::from_fn(|l| l.as_str().len() + usize::from(l == Locale::Th));
        assert_eq!(*table.get(Locale::En), 2);
        assert_eq!(*table.get(Locale::Th), 3);
    }
}
