// crates/provincedb-core/src/text.rs

/// Convert a name into the key used by the district and city indices.
///
/// This performs:
/// 1\) Trim surrounding whitespace (see [`is_trimmable`])
/// 2\) Unicode lowercase
///
/// Thai script has no case, so Thai names only lose their padding; English
/// names are case-folded as well. No transliteration happens, `"Łódź"` stays
/// `"łódź"`.
///
/// # Examples
///
/// ```rust
/// use provincedb_core::text::normalize_key;
///
/// assert_eq!(normalize_key("  Phra Nakhon "), "phra nakhon");
/// assert_eq!(normalize_key(" พระนคร"), "พระนคร");
/// assert_eq!(normalize_key("   "), "");
/// ```
pub fn normalize_key(s: &str) -> String {
    s.trim_matches(is_trimmable).to_lowercase()
}

/// Whitespace stripped from the ends of a name.
///
/// Unicode whitespace plus the byte-order mark U+FEFF, minus NEL (U+0085),
/// which stays part of the name.
#[inline]
pub fn is_trimmable(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}')
}

/// Compares two names after [`normalize_key`].
///
/// ```rust
/// use provincedb_core::text::equals_normalized;
///
/// assert!(equals_normalized("Bangkok", " bangkok "));
/// assert!(!equals_normalized("Bangkok", "Bang Kok"));
/// ```
pub fn equals_normalized(a: &str, b: &str) -> bool {
    normalize_key(a) == normalize_key(b)
}

/// Canonical string encoding of a zip, as used for zip index keys.
#[inline]
pub fn zip_key(zip: u32) -> String {
    zip.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_lowercases_english() {
        assert_eq!(normalize_key("\tMueang Chiang Mai\n"), "mueang chiang mai");
        assert_eq!(normalize_key("BANGKOK"), "bangkok");
    }

    #[test]
    fn normalize_keeps_thai_text() {
        assert_eq!(normalize_key("กรุงเทพมหานคร"), "กรุงเทพมหานคร");
        // U+3000 ideographic space counts as whitespace too
        assert_eq!(normalize_key("\u{3000}ดุสิต "), "ดุสิต");
    }

    #[test]
    fn normalize_strips_byte_order_mark() {
        assert_eq!(normalize_key("\u{FEFF}พระนคร"), "พระนคร");
        assert_eq!(normalize_key("Dusit\u{FEFF} "), "dusit");
        assert!(equals_normalized("\u{FEFF}Bangkok", "bangkok"));
    }

    #[test]
    fn normalize_keeps_next_line_char() {
        assert_eq!(normalize_key("Bangkok\u{85}"), "bangkok\u{85}");
        assert!(!equals_normalized("Bangkok\u{85}", "Bangkok"));
    }

    #[test]
    fn normalize_keeps_inner_whitespace() {
        assert_eq!(normalize_key(" Wang  Mai "), "wang  mai");
    }

    #[test]
    fn zip_key_is_plain_decimal() {
        assert_eq!(zip_key(10200), "10200");
        assert_eq!(zip_key(0), "0");
    }
}
