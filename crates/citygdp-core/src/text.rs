// crates/citygdp-core/src/text.rs
use pinyin::ToPinyin;
use std::cmp::Ordering;

/// Lowercases a string for case-insensitive substring matching.
///
/// Han characters are left untouched, so `"北"` still only matches names
/// containing `北`.
pub fn fold_case(s: &str) -> String {
    s.to_lowercase()
}

/// Case-insensitive substring test. An empty needle matches everything.
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || fold_case(haystack).contains(&fold_case(needle))
}

/// Place names whose first character is read differently from its most
/// common reading, keyed by the character and the one that follows it.
const PLACE_READINGS: &[(char, char, &str)] = &[
    ('重', '庆', "chong"),
    ('厦', '门', "xia"),
    ('蚌', '埠', "beng"),
    ('六', '安', "lu"),
    ('长', '沙', "chang"),
    ('长', '春', "chang"),
];

/// Convert a string into a zh-CN collation key.
///
/// Han characters become their toneless pinyin syllable
/// (`北京` -> `["bei", "jing"]`); other characters are transliterated with
/// `deunicode` and lowercased, so Latin text orders alphabetically.
///
/// # Examples
///
/// ```rust
/// use citygdp_core::text::collation_key;
///
/// assert_eq!(collation_key("北京"), vec!["bei", "jing"]);
/// assert_eq!(collation_key("重庆"), vec!["chong", "qing"]);
/// ```
pub fn collation_key(s: &str) -> Vec<String> {
    let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
    chars
        .iter()
        .enumerate()
        .map(|(i, &c)| syllable(c, chars.get(i + 1).copied()))
        .collect()
}

fn syllable(c: char, next: Option<char>) -> String {
    if let Some(&(_, _, reading)) = PLACE_READINGS
        .iter()
        .find(|&&(head, tail, _)| head == c && next == Some(tail))
    {
        return reading.to_owned();
    }
    if let Some(p) = c.to_pinyin() {
        return p.plain().to_owned();
    }
    match deunicode::deunicode_char(c) {
        Some(t) if !t.trim().is_empty() => t.trim().to_lowercase(),
        _ => c.to_lowercase().collect(),
    }
}

/// Orders two names the way the dashboard's name sort does: by pinyin
/// collation key, then by the raw string so the order is total.
pub fn compare_collated(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}
