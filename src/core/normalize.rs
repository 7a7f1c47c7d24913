//! Text normalization for name and trait comparison
//!
//! Both sides of every comparison go through [`normalize`] first, which makes
//! scoring case-insensitive and diacritic-insensitive.

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Normalize text for comparison
///
/// Lowercases, folds diacritics to their base Latin letters, collapses runs of
/// whitespace to a single space and trims both ends.
///
/// # Examples
/// ```
/// use fighterdle::core::normalize;
///
/// assert_eq!(normalize("  Jan   Błachowicz "), "jan blachowicz");
/// assert_eq!(normalize("Jiří PROCHÁZKA"), "jiri prochazka");
/// assert_eq!(normalize("Nguyễn"), "nguyen");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    let mut folded = String::with_capacity(text.len());
    for ch in text.chars().flat_map(char::to_lowercase).nfd() {
        if !is_combining_mark(ch) {
            fold_into(ch, &mut folded);
        }
    }

    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalize and drop everything that is not a letter or digit
///
/// Used for weight-class keywords, where "Light Heavyweight" and
/// "light-heavyweight" must compare equal.
#[must_use]
pub fn compact(text: &str) -> String {
    normalize(text)
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect()
}

/// Letters with no canonical decomposition; everything else is handled by NFD
fn fold_into(ch: char, out: &mut String) {
    let folded = match ch {
        'đ' | 'ð' => "d",
        'ħ' => "h",
        'ı' => "i",
        'ł' | 'ŀ' => "l",
        'ø' => "o",
        'ŧ' => "t",
        'ß' => "ss",
        'æ' => "ae",
        'œ' => "oe",
        'þ' => "th",
        _ => {
            out.push(ch);
            return;
        }
    };
    out.push_str(folded);
}
