//! Roster entry representation
//!
//! A `RosterEntry` is one competitor that can be the daily target.

use super::normalize::normalize;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// One competitor record from the dataset
///
/// Missing text fields deserialize as empty strings. The dataset may name the
/// country field `nationality`, and may give the age as a number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub division: String,
    #[serde(default, alias = "nationality")]
    pub country: String,
    #[serde(default)]
    pub organization: String,
    #[serde(
        default,
        deserialize_with = "lenient_age",
        skip_serializing_if = "Option::is_none"
    )]
    pub age: Option<u32>,
}

impl RosterEntry {
    /// Create an entry with only a name; other fields empty
    ///
    /// # Examples
    /// ```
    /// use fighterdle::core::RosterEntry;
    ///
    /// let entry = RosterEntry::new("Conor McGregor").with_division("Lightweight");
    /// assert_eq!(entry.normalized_name(), "conor mcgregor");
    /// ```
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image: String::new(),
            division: String::new(),
            country: String::new(),
            organization: String::new(),
            age: None,
        }
    }

    #[must_use]
    pub fn with_division(mut self, division: impl Into<String>) -> Self {
        self.division = division.into();
        self
    }

    #[must_use]
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    #[must_use]
    pub fn with_organization(mut self, organization: impl Into<String>) -> Self {
        self.organization = organization.into();
        self
    }

    #[must_use]
    pub const fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Name in comparison form (see [`normalize`])
    #[must_use]
    pub fn normalized_name(&self) -> String {
        normalize(&self.name)
    }

    /// Whether `text` names this entry, ignoring case, diacritics and spacing
    #[must_use]
    pub fn is_named(&self, text: &str) -> bool {
        let wanted = normalize(text);
        !wanted.is_empty() && wanted == self.normalized_name()
    }
}

impl fmt::Display for RosterEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Accept `33`, `33.0`, `"33"` or `"33 years"`; anything else is unknown
fn lenient_age<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(serde_json::Value::Number(n)) => n
            .as_f64()
            .filter(|n| n.is_finite() && *n >= 1.0)
            .map(|n| n.trunc() as u32),
        Some(serde_json::Value::String(text)) => parse_leading_int(&text),
        _ => None,
    })
}

/// Parse the leading digits of `text` after trimming, ignoring a zero result
pub(crate) fn parse_leading_int(text: &str) -> Option<u32> {
    let digits: String = text
        .trim_start()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().ok().filter(|&n| n > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_full_record() {
        let json = r#"{
            "name": "Islam Makhachev",
            "image": "images/islam-makhachev.jpg",
            "division": "Lightweight",
            "country": "Russia",
            "organization": "UFC",
            "age": 33
        }"#;
        let entry: RosterEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.name, "Islam Makhachev");
        assert_eq!(entry.division, "Lightweight");
        assert_eq!(entry.country, "Russia");
        assert_eq!(entry.age, Some(33));
    }

    #[test]
    fn nationality_alias_accepted() {
        let json = r#"{"name": "Jan Błachowicz", "nationality": "Poland"}"#;
        let entry: RosterEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.country, "Poland");
        assert_eq!(entry.organization, "");
        assert_eq!(entry.age, None);
    }

    #[test]
    fn age_accepts_strings_and_ignores_garbage() {
        let cases = [
            (r#"{"name": "a", "age": "36"}"#, Some(36)),
            (r#"{"name": "a", "age": "36 years"}"#, Some(36)),
            (r#"{"name": "a", "age": 36.7}"#, Some(36)),
            (r#"{"name": "a", "age": "unknown"}"#, None),
            (r#"{"name": "a", "age": null}"#, None),
            (r#"{"name": "a", "age": 0}"#, None),
            (r#"{"name": "a", "age": [1]}"#, None),
        ];
        for (json, expected) in cases {
            let entry: RosterEntry = serde_json::from_str(json).unwrap();
            assert_eq!(entry.age, expected, "{json}");
        }
    }

    #[test]
    fn serializes_country_and_skips_missing_age() {
        let entry = RosterEntry::new("Jon Jones").with_country("USA");
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains(r#""country":"USA""#));
        assert!(!json.contains("age"));
    }

    #[test]
    fn is_named_ignores_case_and_diacritics() {
        let entry = RosterEntry::new("Jiří Procházka");
        assert!(entry.is_named("jiri prochazka"));
        assert!(entry.is_named("  JIŘÍ   procházka "));
        assert!(!entry.is_named("jiri"));
        assert!(!entry.is_named(""));
    }

    #[test]
    fn leading_int_parsing() {
        assert_eq!(parse_leading_int(" 29"), Some(29));
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int("0"), None);
    }
}
