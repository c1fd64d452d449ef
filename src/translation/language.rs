use serde::{Deserialize, Serialize};
use std::fmt;

/// Short language tag such as `en`, `fr` or `zh-CN`.
///
/// The primary subtag is lowercased. Empty, `auto` and `und` tags are kept
/// but reported as unknown.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageCode(String);

impl LanguageCode {
    pub const ENGLISH: &'static str = "en";

    pub fn new(raw: &str) -> Self {
        let raw = raw.trim().replace('_', "-");
        let normalized = match raw.split_once('-') {
            Some((primary, region)) => format!("{}-{}", primary.to_lowercase(), region),
            None => raw.to_lowercase(),
        };
        Self(normalized)
    }

    pub fn english() -> Self {
        Self(Self::ENGLISH.to_string())
    }

    pub fn is_known(&self) -> bool {
        !matches!(self.0.as_str(), "" | "auto" | "und")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for LanguageCode {
    fn default() -> Self {
        Self::english()
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LanguageCode {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(" FR ", "fr")]
    #[case("zh-CN", "zh-CN")]
    #[case("ZH_TW", "zh-TW")]
    #[case("en", "en")]
    fn test_normalization(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(LanguageCode::new(raw).as_str(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("auto")]
    #[case("UND")]
    fn test_unknown_codes(#[case] raw: &str) {
        assert!(!LanguageCode::new(raw).is_known());
    }

    #[test]
    fn test_default_is_english() {
        let code = LanguageCode::default();
        assert!(code.is_known());
        assert_eq!(code, LanguageCode::new("EN"));
        assert_eq!(code.to_string(), "en");
    }
}
