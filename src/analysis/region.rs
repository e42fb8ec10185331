//! Country code normalisation.

use serde::Serialize;

/// Code used for records without a usable country code.
pub const UNKNOWN_REGION_CODE: &str = "UNK";
/// Label used for records without a usable country code.
pub const UNKNOWN_REGION_LABEL: &str = "Unknown region";

/// Non-ISO codes seen in PBDB data, mapped to their ISO equivalent.
const REGION_ALIASES: [(&str, &str); 3] = [("UK", "GB"), ("EN", "GB"), ("SC", "GB")];

/// A resolved country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Region {
    /// Upper-case two-letter code, or [`UNKNOWN_REGION_CODE`]
    pub code: String,
    /// Display label; the code itself for known regions
    pub label: String,
}

impl Region {
    /// Resolve a raw `cc2` value.
    ///
    /// Missing, blank and `"__"` codes resolve to the unknown region.
    #[must_use]
    pub fn resolve(raw: Option<&str>) -> Self {
        let normalized = match raw.map(|code| code.trim().to_uppercase()) {
            Some(code) if !code.is_empty() && code != "__" => code,
            _ => return Self::unknown(),
        };

        let code = REGION_ALIASES
            .iter()
            .find(|(alias, _)| *alias == normalized)
            .map_or(normalized.clone(), |(_, iso)| (*iso).to_string());

        Self {
            label: code.clone(),
            code,
        }
    }

    #[must_use]
    pub fn unknown() -> Self {
        Self {
            code: UNKNOWN_REGION_CODE.to_string(),
            label: UNKNOWN_REGION_LABEL.to_string(),
        }
    }

    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.code == UNKNOWN_REGION_CODE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_normalizes_case_and_aliases() {
        assert_eq!(Region::resolve(Some(" us ")).code, "US");
        assert_eq!(Region::resolve(Some("uk")).code, "GB");
        assert_eq!(Region::resolve(Some("EN")).code, "GB");
        assert_eq!(Region::resolve(Some("SC")).label, "GB");
    }

    #[test]
    fn test_resolve_unknown() {
        for raw in [None, Some(""), Some("   "), Some("__")] {
            let region = Region::resolve(raw);
            assert!(region.is_unknown());
            assert_eq!(region.label, UNKNOWN_REGION_LABEL);
        }
    }
}
