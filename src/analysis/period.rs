//! Mesozoic periods used to bound occurrence queries.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::Error;

/// A geological period with its age bounds in Ma.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Triassic,
    #[default]
    Jurassic,
    Cretaceous,
}

impl Period {
    /// All periods, oldest first.
    pub const ALL: [Period; 3] = [Period::Triassic, Period::Jurassic, Period::Cretaceous];

    /// Lower-case lookup key, e.g. `"jurassic"`.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Triassic => "triassic",
            Self::Jurassic => "jurassic",
            Self::Cretaceous => "cretaceous",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Triassic => "Triassic",
            Self::Jurassic => "Jurassic",
            Self::Cretaceous => "Cretaceous",
        }
    }

    /// Rounded range for display.
    #[must_use]
    pub fn range(self) -> &'static str {
        match self {
            Self::Triassic => "252–201 Ma",
            Self::Jurassic => "201–145 Ma",
            Self::Cretaceous => "145–66 Ma",
        }
    }

    /// Younger bound in Ma.
    #[must_use]
    pub fn min_ma(self) -> f64 {
        match self {
            Self::Triassic => 201.3,
            Self::Jurassic => 145.0,
            Self::Cretaceous => 66.0,
        }
    }

    /// Older bound in Ma.
    #[must_use]
    pub fn max_ma(self) -> f64 {
        match self {
            Self::Triassic => 252.2,
            Self::Jurassic => 201.3,
            Self::Cretaceous => 145.0,
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Triassic => "Early dinosaurs emerge across Pangaea while reptiles dominate the land.",
            Self::Jurassic => "Warm, humid climates create lush habitats for sauropods and early birds.",
            Self::Cretaceous => {
                "Continental breakup sparks regional diversification until the mass extinction."
            }
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Period {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|period| period.key() == key)
            .ok_or_else(|| Error::Configuration(format!("Unsupported period requested: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Jurassic".parse::<Period>().unwrap(), Period::Jurassic);
        assert_eq!(" CRETACEOUS ".parse::<Period>().unwrap(), Period::Cretaceous);
        assert_eq!("triassic".parse::<Period>().unwrap(), Period::Triassic);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "permian".parse::<Period>().unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
        assert!(err.to_string().contains("permian"));
    }

    #[test]
    fn test_periods_are_contiguous() {
        assert_eq!(Period::default(), Period::Jurassic);
        for pair in Period::ALL.windows(2) {
            assert_eq!(pair[0].min_ma(), pair[1].max_ma());
        }
        for period in Period::ALL {
            assert!(period.min_ma() < period.max_ma());
        }
    }
}
