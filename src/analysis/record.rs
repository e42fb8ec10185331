//! Typed view of an occurrence record in the compact vocabulary.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::region::Region;
use crate::error::Error;
use crate::types::ApiResponse;

/// Label used when a record names neither an early nor a late interval.
pub const UNKNOWN_INTERVAL: &str = "Unknown interval";
/// Label used when a record has no phylum.
pub const UNKNOWN_PHYLUM: &str = "Unknown";

/// The fields of an `occs/list` record that the summaries read.
///
/// Every field is optional. Ages and coordinates are accepted as numbers or
/// numeric strings; anything else reads as absent. Empty strings read as
/// absent too.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct OccurrenceRecord {
    /// Occurrence identifier
    #[serde(default, deserialize_with = "lenient_text")]
    pub oid: Option<String>,
    /// Two-letter country code
    #[serde(default, deserialize_with = "lenient_text")]
    pub cc2: Option<String>,
    /// Early age bound in Ma
    #[serde(default, deserialize_with = "lenient_f64")]
    pub eag: Option<f64>,
    /// Late age bound in Ma
    #[serde(default, deserialize_with = "lenient_f64")]
    pub lag: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub lat: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub lng: Option<f64>,
    /// Formation
    #[serde(default, deserialize_with = "lenient_text")]
    pub sfm: Option<String>,
    /// Stratigraphic group
    #[serde(default, deserialize_with = "lenient_text")]
    pub sgr: Option<String>,
    /// Stratigraphic scale
    #[serde(default, deserialize_with = "lenient_text")]
    pub ssc: Option<String>,
    /// Early interval name
    #[serde(default, deserialize_with = "lenient_text")]
    pub oei: Option<String>,
    /// Late interval name
    #[serde(default, deserialize_with = "lenient_text")]
    pub oli: Option<String>,
    /// Phylum
    #[serde(default, deserialize_with = "lenient_text")]
    pub phl: Option<String>,
}

impl OccurrenceRecord {
    /// Decode the `records` array of a response. A body without `records`
    /// yields no records.
    ///
    /// # Errors
    ///
    /// Returns a serialization error if an entry is not a JSON object.
    pub fn from_response(response: &ApiResponse) -> Result<Vec<Self>, Error> {
        response
            .records()
            .map(|records| {
                records
                    .iter()
                    .map(|record| Self::deserialize(record).map_err(Error::from))
                    .collect()
            })
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    /// Early interval, else late interval, else [`UNKNOWN_INTERVAL`].
    #[must_use]
    pub fn interval_label(&self) -> &str {
        self.oei
            .as_deref()
            .or(self.oli.as_deref())
            .unwrap_or(UNKNOWN_INTERVAL)
    }

    /// Formation, else group, else scale.
    #[must_use]
    pub fn formation(&self) -> Option<&str> {
        self.sfm
            .as_deref()
            .or(self.sgr.as_deref())
            .or(self.ssc.as_deref())
    }

    #[must_use]
    pub fn phylum(&self) -> &str {
        self.phl.as_deref().unwrap_or(UNKNOWN_PHYLUM)
    }

    /// Mean of the two age bounds, or whichever one is present.
    #[must_use]
    pub fn midpoint_ma(&self) -> Option<f64> {
        match (self.eag, self.lag) {
            (Some(early), Some(late)) => Some((early + late) / 2.0),
            (early, late) => early.or(late),
        }
    }

    /// Latitude and longitude, only when both are present.
    #[must_use]
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.lat.zip(self.lng)
    }

    #[must_use]
    pub fn region(&self) -> Region {
        Region::resolve(self.cc2.as_deref())
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let number = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(number.filter(|n| n.is_finite()))
}
