//! Aggregate views over Dinosauria occurrences.
//!
//! `discover` summarises a general sample by interval, country, phylum and
//! formation. `period_distribution` groups a sample bounded to one
//! [`Period`] by country.

pub mod discover;
pub mod geography;
pub mod period;
pub mod record;
pub mod region;

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::client::ApiCaller;
use crate::clients::occurrences::OCCS_LIST;
use crate::clients::OccurrencesClient;
use crate::error::Error;
use crate::params::QueryParams;

// Re-exports
pub use discover::{DiscoverSummary, LocationBucket, TimeBucket};
pub use geography::{GeographicDistribution, RegionBucket};
pub use period::Period;
pub use record::OccurrenceRecord;
pub use region::Region;

/// Base taxon for both views.
pub const BASE_TAXON: &str = "Dinosauria";
/// Output blocks requested for both views.
pub const OCCURRENCE_SHOW: [&str; 5] = ["coords", "loc", "paleoloc", "stratext", "phylo"];
/// Sample size for the discover summary.
pub const DISCOVER_LIMIT: u32 = 500;
/// Sample size for a period distribution.
pub const PERIOD_LIMIT: u32 = 1500;

/// A label with an occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountBucket {
    pub label: String,
    pub count: usize,
}

/// Counts labels in first-seen order.
#[derive(Debug, Default)]
pub(crate) struct Tally {
    index: HashMap<String, usize>,
    buckets: Vec<CountBucket>,
}

impl Tally {
    pub(crate) fn add(&mut self, label: &str) {
        match self.index.get(label) {
            Some(&slot) => self.buckets[slot].count += 1,
            None => {
                self.index.insert(label.to_string(), self.buckets.len());
                self.buckets.push(CountBucket {
                    label: label.to_string(),
                    count: 1,
                });
            }
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.buckets.len()
    }

    /// The `limit` largest buckets; ties keep first-seen order.
    pub(crate) fn ranked(mut self, limit: usize) -> Vec<CountBucket> {
        self.buckets.sort_by(|a, b| b.count.cmp(&a.count));
        self.buckets.truncate(limit);
        self.buckets
    }
}

/// Query for the discover sample.
#[must_use]
pub fn discover_params() -> QueryParams {
    OccurrencesClient::list_params(BASE_TAXON, &OCCURRENCE_SHOW, Some(DISCOVER_LIMIT))
}

/// Query for a sample bounded to `period`.
#[must_use]
pub fn period_params(period: Period) -> QueryParams {
    OccurrencesClient::list_params(BASE_TAXON, &OCCURRENCE_SHOW, Some(PERIOD_LIMIT))
        .with("min_ma", period.min_ma())
        .with("max_ma", period.max_ma())
}

async fn fetch_records<C>(caller: &C, params: &QueryParams) -> Result<Vec<OccurrenceRecord>, Error>
where
    C: ApiCaller + ?Sized,
{
    let response = caller.call(OCCS_LIST, params).await?;
    let records = OccurrenceRecord::from_response(&response)?;
    debug!(records = records.len(), "Fetched occurrence sample");
    Ok(records)
}

/// Fetch the discover sample and summarise it.
///
/// # Errors
///
/// Returns an error if the request fails or a record is not an object.
pub async fn discover<C>(caller: &C) -> Result<DiscoverSummary, Error>
where
    C: ApiCaller + ?Sized,
{
    let records = fetch_records(caller, &discover_params()).await?;
    Ok(DiscoverSummary::from_records(&records))
}

/// Fetch occurrences within `period` and group them by country.
///
/// # Errors
///
/// Returns an error if the request fails or a record is not an object.
pub async fn period_distribution<C>(caller: &C, period: Period) -> Result<GeographicDistribution, Error>
where
    C: ApiCaller + ?Sized,
{
    let records = fetch_records(caller, &period_params(period)).await?;
    Ok(GeographicDistribution::from_records(&records))
}
