//! Dashboard summary of an occurrence sample.

use std::collections::HashMap;

use serde::Serialize;

use super::record::OccurrenceRecord;
use super::{CountBucket, Tally};

const TIME_BUCKETS: usize = 8;
const LOCATION_BUCKETS: usize = 8;
const PHYLUM_BUCKETS: usize = 6;
const FORMATION_BUCKETS: usize = 6;

/// Occurrences grouped by interval name.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeBucket {
    pub label: String,
    pub count: usize,
    /// Mean age midpoint over records that carry an age
    pub average_ma: Option<f64>,
    /// Oldest early bound seen
    pub max_ma: Option<f64>,
    /// Youngest late bound seen
    pub min_ma: Option<f64>,
}

/// Occurrences grouped by country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationBucket {
    pub code: String,
    pub label: String,
    pub count: usize,
}

/// Counts and top-N distributions over an occurrence sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoverSummary {
    pub total_occurrences: usize,
    pub unique_intervals: usize,
    pub unique_countries: usize,
    pub unique_phyla: usize,
    /// Oldest first by average age; records without an age sort as 0 Ma
    pub time_distribution: Vec<TimeBucket>,
    pub location_distribution: Vec<LocationBucket>,
    pub phylum_distribution: Vec<CountBucket>,
    /// Formation, else group, else scale; records with none are skipped
    pub stratigraphy: Vec<CountBucket>,
}

#[derive(Default)]
struct TimeAccumulator {
    label: String,
    count: usize,
    midpoint_total: f64,
    entries_with_age: usize,
    max_ma: Option<f64>,
    min_ma: Option<f64>,
}

impl TimeAccumulator {
    fn add(&mut self, record: &OccurrenceRecord) {
        self.count += 1;
        if let Some(midpoint) = record.midpoint_ma() {
            self.midpoint_total += midpoint;
            self.entries_with_age += 1;
        }
        if let Some(early) = record.eag {
            self.max_ma = Some(self.max_ma.map_or(early, |max| max.max(early)));
        }
        if let Some(late) = record.lag {
            self.min_ma = Some(self.min_ma.map_or(late, |min| min.min(late)));
        }
    }

    fn finish(self) -> TimeBucket {
        let average_ma = (self.entries_with_age > 0).then(|| self.midpoint_total / self.entries_with_age as f64);
        TimeBucket {
            label: self.label,
            count: self.count,
            average_ma,
            max_ma: self.max_ma,
            min_ma: self.min_ma,
        }
    }
}

impl DiscoverSummary {
    /// Aggregate `records`. Ties keep first-seen order.
    #[must_use]
    pub fn from_records(records: &[OccurrenceRecord]) -> Self {
        let mut time_index: HashMap<String, usize> = HashMap::new();
        let mut times: Vec<TimeAccumulator> = Vec::new();
        let mut countries: Vec<LocationBucket> = Vec::new();
        let mut phyla = Tally::default();
        let mut formations = Tally::default();

        for record in records {
            let interval = record.interval_label();
            let slot = *time_index.entry(interval.to_string()).or_insert_with(|| {
                times.push(TimeAccumulator {
                    label: interval.to_string(),
                    ..TimeAccumulator::default()
                });
                times.len() - 1
            });
            times[slot].add(record);

            let region = record.region();
            match countries.iter_mut().find(|bucket| bucket.code == region.code) {
                Some(bucket) => bucket.count += 1,
                None => countries.push(LocationBucket {
                    code: region.code,
                    label: region.label,
                    count: 1,
                }),
            }

            phyla.add(record.phylum());
            if let Some(formation) = record.formation() {
                formations.add(formation);
            }
        }

        let unique_intervals = times.len();
        let unique_countries = countries.len();
        let unique_phyla = phyla.len();

        let mut time_distribution: Vec<TimeBucket> = times.into_iter().map(TimeAccumulator::finish).collect();
        time_distribution.sort_by(|a, b| b.average_ma.unwrap_or(0.0).total_cmp(&a.average_ma.unwrap_or(0.0)));
        time_distribution.truncate(TIME_BUCKETS);

        countries.sort_by(|a, b| b.count.cmp(&a.count));
        countries.truncate(LOCATION_BUCKETS);

        Self {
            total_occurrences: records.len(),
            unique_intervals,
            unique_countries,
            unique_phyla,
            time_distribution,
            location_distribution: countries,
            phylum_distribution: phyla.ranked(PHYLUM_BUCKETS),
            stratigraphy: formations.ranked(FORMATION_BUCKETS),
        }
    }
}
