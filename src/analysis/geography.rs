//! Per-country distribution of an occurrence sample.

use serde::Serialize;

use super::record::OccurrenceRecord;
use super::{CountBucket, Tally};

const TOP_FORMATIONS: usize = 3;

/// Occurrences in one country.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionBucket {
    pub code: String,
    pub label: String,
    pub count: usize,
    /// Oldest early bound seen in this region
    pub earliest_ma: Option<f64>,
    /// Youngest late bound seen in this region
    pub latest_ma: Option<f64>,
    /// Mean over records that carry both coordinates
    pub average_lat: Option<f64>,
    pub average_lng: Option<f64>,
    pub top_formations: Vec<CountBucket>,
}

/// Regions ranked by occurrence count, with overall age bounds.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeographicDistribution {
    pub total_occurrences: usize,
    pub regions: Vec<RegionBucket>,
    /// Largest region count, 0 for an empty sample
    pub max_region_count: usize,
    pub earliest_ma: Option<f64>,
    pub latest_ma: Option<f64>,
}

struct RegionAccumulator {
    code: String,
    label: String,
    count: usize,
    earliest_ma: Option<f64>,
    latest_ma: Option<f64>,
    lat_sum: f64,
    lng_sum: f64,
    coordinate_count: usize,
    formations: Tally,
}

impl RegionAccumulator {
    fn add(&mut self, record: &OccurrenceRecord) {
        self.count += 1;
        if let Some((lat, lng)) = record.coordinates() {
            self.lat_sum += lat;
            self.lng_sum += lng;
            self.coordinate_count += 1;
        }
        self.earliest_ma = oldest(self.earliest_ma, record.eag);
        self.latest_ma = youngest(self.latest_ma, record.lag);
        if let Some(formation) = record.formation() {
            self.formations.add(formation);
        }
    }

    fn finish(self) -> RegionBucket {
        let n = self.coordinate_count as f64;
        let has_coordinates = self.coordinate_count > 0;
        RegionBucket {
            code: self.code,
            label: self.label,
            count: self.count,
            earliest_ma: self.earliest_ma,
            latest_ma: self.latest_ma,
            average_lat: has_coordinates.then(|| self.lat_sum / n),
            average_lng: has_coordinates.then(|| self.lng_sum / n),
            top_formations: self.formations.ranked(TOP_FORMATIONS),
        }
    }
}

fn oldest(current: Option<f64>, candidate: Option<f64>) -> Option<f64> {
    match (current, candidate) {
        (Some(a), Some(b)) => Some(a.max(b)),
        (a, b) => a.or(b),
    }
}

fn youngest(current: Option<f64>, candidate: Option<f64>) -> Option<f64> {
    match (current, candidate) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}

impl GeographicDistribution {
    /// Aggregate `records` by resolved country code.
    #[must_use]
    pub fn from_records(records: &[OccurrenceRecord]) -> Self {
        let mut buckets: Vec<RegionAccumulator> = Vec::new();
        let mut earliest_ma = None;
        let mut latest_ma = None;

        for record in records {
            earliest_ma = oldest(earliest_ma, record.eag);
            latest_ma = youngest(latest_ma, record.lag);

            let region = record.region();
            let slot = match buckets.iter().position(|bucket| bucket.code == region.code) {
                Some(slot) => slot,
                None => {
                    buckets.push(RegionAccumulator {
                        code: region.code,
                        label: region.label,
                        count: 0,
                        earliest_ma: None,
                        latest_ma: None,
                        lat_sum: 0.0,
                        lng_sum: 0.0,
                        coordinate_count: 0,
                        formations: Tally::default(),
                    });
                    buckets.len() - 1
                }
            };
            buckets[slot].add(record);
        }

        let mut regions: Vec<RegionBucket> = buckets.into_iter().map(RegionAccumulator::finish).collect();
        regions.sort_by(|a, b| b.count.cmp(&a.count));
        let max_region_count = regions.first().map_or(0, |region| region.count);

        Self {
            total_occurrences: records.len(),
            regions,
            max_region_count,
            earliest_ma,
            latest_ma,
        }
    }
}
