//! Resource clients for the PaleoDB data service.

pub mod intervals;
pub mod occurrences;
pub mod taxa;

// Re-exports
pub use intervals::IntervalsClient;
pub use occurrences::OccurrencesClient;
pub use taxa::TaxaClient;
