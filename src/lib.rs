//! Client for the Paleobiology Database (PBDB) data service.
//!
//! Wraps `GET <base>/<endpoint>.json` calls, checks the HTTP status and
//! returns the parsed JSON body. The `smoke` module runs a fixed set of
//! lookups and prints what came back; `analysis` turns occurrence samples
//! into per-interval and per-country summaries.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use paleodb::{PaleoDbClient, QueryParams};
//!
//! # async fn run() -> Result<(), paleodb::Error> {
//! let client = PaleoDbClient::new(None, None)?;
//! let params = QueryParams::new().with("name", "Cretaceous");
//! let response = client.get("intervals/list", &params).await?;
//! println!("{:?}", response.summary().keys);
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod client;
pub mod clients;
pub mod error;
pub mod params;
pub mod report;
pub mod smoke;
pub mod testing;
pub mod transport;
pub mod types;

// Re-exports
pub use analysis::{DiscoverSummary, GeographicDistribution, OccurrenceRecord, Period};
pub use client::{ApiCaller, PaleoDbClient, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
pub use clients::{IntervalsClient, OccurrencesClient, TaxaClient};
pub use error::{Error, PaleoDbError};
pub use params::{ParamValue, QueryParams};
pub use smoke::{default_checks, run_all, run_check, run_taxon_detail, SmokeCheck};
pub use transport::{build_endpoint_url, decode_response, HttpTransport};
pub use types::{ApiResponse, RawResponse, ResponseSummary};
