//! Data model types for the PaleoDB client.

pub mod response;

// Re-exports
pub use response::{ApiResponse, RawResponse, ResponseSummary};
