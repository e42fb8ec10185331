//! Testing utilities for the PaleoDB client.
//!
//! Provides a mock caller for exercising code that depends on
//! [`crate::ApiCaller`] without network access.

mod mock;

pub use mock::{MockCall, MockPaleoDbClient, MockResponse};
