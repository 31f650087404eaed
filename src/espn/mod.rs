//! Live data from ESPN's public NFL APIs
//!
//! - `http`: endpoint catalogue and the async client
//! - `types`: validated response shapes

pub mod http;
pub mod types;

pub use http::{Capability, EndpointCatalogue, EspnClient, FetchOutcome, UnavailableReason};
