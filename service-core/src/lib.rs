//! service-core: Shared infrastructure for the inquiry functions.
pub mod config;
pub mod error;
pub mod observability;
pub mod response;

pub use anyhow;
pub use http;
pub use serde;
pub use serde_json;
pub use tracing;
