// Client-side modules for talking to the dashboard endpoint
pub mod client;
pub mod instances;

// Re-export commonly used functions
pub use client::build_http_client;
pub use instances::{fetch_instances, FetchError};
