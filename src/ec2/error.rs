use thiserror::Error;

/// Errors from the upstream inventory call. Auth, network, throttling and
/// malformed responses all land in the same bucket; callers never retry.
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("DescribeInstances failed: {0}")]
    Describe(String),
}
