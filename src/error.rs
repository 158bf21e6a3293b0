/* src/error.rs */

use thiserror::Error;

/// Result type alias for operations that may fail with `ResolveError`.
pub type Result<T> = std::result::Result<T, ResolveError>;

/// Errors that can occur while resolving a peer address.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The connection peer string did not parse as a valid IPv4/IPv6 address.
    #[error("invalid peer address: {0}")]
    InvalidAddress(String),
}
