//! Error types for the Dietly client core

use thiserror::Error;

/// Transport and response-validation failures.
///
/// The remote API signals errors through non-2xx statuses or schema
/// mismatches, never through a parallel machine-readable error payload,
/// so every failure collapses into a single variant carrying a
/// human-readable message. The presentation layer must always have a
/// string available to show.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    #[error("Request failed: {0}")]
    RequestFailed(String),
}

/// Local identity-store failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("No identity record stored")]
    NotFound,

    #[error("Storage read failed: {0}")]
    ReadError(String),

    #[error("Storage write failed: {0}")]
    WriteError(String),
}

/// Combined failure surface for operations that touch both the network
/// and the local identity store (user onboarding, account deletion).
/// Both variants are terminal to the calling operation; no layer
/// retries automatically.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_error_preserves_message() {
        let err = NetworkError::RequestFailed("status 500: boom".to_string());
        assert_eq!(err.to_string(), "Request failed: status 500: boom");
    }

    #[test]
    fn test_store_errors_have_display_messages() {
        assert!(!StoreError::NotFound.to_string().is_empty());
        assert!(StoreError::WriteError("disk full".to_string())
            .to_string()
            .contains("disk full"));
    }
}
