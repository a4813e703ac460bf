//! Server startup and runtime errors.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors that stop the server process.
///
/// Request handling itself cannot fail; everything here happens before
/// the listener accepts connections or while it is being driven.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_converts() {
        let err: ServerError = ConfigError::InvalidLogFormat("xml".to_string()).into();
        assert!(matches!(err, ServerError::Config(_)));
        assert!(err.to_string().starts_with("configuration error:"));
    }

    #[test]
    fn bind_error_names_address() {
        let err = ServerError::Bind {
            addr: "0.0.0.0:80".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert!(err.to_string().contains("0.0.0.0:80"));
    }
}
