//! Service-level errors.

use thiserror::Error;

use crate::config::ConfigError;
use crate::render::CatalogError;

/// Failures that stop the service from starting or serving.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("translation catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("TLS error: {0}")]
    Tls(String),

    #[error("invalid address '{0}'")]
    Address(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
