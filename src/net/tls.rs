//! TLS configuration and certificate loading.

use std::path::Path;

use axum_server::tls_rustls::RustlsConfig;

use crate::config::TlsConfig;
use crate::error::AppError;

/// Load the certificate chain and private key named by the listener config.
pub async fn load_tls_config(config: &TlsConfig) -> Result<RustlsConfig, AppError> {
    let cert_path = Path::new(&config.cert_path);
    let key_path = Path::new(&config.key_path);

    for (kind, path) in [("certificate", cert_path), ("private key", key_path)] {
        if !path.exists() {
            return Err(AppError::Tls(format!("{} file not found: {}", kind, path.display())));
        }
    }

    RustlsConfig::from_pem_file(cert_path, key_path)
        .await
        .map_err(|e| AppError::Tls(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_files_are_reported() {
        let config = TlsConfig {
            cert_path: "missing-cert.pem".into(),
            key_path: "missing-key.pem".into(),
        };
        let err = load_tls_config(&config).await.unwrap_err();
        assert!(err.to_string().contains("certificate file not found"));
    }
}
