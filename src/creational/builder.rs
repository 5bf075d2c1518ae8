//! Builder: assemble a complex value step by step, validating at the end.
//!
//! Consuming `with_*` methods chain naturally and make the final `build()`
//! the single place where invariants are checked.

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("bind address is required")]
    MissingAddress,
    #[error("worker count must be at least 1, got {0}")]
    NoWorkers(usize),
    #[error("TLS requires both a certificate and a key")]
    IncompleteTls,
}

/// The finished product. Only `build()` can construct one, so every
/// instance satisfies the builder's checks.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ServerConfig {
    address: String,
    port: u16,
    workers: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    tls: Option<TlsConfig>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct TlsConfig {
    cert_path: String,
    key_path: String,
}

#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    address: Option<String>,
    port: u16,
    workers: usize,
    cert_path: Option<String>,
    key_path: Option<String>,
}

impl ServerConfigBuilder {
    pub fn new() -> Self {
        Self {
            port: 8080,
            workers: 4,
            ..Self::default()
        }
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_cert(mut self, cert_path: impl Into<String>) -> Self {
        self.cert_path = Some(cert_path.into());
        self
    }

    pub fn with_key(mut self, key_path: impl Into<String>) -> Self {
        self.key_path = Some(key_path.into());
        self
    }

    pub fn build(self) -> Result<ServerConfig, BuildError> {
        let address = self.address.ok_or(BuildError::MissingAddress)?;
        if self.workers == 0 {
            return Err(BuildError::NoWorkers(0));
        }
        let tls = match (self.cert_path, self.key_path) {
            (Some(cert_path), Some(key_path)) => Some(TlsConfig {
                cert_path,
                key_path,
            }),
            (None, None) => None,
            _ => return Err(BuildError::IncompleteTls),
        };
        Ok(ServerConfig {
            address,
            port: self.port,
            workers: self.workers,
            tls,
        })
    }
}

pub fn demo() {
    let config = ServerConfigBuilder::new()
        .with_address("0.0.0.0")
        .with_port(9090)
        .with_workers(8)
        .with_cert("/etc/certs/server.pem")
        .with_key("/etc/certs/server.key")
        .build();

    match config {
        Ok(config) => {
            println!("built step by step:");
            match serde_json::to_string_pretty(&config) {
                Ok(json) => println!("{json}"),
                Err(err) => println!("  (unrenderable: {err})"),
            }
        }
        Err(err) => println!("build failed: {err}"),
    }

    // Validation happens once, at the end of the chain.
    if let Err(err) = ServerConfigBuilder::new().with_workers(0).build() {
        println!("skipping the address: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_with_defaults() {
        let config = ServerConfigBuilder::new()
            .with_address("127.0.0.1")
            .build()
            .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.workers, 4);
        assert!(config.tls.is_none());
    }

    #[test]
    fn test_missing_address_is_rejected() {
        let err = ServerConfigBuilder::new().build().unwrap_err();
        assert_eq!(err, BuildError::MissingAddress);
    }

    #[test]
    fn test_zero_workers_rejected() {
        let err = ServerConfigBuilder::new()
            .with_address("127.0.0.1")
            .with_workers(0)
            .build()
            .unwrap_err();
        assert_eq!(err, BuildError::NoWorkers(0));
    }

    #[test]
    fn test_tls_round_trips_through_builder() {
        let config = ServerConfigBuilder::new()
            .with_address("127.0.0.1")
            .with_cert("cert.pem")
            .with_key("key.pem")
            .build()
            .unwrap();
        assert!(config.tls.is_some());
    }

    #[test]
    fn test_cert_without_key_rejected() {
        let err = ServerConfigBuilder::new()
            .with_address("127.0.0.1")
            .with_cert("cert.pem")
            .build()
            .unwrap_err();
        assert_eq!(err, BuildError::IncompleteTls);
    }
}
