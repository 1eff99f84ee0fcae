use crate::error::ServiceError;
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 7004;

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    pub port: u16,
    pub seed_path: Option<PathBuf>,
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self, ServiceError> {
        Self::from_vars(
            std::env::var("PORT").ok(),
            std::env::var("CATALOG_SEED_PATH").ok(),
        )
    }

    fn from_vars(port: Option<String>, seed_path: Option<String>) -> Result<Self, ServiceError> {
        let port = match port {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|e| ServiceError::Config(format!("invalid PORT '{}': {}", raw, e)))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            port,
            seed_path: seed_path.filter(|p| !p.is_empty()).map(PathBuf::from),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
