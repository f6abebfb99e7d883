use crate::config::error::ConfigError;
use crate::container::facilities::FactoryError;
use crate::lifecycle::error::{GraphError, LifecycleError};
use crate::module_system::error::ModuleSystemError;

/// Top-level error type aggregating every subsystem failure
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Module system error: {0}")]
    ModuleSystem(#[from] ModuleSystemError),

    #[error("Dependency graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("Lifecycle error: {0}")]
    Lifecycle(#[from] LifecycleError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Factory error: {0}")]
    Factory(#[from] FactoryError),

    #[error("Application '{0}' is already running")]
    AlreadyRunning(String),

    #[error("Application '{0}' is not running")]
    NotRunning(String),

    #[error("{0}")]
    Other(String),
}

impl From<&str> for Error {
    fn from(message: &str) -> Self {
        Error::Other(message.to_string())
    }
}

impl From<String> for Error {
    fn from(message: String) -> Self {
        Error::Other(message)
    }
}

/// Convenience alias used across the crate
pub type Result<T> = std::result::Result<T, Error>;
