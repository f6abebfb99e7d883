use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// No configuration document exists for the module
    #[error("Configuration not found for module '{module}' of application '{app}'")]
    NotFound { app: String, module: String },

    /// The document exists but could not be read
    #[error("I/O error reading configuration at '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document exists but is not valid TOML
    #[error("Failed to parse configuration at '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A bare document string failed to deserialize
    #[error("Failed to deserialize configuration: {0}")]
    Deserialize(#[from] toml::de::Error),

    /// A value could not be serialized into the document
    #[error("Failed to serialize configuration value: {0}")]
    Serialize(String),
}
