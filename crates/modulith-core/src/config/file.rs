use std::path::PathBuf;

use crate::config::error::ConfigError;
use crate::config::ConfigData;
use crate::container::facilities::ConfigRepository;

/// Configuration repository backed by a directory tree of TOML documents.
///
/// The document for module `m` of application `a` lives at
/// `<root>/a/m.toml`. A missing document is reported as
/// [`ConfigError::NotFound`]; the startup executor treats that as fatal for
/// any module that accepts configuration.
#[derive(Debug, Clone)]
pub struct FileConfigRepository {
    root: PathBuf,
}

impl FileConfigRepository {
    /// Create a repository rooted at the given directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The repository root directory
    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    fn document_path(&self, app_name: &str, module_name: &str) -> PathBuf {
        self.root
            .join(app_name)
            .join(format!("{}.toml", module_name))
    }
}

impl ConfigRepository for FileConfigRepository {
    fn get_configuration(
        &self,
        app_name: &str,
        module_name: &str,
    ) -> Result<ConfigData, ConfigError> {
        let path = self.document_path(app_name, module_name);
        if !path.is_file() {
            return Err(ConfigError::NotFound {
                app: app_name.to_string(),
                module: module_name.to_string(),
            });
        }
        let raw = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse { path, source })
    }
}
