use std::collections::HashMap;

use crate::config::error::ConfigError;
use crate::config::ConfigData;
use crate::container::facilities::ConfigRepository;

/// In-memory configuration repository, populated by the host before the
/// container starts. Handy for embedding and for tests.
#[derive(Debug, Default)]
pub struct MemoryConfigRepository {
    documents: HashMap<String, ConfigData>,
}

impl MemoryConfigRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            documents: HashMap::new(),
        }
    }

    /// Store a module's configuration document
    pub fn store(&mut self, app_name: &str, module_name: &str, config: ConfigData) {
        self.documents
            .insert(Self::key(app_name, module_name), config);
    }

    fn key(app_name: &str, module_name: &str) -> String {
        format!("{}/{}", app_name, module_name)
    }
}

impl ConfigRepository for MemoryConfigRepository {
    fn get_configuration(
        &self,
        app_name: &str,
        module_name: &str,
    ) -> Result<ConfigData, ConfigError> {
        self.documents
            .get(&Self::key(app_name, module_name))
            .cloned()
            .ok_or_else(|| ConfigError::NotFound {
                app: app_name.to_string(),
                module: module_name.to_string(),
            })
    }
}
