use std::collections::HashMap;

/// Context key under which the application name is published
pub const APP_NAME_KEY: &str = "app.name";

/// Context key under which the module's own name is published
pub const MODULE_NAME_KEY: &str = "module.name";

/// Read-only key/value view injected into a module during the
/// context-injection stage.
///
/// The kernel builds one context per module from the standard entries
/// ([`APP_NAME_KEY`], [`MODULE_NAME_KEY`]) plus the context-entry keys the
/// descriptor declares, copied from the container's base context. Modules
/// only read from it.
#[derive(Debug, Clone, Default)]
pub struct ModuleContext {
    values: HashMap<String, String>,
}

impl ModuleContext {
    /// Create an empty context
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Add an entry. Used by the kernel while assembling the context; the
    /// injected value is shared immutably.
    pub fn insert(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    /// Get an entry by key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Whether the context holds an entry for the key
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// All keys present in the context
    pub fn keys(&self) -> Vec<&str> {
        self.values.keys().map(String::as_str).collect()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the context is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
