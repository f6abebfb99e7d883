use std::collections::HashMap;

use crate::module_system::entry::ModuleEntry;
use crate::module_system::error::ModuleSystemError;

/// The name → entry table for one running application.
///
/// Insertion order is preserved and drives the deterministic tie-breaking of
/// the dependency graph walker: among independent modules, traversal follows
/// registration order. The registry is owned by the container and handed to
/// the phase executors by reference; it is never shared across threads.
#[derive(Debug, Default)]
pub struct ModuleRegistry {
    /// Registration order of module names
    names: Vec<String>,
    /// Entries keyed by module name
    entries: HashMap<String, ModuleEntry>,
}

impl ModuleRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            names: Vec::new(),
            entries: HashMap::new(),
        }
    }

    /// Add an entry. Fails if a module with the same name is already present.
    pub fn insert(&mut self, entry: ModuleEntry) -> Result<(), ModuleSystemError> {
        let name = entry.name().to_string();
        if self.entries.contains_key(&name) {
            return Err(ModuleSystemError::DuplicateModule(name));
        }
        self.names.push(name.clone());
        self.entries.insert(name, entry);
        Ok(())
    }

    /// Check whether a module is registered
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Get an entry by module name
    pub fn get(&self, name: &str) -> Option<&ModuleEntry> {
        self.entries.get(name)
    }

    /// Get a mutable entry by module name
    pub fn get_mut(&mut self, name: &str) -> Option<&mut ModuleEntry> {
        self.entries.get_mut(name)
    }

    /// Module names in registration order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Iterate entries in registration order
    pub fn iter(&self) -> impl Iterator<Item = &ModuleEntry> {
        self.names.iter().filter_map(|name| self.entries.get(name))
    }

    /// Number of registered modules
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
