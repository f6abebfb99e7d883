use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::module_system::descriptor::ModuleDescriptor;

/// A resolved mapping from one of a module's declared roles to the name of
/// the module that will provide it.
///
/// Bindings are computed once per application assembly by an external
/// assembler; the kernel consumes them and assumes the resulting graph is
/// acyclic (the graph walker still fails fast if it is not).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyBinding {
    /// The consumer-local role name
    pub role: String,

    /// The name of the providing module
    pub provider: String,
}

impl DependencyBinding {
    /// Create a new binding
    pub fn new(role: &str, provider: &str) -> Self {
        Self {
            role: role.to_string(),
            provider: provider.to_string(),
        }
    }
}

/// One module of an application assembly: its immutable descriptor plus the
/// bindings chosen for its declared roles.
#[derive(Debug, Clone)]
pub struct ModuleProfile {
    /// The module's metadata, shared by reference
    pub descriptor: Arc<ModuleDescriptor>,

    /// Role bindings for this module
    pub bindings: Vec<DependencyBinding>,
}

impl ModuleProfile {
    /// Create a profile with no bindings
    pub fn new(descriptor: ModuleDescriptor) -> Self {
        Self {
            descriptor: Arc::new(descriptor),
            bindings: Vec::new(),
        }
    }

    /// Create a profile with the given bindings
    pub fn with_bindings(descriptor: ModuleDescriptor, bindings: Vec<DependencyBinding>) -> Self {
        Self {
            descriptor: Arc::new(descriptor),
            bindings,
        }
    }

    /// Add a binding, builder style
    pub fn bind(mut self, role: &str, provider: &str) -> Self {
        self.bindings.push(DependencyBinding::new(role, provider));
        self
    }

    /// The module name, as declared by the descriptor
    pub fn name(&self) -> &str {
        &self.descriptor.name
    }

    /// Look up the binding for a role, if one was assembled
    pub fn binding_for(&self, role: &str) -> Option<&DependencyBinding> {
        self.bindings.iter().find(|b| b.role == role)
    }
}
