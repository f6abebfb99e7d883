use std::fmt;

use semver::{Version, VersionReq};
use serde::{Deserialize, Serialize};

use crate::module_system::error::ModuleSystemError;

/// A named service interface a module offers, with the version it offers it at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capability {
    /// The service interface name, e.g. `"storage.Repository"`
    pub name: String,

    /// The version of the interface the provider implements
    pub version: Version,
}

impl Capability {
    /// Create a new capability
    pub fn new(name: &str, version: Version) -> Self {
        Self {
            name: name.to_string(),
            version,
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.name, self.version)
    }
}

/// A reference to a capability some other module must provide.
///
/// The requirement string follows semver constraint syntax; an absent
/// requirement means any version is acceptable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapabilityRef {
    /// The required service interface name
    pub name: String,

    /// The acceptable version range
    #[serde(default = "CapabilityRef::any_version")]
    pub version_req: VersionReq,
}

impl CapabilityRef {
    /// Create a reference accepting any version of the named capability
    pub fn any(name: &str) -> Self {
        Self {
            name: name.to_string(),
            version_req: Self::any_version(),
        }
    }

    /// Create a reference with an explicit version requirement
    pub fn versioned(name: &str, version_req: VersionReq) -> Self {
        Self {
            name: name.to_string(),
            version_req,
        }
    }

    fn any_version() -> VersionReq {
        VersionReq::STAR
    }

    /// Check whether the given capability structurally satisfies this
    /// reference: same interface name and a version inside the range.
    pub fn matches(&self, capability: &Capability) -> bool {
        self.name == capability.name && self.version_req.matches(&capability.version)
    }
}

impl fmt::Display for CapabilityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.version_req)
    }
}

/// A dependency declared by a module: a module-local role name bound to the
/// capability the provider of that role must offer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DependencyDecl {
    /// The module-local name for the dependency
    pub role: String,

    /// The capability the bound provider must offer
    pub capability: CapabilityRef,

    /// Whether the module can run without this role being bound
    #[serde(default)]
    pub optional: bool,
}

impl DependencyDecl {
    /// Create a new required dependency declaration
    pub fn required(role: &str, capability: CapabilityRef) -> Self {
        Self {
            role: role.to_string(),
            capability,
            optional: false,
        }
    }

    /// Create a new optional dependency declaration
    pub fn optional(role: &str, capability: CapabilityRef) -> Self {
        Self {
            role: role.to_string(),
            capability,
            optional: true,
        }
    }
}

impl fmt::Display for DependencyDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let requirement_type = if self.optional { "Optional" } else { "Requires" };
        write!(f, "{} role: {} -> {}", requirement_type, self.role, self.capability)
    }
}

/// Immutable metadata describing one module, created once at metadata-parse
/// time and shared by reference afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleDescriptor {
    /// Unique module name within the application
    pub name: String,

    /// Name of the implementation type the module factory instantiates
    pub type_name: String,

    /// The isolation unit the implementation type is resolved in; defaults
    /// to the application-wide unit when absent
    #[serde(default)]
    pub isolation_unit: Option<String>,

    /// Declared dependency roles, in declaration order
    #[serde(default)]
    pub dependencies: Vec<DependencyDecl>,

    /// Capabilities this module advertises to other modules
    #[serde(default)]
    pub capabilities: Vec<Capability>,

    /// Logger categories the module may open under its scoped logger
    #[serde(default)]
    pub logger_categories: Vec<String>,

    /// Context-entry keys the module wants copied into its context
    #[serde(default)]
    pub context_keys: Vec<String>,
}

impl ModuleDescriptor {
    /// Create a minimal descriptor with no dependencies or capabilities
    pub fn new(name: &str, type_name: &str) -> Self {
        Self {
            name: name.to_string(),
            type_name: type_name.to_string(),
            isolation_unit: None,
            dependencies: Vec::new(),
            capabilities: Vec::new(),
            logger_categories: Vec::new(),
            context_keys: Vec::new(),
        }
    }

    /// Start building a descriptor fluently
    pub fn builder(name: &str, type_name: &str) -> DescriptorBuilder {
        DescriptorBuilder::new(name, type_name)
    }

    /// Look up a declared dependency by role name
    pub fn dependency(&self, role: &str) -> Option<&DependencyDecl> {
        self.dependencies.iter().find(|d| d.role == role)
    }

    /// Check whether any offered capability satisfies the given reference
    pub fn offers(&self, reference: &CapabilityRef) -> bool {
        self.capabilities.iter().any(|c| reference.matches(c))
    }

    /// Parse a descriptor from its TOML metadata document
    pub fn from_toml_str(document: &str) -> Result<Self, ModuleSystemError> {
        toml::from_str(document).map_err(|e| ModuleSystemError::DescriptorError {
            message: format!("failed to parse module descriptor: {}", e),
            source: Some(Box::new(e)),
        })
    }
}

/// Builder for assembling a module descriptor in code
pub struct DescriptorBuilder {
    descriptor: ModuleDescriptor,
}

impl DescriptorBuilder {
    /// Create a new descriptor builder
    pub fn new(name: &str, type_name: &str) -> Self {
        Self {
            descriptor: ModuleDescriptor::new(name, type_name),
        }
    }

    /// Set the isolation unit the implementation type is resolved in
    pub fn isolation_unit(mut self, unit: &str) -> Self {
        self.descriptor.isolation_unit = Some(unit.to_string());
        self
    }

    /// Add a required dependency role
    pub fn requires(mut self, role: &str, capability: CapabilityRef) -> Self {
        self.descriptor
            .dependencies
            .push(DependencyDecl::required(role, capability));
        self
    }

    /// Add an optional dependency role
    pub fn optionally(mut self, role: &str, capability: CapabilityRef) -> Self {
        self.descriptor
            .dependencies
            .push(DependencyDecl::optional(role, capability));
        self
    }

    /// Add an offered capability
    pub fn offers(mut self, capability: Capability) -> Self {
        self.descriptor.capabilities.push(capability);
        self
    }

    /// Add a logger category
    pub fn logger_category(mut self, category: &str) -> Self {
        self.descriptor.logger_categories.push(category.to_string());
        self
    }

    /// Add a context-entry key
    pub fn context_key(mut self, key: &str) -> Self {
        self.descriptor.context_keys.push(key.to_string());
        self
    }

    /// Build the descriptor
    pub fn build(self) -> ModuleDescriptor {
        self.descriptor
    }
}
