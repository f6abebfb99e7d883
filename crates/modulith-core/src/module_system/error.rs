//! # Modulith Core Module System Errors
//!
//! Defines error types specific to module registration and metadata.
//!
//! These are configuration-class errors: every one of them is fatal to the
//! startup of the application it occurs in. Soft resolution gaps (an
//! optional role left unbound, a provider not yet offering a capability at
//! resolve time) are deliberately not errors and are only diagnosed through
//! the log.

#[derive(Debug, thiserror::Error)]
pub enum ModuleSystemError {
    /// A module with the same name is already registered
    #[error("Module already registered: {0}")]
    DuplicateModule(String),

    /// A lookup referenced a module the registry does not hold
    #[error("Module not found: {0}")]
    ModuleNotFound(String),

    /// An assembled binding names a role the descriptor never declared
    #[error("Module '{module}' binds unknown role '{role}'")]
    UndeclaredRole { module: String, role: String },

    /// A required role was left without a binding by the assembler
    #[error("Required role '{role}' of module '{module}' has no binding")]
    UnboundRole { module: String, role: String },

    /// The created instance does not implement an advertised capability
    #[error("Module '{module}' fails to implement advertised capability '{capability}'")]
    CapabilityNotImplemented { module: String, capability: String },

    /// A descriptor document could not be parsed
    #[error("Module descriptor error: {message}")]
    DescriptorError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}
