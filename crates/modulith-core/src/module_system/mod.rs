//! # Modulith Core Module System
//!
//! This module defines the static and runtime model of the modules hosted by
//! the container. It covers everything the lifecycle kernel needs to know
//! about a module before and while it runs.
//!
//! ## Key Submodules and Responsibilities:
//!
//! - **[`descriptor`]**: The immutable metadata of a module
//!   ([`ModuleDescriptor`]): offered capabilities, required dependency
//!   roles, logger categories and context-entry keys.
//! - **[`profile`]**: A descriptor paired with its resolved
//!   [`DependencyBinding`]s, as produced by an external assembler.
//! - **[`entry`]**: The mutable per-instance record ([`ModuleEntry`]) owning
//!   the three-state lifecycle machine and the instance handle.
//! - **[`registry`]**: The insertion-ordered name → entry table
//!   ([`ModuleRegistry`]) owned by the container and walked by the phase
//!   executors.
//! - **[`traits`]**: The [`Module`] trait plus the optional lifecycle-stage
//!   traits modules are probed for (logging, context, dependency,
//!   configuration, initialization and start participation).
//! - **[`context`]**: The read-only key/value [`ModuleContext`] injected
//!   during startup.
//! - **[`logging`]**: The [`ModuleLogger`] handed to modules during the
//!   logging-attachment stage.
//! - **[`error`]**: Error types ([`ModuleSystemError`]) for registration and
//!   metadata failures.
pub mod context;
pub mod descriptor;
pub mod entry;
pub mod error;
pub mod logging;
pub mod profile;
pub mod registry;
pub mod traits;

pub use context::ModuleContext;
pub use descriptor::{Capability, CapabilityRef, DependencyDecl, ModuleDescriptor};
pub use entry::{ModuleEntry, ModuleState};
pub use error::ModuleSystemError;
pub use logging::ModuleLogger;
pub use profile::{DependencyBinding, ModuleProfile};
pub use registry::ModuleRegistry;
pub use traits::{Module, ServiceMap};

// Test module declaration
#[cfg(test)]
mod tests;
