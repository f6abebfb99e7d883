//! # Modulith Core
//!
//! The lifecycle orchestration kernel of the Modulith application container.
//!
//! An application is a named set of modules, each described by an immutable
//! [`ModuleDescriptor`] and wired to its providers through explicit
//! [`DependencyBinding`]s. The kernel takes that assembled set and runs it:
//! ordering the dependency graph, driving every module through the staged
//! startup protocol, and later unwinding the whole set in reverse.
//!
//! ## Architecture
//!
//! The crate is organized into subsystems:
//!
//! - **[`module_system`]**: The static model (descriptors, capabilities,
//!   profiles), the runtime registry and entries, the [`Module`] trait and
//!   its capability probes, and per-module logging.
//! - **[`lifecycle`]**: The dependency graph walker and the two phase
//!   executors (fail-fast startup, best-effort shutdown).
//! - **[`config`]**: TOML-backed configuration documents and repositories.
//! - **[`container`]**: The [`ModuleContainer`] facade tying it together,
//!   plus the pluggable environment facilities.
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use modulith_core::{
//!     ModuleContainer, ModuleProfile,
//!     module_system::descriptor::ModuleDescriptor,
//! };
//! # use modulith_core::container::{ModuleFactory, FactoryError, ConfigRepository};
//! # use modulith_core::config::{ConfigData, error::ConfigError};
//! # use modulith_core::module_system::Module;
//! # struct F;
//! # impl ModuleFactory for F {
//! #     fn create(&self, t: &str, _u: &str) -> Result<Arc<dyn Module>, FactoryError> {
//! #         Err(FactoryError::new(t, "unknown type"))
//! #     }
//! # }
//! # struct R;
//! # impl ConfigRepository for R {
//! #     fn get_configuration(&self, a: &str, m: &str) -> Result<ConfigData, ConfigError> {
//! #         Err(ConfigError::NotFound { app: a.into(), module: m.into() })
//! #     }
//! # }
//!
//! fn main() -> modulith_core::Result<()> {
//!     let mut container = ModuleContainer::new("demo", Arc::new(F), Arc::new(R));
//!
//!     let descriptor = ModuleDescriptor::builder("cache", "demo::CacheModule").build();
//!     container.add_module(ModuleProfile::new(descriptor))?;
//!
//!     container.start()?;
//!     let report = container.stop()?;
//!     assert!(report.is_clean());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod container;
pub mod lifecycle;
pub mod module_system;

pub use config::ConfigData;
pub use container::{
    ConfigRepository, ContainerListener, Error, FactoryError, ListenerSet, ModuleContainer,
    ModuleFactory, Result,
};
pub use lifecycle::{GraphError, LifecycleError, LifecycleStage, ShutdownReport};
pub use module_system::{
    Capability, CapabilityRef, DependencyBinding, DependencyDecl, Module, ModuleContext,
    ModuleDescriptor, ModuleEntry, ModuleLogger, ModuleProfile, ModuleRegistry, ModuleState,
    ModuleSystemError, ServiceMap,
};

// Integration tests
#[cfg(test)]
mod tests;
