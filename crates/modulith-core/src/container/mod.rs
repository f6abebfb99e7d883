//! # Modulith Core Container
//!
//! The assembly surface of the kernel: the [`ModuleContainer`] owns the
//! registry for one application, accepts module profiles and listeners, and
//! drives the lifecycle phase executors.
//!
//! ## Key Submodules and Responsibilities:
//!
//! - **[`facilities`]**: The pluggable collaborator traits
//!   ([`ModuleFactory`], [`ConfigRepository`], [`ContainerListener`]) and
//!   the [`ListenerSet`] that fans out notifications.
//! - **[`error`]**: The crate-level [`Error`] aggregating every subsystem
//!   failure, and the [`Result`] alias.

pub mod error;
pub mod facilities;

pub use error::{Error, Result};
pub use facilities::{
    ConfigRepository, ContainerListener, FactoryError, ListenerSet, ModuleFactory,
};

use std::collections::HashMap;
use std::sync::Arc;

use crate::lifecycle::graph;
use crate::lifecycle::shutdown::{ShutdownPhase, ShutdownReport};
use crate::lifecycle::startup::StartupPhase;
use crate::module_system::entry::{ModuleEntry, ModuleState};
use crate::module_system::error::ModuleSystemError;
use crate::module_system::profile::ModuleProfile;
use crate::module_system::registry::ModuleRegistry;
use crate::module_system::traits::Module;

/// Lifecycle orchestrator for one application.
///
/// Holds the registry of assembled module profiles and the environment
/// collaborators, and exposes the two macro operations: [`start`], which
/// walks the forward dependency order running the startup protocol, and
/// [`stop`], which walks the reverse order running best-effort shutdown.
///
/// [`start`]: ModuleContainer::start
/// [`stop`]: ModuleContainer::stop
pub struct ModuleContainer {
    app_name: String,
    registry: ModuleRegistry,
    factory: Arc<dyn ModuleFactory>,
    config: Arc<dyn ConfigRepository>,
    listeners: ListenerSet,
    base_context: HashMap<String, String>,
    running: bool,
}

impl ModuleContainer {
    /// Create a container for the named application
    pub fn new(
        app_name: &str,
        factory: Arc<dyn ModuleFactory>,
        config: Arc<dyn ConfigRepository>,
    ) -> Self {
        Self {
            app_name: app_name.to_string(),
            registry: ModuleRegistry::new(),
            factory,
            config,
            listeners: ListenerSet::new(),
            base_context: HashMap::new(),
            running: false,
        }
    }

    /// The application name this container was created for
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Whether [`start`](ModuleContainer::start) has completed successfully
    /// and [`stop`](ModuleContainer::stop) has not yet run
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Register a module profile with the application.
    ///
    /// Validates the profile's bindings against its descriptor before
    /// accepting it: a binding for an undeclared role or a required role
    /// left unbound is rejected here rather than surfacing mid-startup.
    pub fn add_module(&mut self, profile: ModuleProfile) -> Result<()> {
        verify_bindings(&profile)?;
        self.registry.insert(ModuleEntry::new(profile))?;
        Ok(())
    }

    /// Register a lifecycle listener; listeners are notified in
    /// registration order
    pub fn add_listener(&mut self, listener: Box<dyn ContainerListener>) {
        self.listeners.add(listener);
    }

    /// Provide a value for a context key modules may declare
    pub fn set_context_entry(&mut self, key: &str, value: &str) {
        self.base_context.insert(key.to_string(), value.to_string());
    }

    /// The registry of assembled entries
    pub fn registry(&self) -> &ModuleRegistry {
        &self.registry
    }

    /// Current lifecycle state of a registered module
    pub fn state_of(&self, name: &str) -> Result<ModuleState> {
        self.registry
            .get(name)
            .map(|entry| entry.state())
            .ok_or_else(|| ModuleSystemError::ModuleNotFound(name.to_string()).into())
    }

    /// State and instance handle of a registered module; the handle is
    /// present only while the module is started
    pub fn entry_for(&self, name: &str) -> Option<(ModuleState, Option<Arc<dyn Module>>)> {
        self.registry
            .get(name)
            .map(|entry| (entry.state(), entry.instance()))
    }

    /// The startup order of the current assembly: providers before consumers
    pub fn startup_order(&self) -> Result<Vec<String>> {
        Ok(graph::startup_order(&self.registry)?)
    }

    /// The shutdown order of the current assembly: consumers before providers
    pub fn shutdown_order(&self) -> Result<Vec<String>> {
        Ok(graph::shutdown_order(&self.registry)?)
    }

    /// Start the application.
    ///
    /// Orders the graph (failing on cycles or dangling bindings), then walks
    /// the forward order driving every module through the startup protocol.
    /// The first stage failure aborts the walk and is returned; modules
    /// started before the failure stay `Started` and can be released with
    /// [`stop`](ModuleContainer::stop).
    pub fn start(&mut self) -> Result<()> {
        if self.running {
            return Err(Error::AlreadyRunning(self.app_name.clone()));
        }

        log::info!("starting application '{}'", self.app_name);
        self.listeners.application_starting(&self.app_name);

        let order = graph::startup_order(&self.registry)?;
        let phase = StartupPhase::new(
            &self.app_name,
            &*self.factory,
            &*self.config,
            &self.listeners,
            &self.base_context,
        );
        match phase.run(&order, &mut self.registry) {
            Ok(()) => {
                self.running = true;
                self.listeners.application_started(&self.app_name);
                log::info!("application '{}' started", self.app_name);
                Ok(())
            }
            Err(e) => {
                log::error!("application '{}' failed to start: {}", self.app_name, e);
                self.listeners
                    .application_failed(&self.app_name, &e.to_string());
                Err(e.into())
            }
        }
    }

    /// Stop the application.
    ///
    /// Walks the reverse dependency order stopping and disposing every
    /// started module. Shutdown is best-effort: per-module hook failures are
    /// collected into the returned [`ShutdownReport`] and never abort the
    /// walk. Also usable after a failed [`start`](ModuleContainer::start) to
    /// release the modules that did come up.
    pub fn stop(&mut self) -> Result<ShutdownReport> {
        log::info!("stopping application '{}'", self.app_name);
        self.listeners.application_stopping(&self.app_name);

        let order = graph::shutdown_order(&self.registry)?;
        let phase = ShutdownPhase::new(&self.listeners);
        let report = phase.run(&order, &mut self.registry);

        self.running = false;
        self.listeners.application_stopped(&self.app_name);
        if report.is_clean() {
            log::info!("application '{}' stopped", self.app_name);
        } else {
            log::warn!(
                "application '{}' stopped with {} failed hook(s)",
                self.app_name,
                report.failures().len()
            );
        }
        Ok(report)
    }
}

impl std::fmt::Debug for ModuleContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModuleContainer")
            .field("app_name", &self.app_name)
            .field("modules", &self.registry.len())
            .field("running", &self.running)
            .finish()
    }
}

/// Bindings must cover every required role and reference only declared ones.
fn verify_bindings(profile: &ModuleProfile) -> Result<()> {
    let descriptor = &profile.descriptor;
    for binding in &profile.bindings {
        if descriptor.dependency(&binding.role).is_none() {
            return Err(ModuleSystemError::UndeclaredRole {
                module: profile.name().to_string(),
                role: binding.role.clone(),
            }
            .into());
        }
    }
    for decl in &descriptor.dependencies {
        if !decl.optional && profile.binding_for(&decl.role).is_none() {
            return Err(ModuleSystemError::UnboundRole {
                module: profile.name().to_string(),
                role: decl.role.clone(),
            }
            .into());
        }
    }
    Ok(())
}
