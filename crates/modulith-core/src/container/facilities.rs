//! Pluggable container facilities.
//!
//! The container delegates everything environment-specific through these
//! traits: how module instances come into existence, where configuration
//! documents live, and who observes lifecycle progress. Production embedders
//! supply real implementations; the test suites supply in-memory fakes.

use std::sync::Arc;

use crate::config::ConfigData;
use crate::config::error::ConfigError;
use crate::module_system::descriptor::ModuleDescriptor;
use crate::module_system::traits::Module;

/// Instantiation failure reported by a [`ModuleFactory`]
#[derive(Debug, thiserror::Error)]
#[error("Failed to create module of type '{type_name}': {message}")]
pub struct FactoryError {
    /// The implementation type the factory was asked for
    pub type_name: String,
    /// Factory-specific description of the failure
    pub message: String,
}

impl FactoryError {
    pub fn new(type_name: &str, message: impl Into<String>) -> Self {
        Self {
            type_name: type_name.to_string(),
            message: message.into(),
        }
    }
}

/// Creates module instances from the implementation type named in a
/// descriptor.
///
/// The isolation unit identifies the code-loading scope the instance should
/// come from; factories that have a single flat scope may ignore it.
pub trait ModuleFactory {
    fn create(&self, type_name: &str, isolation_unit: &str) -> Result<Arc<dyn Module>, FactoryError>;
}

/// Looks up the configuration document for one module of one application
pub trait ConfigRepository {
    fn get_configuration(&self, app_name: &str, module_name: &str) -> Result<ConfigData, ConfigError>;
}

/// Observer of container and module lifecycle progress.
///
/// All methods default to no-ops so an implementation only overrides the
/// notifications it cares about. Listener callbacks must not fail; they are
/// purely observational.
pub trait ContainerListener {
    /// The container is about to walk the startup order
    fn application_starting(&self, _app_name: &str) {}

    /// Every module reached `Started`
    fn application_started(&self, _app_name: &str) {}

    /// The container is about to walk the shutdown order
    fn application_stopping(&self, _app_name: &str) {}

    /// The shutdown walk completed
    fn application_stopped(&self, _app_name: &str) {}

    /// Startup aborted; the message names the failing module and stage
    fn application_failed(&self, _app_name: &str, _message: &str) {}

    /// One module completed the startup protocol
    fn module_started(&self, _name: &str, _module: &Arc<dyn Module>, _descriptor: &ModuleDescriptor) {
    }

    /// One module is about to be stopped and disposed
    fn module_stopping(&self, _name: &str, _module: &Arc<dyn Module>, _descriptor: &ModuleDescriptor) {
    }
}

/// The container's registered listeners, notified in registration order
#[derive(Default)]
pub struct ListenerSet {
    listeners: Vec<Box<dyn ContainerListener>>,
}

impl ListenerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, listener: Box<dyn ContainerListener>) {
        self.listeners.push(listener);
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    pub fn application_starting(&self, app_name: &str) {
        for listener in &self.listeners {
            listener.application_starting(app_name);
        }
    }

    pub fn application_started(&self, app_name: &str) {
        for listener in &self.listeners {
            listener.application_started(app_name);
        }
    }

    pub fn application_stopping(&self, app_name: &str) {
        for listener in &self.listeners {
            listener.application_stopping(app_name);
        }
    }

    pub fn application_stopped(&self, app_name: &str) {
        for listener in &self.listeners {
            listener.application_stopped(app_name);
        }
    }

    pub fn application_failed(&self, app_name: &str, message: &str) {
        for listener in &self.listeners {
            listener.application_failed(app_name, message);
        }
    }

    pub fn module_started(
        &self,
        name: &str,
        module: &Arc<dyn Module>,
        descriptor: &ModuleDescriptor,
    ) {
        for listener in &self.listeners {
            listener.module_started(name, module, descriptor);
        }
    }

    pub fn module_stopping(
        &self,
        name: &str,
        module: &Arc<dyn Module>,
        descriptor: &ModuleDescriptor,
    ) {
        for listener in &self.listeners {
            listener.module_stopping(name, module, descriptor);
        }
    }
}

impl std::fmt::Debug for ListenerSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerSet")
            .field("len", &self.listeners.len())
            .finish()
    }
}
