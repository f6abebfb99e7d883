//! Startup phase executor.
//!
//! Walks the forward order produced by the graph walker and drives every
//! `Void` module through the seven-stage startup protocol: creation,
//! logging attachment, context injection, dependency injection,
//! configuration injection, initialization, start.
//!
//! Startup is fail-fast: the first stage failure is wrapped with the
//! offending module and stage and aborts the startup of the entire
//! application. This is the deliberate counterpart to the shutdown
//! executor's best-effort policy.

use std::collections::HashMap;
use std::sync::Arc;

use crate::container::facilities::{ConfigRepository, ListenerSet, ModuleFactory};
use crate::lifecycle::error::{LifecycleError, LifecycleStage};
use crate::lifecycle::resolver;
use crate::module_system::context::{ModuleContext, APP_NAME_KEY, MODULE_NAME_KEY};
use crate::module_system::descriptor::ModuleDescriptor;
use crate::module_system::entry::ModuleState;
use crate::module_system::error::ModuleSystemError;
use crate::module_system::logging::ModuleLogger;
use crate::module_system::registry::ModuleRegistry;
use crate::module_system::traits::Module;

/// One startup phase walk over an application's registry
pub struct StartupPhase<'a> {
    app_name: &'a str,
    factory: &'a dyn ModuleFactory,
    config: &'a dyn ConfigRepository,
    listeners: &'a ListenerSet,
    base_context: &'a HashMap<String, String>,
}

impl<'a> StartupPhase<'a> {
    /// Create the executor over the container's collaborators
    pub fn new(
        app_name: &'a str,
        factory: &'a dyn ModuleFactory,
        config: &'a dyn ConfigRepository,
        listeners: &'a ListenerSet,
        base_context: &'a HashMap<String, String>,
    ) -> Self {
        Self {
            app_name,
            factory,
            config,
            listeners,
            base_context,
        }
    }

    /// Run the startup protocol over the ordered module names.
    ///
    /// Entries not in `Void` are skipped, which makes re-running the phase
    /// on an all-started registry perform zero lifecycle calls.
    pub fn run(&self, order: &[String], registry: &mut ModuleRegistry) -> Result<(), LifecycleError> {
        for name in order {
            let state = registry
                .get(name)
                .map(|entry| entry.state())
                .ok_or_else(|| LifecycleError::EntryMissing(name.clone()))?;
            if state != ModuleState::Void {
                log::debug!("skipping module '{}' in state {}", name, state);
                continue;
            }

            log::info!("starting module '{}'", name);
            let instance = self.start_module(name, registry)?;

            let descriptor = registry
                .get(name)
                .map(|entry| entry.profile().descriptor.clone())
                .ok_or_else(|| LifecycleError::EntryMissing(name.clone()))?;
            if let Some(entry) = registry.get_mut(name) {
                entry.set_started(Arc::clone(&instance));
            }
            self.listeners.module_started(name, &instance, &descriptor);
            log::info!("module '{}' started", name);
        }
        Ok(())
    }

    /// Drive one module through the seven startup stages. A failure in any
    /// stage discards the partial instance; the entry stays `Void`.
    fn start_module(
        &self,
        name: &str,
        registry: &ModuleRegistry,
    ) -> Result<Arc<dyn Module>, LifecycleError> {
        let entry = registry
            .get(name)
            .ok_or_else(|| LifecycleError::EntryMissing(name.to_string()))?;
        let descriptor = entry.descriptor();

        // Stage 1: creation
        let instance = self.create_module(name, descriptor)?;
        log::debug!("creation successful for '{}'", name);

        // Stage 2: logging attachment
        if let Some(loggable) = instance.as_loggable() {
            loggable.enable_logging(ModuleLogger::for_module(self.app_name, name));
            log::debug!("logging attachment successful for '{}'", name);
        }

        // Stage 3: context injection
        if let Some(aware) = instance.as_context_aware() {
            let context = self.build_context(name, descriptor);
            aware
                .contextualize(&context)
                .map_err(|e| LifecycleError::stage_failed(name, LifecycleStage::Context, e))?;
            log::debug!("context injection successful for '{}'", name);
        }

        // Stage 4: dependency injection
        if let Some(aware) = instance.as_service_aware() {
            let services = resolver::resolve(entry, registry);
            aware
                .compose(&services)
                .map_err(|e| LifecycleError::stage_failed(name, LifecycleStage::Dependencies, e))?;
            log::debug!("dependency injection successful for '{}'", name);
        }

        // Stage 5: configuration injection; a missing document is fatal
        if let Some(configurable) = instance.as_configurable() {
            let config = self
                .config
                .get_configuration(self.app_name, name)
                .map_err(|e| {
                    LifecycleError::stage_failed(name, LifecycleStage::Configuration, e)
                })?;
            configurable
                .configure(&config)
                .map_err(|e| LifecycleError::stage_failed(name, LifecycleStage::Configuration, e))?;
            log::debug!("configuration injection successful for '{}'", name);
        }

        // Stage 6: initialization
        if let Some(initializable) = instance.as_initializable() {
            initializable
                .initialize()
                .map_err(|e| LifecycleError::stage_failed(name, LifecycleStage::Initialize, e))?;
            log::debug!("initialization successful for '{}'", name);
        }

        // Stage 7: start
        if let Some(startable) = instance.as_startable() {
            startable
                .start()
                .map_err(|e| LifecycleError::stage_failed(name, LifecycleStage::Start, e))?;
            log::debug!("start successful for '{}'", name);
        }

        Ok(instance)
    }

    /// Instantiate the implementation type within its isolation unit and
    /// verify that every capability the descriptor advertises is actually
    /// implemented by the instance.
    fn create_module(
        &self,
        name: &str,
        descriptor: &ModuleDescriptor,
    ) -> Result<Arc<dyn Module>, LifecycleError> {
        let unit = descriptor.isolation_unit.as_deref().unwrap_or(self.app_name);
        let instance = self
            .factory
            .create(&descriptor.type_name, unit)
            .map_err(|e| LifecycleError::stage_failed(name, LifecycleStage::Creation, e))?;

        let provided = instance.provided_capabilities();
        for capability in &descriptor.capabilities {
            if !provided.contains(capability) {
                let error = ModuleSystemError::CapabilityNotImplemented {
                    module: name.to_string(),
                    capability: capability.to_string(),
                };
                log::warn!("{}", error);
                return Err(LifecycleError::stage_failed(
                    name,
                    LifecycleStage::Creation,
                    error,
                ));
            }
        }
        Ok(instance)
    }

    /// Build the read-only context for one module: the standard entries plus
    /// the declared context keys copied from the container's base context.
    fn build_context(&self, name: &str, descriptor: &ModuleDescriptor) -> ModuleContext {
        let mut context = ModuleContext::new();
        context.insert(APP_NAME_KEY, self.app_name);
        context.insert(MODULE_NAME_KEY, name);
        for key in &descriptor.context_keys {
            if let Some(value) = self.base_context.get(key) {
                context.insert(key, value);
            } else {
                log::warn!(
                    "context key '{}' declared by module '{}' has no value in the base context",
                    key,
                    name
                );
            }
        }
        context
    }
}
