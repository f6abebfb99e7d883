use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

use crate::config::ConfigData;
use crate::module_system::context::ModuleContext;
use crate::module_system::descriptor::Capability;
use crate::module_system::logging::ModuleLogger;

/// Error type module hooks may raise. The kernel does not interpret hook
/// errors beyond wrapping them with the failing module and stage.
pub type HookError = Box<dyn std::error::Error + Send + Sync>;

/// Shorthand for the result of a lifecycle hook
pub type HookResult = std::result::Result<(), HookError>;

/// Core trait every hosted module implements.
///
/// Participation in individual lifecycle stages is optional and probed
/// through the `as_*` methods: the startup executor asks each question in
/// stage order and skips the stage when the answer is `None`. The default
/// implementations opt out of everything, so a trivial module only has to
/// supply [`Module::as_any`].
///
/// Hooks take `&self`; a module that keeps mutable state manages its own
/// interior mutability, since providers are shared with their consumers
/// through the instance handle.
pub trait Module: Send + Sync {
    /// The capabilities this instance actually implements. Checked against
    /// the descriptor's advertised capabilities at creation time; a module
    /// advertising a capability it does not report here fails startup.
    fn provided_capabilities(&self) -> Vec<Capability> {
        Vec::new()
    }

    /// Access to the concrete type, used by consumers to downcast a
    /// provider obtained from the service map.
    fn as_any(&self) -> &(dyn Any + Send + Sync);

    /// Probe for logging-attachment participation
    fn as_loggable(&self) -> Option<&dyn Loggable> {
        None
    }

    /// Probe for context-injection participation
    fn as_context_aware(&self) -> Option<&dyn ContextAware> {
        None
    }

    /// Probe for dependency-injection participation
    fn as_service_aware(&self) -> Option<&dyn ServiceAware> {
        None
    }

    /// Probe for configuration-injection participation
    fn as_configurable(&self) -> Option<&dyn Configurable> {
        None
    }

    /// Probe for the one-time initialization hook
    fn as_initializable(&self) -> Option<&dyn Initializable> {
        None
    }

    /// Probe for the start/stop hooks
    fn as_startable(&self) -> Option<&dyn Startable> {
        None
    }

    /// Probe for the dispose hook
    fn as_disposable(&self) -> Option<&dyn Disposable> {
        None
    }
}

/// Stage 2: accept a logger scoped to the module name
pub trait Loggable {
    /// Called once, before context injection
    fn enable_logging(&self, logger: ModuleLogger);
}

/// Stage 3: accept the read-only module context
pub trait ContextAware {
    /// Called once, before dependency injection
    fn contextualize(&self, context: &ModuleContext) -> HookResult;
}

/// Stage 4: accept the resolved view of this module's providers
pub trait ServiceAware {
    /// Called once, before configuration injection
    fn compose(&self, services: &ServiceMap) -> HookResult;
}

/// Stage 5: accept module-specific configuration
pub trait Configurable {
    /// Called once, before initialization
    fn configure(&self, config: &ConfigData) -> HookResult;
}

/// Stage 6: one-time setup after all injection stages
pub trait Initializable {
    fn initialize(&self) -> HookResult;
}

/// Stage 7 and the first shutdown stage
pub trait Startable {
    fn start(&self) -> HookResult;
    fn stop(&self) -> HookResult;
}

/// Final shutdown stage
pub trait Disposable {
    fn dispose(&self) -> HookResult;
}

/// The role → provider-instance mapping a module receives during dependency
/// injection. Built per module by the scoped resolver; roles whose provider
/// could not be resolved are simply absent.
#[derive(Default)]
pub struct ServiceMap {
    entries: HashMap<String, Arc<dyn Module>>,
}

impl ServiceMap {
    /// Create an empty service map
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Add a provider instance under a role name
    pub fn insert(&mut self, role: &str, instance: Arc<dyn Module>) {
        self.entries.insert(role.to_string(), instance);
    }

    /// Get the provider bound to a role, if it was resolved
    pub fn get(&self, role: &str) -> Option<Arc<dyn Module>> {
        self.entries.get(role).cloned()
    }

    /// Whether a role was resolved
    pub fn contains_role(&self, role: &str) -> bool {
        self.entries.contains_key(role)
    }

    /// The resolved role names
    pub fn roles(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    /// Number of resolved roles
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no roles were resolved
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
