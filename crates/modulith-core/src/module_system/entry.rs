use std::fmt;
use std::sync::Arc;

use crate::module_system::descriptor::ModuleDescriptor;
use crate::module_system::profile::ModuleProfile;
use crate::module_system::traits::Module;

/// Lifecycle state of a module entry.
///
/// Transitions are irreversible: `Void -> Started -> Destroyed`. A module
/// that fails mid-startup stays `Void` with any partial instance discarded,
/// so a later retry can restart cleanly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleState {
    /// Created at assembly time; not yet started (or failed to start)
    Void,
    /// Ran the full startup protocol; instance handle present
    Started,
    /// Stopped and disposed; never revisited for startup in the same run
    Destroyed,
}

impl fmt::Display for ModuleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModuleState::Void => write!(f, "VOID"),
            ModuleState::Started => write!(f, "STARTED"),
            ModuleState::Destroyed => write!(f, "DESTROYED"),
        }
    }
}

/// The mutable runtime record tracking one module instance.
///
/// Owns the state machine and the instance handle; the handle is present iff
/// the state is [`ModuleState::Started`]. Only the two phase executors
/// mutate entries.
pub struct ModuleEntry {
    profile: ModuleProfile,
    state: ModuleState,
    instance: Option<Arc<dyn Module>>,
}

impl ModuleEntry {
    /// Create a new entry in the `Void` state with an empty handle
    pub fn new(profile: ModuleProfile) -> Self {
        Self {
            profile,
            state: ModuleState::Void,
            instance: None,
        }
    }

    /// The module name
    pub fn name(&self) -> &str {
        self.profile.name()
    }

    /// The module's assembly profile (descriptor plus bindings)
    pub fn profile(&self) -> &ModuleProfile {
        &self.profile
    }

    /// The module's immutable descriptor
    pub fn descriptor(&self) -> &ModuleDescriptor {
        &self.profile.descriptor
    }

    /// Current lifecycle state
    pub fn state(&self) -> ModuleState {
        self.state
    }

    /// The instance handle; present only while `Started`
    pub fn instance(&self) -> Option<Arc<dyn Module>> {
        self.instance.clone()
    }

    /// Transition to `Started`, taking ownership of the instance handle.
    ///
    /// Legal only from `Void`; any other state makes this a diagnosed no-op
    /// so that a phase walk is never failed by a redundant transition.
    pub fn set_started(&mut self, instance: Arc<dyn Module>) {
        match self.state {
            ModuleState::Void => {
                self.instance = Some(instance);
                self.state = ModuleState::Started;
            }
            other => {
                log::debug!(
                    "ignoring start transition for module '{}' in state {}",
                    self.name(),
                    other
                );
            }
        }
    }

    /// Transition to `Destroyed`, unconditionally clearing the handle.
    ///
    /// Shutdown transitions an entry here regardless of whether its stop or
    /// dispose hooks succeeded. Calling this on a non-`Started` entry is a
    /// diagnosed no-op.
    pub fn set_destroyed(&mut self) {
        match self.state {
            ModuleState::Started => {
                self.instance = None;
                self.state = ModuleState::Destroyed;
            }
            other => {
                log::debug!(
                    "ignoring destroy transition for module '{}' in state {}",
                    self.name(),
                    other
                );
            }
        }
    }
}

impl fmt::Debug for ModuleEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleEntry")
            .field("name", &self.name())
            .field("state", &self.state)
            .field("has_instance", &self.instance.is_some())
            .finish()
    }
}
