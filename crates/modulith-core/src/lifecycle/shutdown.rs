//! Shutdown phase executor.
//!
//! Walks the reverse order produced by the graph walker and drives every
//! `Started` module through stop and dispose. Unlike startup, shutdown is
//! best-effort: a failing hook is logged and recorded in the report, and the
//! walk continues so that every remaining module still gets its chance to
//! release resources. Every visited module ends in `Destroyed` with its
//! instance handle cleared, whatever its hooks did.

use crate::container::facilities::ListenerSet;
use crate::lifecycle::error::LifecycleStage;
use crate::module_system::entry::ModuleState;
use crate::module_system::registry::ModuleRegistry;

/// One recorded hook failure during a shutdown walk
#[derive(Debug, Clone)]
pub struct ShutdownFailure {
    /// Name of the module whose hook failed
    pub module: String,
    /// The stage that failed: `Stop` or `Dispose`
    pub stage: LifecycleStage,
    /// Rendered message of the underlying error
    pub message: String,
}

/// Outcome summary of a shutdown walk.
///
/// Shutdown never aborts, so instead of a `Result` the caller gets a report
/// listing every hook that failed along the way.
#[derive(Debug, Default)]
pub struct ShutdownReport {
    failures: Vec<ShutdownFailure>,
}

impl ShutdownReport {
    /// True when every stop and dispose hook completed without error
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// The recorded failures, in the order they occurred
    pub fn failures(&self) -> &[ShutdownFailure] {
        &self.failures
    }

    fn record(&mut self, module: &str, stage: LifecycleStage, error: &dyn std::fmt::Display) {
        self.failures.push(ShutdownFailure {
            module: module.to_string(),
            stage,
            message: error.to_string(),
        });
    }
}

/// One shutdown phase walk over an application's registry
pub struct ShutdownPhase<'a> {
    listeners: &'a ListenerSet,
}

impl<'a> ShutdownPhase<'a> {
    pub fn new(listeners: &'a ListenerSet) -> Self {
        Self { listeners }
    }

    /// Run the shutdown protocol over the ordered module names.
    ///
    /// Modules not in `Started` are skipped, so a module whose startup was
    /// aborted mid-protocol is never stopped or disposed here.
    pub fn run(&self, order: &[String], registry: &mut ModuleRegistry) -> ShutdownReport {
        let mut report = ShutdownReport::default();

        for name in order {
            let Some(entry) = registry.get_mut(name) else {
                log::warn!("module '{}' missing from registry during shutdown", name);
                continue;
            };
            if entry.state() != ModuleState::Started {
                log::debug!("skipping module '{}' in state {}", name, entry.state());
                continue;
            }
            let Some(instance) = entry.instance() else {
                log::warn!("started module '{}' has no instance handle", name);
                entry.set_destroyed();
                continue;
            };
            let descriptor = entry.profile().descriptor.clone();

            log::info!("stopping module '{}'", name);
            self.listeners.module_stopping(name, &instance, &descriptor);

            if let Some(startable) = instance.as_startable() {
                if let Err(e) = startable.stop() {
                    log::warn!("module '{}' failed to stop: {}", name, e);
                    report.record(name, LifecycleStage::Stop, &e);
                }
            }
            if let Some(disposable) = instance.as_disposable() {
                if let Err(e) = disposable.dispose() {
                    log::warn!("module '{}' failed to dispose: {}", name, e);
                    report.record(name, LifecycleStage::Dispose, &e);
                }
            }

            entry.set_destroyed();
            log::info!("module '{}' destroyed", name);
        }

        report
    }
}
