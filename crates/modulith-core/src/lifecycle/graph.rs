//! Dependency graph walker.
//!
//! Computes a linear visiting order over the registered modules and their
//! bindings. The forward order puts every provider before the modules that
//! consume it and is used for startup; the reverse order mirrors it for
//! shutdown. Among independent modules, traversal follows registration
//! order, so identical input yields identical output.
//!
//! The walk is a depth-first post-order emission with three-color marking:
//! a module currently on the visiting path that is reached again closes a
//! cycle, which is reported as [`GraphError::CyclicDependency`] instead of
//! being silently linearized.

use std::collections::HashSet;

use crate::lifecycle::error::GraphError;
use crate::module_system::registry::ModuleRegistry;

/// Direction of a phase walk over the dependency graph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traversal {
    /// Providers before consumers (startup)
    Forward,
    /// Consumers before providers (shutdown)
    Reverse,
}

/// Compute the startup order: every provider precedes its consumers.
pub fn startup_order(registry: &ModuleRegistry) -> Result<Vec<String>, GraphError> {
    walk(registry, Traversal::Forward)
}

/// Compute the shutdown order: every consumer precedes its providers.
///
/// Not necessarily the exact reverse of the startup order when several valid
/// orders exist, but always a mirror of the provider/consumer constraint.
pub fn shutdown_order(registry: &ModuleRegistry) -> Result<Vec<String>, GraphError> {
    walk(registry, Traversal::Reverse)
}

/// Walk the graph in the given direction and return the ordered module names.
pub fn walk(registry: &ModuleRegistry, direction: Traversal) -> Result<Vec<String>, GraphError> {
    verify_bindings_resolvable(registry)?;

    let mut order = Vec::with_capacity(registry.len());
    let mut done: HashSet<String> = HashSet::new();
    let mut in_progress: HashSet<String> = HashSet::new();
    let mut path: Vec<String> = Vec::new();

    for name in registry.names() {
        visit(
            name,
            registry,
            direction,
            &mut done,
            &mut in_progress,
            &mut path,
            &mut order,
        )?;
    }
    Ok(order)
}

/// Every binding must point at a registered module; a dangling reference is
/// an assembly defect and fails the walk before it starts.
fn verify_bindings_resolvable(registry: &ModuleRegistry) -> Result<(), GraphError> {
    for entry in registry.iter() {
        for binding in &entry.profile().bindings {
            if !registry.contains(&binding.provider) {
                return Err(GraphError::DanglingBinding {
                    module: entry.name().to_string(),
                    role: binding.role.clone(),
                    provider: binding.provider.clone(),
                });
            }
        }
    }
    Ok(())
}

fn visit(
    name: &str,
    registry: &ModuleRegistry,
    direction: Traversal,
    done: &mut HashSet<String>,
    in_progress: &mut HashSet<String>,
    path: &mut Vec<String>,
    order: &mut Vec<String>,
) -> Result<(), GraphError> {
    if done.contains(name) {
        return Ok(());
    }
    if in_progress.contains(name) {
        // Closing edge back onto the visiting path: report the cycle from
        // the first occurrence of this module onward.
        let start = path.iter().position(|n| n == name).unwrap_or(0);
        let mut cycle: Vec<String> = path[start..].to_vec();
        cycle.push(name.to_string());
        return Err(GraphError::CyclicDependency(cycle));
    }

    let Some(entry) = registry.get(name) else {
        // Providers are validated against the registry before the walk
        // starts, so an unknown name cannot be reached here.
        return Ok(());
    };

    in_progress.insert(name.to_string());
    path.push(name.to_string());

    match direction {
        Traversal::Forward => {
            // Visit providers first, in the consumer's declared role order.
            for decl in &entry.descriptor().dependencies {
                if let Some(binding) = entry.profile().binding_for(&decl.role) {
                    visit(
                        &binding.provider,
                        registry,
                        direction,
                        done,
                        in_progress,
                        path,
                        order,
                    )?;
                }
            }
        }
        Traversal::Reverse => {
            // Visit consumers first: every module holding a binding that
            // points at this one, scanned in registration order.
            let consumers: Vec<String> = registry
                .iter()
                .filter(|other| {
                    other
                        .profile()
                        .bindings
                        .iter()
                        .any(|b| b.provider == name)
                })
                .map(|other| other.name().to_string())
                .collect();
            for consumer in consumers {
                visit(
                    &consumer,
                    registry,
                    direction,
                    done,
                    in_progress,
                    path,
                    order,
                )?;
            }
        }
    }

    path.pop();
    in_progress.remove(name);
    done.insert(name.to_string());
    order.push(name.to_string());
    Ok(())
}
