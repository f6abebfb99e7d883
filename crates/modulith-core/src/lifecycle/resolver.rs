//! Scoped dependency resolver.
//!
//! Built once per module, immediately before its dependency-injection stage.
//! Maps the module's declared roles to the already-started instances of
//! their bound providers. Every failure here is soft: an unresolvable role
//! is omitted from the map and diagnosed through the log, never raised. A
//! module that truly requires the role will fail later at first use, which
//! is outside this resolver's responsibility.

use crate::module_system::entry::{ModuleEntry, ModuleState};
use crate::module_system::registry::ModuleRegistry;
use crate::module_system::traits::ServiceMap;

/// Assemble the role → instance mapping for one module.
pub fn resolve(entry: &ModuleEntry, registry: &ModuleRegistry) -> ServiceMap {
    let consumer = entry.name();
    let mut services = ServiceMap::new();

    for decl in &entry.descriptor().dependencies {
        let Some(binding) = entry.profile().binding_for(&decl.role) else {
            if decl.optional {
                log::debug!(
                    "optional role '{}' of module '{}' is unbound",
                    decl.role,
                    consumer
                );
            } else {
                log::warn!(
                    "required role '{}' of module '{}' has no binding; omitting",
                    decl.role,
                    consumer
                );
            }
            continue;
        };

        let Some(provider) = registry.get(&binding.provider) else {
            log::warn!(
                "role '{}' of module '{}' is bound to unknown module '{}'; omitting",
                decl.role,
                consumer,
                binding.provider
            );
            continue;
        };

        // Traversal order guarantees providers are started by the time a
        // consumer is resolved; anything else is diagnosed and skipped.
        if provider.state() != ModuleState::Started {
            log::warn!(
                "provider '{}' for role '{}' of module '{}' is in state {}; omitting",
                binding.provider,
                decl.role,
                consumer,
                provider.state()
            );
            continue;
        }

        if !provider.descriptor().offers(&decl.capability) {
            log::warn!(
                "provider '{}' does not offer capability '{}' required by role '{}' of module '{}'; omitting",
                binding.provider,
                decl.capability,
                decl.role,
                consumer
            );
            continue;
        }

        if let Some(instance) = provider.instance() {
            services.insert(&decl.role, instance);
        }
    }

    services
}
