use crate::lifecycle::error::GraphError;
use crate::lifecycle::graph::{shutdown_order, startup_order};
use crate::module_system::descriptor::{CapabilityRef, ModuleDescriptor};
use crate::module_system::entry::ModuleEntry;
use crate::module_system::profile::ModuleProfile;
use crate::module_system::registry::ModuleRegistry;

/// Build a profile declaring one required role per `(role, provider)` pair,
/// bound to that provider.
fn module(name: &str, deps: &[(&str, &str)]) -> ModuleProfile {
    let mut builder = ModuleDescriptor::builder(name, &format!("test::{}", name));
    for (role, _) in deps {
        builder = builder.requires(role, CapabilityRef::any(role));
    }
    let mut profile = ModuleProfile::new(builder.build());
    for (role, provider) in deps {
        profile = profile.bind(role, provider);
    }
    profile
}

fn registry(profiles: Vec<ModuleProfile>) -> ModuleRegistry {
    let mut registry = ModuleRegistry::new();
    for profile in profiles {
        registry.insert(ModuleEntry::new(profile)).unwrap();
    }
    registry
}

#[test]
fn startup_order_puts_providers_first() {
    // cache -> repo -> logger, registered consumer-first
    let registry = registry(vec![
        module("cache", &[("store", "repo")]),
        module("repo", &[("log", "logger")]),
        module("logger", &[]),
    ]);

    let order = startup_order(&registry).unwrap();
    assert_eq!(order, vec!["logger", "repo", "cache"]);
}

#[test]
fn shutdown_order_puts_consumers_first() {
    let registry = registry(vec![
        module("logger", &[]),
        module("repo", &[("log", "logger")]),
        module("cache", &[("store", "repo")]),
    ]);

    let order = shutdown_order(&registry).unwrap();
    assert_eq!(order, vec!["cache", "repo", "logger"]);
}

#[test]
fn independent_modules_follow_registration_order() {
    let registry = registry(vec![
        module("a", &[]),
        module("b", &[]),
        module("c", &[]),
    ]);

    assert_eq!(startup_order(&registry).unwrap(), vec!["a", "b", "c"]);
    assert_eq!(shutdown_order(&registry).unwrap(), vec!["a", "b", "c"]);
}

#[test]
fn diamond_graph_orders_shared_provider_once() {
    // left and right both consume base; top consumes both.
    let registry = registry(vec![
        module("top", &[("l", "left"), ("r", "right")]),
        module("left", &[("b", "base")]),
        module("right", &[("b", "base")]),
        module("base", &[]),
    ]);

    let order = startup_order(&registry).unwrap();
    assert_eq!(order, vec!["base", "left", "right", "top"]);
}

#[test]
fn consumer_role_order_breaks_ties_on_startup() {
    // first's declared role order decides between its two providers.
    let registry = registry(vec![
        module("first", &[("x", "second"), ("y", "third")]),
        module("second", &[]),
        module("third", &[]),
    ]);

    let order = startup_order(&registry).unwrap();
    assert_eq!(order, vec!["second", "third", "first"]);
}

#[test]
fn cycle_is_reported_with_its_path() {
    let registry = registry(vec![
        module("a", &[("b", "b")]),
        module("b", &[("c", "c")]),
        module("c", &[("a", "a")]),
    ]);

    let error = startup_order(&registry).unwrap_err();
    match error {
        GraphError::CyclicDependency(path) => {
            assert_eq!(path.first(), path.last());
            assert!(path.len() >= 4);
            assert!(path.contains(&"a".to_string()));
            assert!(path.contains(&"b".to_string()));
            assert!(path.contains(&"c".to_string()));
        }
        other => panic!("expected cycle error, got: {}", other),
    }
}

#[test]
fn self_dependency_is_a_cycle() {
    let registry = registry(vec![module("a", &[("self", "a")])]);

    let error = startup_order(&registry).unwrap_err();
    assert!(matches!(error, GraphError::CyclicDependency(_)));
}

#[test]
fn dangling_binding_fails_the_walk() {
    let registry = registry(vec![module("cache", &[("store", "ghost")])]);

    let error = startup_order(&registry).unwrap_err();
    match error {
        GraphError::DanglingBinding {
            module,
            role,
            provider,
        } => {
            assert_eq!(module, "cache");
            assert_eq!(role, "store");
            assert_eq!(provider, "ghost");
        }
        other => panic!("expected dangling binding error, got: {}", other),
    }
}

#[test]
fn unbound_roles_do_not_affect_ordering() {
    // Declared but unbound role: the walker only follows actual bindings.
    let mut builder = ModuleDescriptor::builder("cache", "test::cache");
    builder = builder.optionally("metrics", CapabilityRef::any("metrics"));
    let profile = ModuleProfile::new(builder.build());

    let registry = registry(vec![profile]);
    assert_eq!(startup_order(&registry).unwrap(), vec!["cache"]);
}

#[test]
fn empty_registry_yields_empty_order() {
    let registry = ModuleRegistry::new();
    assert!(startup_order(&registry).unwrap().is_empty());
    assert!(shutdown_order(&registry).unwrap().is_empty());
}
