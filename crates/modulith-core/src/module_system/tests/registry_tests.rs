use crate::module_system::descriptor::ModuleDescriptor;
use crate::module_system::entry::ModuleEntry;
use crate::module_system::error::ModuleSystemError;
use crate::module_system::profile::ModuleProfile;
use crate::module_system::registry::ModuleRegistry;

fn entry(name: &str) -> ModuleEntry {
    let descriptor = ModuleDescriptor::new(name, "test::InertModule");
    ModuleEntry::new(ModuleProfile::new(descriptor))
}

#[test]
fn insert_and_lookup() {
    let mut registry = ModuleRegistry::new();
    registry.insert(entry("cache")).unwrap();

    assert!(registry.contains("cache"));
    assert!(registry.get("cache").is_some());
    assert!(registry.get("missing").is_none());
    assert_eq!(registry.len(), 1);
    assert!(!registry.is_empty());
}

#[test]
fn duplicate_name_is_rejected() {
    let mut registry = ModuleRegistry::new();
    registry.insert(entry("cache")).unwrap();

    let result = registry.insert(entry("cache"));
    assert!(matches!(
        result,
        Err(ModuleSystemError::DuplicateModule(name)) if name == "cache"
    ));
    assert_eq!(registry.len(), 1);
}

#[test]
fn names_preserve_registration_order() {
    let mut registry = ModuleRegistry::new();
    registry.insert(entry("logger")).unwrap();
    registry.insert(entry("repo")).unwrap();
    registry.insert(entry("cache")).unwrap();

    assert_eq!(registry.names(), &["logger", "repo", "cache"]);
}

#[test]
fn iteration_follows_registration_order() {
    let mut registry = ModuleRegistry::new();
    registry.insert(entry("logger")).unwrap();
    registry.insert(entry("repo")).unwrap();
    registry.insert(entry("cache")).unwrap();

    let visited: Vec<&str> = registry.iter().map(|e| e.name()).collect();
    assert_eq!(visited, vec!["logger", "repo", "cache"]);
}

#[test]
fn get_mut_allows_state_transitions_in_place() {
    use crate::module_system::entry::ModuleState;
    use crate::module_system::traits::Module;
    use std::any::Any;
    use std::sync::Arc;

    struct InertModule;
    impl Module for InertModule {
        fn as_any(&self) -> &(dyn Any + Send + Sync) {
            self
        }
    }

    let mut registry = ModuleRegistry::new();
    registry.insert(entry("cache")).unwrap();

    registry
        .get_mut("cache")
        .unwrap()
        .set_started(Arc::new(InertModule));
    assert_eq!(registry.get("cache").unwrap().state(), ModuleState::Started);
}
