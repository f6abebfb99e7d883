//! End-to-end exercise of the kernel: a three-module application (logger,
//! repository, cache) assembled with explicit bindings, configured from an
//! in-memory repository, started and stopped through the container.

use std::sync::Arc;

use semver::Version;

use crate::config::{ConfigData, MemoryConfigRepository};
use crate::container::ModuleContainer;
use crate::module_system::descriptor::{Capability, CapabilityRef, ModuleDescriptor};
use crate::module_system::entry::ModuleState;
use crate::module_system::profile::ModuleProfile;
use crate::tests::fixtures::{entries, journal, Journal, RecordingListener, RecordingModule, StubFactory};

const APP: &str = "shop";

fn v(text: &str) -> Version {
    Version::parse(text).unwrap()
}

fn logging_capability() -> Capability {
    Capability::new("logging.Sink", v("1.0.0"))
}

fn repository_capability() -> Capability {
    Capability::new("storage.Repository", v("1.2.0"))
}

/// Assemble the three-module application. Registration deliberately goes
/// consumer-first so the ordering has to come from the graph, not from
/// registration order.
fn assemble(journal: &Journal) -> ModuleContainer {
    let mut factory = StubFactory::new();
    factory.provide(
        "shop::CacheModule",
        Arc::new(RecordingModule::new("cache", journal)),
    );
    factory.provide(
        "shop::RepoModule",
        Arc::new(
            RecordingModule::new("repo", journal)
                .with_capabilities(vec![repository_capability()]),
        ),
    );
    factory.provide(
        "shop::LoggerModule",
        Arc::new(
            RecordingModule::new("logger", journal)
                .with_capabilities(vec![logging_capability()]),
        ),
    );

    let mut config = MemoryConfigRepository::new();
    let mut cache_doc = ConfigData::new();
    cache_doc.set("capacity", 1024).unwrap();
    config.store(APP, "cache", cache_doc);
    config.store(APP, "repo", ConfigData::new());
    config.store(APP, "logger", ConfigData::new());

    let mut container = ModuleContainer::new(APP, Arc::new(factory), Arc::new(config));
    container.set_context_entry("data.dir", "/srv/shop");

    container
        .add_module(
            ModuleProfile::new(
                ModuleDescriptor::builder("cache", "shop::CacheModule")
                    .requires("store", CapabilityRef::any("storage.Repository"))
                    .optionally("log", CapabilityRef::any("logging.Sink"))
                    .build(),
            )
            .bind("store", "repo")
            .bind("log", "logger"),
        )
        .unwrap();
    container
        .add_module(
            ModuleProfile::new(
                ModuleDescriptor::builder("repo", "shop::RepoModule")
                    .offers(repository_capability())
                    .requires("log", CapabilityRef::any("logging.Sink"))
                    .context_key("data.dir")
                    .build(),
            )
            .bind("log", "logger"),
        )
        .unwrap();
    container
        .add_module(ModuleProfile::new(
            ModuleDescriptor::builder("logger", "shop::LoggerModule")
                .offers(logging_capability())
                .build(),
        ))
        .unwrap();

    container
}

#[test]
fn application_lifecycle_end_to_end() {
    let journal: Journal = journal();
    let mut container = assemble(&journal);
    container.add_listener(Box::new(RecordingListener::new(&journal)));

    container.start().unwrap();

    let events = entries(&journal);

    // Providers came up strictly before their consumers.
    let starts: Vec<&String> = events.iter().filter(|e| e.ends_with(":start")).collect();
    assert_eq!(starts, vec!["logger:start", "repo:start", "cache:start"]);

    // Each module ran its stages in protocol order.
    let cache_stages: Vec<&String> = events.iter().filter(|e| e.starts_with("cache:")).collect();
    assert_eq!(
        cache_stages,
        vec![
            "cache:logging[shop::cache]",
            "cache:context[app=shop,module=cache,extras=]",
            "cache:compose[log,store]",
            "cache:configure[capacity]",
            "cache:initialize",
            "cache:start",
        ]
    );

    // The repo saw its declared context entry and its resolved logger.
    assert!(events.contains(&"repo:context[app=shop,module=repo,extras=data.dir]".to_string()));
    assert!(events.contains(&"repo:compose[log]".to_string()));

    // Listener notifications bracket the module starts.
    let module_events: Vec<&String> = events
        .iter()
        .filter(|e| e.starts_with("module_started:"))
        .collect();
    assert_eq!(
        module_events,
        vec!["module_started:logger", "module_started:repo", "module_started:cache"]
    );

    let report = container.stop().unwrap();
    assert!(report.is_clean());

    // Shutdown mirrored the startup order.
    let events = entries(&journal);
    let stops: Vec<&String> = events.iter().filter(|e| e.ends_with(":stop")).collect();
    assert_eq!(stops, vec!["cache:stop", "repo:stop", "logger:stop"]);
    let disposes: Vec<&String> = events.iter().filter(|e| e.ends_with(":dispose")).collect();
    assert_eq!(
        disposes,
        vec!["cache:dispose", "repo:dispose", "logger:dispose"]
    );

    for name in ["cache", "repo", "logger"] {
        assert_eq!(container.state_of(name).unwrap(), ModuleState::Destroyed);
    }
}

#[test]
fn partial_startup_unwinds_cleanly() {
    let journal: Journal = journal();

    // Same assembly, but the cache refuses to start.
    let mut factory = StubFactory::new();
    factory.provide(
        "shop::CacheModule",
        Arc::new(RecordingModule::new("cache", &journal).failing_on("start")),
    );
    factory.provide(
        "shop::RepoModule",
        Arc::new(
            RecordingModule::new("repo", &journal)
                .with_capabilities(vec![repository_capability()]),
        ),
    );
    factory.provide(
        "shop::LoggerModule",
        Arc::new(
            RecordingModule::new("logger", &journal)
                .with_capabilities(vec![logging_capability()]),
        ),
    );

    let mut config = MemoryConfigRepository::new();
    for name in ["cache", "repo", "logger"] {
        config.store(APP, name, ConfigData::new());
    }

    let mut container = ModuleContainer::new(APP, Arc::new(factory), Arc::new(config));
    container.set_context_entry("data.dir", "/srv/shop");
    container
        .add_module(
            ModuleProfile::new(
                ModuleDescriptor::builder("cache", "shop::CacheModule")
                    .requires("store", CapabilityRef::any("storage.Repository"))
                    .build(),
            )
            .bind("store", "repo"),
        )
        .unwrap();
    container
        .add_module(
            ModuleProfile::new(
                ModuleDescriptor::builder("repo", "shop::RepoModule")
                    .offers(repository_capability())
                    .requires("log", CapabilityRef::any("logging.Sink"))
                    .context_key("data.dir")
                    .build(),
            )
            .bind("log", "logger"),
        )
        .unwrap();
    container
        .add_module(ModuleProfile::new(
            ModuleDescriptor::builder("logger", "shop::LoggerModule")
                .offers(logging_capability())
                .build(),
        ))
        .unwrap();

    assert!(container.start().is_err());
    assert_eq!(container.state_of("logger").unwrap(), ModuleState::Started);
    assert_eq!(container.state_of("repo").unwrap(), ModuleState::Started);
    assert_eq!(container.state_of("cache").unwrap(), ModuleState::Void);

    let report = container.stop().unwrap();
    assert!(report.is_clean());

    let events = entries(&journal);
    let stops: Vec<&String> = events.iter().filter(|e| e.ends_with(":stop")).collect();
    assert_eq!(stops, vec!["repo:stop", "logger:stop"]);
    assert_eq!(container.state_of("cache").unwrap(), ModuleState::Void);
    assert_eq!(container.state_of("repo").unwrap(), ModuleState::Destroyed);
}
