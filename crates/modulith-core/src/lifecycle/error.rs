use std::fmt;

/// The ordered stages a module passes through.
///
/// `Creation` through `Start` belong to the startup protocol; `Stop` and
/// `Dispose` to shutdown. The stage is carried by failure diagnostics so a
/// startup abort names exactly where a module broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleStage {
    Creation,
    Logging,
    Context,
    Dependencies,
    Configuration,
    Initialize,
    Start,
    Stop,
    Dispose,
}

impl fmt::Display for LifecycleStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LifecycleStage::Creation => "creation",
            LifecycleStage::Logging => "logging",
            LifecycleStage::Context => "context",
            LifecycleStage::Dependencies => "dependencies",
            LifecycleStage::Configuration => "configuration",
            LifecycleStage::Initialize => "initialize",
            LifecycleStage::Start => "start",
            LifecycleStage::Stop => "stop",
            LifecycleStage::Dispose => "dispose",
        };
        write!(f, "{}", name)
    }
}

/// Invariant violations detected while ordering the module graph.
///
/// Both variants are assembly-time defects, not recoverable runtime
/// conditions: the external assembler is expected to hand the kernel a
/// well-formed, acyclic set of bindings.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// A binding references a module absent from the input set
    #[error("Binding of module '{module}' (role '{role}') references unknown module '{provider}'")]
    DanglingBinding {
        module: String,
        role: String,
        provider: String,
    },

    /// The bindings form a cycle
    #[error("Cyclic dependency detected: {}", .0.join(" -> "))]
    CyclicDependency(Vec<String>),
}

/// Errors raised by the phase executors
#[derive(Debug, thiserror::Error)]
pub enum LifecycleError {
    /// A lifecycle stage failed; fatal during startup, the cause is wrapped
    /// with the failing module and stage
    #[error("Module '{module}' failed during {stage} stage: {source}")]
    StageFailed {
        module: String,
        stage: LifecycleStage,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// An ordered name was missing from the registry during a phase walk
    #[error("Module '{0}' missing from registry during phase walk")]
    EntryMissing(String),
}

impl LifecycleError {
    /// Wrap a stage failure with the module name and stage it occurred in
    pub fn stage_failed(
        module: &str,
        stage: LifecycleStage,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        LifecycleError::StageFailed {
            module: module.to_string(),
            stage,
            source: source.into(),
        }
    }
}
