//! # Modulith Core Lifecycle
//!
//! The lifecycle kernel proper: dependency-ordered traversal of the module
//! graph and the two phase executors that drive modules through it.
//!
//! ## Key Submodules and Responsibilities:
//!
//! - **[`graph`]**: The dependency graph walker. Computes a linear visiting
//!   order satisfying "providers before consumers" (startup) or its mirror
//!   (shutdown), with explicit cycle detection.
//! - **[`startup`]**: The startup phase executor ([`StartupPhase`]). Walks
//!   the forward order and drives each module through the seven-stage
//!   startup protocol, failing fast on the first error.
//! - **[`shutdown`]**: The shutdown phase executor ([`ShutdownPhase`]).
//!   Walks the reverse order, stopping and disposing each started module,
//!   tolerating per-module failure.
//! - **[`resolver`]**: The scoped dependency resolver, rebuilt for each
//!   module just before its dependency-injection stage.
//! - **[`error`]**: [`GraphError`], [`LifecycleError`] and the
//!   [`LifecycleStage`] enumeration.
//!
//! The two executors deliberately implement two distinct failure policies
//! (all-or-nothing startup versus collect-and-continue shutdown) rather than
//! one generic per-module loop.
pub mod error;
pub mod graph;
pub mod resolver;
pub mod shutdown;
pub mod startup;

pub use error::{GraphError, LifecycleError, LifecycleStage};
pub use graph::{shutdown_order, startup_order, Traversal};
pub use shutdown::{ShutdownFailure, ShutdownPhase, ShutdownReport};
pub use startup::StartupPhase;

// Test module declaration
#[cfg(test)]
mod tests;
