//! Backend implementations of the [confab_core::AgentBackend] seam.
//!
//! Ships an in-memory backend with a scripted agent, used for local runs
//! and as the reference for subscription semantics.

pub mod memory;

pub use memory::MemoryBackend;
