//! Module Plugin Layer
//!
//! The contract the host defines for analysis modules:
//! - Module interface and metadata
//! - Execution workspace
//! - Module registry

pub mod interface;
pub mod registry;
pub mod workspace;

pub use interface::{Category, Module, ModuleInfo};
pub use registry::{ModuleFactory, ModuleRegistry, RegisteredModule};
pub use workspace::Workspace;
