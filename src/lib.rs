//! # cytopipe — extensible modules for image-analysis pipelines
//!
//! The host-side plugin layer of an image-analysis application:
//! - **Settings**: typed, self-describing configuration values
//! - **Modules**: host-loaded analysis steps with a fixed settings schema
//! - **Pipelines**: ordered module stacks with positional save/load
//!
//! ## Quick Start
//!
//! ```rust
//! use cytopipe::module::{ModuleRegistry, Workspace};
//! use cytopipe::modules::SumDemo;
//!
//! let mut registry = ModuleRegistry::new();
//! registry.register(|| Box::new(SumDemo::new())).unwrap();
//!
//! let mut module = registry.create("SumDemo").unwrap();
//! let mut workspace = Workspace::new();
//! module.run(&mut workspace).unwrap();
//!
//! assert_eq!(workspace.messages(), ["15 + 1.500000 = 16.500000"]);
//! ```

pub mod core;
pub mod module;
pub mod modules;
pub mod pipeline;
pub mod settings;

pub use crate::core::error::{Error, Result};
