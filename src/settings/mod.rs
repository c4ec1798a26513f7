//! Settings Module
//!
//! Typed, self-describing configuration values for analysis modules:
//! - Value snapshots and kind discriminants
//! - The `Setting` trait
//! - Concrete setting types (text, choice, binary, integer, float)

pub mod setting;
pub mod value;

pub use setting::{Binary, Choice, Float, Integer, Setting, Text};
pub use value::{SettingKind, SettingValue};
