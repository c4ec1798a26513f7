//! Setting value snapshots and kind discriminants.

use serde::{Deserialize, Serialize};

/// The kind of widget a setting is presented as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SettingKind {
    /// Free-form text entry
    Text,
    /// Selection from a fixed list
    Choice,
    /// Yes/no toggle
    Binary,
    /// Signed integer entry
    Integer,
    /// Floating point entry
    Float,
}

impl std::fmt::Display for SettingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingKind::Text => write!(f, "text"),
            SettingKind::Choice => write!(f, "choice"),
            SettingKind::Binary => write!(f, "binary"),
            SettingKind::Integer => write!(f, "integer"),
            SettingKind::Float => write!(f, "float"),
        }
    }
}

/// A snapshot of a setting's current value.
///
/// `Display` produces the persistence text encoding used in saved
/// configurations. Booleans encode as `Yes`/`No`.
#[derive(Clone, Debug, PartialEq)]
pub enum SettingValue {
    /// Text or choice value
    Text(String),
    /// Boolean value
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit floating point
    Float(f64),
}

impl SettingValue {
    /// Get the value as a string slice, if it is text.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            SettingValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the value as a boolean, if it is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SettingValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the value as an integer, if it is one.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            SettingValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get the value as a float, if it is one.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            SettingValue::Float(x) => Some(*x),
            _ => None,
        }
    }
}

impl std::fmt::Display for SettingValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingValue::Text(s) => f.write_str(s),
            SettingValue::Bool(true) => write!(f, "Yes"),
            SettingValue::Bool(false) => write!(f, "No"),
            SettingValue::Int(i) => write!(f, "{}", i),
            SettingValue::Float(x) => write!(f, "{}", x),
        }
    }
}
