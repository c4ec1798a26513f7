//! The `Setting` trait and the concrete setting types.
//!
//! A setting is a (label, value, help text) triple. Modules hold their
//! settings as plain fields and read `value` directly; the host reaches
//! them through `dyn Setting` for display and persistence.

use crate::core::{Error, Result};
use crate::settings::value::{SettingKind, SettingValue};

/// Interface the host uses to display and persist a setting.
pub trait Setting: Send + Sync {
    /// Label shown next to the setting.
    fn label(&self) -> &str;

    /// Help text for the setting.
    fn doc(&self) -> &str;

    /// The kind of widget this setting is presented as.
    fn kind(&self) -> SettingKind;

    /// Snapshot of the current value.
    fn value(&self) -> SettingValue;

    /// Text encoding of the current value, as stored in saved
    /// configurations.
    fn value_text(&self) -> String {
        self.value().to_string()
    }

    /// Parse `text` and assign it as the current value.
    fn set_from_text(&mut self, text: &str) -> Result<()>;

    /// Check that the current value is acceptable.
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

/// Free-form text setting.
#[derive(Clone, Debug)]
pub struct Text {
    label: String,
    doc: String,
    /// Current value
    pub value: String,
}

impl Text {
    /// Create a text setting with a default value.
    pub fn new(label: &str, default: &str, doc: &str) -> Self {
        Self {
            label: label.to_string(),
            doc: doc.to_string(),
            value: default.to_string(),
        }
    }
}

impl Setting for Text {
    fn label(&self) -> &str {
        &self.label
    }

    fn doc(&self) -> &str {
        &self.doc
    }

    fn kind(&self) -> SettingKind {
        SettingKind::Text
    }

    fn value(&self) -> SettingValue {
        SettingValue::Text(self.value.clone())
    }

    fn set_from_text(&mut self, text: &str) -> Result<()> {
        self.value = text.to_string();
        Ok(())
    }
}

/// Selection from a fixed list of choices. The default is the first choice.
#[derive(Clone, Debug)]
pub struct Choice {
    label: String,
    doc: String,
    choices: Vec<String>,
    /// Current value
    pub value: String,
}

impl Choice {
    /// Create a choice setting defaulting to the first entry.
    pub fn new(label: &str, choices: &[&str], doc: &str) -> Self {
        let choices: Vec<String> = choices.iter().map(|c| c.to_string()).collect();
        let value = choices.first().cloned().unwrap_or_default();
        Self {
            label: label.to_string(),
            doc: doc.to_string(),
            choices,
            value,
        }
    }

    /// The available choices.
    pub fn choices(&self) -> &[String] {
        &self.choices
    }
}

impl Setting for Choice {
    fn label(&self) -> &str {
        &self.label
    }

    fn doc(&self) -> &str {
        &self.doc
    }

    fn kind(&self) -> SettingKind {
        SettingKind::Choice
    }

    fn value(&self) -> SettingValue {
        SettingValue::Text(self.value.clone())
    }

    fn set_from_text(&mut self, text: &str) -> Result<()> {
        if !self.choices.iter().any(|c| c == text) {
            return Err(Error::InvalidChoice {
                setting: self.label.clone(),
                value: text.to_string(),
            });
        }
        self.value = text.to_string();
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.choices.iter().any(|c| *c == self.value) {
            Ok(())
        } else {
            Err(Error::InvalidChoice {
                setting: self.label.clone(),
                value: self.value.clone(),
            })
        }
    }
}

/// Yes/no toggle setting.
#[derive(Clone, Debug)]
pub struct Binary {
    label: String,
    doc: String,
    /// Current value
    pub value: bool,
}

impl Binary {
    /// Create a binary setting with a default value.
    pub fn new(label: &str, default: bool, doc: &str) -> Self {
        Self {
            label: label.to_string(),
            doc: doc.to_string(),
            value: default,
        }
    }
}

impl Setting for Binary {
    fn label(&self) -> &str {
        &self.label
    }

    fn doc(&self) -> &str {
        &self.doc
    }

    fn kind(&self) -> SettingKind {
        SettingKind::Binary
    }

    fn value(&self) -> SettingValue {
        SettingValue::Bool(self.value)
    }

    fn set_from_text(&mut self, text: &str) -> Result<()> {
        let t = text.trim();
        if t.eq_ignore_ascii_case("yes") || t.eq_ignore_ascii_case("true") || t == "1" {
            self.value = true;
            Ok(())
        } else if t.eq_ignore_ascii_case("no") || t.eq_ignore_ascii_case("false") || t == "0" {
            self.value = false;
            Ok(())
        } else {
            Err(Error::InvalidSettingValue {
                setting: self.label.clone(),
                value: text.to_string(),
            })
        }
    }
}

/// Signed integer setting with optional inclusive bounds.
#[derive(Clone, Debug)]
pub struct Integer {
    label: String,
    doc: String,
    min: Option<i64>,
    max: Option<i64>,
    /// Current value
    pub value: i64,
}

impl Integer {
    /// Create an integer setting with a default value.
    pub fn new(label: &str, default: i64, doc: &str) -> Self {
        Self {
            label: label.to_string(),
            doc: doc.to_string(),
            min: None,
            max: None,
            value: default,
        }
    }

    /// Constrain the value to `min..=max`.
    pub fn with_range(mut self, min: i64, max: i64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }
}

impl Setting for Integer {
    fn label(&self) -> &str {
        &self.label
    }

    fn doc(&self) -> &str {
        &self.doc
    }

    fn kind(&self) -> SettingKind {
        SettingKind::Integer
    }

    fn value(&self) -> SettingValue {
        SettingValue::Int(self.value)
    }

    fn set_from_text(&mut self, text: &str) -> Result<()> {
        self.value = text
            .trim()
            .parse::<i64>()
            .map_err(|_| Error::InvalidSettingValue {
                setting: self.label.clone(),
                value: text.to_string(),
            })?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        let below = self.min.is_some_and(|min| self.value < min);
        let above = self.max.is_some_and(|max| self.value > max);
        if below || above {
            return Err(Error::OutOfRange {
                setting: self.label.clone(),
                value: self.value.to_string(),
            });
        }
        Ok(())
    }
}

/// Floating point setting with optional inclusive bounds.
#[derive(Clone, Debug)]
pub struct Float {
    label: String,
    doc: String,
    min: Option<f64>,
    max: Option<f64>,
    /// Current value
    pub value: f64,
}

impl Float {
    /// Create a float setting with a default value.
    pub fn new(label: &str, default: f64, doc: &str) -> Self {
        Self {
            label: label.to_string(),
            doc: doc.to_string(),
            min: None,
            max: None,
            value: default,
        }
    }

    /// Constrain the value to `min..=max`.
    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }
}

impl Setting for Float {
    fn label(&self) -> &str {
        &self.label
    }

    fn doc(&self) -> &str {
        &self.doc
    }

    fn kind(&self) -> SettingKind {
        SettingKind::Float
    }

    fn value(&self) -> SettingValue {
        SettingValue::Float(self.value)
    }

    fn set_from_text(&mut self, text: &str) -> Result<()> {
        self.value = text
            .trim()
            .parse::<f64>()
            .map_err(|_| Error::InvalidSettingValue {
                setting: self.label.clone(),
                value: text.to_string(),
            })?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        let below = self.min.is_some_and(|min| self.value < min);
        let above = self.max.is_some_and(|max| self.value > max);
        if below || above {
            return Err(Error::OutOfRange {
                setting: self.label.clone(),
                value: self.value.to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_setting() {
        let mut s = Text::new("Name", "nuclei", "Object name");
        assert_eq!(s.value, "nuclei");
        assert_eq!(s.value_text(), "nuclei");

        s.set_from_text("cells").unwrap();
        assert_eq!(s.value, "cells");
        assert_eq!(s.label(), "Name");
        assert_eq!(s.kind(), SettingKind::Text);
    }

    #[test]
    fn test_choice_defaults_to_first() {
        let s = Choice::new("Method", &["Otsu", "Manual"], "Threshold method");
        assert_eq!(s.value, "Otsu");
        assert_eq!(s.choices().len(), 2);
    }

    #[test]
    fn test_choice_rejects_non_member() {
        let mut s = Choice::new("Method", &["Otsu", "Manual"], "Threshold method");
        let err = s.set_from_text("Adaptive").unwrap_err();
        assert!(matches!(err, Error::InvalidChoice { .. }));
        // Rejected assignment leaves the value untouched
        assert_eq!(s.value, "Otsu");

        s.set_from_text("Manual").unwrap();
        assert_eq!(s.value, "Manual");
        s.validate().unwrap();
    }

    #[test]
    fn test_binary_parsing() {
        let mut s = Binary::new("Invert", false, "Invert the mask");
        for text in ["Yes", "yes", "true", "1"] {
            s.set_from_text(text).unwrap();
            assert!(s.value, "{} should parse as true", text);
        }
        for text in ["No", "FALSE", "0"] {
            s.set_from_text(text).unwrap();
            assert!(!s.value, "{} should parse as false", text);
        }
        assert!(s.set_from_text("maybe").is_err());
    }

    #[test]
    fn test_binary_value_text() {
        let mut s = Binary::new("Invert", false, "");
        assert_eq!(s.value_text(), "No");
        s.value = true;
        assert_eq!(s.value_text(), "Yes");
    }

    #[test]
    fn test_integer_parse_and_range() {
        let mut s = Integer::new("Count", 15, "How many").with_range(0, 100);
        s.validate().unwrap();

        s.set_from_text(" 42 ").unwrap();
        assert_eq!(s.value, 42);

        assert!(s.set_from_text("4.2").is_err());
        assert!(s.set_from_text("many").is_err());

        s.value = 101;
        assert!(matches!(s.validate(), Err(Error::OutOfRange { .. })));
    }

    #[test]
    fn test_float_parse_and_range() {
        let mut s = Float::new("Scale", 1.5, "Scale factor").with_range(0.0, 10.0);
        s.validate().unwrap();

        s.set_from_text("2.25").unwrap();
        assert_eq!(s.value, 2.25);
        assert_eq!(s.value_text(), "2.25");

        assert!(s.set_from_text("big").is_err());

        s.value = -0.5;
        assert!(s.validate().is_err());
    }

    #[test]
    fn test_unbounded_numeric_validates() {
        let s = Integer::new("Count", i64::MIN, "");
        s.validate().unwrap();
    }
}
