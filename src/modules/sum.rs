//! Arithmetic demonstration module.
//!
//! The smallest complete module: five typed settings, a conditional
//! visibility rule, and a run step that reports the sum of the two
//! numeric settings.

use crate::core::Result;
use crate::module::{Category, Module, ModuleInfo, Workspace};
use crate::settings::{Binary, Choice, Float, Integer, Setting, Text};

/// Demonstration module that adds its integer and float settings.
///
/// The numeric settings only appear in the UI once the binary setting is
/// turned on.
pub struct SumDemo {
    /// Free-form text term
    pub text: Text,
    /// One of three fixed choices
    pub choice: Choice,
    /// Gates visibility of the numeric settings
    pub binary: Binary,
    /// Integer term of the sum
    pub integer: Integer,
    /// Floating point term of the sum
    pub float: Float,
}

impl SumDemo {
    /// Name the module registers under.
    pub const NAME: &'static str = "SumDemo";

    /// Create the module with default settings.
    pub fn new() -> Self {
        Self {
            text: Text::new(
                "Text setting",
                "suggested value",
                "This is the help for the text setting",
            ),
            choice: Choice::new(
                "Choice setting",
                &["Choice 1", "Choice 2", "Choice 3"],
                "This is the help for the choice setting",
            ),
            binary: Binary::new(
                "Binary setting",
                false,
                "This is the help for the binary setting",
            ),
            integer: Integer::new(
                "Integer setting",
                15,
                "This is the help for the integer setting",
            ),
            float: Float::new(
                "Float setting",
                1.5,
                "This is the help for the float setting",
            ),
        }
    }
}

impl Default for SumDemo {
    fn default() -> Self {
        Self::new()
    }
}

impl Module for SumDemo {
    fn info(&self) -> ModuleInfo {
        ModuleInfo::new(Self::NAME, Category::Other).with_doc(
            "<b>SumDemo</b> adds its two numeric settings.\
             <hr>\
             Turn on the binary setting to expose them:\
             <ul><li>an integer term</li><li>a floating point term</li></ul>",
        )
    }

    fn settings(&self) -> Vec<&dyn Setting> {
        vec![
            &self.text,
            &self.choice,
            &self.binary,
            &self.integer,
            &self.float,
        ]
    }

    fn settings_mut(&mut self) -> Vec<&mut dyn Setting> {
        vec![
            &mut self.text,
            &mut self.choice,
            &mut self.binary,
            &mut self.integer,
            &mut self.float,
        ]
    }

    fn visible_settings(&self) -> Vec<&dyn Setting> {
        let mut result: Vec<&dyn Setting> = vec![&self.text, &self.choice, &self.binary];
        if self.binary.value {
            result.push(&self.integer);
            result.push(&self.float);
        }
        result
    }

    fn help_settings(&self) -> Vec<&dyn Setting> {
        vec![
            &self.choice,
            &self.text,
            &self.binary,
            &self.integer,
            &self.float,
        ]
    }

    fn run(&mut self, workspace: &mut Workspace) -> Result<()> {
        let integer_value = self.integer.value;
        let float_value = self.float.value;
        let message = format!(
            "{} + {:.6} = {:.6}",
            integer_value,
            float_value,
            integer_value as f64 + float_value
        );

        tracing::info!(module = Self::NAME, "{}", message);
        workspace.post_message(message);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(settings: &[&dyn Setting]) -> Vec<String> {
        settings.iter().map(|s| s.label().to_string()).collect()
    }

    #[test]
    fn test_persistence_order_is_fixed() {
        let mut module = SumDemo::new();
        let expected = [
            "Text setting",
            "Choice setting",
            "Binary setting",
            "Integer setting",
            "Float setting",
        ];
        assert_eq!(labels(&module.settings()), expected);

        // Current values never affect the save/load order
        module.binary.value = true;
        module.integer.value = -7;
        assert_eq!(labels(&module.settings()), expected);
    }

    #[test]
    fn test_default_values() {
        let module = SumDemo::new();
        assert_eq!(module.text.value, "suggested value");
        assert_eq!(module.choice.value, "Choice 1");
        assert!(!module.binary.value);
        assert_eq!(module.integer.value, 15);
        assert_eq!(module.float.value, 1.5);
    }

    #[test]
    fn test_visible_settings_follow_binary() {
        let mut module = SumDemo::new();
        assert_eq!(
            labels(&module.visible_settings()),
            ["Text setting", "Choice setting", "Binary setting"]
        );

        module.binary.value = true;
        assert_eq!(
            labels(&module.visible_settings()),
            [
                "Text setting",
                "Choice setting",
                "Binary setting",
                "Integer setting",
                "Float setting",
            ]
        );
    }

    #[test]
    fn test_visibility_is_idempotent() {
        let mut module = SumDemo::new();
        module.binary.value = true;

        let first = labels(&module.visible_settings());
        let second = labels(&module.visible_settings());
        assert_eq!(first, second);

        // Recomputing visibility leaves the stored values alone
        assert_eq!(module.text.value, "suggested value");
        assert_eq!(module.choice.value, "Choice 1");
        assert_eq!(module.integer.value, 15);
        assert_eq!(module.float.value, 1.5);
    }

    #[test]
    fn test_help_settings_order() {
        let module = SumDemo::new();
        assert_eq!(
            labels(&module.help_settings()),
            [
                "Choice setting",
                "Text setting",
                "Binary setting",
                "Integer setting",
                "Float setting",
            ]
        );
    }

    #[test]
    fn test_run_reports_sum_of_defaults() {
        let mut module = SumDemo::new();
        let mut workspace = Workspace::new();

        module.run(&mut workspace).unwrap();
        assert_eq!(workspace.messages(), ["15 + 1.500000 = 16.500000"]);
    }

    #[test]
    fn test_run_reports_sum_of_zeros() {
        let mut module = SumDemo::new();
        module.integer.value = 0;
        module.float.value = 0.0;
        let mut workspace = Workspace::new();

        module.run(&mut workspace).unwrap();
        assert_eq!(workspace.messages(), ["0 + 0.000000 = 0.000000"]);
    }

    #[test]
    fn test_run_is_unaffected_by_visibility() {
        let mut module = SumDemo::new();
        module.binary.value = true;
        let mut workspace = Workspace::new();

        module.run(&mut workspace).unwrap();
        assert_eq!(workspace.messages(), ["15 + 1.500000 = 16.500000"]);
    }

    #[test]
    fn test_info() {
        let info = SumDemo::new().info();
        assert_eq!(info.name, "SumDemo");
        assert_eq!(info.category, Category::Other);
        assert_eq!(info.revision, 1);
    }
}
