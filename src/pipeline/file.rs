//! Positional settings persistence.
//!
//! A saved pipeline stores, per module, the module name, its
//! settings-schema revision, and the setting values as text in save/load
//! order. Values are applied back positionally, so the order a module
//! returns from `settings()` is a compatibility contract.

use crate::core::{Error, Result};
use crate::module::{ModuleRegistry, Workspace};
use crate::pipeline::runner::Pipeline;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Pipeline file format version.
pub const PIPELINE_FILE_VERSION: u32 = 1;

/// Serialized configuration of one module.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ModuleConfig {
    /// Registry name of the module
    pub module_name: String,
    /// Settings-schema revision the values were saved at
    pub revision: u32,
    /// Setting values as text, in save/load order
    pub values: Vec<String>,
}

/// Serialized form of a pipeline.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PipelineFile {
    /// File format version
    pub version: u32,
    /// Module configurations, in execution order
    pub modules: Vec<ModuleConfig>,
}

impl PipelineFile {
    /// Serialize to a JSON document.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(Error::from)
    }

    /// Parse from a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(Error::from)
    }

    /// Write the JSON document to a file.
    pub fn write(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Read a JSON document from a file.
    pub fn read(path: &Path) -> Result<Self> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }
}

impl Pipeline {
    /// Capture the pipeline's current configuration.
    pub fn save(&self) -> PipelineFile {
        let modules = self
            .modules()
            .iter()
            .map(|module| {
                let info = module.info();
                ModuleConfig {
                    module_name: info.name,
                    revision: info.revision,
                    values: module.settings().iter().map(|s| s.value_text()).collect(),
                }
            })
            .collect();

        PipelineFile {
            version: PIPELINE_FILE_VERSION,
            modules,
        }
    }

    /// Rebuild a pipeline from a saved configuration.
    ///
    /// Each module is instantiated through the registry and its saved
    /// values are applied positionally. Loading fails on an unknown
    /// module name, a file-version or schema-revision mismatch, a value
    /// count that does not match the module's settings list, or a value
    /// the setting refuses to parse.
    pub fn load(registry: &ModuleRegistry, file: &PipelineFile) -> Result<Self> {
        if file.version != PIPELINE_FILE_VERSION {
            return Err(Error::UnsupportedFileVersion(file.version));
        }

        let mut pipeline = Pipeline::new();
        for config in &file.modules {
            let mut module = registry.create(&config.module_name)?;
            let info = module.info();

            if info.revision != config.revision {
                return Err(Error::RevisionMismatch {
                    module: info.name,
                    expected: info.revision,
                    found: config.revision,
                });
            }

            {
                let mut slots = module.settings_mut();
                if slots.len() != config.values.len() {
                    return Err(Error::SettingCountMismatch {
                        module: info.name,
                        expected: slots.len(),
                        found: config.values.len(),
                    });
                }
                for (slot, text) in slots.iter_mut().zip(&config.values) {
                    slot.set_from_text(text)?;
                }
            }

            module.validate()?;
            pipeline.add_module(module);
        }

        Ok(pipeline)
    }

    /// Save the pipeline to a file.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        self.save().write(path)
    }

    /// Load a pipeline from a file.
    pub fn load_from_path(registry: &ModuleRegistry, path: &Path) -> Result<Self> {
        Self::load(registry, &PipelineFile::read(path)?)
    }
}

/// Run a saved configuration end to end.
///
/// Convenience for hosts that load and immediately execute: rebuilds the
/// pipeline and runs it against a fresh workspace, which is returned with
/// the run's messages and data.
pub fn run_file(registry: &ModuleRegistry, file: &PipelineFile) -> Result<Workspace> {
    let mut pipeline = Pipeline::load(registry, file)?;
    let mut workspace = Workspace::new();
    pipeline.run(&mut workspace)?;
    Ok(workspace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::SumDemo;

    fn demo_registry() -> ModuleRegistry {
        let mut registry = ModuleRegistry::new();
        registry.register(|| Box::new(SumDemo::new())).unwrap();
        registry
    }

    fn customized_pipeline() -> Pipeline {
        let mut module = SumDemo::new();
        module.text.value = "plate 7".to_string();
        module.choice.value = "Choice 2".to_string();
        module.binary.value = true;
        module.integer.value = 42;
        module.float.value = 2.25;

        let mut pipeline = Pipeline::new();
        pipeline.add_module(Box::new(module));
        pipeline
    }

    #[test]
    fn test_save_captures_values_in_order() {
        let file = customized_pipeline().save();

        assert_eq!(file.version, PIPELINE_FILE_VERSION);
        assert_eq!(file.modules.len(), 1);

        let config = &file.modules[0];
        assert_eq!(config.module_name, "SumDemo");
        assert_eq!(config.revision, 1);
        assert_eq!(config.values, ["plate 7", "Choice 2", "Yes", "42", "2.25"]);
    }

    #[test]
    fn test_json_roundtrip() {
        let file = customized_pipeline().save();
        let json = file.to_json().unwrap();
        let parsed = PipelineFile::from_json(&json).unwrap();

        assert_eq!(parsed.version, file.version);
        assert_eq!(parsed.modules[0].values, file.modules[0].values);
    }

    #[test]
    fn test_load_restores_values() {
        let registry = demo_registry();
        let file = customized_pipeline().save();

        let pipeline = Pipeline::load(&registry, &file).unwrap();
        assert_eq!(pipeline.len(), 1);

        let restored: Vec<String> = pipeline.modules()[0]
            .settings()
            .iter()
            .map(|s| s.value_text())
            .collect();
        assert_eq!(restored, ["plate 7", "Choice 2", "Yes", "42", "2.25"]);
    }

    #[test]
    fn test_load_rejects_unknown_module() {
        let registry = demo_registry();
        let mut file = customized_pipeline().save();
        file.modules[0].module_name = "NoSuchModule".to_string();

        let err = Pipeline::load(&registry, &file).unwrap_err();
        assert!(matches!(err, Error::ModuleNotFound(_)));
    }

    #[test]
    fn test_load_rejects_truncated_values() {
        let registry = demo_registry();
        let mut file = customized_pipeline().save();
        file.modules[0].values.pop();

        let err = Pipeline::load(&registry, &file).unwrap_err();
        assert!(matches!(
            err,
            Error::SettingCountMismatch {
                expected: 5,
                found: 4,
                ..
            }
        ));
    }

    #[test]
    fn test_load_rejects_bumped_revision() {
        let registry = demo_registry();
        let mut file = customized_pipeline().save();
        file.modules[0].revision = 2;

        let err = Pipeline::load(&registry, &file).unwrap_err();
        assert!(matches!(err, Error::RevisionMismatch { .. }));
    }

    #[test]
    fn test_load_rejects_unsupported_version() {
        let registry = demo_registry();
        let mut file = customized_pipeline().save();
        file.version = 99;

        let err = Pipeline::load(&registry, &file).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFileVersion(99)));
    }

    #[test]
    fn test_load_rejects_bad_choice_value() {
        let registry = demo_registry();
        let mut file = customized_pipeline().save();
        file.modules[0].values[1] = "Choice 9".to_string();

        let err = Pipeline::load(&registry, &file).unwrap_err();
        assert!(matches!(err, Error::InvalidChoice { .. }));
    }

    #[test]
    fn test_file_roundtrip_on_disk() {
        let registry = demo_registry();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pipeline.json");

        customized_pipeline().save_to_path(&path).unwrap();
        let pipeline = Pipeline::load_from_path(&registry, &path).unwrap();

        let restored: Vec<String> = pipeline.modules()[0]
            .settings()
            .iter()
            .map(|s| s.value_text())
            .collect();
        assert_eq!(restored, ["plate 7", "Choice 2", "Yes", "42", "2.25"]);
    }

    #[test]
    fn test_run_file_end_to_end() {
        let registry = demo_registry();
        let file = customized_pipeline().save();

        let workspace = run_file(&registry, &file).unwrap();
        assert_eq!(workspace.messages(), ["42 + 2.250000 = 44.250000"]);
    }
}
