//! Module interface definition.
//!
//! Defines the interface analysis modules must implement.

use crate::core::Result;
use crate::module::workspace::Workspace;
use crate::settings::Setting;
use serde::{Deserialize, Serialize};

/// Category a module is grouped under in the host menus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Loads or stores files, or accesses a database
    FileProcessing,
    /// Transforms input images into derived images
    ImageProcessing,
    /// Segments images or modifies and relates objects
    ObjectProcessing,
    /// Quantifies images and object shapes
    Measurement,
    /// Interactive data exploration tools
    DataTools,
    /// Anything that does not fit the above
    Other,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::FileProcessing => write!(f, "File Processing"),
            Category::ImageProcessing => write!(f, "Image Processing"),
            Category::ObjectProcessing => write!(f, "Object Processing"),
            Category::Measurement => write!(f, "Measurement"),
            Category::DataTools => write!(f, "Data Tools"),
            Category::Other => write!(f, "Other"),
        }
    }
}

/// Module metadata.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ModuleInfo {
    /// Display name, also the registry key
    pub name: String,
    /// Menu category
    pub category: Category,
    /// Settings-schema revision. Bump whenever the settings list changes
    /// shape, so configurations saved at an older revision are rejected
    /// instead of silently misapplied.
    pub revision: u32,
    /// Help text shown to the user. May contain simple HTML snippets;
    /// tags must balance.
    pub doc: String,
}

impl ModuleInfo {
    /// Create new module info at revision 1.
    pub fn new(name: &str, category: Category) -> Self {
        Self {
            name: name.to_string(),
            category,
            revision: 1,
            doc: String::new(),
        }
    }

    /// Set the schema revision.
    pub fn with_revision(mut self, revision: u32) -> Self {
        self.revision = revision;
        self
    }

    /// Set the help text.
    pub fn with_doc(mut self, doc: &str) -> Self {
        self.doc = doc.to_string();
        self
    }
}

/// Interface every analysis module implements.
///
/// Settings are declared once, at construction, and must not depend on
/// each other's values.
pub trait Module: Send + Sync {
    /// Module metadata.
    fn info(&self) -> ModuleInfo;

    /// All settings, in save/load order.
    ///
    /// The order is a compatibility contract: saved configurations store
    /// values positionally, so reordering or omitting a setting breaks
    /// previously saved pipelines.
    fn settings(&self) -> Vec<&dyn Setting>;

    /// Mutable view of the settings, in the same order as
    /// [`Module::settings`].
    fn settings_mut(&mut self) -> Vec<&mut dyn Setting>;

    /// The subset of settings to present to the user, as a function of
    /// the current values. Defaults to the full list.
    fn visible_settings(&self) -> Vec<&dyn Setting> {
        self.settings()
    }

    /// Settings in the order their help is displayed. Defaults to the
    /// save/load order.
    fn help_settings(&self) -> Vec<&dyn Setting> {
        self.settings()
    }

    /// Check that every setting holds an acceptable value.
    fn validate(&self) -> Result<()> {
        for setting in self.settings() {
            setting.validate()?;
        }
        Ok(())
    }

    /// Execute the module against the current workspace.
    fn run(&mut self, workspace: &mut Workspace) -> Result<()>;
}

impl std::fmt::Debug for dyn Module {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Module")
            .field("name", &self.info().name)
            .finish()
    }
}
