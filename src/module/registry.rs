//! Module registry.
//!
//! Handles module registration, discovery, and instantiation.

use crate::core::{now, Error, Result, Timestamp};
use crate::module::interface::{Module, ModuleInfo};
use std::collections::HashMap;

/// Constructor for a module instance with default settings.
pub type ModuleFactory = fn() -> Box<dyn Module>;

/// Registered module entry.
pub struct RegisteredModule {
    /// Module constructor
    pub factory: ModuleFactory,
    /// Metadata captured at registration
    pub info: ModuleInfo,
    /// Registration time
    pub registered_at: Timestamp,
}

/// Module registry.
///
/// Holds factories rather than instances: loading a saved pipeline needs
/// to instantiate modules by name, once per pipeline slot.
pub struct ModuleRegistry {
    modules: HashMap<String, RegisteredModule>,
}

impl ModuleRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            modules: HashMap::new(),
        }
    }

    /// Register a module factory.
    ///
    /// The factory is invoked once to capture the module's metadata. The
    /// help doc's markup must balance; the host refuses modules whose
    /// help would render broken.
    pub fn register(&mut self, factory: ModuleFactory) -> Result<()> {
        let module = factory();
        let info = module.info();

        validate_doc_markup(&info.doc)?;

        if self.modules.contains_key(&info.name) {
            return Err(Error::ModuleAlreadyRegistered(info.name));
        }

        tracing::debug!(module = %info.name, category = %info.category, "registered module");

        self.modules.insert(
            info.name.clone(),
            RegisteredModule {
                factory,
                info,
                registered_at: now(),
            },
        );

        Ok(())
    }

    /// Instantiate a module by name, with default settings.
    pub fn create(&self, name: &str) -> Result<Box<dyn Module>> {
        self.modules
            .get(name)
            .map(|entry| (entry.factory)())
            .ok_or_else(|| Error::ModuleNotFound(name.to_string()))
    }

    /// Get a registered module's metadata.
    pub fn get_info(&self, name: &str) -> Option<&ModuleInfo> {
        self.modules.get(name).map(|entry| &entry.info)
    }

    /// Whether a module name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.modules.contains_key(name)
    }

    /// List all registered modules.
    pub fn list(&self) -> Vec<&ModuleInfo> {
        self.modules.values().map(|entry| &entry.info).collect()
    }

    /// Number of registered modules.
    pub fn count(&self) -> usize {
        self.modules.len()
    }
}

impl Default for ModuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Tags that never take a closing counterpart.
const VOID_TAGS: [&str; 4] = ["br", "hr", "img", "input"];

/// Check that the HTML snippets in a help doc balance.
fn validate_doc_markup(doc: &str) -> Result<()> {
    let mut stack: Vec<String> = Vec::new();
    let mut rest = doc;

    while let Some(open) = rest.find('<') {
        rest = &rest[open + 1..];
        let close = match rest.find('>') {
            Some(c) => c,
            None => break,
        };
        let tag = &rest[..close];
        rest = &rest[close + 1..];

        // Comments, doctypes, and self-closing tags need no counterpart
        if tag.starts_with('!') || tag.ends_with('/') {
            continue;
        }

        if let Some(name) = tag.strip_prefix('/') {
            let name = name.trim().to_ascii_lowercase();
            match stack.pop() {
                Some(top) if top == name => {}
                _ => return Err(Error::UnbalancedMarkup(name)),
            }
        } else {
            let name: String = tag
                .chars()
                .take_while(|c| c.is_ascii_alphanumeric())
                .collect::<String>()
                .to_ascii_lowercase();
            if name.is_empty() || VOID_TAGS.contains(&name.as_str()) {
                continue;
            }
            stack.push(name);
        }
    }

    match stack.pop() {
        Some(top) => Err(Error::UnbalancedMarkup(top)),
        None => Ok(()),
    }
}
