//! Pipeline assembly and execution.

use crate::core::Result;
use crate::module::{Module, Workspace};

/// An ordered stack of analysis modules.
///
/// Modules run one after another against a shared workspace; there is no
/// parallelism and no partial re-run.
pub struct Pipeline {
    modules: Vec<Box<dyn Module>>,
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("modules", &self.modules)
            .finish()
    }
}

impl Pipeline {
    /// Create an empty pipeline.
    pub fn new() -> Self {
        Self {
            modules: Vec::new(),
        }
    }

    /// Append a module to the stack.
    pub fn add_module(&mut self, module: Box<dyn Module>) {
        self.modules.push(module);
    }

    /// The modules, in execution order.
    pub fn modules(&self) -> &[Box<dyn Module>] {
        &self.modules
    }

    /// Number of modules in the stack.
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Whether the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Check every module's settings.
    pub fn validate(&self) -> Result<()> {
        for module in &self.modules {
            module.validate()?;
        }
        Ok(())
    }

    /// Run every module in order against the workspace.
    ///
    /// Each module is validated immediately before it runs; the first
    /// failure stops the run.
    pub fn run(&mut self, workspace: &mut Workspace) -> Result<()> {
        for (module_num, module) in self.modules.iter_mut().enumerate() {
            let info = module.info();
            tracing::info!(module = %info.name, module_num, "running module");
            module.validate()?;
            module.run(workspace)?;
        }
        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
