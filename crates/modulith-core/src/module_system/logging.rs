use log::Level;

/// Logger handed to a module during the logging-attachment stage.
///
/// A thin facade over the `log` crate: every record is emitted with a target
/// scoped to the owning module (`<app>::<module>`), so host logging
/// configuration can route or filter per module. Category loggers declared
/// in the descriptor nest one level deeper.
#[derive(Debug, Clone)]
pub struct ModuleLogger {
    target: String,
}

impl ModuleLogger {
    /// Create the logger scoped to a module of an application
    pub fn for_module(app_name: &str, module_name: &str) -> Self {
        Self {
            target: format!("{}::{}", app_name, module_name),
        }
    }

    /// Create a child logger for one of the module's declared categories
    pub fn child(&self, category: &str) -> Self {
        Self {
            target: format!("{}::{}", self.target, category),
        }
    }

    /// The log target records are emitted under
    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn trace(&self, message: &str) {
        self.log(Level::Trace, message);
    }

    pub fn debug(&self, message: &str) {
        self.log(Level::Debug, message);
    }

    pub fn info(&self, message: &str) {
        self.log(Level::Info, message);
    }

    pub fn warn(&self, message: &str) {
        self.log(Level::Warn, message);
    }

    pub fn error(&self, message: &str) {
        self.log(Level::Error, message);
    }

    fn log(&self, level: Level, message: &str) {
        log::log!(target: self.target.as_str(), level, "{}", message);
    }
}
