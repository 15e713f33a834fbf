//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::{DatasetLoader, FilterSelector, RowViewer};
use crate::config::Settings;
use crate::infrastructure::traits::{ConsolePrompt, FileSystem, Prompt, RealFileSystem};

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,

    /// Console abstraction
    pub prompt: Arc<dyn Prompt>,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(settings, Arc::new(RealFileSystem), Arc::new(ConsolePrompt))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(settings: Settings, fs: Arc<dyn FileSystem>, prompt: Arc<dyn Prompt>) -> Self {
        let settings = Arc::new(settings);

        Self {
            settings,
            fs,
            prompt,
        }
    }

    pub fn loader(&self) -> DatasetLoader {
        DatasetLoader::new(Arc::clone(&self.fs), Arc::clone(&self.settings))
    }

    pub fn selector(&self) -> FilterSelector {
        FilterSelector::new(Arc::clone(&self.prompt))
    }

    pub fn viewer(&self) -> RowViewer {
        RowViewer::new(Arc::clone(&self.prompt))
    }
}
