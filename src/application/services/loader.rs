//! Dataset loading service
//!
//! Reads a city's trip file and narrows it to the selected month and day.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::config::Settings;
use crate::domain::{City, DomainError, FilterSelection, TripTable};
use crate::infrastructure::traits::FileSystem;

/// Service for loading and filtering trip tables.
pub struct DatasetLoader {
    fs: Arc<dyn FileSystem>,
    settings: Arc<Settings>,
}

impl DatasetLoader {
    /// Create a loader resolving city files through `settings`.
    pub fn new(fs: Arc<dyn FileSystem>, settings: Arc<Settings>) -> Self {
        Self { fs, settings }
    }

    /// Path of the CSV file backing `city`.
    pub fn data_file(&self, city: City) -> PathBuf {
        self.settings.data_file(city)
    }

    /// Load the full table of a city.
    #[instrument(skip(self))]
    pub fn load_city(&self, city: City) -> ApplicationResult<TripTable> {
        let path = self.data_file(city);
        if !self.fs.is_file(&path) {
            return Err(ApplicationError::DataFileNotFound { city, path });
        }

        let content = self
            .fs
            .read_to_string(&path)
            .with_path_context("read trip data", &path)?;
        let table = TripTable::parse(city, &content).map_err(|source| data_err(&path, source))?;
        debug!("load_city: {} trips from {}", table.len(), path.display());
        Ok(table)
    }

    /// Load a city's table narrowed to the selected month and day.
    #[instrument(skip(self))]
    pub fn load_data(&self, selection: &FilterSelection) -> ApplicationResult<TripTable> {
        let mut table = self.load_city(selection.city)?;
        let before = table.len();
        table.apply_filters(selection);
        debug!(
            "load_data: month={} day={} kept {}/{} trips",
            selection.month,
            selection.day,
            table.len(),
            before
        );
        Ok(table)
    }
}

fn data_err(path: &Path, source: DomainError) -> ApplicationError {
    ApplicationError::Data {
        path: path.to_path_buf(),
        source,
    }
}
