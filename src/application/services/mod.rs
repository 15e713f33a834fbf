//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on I/O boundary traits (FileSystem, Prompt)
//! but are themselves concrete structs, not traits.

mod loader;
mod report;
mod selector;
mod viewer;

pub use loader::DatasetLoader;
pub use report::{Section, StatsReport};
pub use selector::{ask_until_valid, confirm, FilterSelector};
pub use selector::{CITY_QUESTION, DAY_QUESTION, MONTH_QUESTION};
pub use viewer::{RowViewer, ViewSummary, CONTINUE_QUESTION, PAGE_SIZE, VIEW_QUESTION};
