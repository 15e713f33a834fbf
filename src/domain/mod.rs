//! Domain layer: trip data, filters and statistics
//!
//! This layer is independent of external concerns (no file access, no console, no config loading).

pub mod confirm;
pub mod error;
pub mod filter;
pub mod stats;
pub mod trip;

pub use confirm::Confirmation;
pub use error::DomainError;
pub use filter::{
    month_name, month_number, weekday_name, City, DayFilter, Filter, FilterSelection,
    MonthFilter, SUPPORTED_MONTHS, WEEKDAYS, WILDCARD,
};
pub use stats::{
    duration_stats, station_stats, time_stats, user_stats, BirthYearStats, ColumnStats,
    DurationStats, Hms, StationStats, TimeStats, UserStats, ValueCount,
};
pub use trip::{Schema, Trip, TripTable};
