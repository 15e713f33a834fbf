//! Statistics report for a filtered table, one timed section per reporter.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::domain::{
    duration_stats, station_stats, time_stats, user_stats, DurationStats, StationStats,
    TimeStats, TripTable, UserStats,
};

/// One reporter's result and how long it took to compute.
/// `stats` is None when the table has no trips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section<T> {
    pub stats: Option<T>,
    pub elapsed: Duration,
}

impl<T> Section<T> {
    fn measure(name: &str, compute: impl FnOnce() -> Option<T>) -> Self {
        let started = Instant::now();
        let stats = compute();
        let elapsed = started.elapsed();
        debug!("{name}: computed in {elapsed:?}");
        Self { stats, elapsed }
    }
}

/// All four statistics groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsReport {
    pub trips: usize,
    pub times: Section<TimeStats>,
    pub stations: Section<StationStats>,
    pub durations: Section<DurationStats>,
    pub users: Section<UserStats>,
}

impl StatsReport {
    pub fn compute(table: &TripTable) -> Self {
        Self {
            trips: table.len(),
            times: Section::measure("time_stats", || time_stats(table)),
            stations: Section::measure("station_stats", || station_stats(table)),
            durations: Section::measure("duration_stats", || duration_stats(table)),
            users: Section::measure("user_stats", || user_stats(table)),
        }
    }
}
