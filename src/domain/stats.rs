//! Statistics over a filtered trip table.
//!
//! Every function here is a pure read of the table and returns `None` when
//! the table is empty. Modal values break ties by taking the smallest value
//! (numeric order for numbers, Monday-first for weekdays, lexicographic for
//! strings), so results never depend on row order.

use std::fmt;

use chrono::Weekday;
use itertools::Itertools;

use crate::domain::filter::WEEKDAYS;
use crate::domain::trip::TripTable;

/// A value together with how often it occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueCount<T> {
    pub value: T,
    pub count: usize,
}

/// Count distinct values, most frequent first; equal counts in ascending value order.
pub fn value_counts<T, I>(values: I) -> Vec<ValueCount<T>>
where
    T: Ord + std::hash::Hash,
    I: IntoIterator<Item = T>,
{
    values
        .into_iter()
        .counts()
        .into_iter()
        .map(|(value, count)| ValueCount { value, count })
        .sorted_by(|a, b| b.count.cmp(&a.count).then_with(|| a.value.cmp(&b.value)))
        .collect()
}

/// Most frequent value; the smallest one wins a tie.
pub fn mode<T, I>(values: I) -> Option<ValueCount<T>>
where
    T: Ord + std::hash::Hash,
    I: IntoIterator<Item = T>,
{
    value_counts(values).into_iter().next()
}

/// Whole seconds split into hours, minutes and seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hms {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Hms {
    pub fn from_secs(total: u64) -> Self {
        let (minutes, seconds) = (total / 60, total % 60);
        let (hours, minutes) = (minutes / 60, minutes % 60);
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    pub fn as_secs(&self) -> u64 {
        self.hours * 3600 + self.minutes * 60 + self.seconds
    }
}

impl fmt::Display for Hms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} hours, {} minutes, and {} seconds",
            self.hours, self.minutes, self.seconds
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeStats {
    /// Calendar month number, 1-12
    pub month: ValueCount<u32>,
    pub weekday: ValueCount<Weekday>,
    /// Start hour, 0-23
    pub hour: ValueCount<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    pub start_station: ValueCount<String>,
    pub end_station: ValueCount<String>,
    /// "<start> to <end>"
    pub route: ValueCount<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DurationStats {
    pub trips: usize,
    pub total: Hms,
    pub mean: Hms,
}

/// Result for a column that only some datasets carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnStats<T> {
    /// The source file has no such column
    Unavailable,
    /// The column exists but every selected cell is blank
    NoValues,
    Available(T),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub most_recent: i32,
    pub most_common: ValueCount<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    pub user_types: Vec<ValueCount<String>>,
    pub genders: ColumnStats<Vec<ValueCount<String>>>,
    pub birth_years: ColumnStats<BirthYearStats>,
}

/// Most common month, weekday and start hour.
pub fn time_stats(table: &TripTable) -> Option<TimeStats> {
    let trips = table.trips();
    let month = mode(trips.iter().map(|t| t.month))?;
    let weekday = mode(trips.iter().map(|t| t.weekday.num_days_from_monday()))?;
    let hour = mode(trips.iter().map(|t| t.hour))?;

    Some(TimeStats {
        month,
        weekday: ValueCount {
            value: WEEKDAYS[weekday.value as usize],
            count: weekday.count,
        },
        hour,
    })
}

/// Most common start station, end station and route.
pub fn station_stats(table: &TripTable) -> Option<StationStats> {
    let trips = table.trips();
    Some(StationStats {
        start_station: mode(trips.iter().map(|t| t.start_station.clone()))?,
        end_station: mode(trips.iter().map(|t| t.end_station.clone()))?,
        route: mode(trips.iter().map(|t| t.route()))?,
    })
}

/// Total and mean trip duration, truncated to whole seconds.
pub fn duration_stats(table: &TripTable) -> Option<DurationStats> {
    if table.is_empty() {
        return None;
    }
    let total: f64 = table.trips().iter().map(|t| t.duration_secs).sum();
    let mean = total / table.len() as f64;

    Some(DurationStats {
        trips: table.len(),
        total: Hms::from_secs(total.trunc() as u64),
        mean: Hms::from_secs(mean.trunc() as u64),
    })
}

/// User type breakdown plus gender and birth year where the dataset has them.
pub fn user_stats(table: &TripTable) -> Option<UserStats> {
    if table.is_empty() {
        return None;
    }
    let trips = table.trips();
    let schema = table.schema();

    let user_types = value_counts(trips.iter().filter_map(|t| t.user_type.clone()));

    let genders = if schema.has_gender() {
        let counts = value_counts(trips.iter().filter_map(|t| t.gender.clone()));
        if counts.is_empty() {
            ColumnStats::NoValues
        } else {
            ColumnStats::Available(counts)
        }
    } else {
        ColumnStats::Unavailable
    };

    let birth_years = if schema.has_birth_year() {
        birth_year_stats(trips.iter().filter_map(|t| t.birth_year))
            .map_or(ColumnStats::NoValues, ColumnStats::Available)
    } else {
        ColumnStats::Unavailable
    };

    Some(UserStats {
        user_types,
        genders,
        birth_years,
    })
}

fn birth_year_stats(years: impl Iterator<Item = i32> + Clone) -> Option<BirthYearStats> {
    let (earliest, most_recent) = years.clone().minmax().into_option()?;
    let most_common = mode(years)?;
    Some(BirthYearStats {
        earliest,
        most_recent,
        most_common,
    })
}
