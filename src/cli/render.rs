//! Plain-text rendering of statistics and trip batches.
//!
//! Functions return strings so the wording can be tested without a terminal;
//! `print_report` adds headers, timings and separators.

use std::fmt::Write;

use crate::application::services::{Section, StatsReport};
use crate::cli::output;
use crate::domain::{
    month_name, weekday_name, BirthYearStats, City, ColumnStats, DurationStats, StationStats,
    TimeStats, Trip, UserStats, ValueCount,
};

pub const NO_DATA: &str = "No trips match the selected filters.";

pub fn render_times(stats: &TimeStats) -> String {
    let month = month_name(stats.month.value).unwrap_or("unknown");
    format!(
        "Most common month: {} ({} trips)\n\
         Most common day: {} ({} trips)\n\
         Most common start hour: {} ({} trips)",
        month,
        stats.month.count,
        weekday_name(stats.weekday.value),
        stats.weekday.count,
        stats.hour.value,
        stats.hour.count,
    )
}

pub fn render_stations(stats: &StationStats) -> String {
    format!(
        "Most common start station: {} ({} trips)\n\
         Most common end station: {} ({} trips)\n\
         Most popular trip: {} ({} trips)",
        stats.start_station.value,
        stats.start_station.count,
        stats.end_station.value,
        stats.end_station.count,
        stats.route.value,
        stats.route.count,
    )
}

pub fn render_durations(stats: &DurationStats) -> String {
    format!(
        "Trips: {}\nTotal travel time: {}\nMean travel time: {}",
        stats.trips, stats.total, stats.mean
    )
}

pub fn render_users(stats: &UserStats, city: City) -> String {
    let mut out = String::new();

    out.push_str("User types:");
    write_counts(&mut out, &stats.user_types);

    match &stats.genders {
        ColumnStats::Available(counts) => {
            out.push_str("\nGenders:");
            write_counts(&mut out, counts);
        }
        ColumnStats::NoValues => out.push_str("\nNo gender values for the selected trips"),
        ColumnStats::Unavailable => {
            let _ = write!(out, "\nSorry! Gender data unavailable for {city}");
        }
    }

    match &stats.birth_years {
        ColumnStats::Available(years) => write_birth_years(&mut out, years),
        ColumnStats::NoValues => out.push_str("\nNo birth year values for the selected trips"),
        ColumnStats::Unavailable => {
            let _ = write!(out, "\nSorry! Birth year data unavailable for {city}");
        }
    }

    out
}

fn write_counts(out: &mut String, counts: &[ValueCount<String>]) {
    if counts.is_empty() {
        out.push_str(" none");
    }
    for c in counts {
        let _ = write!(out, "\n  {}: {}", c.value, c.count);
    }
}

fn write_birth_years(out: &mut String, years: &BirthYearStats) {
    let _ = write!(
        out,
        "\nEarliest birth year: {}\nMost recent birth year: {}\nMost common birth year: {} ({} riders)",
        years.earliest, years.most_recent, years.most_common.value, years.most_common.count
    );
}

/// One batch of raw trips, each line prefixed with its position in the filtered table.
pub fn render_trips(offset: usize, trips: &[Trip]) -> String {
    trips
        .iter()
        .enumerate()
        .map(|(i, trip)| format!("[{}] {}", offset + i, trip))
        .collect::<Vec<_>>()
        .join("\n")
}

fn print_section<T>(title: &str, section: &Section<T>, render: impl FnOnce(&T) -> String) {
    output::header(&format!("\n{title}\n"));
    match &section.stats {
        Some(stats) => output::info(&render(stats)),
        None => output::info(NO_DATA),
    }
    output::timing(&format!(
        "\nThis took {:.6} seconds.",
        section.elapsed.as_secs_f64()
    ));
    output::separator();
}

/// Print all four statistics blocks with their compute time.
pub fn print_report(report: &StatsReport, city: City) {
    print_section(
        "Calculating The Most Frequent Times of Travel...",
        &report.times,
        render_times,
    );
    print_section(
        "Calculating The Most Popular Stations and Trip...",
        &report.stations,
        render_stations,
    );
    print_section("Calculating Trip Duration...", &report.durations, render_durations);
    print_section("Calculating User Stats...", &report.users, |stats| {
        render_users(stats, city)
    });
}
