//! Tests for the four statistics reporters and the timed report

mod common;

use chrono::Weekday;

use bikeshare::application::services::StatsReport;
use bikeshare::domain::{
    duration_stats, station_stats, time_stats, user_stats, City, ColumnStats, Filter,
    FilterSelection, Hms, TripTable,
};

use common::{demographic_row, washington_csv, CHICAGO_HEADER};

fn chicago_table(rows: &[String]) -> TripTable {
    let content = std::iter::once(CHICAGO_HEADER.to_string())
        .chain(rows.iter().cloned())
        .collect::<Vec<_>>()
        .join("\n");
    TripTable::parse(City::Chicago, &content).unwrap()
}

fn sample_rows() -> Vec<String> {
    vec![
        demographic_row(0, "2017-03-06 08:05:00", 600, "Canal St", "State St", "Subscriber", "Male", "1985.0"),
        demographic_row(1, "2017-03-06 08:45:00", 1200, "Canal St", "State St", "Subscriber", "Female", "1990.0"),
        demographic_row(2, "2017-03-07 17:10:00", 300, "Lake St", "Canal St", "Customer", "", ""),
        demographic_row(3, "2017-01-02 08:30:00", 1500, "State St", "Canal St", "Subscriber", "Male", "1990.0"),
    ]
}

#[test]
fn given_trips_when_computing_time_stats_then_reports_modes() {
    let table = chicago_table(&sample_rows());

    let stats = time_stats(&table).unwrap();

    assert_eq!(stats.month.value, 3);
    assert_eq!(stats.month.count, 3);
    assert_eq!(stats.weekday.value, Weekday::Mon);
    assert_eq!(stats.weekday.count, 3);
    assert_eq!(stats.hour.value, 8);
    assert_eq!(stats.hour.count, 3);
}

#[test]
fn given_trips_when_computing_station_stats_then_route_pairs_start_and_end() {
    let table = chicago_table(&sample_rows());

    let stats = station_stats(&table).unwrap();

    assert_eq!(stats.start_station.value, "Canal St");
    assert_eq!(stats.start_station.count, 2);
    // "Canal St" and "State St" both end two trips; the smaller name wins
    assert_eq!(stats.end_station.value, "Canal St");
    assert_eq!(stats.route.value, "Canal St to State St");
    assert_eq!(stats.route.count, 2);
}

#[test]
fn given_trips_when_computing_duration_stats_then_total_and_mean_decompose() {
    let table = chicago_table(&sample_rows());

    let stats = duration_stats(&table).unwrap();

    assert_eq!(stats.trips, 4);
    assert_eq!(stats.total.as_secs(), 3600);
    assert_eq!(
        stats.total,
        Hms {
            hours: 1,
            minutes: 0,
            seconds: 0
        }
    );
    assert_eq!(stats.mean.as_secs(), 900);
    assert_eq!(stats.mean.minutes, 15);
}

#[test]
fn given_fractional_durations_when_computing_then_truncates_to_whole_seconds() {
    let table = TripTable::parse(City::Washington, &washington_csv()).unwrap();

    let stats = duration_stats(&table).unwrap();

    // 489.066 + 402.549 + 1048.2 = 1939.815
    assert_eq!(stats.total.as_secs(), 1939);
    assert_eq!(stats.mean.as_secs(), 646);
}

#[test]
fn given_chicago_trips_when_computing_user_stats_then_counts_demographics() {
    let table = chicago_table(&sample_rows());

    let stats = user_stats(&table).unwrap();

    let types: Vec<(&str, usize)> = stats
        .user_types
        .iter()
        .map(|c| (c.value.as_str(), c.count))
        .collect();
    assert_eq!(types, vec![("Subscriber", 3), ("Customer", 1)]);

    match &stats.genders {
        ColumnStats::Available(counts) => {
            assert_eq!(counts[0].value, "Male");
            assert_eq!(counts[0].count, 2);
            assert_eq!(counts[1].value, "Female");
        }
        other => panic!("expected gender counts, got {other:?}"),
    }
    match &stats.birth_years {
        ColumnStats::Available(years) => {
            assert_eq!(years.earliest, 1985);
            assert_eq!(years.most_recent, 1990);
            assert_eq!(years.most_common.value, 1990);
            assert_eq!(years.most_common.count, 2);
        }
        other => panic!("expected birth years, got {other:?}"),
    }
}

#[test]
fn given_washington_when_computing_user_stats_then_demographics_unavailable() {
    let table = TripTable::parse(City::Washington, &washington_csv()).unwrap();

    let stats = user_stats(&table).unwrap();

    assert_eq!(stats.genders, ColumnStats::Unavailable);
    assert_eq!(stats.birth_years, ColumnStats::Unavailable);
    assert_eq!(stats.user_types[0].value, "Subscriber");
}

#[test]
fn given_only_blank_demographics_when_computing_user_stats_then_no_values() {
    let table = chicago_table(&[demographic_row(
        0,
        "2017-03-07 17:10:00",
        300,
        "Lake St",
        "Canal St",
        "Customer",
        "",
        "",
    )]);

    let stats = user_stats(&table).unwrap();

    assert_eq!(stats.genders, ColumnStats::NoValues);
    assert_eq!(stats.birth_years, ColumnStats::NoValues);
}

#[test]
fn given_empty_table_when_computing_every_reporter_then_reports_no_data() {
    let mut table = chicago_table(&sample_rows());
    table.apply_filters(&FilterSelection::new(
        City::Chicago,
        Filter::Only(chrono::Month::June),
        Filter::All,
    ));
    assert!(table.is_empty());

    assert!(time_stats(&table).is_none());
    assert!(station_stats(&table).is_none());
    assert!(duration_stats(&table).is_none());
    assert!(user_stats(&table).is_none());

    let report = StatsReport::compute(&table);
    assert_eq!(report.trips, 0);
    assert!(report.times.stats.is_none());
    assert!(report.stations.stats.is_none());
    assert!(report.durations.stats.is_none());
    assert!(report.users.stats.is_none());
}

#[test]
fn given_trips_when_computing_report_then_every_section_present() {
    let table = chicago_table(&sample_rows());

    let report = StatsReport::compute(&table);

    assert_eq!(report.trips, 4);
    assert!(report.times.stats.is_some());
    assert!(report.stations.stats.is_some());
    assert!(report.durations.stats.is_some());
    assert!(report.users.stats.is_some());
}
