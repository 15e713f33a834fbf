//! Filter selection: city, month and day choices with their closed vocabularies.

use std::fmt;

use chrono::{Month, Weekday};

/// Wildcard answer meaning "no restriction" for month or day.
pub const WILDCARD: &str = "all";

/// Months covered by the datasets, in calendar order.
pub const SUPPORTED_MONTHS: [Month; 6] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
];

/// Weekdays in display order, Monday first.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// A city with a bike-share dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// Lowercase name as typed by the user.
    pub fn name(self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }

    /// Name for display, e.g. "New York City".
    pub fn title(self) -> &'static str {
        match self {
            City::Chicago => "Chicago",
            City::NewYorkCity => "New York City",
            City::Washington => "Washington",
        }
    }

    /// Parse a user answer, ignoring case and surrounding whitespace.
    pub fn parse(input: &str) -> Option<Self> {
        let normalized = normalize(input);
        Self::ALL.into_iter().find(|c| c.name() == normalized)
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Either a concrete value or the "all" wildcard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter<T> {
    All,
    Only(T),
}

impl<T: PartialEq> Filter<T> {
    /// True if `value` passes this filter.
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(wanted) => wanted == value,
        }
    }
}

pub type MonthFilter = Filter<Month>;
pub type DayFilter = Filter<Weekday>;

impl MonthFilter {
    pub fn parse(input: &str) -> Option<Self> {
        let normalized = normalize(input);
        if normalized == WILDCARD {
            return Some(Filter::All);
        }
        SUPPORTED_MONTHS
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(&normalized))
            .map(Filter::Only)
    }
}

impl DayFilter {
    pub fn parse(input: &str) -> Option<Self> {
        let normalized = normalize(input);
        if normalized == WILDCARD {
            return Some(Filter::All);
        }
        WEEKDAYS
            .into_iter()
            .find(|d| weekday_name(*d).eq_ignore_ascii_case(&normalized))
            .map(Filter::Only)
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::All => f.write_str("All"),
            Filter::Only(m) => f.write_str(m.name()),
        }
    }
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::All => f.write_str("All"),
            Filter::Only(d) => f.write_str(weekday_name(*d)),
        }
    }
}

/// The user's choice of dataset and filters for one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSelection {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl FilterSelection {
    pub fn new(city: City, month: MonthFilter, day: DayFilter) -> Self {
        Self { city, month, day }
    }

    /// Selection without month or day restriction.
    pub fn unfiltered(city: City) -> Self {
        Self::new(city, Filter::All, Filter::All)
    }
}

/// 1-based month number of a supported month name.
///
/// Only January through June are recognized; the datasets cover the
/// first half of the year.
pub fn month_number(name: &str) -> Option<u32> {
    SUPPORTED_MONTHS
        .iter()
        .position(|m| m.name().eq_ignore_ascii_case(name.trim()))
        .map(|idx| idx as u32 + 1)
}

/// Full English weekday name in title case.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Full English month name for a 1-based month number.
pub fn month_name(number: u32) -> Option<&'static str> {
    u8::try_from(number)
        .ok()
        .and_then(|n| Month::try_from(n).ok())
        .map(|m| m.name())
}

fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("chicago", City::Chicago)]
    #[case("  Chicago ", City::Chicago)]
    #[case("NEW YORK CITY", City::NewYorkCity)]
    #[case("washington", City::Washington)]
    fn given_city_answer_when_parsing_then_matches_case_insensitively(
        #[case] input: &str,
        #[case] expected: City,
    ) {
        assert_eq!(City::parse(input), Some(expected));
    }

    #[rstest]
    #[case("")]
    #[case("boston")]
    #[case("new york")]
    #[case("chicago!")]
    fn given_unknown_city_when_parsing_then_rejects(#[case] input: &str) {
        assert_eq!(City::parse(input), None);
    }

    #[test]
    fn given_six_month_names_when_mapping_then_numbers_are_one_through_six() {
        let numbers: Vec<u32> = SUPPORTED_MONTHS
            .iter()
            .filter_map(|m| month_number(m.name()))
            .collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn given_second_half_month_when_mapping_then_unsupported() {
        assert_eq!(month_number("July"), None);
        assert_eq!(MonthFilter::parse("december"), None);
    }

    #[rstest]
    #[case("all", Filter::All)]
    #[case("ALL", Filter::All)]
    #[case("march", Filter::Only(Month::March))]
    #[case("June", Filter::Only(Month::June))]
    fn given_month_answer_when_parsing_then_returns_filter(
        #[case] input: &str,
        #[case] expected: MonthFilter,
    ) {
        assert_eq!(MonthFilter::parse(input), Some(expected));
    }

    #[rstest]
    #[case("all", Filter::All)]
    #[case("monday", Filter::Only(Weekday::Mon))]
    #[case("SUNDAY", Filter::Only(Weekday::Sun))]
    fn given_day_answer_when_parsing_then_returns_filter(
        #[case] input: &str,
        #[case] expected: DayFilter,
    ) {
        assert_eq!(DayFilter::parse(input), Some(expected));
    }

    #[test]
    fn given_abbreviated_day_when_parsing_then_rejects() {
        assert_eq!(DayFilter::parse("mon"), None);
        assert_eq!(DayFilter::parse(""), None);
    }

    #[test]
    fn given_filter_when_checking_admits_then_wildcard_admits_everything() {
        assert!(MonthFilter::All.admits(&Month::May));
        assert!(MonthFilter::Only(Month::May).admits(&Month::May));
        assert!(!MonthFilter::Only(Month::May).admits(&Month::April));
    }

    #[test]
    fn given_month_number_when_naming_then_returns_full_name() {
        assert_eq!(month_name(3), Some("March"));
        assert_eq!(month_name(0), None);
        assert_eq!(month_name(13), None);
    }
}
