//! Trip records and the in-memory trip table.

use std::fmt;
use std::io::Read;

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use serde::Deserialize;

use crate::domain::error::DomainError;
use crate::domain::filter::{month_number, City, Filter, FilterSelection};

pub const COL_START_TIME: &str = "Start Time";
pub const COL_END_TIME: &str = "End Time";
pub const COL_TRIP_DURATION: &str = "Trip Duration";
pub const COL_START_STATION: &str = "Start Station";
pub const COL_END_STATION: &str = "End Station";
pub const COL_USER_TYPE: &str = "User Type";
pub const COL_GENDER: &str = "Gender";
pub const COL_BIRTH_YEAR: &str = "Birth Year";

const REQUIRED_COLUMNS: [&str; 5] = [
    COL_START_TIME,
    COL_TRIP_DURATION,
    COL_START_STATION,
    COL_END_STATION,
    COL_USER_TYPE,
];

const TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// One CSV row as stored on disk.
#[derive(Debug, Deserialize)]
struct TripRecord {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "End Time", default)]
    end_time: String,
    #[serde(rename = "Trip Duration")]
    trip_duration: f64,
    #[serde(rename = "Start Station")]
    start_station: String,
    #[serde(rename = "End Station")]
    end_station: String,
    #[serde(rename = "User Type", default)]
    user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    birth_year: Option<f64>,
}

/// A parsed trip with fields derived from its start time.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    /// Zero-based position in the source file
    pub row: usize,
    pub start_time: NaiveDateTime,
    /// Kept verbatim; only shown when paging raw rows
    pub end_time: String,
    pub duration_secs: f64,
    pub start_station: String,
    pub end_station: String,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,
    /// Calendar month, 1-12
    pub month: u32,
    pub weekday: Weekday,
    /// Hour of day, 0-23
    pub hour: u32,
}

impl Trip {
    fn from_record(row: usize, record: TripRecord) -> Result<Self, DomainError> {
        let start_time = parse_timestamp(&record.start_time).ok_or_else(|| {
            DomainError::InvalidTimestamp {
                row,
                value: record.start_time.clone(),
            }
        })?;
        if !record.trip_duration.is_finite() || record.trip_duration < 0.0 {
            return Err(DomainError::InvalidDuration {
                row,
                value: record.trip_duration,
            });
        }

        Ok(Self {
            row,
            month: start_time.month(),
            weekday: start_time.weekday(),
            hour: start_time.hour(),
            start_time,
            end_time: record.end_time,
            duration_secs: record.trip_duration,
            start_station: record.start_station,
            end_station: record.end_station,
            user_type: non_blank(record.user_type),
            gender: non_blank(record.gender),
            birth_year: record.birth_year.map(|y| y.trunc() as i32),
        })
    }

    /// Route key pairing start and end station.
    pub fn route(&self) -> String {
        format!("{} to {}", self.start_station, self.end_station)
    }
}

impl fmt::Display for Trip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} -> {} | {}s | {} -> {} | {}",
            self.row,
            self.start_time,
            self.end_time,
            self.duration_secs,
            self.start_station,
            self.end_station,
            self.user_type.as_deref().unwrap_or("-"),
        )?;
        if let Some(gender) = &self.gender {
            write!(f, " | {gender}")?;
        }
        if let Some(year) = self.birth_year {
            write!(f, " | {year}")?;
        }
        Ok(())
    }
}

/// Which optional columns the source file carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Schema {
    pub gender: bool,
    pub birth_year: bool,
}

impl Schema {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self, DomainError> {
        let has = |name: &str| headers.iter().any(|h| h == name);
        if let Some(missing) = REQUIRED_COLUMNS.into_iter().find(|c| !has(*c)) {
            return Err(DomainError::MissingColumn(missing));
        }
        Ok(Self {
            gender: has(COL_GENDER),
            birth_year: has(COL_BIRTH_YEAR),
        })
    }

    pub fn has_gender(&self) -> bool {
        self.gender
    }

    pub fn has_birth_year(&self) -> bool {
        self.birth_year
    }
}

/// Trips of one city, in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct TripTable {
    city: City,
    schema: Schema,
    trips: Vec<Trip>,
}

impl TripTable {
    pub fn new(city: City, schema: Schema, trips: Vec<Trip>) -> Self {
        Self {
            city,
            schema,
            trips,
        }
    }

    /// Parse CSV content into a table. Fails on the first malformed row.
    pub fn parse(city: City, content: &str) -> Result<Self, DomainError> {
        Self::from_reader(city, content.as_bytes())
    }

    pub fn from_reader<R: Read>(city: City, reader: R) -> Result<Self, DomainError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = reader
            .headers()
            .map_err(|e| DomainError::InvalidHeader(e.to_string()))?
            .clone();
        let schema = Schema::from_headers(&headers)?;

        let mut trips = Vec::new();
        for (row, result) in reader.deserialize::<TripRecord>().enumerate() {
            let record = result.map_err(|e| DomainError::InvalidRecord {
                row,
                message: e.to_string(),
            })?;
            trips.push(Trip::from_record(row, record)?);
        }

        Ok(Self::new(city, schema, trips))
    }

    /// Keep only trips matching the month and day filters.
    pub fn apply_filters(&mut self, selection: &FilterSelection) {
        let month = match selection.month {
            Filter::All => None,
            Filter::Only(m) => Some(month_number(m.name())),
        };
        // An unsupported month matches nothing.
        self.trips.retain(|t| {
            month.map_or(true, |m| m == Some(t.month)) && selection.day.admits(&t.weekday)
        });
    }

    pub fn city(&self) -> City {
        self.city
    }

    pub fn schema(&self) -> Schema {
        self.schema
    }

    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// Up to `size` trips starting at `offset`; empty once past the end.
    pub fn page(&self, offset: usize, size: usize) -> &[Trip] {
        let start = offset.min(self.trips.len());
        let end = offset.saturating_add(size).min(self.trips.len());
        &self.trips[start..end]
    }
}

fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
