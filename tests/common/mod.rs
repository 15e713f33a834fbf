//! Shared fixtures for integration tests: scripted prompt and trip CSV builders.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use chrono::{Duration, NaiveDate};
use tempfile::TempDir;

use bikeshare::infrastructure::traits::Prompt;

pub const CHICAGO_HEADER: &str =
    ",Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year";
pub const WASHINGTON_HEADER: &str =
    ",Start Time,End Time,Trip Duration,Start Station,End Station,User Type";

/// Prompt answering from a script; returns EOF once the script runs out.
#[derive(Default)]
pub struct MockPrompt {
    answers: Mutex<VecDeque<String>>,
    asked: Mutex<Vec<String>>,
    rejections: Mutex<Vec<String>>,
    said: Mutex<Vec<String>>,
}

impl MockPrompt {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: Mutex::new(answers.iter().map(|a| a.to_string()).collect()),
            ..Self::default()
        }
    }

    pub fn asked(&self) -> Vec<String> {
        self.asked.lock().unwrap().clone()
    }

    pub fn rejections(&self) -> Vec<String> {
        self.rejections.lock().unwrap().clone()
    }

    pub fn said(&self) -> Vec<String> {
        self.said.lock().unwrap().clone()
    }

    pub fn remaining(&self) -> usize {
        self.answers.lock().unwrap().len()
    }
}

impl Prompt for MockPrompt {
    fn ask(&self, question: &str) -> io::Result<Option<String>> {
        self.asked.lock().unwrap().push(question.to_string());
        Ok(self.answers.lock().unwrap().pop_front())
    }

    fn reject(&self, message: &str) {
        self.rejections.lock().unwrap().push(message.to_string());
    }

    fn say(&self, message: &str) {
        self.said.lock().unwrap().push(message.to_string());
    }
}

/// One row of a Chicago/New York style file (with demographics).
pub fn demographic_row(
    idx: usize,
    start: &str,
    duration: u32,
    from: &str,
    to: &str,
    user_type: &str,
    gender: &str,
    birth_year: &str,
) -> String {
    format!("{idx},{start},{start},{duration},{from},{to},{user_type},{gender},{birth_year}")
}

/// One row of a Washington style file (no demographics).
pub fn plain_row(idx: usize, start: &str, duration: f64, from: &str, to: &str, user_type: &str) -> String {
    format!("{idx},{start},{start},{duration},{from},{to},{user_type}")
}

/// 60 Chicago trips, one every third day from 2017-01-01, hours cycling 6..=21.
pub fn half_year_chicago_csv() -> String {
    let stations = ["Canal St", "State St", "Lake St", "Clark St"];
    let first = NaiveDate::from_ymd_opt(2017, 1, 1).unwrap();
    let mut lines = vec![CHICAGO_HEADER.to_string()];
    for i in 0..60 {
        let day = first + Duration::days(i as i64 * 3);
        let start = day.and_hms_opt(6 + (i % 16) as u32, 15, 0).unwrap();
        lines.push(demographic_row(
            i,
            &start.format("%Y-%m-%d %H:%M:%S").to_string(),
            300 + i as u32 * 10,
            stations[i % 4],
            stations[(i + 1) % 4],
            if i % 3 == 0 { "Customer" } else { "Subscriber" },
            if i % 2 == 0 { "Male" } else { "Female" },
            &format!("{}.0", 1970 + i % 5),
        ));
    }
    lines.join("\n") + "\n"
}

/// Small Washington dataset without gender or birth year.
pub fn washington_csv() -> String {
    [
        WASHINGTON_HEADER.to_string(),
        plain_row(0, "2017-06-21 08:36:34", 489.066, "14th & Belmont St NW", "15th & K St NW", "Subscriber"),
        plain_row(1, "2017-03-11 10:14:02", 402.549, "Adams Mill & Columbia Rd NW", "Lincoln Memorial", "Customer"),
        plain_row(2, "2017-03-13 17:36:32", 1048.2, "14th & Belmont St NW", "15th & K St NW", "Subscriber"),
    ]
    .join("\n")
        + "\n"
}

/// Write `content` as `name` into the temp dir.
pub fn write_csv(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("write csv");
    path
}
