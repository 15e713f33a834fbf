//! Interactive filter selection
//!
//! Asks for city, month and day until each answer is valid.

use std::sync::Arc;

use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::{City, Confirmation, DayFilter, FilterSelection, MonthFilter};
use crate::infrastructure::traits::Prompt;

pub const CITY_QUESTION: &str = "Would you like to see data for Chicago, New York City or Washington?";
pub const MONTH_QUESTION: &str =
    "Which month would you like to see data for? (January to June, or all)";
pub const DAY_QUESTION: &str = "Which day would you like to see data for? (Monday to Sunday, or all)";

/// Service collecting a validated [`FilterSelection`] from the user.
pub struct FilterSelector {
    prompt: Arc<dyn Prompt>,
}

impl FilterSelector {
    pub fn new(prompt: Arc<dyn Prompt>) -> Self {
        Self { prompt }
    }

    /// Ask for city, month and day. Invalid answers are re-asked without limit.
    pub fn select(&self) -> ApplicationResult<FilterSelection> {
        let city = ask_until_valid(
            self.prompt.as_ref(),
            CITY_QUESTION,
            "Please enter a valid city: Chicago, New York City or Washington",
            City::parse,
        )?;
        self.prompt
            .say(&format!("Great choice! You will be shown data from {city}"));

        let month = ask_until_valid(
            self.prompt.as_ref(),
            MONTH_QUESTION,
            "Please enter a valid month: January, February, March, April, May, June or all",
            MonthFilter::parse,
        )?;

        let day = ask_until_valid(
            self.prompt.as_ref(),
            DAY_QUESTION,
            "Please enter a valid day: Monday to Sunday or all",
            DayFilter::parse,
        )?;

        let selection = FilterSelection::new(city, month, day);
        debug!("select: {:?}", selection);
        Ok(selection)
    }
}

/// Ask `question` until `parse` accepts the answer.
///
/// Each rejected answer produces `invalid_message`. Fails only when the
/// input is closed.
pub fn ask_until_valid<T>(
    prompt: &dyn Prompt,
    question: &str,
    invalid_message: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> ApplicationResult<T> {
    loop {
        let answer = prompt
            .ask(question)
            .with_context("read answer")?
            .ok_or(ApplicationError::InputClosed)?;
        match parse(&answer) {
            Some(value) => return Ok(value),
            None => {
                debug!("ask_until_valid: rejected {:?}", answer);
                prompt.reject(invalid_message);
            }
        }
    }
}

/// Ask a yes/no question until the answer is `yes` or `no`.
pub fn confirm(prompt: &dyn Prompt, question: &str) -> ApplicationResult<bool> {
    ask_until_valid(prompt, question, "Please answer yes or no", |answer| {
        match Confirmation::parse(answer) {
            Confirmation::Yes => Some(true),
            Confirmation::No => Some(false),
            Confirmation::Unrecognized => None,
        }
    })
}
