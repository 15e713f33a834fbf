//! Paging through raw trip rows

use std::sync::Arc;

use tracing::debug;

use crate::application::services::selector::confirm;
use crate::application::ApplicationResult;
use crate::domain::{Trip, TripTable};
use crate::infrastructure::traits::Prompt;

/// Rows shown per batch.
pub const PAGE_SIZE: usize = 5;

pub const VIEW_QUESTION: &str = "Would you like to view 5 rows of individual trip data? Enter yes or no";
pub const CONTINUE_QUESTION: &str = "Do you wish to see 5 more rows? Enter yes or no";

/// What the viewer showed during one session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewSummary {
    /// Offset of every batch shown, in order
    pub offsets: Vec<usize>,
    /// Total rows shown
    pub rows_shown: usize,
    /// True if the viewer stopped because the table ran out
    pub exhausted: bool,
}

/// Shows filtered trips [`PAGE_SIZE`] at a time while the user keeps confirming.
pub struct RowViewer {
    prompt: Arc<dyn Prompt>,
}

impl RowViewer {
    pub fn new(prompt: Arc<dyn Prompt>) -> Self {
        Self { prompt }
    }

    /// Page through `table`, handing each batch and its offset to `show`.
    ///
    /// The offset starts at zero and advances by [`PAGE_SIZE`] after every batch.
    pub fn view(
        &self,
        table: &TripTable,
        mut show: impl FnMut(usize, &[Trip]),
    ) -> ApplicationResult<ViewSummary> {
        let mut summary = ViewSummary::default();
        let mut offset = 0;
        let mut question = VIEW_QUESTION;

        while confirm(self.prompt.as_ref(), question)? {
            let batch = table.page(offset, PAGE_SIZE);
            if batch.is_empty() {
                self.prompt.say("No more trips to show.");
                summary.exhausted = true;
                break;
            }
            show(offset, batch);
            summary.offsets.push(offset);
            summary.rows_shown += batch.len();
            offset += PAGE_SIZE;
            question = CONTINUE_QUESTION;
        }

        debug!(
            "view: {} batches, {} rows",
            summary.offsets.len(),
            summary.rows_shown
        );
        Ok(summary)
    }
}
