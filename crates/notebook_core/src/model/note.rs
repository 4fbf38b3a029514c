//! Note domain model.
//!
//! # Responsibility
//! - Define the memo record stored by a notebook.
//! - Provide the substring predicate used by notebook search.
//!
//! # Invariants
//! - `id` and `creation_date` are fixed at construction.
//! - Only `memo` and `tags` change after construction, and only through
//!   the owning notebook.

use crate::model::ids::{IdAllocator, NoteId};
use chrono::{Local, NaiveDate};
use serde::Serialize;

/// One memo entry with free-text tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    id: NoteId,
    memo: String,
    /// Space-separated by convention, stored verbatim.
    tags: String,
    /// Serialized as `YYYY-MM-DD`.
    creation_date: NaiveDate,
}

impl Note {
    /// Creates a note dated today (local time), drawing its id from `ids`.
    pub fn new(ids: &IdAllocator, memo: impl Into<String>, tags: impl Into<String>) -> Self {
        Self::with_date(ids, memo, tags, Local::now().date_naive())
    }

    /// Creates a note with a caller-provided creation date.
    pub fn with_date(
        ids: &IdAllocator,
        memo: impl Into<String>,
        tags: impl Into<String>,
        creation_date: NaiveDate,
    ) -> Self {
        Self {
            id: ids.next_id(),
            memo: memo.into(),
            tags: tags.into(),
            creation_date,
        }
    }

    pub fn id(&self) -> NoteId {
        self.id
    }

    pub fn memo(&self) -> &str {
        &self.memo
    }

    pub fn tags(&self) -> &str {
        &self.tags
    }

    pub fn creation_date(&self) -> NaiveDate {
        self.creation_date
    }

    /// Returns whether `filter` occurs in the memo or in the tags.
    ///
    /// Matching is case-sensitive and exact; an empty filter matches every
    /// note.
    pub fn match_filter(&self, filter: &str) -> bool {
        self.memo.contains(filter) || self.tags.contains(filter)
    }

    pub(crate) fn set_memo(&mut self, memo: String) {
        self.memo = memo;
    }

    pub(crate) fn set_tags(&mut self, tags: String) {
        self.tags = tags;
    }
}
