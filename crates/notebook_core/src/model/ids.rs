//! Note id allocation.
//!
//! # Responsibility
//! - Hand out note ids from one monotonically increasing sequence.
//! - Provide the process-wide sequence shared by default notebooks.
//!
//! # Invariants
//! - Ids are never reused; every `next_id` call returns a larger value.
//! - `0` is never handed out; it means "nothing allocated yet".

use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Identifier assigned to a note at construction.
pub type NoteId = u64;

static GLOBAL_ALLOCATOR: Lazy<Arc<IdAllocator>> = Lazy::new(|| Arc::new(IdAllocator::new()));

/// Atomic id sequence shared by every notebook that holds it.
#[derive(Debug, Default)]
pub struct IdAllocator {
    last: AtomicU64,
}

impl IdAllocator {
    /// Creates a fresh sequence whose first id is `1`.
    pub fn new() -> Self {
        Self::starting_after(0)
    }

    /// Creates a sequence whose first id is `last + 1`.
    pub fn starting_after(last: NoteId) -> Self {
        Self {
            last: AtomicU64::new(last),
        }
    }

    /// Returns the process-wide sequence.
    ///
    /// Notebooks built with `Notebook::new()` all draw from this one, so ids
    /// stay unique across independent notebook instances in one process.
    pub fn global() -> Arc<IdAllocator> {
        Arc::clone(&GLOBAL_ALLOCATOR)
    }

    /// Allocates the next id.
    pub fn next_id(&self) -> NoteId {
        self.last.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Returns the most recently allocated id, or `0` when none was.
    pub fn last_id(&self) -> NoteId {
        self.last.load(Ordering::Relaxed)
    }
}
