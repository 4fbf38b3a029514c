//! Domain model for notebook memos.
//!
//! # Responsibility
//! - Define the note record and its id sequence.
//!
//! # Invariants
//! - Every note is identified by a `NoteId` drawn from an `IdAllocator`.
//! - Notes are never deleted, so ids are never orphaned or reused.

pub mod ids;
pub mod note;
