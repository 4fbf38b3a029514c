//! Core domain logic for the console notebook.
//! Notes, id allocation, search and logging live here; the menu binary only
//! wires input and output to these APIs.

pub mod logging;
pub mod model;
pub mod notebook;

pub use logging::{default_log_level, init_logging, logging_status, LogConfig};
pub use model::ids::{IdAllocator, NoteId};
pub use model::note::Note;
pub use notebook::Notebook;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
