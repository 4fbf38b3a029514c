//! Line-oriented menu over a notebook.
//!
//! # Responsibility
//! - Map menu keys to notebook operations.
//! - Own all prompting and printing; the core never touches I/O.
//!
//! # Invariants
//! - End of input behaves like choosing Quit.
//! - Unknown note ids are ignored without output, matching the core contract.

use notebook_core::{Note, NoteId, Notebook};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{self, BufRead, Write};

const MENU_TEXT: &str = "
Notebook Menu
1. Show all Notes
2. Search Notes
3. Add Note
4. Modify Note
5. Quit";

/// Error raised by the menu loop.
#[derive(Debug)]
pub enum MenuError {
    Io(io::Error),
    Json(serde_json::Error),
}

impl Display for MenuError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "console i/o failed: {err}"),
            Self::Json(err) => write!(f, "failed to encode note: {err}"),
        }
    }
}

impl Error for MenuError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
        }
    }
}

impl From<io::Error> for MenuError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for MenuError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

pub type MenuResult<T> = Result<T, MenuError>;

/// One entry of the menu, keyed by the digit the user types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ShowAll,
    Search,
    Add,
    Modify,
    Quit,
}

impl MenuChoice {
    /// Parses a menu key; surrounding whitespace is ignored.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::ShowAll),
            "2" => Some(Self::Search),
            "3" => Some(Self::Add),
            "4" => Some(Self::Modify),
            "5" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// How note listings are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// `<id>: <tags>` followed by the memo on its own line.
    Text,
    /// One JSON object per note per line.
    Json,
}

enum Flow {
    Continue,
    Quit,
}

/// Interactive menu bound to one notebook and a pair of streams.
pub struct Menu<R: BufRead, W: Write> {
    notebook: Notebook,
    input: R,
    output: W,
    format: OutputFormat,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(notebook: Notebook, input: R, output: W, format: OutputFormat) -> Self {
        Self {
            notebook,
            input,
            output,
            format,
        }
    }

    /// Shows the menu and handles choices until Quit or end of input.
    pub fn run(&mut self) -> MenuResult<()> {
        loop {
            writeln!(self.output, "{MENU_TEXT}")?;
            let Some(line) = self.prompt("Enter an option: ")? else {
                return self.quit();
            };

            let flow = match MenuChoice::parse(&line) {
                Some(choice) => self.dispatch(choice)?,
                None => {
                    writeln!(self.output, "{line} is not a valid choice")?;
                    Flow::Continue
                }
            };
            if let Flow::Quit = flow {
                return Ok(());
            }
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> MenuResult<Flow> {
        match choice {
            MenuChoice::ShowAll => {
                let notes = self.notebook.notes().iter().collect::<Vec<_>>();
                write_notes(&mut self.output, &notes, self.format)?;
                Ok(Flow::Continue)
            }
            MenuChoice::Search => self.search_notes(),
            MenuChoice::Add => self.add_note(),
            MenuChoice::Modify => self.modify_note(),
            MenuChoice::Quit => {
                self.quit()?;
                Ok(Flow::Quit)
            }
        }
    }

    fn search_notes(&mut self) -> MenuResult<Flow> {
        let Some(filter) = self.prompt("Search for: ")? else {
            return self.quit_flow();
        };
        let hits = self.notebook.search(&filter);
        write_notes(&mut self.output, &hits, self.format)?;
        Ok(Flow::Continue)
    }

    fn add_note(&mut self) -> MenuResult<Flow> {
        let Some(memo) = self.prompt("Enter a memo: ")? else {
            return self.quit_flow();
        };
        self.notebook.new_note(memo, "");
        writeln!(self.output, "Your note has been added.")?;
        Ok(Flow::Continue)
    }

    fn modify_note(&mut self) -> MenuResult<Flow> {
        let Some(raw_id) = self.prompt("Enter a note id: ")? else {
            return self.quit_flow();
        };
        let Some(memo) = self.prompt("Enter a memo: ")? else {
            return self.quit_flow();
        };
        let Some(tags) = self.prompt("Enter tags: ")? else {
            return self.quit_flow();
        };

        // A non-numeric id cannot name a note; treat it like an unknown one.
        let Some(note_id) = parse_note_id(&raw_id) else {
            return Ok(Flow::Continue);
        };
        if !memo.is_empty() {
            self.notebook.modify_memo(note_id, memo);
        }
        if !tags.is_empty() {
            self.notebook.modify_tags(note_id, tags);
        }
        Ok(Flow::Continue)
    }

    fn quit(&mut self) -> MenuResult<()> {
        writeln!(self.output, "Thank you for using your notebook today.")?;
        self.output.flush()?;
        Ok(())
    }

    fn quit_flow(&mut self) -> MenuResult<Flow> {
        self.quit()?;
        Ok(Flow::Quit)
    }

    /// Prints `label` and reads one line without its line ending.
    ///
    /// Returns `None` at end of input.
    fn prompt(&mut self, label: &str) -> MenuResult<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    #[cfg(test)]
    fn into_notebook(self) -> Notebook {
        self.notebook
    }
}

fn parse_note_id(raw: &str) -> Option<NoteId> {
    raw.trim().parse().ok()
}

fn write_notes<W: Write>(out: &mut W, notes: &[&Note], format: OutputFormat) -> MenuResult<()> {
    for note in notes {
        match format {
            OutputFormat::Text => writeln!(out, "{}: {}\n{}", note.id(), note.tags(), note.memo())?,
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(note)?)?,
        }
    }
    Ok(())
}
