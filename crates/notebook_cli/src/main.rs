//! Console entry point for the notebook.
//!
//! # Responsibility
//! - Parse flags and environment, start logging when configured.
//! - Run the interactive menu over stdin/stdout.

mod menu;

use clap::Parser;
use log::{error, info};
use menu::{Menu, OutputFormat};
use notebook_core::{default_log_level, init_logging, LogConfig, Notebook};
use std::io;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "notebook")]
#[command(about = "Store, modify and search short memos", version)]
struct Cli {
    /// Print notes as JSON lines instead of text
    #[arg(long)]
    json: bool,

    /// Log level (trace|debug|info|warn|error)
    #[arg(long, env = "NOTEBOOK_LOG_LEVEL")]
    log_level: Option<String>,

    /// Absolute directory for rolling log files; logging is off when unset
    #[arg(long, env = "NOTEBOOK_LOG_DIR")]
    log_dir: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        if let Err(err) = LogConfig::new(level, log_dir).and_then(|config| init_logging(&config)) {
            eprintln!("logging disabled: {err}");
        }
    }

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut menu = Menu::new(Notebook::new(), stdin.lock(), stdout.lock(), format);

    info!("event=menu_start module=cli status=ok json={}", cli.json);
    match menu.run() {
        Ok(()) => {
            info!("event=menu_exit module=cli status=ok");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("event=menu_exit module=cli status=error error={err}");
            eprintln!("notebook: {err}");
            ExitCode::FAILURE
        }
    }
}
