//! Terminal implementations of the host collaborators

use super::traits::{Notifier, PromptUser, TextSink};
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing::debug;

/// Writes the excerpt to standard output
#[derive(Debug, Default)]
pub struct StdoutSink;

impl TextSink for StdoutSink {
    fn insert(&self, text: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", text)?;
        stdout.flush()
    }
}

/// Reads a search term from standard input
#[derive(Debug)]
pub struct StdinPrompt {
    message: String,
}

impl StdinPrompt {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for StdinPrompt {
    fn default() -> Self {
        Self::new("Search Wikipedia for: ")
    }
}

impl PromptUser for StdinPrompt {
    fn prompt(&self) -> Option<String> {
        eprint!("{}", self.message);
        let _ = io::stderr().flush();

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => non_blank(&line),
        }
    }
}

/// Prints notices to standard error
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str) {
        debug!(notice = message, "user notice");
        eprintln!("{}", message);
    }
}

/// Search term for the "active file title" entry point: the file stem
pub fn title_from_path(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .and_then(non_blank)
}

fn non_blank(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
