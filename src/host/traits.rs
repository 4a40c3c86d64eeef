//! Collaborator traits for the host application

use std::io;

/// Destination for the formatted excerpt
pub trait TextSink: Send + Sync {
    /// Insert `text` at the caller's location
    fn insert(&self, text: &str) -> io::Result<()>;
}

/// Asks the user for a search term
pub trait PromptUser: Send + Sync {
    /// `None` means the user cancelled
    fn prompt(&self) -> Option<String>;
}

/// User-visible notices (not found, disambiguation, failures)
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}
