//! Host application collaborators
//!
//! The core only talks to the outside world through these traits:
//! - [`TextSink`]: receives the formatted excerpt
//! - [`PromptUser`]: supplies a search term, or nothing to cancel
//! - [`Notifier`]: shows notices to the user

mod console;
mod file_sink;
mod traits;

pub use console::{title_from_path, ConsoleNotifier, StdinPrompt, StdoutSink};
pub use file_sink::FileSink;
pub use traits::*;
