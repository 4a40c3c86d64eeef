//! Text sink that inserts into a file at a given line

use super::traits::TextSink;
use std::io;
use std::path::PathBuf;
use tracing::debug;

/// Inserts text at the start of a line of a file (1-based), appending when
/// no line is given or the line is past the end. Missing files are created.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
    line: Option<usize>,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>, line: Option<usize>) -> Self {
        Self {
            path: path.into(),
            line,
        }
    }
}

impl TextSink for FileSink {
    fn insert(&self, text: &str) -> io::Result<()> {
        let existing = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => String::new(),
            Err(e) => return Err(e),
        };

        let updated = insert_at_line(&existing, text, self.line);
        std::fs::write(&self.path, updated)?;

        debug!(
            "Inserted {} bytes into {} at line {:?}",
            text.len(),
            self.path.display(),
            self.line
        );
        Ok(())
    }
}

fn insert_at_line(existing: &str, text: &str, line: Option<usize>) -> String {
    let offset = line
        .and_then(|n| line_start(existing, n.max(1)))
        .unwrap_or(existing.len());

    let mut out = String::with_capacity(existing.len() + text.len() + 2);
    out.push_str(&existing[..offset]);
    if offset == existing.len() && !existing.is_empty() && !existing.ends_with('\n') {
        out.push('\n');
    }
    out.push_str(text);
    if !text.ends_with('\n') {
        out.push('\n');
    }
    out.push_str(&existing[offset..]);
    out
}

/// Byte offset where 1-based line `n` starts, if the file has that line
fn line_start(content: &str, n: usize) -> Option<usize> {
    if n == 1 {
        return (!content.is_empty()).then_some(0);
    }
    content
        .match_indices('\n')
        .nth(n - 2)
        .map(|(i, _)| i + 1)
        .filter(|&start| start < content.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_before_line() {
        let out = insert_at_line("one\ntwo\nthree\n", "NEW", Some(2));
        assert_eq!(out, "one\nNEW\ntwo\nthree\n");
    }

    #[test]
    fn test_insert_at_first_line() {
        assert_eq!(insert_at_line("a\nb\n", "X", Some(1)), "X\na\nb\n");
        assert_eq!(insert_at_line("a\n", "X", Some(0)), "X\na\n");
    }

    #[test]
    fn test_append_past_end_or_without_line() {
        assert_eq!(insert_at_line("a\nb\n", "X", Some(9)), "a\nb\nX\n");
        assert_eq!(insert_at_line("a\nb", "X", None), "a\nb\nX\n");
        assert_eq!(insert_at_line("", "X", Some(3)), "X\n");
    }
}
