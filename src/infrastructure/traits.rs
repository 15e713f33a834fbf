//! I/O boundary traits for testability
//!
//! These traits abstract file access and console interaction, allowing
//! services to be tested with mock implementations.

use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

/// Filesystem abstraction for testability.
pub trait FileSystem: Send + Sync {
    /// Read file contents to string.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Check if path is a file.
    fn is_file(&self, path: &Path) -> bool;
}

/// Line-based interactive console abstraction.
pub trait Prompt: Send + Sync {
    /// Show `question` and read one answer line.
    /// Returns None once the input is exhausted (EOF).
    fn ask(&self, question: &str) -> io::Result<Option<String>>;

    /// Tell the user an answer was not accepted.
    fn reject(&self, message: &str);

    /// Show an informational line.
    fn say(&self, message: &str);
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Real filesystem implementation.
#[derive(Debug, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }
}

/// Real prompt reading answers from stdin.
///
/// Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.
#[derive(Debug, Default)]
pub struct ConsolePrompt;

impl Prompt for ConsolePrompt {
    fn ask(&self, question: &str) -> io::Result<Option<String>> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", question.cyan())?;
        stdout.flush()?;

        read_answer(&mut io::stdin().lock())
    }

    fn reject(&self, message: &str) {
        println!("{}", message.yellow());
    }

    fn say(&self, message: &str) {
        println!("{}", message);
    }
}

/// Read one answer line; None at EOF.
///
/// Bytes that are not UTF-8 are replaced rather than rejected, so a garbled
/// line reaches validation as an ordinary wrong answer.
pub fn read_answer<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    if reader.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    let line = String::from_utf8_lossy(&buf);
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
