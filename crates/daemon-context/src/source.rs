//! Line sources scanned for a context line.

use std::fs::File;
use std::io::{self, BufRead, BufReader};

use camino::{Utf8Path, Utf8PathBuf};

/// A finite sequence of lines; dropping it releases the underlying stream.
pub type Lines<'a> = Box<dyn Iterator<Item = io::Result<String>> + 'a>;

/// Produces the lines of some log text.
///
/// Each call to [`lines`](Self::lines) starts a fresh pass over the source.
/// The returned iterator owns whatever stream it reads from, so the stream is
/// closed when the iterator is dropped.
pub trait LineSource {
    /// Opens a new pass over the source.
    ///
    /// # Errors
    ///
    /// Returns an IO error if the source cannot be opened.  Read failures
    /// after opening surface as `Err` items.
    fn lines(&self) -> io::Result<Lines<'_>>;

    /// Names the source in diagnostics, typically by path.
    fn describe(&self) -> String;
}

/// A daemon log file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaemonLogFile {
    path: Utf8PathBuf,
}

impl DaemonLogFile {
    /// Wraps the log file at `path`.  The file is opened lazily.
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the log file.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }
}

impl LineSource for DaemonLogFile {
    fn lines(&self) -> io::Result<Lines<'_>> {
        let file = File::open(&self.path)?;
        Ok(Box::new(BufReader::new(file).lines()))
    }

    fn describe(&self) -> String {
        self.path.to_string()
    }
}

/// Lines already held in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryLines {
    name: String,
    lines: Vec<String>,
}

impl InMemoryLines {
    /// Creates a source named `name` serving `lines` in order.
    pub fn new<I, S>(name: impl Into<String>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Splits `text` on line breaks into a source named `name`.
    pub fn from_text(name: impl Into<String>, text: &str) -> Self {
        Self::new(name, text.lines())
    }
}

impl LineSource for InMemoryLines {
    fn lines(&self) -> io::Result<Lines<'_>> {
        Ok(Box::new(self.lines.iter().cloned().map(Ok)))
    }

    fn describe(&self) -> String {
        self.name.clone()
    }
}
