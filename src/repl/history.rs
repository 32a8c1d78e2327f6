use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

/// `~/<filename>`, or `None` when there is no home directory.
pub fn home_file(filename: &str) -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(filename))
}

/// Command lines entered at the prompt, mirrored to an append-only file.
///
/// Without a file the history only lives as long as the shell.
#[derive(Debug, Default)]
pub struct History {
    path: Option<PathBuf>,
    entries: Vec<String>,
}

impl History {
    /// Loads the entries already saved at `path`. A missing or unreadable
    /// file starts an empty history that is created on the first push.
    pub fn open(path: Option<PathBuf>) -> Self {
        let entries = path.as_deref().map(read_entries).unwrap_or_default();
        Self { path, entries }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Records `line` unless it repeats the previous entry.
    ///
    /// # Errors
    /// Returns an `io::Error` if the history file cannot be written. The entry
    /// is kept in memory either way.
    pub fn push(&mut self, line: &str) -> io::Result<()> {
        let line = line.trim();
        if line.is_empty() || self.entries.last().is_some_and(|last| last == line) {
            return Ok(());
        }
        self.entries.push(line.to_string());
        match &self.path {
            Some(path) => {
                let mut file = OpenOptions::new().create(true).append(true).open(path)?;
                writeln!(file, "{}", line)
            }
            None => Ok(()),
        }
    }
}

fn read_entries(path: &Path) -> Vec<String> {
    let Ok(file) = File::open(path) else {
        return Vec::new();
    };
    BufReader::new(file)
        .lines()
        .map_while(Result::ok)
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}
