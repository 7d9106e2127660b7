//! Command history, kept in memory and mirrored to a plain-text file.
//!
//! Memory and disk are reconciled only on [`History::load`] and
//! [`History::save`]; [`History::clear`] is the one operation that writes
//! through immediately.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::errors::HistoryError;

const HISTORY_FILE_MODE: u32 = 0o600;

#[derive(Debug, Default)]
pub struct History {
    path: Option<PathBuf>,
    entries: Vec<String>,
}

impl History {
    pub fn new(path: Option<PathBuf>) -> Self {
        History {
            path,
            entries: Vec::new(),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Replaces the in-memory entries with the file contents.
    ///
    /// A missing file is the normal first-run state and leaves the history
    /// empty. Any other failure also leaves it empty and is returned so the
    /// caller can log it.
    pub fn load(&mut self) -> Result<(), HistoryError> {
        self.entries.clear();
        let Some(path) = self.path.as_ref() else {
            return Ok(());
        };

        let data = match fs::read(path) {
            Ok(data) => data,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!("no history file at {}", path.display());
                return Ok(());
            }
            Err(source) => {
                return Err(HistoryError::Read {
                    path: path.clone(),
                    source,
                })
            }
        };

        self.entries = String::from_utf8_lossy(&data)
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect();
        info!(
            "loaded {} history entries from {}",
            self.entries.len(),
            path.display()
        );
        Ok(())
    }

    pub fn save(&self) -> Result<(), HistoryError> {
        let mut contents = String::new();
        for entry in &self.entries {
            contents.push_str(entry);
            contents.push('\n');
        }
        self.write_file(contents.as_bytes())?;
        debug!("saved {} history entries", self.entries.len());
        Ok(())
    }

    pub fn append(&mut self, line: impl Into<String>) {
        self.entries.push(line.into());
    }

    /// Empties the history and truncates the file right away.
    ///
    /// Memory is cleared even if the file cannot be written.
    pub fn clear(&mut self) -> Result<(), HistoryError> {
        self.entries.clear();
        self.write_file(b"")
    }

    pub fn show(&self, writer: &mut dyn Write) -> io::Result<()> {
        for (index, entry) in self.entries.iter().enumerate() {
            writeln!(writer, "{}: {}", index + 1, entry)?;
        }
        Ok(())
    }

    fn write_file(&self, contents: &[u8]) -> Result<(), HistoryError> {
        let Some(path) = self.path.as_ref() else {
            return Ok(());
        };

        let write = || -> io::Result<()> {
            let mut file = OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .mode(HISTORY_FILE_MODE)
                .open(path)?;
            // mode() only applies when the file is created
            file.set_permissions(fs::Permissions::from_mode(HISTORY_FILE_MODE))?;
            file.write_all(contents)?;
            file.flush()
        };

        write().map_err(|source| HistoryError::Write {
            path: path.clone(),
            source,
        })
    }
}
