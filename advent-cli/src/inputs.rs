//! Local puzzle input lookup

use crate::error::InputError;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Reads puzzle inputs from disk
///
/// Directory structure: `{dir}/{year}/day{day:02}.txt`. A single explicit
/// file may stand in for one year/day.
#[derive(Debug, Clone)]
pub struct InputStore {
    dir: PathBuf,
    override_file: Option<(u16, u8, PathBuf)>,
}

impl InputStore {
    pub fn new(dir: PathBuf) -> Self {
        Self {
            dir,
            override_file: None,
        }
    }

    /// Use `path` for `year`/`day` instead of the directory layout
    pub fn with_override(mut self, year: u16, day: u8, path: PathBuf) -> Self {
        self.override_file = Some((year, day, path));
        self
    }

    /// Get the input path for a specific year/day
    pub fn input_path(&self, year: u16, day: u8) -> PathBuf {
        match &self.override_file {
            Some((y, d, path)) if *y == year && *d == day => path.clone(),
            _ => self
                .dir
                .join(year.to_string())
                .join(format!("day{day:02}.txt")),
        }
    }

    /// Check if an input file exists
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.input_path(year, day).is_file()
    }

    /// Read the input for a year/day
    pub fn read(&self, year: u16, day: u8) -> Result<String, InputError> {
        let path = self.input_path(year, day);
        match fs::read_to_string(&path) {
            Ok(content) => {
                log::debug!("read {} bytes from {}", content.len(), path.display());
                Ok(content)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Err(InputError::Missing { year, day, path }),
            Err(source) => Err(InputError::Io { path, source }),
        }
    }
}

/// Expand a leading `~` to the home directory
pub fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && let Some(rest) = path_str.strip_prefix('~')
        && (rest.is_empty() || rest.starts_with('/'))
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest.trim_start_matches('/'));
    }
    path.to_path_buf()
}
