//! Puzzle input lookup on the local filesystem

use crate::error::ExecutorError;
use std::fs;
use std::path::PathBuf;

/// File-based store of puzzle inputs
///
/// Directory structure: `{input_dir}/{year}_day{day:02}.txt`. An explicit
/// file, when given, is used for every lookup instead.
#[derive(Debug, Clone)]
pub struct InputStore {
    input_dir: PathBuf,
    explicit: Option<PathBuf>,
}

impl InputStore {
    pub fn new(input_dir: PathBuf, explicit: Option<PathBuf>) -> Self {
        Self {
            input_dir,
            explicit,
        }
    }

    /// Path the input for a year/day is read from
    pub fn input_path(&self, year: u16, day: u8) -> PathBuf {
        match &self.explicit {
            Some(path) => path.clone(),
            None => self.input_dir.join(format!("{}_day{:02}.txt", year, day)),
        }
    }

    /// Check if the input file exists
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.input_path(year, day).is_file()
    }

    /// Read the input for a year/day
    pub fn read(&self, year: u16, day: u8) -> Result<String, ExecutorError> {
        let path = self.input_path(year, day);
        tracing::info!(year, day, path = %path.display(), "reading input");
        fs::read_to_string(&path).map_err(|source| ExecutorError::InputRead {
            year,
            day,
            path,
            source,
        })
    }
}
