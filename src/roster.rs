//! The shared course roster.
//!
//! One document for the whole system, mapping course name → names of the
//! students enrolled in that course's section. Operations read the full
//! document, mutate one entry, and write the full document back; only the
//! coordinator touches it.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::MatriculaError;

/// Course name → enrolled student names. Entry values keep insertion order
/// and never hold duplicates; the map itself is ordered so the document
/// serializes deterministically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRoster {
    #[serde(flatten)]
    entries: BTreeMap<String, Vec<String>>,
}

impl CourseRoster {
    /// Adds a student to a course's entry, creating the entry if absent.
    ///
    /// Returns `false` when the student was already listed.
    pub fn add(&mut self, course: &str, student: &str) -> bool {
        let entry = self.entries.entry(course.to_string()).or_default();
        if entry.iter().any(|name| name == student) {
            return false;
        }
        entry.push(student.to_string());
        true
    }

    /// Removes a student from a course's entry. The entry itself is kept,
    /// possibly empty, so the document stays stable for readers.
    ///
    /// Returns `false` when the student was not listed.
    pub fn remove(&mut self, course: &str, student: &str) -> bool {
        let Some(entry) = self.entries.get_mut(course) else {
            return false;
        };
        match entry.iter().position(|name| name == student) {
            Some(index) => {
                entry.remove(index);
                true
            }
            None => false,
        }
    }

    /// Students currently listed for a course; empty when no entry exists.
    pub fn students_of(&self, course: &str) -> &[String] {
        self.entries
            .get(course)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn contains(&self, course: &str, student: &str) -> bool {
        self.students_of(course).iter().any(|name| name == student)
    }
}

/// Whole-document persistence for the shared roster.
pub struct RosterStore {
    path: PathBuf,
}

impl RosterStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Loads the roster document. A document that does not exist yet loads
    /// as the empty roster; a present-but-corrupt one propagates its parse
    /// fault.
    pub fn load(&self) -> Result<CourseRoster, MatriculaError> {
        debug!(path = %self.path.display(), "loading roster");
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(CourseRoster::default());
            }
            Err(err) => return Err(err.into()),
        };
        let roster: CourseRoster = serde_json::from_str(&contents)?;
        Ok(roster)
    }

    /// Replaces the roster document wholesale (temp file + rename).
    pub fn save(&self, roster: &CourseRoster) -> Result<(), MatriculaError> {
        debug!(path = %self.path.display(), "saving roster");
        let mut buf = serde_json::to_string_pretty(roster)?;
        buf.push('\n');
        write_atomic(&self.path, &buf)
    }
}

fn write_atomic(path: &Path, contents: &str) -> Result<(), MatriculaError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, contents)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}
