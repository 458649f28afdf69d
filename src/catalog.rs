//! Curriculum plan lookup.
//!
//! [`CurriculumCatalog`] holds the parsed plan document: semester key →
//! course code → [`Course`]. The plan is loaded once and read-only for the
//! rest of the process; a lookup miss is a typed error, never a default.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::MatriculaError;

/// A curricular unit as defined by the plan. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub name: String,

    /// Names of the courses that must sit in one of the student's
    /// qualifying sets before this one may be enrolled or exam-registered.
    /// Checked in plan order.
    #[serde(default)]
    pub prerequisites: Vec<String>,

    pub credits: u32,
}

/// The curriculum plan: semester key → course code → course.
#[derive(Debug, Clone)]
pub struct CurriculumCatalog {
    plan: BTreeMap<String, BTreeMap<String, Course>>,
}

impl CurriculumCatalog {
    /// Loads the plan document from disk. Parse and IO faults propagate.
    pub fn load(path: &Path) -> Result<Self, MatriculaError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Parses a plan from an in-memory JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, MatriculaError> {
        let plan = serde_json::from_str(json)?;
        Ok(Self { plan })
    }

    /// Resolves a (semester, code) pair to its course.
    ///
    /// Returns [`MatriculaError::CourseNotFound`] when either key is absent.
    pub fn lookup(&self, semester: &str, code: &str) -> Result<&Course, MatriculaError> {
        self.plan
            .get(semester)
            .and_then(|courses| courses.get(code))
            .ok_or_else(|| MatriculaError::CourseNotFound {
                semester: semester.to_string(),
                code: code.to_string(),
            })
    }

    /// Credit value of a course found by name, scanning the whole plan.
    ///
    /// Approved sets store course names, not codes, so the credit audit
    /// resolves them this way.
    pub fn credits_for(&self, name: &str) -> Option<u32> {
        self.plan
            .values()
            .flat_map(|courses| courses.values())
            .find(|course| course.name == name)
            .map(|course| course.credits)
    }

    /// Number of courses across all semesters.
    pub fn course_count(&self) -> usize {
        self.plan.values().map(|courses| courses.len()).sum()
    }
}
