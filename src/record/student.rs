use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::Course;

/// Identity of a student: the (name, national id) pair every record
/// document is addressed by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentId {
    pub name: String,
    pub national_id: u64,
}

impl StudentId {
    pub fn new(name: impl Into<String>, national_id: u64) -> Self {
        Self {
            name: name.into(),
            national_id,
        }
    }

    /// Stable file stem for the student's document: spaces in the name
    /// become underscores, followed by the national id.
    pub fn file_stem(&self) -> String {
        format!("{}_{}", self.name.replace(' ', "_"), self.national_id)
    }
}

impl std::fmt::Display for StudentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.national_id)
    }
}

/// The persisted state of one student.
///
/// Invariant: `credits` equals the sum of the credit values of the courses
/// in `approved` after every mutation. The membership fields are ordered
/// sequences with set semantics; the mutation methods never insert a
/// duplicate. A course may legitimately sit in several sets at once
/// (enrolled while exam-registered, for example).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    pub name: String,
    pub national_id: u64,
    pub year_enrolled: u32,
    pub approved: Vec<String>,
    pub enrolled: Vec<String>,
    pub exam_registered: Vec<String>,
    pub credits: u32,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl StudentRecord {
    /// Empty record for a first registration.
    pub fn new(id: &StudentId, year_enrolled: u32) -> Self {
        let now = Utc::now();
        Self {
            name: id.name.clone(),
            national_id: id.national_id,
            year_enrolled,
            approved: Vec::new(),
            enrolled: Vec::new(),
            exam_registered: Vec::new(),
            credits: 0,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> StudentId {
        StudentId::new(self.name.clone(), self.national_id)
    }

    /// Adds the course to `approved` and credits its value.
    ///
    /// Returns `false` without touching anything when already approved.
    pub fn mark_approved(&mut self, course: &Course) -> bool {
        if !insert_unique(&mut self.approved, &course.name) {
            return false;
        }
        self.credits += course.credits;
        self.touch();
        true
    }

    /// Removes the course from `approved` and debits its value.
    ///
    /// Returns `false` when it was not approved. The subtraction
    /// saturates; a stored total too small to cover the debit is left for
    /// the credit audit to report.
    pub fn unmark_approved(&mut self, course: &Course) -> bool {
        if !remove_entry(&mut self.approved, &course.name) {
            return false;
        }
        self.credits = self.credits.saturating_sub(course.credits);
        self.touch();
        true
    }

    /// Set-add on `enrolled`. No credit effect.
    pub fn enroll(&mut self, course: &Course) -> bool {
        let changed = insert_unique(&mut self.enrolled, &course.name);
        if changed {
            self.touch();
        }
        changed
    }

    /// Set-remove on `enrolled`. No credit effect.
    pub fn unenroll(&mut self, course: &Course) -> bool {
        let changed = remove_entry(&mut self.enrolled, &course.name);
        if changed {
            self.touch();
        }
        changed
    }

    /// Set-add on `exam_registered`. No credit effect.
    pub fn register_exam(&mut self, course: &Course) -> bool {
        let changed = insert_unique(&mut self.exam_registered, &course.name);
        if changed {
            self.touch();
        }
        changed
    }

    /// Set-remove on `exam_registered`. No credit effect.
    pub fn unregister_exam(&mut self, course: &Course) -> bool {
        let changed = remove_entry(&mut self.exam_registered, &course.name);
        if changed {
            self.touch();
        }
        changed
    }

    pub fn is_approved(&self, name: &str) -> bool {
        self.approved.iter().any(|entry| entry == name)
    }

    pub fn is_enrolled(&self, name: &str) -> bool {
        self.enrolled.iter().any(|entry| entry == name)
    }

    pub fn is_exam_registered(&self, name: &str) -> bool {
        self.exam_registered.iter().any(|entry| entry == name)
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl std::fmt::Display for StudentRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Student: {} ({})", self.name, self.national_id)?;
        writeln!(f, "Year enrolled: {}", self.year_enrolled)?;
        writeln!(f, "Approved: {}", list(&self.approved))?;
        writeln!(f, "Enrolled: {}", list(&self.enrolled))?;
        writeln!(f, "Exam registrations: {}", list(&self.exam_registered))?;
        write!(f, "Credits: {}", self.credits)
    }
}

fn list(set: &[String]) -> String {
    if set.is_empty() {
        "(none)".to_string()
    } else {
        set.join(", ")
    }
}

fn insert_unique(set: &mut Vec<String>, name: &str) -> bool {
    if set.iter().any(|entry| entry == name) {
        return false;
    }
    set.push(name.to_string());
    true
}

fn remove_entry(set: &mut Vec<String>, name: &str) -> bool {
    match set.iter().position(|entry| entry == name) {
        Some(index) => {
            set.remove(index);
            true
        }
        None => false,
    }
}
