//! Orchestration of the gated record transitions.
//!
//! [`EnrollmentCoordinator`] owns the catalog and the two stores and
//! sequences every operation: catalog lookup → eligibility check → record
//! mutation → persistence → roster sync. It is the only component that
//! touches the shared roster. Mutating operations take `&mut self`, which
//! keeps the single-writer discipline a compile-time property.

use tracing::debug;

use crate::catalog::CurriculumCatalog;
use crate::eligibility::{Eligibility, EligibilityEngine};
use crate::error::MatriculaError;
use crate::record::{RecordStore, StudentId, StudentRecord};
use crate::roster::RosterStore;

/// The result of a coordinator operation. Denials and no-ops are expected
/// outcomes; faults come back as errors instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The transition was applied and persisted.
    Applied,
    /// The record was already in the requested state.
    NoChange,
    /// Eligibility denied; the record was not touched.
    Denied { missing: String },
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Applied => write!(f, "applied"),
            Outcome::NoChange => write!(f, "no change"),
            Outcome::Denied { missing } => write!(f, "denied, missing prerequisite: {missing}"),
        }
    }
}

/// Sequences enrollment operations over one record store, one roster store
/// and the loaded curriculum plan.
pub struct EnrollmentCoordinator {
    catalog: CurriculumCatalog,
    records: RecordStore,
    roster: RosterStore,
}

impl EnrollmentCoordinator {
    pub fn new(catalog: CurriculumCatalog, records: RecordStore, roster: RosterStore) -> Self {
        Self {
            catalog,
            records,
            roster,
        }
    }

    /// First registration: creates and persists the empty record.
    ///
    /// Idempotent: when a record already exists for this identity it is
    /// returned as-is, never overwritten.
    pub fn register_student(
        &mut self,
        id: &StudentId,
        year_enrolled: u32,
    ) -> Result<StudentRecord, MatriculaError> {
        if self.records.exists(id) {
            debug!(student = %id, "record already exists");
            return self.records.load(id);
        }
        let record = StudentRecord::new(id, year_enrolled);
        self.records.save(&record)?;
        debug!(student = %id, year_enrolled, "student registered");
        Ok(record)
    }

    /// Enrolls the student in a course, gated by `can_enroll`, and syncs
    /// the shared roster.
    ///
    /// The roster is synced even when the record already held the
    /// enrollment, so a roster entry lost out-of-band heals here.
    pub fn request_enrollment(
        &mut self,
        id: &StudentId,
        semester: &str,
        code: &str,
    ) -> Result<Outcome, MatriculaError> {
        let course = self.catalog.lookup(semester, code)?;
        let mut record = self.records.load(id)?;

        if let Eligibility::MissingPrerequisite(missing) =
            EligibilityEngine::can_enroll(course, &record)
        {
            debug!(student = %id, course = %course.name, %missing, "enrollment denied");
            return Ok(Outcome::Denied { missing });
        }

        let changed = record.enroll(course);
        if changed {
            self.records.save(&record)?;
        }

        let mut roster = self.roster.load()?;
        if roster.add(&course.name, &record.name) {
            self.roster.save(&roster)?;
        }

        debug!(student = %id, course = %course.name, changed, "enrollment processed");
        Ok(if changed {
            Outcome::Applied
        } else {
            Outcome::NoChange
        })
    }

    /// Registers the student for a course's exam, gated by
    /// `can_register_exam`. No roster effect.
    pub fn request_exam_registration(
        &mut self,
        id: &StudentId,
        semester: &str,
        code: &str,
    ) -> Result<Outcome, MatriculaError> {
        let course = self.catalog.lookup(semester, code)?;
        let mut record = self.records.load(id)?;

        if let Eligibility::MissingPrerequisite(missing) =
            EligibilityEngine::can_register_exam(course, &record)
        {
            debug!(student = %id, course = %course.name, %missing, "exam registration denied");
            return Ok(Outcome::Denied { missing });
        }

        if !record.register_exam(course) {
            return Ok(Outcome::NoChange);
        }
        self.records.save(&record)?;
        debug!(student = %id, course = %course.name, "exam registration applied");
        Ok(Outcome::Applied)
    }

    /// Withdraws an enrollment and prunes the student from the course's
    /// roster entry. Unconditional: no eligibility re-check.
    pub fn withdraw_enrollment(
        &mut self,
        id: &StudentId,
        semester: &str,
        code: &str,
    ) -> Result<Outcome, MatriculaError> {
        let course = self.catalog.lookup(semester, code)?;
        let mut record = self.records.load(id)?;

        let changed = record.unenroll(course);
        if changed {
            self.records.save(&record)?;
        }

        let mut roster = self.roster.load()?;
        if roster.remove(&course.name, &record.name) {
            self.roster.save(&roster)?;
        }

        debug!(student = %id, course = %course.name, changed, "enrollment withdrawn");
        Ok(if changed {
            Outcome::Applied
        } else {
            Outcome::NoChange
        })
    }

    /// Withdraws an exam registration. Unconditional.
    pub fn withdraw_exam_registration(
        &mut self,
        id: &StudentId,
        semester: &str,
        code: &str,
    ) -> Result<Outcome, MatriculaError> {
        let course = self.catalog.lookup(semester, code)?;
        let mut record = self.records.load(id)?;

        if !record.unregister_exam(course) {
            return Ok(Outcome::NoChange);
        }
        self.records.save(&record)?;
        debug!(student = %id, course = %course.name, "exam registration withdrawn");
        Ok(Outcome::Applied)
    }

    /// Records a course as approved, crediting its value.
    ///
    /// Precondition: an already-approved course is `NoChange` and credits
    /// nothing, so approval can never double-credit.
    pub fn record_approval(
        &mut self,
        id: &StudentId,
        semester: &str,
        code: &str,
    ) -> Result<Outcome, MatriculaError> {
        let course = self.catalog.lookup(semester, code)?;
        let mut record = self.records.load(id)?;

        if record.is_approved(&course.name) {
            return Ok(Outcome::NoChange);
        }
        record.mark_approved(course);
        self.records.save(&record)?;
        debug!(student = %id, course = %course.name, credits = record.credits, "approval recorded");
        Ok(Outcome::Applied)
    }

    /// Revokes an approval, debiting its credit value.
    pub fn revoke_approval(
        &mut self,
        id: &StudentId,
        semester: &str,
        code: &str,
    ) -> Result<Outcome, MatriculaError> {
        let course = self.catalog.lookup(semester, code)?;
        let mut record = self.records.load(id)?;

        if !record.unmark_approved(course) {
            return Ok(Outcome::NoChange);
        }
        self.records.save(&record)?;
        debug!(student = %id, course = %course.name, credits = record.credits, "approval revoked");
        Ok(Outcome::Applied)
    }

    /// Read-only view of a student's record.
    pub fn student_status(&self, id: &StudentId) -> Result<StudentRecord, MatriculaError> {
        self.records.load(id)
    }

    /// Students currently listed for a course's section.
    pub fn roster_for(&self, semester: &str, code: &str) -> Result<Vec<String>, MatriculaError> {
        let course = self.catalog.lookup(semester, code)?;
        let roster = self.roster.load()?;
        Ok(roster.students_of(&course.name).to_vec())
    }

    /// Recomputes the credit sum of the approved set from the plan and
    /// compares it to the stored total.
    ///
    /// Returns the computed total on agreement. Disagreement means storage
    /// corruption or a bypassed mutation and is fatal to the request; an
    /// approved name the plan does not know is reported the same way.
    pub fn audit_credits(&self, id: &StudentId) -> Result<u32, MatriculaError> {
        let record = self.records.load(id)?;
        let mut computed: u32 = 0;
        for name in &record.approved {
            let credits = self
                .catalog
                .credits_for(name)
                .ok_or_else(|| MatriculaError::UnknownCourse(name.clone()))?;
            computed += credits;
        }
        if computed != record.credits {
            return Err(MatriculaError::InconsistentCredits {
                stored: record.credits,
                computed,
            });
        }
        Ok(computed)
    }
}
