//! Prerequisite-satisfaction checks.
//!
//! Pure decision functions gating the "enrolled" and "exam-registered"
//! transitions. A verdict either grants the transition or names the first
//! unmet prerequisite, so a denial tells the student what is missing.

use serde::{Deserialize, Serialize};

use crate::catalog::Course;
use crate::record::StudentRecord;

/// The verdict of an eligibility check. A denial is an expected outcome,
/// not a fault.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Eligibility {
    /// Every prerequisite sits in at least one qualifying set.
    Eligible,
    /// The first prerequisite, in plan order, absent from all qualifying
    /// sets. Checking short-circuits here.
    MissingPrerequisite(String),
}

impl Eligibility {
    pub fn is_eligible(&self) -> bool {
        matches!(self, Eligibility::Eligible)
    }
}

impl std::fmt::Display for Eligibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Eligibility::Eligible => write!(f, "eligible"),
            Eligibility::MissingPrerequisite(name) => {
                write!(f, "missing prerequisite: {name}")
            }
        }
    }
}

/// Decides whether a student may transition a course into a target state.
///
/// Both checks run the same AND over prerequisite presence; they differ
/// only in which sets qualify. No transitive closure and no cycle
/// detection; prerequisite graphs are assumed acyclic by plan design.
pub struct EligibilityEngine;

impl EligibilityEngine {
    /// Enrollment check: a prerequisite qualifies when it is approved,
    /// enrolled, or exam-registered.
    pub fn can_enroll(course: &Course, record: &StudentRecord) -> Eligibility {
        Self::check(
            course,
            &[
                record.approved.as_slice(),
                record.enrolled.as_slice(),
                record.exam_registered.as_slice(),
            ],
        )
    }

    /// Exam-registration check: a prerequisite qualifies when it is
    /// approved or enrolled. An existing exam registration does not count.
    pub fn can_register_exam(course: &Course, record: &StudentRecord) -> Eligibility {
        Self::check(
            course,
            &[record.approved.as_slice(), record.enrolled.as_slice()],
        )
    }

    fn check(course: &Course, qualifying: &[&[String]]) -> Eligibility {
        for prerequisite in &course.prerequisites {
            let satisfied = qualifying
                .iter()
                .any(|set| set.iter().any(|name| name == prerequisite));
            if !satisfied {
                return Eligibility::MissingPrerequisite(prerequisite.clone());
            }
        }
        Eligibility::Eligible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::StudentId;

    fn course(name: &str, prerequisites: &[&str]) -> Course {
        Course {
            name: name.to_string(),
            prerequisites: prerequisites.iter().map(|p| p.to_string()).collect(),
            credits: 8,
        }
    }

    fn record() -> StudentRecord {
        StudentRecord::new(&StudentId::new("Ana Pereira", 51234567), 2021)
    }

    // --- empty prerequisites ---

    #[test]
    fn no_prerequisites_always_eligible() {
        let rec = record();
        let c = course("Calculus I", &[]);
        assert_eq!(EligibilityEngine::can_enroll(&c, &rec), Eligibility::Eligible);
        assert_eq!(
            EligibilityEngine::can_register_exam(&c, &rec),
            Eligibility::Eligible
        );
    }

    // --- qualifying sets for enrollment ---

    #[test]
    fn enroll_qualifies_via_approved() {
        let mut rec = record();
        rec.approved.push("Calculus I".to_string());
        let c = course("Calculus II", &["Calculus I"]);
        assert!(EligibilityEngine::can_enroll(&c, &rec).is_eligible());
    }

    #[test]
    fn enroll_qualifies_via_enrolled() {
        let mut rec = record();
        rec.enrolled.push("Calculus I".to_string());
        let c = course("Calculus II", &["Calculus I"]);
        assert!(EligibilityEngine::can_enroll(&c, &rec).is_eligible());
    }

    #[test]
    fn enroll_qualifies_via_exam_registration() {
        let mut rec = record();
        rec.exam_registered.push("Calculus I".to_string());
        let c = course("Calculus II", &["Calculus I"]);
        assert!(EligibilityEngine::can_enroll(&c, &rec).is_eligible());
    }

    #[test]
    fn enroll_denied_names_missing_prerequisite() {
        let rec = record();
        let c = course("Calculus II", &["Calculus I"]);
        assert_eq!(
            EligibilityEngine::can_enroll(&c, &rec),
            Eligibility::MissingPrerequisite("Calculus I".to_string())
        );
    }

    // --- qualifying sets for exam registration ---

    #[test]
    fn exam_registration_does_not_count_exam_set() {
        let mut rec = record();
        rec.exam_registered.push("Calculus I".to_string());
        let c = course("Calculus II", &["Calculus I"]);
        assert_eq!(
            EligibilityEngine::can_register_exam(&c, &rec),
            Eligibility::MissingPrerequisite("Calculus I".to_string())
        );
    }

    #[test]
    fn exam_registration_qualifies_via_enrolled() {
        let mut rec = record();
        rec.enrolled.push("Calculus I".to_string());
        let c = course("Calculus II", &["Calculus I"]);
        assert!(EligibilityEngine::can_register_exam(&c, &rec).is_eligible());
    }

    // --- short-circuit ---

    #[test]
    fn denial_reports_first_unmet_in_plan_order() {
        let mut rec = record();
        rec.approved.push("Programming I".to_string());
        let c = course("Networks", &["Calculus I", "Physics I", "Programming I"]);
        assert_eq!(
            EligibilityEngine::can_enroll(&c, &rec),
            Eligibility::MissingPrerequisite("Calculus I".to_string())
        );
    }

    #[test]
    fn any_single_unmet_prerequisite_denies() {
        let mut rec = record();
        rec.approved.push("Calculus I".to_string());
        rec.approved.push("Physics I".to_string());
        let c = course("Networks", &["Calculus I", "Physics I", "Programming I"]);
        assert_eq!(
            EligibilityEngine::can_enroll(&c, &rec),
            Eligibility::MissingPrerequisite("Programming I".to_string())
        );
    }

    #[test]
    fn all_prerequisites_met_across_different_sets() {
        let mut rec = record();
        rec.approved.push("Calculus I".to_string());
        rec.enrolled.push("Physics I".to_string());
        rec.exam_registered.push("Programming I".to_string());
        let c = course("Networks", &["Calculus I", "Physics I", "Programming I"]);
        assert!(EligibilityEngine::can_enroll(&c, &rec).is_eligible());
    }

    #[test]
    fn eligibility_display() {
        assert_eq!(Eligibility::Eligible.to_string(), "eligible");
        assert_eq!(
            Eligibility::MissingPrerequisite("Calculus I".into()).to_string(),
            "missing prerequisite: Calculus I"
        );
    }
}
