//! Academic enrollment records with prerequisite-gated transitions.
//!
//! The crate tracks, per student, which curricular units are approved,
//! enrolled, or exam-registered, maintains the accumulated credit total as
//! an invariant of the approved set, and gates the enrolled and
//! exam-registered transitions on the prerequisite rules of a curriculum
//! plan.
//!
//! - [`catalog`] resolves (semester, code) pairs to immutable course
//!   metadata from the plan document.
//! - [`record`] holds the per-student persisted state and its document
//!   store.
//! - [`eligibility`] decides whether a transition is allowed, naming the
//!   first unmet prerequisite on denial.
//! - [`roster`] is the shared course → enrolled-students document.
//! - [`coordinator`] sequences lookup → eligibility → mutation →
//!   persistence → roster sync, and is the only component touching the
//!   roster.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod coordinator;
pub mod eligibility;
pub mod error;
pub mod logging;
pub mod record;
pub mod roster;
pub mod ui;

pub use catalog::{Course, CurriculumCatalog};
pub use coordinator::{EnrollmentCoordinator, Outcome};
pub use eligibility::{Eligibility, EligibilityEngine};
pub use error::MatriculaError;
pub use record::{RecordStore, StudentId, StudentRecord};
pub use roster::{CourseRoster, RosterStore};
