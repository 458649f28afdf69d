//! Command-line interface, clap-based.
//!
//! Defines the [`Cli`] struct with subcommands [`Command`] mapping 1:1
//! onto coordinator operations, plus global flags (--data-dir, --verbose).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// matricula: academic enrollment records with prerequisite-gated
/// transitions.
#[derive(Debug, Parser)]
#[command(name = "matricula", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Directory of student record documents, overriding configuration.
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Enable verbose diagnostics on stderr.
    #[arg(long, short, global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create a student's record (first registration).
    Register {
        /// Full name of the student.
        name: String,
        /// National id.
        national_id: u64,
        /// Year of entry into the program.
        year: u32,
    },

    /// Enroll a student in a course, gated by its prerequisites.
    Enroll {
        name: String,
        national_id: u64,
        /// Semester key in the curriculum plan.
        semester: String,
        /// Course code within the semester.
        code: String,
    },

    /// Register a student for a course's exam, gated by its prerequisites.
    Exam {
        name: String,
        national_id: u64,
        semester: String,
        code: String,
    },

    /// Withdraw an enrollment. Unconditional.
    Withdraw {
        name: String,
        national_id: u64,
        semester: String,
        code: String,
    },

    /// Withdraw an exam registration. Unconditional.
    WithdrawExam {
        name: String,
        national_id: u64,
        semester: String,
        code: String,
    },

    /// Record a course as approved, crediting its value.
    Approve {
        name: String,
        national_id: u64,
        semester: String,
        code: String,
    },

    /// Revoke an approval, debiting its credit value.
    Revoke {
        name: String,
        national_id: u64,
        semester: String,
        code: String,
    },

    /// Show a student's record.
    Status { name: String, national_id: u64 },

    /// List the students enrolled in a course's section.
    Roster { semester: String, code: String },

    /// Check that the stored credit total matches the approved courses.
    Audit { name: String, national_id: u64 },
}
