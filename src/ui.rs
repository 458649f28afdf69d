//! Terminal output: colored outcome and summary reporting.
//!
//! Uses the `console` crate for styling. [`Reporter`] renders coordinator
//! results: green for applied transitions, yellow for denials and no-ops.
//! Faults are left to the binary's error path.

use console::Style;

use crate::coordinator::Outcome;
use crate::record::StudentRecord;

/// Styled reporting of operation results on stdout.
pub struct Reporter {
    // Style for applied transitions.
    green: Style,
    // Style for denials and no-ops.
    yellow: Style,
}

impl Reporter {
    pub fn new() -> Self {
        Self {
            green: Style::new().green().bold(),
            yellow: Style::new().yellow(),
        }
    }

    /// Renders the outcome of a transition request.
    pub fn outcome(&self, action: &str, outcome: &Outcome) {
        match outcome {
            Outcome::Applied => {
                println!("  {} {action}: applied", self.green.apply_to("✓"));
            }
            Outcome::NoChange => {
                println!(
                    "  {} {action}: already in the requested state",
                    self.yellow.apply_to("•")
                );
            }
            Outcome::Denied { missing } => {
                println!(
                    "  {} {action}: denied, missing prerequisite: {missing}",
                    self.yellow.apply_to("✗")
                );
            }
        }
    }

    /// Prints the student summary block.
    pub fn record(&self, record: &StudentRecord) {
        println!("{record}");
    }

    /// Prints a course roster listing.
    pub fn roster(&self, course: &str, students: &[String]) {
        println!("Enrolled in {course}:");
        if students.is_empty() {
            println!("  (none)");
        }
        for name in students {
            println!("  - {name}");
        }
    }

    /// Reports a passed credit audit.
    pub fn audit_ok(&self, credits: u32) {
        println!(
            "  {} credit total consistent: {credits}",
            self.green.apply_to("✓")
        );
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new()
    }
}
