use anyhow::Result;
use clap::Parser;

use matricula::catalog::CurriculumCatalog;
use matricula::cli::{Cli, Command};
use matricula::config::MatriculaConfig;
use matricula::coordinator::EnrollmentCoordinator;
use matricula::logging;
use matricula::record::{RecordStore, StudentId};
use matricula::roster::RosterStore;
use matricula::ui::Reporter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut config = MatriculaConfig::load()?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }

    let catalog = CurriculumCatalog::load(&config.plan_path)?;
    let records = RecordStore::new(&config.data_dir);
    let roster = RosterStore::new(&config.roster_path);
    let mut coordinator = EnrollmentCoordinator::new(catalog, records, roster);
    let reporter = Reporter::new();

    match cli.command {
        Command::Register {
            name,
            national_id,
            year,
        } => {
            let record = coordinator.register_student(&StudentId::new(name, national_id), year)?;
            reporter.record(&record);
        }
        Command::Enroll {
            name,
            national_id,
            semester,
            code,
        } => {
            let id = StudentId::new(name, national_id);
            let outcome = coordinator.request_enrollment(&id, &semester, &code)?;
            reporter.outcome("enrollment", &outcome);
        }
        Command::Exam {
            name,
            national_id,
            semester,
            code,
        } => {
            let id = StudentId::new(name, national_id);
            let outcome = coordinator.request_exam_registration(&id, &semester, &code)?;
            reporter.outcome("exam registration", &outcome);
        }
        Command::Withdraw {
            name,
            national_id,
            semester,
            code,
        } => {
            let id = StudentId::new(name, national_id);
            let outcome = coordinator.withdraw_enrollment(&id, &semester, &code)?;
            reporter.outcome("withdrawal", &outcome);
        }
        Command::WithdrawExam {
            name,
            national_id,
            semester,
            code,
        } => {
            let id = StudentId::new(name, national_id);
            let outcome = coordinator.withdraw_exam_registration(&id, &semester, &code)?;
            reporter.outcome("exam withdrawal", &outcome);
        }
        Command::Approve {
            name,
            national_id,
            semester,
            code,
        } => {
            let id = StudentId::new(name, national_id);
            let outcome = coordinator.record_approval(&id, &semester, &code)?;
            reporter.outcome("approval", &outcome);
        }
        Command::Revoke {
            name,
            national_id,
            semester,
            code,
        } => {
            let id = StudentId::new(name, national_id);
            let outcome = coordinator.revoke_approval(&id, &semester, &code)?;
            reporter.outcome("approval revocation", &outcome);
        }
        Command::Status { name, national_id } => {
            let record = coordinator.student_status(&StudentId::new(name, national_id))?;
            reporter.record(&record);
        }
        Command::Roster { semester, code } => {
            let students = coordinator.roster_for(&semester, &code)?;
            reporter.roster(&format!("{semester}/{code}"), &students);
        }
        Command::Audit { name, national_id } => {
            let credits = coordinator.audit_credits(&StudentId::new(name, national_id))?;
            reporter.audit_ok(credits);
        }
    }

    Ok(())
}
