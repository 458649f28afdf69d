//! Configuration loaded from `matricula.toml`.
//!
//! [`MatriculaConfig`] names the three external documents the system works
//! against: the curriculum plan, the student record directory and the
//! shared roster. Values not present in the file use sensible defaults.
//! The `MATRICULA_DATA_DIR` environment variable takes precedence over the
//! file for the record directory.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::MatriculaError;

/// Top-level configuration loaded from `matricula.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct MatriculaConfig {
    /// Path of the curriculum plan document.
    #[serde(default = "default_plan_path")]
    pub plan_path: PathBuf,

    /// Directory holding one JSON document per student.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Path of the shared course roster document.
    #[serde(default = "default_roster_path")]
    pub roster_path: PathBuf,
}

fn default_plan_path() -> PathBuf {
    PathBuf::from("plan.json")
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("records")
}

fn default_roster_path() -> PathBuf {
    PathBuf::from("roster.json")
}

impl Default for MatriculaConfig {
    fn default() -> Self {
        Self {
            plan_path: default_plan_path(),
            data_dir: default_data_dir(),
            roster_path: default_roster_path(),
        }
    }
}

impl MatriculaConfig {
    /// Loads the configuration from `matricula.toml` in the current
    /// directory. Uses defaults if the file does not exist.
    pub fn load() -> Result<Self, MatriculaError> {
        Self::load_from(Path::new("matricula.toml"))
    }

    /// Loads the configuration from an explicit path, falling back to
    /// defaults when the file is absent.
    pub fn load_from(path: &Path) -> Result<Self, MatriculaError> {
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            toml::from_str::<MatriculaConfig>(&contents)?
        } else {
            Self::default()
        };

        // Environment variable takes precedence over the file for the
        // record directory.
        if let Ok(dir) = std::env::var("MATRICULA_DATA_DIR")
            && !dir.is_empty()
        {
            config.data_dir = PathBuf::from(dir);
        }

        Ok(config)
    }
}
