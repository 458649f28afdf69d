use thiserror::Error;

#[derive(Debug, Error)]
pub enum MatriculaError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Course not found in plan: {semester}/{code}")]
    CourseNotFound { semester: String, code: String },

    #[error("Student record not found: {0}")]
    RecordNotFound(String),

    #[error("Credit total {stored} disagrees with approved courses (computed {computed})")]
    InconsistentCredits { stored: u32, computed: u32 },

    #[error("Approved course not present in plan: {0}")]
    UnknownCourse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}
