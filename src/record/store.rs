use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::MatriculaError;

use super::student::{StudentId, StudentRecord};

/// One JSON document per student under a configured directory.
///
/// Every save rewrites the whole document through a temp-file-and-rename,
/// so a partial write can never leave `credits` on disk disagreeing with
/// `approved`.
pub struct RecordStore {
    dir: PathBuf,
}

impl RecordStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the student's document: `<dir>/<file_stem>.json`.
    pub fn record_path(&self, id: &StudentId) -> PathBuf {
        self.dir.join(format!("{}.json", id.file_stem()))
    }

    pub fn exists(&self, id: &StudentId) -> bool {
        self.record_path(id).is_file()
    }

    /// Loads a student's document.
    ///
    /// A missing document is [`MatriculaError::RecordNotFound`]; parse and
    /// other IO faults propagate unmodified.
    pub fn load(&self, id: &StudentId) -> Result<StudentRecord, MatriculaError> {
        let path = self.record_path(id);
        debug!(path = %path.display(), "loading student record");
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(MatriculaError::RecordNotFound(id.to_string()));
            }
            Err(err) => return Err(err.into()),
        };
        let record: StudentRecord = serde_json::from_str(&contents)?;
        Ok(record)
    }

    /// Writes the full document, replacing whatever was there.
    pub fn save(&self, record: &StudentRecord) -> Result<(), MatriculaError> {
        let path = self.record_path(&record.id());
        debug!(path = %path.display(), credits = record.credits, "saving student record");
        let mut buf = serde_json::to_string_pretty(record)?;
        buf.push('\n');
        write_atomic(&path, &buf)
    }
}

fn write_atomic(path: &Path, contents: &str) -> Result<(), MatriculaError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, contents)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Course;

    fn course(name: &str, credits: u32) -> Course {
        Course {
            name: name.to_string(),
            prerequisites: Vec::new(),
            credits,
        }
    }

    #[test]
    fn save_and_load_round_trips() {
        let temp = tempfile::tempdir().expect("tempdir");
        let store = RecordStore::new(temp.path());
        let id = StudentId::new("Ana Pereira", 51234567);

        let mut record = StudentRecord::new(&id, 2021);
        record.mark_approved(&course("Calculus I", 8));
        record.enroll(&course("Programming I", 10));
        store.save(&record).expect("save");

        let loaded = store.load(&id).expect("load");
        assert_eq!(loaded, record);
    }

    #[test]
    fn load_missing_record_is_not_found() {
        let temp = tempfile::tempdir().expect("tempdir");
        let store = RecordStore::new(temp.path());
        let id = StudentId::new("Nobody", 1);

        let err = store.load(&id).expect_err("expected error");
        assert!(matches!(err, MatriculaError::RecordNotFound(_)));
    }

    #[test]
    fn corrupt_document_propagates_parse_error() {
        let temp = tempfile::tempdir().expect("tempdir");
        let store = RecordStore::new(temp.path());
        let id = StudentId::new("Ana Pereira", 51234567);

        fs::create_dir_all(temp.path()).unwrap();
        fs::write(store.record_path(&id), "{ not json").unwrap();

        let err = store.load(&id).expect_err("expected error");
        assert!(matches!(err, MatriculaError::Json(_)));
    }

    #[test]
    fn save_creates_missing_directory() {
        let temp = tempfile::tempdir().expect("tempdir");
        let store = RecordStore::new(temp.path().join("records"));
        let id = StudentId::new("Ana Pereira", 51234567);

        store.save(&StudentRecord::new(&id, 2021)).expect("save");
        assert!(store.exists(&id));
    }

    #[test]
    fn record_path_uses_file_stem() {
        let store = RecordStore::new("/data");
        let id = StudentId::new("Ana Maria Pereira", 51234567);
        assert_eq!(
            store.record_path(&id),
            PathBuf::from("/data/Ana_Maria_Pereira_51234567.json")
        );
    }

    #[test]
    fn save_replaces_previous_document() {
        let temp = tempfile::tempdir().expect("tempdir");
        let store = RecordStore::new(temp.path());
        let id = StudentId::new("Ana Pereira", 51234567);

        let mut record = StudentRecord::new(&id, 2021);
        store.save(&record).expect("first save");
        record.mark_approved(&course("Calculus I", 8));
        store.save(&record).expect("second save");

        let loaded = store.load(&id).expect("load");
        assert_eq!(loaded.credits, 8);
        assert!(loaded.is_approved("Calculus I"));
    }
}
