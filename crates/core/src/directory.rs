//! Static student directory: display names and guardian contacts.
//!
//! Read-only at runtime. Loaded once at startup, either from a JSON file or
//! from the built-in seed.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::CoreError;

/// Display name used when a student id has no directory entry.
pub const UNKNOWN_STUDENT: &str = "Unknown Student";

/// A single directory entry.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StudentEntry {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub guardians: Vec<String>,
}

/// Name and guardian lookups keyed by student id.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudentDirectory {
    students: HashMap<String, StudentEntry>,
}

impl StudentDirectory {
    /// The sample directory shipped with the server.
    pub fn seed() -> Self {
        let mut students = HashMap::new();
        students.insert(
            "S12345".to_string(),
            StudentEntry {
                name: Some("John Doe".to_string()),
                guardians: (1..=5).map(|i| format!("example{i}@gmail.com")).collect(),
            },
        );
        students.insert(
            "S67890".to_string(),
            StudentEntry {
                name: Some("Doe John".to_string()),
                guardians: vec!["example6@gmail.com".to_string()],
            },
        );
        Self { students }
    }

    /// Parse a directory from its JSON form:
    /// `{"students": {"S1": {"name": "...", "guardians": ["..."]}}}`.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        serde_json::from_str(json)
            .map_err(|e| CoreError::Validation(format!("invalid student directory: {e}")))
    }

    /// Read and parse a directory file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            CoreError::Internal(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_json(&contents)
    }

    /// Display name for a student, falling back to [`UNKNOWN_STUDENT`].
    pub fn display_name(&self, student_id: &str) -> &str {
        self.students
            .get(student_id)
            .and_then(|entry| entry.name.as_deref())
            .unwrap_or(UNKNOWN_STUDENT)
    }

    /// Guardian addresses for a student in registration order. Empty when unknown.
    pub fn guardians(&self, student_id: &str) -> &[String] {
        self.students
            .get(student_id)
            .map(|entry| entry.guardians.as_slice())
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}
