use serde::{Deserialize, Serialize};

use crate::traits::HasId;

/// Table column headers, in render order.
pub const COLUMNS: [&str; 5] = ["ID", "Name", "Email", "Course", "Age"];

/// A student record as stored by the simple backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    /// Server-assigned record id.
    pub id: i64,
    /// Name, unique case-insensitively on this dialect.
    pub name: String,
    /// Email address, unique case-insensitively.
    pub email: String,
    /// Free-text course name.
    pub course: String,
    pub age: u32,
}

impl HasId for Student {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Student {
    /// Rendered table cells, in [`COLUMNS`] order.
    #[must_use]
    pub fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.email.clone(),
            self.course.clone(),
            self.age.to_string(),
        ]
    }
}

/// Candidate record assembled from the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentDraft {
    pub name: String,
    pub email: String,
    pub course: String,
    /// `None` while the age input is empty or not a number.
    pub age: Option<u32>,
}
