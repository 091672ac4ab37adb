use serde::{Deserialize, Serialize};

use crate::traits::HasId;

/// Table column headers, in render order. The actions column of the source
/// table has no data counterpart and is not part of the searchable cells.
pub const COLUMNS: [&str; 6] = [
    "Roll Number",
    "Name",
    "Email",
    "Course",
    "Date of Birth",
    "Phone Number",
];

/// A student record as stored by the campus backend.
///
/// `date_of_birth` arrives in the backend's display format `dd-mm-yyyy`;
/// it is converted to ISO `yyyy-mm-dd` only when populating the edit form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    /// Server-assigned record id.
    pub id: i64,
    /// Roll number, unique case-insensitively.
    pub roll_number: String,
    pub name: String,
    /// Email address, unique case-insensitively.
    pub email: String,
    /// Foreign key into the course catalog.
    pub course_id: i64,
    /// Course display name (denormalized by the backend).
    pub course: String,
    /// Birth date in `dd-mm-yyyy`.
    pub date_of_birth: String,
    /// Exactly 10 digits, first digit 1-9, unique.
    pub phone_number: String,
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
            self.roll_number.clone(),
            self.name.clone(),
            self.email.clone(),
            self.course.clone(),
            self.date_of_birth.clone(),
            self.phone_number.clone(),
        ]
    }
}

/// Candidate record assembled from the form.
///
/// No `id` (the server assigns one on create) and no display `course`
/// (the backend resolves it from `course_id`). `date_of_birth` carries the
/// form's ISO `yyyy-mm-dd` value, which is what the backend expects on write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentDraft {
    pub roll_number: String,
    pub name: String,
    pub email: String,
    /// `None` while no course is selected.
    pub course_id: Option<i64>,
    /// Birth date in ISO `yyyy-mm-dd`.
    pub date_of_birth: String,
    pub phone_number: String,
}

/// A course catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: i64,
    pub course_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn student_deserializes_wire_format() {
        let json = r#"{
            "id": 3,
            "rollNumber": "CS101",
            "name": "Asha Rao",
            "email": "asha@example.com",
            "courseId": 1,
            "course": "Computer Science",
            "dateOfBirth": "14-02-2004",
            "phoneNumber": "9876543210"
        }"#;
        let s: Student = serde_json::from_str(json).unwrap();
        assert_eq!(s.id, 3);
        assert_eq!(s.roll_number, "CS101");
        assert_eq!(s.course_id, 1);
        assert_eq!(s.date_of_birth, "14-02-2004");
    }

    #[test]
    fn draft_serializes_camel_case() {
        let draft = StudentDraft {
            roll_number: "CS101".to_string(),
            name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
            course_id: Some(1),
            date_of_birth: "2004-02-14".to_string(),
            phone_number: "9876543210".to_string(),
        };
        let json = serde_json::to_string(&draft).unwrap();
        assert!(json.contains("\"rollNumber\":\"CS101\""));
        assert!(json.contains("\"courseId\":1"));
        assert!(json.contains("\"dateOfBirth\":\"2004-02-14\""));
        assert!(!json.contains("\"id\""));
    }

    #[test]
    fn course_wire_format() {
        let c: Course = serde_json::from_str(r#"{"id":2,"courseName":"Mathematics"}"#).unwrap();
        assert_eq!(c.course_name, "Mathematics");
    }

    #[test]
    fn cells_follow_column_order() {
        let s = Student {
            id: 1,
            roll_number: "R001".to_string(),
            name: "A B".to_string(),
            email: "a@b.co".to_string(),
            course_id: 1,
            course: "Physics".to_string(),
            date_of_birth: "01-01-2005".to_string(),
            phone_number: "9123456780".to_string(),
        };
        let cells = s.cells();
        assert_eq!(cells.len(), COLUMNS.len());
        assert_eq!(cells[0], "R001");
        assert_eq!(cells[4], "01-01-2005");
    }
}
