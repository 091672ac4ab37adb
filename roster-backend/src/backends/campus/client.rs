//! Campus `StudentBackend` trait 实现

use async_trait::async_trait;

use crate::error::Result;
use crate::traits::StudentBackend;

use super::{COURSES_PATH, CampusBackend, Course, STUDENTS_PATH, Student, StudentDraft};

impl CampusBackend {
    /// Fetch the course catalog used to populate the course selection control.
    ///
    /// Dialect-specific: the simple backend has no course catalog.
    pub async fn list_courses(&self) -> Result<Vec<Course>> {
        self.rest.get(COURSES_PATH).await
    }
}

#[async_trait]
impl StudentBackend for CampusBackend {
    type Record = Student;
    type Draft = StudentDraft;

    fn name(&self) -> &'static str {
        "campus"
    }

    async fn list(&self) -> Result<Vec<Student>> {
        self.rest.get(STUDENTS_PATH).await
    }

    async fn get(&self, id: i64) -> Result<Student> {
        self.rest
            .get_by_id(&format!("{STUDENTS_PATH}/{id}"), id)
            .await
    }

    async fn create(&self, draft: &StudentDraft) -> Result<Student> {
        self.rest.post(STUDENTS_PATH, draft).await
    }

    async fn update(&self, id: i64, draft: &StudentDraft) -> Result<Student> {
        self.rest
            .put(&format!("{STUDENTS_PATH}/{id}"), id, draft)
            .await
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.rest
            .delete(&format!("{STUDENTS_PATH}/{id}"), id)
            .await
    }
}
