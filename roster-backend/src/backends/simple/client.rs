//! Simple `StudentBackend` trait 实现

use async_trait::async_trait;

use crate::error::Result;
use crate::traits::StudentBackend;

use super::{STUDENTS_PATH, SimpleBackend, Student, StudentDraft};

#[async_trait]
impl StudentBackend for SimpleBackend {
    type Record = Student;
    type Draft = StudentDraft;

    fn name(&self) -> &'static str {
        "simple"
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
