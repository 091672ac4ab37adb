//! Campus backend dialect
//!
//! The full-schema dialect: roll numbers, a course catalog served by the
//! backend, birth dates and phone numbers.

mod client;
mod types;

use crate::http::RestClient;

pub use types::{COLUMNS, Course, Student, StudentDraft};

/// Default base URL of the campus backend.
pub const DEFAULT_BASE_URL: &str = "http://localhost:7000";

pub(crate) const STUDENTS_PATH: &str = "/api/students";
pub(crate) const COURSES_PATH: &str = "/api/courses";

/// Campus backend client.
pub struct CampusBackend {
    pub(crate) rest: RestClient,
}

impl CampusBackend {
    /// Create a client against the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            rest: RestClient::new(base_url, "campus"),
        }
    }
}

impl Default for CampusBackend {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
