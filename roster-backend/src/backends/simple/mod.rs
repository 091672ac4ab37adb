//! Simple backend dialect
//!
//! The reduced-schema dialect: free-text course, direct integer age, no roll
//! numbers and no course catalog.

mod client;
mod types;

use crate::http::RestClient;

pub use types::{COLUMNS, Student, StudentDraft};

/// Default base URL of the simple backend.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

pub(crate) const STUDENTS_PATH: &str = "/api/students";

/// Simple backend client.
pub struct SimpleBackend {
    pub(crate) rest: RestClient,
}

impl SimpleBackend {
    /// Create a client against the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            rest: RestClient::new(base_url, "simple"),
        }
    }
}

impl Default for SimpleBackend {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
