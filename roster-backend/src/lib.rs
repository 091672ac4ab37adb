//! # roster-backend
//!
//! A unified student-roster backend abstraction library covering the two
//! REST dialects the roster applications speak.
//!
//! ## Supported Backends
//!
//! | Backend | Feature Flag | Record Shape |
//! |---------|-------------|--------------|
//! | Campus | `campus` | roll number, email, course catalog id, birth date, phone |
//! | Simple | `simple` | name, email, free-text course, age |
//!
//! ## Feature Flags
//!
//! - **`all-backends`** *(default)* — Enable both dialects.
//! - **`campus`** — Enable only the campus dialect.
//! - **`simple`** — Enable only the simple dialect.
//!
//! ## REST Contract
//!
//! Both dialects expose the same unpaginated endpoints:
//!
//! - `GET /api/students` — full record list
//! - `GET /api/students/{id}` — single record or 404
//! - `POST /api/students` — create from a candidate (no id)
//! - `PUT /api/students/{id}` — full replacement of the record's fields
//! - `DELETE /api/students/{id}`
//!
//! The campus dialect additionally serves `GET /api/courses` (the catalog
//! behind the course selection control).
//!
//! Non-2xx responses may carry a structured body `{ "error": "..." }`; when
//! present that message is surfaced to the user verbatim via
//! [`BackendError::Rejected`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use roster_backend::{StudentBackend, campus::CampusBackend};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let backend = CampusBackend::default();
//!     for student in backend.list().await? {
//!         println!("{} <{}>", student.name, student.email);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, BackendError>`](BackendError). There is
//! no automatic retry, timeout or cancellation: each call either completes or
//! surfaces its failure for a manual retry.

mod backends;
mod error;
mod http;
mod traits;

// Re-export error types
pub use error::{BackendError, Result};

// Re-export core traits
pub use traits::{HasId, StudentBackend};

// Re-export concrete backends (behind feature flags)
#[cfg(feature = "campus")]
pub use backends::campus;

#[cfg(feature = "simple")]
pub use backends::simple;
