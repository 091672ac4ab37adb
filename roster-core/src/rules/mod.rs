//! Field rule sets for the two record schemas
//!
//! Each schema is one configuration of the same abstraction: an ordered
//! validation rule list plus a duplicate-key set over the existing records.
//! Rule order is part of the contract: the first failing rule decides the
//! single message the user sees, exactly as the forms always behaved.

#[cfg(feature = "campus")]
pub mod campus;

#[cfg(feature = "simple")]
pub mod simple;

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use roster_backend::HasId;
use serde::Serialize;

/// `local@domain.tld`: no whitespace or extra `@`, at least one `.` after
/// the `@`.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// A field rule rejection.
///
/// `Display` yields the exact user-facing message for the rule; the enum
/// covers the union of both schemas' rule sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ValidationError {
    RollNumberTooShort,
    NameTooShort,
    /// Campus schema: names may not contain digit characters.
    NameContainsDigits,
    /// Simple schema: names are letters and spaces only.
    NameNotAlphabetic,
    EmailMissing,
    EmailInvalid,
    /// Campus schema: no entry picked in the course catalog.
    CourseNotSelected,
    /// Simple schema: free-text course shorter than 2 characters.
    CourseTooShort,
    DateOfBirthMissing,
    /// Campus schema: age derived from the birth date is outside [16, 30].
    BirthDateOutOfRange,
    /// Simple schema: age field empty or outside [16, 100].
    AgeOutOfRange,
    PhoneMissing,
    PhoneInvalid,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            Self::RollNumberTooShort => "Roll number must be at least 3 characters long",
            Self::NameTooShort => "Name must be at least 2 characters long",
            Self::NameContainsDigits => "Name should not contain numbers",
            Self::NameNotAlphabetic => "Name should contain only letters and spaces",
            Self::EmailMissing => "Email is required",
            Self::EmailInvalid => "Please enter a valid email address",
            Self::CourseNotSelected => "Please select a course",
            Self::CourseTooShort => "Course name must be at least 2 characters long",
            Self::DateOfBirthMissing => "Date of birth is required",
            Self::BirthDateOutOfRange => "Student age must be between 16 and 30 years",
            Self::AgeOutOfRange => "Age must be between 16 and 100",
            Self::PhoneMissing => "Phone number is required",
            Self::PhoneInvalid => "Phone number must be exactly 10 digits and cannot start with 0",
        };
        f.write_str(message)
    }
}

/// The field on which a uniqueness rule was violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ConflictField {
    RollNumber,
    Email,
    PhoneNumber,
    Name,
}

impl std::fmt::Display for ConflictField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RollNumber => write!(f, "roll number"),
            Self::Email => write!(f, "email"),
            Self::PhoneNumber => write!(f, "phone number"),
            Self::Name => write!(f, "name"),
        }
    }
}

/// One schema's rule configuration: ordered field validation, duplicate-key
/// scan, and the form population mapping.
pub trait FormRules {
    /// Record shape of the schema's backend.
    type Record: HasId + Clone + Send + Sync;
    /// Candidate shape assembled from the form.
    type Draft: Clone + Send + Sync;

    /// Evaluate the ordered rule list against the candidate. The first
    /// failing rule aborts with its message; later failures stay unreported.
    fn validate(draft: &Self::Draft, today: NaiveDate) -> Result<(), ValidationError>;

    /// Linear duplicate scan over the full existing record set.
    ///
    /// Pure: no network, no state. Reports the first violated uniqueness
    /// rule in the schema's fixed order. The record bearing `exclude_id`
    /// (the one being edited) never conflicts with itself.
    fn find_conflict(
        draft: &Self::Draft,
        existing: &[Self::Record],
        exclude_id: Option<i64>,
    ) -> Option<ConflictField>;

    /// User-facing message for a conflict on `field`.
    fn conflict_message(field: ConflictField) -> &'static str;

    /// Populate a candidate from a fetched record (the edit-form fill).
    fn draft_of(record: &Self::Record) -> Self::Draft;
}

/// Whether `email` is well-formed: `local@domain.tld`, no whitespace,
/// at least one `.` after the `@`.
#[must_use]
pub fn is_well_formed_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Completed-birthdays age on `today`.
///
/// `today.year - birth.year`, minus one when the month/day pair has not been
/// reached yet. Compares month then day without normalizing for month
/// lengths, the standard approximation, kept intentionally.
#[must_use]
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

/// Case-insensitive string equality, matching how the forms compare
/// duplicate keys.
pub(crate) fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn email_accepts_plain_address() {
        assert!(is_well_formed_email("a@b.com"));
        assert!(is_well_formed_email("first.last@sub.domain.org"));
    }

    #[test]
    fn email_rejects_missing_parts() {
        assert!(!is_well_formed_email(""));
        assert!(!is_well_formed_email("a@b"));
        assert!(!is_well_formed_email("a.b.com"));
        assert!(!is_well_formed_email("a @b.com"));
        assert!(!is_well_formed_email("a@b@c.com"));
    }

    #[test]
    fn age_counts_completed_birthdays() {
        assert_eq!(age_on(date(2000, 6, 15), date(2020, 6, 15)), 20);
        assert_eq!(age_on(date(2000, 6, 15), date(2020, 6, 14)), 19);
        assert_eq!(age_on(date(2000, 6, 15), date(2020, 6, 16)), 20);
    }

    #[test]
    fn age_sixteen_boundary() {
        // Exactly 16 years before today: accepted age 16.
        assert_eq!(age_on(date(2009, 8, 7), date(2025, 8, 7)), 16);
        // One day short of 16 years: still 15.
        assert_eq!(age_on(date(2009, 8, 8), date(2025, 8, 7)), 15);
    }

    #[test]
    fn case_insensitive_equality() {
        assert!(eq_ignore_case("A@B.COM", "a@b.com"));
        assert!(!eq_ignore_case("a@b.com", "a@b.org"));
    }
}
