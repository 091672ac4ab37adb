//! Simple schema rules
//!
//! Letters-and-spaces name (unique on this schema), email, free-text course,
//! direct integer age in [16, 100].

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use roster_backend::simple::{Student, StudentDraft};

use super::{ConflictField, FormRules, ValidationError, eq_ignore_case, is_well_formed_email};

/// Minimum accepted age.
const MIN_AGE: u32 = 16;
/// Maximum accepted age.
const MAX_AGE: u32 = 100;

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z\s]+$").expect("name pattern is valid"));

/// Rule configuration for the simple schema.
pub struct Rules;

impl FormRules for Rules {
    type Record = Student;
    type Draft = StudentDraft;

    fn validate(draft: &StudentDraft, _today: NaiveDate) -> Result<(), ValidationError> {
        let name = draft.name.trim();
        let email = draft.email.trim();
        let course = draft.course.trim();

        if name.chars().count() < 2 {
            return Err(ValidationError::NameTooShort);
        }
        if !NAME_RE.is_match(name) {
            return Err(ValidationError::NameNotAlphabetic);
        }

        if email.is_empty() {
            return Err(ValidationError::EmailMissing);
        }
        if !is_well_formed_email(email) {
            return Err(ValidationError::EmailInvalid);
        }

        if course.chars().count() < 2 {
            return Err(ValidationError::CourseTooShort);
        }

        match draft.age {
            Some(age) if (MIN_AGE..=MAX_AGE).contains(&age) => Ok(()),
            _ => Err(ValidationError::AgeOutOfRange),
        }
    }

    fn find_conflict(
        draft: &StudentDraft,
        existing: &[Student],
        exclude_id: Option<i64>,
    ) -> Option<ConflictField> {
        let others = || {
            existing
                .iter()
                .filter(move |s| exclude_id != Some(s.id))
        };

        if others().any(|s| eq_ignore_case(&s.email, &draft.email)) {
            return Some(ConflictField::Email);
        }
        if others().any(|s| eq_ignore_case(&s.name, &draft.name)) {
            return Some(ConflictField::Name);
        }
        None
    }

    fn conflict_message(field: ConflictField) -> &'static str {
        match field {
            ConflictField::Email => "Student with this email already exists!",
            ConflictField::Name => "Student with this name already exists!",
            ConflictField::RollNumber => "Student with this roll number already exists!",
            ConflictField::PhoneNumber => "Student with this phone number already exists!",
        }
    }

    fn draft_of(record: &Student) -> StudentDraft {
        StudentDraft {
            name: record.name.clone(),
            email: record.email.clone(),
            course: record.course.clone(),
            age: Some(record.age),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 7).unwrap()
    }

    fn valid_draft() -> StudentDraft {
        StudentDraft {
            name: "John Smith".to_string(),
            email: "john@example.com".to_string(),
            course: "History".to_string(),
            age: Some(21),
        }
    }

    fn student(id: i64, name: &str, email: &str) -> Student {
        Student {
            id,
            name: name.to_string(),
            email: email.to_string(),
            course: "History".to_string(),
            age: 21,
        }
    }

    #[test]
    fn valid_draft_passes() {
        assert_eq!(Rules::validate(&valid_draft(), today()), Ok(()));
    }

    #[test]
    fn name_length_before_character_class() {
        let draft = StudentDraft {
            name: "7".to_string(),
            ..valid_draft()
        };
        assert_eq!(
            Rules::validate(&draft, today()),
            Err(ValidationError::NameTooShort)
        );
    }

    #[test]
    fn name_with_punctuation_rejected() {
        let draft = StudentDraft {
            name: "Anne-Marie".to_string(),
            ..valid_draft()
        };
        assert_eq!(
            Rules::validate(&draft, today()),
            Err(ValidationError::NameNotAlphabetic)
        );
    }

    #[test]
    fn spaces_in_name_accepted() {
        let draft = StudentDraft {
            name: "Mary Jane Watson".to_string(),
            ..valid_draft()
        };
        assert_eq!(Rules::validate(&draft, today()), Ok(()));
    }

    #[test]
    fn short_course_rejected() {
        let draft = StudentDraft {
            course: "H".to_string(),
            ..valid_draft()
        };
        assert_eq!(
            Rules::validate(&draft, today()),
            Err(ValidationError::CourseTooShort)
        );
    }

    #[test]
    fn age_window_boundaries() {
        for (age, ok) in [(15, false), (16, true), (100, true), (101, false)] {
            let draft = StudentDraft {
                age: Some(age),
                ..valid_draft()
            };
            assert_eq!(
                Rules::validate(&draft, today()).is_ok(),
                ok,
                "age {age} acceptance mismatch"
            );
        }
    }

    #[test]
    fn missing_age_rejected() {
        let draft = StudentDraft {
            age: None,
            ..valid_draft()
        };
        assert_eq!(
            Rules::validate(&draft, today()),
            Err(ValidationError::AgeOutOfRange)
        );
    }

    #[test]
    fn email_conflict_before_name() {
        let existing = vec![student(1, "JOHN SMITH", "JOHN@EXAMPLE.COM")];
        assert_eq!(
            Rules::find_conflict(&valid_draft(), &existing, None),
            Some(ConflictField::Email)
        );
    }

    #[test]
    fn name_conflict_case_insensitive() {
        let existing = vec![student(1, "john smith", "other@example.com")];
        assert_eq!(
            Rules::find_conflict(&valid_draft(), &existing, None),
            Some(ConflictField::Name)
        );
    }

    #[test]
    fn update_keeps_own_name_without_conflict() {
        // Record 5 is being edited and keeps its own name: not a duplicate
        // of itself.
        let existing = vec![student(5, "John Smith", "john@example.com")];
        assert_eq!(Rules::find_conflict(&valid_draft(), &existing, Some(5)), None);
    }

    #[test]
    fn draft_of_copies_every_field() {
        let record = student(3, "Jane Doe", "jane@example.com");
        let draft = Rules::draft_of(&record);
        assert_eq!(draft.name, "Jane Doe");
        assert_eq!(draft.age, Some(21));
    }
}
