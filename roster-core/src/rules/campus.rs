//! Campus schema rules
//!
//! Roll number, digit-free name, email, catalog course, birth date with a
//! derived-age window of [16, 30], and a 10-digit phone number that cannot
//! start with 0.

use chrono::NaiveDate;
use roster_backend::campus::{Student, StudentDraft};

use super::{ConflictField, FormRules, ValidationError, age_on, eq_ignore_case, is_well_formed_email};

/// Minimum accepted derived age.
const MIN_AGE: i32 = 16;
/// Maximum accepted derived age.
const MAX_AGE: i32 = 30;
/// Width of the birth-date window offered by the date control, in years.
const BIRTH_WINDOW_YEARS: i32 = 30;

/// Rule configuration for the campus schema.
pub struct Rules;

impl FormRules for Rules {
    type Record = Student;
    type Draft = StudentDraft;

    fn validate(draft: &StudentDraft, today: NaiveDate) -> Result<(), ValidationError> {
        let roll_number = draft.roll_number.trim();
        let name = draft.name.trim();
        let email = draft.email.trim();
        let date_of_birth = draft.date_of_birth.trim();
        let phone_number = draft.phone_number.trim();

        if roll_number.chars().count() < 3 {
            return Err(ValidationError::RollNumberTooShort);
        }

        if name.chars().count() < 2 {
            return Err(ValidationError::NameTooShort);
        }
        if name.chars().any(|c| c.is_ascii_digit()) {
            return Err(ValidationError::NameContainsDigits);
        }

        if email.is_empty() {
            return Err(ValidationError::EmailMissing);
        }
        if !is_well_formed_email(email) {
            return Err(ValidationError::EmailInvalid);
        }

        if draft.course_id.is_none() {
            return Err(ValidationError::CourseNotSelected);
        }

        if date_of_birth.is_empty() {
            return Err(ValidationError::DateOfBirthMissing);
        }
        // The form control only produces ISO dates; anything else counts as
        // no date at all.
        let birth = NaiveDate::parse_from_str(date_of_birth, "%Y-%m-%d")
            .map_err(|_| ValidationError::DateOfBirthMissing)?;
        let age = age_on(birth, today);
        if !(MIN_AGE..=MAX_AGE).contains(&age) {
            return Err(ValidationError::BirthDateOutOfRange);
        }

        if phone_number.is_empty() {
            return Err(ValidationError::PhoneMissing);
        }
        if !is_valid_phone(phone_number) {
            return Err(ValidationError::PhoneInvalid);
        }

        Ok(())
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

        if others().any(|s| eq_ignore_case(&s.roll_number, &draft.roll_number)) {
            return Some(ConflictField::RollNumber);
        }
        if others().any(|s| eq_ignore_case(&s.email, &draft.email)) {
            return Some(ConflictField::Email);
        }
        if others().any(|s| s.phone_number == draft.phone_number) {
            return Some(ConflictField::PhoneNumber);
        }
        None
    }

    fn conflict_message(field: ConflictField) -> &'static str {
        match field {
            ConflictField::RollNumber => {
                "Roll number already exists. Please use a different roll number."
            }
            ConflictField::Email => "Email already exists. Please use a different email address.",
            ConflictField::PhoneNumber => {
                "Phone number already exists. Please use a different phone number."
            }
            ConflictField::Name => "Name already exists. Please use a different name.",
        }
    }

    fn draft_of(record: &Student) -> StudentDraft {
        StudentDraft {
            roll_number: record.roll_number.clone(),
            name: record.name.clone(),
            email: record.email.clone(),
            course_id: Some(record.course_id),
            date_of_birth: to_form_date(&record.date_of_birth),
            phone_number: record.phone_number.clone(),
        }
    }
}

/// Exactly 10 ASCII digits, first digit 1-9.
fn is_valid_phone(phone: &str) -> bool {
    let mut chars = phone.chars();
    phone.len() == 10
        && chars.next().is_some_and(|c| ('1'..='9').contains(&c))
        && chars.all(|c| c.is_ascii_digit())
}

/// Live name-field sanitization: strip digit characters as they are typed.
///
/// Reactive, not rejecting: pasted digits are removed after insertion.
#[must_use]
pub fn sanitize_name_input(value: &str) -> String {
    value.chars().filter(|c| !c.is_ascii_digit()).collect()
}

/// Live phone-field sanitization.
///
/// Strips non-digits, then drops a single leading `'0'`, then truncates to
/// 10 characters. The order is observable: stripping happens before the
/// truncation, so a leading zero costs one digit of capacity.
#[must_use]
pub fn sanitize_phone_input(value: &str) -> String {
    let mut digits: String = value.chars().filter(char::is_ascii_digit).collect();
    if digits.starts_with('0') {
        digits.remove(0);
    }
    digits.truncate(10);
    digits
}

/// The birth-date window the date control offers: from 30 years before
/// `today` up to `today` itself.
#[must_use]
pub fn birth_date_bounds(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    use chrono::Datelike;
    let min = NaiveDate::from_ymd_opt(
        today.year() - BIRTH_WINDOW_YEARS,
        today.month(),
        today.day(),
    )
    // Feb 29 thirty years back may not exist; the control rolls over to
    // March 1 in that case.
    .or_else(|| NaiveDate::from_ymd_opt(today.year() - BIRTH_WINDOW_YEARS, 3, 1))
    .unwrap_or(today);
    (min, today)
}

/// Convert the backend's `dd-mm-yyyy` display date to the form's ISO
/// `yyyy-mm-dd`. A value not shaped like three `-`-separated parts is passed
/// through unchanged.
#[must_use]
pub fn to_form_date(server_date: &str) -> String {
    let parts: Vec<&str> = server_date.split('-').collect();
    match parts.as_slice() {
        [day, month, year] => format!("{year}-{month}-{day}"),
        _ => server_date.to_string(),
    }
}
