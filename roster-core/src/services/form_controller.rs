//! Record form controller
//!
//! Owns the create/edit mode and sequences the add/edit/delete lifecycle
//! against the backend: validate, duplicate-scan, mutate, reload.

use std::marker::PhantomData;

use chrono::NaiveDate;
use roster_backend::{HasId, StudentBackend};

use crate::error::{CoreError, CoreResult};
use crate::rules::FormRules;

/// What a submit performs.
///
/// Replaces the ambient boolean editing flag: the id of the record being
/// edited travels with the mode, so there is never ambiguity about which
/// record a `PUT` will target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    /// Submit creates a new record (`POST`).
    Create,
    /// Submit replaces the record with this id (`PUT .../{id}`).
    Editing(i64),
}

/// Result of a successful submit.
#[derive(Debug, Clone)]
pub struct SubmitOutcome<R> {
    /// The record as stored by the backend (with its server-assigned id).
    pub saved: R,
    /// The reloaded record list, ready for re-rendering.
    pub roster: Vec<R>,
    /// `true` for a create, `false` for an update.
    pub created: bool,
}

/// Result of a delete request.
#[derive(Debug, Clone)]
pub enum RemoveOutcome<R> {
    /// The record was deleted; carries the reloaded list.
    Removed(Vec<R>),
    /// The user did not confirm; nothing was sent.
    Cancelled,
}

/// Record form controller over one schema configuration.
///
/// `R` supplies the rule set, `B` the backend dialect; the two are tied
/// together on the record and candidate types.
pub struct FormController<R, B>
where
    R: FormRules,
    B: StudentBackend<Record = R::Record, Draft = R::Draft>,
{
    backend: B,
    mode: FormMode,
    in_flight: bool,
    _rules: PhantomData<R>,
}

impl<R, B> FormController<R, B>
where
    R: FormRules,
    B: StudentBackend<Record = R::Record, Draft = R::Draft>,
{
    /// Create a controller in create mode.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            mode: FormMode::Create,
            in_flight: false,
            _rules: PhantomData,
        }
    }

    /// The backend handle (for dialect-specific calls such as the course
    /// catalog).
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Current form mode.
    #[must_use]
    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// Whether a submission is currently in flight.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.in_flight
    }

    /// Reset to create mode (the clear-form action).
    pub fn reset(&mut self) {
        self.mode = FormMode::Create;
    }

    /// Fetch the full record list for rendering.
    pub async fn load(&self) -> CoreResult<Vec<R::Record>> {
        Ok(self.backend.list().await?)
    }

    /// Begin editing the record with `id`: fetch it, switch to edit mode and
    /// return the candidate that populates the form fields.
    pub async fn start_edit(&mut self, id: i64) -> CoreResult<R::Draft> {
        let record = self.backend.get(id).await?;
        self.mode = FormMode::Editing(record.id());
        Ok(R::draft_of(&record))
    }

    /// Validate and submit the candidate, creating or updating according to
    /// the current mode.
    ///
    /// Sequencing:
    /// 1. refuse while a prior submission is in flight (no network call);
    /// 2. run the ordered field rules; a failure aborts before any network
    ///    call;
    /// 3. re-fetch the record list and scan for duplicates. A detected
    ///    conflict aborts with its field-specific message. A *transport*
    ///    failure of the scan itself is logged and swallowed: conflict
    ///    detection then falls to the backend;
    /// 4. issue the create/update;
    /// 5. on success reset to create mode and reload the list.
    ///
    /// On a mutation failure the mode is kept, so the form stays in its edit
    /// state for another attempt.
    pub async fn submit(
        &mut self,
        draft: R::Draft,
        today: NaiveDate,
    ) -> CoreResult<SubmitOutcome<R::Record>> {
        if self.in_flight {
            return Err(CoreError::SubmitInFlight);
        }
        R::validate(&draft, today).map_err(CoreError::Validation)?;

        self.in_flight = true;
        let result = self.submit_checked(&draft).await;
        self.in_flight = false;
        result
    }

    async fn submit_checked(&mut self, draft: &R::Draft) -> CoreResult<SubmitOutcome<R::Record>> {
        let exclude_id = match self.mode {
            FormMode::Create => None,
            FormMode::Editing(id) => Some(id),
        };

        match self.backend.list().await {
            Ok(existing) => {
                if let Some(field) = R::find_conflict(draft, &existing, exclude_id) {
                    return Err(CoreError::Conflict {
                        field,
                        message: R::conflict_message(field).to_string(),
                    });
                }
            }
            Err(e) => {
                // The scan is advisory; the backend still enforces uniqueness.
                log::warn!("[{}] duplicate check skipped: {e}", self.backend.name());
            }
        }

        let (saved, created) = match self.mode {
            FormMode::Create => (self.backend.create(draft).await?, true),
            FormMode::Editing(id) => (self.backend.update(id, draft).await?, false),
        };

        self.mode = FormMode::Create;
        let roster = self.backend.list().await?;
        Ok(SubmitOutcome {
            saved,
            roster,
            created,
        })
    }

    /// Delete the record with `id`.
    ///
    /// Refuses without confirmation; on success returns the reloaded list.
    pub async fn remove(&mut self, id: i64, confirmed: bool) -> CoreResult<RemoveOutcome<R::Record>> {
        if !confirmed {
            return Ok(RemoveOutcome::Cancelled);
        }
        self.backend.delete(id).await?;
        let roster = self.backend.list().await?;
        Ok(RemoveOutcome::Removed(roster))
    }
}

#[cfg(all(test, feature = "campus", feature = "simple"))]
mod tests {
    use super::*;
    use crate::error::BackendError;
    use crate::rules::{ConflictField, ValidationError, campus, simple};
    use crate::test_utils::{campus_backend, simple_backend, simple_student};
    use roster_backend::campus::StudentDraft as CampusDraft;
    use roster_backend::simple::StudentDraft as SimpleDraft;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 7).unwrap()
    }

    fn campus_draft() -> CampusDraft {
        CampusDraft {
            roll_number: "CS101".to_string(),
            name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
            course_id: Some(1),
            date_of_birth: "2004-02-14".to_string(),
            phone_number: "9876543210".to_string(),
        }
    }

    fn simple_draft() -> SimpleDraft {
        SimpleDraft {
            name: "John Smith".to_string(),
            email: "john@example.com".to_string(),
            course: "History".to_string(),
            age: Some(21),
        }
    }

    #[tokio::test]
    async fn create_resets_mode_and_reloads() {
        let mut ctl = FormController::<campus::Rules, _>::new(campus_backend());

        let outcome = ctl.submit(campus_draft(), today()).await.unwrap();

        assert!(outcome.created);
        assert_eq!(outcome.saved.roll_number, "CS101");
        // The backend stores its own display format.
        assert_eq!(outcome.saved.date_of_birth, "14-02-2004");
        assert_eq!(outcome.roster.len(), 1);
        assert_eq!(ctl.mode(), FormMode::Create);
        assert!(!ctl.is_busy());
    }

    #[tokio::test]
    async fn validation_failure_makes_no_network_call() {
        let mut ctl = FormController::<simple::Rules, _>::new(simple_backend());

        let draft = SimpleDraft {
            age: Some(150),
            ..simple_draft()
        };
        let err = ctl.submit(draft, today()).await.unwrap_err();

        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::AgeOutOfRange)
        ));
        assert_eq!(ctl.backend().list_call_count(), 0);
        assert_eq!(ctl.backend().mutation_call_count(), 0);
    }

    #[tokio::test]
    async fn duplicate_email_blocks_before_mutation() {
        let backend = simple_backend();
        backend
            .seed(vec![simple_student(1, "Existing", "a@b.com")])
            .await;
        let mut ctl = FormController::<simple::Rules, _>::new(backend);

        let draft = SimpleDraft {
            email: "A@B.COM".to_string(),
            ..simple_draft()
        };
        let err = ctl.submit(draft, today()).await.unwrap_err();

        assert!(matches!(
            err,
            CoreError::Conflict {
                field: ConflictField::Email,
                ..
            }
        ));
        assert_eq!(err.to_string(), "Student with this email already exists!");
        assert_eq!(ctl.backend().mutation_call_count(), 0);
    }

    #[tokio::test]
    async fn update_does_not_conflict_with_itself() {
        let backend = simple_backend();
        backend
            .seed(vec![simple_student(5, "Alice", "alice@example.com")])
            .await;
        let mut ctl = FormController::<simple::Rules, _>::new(backend);

        // Edit record 5 and keep every field, including the unique name.
        let draft = ctl.start_edit(5).await.unwrap();
        assert_eq!(ctl.mode(), FormMode::Editing(5));

        let outcome = ctl.submit(draft, today()).await.unwrap();
        assert!(!outcome.created);
        assert_eq!(outcome.saved.name, "Alice");
        assert_eq!(outcome.roster.len(), 1);
    }

    #[tokio::test]
    async fn edit_round_trip_reissues_record_unchanged() {
        let mut ctl = FormController::<campus::Rules, _>::new(campus_backend());
        let original = ctl.submit(campus_draft(), today()).await.unwrap().saved;

        let draft = ctl.start_edit(original.id).await.unwrap();
        // The form is populated in ISO format.
        assert_eq!(draft.date_of_birth, "2004-02-14");

        let outcome = ctl.submit(draft, today()).await.unwrap();
        assert_eq!(outcome.saved, original);
    }

    #[tokio::test]
    async fn duplicate_scan_transport_failure_is_swallowed() {
        let backend = campus_backend();
        backend.fail_next_lists(1);
        let mut ctl = FormController::<campus::Rules, _>::new(backend);

        // The scan's list call fails, the create still goes through and the
        // reload afterwards succeeds.
        let outcome = ctl.submit(campus_draft(), today()).await.unwrap();
        assert!(outcome.created);
        assert_eq!(ctl.backend().mutation_call_count(), 1);
    }

    #[tokio::test]
    async fn mutation_failure_keeps_edit_mode() {
        let backend = simple_backend();
        backend
            .seed(vec![simple_student(5, "Alice", "alice@example.com")])
            .await;
        let mut ctl = FormController::<simple::Rules, _>::new(backend);

        let draft = ctl.start_edit(5).await.unwrap();
        ctl.backend().fail_next_mutations(1);

        let err = ctl.submit(draft, today()).await.unwrap_err();
        assert!(matches!(err, CoreError::Backend(_)));
        // The form stays in edit state for another attempt.
        assert_eq!(ctl.mode(), FormMode::Editing(5));
        assert!(!ctl.is_busy());

        // An explicit reset clears the edit state.
        ctl.reset();
        assert_eq!(ctl.mode(), FormMode::Create);
    }

    #[tokio::test]
    async fn submit_refused_while_in_flight() {
        let mut ctl = FormController::<simple::Rules, _>::new(simple_backend());
        ctl.in_flight = true;

        let err = ctl.submit(simple_draft(), today()).await.unwrap_err();
        assert!(matches!(err, CoreError::SubmitInFlight));
        assert_eq!(ctl.backend().list_call_count(), 0);
        assert_eq!(ctl.backend().mutation_call_count(), 0);
    }

    #[tokio::test]
    async fn remove_requires_confirmation() {
        let backend = simple_backend();
        backend
            .seed(vec![simple_student(1, "Alice", "alice@example.com")])
            .await;
        let mut ctl = FormController::<simple::Rules, _>::new(backend);

        let outcome = ctl.remove(1, false).await.unwrap();
        assert!(matches!(outcome, RemoveOutcome::Cancelled));
        assert_eq!(ctl.backend().mutation_call_count(), 0);

        match ctl.remove(1, true).await.unwrap() {
            RemoveOutcome::Removed(roster) => assert!(roster.is_empty()),
            RemoveOutcome::Cancelled => panic!("expected removal"),
        }
    }

    #[tokio::test]
    async fn remove_missing_record_reports_not_found() {
        let mut ctl = FormController::<simple::Rules, _>::new(simple_backend());
        let err = ctl.remove(99, true).await.unwrap_err();
        assert!(matches!(
            err,
            CoreError::Backend(BackendError::NotFound { id: 99, .. })
        ));
    }

    #[tokio::test]
    async fn start_edit_missing_record_reports_not_found() {
        let mut ctl = FormController::<campus::Rules, _>::new(campus_backend());
        let err = ctl.start_edit(42).await.unwrap_err();
        assert!(matches!(
            err,
            CoreError::Backend(BackendError::NotFound { id: 42, .. })
        ));
        assert_eq!(ctl.mode(), FormMode::Create);
    }
}
