//! Test helper module
//!
//! Provides an in-memory mock backend and convenient factory methods.

use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};

use async_trait::async_trait;
use roster_backend::{BackendError, HasId, StudentBackend};
use tokio::sync::RwLock;

#[cfg(feature = "campus")]
use roster_backend::campus;
#[cfg(feature = "simple")]
use roster_backend::simple;

type BackendResult<T> = roster_backend::Result<T>;

/// In-memory mock backend.
///
/// Stores records behind an `RwLock`, assigns monotonic ids, and lets tests
/// inject transport failures for the next N list or mutation calls.
pub struct InMemoryBackend<R, D> {
    name: &'static str,
    records: RwLock<Vec<R>>,
    next_id: AtomicI64,
    /// How the backend would materialize a stored record from a candidate.
    materialize: fn(i64, &D) -> R,
    fail_lists: AtomicUsize,
    fail_mutations: AtomicUsize,
    list_calls: AtomicUsize,
    mutation_calls: AtomicUsize,
}

impl<R: HasId + Clone, D> InMemoryBackend<R, D> {
    pub fn new(name: &'static str, materialize: fn(i64, &D) -> R) -> Self {
        Self {
            name,
            records: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(1),
            materialize,
            fail_lists: AtomicUsize::new(0),
            fail_mutations: AtomicUsize::new(0),
            list_calls: AtomicUsize::new(0),
            mutation_calls: AtomicUsize::new(0),
        }
    }

    /// Preload records, advancing the id counter past the largest seeded id.
    pub async fn seed(&self, records: Vec<R>) {
        let max_id = records.iter().map(HasId::id).max().unwrap_or(0);
        self.next_id.store(max_id + 1, Ordering::SeqCst);
        *self.records.write().await = records;
    }

    /// Fail the next `n` list calls with a network error.
    pub fn fail_next_lists(&self, n: usize) {
        self.fail_lists.store(n, Ordering::SeqCst);
    }

    /// Fail the next `n` create/update/delete calls with a network error.
    pub fn fail_next_mutations(&self, n: usize) {
        self.fail_mutations.store(n, Ordering::SeqCst);
    }

    pub fn list_call_count(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn mutation_call_count(&self) -> usize {
        self.mutation_calls.load(Ordering::SeqCst)
    }

    fn network_error(&self) -> BackendError {
        BackendError::NetworkError {
            backend: self.name.to_string(),
            detail: "injected failure".to_string(),
        }
    }

    fn not_found(&self, id: i64) -> BackendError {
        BackendError::NotFound {
            backend: self.name.to_string(),
            id,
            raw_message: None,
        }
    }

    fn take_failure(&self, counter: &AtomicUsize) -> bool {
        if counter.load(Ordering::SeqCst) > 0 {
            counter.fetch_sub(1, Ordering::SeqCst);
            true
        } else {
            false
        }
    }
}

#[async_trait]
impl<R, D> StudentBackend for InMemoryBackend<R, D>
where
    R: HasId + Clone + Send + Sync,
    D: Clone + Send + Sync,
{
    type Record = R;
    type Draft = D;

    fn name(&self) -> &'static str {
        self.name
    }

    async fn list(&self) -> BackendResult<Vec<R>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.take_failure(&self.fail_lists) {
            return Err(self.network_error());
        }
        Ok(self.records.read().await.clone())
    }

    async fn get(&self, id: i64) -> BackendResult<R> {
        self.records
            .read()
            .await
            .iter()
            .find(|r| r.id() == id)
            .cloned()
            .ok_or_else(|| self.not_found(id))
    }

    async fn create(&self, draft: &D) -> BackendResult<R> {
        self.mutation_calls.fetch_add(1, Ordering::SeqCst);
        if self.take_failure(&self.fail_mutations) {
            return Err(self.network_error());
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let record = (self.materialize)(id, draft);
        self.records.write().await.push(record.clone());
        Ok(record)
    }

    async fn update(&self, id: i64, draft: &D) -> BackendResult<R> {
        self.mutation_calls.fetch_add(1, Ordering::SeqCst);
        if self.take_failure(&self.fail_mutations) {
            return Err(self.network_error());
        }
        let mut records = self.records.write().await;
        let Some(slot) = records.iter_mut().find(|r| r.id() == id) else {
            return Err(self.not_found(id));
        };
        let record = (self.materialize)(id, draft);
        *slot = record.clone();
        Ok(record)
    }

    async fn delete(&self, id: i64) -> BackendResult<()> {
        self.mutation_calls.fetch_add(1, Ordering::SeqCst);
        if self.take_failure(&self.fail_mutations) {
            return Err(self.network_error());
        }
        let mut records = self.records.write().await;
        let Some(pos) = records.iter().position(|r| r.id() == id) else {
            return Err(self.not_found(id));
        };
        records.remove(pos);
        Ok(())
    }
}

// ===== Factory methods =====

/// Course catalog the campus mock resolves display names from.
#[cfg(feature = "campus")]
const COURSES: [(i64, &str); 3] = [
    (1, "Computer Science"),
    (2, "Mathematics"),
    (3, "Physics"),
];

/// Mock campus backend, materializing records the way the real backend does:
/// display date format and a resolved course name.
#[cfg(feature = "campus")]
pub fn campus_backend() -> InMemoryBackend<campus::Student, campus::StudentDraft> {
    InMemoryBackend::new("campus", materialize_campus)
}

#[cfg(feature = "campus")]
fn materialize_campus(id: i64, draft: &campus::StudentDraft) -> campus::Student {
    let course_id = draft.course_id.unwrap_or_default();
    let course = COURSES
        .iter()
        .find(|(cid, _)| *cid == course_id)
        .map_or("Unknown", |(_, name)| name);
    campus::Student {
        id,
        roll_number: draft.roll_number.clone(),
        name: draft.name.clone(),
        email: draft.email.clone(),
        course_id,
        course: course.to_string(),
        date_of_birth: to_server_date(&draft.date_of_birth),
        phone_number: draft.phone_number.clone(),
    }
}

/// ISO `yyyy-mm-dd` to the backend's display format `dd-mm-yyyy`.
#[cfg(feature = "campus")]
fn to_server_date(iso: &str) -> String {
    let parts: Vec<&str> = iso.split('-').collect();
    match parts.as_slice() {
        [year, month, day] => format!("{day}-{month}-{year}"),
        _ => iso.to_string(),
    }
}

/// Mock simple backend.
#[cfg(feature = "simple")]
pub fn simple_backend() -> InMemoryBackend<simple::Student, simple::StudentDraft> {
    InMemoryBackend::new("simple", materialize_simple)
}

#[cfg(feature = "simple")]
fn materialize_simple(id: i64, draft: &simple::StudentDraft) -> simple::Student {
    simple::Student {
        id,
        name: draft.name.clone(),
        email: draft.email.clone(),
        course: draft.course.clone(),
        age: draft.age.unwrap_or_default(),
    }
}

/// A simple-schema record for seeding.
#[cfg(feature = "simple")]
pub fn simple_student(id: i64, name: &str, email: &str) -> simple::Student {
    simple::Student {
        id,
        name: name.to_string(),
        email: email.to_string(),
        course: "History".to_string(),
        age: 21,
    }
}
