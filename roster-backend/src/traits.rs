use async_trait::async_trait;

use crate::error::Result;

/// Access to the server-assigned record identifier.
///
/// The id is assigned on create, unique, and immutable; the duplicate scan
/// uses it to skip the record being edited.
pub trait HasId {
    /// Server-assigned record id.
    fn id(&self) -> i64;
}

/// Student backend trait.
///
/// One implementation per REST dialect. `Record` is the full record shape the
/// backend stores and returns; `Draft` is the candidate payload assembled from
/// the form (no id; the server assigns it on create).
#[async_trait]
pub trait StudentBackend: Send + Sync {
    /// Record shape returned by the backend.
    type Record: HasId + Clone + Send + Sync;
    /// Candidate payload sent on create/update.
    type Draft: Clone + Send + Sync;

    /// Backend dialect identifier.
    fn name(&self) -> &'static str;

    /// Fetch the full record list.
    ///
    /// There is no pagination on this contract: the authoritative list is
    /// re-fetched in full for every table render and every duplicate scan.
    async fn list(&self) -> Result<Vec<Self::Record>>;

    /// Fetch a single record by id.
    async fn get(&self, id: i64) -> Result<Self::Record>;

    /// Create a record from a candidate. Returns the created record with its
    /// server-assigned id.
    async fn create(&self, draft: &Self::Draft) -> Result<Self::Record>;

    /// Replace every field of the record identified by `id` with the
    /// candidate's values.
    async fn update(&self, id: i64, draft: &Self::Draft) -> Result<Self::Record>;

    /// Delete the record identified by `id`.
    async fn delete(&self, id: i64) -> Result<()>;
}
