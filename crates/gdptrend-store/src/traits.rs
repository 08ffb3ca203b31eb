//! The `RecordStore` gateway trait.

use async_trait::async_trait;
use gdptrend_core::{GdpRecord, RecordDraft, RecordId, Result};

/// Gateway to a GDP record collection.
///
/// Implementations are `Send + Sync` and object-safe so callers hold an
/// `Arc<dyn RecordStore>` chosen at startup.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Inserts a validated draft and returns the stored record with its
    /// store-assigned id.
    ///
    /// Fails with [`Error::DuplicateYear`](gdptrend_core::Error::DuplicateYear)
    /// if any existing record shares the draft's `year`, regardless of its
    /// value or country. For HTTP backends the check and the insert are two
    /// independent calls; a concurrent creator can race past the check.
    async fn create(&self, draft: RecordDraft) -> Result<GdpRecord>;

    /// Overwrites only the `value` field of the record at `id`.
    ///
    /// Rejects non-positive or non-finite values with a validation error
    /// before touching the backend; the stored record is never mutated on
    /// rejection. `year` and `country` are not editable through this path.
    async fn update_value(&self, id: &RecordId, value: f64) -> Result<GdpRecord>;

    /// Removes the record at `id`.
    ///
    /// Deleting an unknown id fails with
    /// [`Error::NotFound`](gdptrend_core::Error::NotFound), never a silent
    /// success.
    async fn delete(&self, id: &RecordId) -> Result<()>;

    /// All records, ordered ascending by `year`.
    async fn list(&self) -> Result<Vec<GdpRecord>>;

    /// Equality query on `year`, backing [`create`](Self::create)'s
    /// duplicate-year check.
    async fn find_by_year(&self, year: i32) -> Result<Option<GdpRecord>>;
}
