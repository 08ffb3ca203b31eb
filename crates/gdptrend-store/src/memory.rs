//! In-memory record store for tests and local development.

use crate::traits::RecordStore;
use async_trait::async_trait;
use gdptrend_core::validate::ensure_positive_value;
use gdptrend_core::{Error, GdpRecord, RecordDraft, RecordId, Result};
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-process store backed by a `HashMap` under an async `RwLock`.
///
/// Unlike the HTTP backend, `create` here holds the write lock across the
/// uniqueness check and the insert, so the one-record-per-year invariant
/// cannot be raced.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<RecordId, GdpRecord>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn mint_id() -> RecordId {
        // Uuid::new_v4 never renders to an empty string.
        RecordId::new(Uuid::new_v4().to_string()).unwrap_or_else(|| {
            unreachable!("UUID v4 display form is non-empty")
        })
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn create(&self, draft: RecordDraft) -> Result<GdpRecord> {
        let mut records = self.records.write().await;

        if records.values().any(|r| r.year == draft.year) {
            tracing::debug!(year = draft.year, "rejected duplicate-year create");
            return Err(Error::DuplicateYear { year: draft.year });
        }

        let id = Self::mint_id();
        let record = GdpRecord::from_draft(id.clone(), draft);
        records.insert(id, record.clone());

        tracing::debug!(id = %record.id, year = record.year, "record created");
        Ok(record)
    }

    async fn update_value(&self, id: &RecordId, value: f64) -> Result<GdpRecord> {
        ensure_positive_value(value)?;

        let mut records = self.records.write().await;
        let record = records
            .get_mut(id)
            .ok_or_else(|| Error::not_found(id.as_str()))?;

        record.value = value;
        tracing::debug!(id = %id, value, "record value updated");
        Ok(record.clone())
    }

    async fn delete(&self, id: &RecordId) -> Result<()> {
        let mut records = self.records.write().await;
        match records.remove(id) {
            Some(removed) => {
                tracing::debug!(id = %id, year = removed.year, "record deleted");
                Ok(())
            }
            None => Err(Error::not_found(id.as_str())),
        }
    }

    async fn list(&self) -> Result<Vec<GdpRecord>> {
        let records = self.records.read().await;
        let mut all: Vec<GdpRecord> = records.values().cloned().collect();
        all.sort_by_key(|r| r.year);
        Ok(all)
    }

    async fn find_by_year(&self, year: i32) -> Result<Option<GdpRecord>> {
        let records = self.records.read().await;
        Ok(records.values().find(|r| r.year == year).cloned())
    }
}
