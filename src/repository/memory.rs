//! In-memory [`SignatureStore`] test double. The binary always uses Postgres.
//!
//! Failure switches let callers exercise the "gateway returned nothing" paths.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use chrono::Utc;
use tracing::warn;

use super::signature_repository::SignatureStore;
use crate::models::{NewSignature, StoredSignature};

#[derive(Default)]
pub struct MemorySignatureStore {
    rows: Mutex<Vec<StoredSignature>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl MemorySignatureStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::Relaxed);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::Relaxed);
    }

    /// Snapshot of the stored rows.
    pub fn rows(&self) -> Vec<StoredSignature> {
        self.rows.lock().map(|rows| rows.clone()).unwrap_or_default()
    }
}

impl SignatureStore for MemorySignatureStore {
    async fn all(&self) -> Option<Vec<StoredSignature>> {
        if self.fail_reads.load(Ordering::Relaxed) {
            warn!("memory store: read failure injected");
            return None;
        }
        self.rows.lock().ok().map(|rows| rows.clone())
    }

    async fn insert(&self, row: &NewSignature) -> Option<()> {
        if self.fail_writes.load(Ordering::Relaxed) {
            warn!("memory store: write failure injected");
            return None;
        }
        let mut rows = self.rows.lock().ok()?;
        rows.push(StoredSignature {
            id: row.id,
            name: row.name.clone(),
            national_id: row.national_id.clone(),
            comment: row.comment.clone(),
            anonymous: row.anonymous,
            signed: Utc::now(),
        });
        Some(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn new_row() -> NewSignature {
        NewSignature {
            id: Uuid::new_v4(),
            name: "Jón".into(),
            national_id: "1234567890".into(),
            comment: String::new(),
            anonymous: false,
        }
    }

    #[tokio::test]
    async fn insert_then_read() {
        let store = MemorySignatureStore::new();
        assert_eq!(store.insert(&new_row()).await, Some(()));
        assert_eq!(store.all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn failed_write_leaves_no_row() {
        let store = MemorySignatureStore::new();
        store.set_fail_writes(true);
        assert_eq!(store.insert(&new_row()).await, None);
        assert!(store.rows().is_empty());
    }
}
