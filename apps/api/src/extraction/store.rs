//! Holding area for structured records awaiting human confirmation.
//!
//! Entries are keyed by extraction id and expire after a fixed TTL so that
//! abandoned extractions do not accumulate for the life of the process.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, info};

use crate::models::extraction::RawExtraction;

#[async_trait]
pub trait ExtractionStore: Send + Sync {
    /// Inserts or replaces the record under its own extraction id.
    async fn put(&self, record: RawExtraction);

    async fn get(&self, extraction_id: &str) -> Option<RawExtraction>;

    /// Removes and returns the entry. Two concurrent takes of the same id
    /// never both succeed.
    async fn take(&self, extraction_id: &str) -> Option<StoredExtraction>;

    /// Puts back an entry obtained from `take`, keeping its original age.
    async fn restore(&self, entry: StoredExtraction);

    /// Drops expired entries, returning how many were removed.
    async fn purge_expired(&self) -> usize;
}

#[derive(Debug)]
pub struct StoredExtraction {
    pub record: RawExtraction,
    stored_at: Instant,
}

/// Process-local store. Contents are lost on restart.
pub struct InMemoryStore {
    entries: RwLock<HashMap<String, StoredExtraction>>,
    ttl: Duration,
}

impl InMemoryStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    fn is_live(&self, entry: &StoredExtraction, now: Instant) -> bool {
        now.duration_since(entry.stored_at) < self.ttl
    }
}

#[async_trait]
impl ExtractionStore for InMemoryStore {
    async fn put(&self, record: RawExtraction) {
        let entry = StoredExtraction {
            record,
            stored_at: Instant::now(),
        };
        self.entries.write().await.insert(entry.record.id(), entry);
    }

    async fn get(&self, extraction_id: &str) -> Option<RawExtraction> {
        let now = Instant::now();
        self.entries
            .read()
            .await
            .get(extraction_id)
            .filter(|e| self.is_live(e, now))
            .map(|e| e.record.clone())
    }

    async fn take(&self, extraction_id: &str) -> Option<StoredExtraction> {
        let now = Instant::now();
        let entry = self.entries.write().await.remove(extraction_id)?;
        self.is_live(&entry, now).then_some(entry)
    }

    async fn restore(&self, entry: StoredExtraction) {
        self.entries.write().await.insert(entry.record.id(), entry);
    }

    async fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, e| self.is_live(e, now));
        before - entries.len()
    }
}

/// Periodically purges expired extractions until the runtime shuts down.
pub fn spawn_sweeper(store: Arc<dyn ExtractionStore>, every: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        loop {
            ticker.tick().await;
            let purged = store.purge_expired().await;
            if purged > 0 {
                info!(purged, "Expired unconfirmed extractions");
            } else {
                debug!("Extraction sweep found nothing to purge");
            }
        }
    })
}
