//! In-memory video record store
//!
//! Append-only for the process lifetime. Appends serialize through the
//! write lock, so concurrent handlers cannot lose records.

use parking_lot::RwLock;

use crate::models::VideoRecord;

#[derive(Default)]
pub struct VideoStore {
    records: RwLock<Vec<VideoRecord>>,
}

impl VideoStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all records in insertion order.
    #[must_use]
    pub fn list(&self) -> Vec<VideoRecord> {
        self.records.read().clone()
    }

    /// Append a record. No validation, no id collision detection.
    /// Returns the number of stored records after the append.
    pub fn append(&self, record: VideoRecord) -> usize {
        let mut records = self.records.write();
        records.push(record);
        records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn record(id: &str) -> VideoRecord {
        VideoRecord {
            id: id.to_string(),
            url: format!("https://youtu.be/{id}"),
            title: format!("Video {id}"),
            platform: "youtube".to_string(),
            thumbnail: None,
            thumbnail_color: None,
        }
    }

    #[test]
    fn test_append_preserves_insertion_order() {
        let store = VideoStore::new();
        store.append(record("a"));
        store.append(record("b"));
        store.append(record("c"));

        let ids: Vec<String> = store.list().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn test_duplicate_ids_are_kept() {
        let store = VideoStore::new();
        assert_eq!(store.append(record("a")), 1);
        assert_eq!(store.append(record("a")), 2);
        assert_eq!(store.list().len(), 2);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_concurrent_appends_lose_nothing() {
        let store = Arc::new(VideoStore::new());

        let handles: Vec<_> = (0..64)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    store.append(record(&i.to_string()));
                })
            })
            .collect();
        for handle in handles {
            handle.await.expect("append task");
        }

        assert_eq!(store.list().len(), 64);
    }
}
