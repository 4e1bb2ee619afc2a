//! In-memory state store backend.

use std::collections::BTreeMap;
use std::ops::Bound;

use chrono::Utc;
use uuid::Uuid;

use super::{StateStore, StateVersion};
use crate::error::Result;

/// BTreeMap-backed store, used by the test suite.
///
/// Keys sort lexically by their UTF-8 bytes, matching the range-scan
/// contract of the persistent backend.
#[derive(Debug, Default)]
pub struct MemoryStore {
    current: BTreeMap<String, Vec<u8>>,
    versions: BTreeMap<String, Vec<StateVersion>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.current.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &[u8]) -> Result<String> {
        let tx_id = Uuid::new_v4().to_string();
        self.current.insert(key.to_string(), value.to_vec());
        self.versions
            .entry(key.to_string())
            .or_default()
            .push(StateVersion {
                tx_id: tx_id.clone(),
                value: value.to_vec(),
                recorded_at: Utc::now(),
            });
        Ok(tx_id)
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        self.current.remove(key);
        Ok(())
    }

    fn range_scan(&self, start: &str, end: &str) -> Result<Vec<(String, Vec<u8>)>> {
        let range = (
            Bound::Included(start.to_string()),
            Bound::Excluded(end.to_string()),
        );
        Ok(self
            .current
            .range(range)
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect())
    }

    fn history(&self, key: &str) -> Result<Vec<StateVersion>> {
        Ok(self.versions.get(key).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_put_delete() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);

        store.put("k", b"v1").unwrap();
        assert_eq!(store.get("k").unwrap(), Some(b"v1".to_vec()));

        store.delete("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn test_history_survives_delete() {
        let mut store = MemoryStore::new();
        let tx1 = store.put("k", b"v1").unwrap();
        let tx2 = store.put("k", b"v2").unwrap();
        store.delete("k").unwrap();

        let history = store.history("k").unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].tx_id, tx1);
        assert_eq!(history[0].value, b"v1");
        assert_eq!(history[1].tx_id, tx2);
        assert_eq!(history[1].value, b"v2");
    }

    #[test]
    fn test_range_scan_half_open() {
        let mut store = MemoryStore::new();
        store.put("a:A", b"1").unwrap();
        store.put("a:B", b"2").unwrap();
        store.put("a;", b"3").unwrap();
        store.put("i:x", b"4").unwrap();

        let hits = store.range_scan("a:", "a;").unwrap();
        let keys: Vec<&str> = hits.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["a:A", "a:B"]);
    }
}
