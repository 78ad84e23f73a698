use async_trait::async_trait;
use cypherchat_store::{GraphStore, Record, StoreError};
use serde_json::json;
use std::sync::Arc;

/// In-memory store returning canned rows, or failing for queries containing "FAIL"
struct CannedStore {
    rows: Vec<Record>,
}

#[async_trait]
impl GraphStore for CannedStore {
    async fn query(&self, cypher: &str) -> Result<Vec<Record>, StoreError> {
        if cypher.contains("FAIL") {
            return Err(StoreError::Decode("bad row".to_string()));
        }
        Ok(self.rows.clone())
    }
}

fn record(title: &str) -> Record {
    let mut record = Record::new();
    record.insert("title".to_string(), json!(title));
    record
}

#[tokio::test]
async fn test_store_usable_as_trait_object() {
    let store: Arc<dyn GraphStore> = Arc::new(CannedStore {
        rows: vec![record("The Matrix"), record("Heat")],
    });

    let rows = store.query("MATCH (m:Movie) RETURN m.title AS title").await.unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["title"], "The Matrix");
    assert_eq!(rows[1]["title"], "Heat");
}

#[tokio::test]
async fn test_store_error_message() {
    let store = CannedStore { rows: vec![] };

    let err = store.query("FAIL").await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to decode result row: bad row");
}
