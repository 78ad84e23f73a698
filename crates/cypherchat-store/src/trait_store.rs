use async_trait::async_trait;
use cypherchat_types::Record;

use crate::error::Result;

/// Trait for graph query execution
/// 
/// Implementations own a long-lived connection handle and return every row of
/// the result as a JSON-safe record, in the order the database produced them.
#[async_trait]
pub trait GraphStore: Send + Sync {
    /// Run a Cypher query and collect all result rows
    async fn query(&self, cypher: &str) -> Result<Vec<Record>>;
}
