use async_trait::async_trait;
use cypherchat_types::Record;
use neo4rs::{query, ConfigBuilder, Graph, Row};

use crate::error::{Result, StoreError};
use crate::trait_store::GraphStore;

/// Neo4j-backed graph store
/// 
/// Wraps a pooled `neo4rs::Graph`; cloning the inner handle is cheap and the
/// pool is shared, so one instance serves every request.
pub struct Neo4jGraphStore {
    graph: Graph,
}

impl Neo4jGraphStore {
    /// Connect to Neo4j and create the store
    pub async fn connect(
        uri: &str,
        user: &str,
        password: &str,
        database: Option<&str>,
        max_connections: usize,
        fetch_size: usize,
    ) -> Result<Self> {
        let mut builder = ConfigBuilder::default()
            .uri(uri)
            .user(user)
            .password(password)
            .max_connections(max_connections)
            .fetch_size(fetch_size);
        
        if let Some(database) = database {
            builder = builder.db(database);
        }
        
        let config = builder
            .build()
            .map_err(|e| StoreError::Config(e.to_string()))?;
        
        let graph = Graph::connect(config)
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;
        
        tracing::info!(uri = %uri, user = %user, "Connected to Neo4j");
        
        Ok(Self { graph })
    }
    
    fn row_to_record(row: &Row) -> Result<Record> {
        row.to::<Record>()
            .map_err(|e| StoreError::Decode(e.to_string()))
    }
}

#[async_trait]
impl GraphStore for Neo4jGraphStore {
    async fn query(&self, cypher: &str) -> Result<Vec<Record>> {
        tracing::debug!(cypher = %cypher, "Executing Cypher query");
        
        let mut stream = self.graph.execute(query(cypher)).await?;
        
        let mut records = Vec::new();
        while let Some(row) = stream.next().await? {
            records.push(Self::row_to_record(&row)?);
        }
        
        tracing::debug!(rows = records.len(), "Cypher query completed");
        
        Ok(records)
    }
}
