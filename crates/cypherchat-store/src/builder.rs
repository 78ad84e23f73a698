use crate::dbs::neo4j::Neo4jGraphStore;
use crate::error::{Result, StoreError};

pub const DEFAULT_MAX_CONNECTIONS: usize = 16;
pub const DEFAULT_FETCH_SIZE: usize = 200;

pub struct GraphStoreBuilder {
    uri: Option<String>,
    user: Option<String>,
    password: String,
    database: Option<String>,
    max_connections: usize,
    fetch_size: usize,
}

impl GraphStoreBuilder {
    pub fn new() -> Self {
        Self {
            uri: None,
            user: None,
            password: String::new(),
            database: None,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            fetch_size: DEFAULT_FETCH_SIZE,
        }
    }
    
    pub fn uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = Some(uri.into());
        self
    }
    
    pub fn user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }
    
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }
    
    /// Target database name (server default when unset)
    pub fn database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }
    
    pub fn max_connections(mut self, max_connections: usize) -> Self {
        self.max_connections = max_connections;
        self
    }
    
    pub fn fetch_size(mut self, fetch_size: usize) -> Self {
        self.fetch_size = fetch_size;
        self
    }
    
    fn validate(&self) -> Result<(&str, &str)> {
        let uri = self
            .uri
            .as_deref()
            .filter(|uri| !uri.trim().is_empty())
            .ok_or_else(|| StoreError::Config("uri is required".to_string()))?;
        let user = self
            .user
            .as_deref()
            .filter(|user| !user.trim().is_empty())
            .ok_or_else(|| StoreError::Config("user is required".to_string()))?;
        if self.max_connections == 0 {
            return Err(StoreError::Config("max_connections must be positive".to_string()));
        }
        if self.fetch_size == 0 {
            return Err(StoreError::Config("fetch_size must be positive".to_string()));
        }
        Ok((uri, user))
    }
    
    pub async fn build(self) -> Result<Neo4jGraphStore> {
        let (uri, user) = self.validate()?;
        
        Neo4jGraphStore::connect(
            uri,
            user,
            &self.password,
            self.database.as_deref(),
            self.max_connections,
            self.fetch_size,
        )
        .await
    }
}

impl Default for GraphStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}
