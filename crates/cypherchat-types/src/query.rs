use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::conversation::Turn;

/// One row of a graph query result: column name to JSON-safe value
pub type Record = Map<String, Value>;

/// Body of `POST /query`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRequest {
    pub prompt: String,

    #[serde(default)]
    pub history: Vec<Turn>,
}

impl QueryRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            history: Vec::new(),
        }
    }

    pub fn with_history(mut self, history: Vec<Turn>) -> Self {
        self.history = history;
        self
    }
}

/// Outcome of a query request.
///
/// A failed database call is still a successful HTTP response; it only carries
/// the error message and the query that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryResponse {
    Answered {
        cypher_query: String,
        results: Vec<Record>,
        explanation: String,
    },
    Failed {
        error: String,
        cypher_query: String,
    },
}

impl QueryResponse {
    pub fn cypher_query(&self) -> &str {
        match self {
            QueryResponse::Answered { cypher_query, .. } => cypher_query,
            QueryResponse::Failed { cypher_query, .. } => cypher_query,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, QueryResponse::Failed { .. })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
}
