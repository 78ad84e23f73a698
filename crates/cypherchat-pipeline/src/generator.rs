use anyhow::{Context, Result};
use cypherchat_llm::{ChatClient, ChatOptions, ChatRequest};
use std::sync::Arc;

use crate::extract::{extract_query, ExtractedQuery};
use crate::prompts::{cypher_generation_prompt, DEFAULT_SCHEMA_HINT};

/// Raw model output and the query extracted from it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedQuery {
    pub raw: String,
    pub query: ExtractedQuery,
}

/// Turns a question plus conversation transcript into a Cypher query
pub struct QueryGenerator {
    client: Arc<dyn ChatClient>,
    model: String,
    options: ChatOptions,
    schema_hint: String,
}

impl QueryGenerator {
    pub fn new(client: Arc<dyn ChatClient>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
            options: ChatOptions::default(),
            schema_hint: DEFAULT_SCHEMA_HINT.to_string(),
        }
    }

    pub fn with_options(mut self, options: ChatOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_schema_hint(mut self, schema_hint: impl Into<String>) -> Self {
        self.schema_hint = schema_hint.into();
        self
    }

    pub async fn generate(&self, transcript: &str, question: &str) -> Result<GeneratedQuery> {
        let prompt = cypher_generation_prompt(&self.schema_hint, transcript, question);
        let request = ChatRequest::prompt(self.model.clone(), prompt).with_options(self.options.clone());

        let response = self
            .client
            .chat(request)
            .await
            .context("Query generation failed")?;

        let raw = response.text().to_string();
        let query = extract_query(&raw);

        tracing::debug!(fenced = query.is_fenced(), cypher = %query.as_str(), "Extracted Cypher query");

        Ok(GeneratedQuery { raw, query })
    }
}
