//! Builder wiring the model client and graph store into a [`Pipeline`]

use anyhow::{Context, Result};
use cypherchat_llm::{ChatClient, ChatOptions};
use cypherchat_store::GraphStore;
use std::sync::Arc;

use crate::explainer::ExplanationGenerator;
use crate::generator::QueryGenerator;
use crate::pipeline::Pipeline;
use crate::prompts::DEFAULT_SCHEMA_HINT;

pub struct PipelineBuilder {
    llm_client: Option<Arc<dyn ChatClient>>,
    store: Option<Arc<dyn GraphStore>>,
    model: String,
    temperature: f32,
    max_tokens: Option<u32>,
    schema_hint: String,
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineBuilder {
    /// Defaults match the movie assistant: gemini-2.0-flash at temperature 0
    pub fn new() -> Self {
        Self {
            llm_client: None,
            store: None,
            model: "gemini-2.0-flash".to_string(),
            temperature: 0.0,
            max_tokens: None,
            schema_hint: DEFAULT_SCHEMA_HINT.to_string(),
        }
    }

    /// Set the model client (required)
    pub fn llm_client(mut self, client: Arc<dyn ChatClient>) -> Self {
        self.llm_client = Some(client);
        self
    }

    /// Set the graph store (required)
    pub fn store(mut self, store: Arc<dyn GraphStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn max_tokens(mut self, max_tokens: Option<u32>) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Relation and label names listed in the query prompt
    pub fn schema_hint(mut self, schema_hint: impl Into<String>) -> Self {
        self.schema_hint = schema_hint.into();
        self
    }

    pub fn build(self) -> Result<Pipeline> {
        let client = self.llm_client.context("llm_client is required")?;
        let store = self.store.context("store is required")?;

        let mut options = ChatOptions::new().temperature(self.temperature);
        if let Some(max_tokens) = self.max_tokens {
            options = options.max_tokens(max_tokens);
        }

        let generator = QueryGenerator::new(client.clone(), self.model.clone())
            .with_options(options.clone())
            .with_schema_hint(self.schema_hint);
        let explainer = ExplanationGenerator::new(client, self.model).with_options(options);

        Ok(Pipeline::new(generator, store, explainer))
    }
}
