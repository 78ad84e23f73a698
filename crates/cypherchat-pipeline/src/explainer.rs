use anyhow::{Context, Result};
use cypherchat_llm::{ChatClient, ChatOptions, ChatRequest};
use cypherchat_types::Record;
use serde_json::Value;
use std::sync::Arc;

use crate::prompts::{explanation_prompt, NO_RESULTS_MESSAGE};

/// Explains query results in natural language, grounded only in those results
pub struct ExplanationGenerator {
    client: Arc<dyn ChatClient>,
    model: String,
    options: ChatOptions,
}

impl ExplanationGenerator {
    pub fn new(client: Arc<dyn ChatClient>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
            options: ChatOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ChatOptions) -> Self {
        self.options = options;
        self
    }

    /// Empty results short-circuit to a fixed message without calling the model
    pub async fn explain(&self, transcript: &str, question: &str, records: &[Record]) -> Result<String> {
        if records.is_empty() {
            return Ok(NO_RESULTS_MESSAGE.to_string());
        }

        let results = render_records(records);
        let prompt = explanation_prompt(transcript, question, &results);
        let request = ChatRequest::prompt(self.model.clone(), prompt).with_options(self.options.clone());

        let response = self
            .client
            .chat(request)
            .await
            .context("Explanation generation failed")?;

        Ok(response.text().to_string())
    }
}

fn render_records(records: &[Record]) -> String {
    Value::Array(records.iter().cloned().map(Value::Object).collect()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_records_is_compact_json() {
        let mut record = Record::new();
        record.insert("title".to_string(), json!("Heat"));

        assert_eq!(render_records(&[record.clone(), record]), r#"[{"title":"Heat"},{"title":"Heat"}]"#);
    }
}
