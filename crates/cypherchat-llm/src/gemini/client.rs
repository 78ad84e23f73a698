// Google Gemini client implementation

use crate::traits::{ChatClient, ChatOptions, ChatRequest, ChatResponse, TokenUsage};
use crate::types::Message;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini client for the `generateContent` REST API (HTTP direct, no SDK)
/// 
/// Differences from OpenAI:
/// - URL: {base}/models/{model}:generateContent
/// - Auth header: x-goog-api-key instead of Authorization: Bearer
/// - Assistant turns use the "model" role and system prompts go in `systemInstruction`
#[derive(Debug)]
pub struct GeminiClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl GeminiClient {
    /// Create new client with API key against the public endpoint
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder().api_key(api_key).build()
    }
    
    pub fn builder() -> GeminiClientBuilder {
        GeminiClientBuilder::default()
    }
    
    fn build_generate_request(&self, messages: &[Message], options: &ChatOptions) -> Value {
        let mut system_parts = Vec::new();
        let mut contents = Vec::new();
        
        for message in messages {
            match message {
                Message::System { content } => {
                    system_parts.push(serde_json::json!({ "text": content }));
                }
                Message::Human { content } => {
                    contents.push(serde_json::json!({
                        "role": "user",
                        "parts": [{ "text": content }],
                    }));
                }
                Message::AI { content } => {
                    contents.push(serde_json::json!({
                        "role": "model",
                        "parts": [{ "text": content }],
                    }));
                }
            }
        }
        
        let mut request = serde_json::json!({ "contents": contents });
        
        if let Some(obj) = request.as_object_mut() {
            if !system_parts.is_empty() {
                obj.insert(
                    "systemInstruction".to_string(),
                    serde_json::json!({ "parts": system_parts }),
                );
            }
            
            let mut generation_config = serde_json::Map::new();
            if let Some(temp) = options.temperature {
                generation_config.insert("temperature".to_string(), serde_json::json!(temp));
            }
            if let Some(max_tokens) = options.max_tokens {
                generation_config.insert("maxOutputTokens".to_string(), serde_json::json!(max_tokens));
            }
            if !generation_config.is_empty() {
                obj.insert("generationConfig".to_string(), Value::Object(generation_config));
            }
        }
        
        request
    }
}

#[async_trait]
impl ChatClient for GeminiClient {
    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse> {
        let payload = self.build_generate_request(&request.messages, &request.options);
        
        tracing::debug!(model = %request.model, "Sending Gemini generateContent request");
        
        let response = self
            .http_client
            .post(format!("{}/models/{}:generateContent", self.base_url, request.model))
            .json(&payload)
            .send()
            .await
            .context("Failed to send request")?;
        
        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            anyhow::bail!("Gemini API error ({}): {}", status, error_text);
        }
        
        let raw: GenerateContentResponse = response
            .json()
            .await
            .context("Failed to parse response")?;
        
        let candidate = raw.candidates.first();
        let content = candidate
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|part| part.text.as_deref())
                    .collect::<String>()
            });
        
        Ok(ChatResponse {
            content,
            usage: raw.usage_metadata.as_ref().map(|usage| TokenUsage {
                input_tokens: usage.prompt_token_count,
                output_tokens: usage.candidates_token_count,
                total_tokens: usage.total_token_count,
            }),
            finish_reason: candidate.and_then(|c| c.finish_reason.clone()),
            raw: serde_json::to_value(&raw)?,
        })
    }
}

/// Builder for GeminiClient
#[derive(Default)]
pub struct GeminiClientBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
}

impl GeminiClientBuilder {
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
    
    /// Override the API base URL (defaults to the public v1beta endpoint)
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }
    
    pub fn build(self) -> Result<GeminiClient> {
        let api_key = self.api_key.context("API key is required")?;
        if api_key.trim().is_empty() {
            anyhow::bail!("API key is required");
        }
        
        let base_url = self
            .base_url
            .unwrap_or_else(|| GEMINI_API_BASE.to_string())
            .trim_end_matches('/')
            .to_string();
        
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            "x-goog-api-key",
            HeaderValue::from_str(&api_key)
                .context("Invalid API key format")?,
        );
        
        let http_client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .context("Failed to create HTTP client")?;
        
        Ok(GeminiClient {
            http_client,
            base_url,
        })
    }
}

// ============================================================================
// GEMINI-SPECIFIC RESPONSE TYPES
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_metadata: Option<UsageMetadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<Part>,
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u32,
    #[serde(default)]
    pub candidates_token_count: u32,
    #[serde(default)]
    pub total_token_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_messages_become_system_instruction() {
        let client = GeminiClient::new("test-key").unwrap();
        let payload = client.build_generate_request(
            &[
                Message::system("Answer in Cypher"),
                Message::human("Who directed Heat?"),
                Message::ai("MATCH ..."),
            ],
            &ChatOptions::new().temperature(0.0),
        );

        assert_eq!(payload["systemInstruction"]["parts"][0]["text"], "Answer in Cypher");
        assert_eq!(payload["contents"].as_array().unwrap().len(), 2);
        assert_eq!(payload["contents"][0]["role"], "user");
        assert_eq!(payload["contents"][1]["role"], "model");
        assert_eq!(payload["generationConfig"]["temperature"], 0.0);
    }

    #[test]
    fn test_no_generation_config_without_options() {
        let client = GeminiClient::new("test-key").unwrap();
        let payload = client.build_generate_request(&[Message::human("Hi")], &ChatOptions::new());

        assert!(payload.get("generationConfig").is_none());
        assert!(payload.get("systemInstruction").is_none());
    }
}
