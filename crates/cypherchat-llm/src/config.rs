// Configuration layer for provider-agnostic LLM client creation
// This module provides a factory pattern for creating LLM clients from configuration

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Type of LLM provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderType {
    #[default]
    Gemini,
    OpenAI,
}

impl ProviderType {
    /// Environment variable holding the API key for this provider
    pub fn api_key_env(&self) -> &'static str {
        match self {
            ProviderType::Gemini => "GOOGLE_API_KEY",
            ProviderType::OpenAI => "OPENAI_API_KEY",
        }
    }
}

/// Connection details shared by every provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointConfig {
    pub api_key: String,
    /// Base URL override (optional, each provider has its public default)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl EndpointConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }
}

/// Provider-specific configuration details
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ProviderDetails {
    Gemini(EndpointConfig),
    OpenAI(EndpointConfig),
}

/// Complete provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(flatten)]
    pub details: ProviderDetails,
}

impl ProviderConfig {
    /// Create Gemini provider config
    pub fn gemini(api_key: impl Into<String>) -> Self {
        Self {
            details: ProviderDetails::Gemini(EndpointConfig::new(api_key)),
        }
    }

    /// Create OpenAI provider config
    pub fn openai(api_key: impl Into<String>) -> Self {
        Self {
            details: ProviderDetails::OpenAI(EndpointConfig::new(api_key)),
        }
    }

    /// Create a config for the given provider type
    pub fn for_provider(
        provider: ProviderType,
        api_key: impl Into<String>,
        base_url: Option<String>,
    ) -> Self {
        let mut endpoint = EndpointConfig::new(api_key);
        endpoint.base_url = base_url;
        
        let details = match provider {
            ProviderType::Gemini => ProviderDetails::Gemini(endpoint),
            ProviderType::OpenAI => ProviderDetails::OpenAI(endpoint),
        };
        
        Self { details }
    }

    /// Get the provider type
    pub fn provider_type(&self) -> ProviderType {
        match self.details {
            ProviderDetails::Gemini(_) => ProviderType::Gemini,
            ProviderDetails::OpenAI(_) => ProviderType::OpenAI,
        }
    }
}

/// Factory for creating LLM clients from configuration
pub struct ClientFactory;

impl ClientFactory {
    /// Create a chat client from provider configuration
    pub fn create_client(config: ProviderConfig) -> Result<Arc<dyn crate::traits::ChatClient>> {
        match config.details {
            ProviderDetails::Gemini(endpoint) => {
                let mut builder = crate::gemini::GeminiClient::builder().api_key(endpoint.api_key);
                if let Some(base_url) = endpoint.base_url {
                    builder = builder.base_url(base_url);
                }
                Ok(Arc::new(builder.build()?))
            }
            ProviderDetails::OpenAI(endpoint) => {
                let mut client = crate::openai::OpenAIClient::new(endpoint.api_key)?;
                if let Some(base_url) = endpoint.base_url {
                    client = client.with_base_url(base_url);
                }
                Ok(Arc::new(client))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gemini_config() {
        let config = ProviderConfig::gemini("test-key");
        assert_eq!(config.provider_type(), ProviderType::Gemini);
    }

    #[test]
    fn test_openai_config() {
        let config = ProviderConfig::openai("test-key");
        assert_eq!(config.provider_type(), ProviderType::OpenAI);
    }

    #[test]
    fn test_default_provider_is_gemini() {
        assert_eq!(ProviderType::default(), ProviderType::Gemini);
        assert_eq!(ProviderType::default().api_key_env(), "GOOGLE_API_KEY");
    }

    #[test]
    fn test_provider_type_from_str() {
        let provider: ProviderType = serde_json::from_str("\"openai\"").unwrap();
        assert_eq!(provider, ProviderType::OpenAI);
        assert_eq!(provider.api_key_env(), "OPENAI_API_KEY");
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = ProviderConfig::for_provider(
            ProviderType::OpenAI,
            "test-key",
            Some("http://localhost:8080/v1".to_string()),
        );

        let json = serde_json::to_string(&config).unwrap();
        let deserialized: ProviderConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config.provider_type(), deserialized.provider_type());
    }

    #[test]
    fn test_factory_rejects_empty_gemini_key() {
        let result = ClientFactory::create_client(ProviderConfig::gemini(""));
        assert!(result.is_err());
    }
}
