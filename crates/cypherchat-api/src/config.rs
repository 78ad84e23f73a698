use config::{Config as ConfigLoader, ConfigError, Environment, File};
use cypherchat_llm::ProviderType;
use cypherchat_pipeline::DEFAULT_SCHEMA_HINT;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub llm: LlmConfig,
    pub neo4j: Neo4jConfig,
    pub logging: LoggingConfig,
    pub app: AppConfig,
    
    // Secrets (from ENV only)
    pub llm_api_key: String,
    pub neo4j_password: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

/// Single origin allowed to call the API, with credentials
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub origin: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            origin: "http://localhost:3000".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    pub provider: ProviderType,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: Option<u32>,
    /// Override the provider's public endpoint (proxies, compatible servers)
    pub base_url: Option<String>,
    /// Relation and label names listed in the query prompt
    pub schema_hint: String,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: ProviderType::Gemini,
            model: "gemini-2.0-flash".to_string(),
            temperature: 0.0,
            max_tokens: None,
            base_url: None,
            schema_hint: DEFAULT_SCHEMA_HINT.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Neo4jConfig {
    pub uri: String,
    pub user: String,
    pub database: Option<String>,
    pub max_connections: usize,
    pub fetch_size: usize,
}

impl Default for Neo4jConfig {
    fn default() -> Self {
        Self {
            uri: "bolt://localhost:7687".to_string(),
            user: "neo4j".to_string(),
            database: None,
            max_connections: cypherchat_store::builder::DEFAULT_MAX_CONNECTIONS,
            fetch_size: cypherchat_store::builder::DEFAULT_FETCH_SIZE,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Message returned by `GET /`
    pub ready_message: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ready_message: "Neo4j is connected!".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from TOML files and environment variables
    /// 
    /// Hierarchy (weakest to strongest):
    /// 1. config/default.toml
    /// 2. config/{ENV}.toml (if ENV is set)
    /// 3. CYPHERCHAT_* environment variables, `__` between levels
    ///    (e.g. CYPHERCHAT_SERVER__PORT=9000)
    /// 
    /// Secrets never come from files: the provider's API key
    /// (GOOGLE_API_KEY or OPENAI_API_KEY) is required, NEO4J_PASSWORD is optional.
    pub fn load() -> Result<Self, ConfigError> {
        let env = std::env::var("ENV").unwrap_or_else(|_| "dev".to_string());
        
        let builder = ConfigLoader::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix("CYPHERCHAT")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
            );
        
        let mut cfg: Config = builder.build()?.try_deserialize()?;
        cfg.load_secrets(|key| std::env::var(key).ok())?;
        
        Ok(cfg)
    }
    
    /// Load config from a specific path (useful for testing)
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let builder = ConfigLoader::builder()
            .add_source(File::from(path.as_ref()));
        
        builder.build()?.try_deserialize()
    }
    
    /// Fill secrets from a variable lookup; fails when the model key is missing
    pub fn load_secrets(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        let key_env = self.llm.provider.api_key_env();
        self.llm_api_key = lookup(key_env)
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                ConfigError::Message(format!("{} environment variable is required", key_env))
            })?;
        self.neo4j_password = lookup("NEO4J_PASSWORD").unwrap_or_default();
        
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    
    #[test]
    fn test_config_structure() {
        let toml = r#"
            [server]
            host = "127.0.0.1"
            port = 9000
            
            [cors]
            origin = "http://localhost:5173"
            
            [llm]
            provider = "openai"
            model = "gpt-4o-mini"
            temperature = 0.2
            max_tokens = 1024
            
            [neo4j]
            uri = "neo4j://db:7687"
            user = "reader"
            database = "movies"
            max_connections = 4
            fetch_size = 50
            
            [logging]
            level = "debug"
            format = "json"
        "#;
        
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.cors.origin, "http://localhost:5173");
        assert_eq!(config.llm.provider, ProviderType::OpenAI);
        assert_eq!(config.llm.max_tokens, Some(1024));
        assert_eq!(config.neo4j.database.as_deref(), Some("movies"));
        assert_eq!(config.app.ready_message, "Neo4j is connected!");
    }
    
    #[test]
    fn test_defaults_match_movie_assistant() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.cors.origin, "http://localhost:3000");
        assert_eq!(config.llm.provider, ProviderType::Gemini);
        assert_eq!(config.llm.model, "gemini-2.0-flash");
        assert_eq!(config.llm.temperature, 0.0);
        assert_eq!(config.neo4j.uri, "bolt://localhost:7687");
        assert_eq!(config.neo4j.user, "neo4j");
    }
    
    #[test]
    fn test_missing_api_key_is_fatal() {
        let mut config = Config::default();
        let err = config.load_secrets(|_| None).unwrap_err();
        assert!(err.to_string().contains("GOOGLE_API_KEY"));
    }
    
    #[test]
    fn test_blank_api_key_is_rejected() {
        let mut config = Config::default();
        let result = config.load_secrets(|key| (key == "GOOGLE_API_KEY").then(|| "  ".to_string()));
        assert!(result.is_err());
    }
    
    #[test]
    fn test_secrets_follow_provider() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("OPENAI_API_KEY", "sk-test"),
            ("NEO4J_PASSWORD", "secret"),
        ]);
        
        let mut config = Config::default();
        config.llm.provider = ProviderType::OpenAI;
        config.load_secrets(|key| vars.get(key).map(|v| v.to_string())).unwrap();
        
        assert_eq!(config.llm_api_key, "sk-test");
        assert_eq!(config.neo4j_password, "secret");
    }
    
    #[test]
    fn test_password_is_optional() {
        let mut config = Config::default();
        config.load_secrets(|key| (key == "GOOGLE_API_KEY").then(|| "g-key".to_string())).unwrap();
        assert_eq!(config.neo4j_password, "");
    }
    
    #[test]
    fn test_from_file() {
        let path = std::env::temp_dir().join(format!("cypherchat-config-{}.toml", std::process::id()));
        std::fs::write(&path, "[server]\nport = 8100\n").unwrap();
        
        let config = Config::from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();
        
        assert_eq!(config.server.port, 8100);
        assert_eq!(config.neo4j.user, "neo4j");
    }
}
