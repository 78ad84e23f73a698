use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cypherchat_api::{build_router, config::Config, state::AppState};
use cypherchat_llm::{ClientFactory, ProviderConfig};
use cypherchat_pipeline::PipelineBuilder;
use cypherchat_store::{GraphStore, GraphStoreBuilder};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();
    
    let config = Config::load()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;
    
    init_logging(&config);
    
    tracing::info!("Starting cypherchat API server");
    tracing::info!("Config loaded: {}:{}", config.server.host, config.server.port);
    
    tracing::info!(provider = ?config.llm.provider, model = %config.llm.model, "Initializing LLM client");
    let llm_client = ClientFactory::create_client(ProviderConfig::for_provider(
        config.llm.provider,
        config.llm_api_key.clone(),
        config.llm.base_url.clone(),
    ))?;
    
    tracing::info!(uri = %config.neo4j.uri, "Connecting to Neo4j");
    let mut store_builder = GraphStoreBuilder::new()
        .uri(&config.neo4j.uri)
        .user(&config.neo4j.user)
        .password(&config.neo4j_password)
        .max_connections(config.neo4j.max_connections)
        .fetch_size(config.neo4j.fetch_size);
    if let Some(database) = &config.neo4j.database {
        store_builder = store_builder.database(database);
    }
    let store: Arc<dyn GraphStore> = Arc::new(store_builder.build().await?);
    
    let pipeline = PipelineBuilder::new()
        .llm_client(llm_client)
        .store(store)
        .model(&config.llm.model)
        .temperature(config.llm.temperature)
        .max_tokens(config.llm.max_tokens)
        .schema_hint(&config.llm.schema_hint)
        .build()?;
    
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = Arc::new(AppState::new(config, pipeline));
    let app = build_router(state);
    
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    
    tracing::info!("Server listening on {}", addr);
    
    axum::serve(listener, app).await?;
    
    Ok(())
}

fn init_logging(config: &Config) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    
    let registry = tracing_subscriber::registry().with(env_filter);
    
    match config.logging.format.as_str() {
        "json" => {
            registry
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            registry
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
    }
}
