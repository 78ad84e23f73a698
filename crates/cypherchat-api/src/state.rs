use std::sync::Arc;
use cypherchat_pipeline::Pipeline;
use crate::config::Config;

/// Shared application state passed to all handlers
/// 
/// Built once at startup. The pipeline holds the long-lived model client and
/// Neo4j pool; nothing in here is mutated after construction.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub pipeline: Arc<Pipeline>,
}

impl AppState {
    pub fn new(config: Config, pipeline: Pipeline) -> Self {
        Self {
            config: Arc::new(config),
            pipeline: Arc::new(pipeline),
        }
    }
}
