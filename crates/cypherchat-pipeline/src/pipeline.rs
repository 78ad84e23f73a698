use anyhow::Result;
use cypherchat_store::GraphStore;
use cypherchat_types::{QueryRequest, QueryResponse};
use std::sync::Arc;

use crate::explainer::ExplanationGenerator;
use crate::generator::QueryGenerator;
use crate::transcript::format_transcript;

/// Question-answering pipeline over a graph database
/// 
/// Stages run strictly in sequence, each feeding the next:
/// format transcript → generate query → execute → explain.
/// A failed execution ends the run with a `Failed` response; model failures
/// are returned as errors.
pub struct Pipeline {
    generator: QueryGenerator,
    store: Arc<dyn GraphStore>,
    explainer: ExplanationGenerator,
}

impl Pipeline {
    pub fn new(
        generator: QueryGenerator,
        store: Arc<dyn GraphStore>,
        explainer: ExplanationGenerator,
    ) -> Self {
        Self {
            generator,
            store,
            explainer,
        }
    }

    pub async fn run(&self, request: &QueryRequest) -> Result<QueryResponse> {
        let transcript = format_transcript(&request.history);

        tracing::info!(history_turns = request.history.len(), "PIPELINE: generating query");
        let generated = self.generator.generate(&transcript, &request.prompt).await?;
        tracing::debug!(raw = %generated.raw, "PIPELINE: query model output");
        let cypher_query = generated.query.into_query();

        tracing::info!(cypher = %cypher_query, "PIPELINE: executing query");
        let records = match self.store.query(&cypher_query).await {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(cypher = %cypher_query, error = %e, "PIPELINE: query execution failed");
                return Ok(QueryResponse::Failed {
                    error: e.to_string(),
                    cypher_query,
                });
            }
        };

        tracing::info!(rows = records.len(), "PIPELINE: explaining results");
        let explanation = self
            .explainer
            .explain(&transcript, &request.prompt, &records)
            .await?;

        Ok(QueryResponse::Answered {
            cypher_query,
            results: records,
            explanation,
        })
    }
}
