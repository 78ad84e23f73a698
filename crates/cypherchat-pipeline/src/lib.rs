pub mod transcript;
pub mod extract;
pub mod prompts;
pub mod generator;
pub mod explainer;
pub mod pipeline;
pub mod builder;

pub use builder::PipelineBuilder;
pub use explainer::ExplanationGenerator;
pub use extract::{extract_query, ExtractedQuery};
pub use generator::{GeneratedQuery, QueryGenerator};
pub use pipeline::Pipeline;
pub use prompts::{DEFAULT_SCHEMA_HINT, NO_RESULTS_MESSAGE};
pub use transcript::format_transcript;

// Re-export the request/response model so callers need a single import
pub use cypherchat_types::{QueryRequest, QueryResponse, Record, Role, Turn};
