pub mod conversation;
pub mod query;

pub use conversation::{Role, Turn};
pub use query::{QueryRequest, QueryResponse, Record, RootResponse};
