pub mod query;
pub mod root;
