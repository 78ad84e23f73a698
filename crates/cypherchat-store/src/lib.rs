pub mod error;
pub mod builder;
pub mod trait_store;
pub mod dbs;

pub use builder::GraphStoreBuilder;
pub use dbs::neo4j::Neo4jGraphStore;
pub use error::StoreError;
pub use trait_store::GraphStore;
pub use cypherchat_types::Record;
