pub mod client;

pub use client::Neo4jGraphStore;
