pub mod client;

pub use client::{GeminiClient, GeminiClientBuilder};
