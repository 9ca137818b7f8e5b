//! Neo4j client and row models for the movie graph

pub mod client;
mod impl_graph_store;
pub mod models;
pub mod traits;

pub use client::{Neo4jClient, Neo4jSettings};
pub use models::*;
pub use traits::GraphStore;

#[cfg(test)]
pub(crate) mod mock;
