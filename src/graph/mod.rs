//! Movie neighborhood projection.
//!
//! ## Architecture
//!
//! ```text
//! Neo4j (GraphStore) ──► NeighborhoodRow* ──► build_projection
//!                                                   │
//!                                   GraphProjection { nodes, links }
//! ```
//!
//! ## Modules
//!
//! - [`models`]: `GraphProjection`, `ProjectionNode`, `ProjectionLink`
//! - [`projection`]: `ProjectionBuilder` and the pure row fold

pub mod models;
pub mod projection;

pub use models::{GraphProjection, ProjectionLink, ProjectionNode};
pub use projection::{build_projection, ProjectionBuilder};
