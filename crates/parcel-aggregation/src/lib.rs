//! # parcel-aggregation
//!
//! The search pipeline: validate the query, select portals, fan out one task
//! per portal, join every outcome, merge, and score.
//!
//! ```text
//! SearchQuery ─▶ validate ─▶ select ─▶ AggregationCoordinator ─▶ merge ─▶ score
//!                   │                     (one task per portal)
//!                   └─▶ ValidationError (no portal is contacted)
//! ```

pub mod coordinator;
pub mod engine;
pub mod response;
pub mod selection;
pub mod validation;

pub use coordinator::AggregationCoordinator;
pub use engine::SearchEngine;
pub use response::{SearchResponse, SourceResult};
pub use selection::select_sources;
pub use validation::validate;
