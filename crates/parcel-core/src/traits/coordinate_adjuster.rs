use crate::models::{Coordinates, SourceId};

/// Pure post-processing applied to coordinates during normalization.
///
/// Implementations must be deterministic in their inputs so that normalizing
/// the same payload twice yields the same record.
pub trait CoordinateAdjuster: Send + Sync + std::fmt::Debug {
    fn adjust(&self, source: SourceId, property_id: &str, coordinates: Coordinates) -> Coordinates;
}
