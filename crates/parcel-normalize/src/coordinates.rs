//! Coordinate adjusters applied during normalization.

use parcel_core::models::{Coordinates, SourceId};
use parcel_core::traits::CoordinateAdjuster;

/// Leaves coordinates untouched. The default.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl CoordinateAdjuster for Identity {
    fn adjust(&self, _source: SourceId, _property_id: &str, coordinates: Coordinates) -> Coordinates {
        coordinates
    }
}

/// Demo jitter: offsets each axis by up to `max_degrees`, derived from a
/// blake3 hash of the source and property id. Same input, same offset.
#[derive(Debug, Clone, Copy)]
pub struct HashJitter {
    max_degrees: f64,
}

impl HashJitter {
    pub fn new(max_degrees: f64) -> Self {
        Self {
            max_degrees: max_degrees.abs(),
        }
    }
}

impl CoordinateAdjuster for HashJitter {
    fn adjust(&self, source: SourceId, property_id: &str, coordinates: Coordinates) -> Coordinates {
        let mut hasher = blake3::Hasher::new();
        hasher.update(source.as_str().as_bytes());
        hasher.update(b":");
        hasher.update(property_id.as_bytes());
        let hash = hasher.finalize();
        let bytes = hash.as_bytes();

        let lat_offset = unit_offset(&bytes[0..8]) * self.max_degrees;
        let lng_offset = unit_offset(&bytes[8..16]) * self.max_degrees;

        Coordinates {
            latitude: round6((coordinates.latitude + lat_offset).clamp(-90.0, 90.0)),
            longitude: round6((coordinates.longitude + lng_offset).clamp(-180.0, 180.0)),
        }
    }
}

/// Map 8 hash bytes to [-1.0, 1.0].
fn unit_offset(bytes: &[u8]) -> f64 {
    let mut buf = [0u8; 8];
    buf.copy_from_slice(bytes);
    let n = u64::from_le_bytes(buf);
    (n as f64 / u64::MAX as f64) * 2.0 - 1.0
}

fn round6(v: f64) -> f64 {
    (v * 1_000_000.0).round() / 1_000_000.0
}
