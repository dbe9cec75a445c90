pub mod outcome;
pub mod query;
pub mod record;
pub mod source;
pub mod trust;
pub mod unified;

pub use outcome::{OutcomeStatus, PortalOutcome, PortalResponse, RawPayload};
pub use query::{Address, DateRange, PortalSelector, PropertyType, SearchQuery};
pub use record::{CanonicalPropertyRecord, Coordinates, Encumbrance, EncumbranceStatus};
pub use source::SourceId;
pub use trust::TrustScore;
pub use unified::{TaggedDocument, TaggedEncumbrance, UnifiedView};
