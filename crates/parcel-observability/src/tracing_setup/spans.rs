//! Span definitions for a search and for each portal call within it.

/// Create a search span.
#[macro_export]
macro_rules! search_span {
    ($search_id:expr, $portal_count:expr) => {
        tracing::info_span!("parcel.search", search_id = %$search_id, portals = $portal_count)
    };
}

/// Create a per-portal span.
#[macro_export]
macro_rules! portal_span {
    ($source:expr) => {
        tracing::info_span!("parcel.portal", source = %$source)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const SEARCH: &str = "parcel.search";
    pub const PORTAL: &str = "parcel.portal";
}
