//! Property type inference from free-text classification.

use parcel_core::models::PropertyType;

/// Vocabulary that marks a property as urban. Checked first.
pub const URBAN_KEYWORDS: &[&str] = &["flat", "apartment", "urban", "residential", "commercial"];

/// Vocabulary that marks a property as rural.
pub const RURAL_KEYWORDS: &[&str] = &["land", "agricultural", "rural", "farm"];

/// Infer urban/rural from a portal's classification text.
///
/// Urban keywords win over rural ones ("Urban Development Authority land" is
/// urban). Anything unrecognized, including missing text, defaults to urban.
pub fn classify_property_type(text: Option<&str>) -> PropertyType {
    let Some(text) = text else {
        return PropertyType::Urban;
    };
    let text = text.to_lowercase();

    if URBAN_KEYWORDS.iter().any(|k| text.contains(k)) {
        return PropertyType::Urban;
    }
    if RURAL_KEYWORDS.iter().any(|k| text.contains(k)) {
        return PropertyType::Rural;
    }
    PropertyType::Urban
}
