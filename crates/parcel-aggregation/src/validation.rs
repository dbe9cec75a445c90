use parcel_core::constants::PINCODE_LENGTH;
use parcel_core::errors::ValidationError;
use parcel_core::models::{PortalSelector, SearchQuery};
use parcel_portals::PortalRegistry;

/// Check a query's preconditions. Runs before any portal is contacted.
///
/// The owner name and pincode are always required and at least one of
/// property id, registration number or address line must be given. When the
/// address is used as an identifier its state is required too.
pub fn validate(query: &SearchQuery, registry: &PortalRegistry) -> Result<(), ValidationError> {
    if query.owner_name.trim().is_empty() {
        return Err(ValidationError::MissingOwnerName);
    }
    if !query.has_identifier() {
        return Err(ValidationError::MissingIdentifier);
    }

    let address = &query.address;
    // Without an address line the pincode alone narrows the search; state is optional.
    if address.is_identifying() && address.state.trim().is_empty() {
        return Err(ValidationError::MissingAddressField { field: "state" });
    }
    let pincode = address.pincode.trim();
    if pincode.is_empty() {
        return Err(ValidationError::MissingAddressField { field: "pincode" });
    }
    if pincode.len() != PINCODE_LENGTH || !pincode.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidPincode {
            pincode: pincode.to_string(),
            expected_len: PINCODE_LENGTH,
        });
    }

    if let Some(range) = query.date_range {
        if range.from > range.to {
            return Err(ValidationError::InvalidDateRange {
                from: range.from.to_string(),
                to: range.to.to_string(),
            });
        }
    }

    if let PortalSelector::Specific(source) = query.portal_selector {
        if !registry.contains(source) {
            return Err(ValidationError::UnknownPortal {
                portal: source.to_string(),
            });
        }
    }

    Ok(())
}
