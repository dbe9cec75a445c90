/// Query precondition failures. Surfaced before any portal is contacted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("owner name is required")]
    MissingOwnerName,

    #[error(
        "at least one search parameter is required (propertyId, registrationNumber, or address)"
    )]
    MissingIdentifier,

    #[error("address field `{field}` is required")]
    MissingAddressField { field: &'static str },

    #[error("invalid pincode `{pincode}`: expected {expected_len} digits")]
    InvalidPincode { pincode: String, expected_len: usize },

    #[error("invalid date range: {from} is after {to}")]
    InvalidDateRange { from: String, to: String },

    #[error("portal `{portal}` is not registered")]
    UnknownPortal { portal: String },
}
