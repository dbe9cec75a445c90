//! Process exit codes. clap already exits with 2 on bad arguments.

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE: u8 = 2;
pub const EXIT_INVALID_QUERY: u8 = 3;
pub const EXIT_CONFIG: u8 = 4;

/// Map a command failure to its exit code.
pub fn exit_code_for(err: &anyhow::Error) -> u8 {
    use parcel_core::errors::ParcelError;

    match err.downcast_ref::<ParcelError>() {
        Some(ParcelError::Validation(_)) => EXIT_INVALID_QUERY,
        Some(ParcelError::Config(_)) => EXIT_CONFIG,
        _ if err.downcast_ref::<parcel_core::errors::ConfigError>().is_some() => EXIT_CONFIG,
        _ => EXIT_ERROR,
    }
}
