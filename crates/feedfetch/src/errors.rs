//! Error handling and exit codes.

use feedfetch_core::constants::exit_codes;
use feedfetch_core::source::FetchError;

/// Map a top-level error to the process exit code.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<FetchError>() {
        Some(FetchError::Config(_)) => exit_codes::ERROR_CONFIG,
        Some(FetchError::Profile { .. } | FetchError::Posts { .. } | FetchError::Unresolved(_)) => {
            exit_codes::ERROR_FETCH
        }
        Some(FetchError::Comments { .. }) | None => exit_codes::ERROR_GENERIC,
    }
}
