//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::ApiError;

/// Map domain/service errors to a string for CLI output.
pub fn map_error(e: &ApiError) -> String {
    match e {
        ApiError::TransportError(_) => format!(
            "{}\nIs the narrative server running? Check `api.base_url` in your configuration.",
            e
        ),
        _ => e.to_string(),
    }
}
