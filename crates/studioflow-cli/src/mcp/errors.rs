//! Error mapping for the MCP server.

use rmcp::ErrorData;
use studioflow_core::{ErrorKind, StudioError};

/// Convert a studio error into an MCP error.
///
/// The error's `{kind, message}` report travels in the `data` field so
/// clients can branch on the kind without parsing the message.
pub fn to_mcp_error(context: &str, error: &StudioError) -> ErrorData {
    let message = format!("{context}: {error}");
    let data = serde_json::to_value(error.report()).ok();

    match error.kind() {
        ErrorKind::NotFound => ErrorData::resource_not_found(message, data),
        ErrorKind::InvalidState | ErrorKind::InvalidAction => {
            ErrorData::invalid_params(message, data)
        }
        ErrorKind::Internal => ErrorData::internal_error(message, data),
    }
}

#[cfg(test)]
mod tests {
    use rmcp::model::ErrorCode;

    use super::*;

    #[test]
    fn test_kind_selects_error_code() {
        let not_found = to_mcp_error("Failed", &StudioError::ProjectNotFound { id: 3 });
        assert_eq!(not_found.code, ErrorCode::RESOURCE_NOT_FOUND);

        let invalid = to_mcp_error(
            "Failed",
            &StudioError::InvalidState {
                step_id: 1,
                reason: "step is already resolved".to_string(),
            },
        );
        assert_eq!(invalid.code, ErrorCode::INVALID_PARAMS);
        assert_eq!(
            invalid.data.as_ref().and_then(|d| d.get("kind")),
            Some(&serde_json::json!("invalid_state"))
        );
    }
}
