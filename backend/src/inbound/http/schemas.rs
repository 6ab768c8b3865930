//! OpenAPI schema definitions for domain types.
//!
//! Domain types do not derive `ToSchema`. These mirrors register the error
//! payload with utoipa from the adapter layer instead.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The body is not valid JSON or has the wrong shape.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// Missing, malformed or unknown bearer token.
    #[schema(rename = "unauthorized")]
    Unauthorized,
    /// Valid token, but the caller does not own the win. Served as 401.
    #[schema(rename = "ownership_denied")]
    OwnershipDenied,
    #[schema(rename = "not_found")]
    NotFound,
    /// `title` or `text` missing or empty on create.
    #[schema(rename = "validation_failed")]
    ValidationFailed,
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    #[schema(example = "validation_failed")]
    code: ErrorCodeSchema,
    #[schema(example = "text is required")]
    message: String,
    /// Matches the `trace-id` response header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// For `validation_failed`: `{"field": "text", "code": "missing_text"}`.
    details: Option<serde_json::Value>,
}
