//! Domain primitives, services and ports.
//!
//! Purpose: Define strongly typed entities and the use-case services that
//! operate on them. Transport and storage concerns stay behind the traits in
//! [`ports`]; inbound adapters only ever see the driving ports.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - UserId / User / AccessToken: caller identity and credentials.
//! - Win / WinId / WinPatch: the owned resource and its partial update.
//! - CredentialTokenAuthenticator, OwnershipAuthorizer, WinService: services.

pub mod auth;
pub mod error;
pub mod ownership;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod win;
pub mod win_service;

pub use self::auth::{AuthenticationError, CredentialTokenAuthenticator};
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::ownership::{AuthorizationError, OwnershipAuthorizer};
pub use self::trace_id::TraceId;
pub use self::user::{AccessToken, User, UserId, UserValidationError};
pub use self::win::{Win, WinDraft, WinDraftFields, WinId, WinPatch, WinValidationError};
pub use self::win_service::WinService;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use wins::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
