//! Win resource HTTP handlers.
//!
//! ```text
//! GET    /wins        list every win
//! GET    /wins/{id}   fetch one win
//! POST   /wins        create a win owned by the caller
//! PATCH  /wins/{id}   merge changes into the caller's win
//! DELETE /wins/{id}   delete the caller's win
//! ```
//!
//! Every route authenticates first; body errors are reported only for
//! authenticated callers. Request bodies nest the resource under a
//! `win` key; unknown keys, including any client-supplied `owner`, are
//! ignored.

use actix_web::{HttpResponse, delete, get, patch, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, Win, WinDraftFields, WinId, WinPatch};
use crate::inbound::http::ApiResult;
use crate::inbound::http::auth::BearerIdentity;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Serialised win.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct WinBody {
    #[schema(format = "uuid")]
    pub id: String,
    #[schema(example = "Shipped the release")]
    pub title: String,
    #[schema(example = "On time, with tests.")]
    pub text: String,
    #[schema(format = "uuid")]
    pub owner: String,
}

impl From<Win> for WinBody {
    fn from(value: Win) -> Self {
        Self {
            id: value.id().to_string(),
            title: value.title().to_owned(),
            text: value.text().to_owned(),
            owner: value.owner().to_string(),
        }
    }
}

/// Single-win response envelope.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WinEnvelope {
    pub win: WinBody,
}

/// Win list response envelope.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WinListEnvelope {
    pub wins: Vec<WinBody>,
}

/// Client-supplied win fields. Both are optional at the wire level; which
/// ones are required depends on the route.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct WinFieldsBody {
    pub title: Option<String>,
    pub text: Option<String>,
}

/// Request envelope for `POST` and `PATCH`.
///
/// A missing or `null` `win` key reads as an empty field set.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct WinRequest {
    #[serde(default)]
    pub win: Option<WinFieldsBody>,
}

impl WinRequest {
    fn into_fields(self) -> WinFieldsBody {
        self.win.unwrap_or_default()
    }
}

/// Body extraction result, inspected only once the caller is authenticated.
///
/// Actix polls sibling extractors together, so a body error must not be
/// allowed to surface while authentication is still pending.
type WinPayload = Result<web::Json<WinRequest>, actix_web::Error>;

fn decode_payload(payload: WinPayload) -> Result<WinFieldsBody, Error> {
    match payload {
        Ok(body) => Ok(body.into_inner().into_fields()),
        Err(err) => Err(err.as_error::<Error>().cloned().unwrap_or_else(|| {
            Error::invalid_request(format!("request body could not be read: {err}"))
        })),
    }
}

/// Path ids that are not UUIDs cannot name a stored win.
fn parse_win_id(raw: &str) -> Result<WinId, Error> {
    WinId::new(raw).map_err(|_| Error::not_found(format!("win {raw} not found")))
}

/// List every win.
#[utoipa::path(
    get,
    path = "/wins",
    responses(
        (status = 200, description = "All wins", body = WinListEnvelope),
        (status = 401, description = "Unauthorized", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["wins"],
    operation_id = "listWins",
    security(("BearerToken" = []))
)]
#[get("/wins")]
pub async fn list_wins(
    identity: BearerIdentity,
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<WinListEnvelope>> {
    let wins = state.wins_query.list_wins(identity.user_id()).await?;
    Ok(web::Json(WinListEnvelope {
        wins: wins.into_iter().map(WinBody::from).collect(),
    }))
}

/// Fetch a single win. Any authenticated caller may read any win.
#[utoipa::path(
    get,
    path = "/wins/{id}",
    params(("id" = String, Path, description = "Win identifier")),
    responses(
        (status = 200, description = "The win", body = WinEnvelope),
        (status = 401, description = "Unauthorized", body = ErrorSchema),
        (status = 404, description = "Not found", body = ErrorSchema)
    ),
    tags = ["wins"],
    operation_id = "getWin",
    security(("BearerToken" = []))
)]
#[get("/wins/{id}")]
pub async fn get_win(
    identity: BearerIdentity,
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<WinEnvelope>> {
    let id = parse_win_id(&path)?;
    let win = state.wins_query.get_win(identity.user_id(), &id).await?;
    Ok(web::Json(WinEnvelope { win: win.into() }))
}

/// Create a win owned by the caller.
#[utoipa::path(
    post,
    path = "/wins",
    request_body = WinRequest,
    responses(
        (status = 201, description = "Win created", body = WinEnvelope),
        (status = 400, description = "Body is not valid JSON", body = ErrorSchema),
        (status = 401, description = "Unauthorized", body = ErrorSchema),
        (status = 422, description = "Title or text missing", body = ErrorSchema)
    ),
    tags = ["wins"],
    operation_id = "createWin",
    security(("BearerToken" = []))
)]
#[post("/wins")]
pub async fn create_win(
    identity: BearerIdentity,
    state: web::Data<HttpState>,
    payload: WinPayload,
) -> ApiResult<HttpResponse> {
    let WinFieldsBody { title, text } = decode_payload(payload)?;
    let win = state
        .wins_command
        .create_win(identity.user_id(), WinDraftFields { title, text })
        .await?;
    Ok(HttpResponse::Created().json(WinEnvelope { win: win.into() }))
}

/// Merge changes into one of the caller's wins.
///
/// Omitted and empty-string fields leave the stored value unchanged.
#[utoipa::path(
    patch,
    path = "/wins/{id}",
    params(("id" = String, Path, description = "Win identifier")),
    request_body = WinRequest,
    responses(
        (status = 204, description = "Win updated"),
        (status = 400, description = "Body is not valid JSON", body = ErrorSchema),
        (status = 401, description = "Unauthorized or not the owner", body = ErrorSchema),
        (status = 404, description = "Not found", body = ErrorSchema)
    ),
    tags = ["wins"],
    operation_id = "updateWin",
    security(("BearerToken" = []))
)]
#[patch("/wins/{id}")]
pub async fn update_win(
    identity: BearerIdentity,
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: WinPayload,
) -> ApiResult<HttpResponse> {
    let id = parse_win_id(&path)?;
    let WinFieldsBody { title, text } = decode_payload(payload)?;
    state
        .wins_command
        .update_win(identity.user_id(), &id, WinPatch { title, text })
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Delete one of the caller's wins.
#[utoipa::path(
    delete,
    path = "/wins/{id}",
    params(("id" = String, Path, description = "Win identifier")),
    responses(
        (status = 204, description = "Win deleted"),
        (status = 401, description = "Unauthorized or not the owner", body = ErrorSchema),
        (status = 404, description = "Not found", body = ErrorSchema)
    ),
    tags = ["wins"],
    operation_id = "deleteWin",
    security(("BearerToken" = []))
)]
#[delete("/wins/{id}")]
pub async fn delete_win(
    identity: BearerIdentity,
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_win_id(&path)?;
    state.wins_command.delete_win(identity.user_id(), &id).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Register the win routes on an actix service config.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_wins)
        .service(get_win)
        .service(create_win)
        .service(update_win)
        .service(delete_win);
}

#[cfg(test)]
#[path = "wins_tests.rs"]
mod tests;
