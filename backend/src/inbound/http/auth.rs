//! Bearer identity extraction for HTTP handlers.
//!
//! Handlers take a [`BearerIdentity`] as their first parameter. Actix polls a
//! handler's extractors together, so handlers that read a body take it as a
//! `Result` and inspect it only after the identity has resolved.

use actix_web::http::header::AUTHORIZATION;
use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use futures_util::future::LocalBoxFuture;

use crate::domain::{AuthenticationError, Error, UserId};
use crate::inbound::http::state::HttpState;

/// Authenticated caller resolved from the `Authorization` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BearerIdentity(UserId);

impl BearerIdentity {
    /// Identity of the caller.
    pub fn user_id(&self) -> &UserId {
        &self.0
    }
}

impl FromRequest for BearerIdentity {
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let state = req.app_data::<web::Data<HttpState>>().cloned();
        let header = req
            .headers()
            .get(AUTHORIZATION)
            .map(|value| value.to_str().map(str::to_owned));

        Box::pin(async move {
            let Some(state) = state else {
                return Err(Error::internal("HTTP state is not configured"));
            };
            let header = match header {
                None => None,
                Some(Ok(value)) => Some(value),
                Some(Err(_)) => return Err(AuthenticationError::MalformedHeader.into()),
            };
            state
                .authenticator
                .authenticate(header.as_deref())
                .await
                .map(BearerIdentity)
        })
    }
}
