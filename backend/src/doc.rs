//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the win and health paths, the error schema mirrors
//! from [`crate::inbound::http::schemas`] and the bearer token security
//! scheme. Swagger UI serves it at `/docs` in debug builds.

use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::wins::{
    WinBody, WinEnvelope, WinFieldsBody, WinListEnvelope, WinRequest,
};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Adds the bearer token security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "BearerToken",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .description(Some(
                        "Opaque user token. `Authorization: Token token=<value>` is also accepted.",
                    ))
                    .build(),
            ),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Wins API",
        description = "Owned win records behind bearer token authentication."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("BearerToken" = [])),
    paths(
        crate::inbound::http::wins::list_wins,
        crate::inbound::http::wins::get_win,
        crate::inbound::http::wins::create_win,
        crate::inbound::http::wins::update_win,
        crate::inbound::http::wins::delete_win,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        WinBody,
        WinEnvelope,
        WinListEnvelope,
        WinFieldsBody,
        WinRequest
    )),
    tags(
        (name = "wins", description = "Win resources"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
