//! Health probes for the wins API process.
//!
//! `/health/ready` answers 200 once the win and credential adapters are wired
//! and the listener is bound. `/health/live` answers 200 until the process is
//! flagged as draining. Both respond 503 otherwise and are never cached.

use std::sync::atomic::{AtomicBool, Ordering};

use actix_web::{HttpResponse, get, http::header, web};

/// The two probes served by this module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Probe {
    Ready,
    Live,
}

/// Probe flags shared between the server bootstrap and the handlers.
#[derive(Debug)]
pub struct HealthState {
    serving: AtomicBool,
    draining: AtomicBool,
}

impl Default for HealthState {
    fn default() -> Self {
        Self {
            serving: AtomicBool::new(false),
            draining: AtomicBool::new(false),
        }
    }
}

impl HealthState {
    /// A process that is alive but not yet accepting win traffic.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that the adapters are wired and the listener is bound.
    pub fn mark_ready(&self) {
        self.serving.store(true, Ordering::Release);
    }

    /// Record that the process is draining.
    pub fn mark_unhealthy(&self) {
        self.draining.store(true, Ordering::Release);
    }

    pub fn is_ready(&self) -> bool {
        self.passes(Probe::Ready)
    }

    pub fn is_alive(&self) -> bool {
        self.passes(Probe::Live)
    }

    /// Whether `probe` currently reports success.
    ///
    /// A draining process is neither live nor ready.
    pub fn passes(&self, probe: Probe) -> bool {
        let draining = self.draining.load(Ordering::Acquire);
        match probe {
            Probe::Live => !draining,
            Probe::Ready => !draining && self.serving.load(Ordering::Acquire),
        }
    }
}

fn respond(state: &HealthState, probe: Probe) -> HttpResponse {
    let mut builder = if state.passes(probe) {
        HttpResponse::Ok()
    } else {
        HttpResponse::ServiceUnavailable()
    };
    builder
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .finish()
}

/// Whether the wins API accepts traffic.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    security([]),
    responses(
        (status = 200, description = "Wins API is accepting requests"),
        (status = 503, description = "Still starting up or draining")
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    respond(&state, Probe::Ready)
}

/// Whether the process should be kept running.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    security([]),
    responses(
        (status = 200, description = "Process is running"),
        (status = 503, description = "Process is draining")
    )
)]
#[get("/health/live")]
pub async fn live(state: web::Data<HealthState>) -> HttpResponse {
    respond(&state, Probe::Live)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use rstest::{fixture, rstest};

    #[fixture]
    fn state() -> web::Data<HealthState> {
        web::Data::new(HealthState::new())
    }

    async fn status_of(state: &web::Data<HealthState>, uri: &str) -> StatusCode {
        let app = actix_test::init_service(
            App::new()
                .app_data(state.clone())
                .service(ready)
                .service(live),
        )
        .await;
        let res = actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(
            res.headers()
                .get(header::CACHE_CONTROL)
                .and_then(|value| value.to_str().ok()),
            Some("no-store")
        );
        res.status()
    }

    #[rstest]
    #[case::booting(false, false, true, false)]
    #[case::serving(true, false, true, true)]
    #[case::draining_after_start(true, true, false, false)]
    #[case::draining_before_start(false, true, false, false)]
    fn probe_flags_combine(
        #[case] serving: bool,
        #[case] draining: bool,
        #[case] expect_live: bool,
        #[case] expect_ready: bool,
    ) {
        let state = HealthState::new();
        if serving {
            state.mark_ready();
        }
        if draining {
            state.mark_unhealthy();
        }
        assert_eq!(state.passes(Probe::Live), expect_live);
        assert_eq!(state.passes(Probe::Ready), expect_ready);
    }

    #[rstest]
    #[actix_web::test]
    async fn readiness_waits_for_the_server_to_start(state: web::Data<HealthState>) {
        assert_eq!(status_of(&state, "/health/live").await, StatusCode::OK);
        assert_eq!(
            status_of(&state, "/health/ready").await,
            StatusCode::SERVICE_UNAVAILABLE
        );

        state.mark_ready();
        assert_eq!(status_of(&state, "/health/ready").await, StatusCode::OK);
    }

    #[rstest]
    #[actix_web::test]
    async fn draining_fails_both_probes(state: web::Data<HealthState>) {
        state.mark_ready();
        state.mark_unhealthy();
        assert_eq!(
            status_of(&state, "/health/live").await,
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            status_of(&state, "/health/ready").await,
            StatusCode::SERVICE_UNAVAILABLE
        );
    }
}
