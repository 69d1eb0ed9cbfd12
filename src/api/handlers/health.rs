//! Health check endpoint

use actix_web::{web, HttpResponse};
use serde::Serialize;
use utoipa::ToSchema;

use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub uptime_seconds: u64,
    pub designs_loaded: usize,
    pub active_sessions: usize,
    pub print_backend: &'static str,
}

/// GET /health - Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "system",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let uptime = (chrono::Utc::now() - state.started_at).num_seconds().max(0) as u64;

    let response = HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: uptime,
        designs_loaded: state.catalog.len(),
        active_sessions: state.sessions.len(),
        print_backend: state.backend.name(),
    };

    HttpResponse::Ok().json(response)
}

#[cfg(test)]
mod tests {
    use crate::api::test_support::{test_app, test_state};
    use actix_web::test;
    use serde_json::Value;

    #[actix_web::test]
    async fn test_health_reports_catalog() {
        let app = test::init_service(test_app(test_state())).await;
        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "healthy");
        assert_eq!(body["designs_loaded"], crate::catalog::builtin_designs().len());
        assert_eq!(body["active_sessions"], 0);
        assert_eq!(body["print_backend"], "simulated");
    }
}
