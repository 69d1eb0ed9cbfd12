//! Print configuration sessions and order submission

use std::sync::Arc;

use actix_web::{web, HttpResponse};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, error, info};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::AppState;
use crate::api::errors::{design_not_found, session_not_found, ErrorResponse};
use crate::domain::{ConfigUpdate, NavigationIntent, Orientation, PaperSize, PrintConfiguration};
use crate::order::{submit_order, SubmissionError, SubmissionOutcome};
use crate::session::PrintSession;

use super::designs::DesignView;
use super::detail::OpenSessionRequest;
use super::estimate::EstimateView;

/// Preview frame for the configured sheet
#[derive(Serialize, ToSchema)]
pub struct PreviewView {
    /// Width:height of the frame, "3:4" or "4:3"
    pub aspect_ratio: String,
    /// "large" for A3, "compact" for A4
    pub frame: &'static str,
    /// Sheet width and height in centimetres, as oriented
    pub sheet_cm: [f64; 2],
    /// e.g. "A4 • Retrato • Normal"
    pub caption: String,
}

impl From<&PrintConfiguration> for PreviewView {
    fn from(config: &PrintConfiguration) -> Self {
        let (w, h) = config.orientation.aspect_ratio();
        let (short, long) = config.size.dimensions_cm();
        PreviewView {
            aspect_ratio: format!("{}:{}", w, h),
            frame: match config.size {
                PaperSize::A3 => "large",
                PaperSize::A4 => "compact",
            },
            sheet_cm: match config.orientation {
                Orientation::Portrait => [short, long],
                Orientation::Landscape => [long, short],
            },
            caption: format!(
                "{} • {} • {}",
                config.size,
                config.orientation.label(),
                config.quality.label()
            ),
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct PrintSessionView {
    pub session_id: Uuid,
    pub opened_at: DateTime<Utc>,
    pub design: DesignView,
    pub config: PrintConfiguration,
    pub estimate: EstimateView,
    pub preview: PreviewView,
    /// Submit control is disabled while true
    pub is_processing: bool,
    /// Back to the design viewer
    pub back_path: String,
}

#[derive(Serialize, ToSchema)]
pub struct PrintSessionResponse {
    pub success: bool,
    pub data: PrintSessionView,
}

#[derive(Serialize, ToSchema)]
pub struct SubmitResponse {
    pub success: bool,
    /// Confirmation text and where to navigate next
    #[schema(value_type = Object)]
    pub data: SubmissionOutcome,
}

fn respond(state: &AppState, session_id: Uuid) -> HttpResponse {
    let currency = &state.settings.print.currency;
    let view = state.sessions.print.with(&session_id, |session, opened_at| PrintSessionView {
        session_id,
        opened_at,
        design: DesignView::from(session.design.as_ref()),
        config: session.config,
        estimate: EstimateView::new(&session.config, currency),
        preview: PreviewView::from(&session.config),
        is_processing: session.gate.is_processing(),
        back_path: NavigationIntent::DesignDetail(session.design.id.clone()).path(),
    });

    match view {
        Some(data) => HttpResponse::Ok().json(PrintSessionResponse { success: true, data }),
        None => session_not_found(&session_id),
    }
}

/// POST /api/v1/print-sessions - Open the print page for a design
#[utoipa::path(
    post,
    path = "/api/v1/print-sessions",
    tag = "print",
    request_body = OpenSessionRequest,
    responses(
        (status = 200, description = "Print session with default configuration", body = PrintSessionResponse),
        (status = 404, description = "Design not found", body = ErrorResponse)
    )
)]
pub async fn open_print_session(
    state: web::Data<AppState>,
    body: web::Json<OpenSessionRequest>,
) -> HttpResponse {
    let Some(design) = state.catalog.lookup(&body.design_id) else {
        return design_not_found(&body.design_id);
    };

    let session_id = state.sessions.print.open(PrintSession::new(Arc::clone(&design)));
    info!(session_id = %session_id, design_id = %design.id, "Opened print session");

    respond(&state, session_id)
}

/// GET /api/v1/print-sessions/{session_id} - Configuration with live estimate
#[utoipa::path(
    get,
    path = "/api/v1/print-sessions/{session_id}",
    tag = "print",
    params(("session_id" = Uuid, Path, description = "Print session id")),
    responses(
        (status = 200, description = "Print session", body = PrintSessionResponse),
        (status = 404, description = "Session not found", body = ErrorResponse)
    )
)]
pub async fn get_print_session(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> HttpResponse {
    respond(&state, path.into_inner())
}

/// PATCH /api/v1/print-sessions/{session_id} - Change configuration fields
#[utoipa::path(
    patch,
    path = "/api/v1/print-sessions/{session_id}",
    tag = "print",
    params(("session_id" = Uuid, Path, description = "Print session id")),
    request_body = ConfigUpdate,
    responses(
        (status = 200, description = "Updated session with recomputed estimate", body = PrintSessionResponse),
        (status = 400, description = "Unknown option value", body = ErrorResponse),
        (status = 404, description = "Session not found", body = ErrorResponse)
    )
)]
pub async fn update_print_session(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<ConfigUpdate>,
) -> HttpResponse {
    let session_id = path.into_inner();

    let updated = state.sessions.print.with_mut(&session_id, |session| {
        session.config.apply(&body);
        session.config
    });

    match updated {
        Some(config) => {
            debug!(session_id = %session_id, config = ?config, "Updated print configuration");
            respond(&state, session_id)
        }
        None => session_not_found(&session_id),
    }
}

/// POST /api/v1/print-sessions/{session_id}/submit - Submit the print job
#[utoipa::path(
    post,
    path = "/api/v1/print-sessions/{session_id}/submit",
    tag = "print",
    params(("session_id" = Uuid, Path, description = "Print session id")),
    responses(
        (status = 200, description = "Submitted; the session is closed", body = SubmitResponse),
        (status = 404, description = "Session not found", body = ErrorResponse),
        (status = 409, description = "A submission is already in progress", body = ErrorResponse),
        (status = 502, description = "Print backend failed; the session stays open", body = ErrorResponse)
    )
)]
pub async fn submit(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> HttpResponse {
    let session_id = path.into_inner();

    let snapshot = state.sessions.print.with(&session_id, |session, _| {
        (Arc::clone(&session.design), session.config, session.gate.clone())
    });
    let Some((design, config, gate)) = snapshot else {
        return session_not_found(&session_id);
    };

    let close_session = || {
        state.sessions.print.close(&session_id);
    };

    match submit_order(&gate, state.backend.as_ref(), design, config, close_session).await {
        Ok(outcome) => {
            info!(session_id = %session_id, "Print session completed");
            HttpResponse::Ok().json(SubmitResponse {
                success: true,
                data: outcome,
            })
        }
        Err(SubmissionError::AlreadyProcessing) => HttpResponse::Conflict().json(ErrorResponse::new(
            "SUBMISSION_IN_PROGRESS",
            "This print job is already being submitted",
        )),
        Err(SubmissionError::Backend(e)) => {
            error!(session_id = %session_id, error = %e, "Print submission failed");
            HttpResponse::BadGateway().json(ErrorResponse::new("SUBMISSION_FAILED", e.to_string()))
        }
    }
}

/// DELETE /api/v1/print-sessions/{session_id} - Leave the print page
#[utoipa::path(
    delete,
    path = "/api/v1/print-sessions/{session_id}",
    tag = "print",
    params(("session_id" = Uuid, Path, description = "Print session id")),
    responses(
        (status = 204, description = "Session discarded"),
        (status = 404, description = "Session not found", body = ErrorResponse)
    )
)]
pub async fn close_print_session(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> HttpResponse {
    let session_id = path.into_inner();
    match state.sessions.print.close(&session_id) {
        Some(_) => HttpResponse::NoContent().finish(),
        None => session_not_found(&session_id),
    }
}

#[cfg(test)]
mod tests {
    use crate::api::test_support::{test_app, test_state, test_state_with_backend};
    use crate::order::{BackendError, PrintBackend, PrintJob};
    use actix_web::{http::StatusCode, test};
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::Arc;

    struct OfflineBackend;

    #[async_trait]
    impl PrintBackend for OfflineBackend {
        fn name(&self) -> &'static str {
            "offline"
        }

        async fn submit(&self, _job: &PrintJob) -> Result<(), BackendError> {
            Err(BackendError::Unavailable("printer offline".to_string()))
        }
    }

    fn open_request(design_id: &str) -> test::TestRequest {
        test::TestRequest::post()
            .uri("/api/v1/print-sessions")
            .set_json(json!({ "design_id": design_id }))
    }

    #[actix_web::test]
    async fn test_open_starts_at_defaults() {
        let app = test::init_service(test_app(test_state())).await;
        let body: Value = test::call_and_read_body_json(&app, open_request("unicornio-magico").to_request()).await;

        let data = &body["data"];
        assert_eq!(data["config"], json!({
            "size": "A4",
            "orientation": "portrait",
            "quality": "normal",
            "paper_type": "regular",
            "copies": 1
        }));
        assert_eq!(data["estimate"]["cost_formatted"], "R$ 2.00");
        assert_eq!(data["estimate"]["time"], "5–8 minutes");
        assert_eq!(data["preview"]["aspect_ratio"], "3:4");
        assert_eq!(data["is_processing"], false);
        assert_eq!(data["back_path"], "/design/unicornio-magico");
    }

    #[actix_web::test]
    async fn test_update_recomputes_estimate() {
        let app = test::init_service(test_app(test_state())).await;
        let body: Value = test::call_and_read_body_json(&app, open_request("unicornio-magico").to_request()).await;
        let sid = body["data"]["session_id"].as_str().unwrap().to_string();

        let req = test::TestRequest::patch()
            .uri(&format!("/api/v1/print-sessions/{}", sid))
            .set_json(json!({ "size": "A3", "quality": "high", "paper_type": "photo", "copies": 3 }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["estimate"]["cost"], 27.0);
        assert_eq!(body["data"]["estimate"]["time"], "10–15 minutes");
        assert_eq!(body["data"]["preview"]["frame"], "large");
        assert_eq!(body["data"]["preview"]["sheet_cm"], json!([29.7, 42.0]));

        let req = test::TestRequest::patch()
            .uri(&format!("/api/v1/print-sessions/{}", sid))
            .set_json(json!({ "copies": "" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["config"]["copies"], 1);
        assert_eq!(body["data"]["config"]["size"], "A3");
    }

    #[actix_web::test]
    async fn test_update_rejects_unknown_value_and_keeps_config() {
        let app = test::init_service(test_app(test_state())).await;
        let body: Value = test::call_and_read_body_json(&app, open_request("fazendinha").to_request()).await;
        let sid = body["data"]["session_id"].as_str().unwrap().to_string();

        let req = test::TestRequest::patch()
            .uri(&format!("/api/v1/print-sessions/{}", sid))
            .set_json(json!({ "quality": "ultra", "copies": 5 }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/print-sessions/{}", sid))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["config"]["copies"], 1);
    }

    #[actix_web::test]
    async fn test_update_absorbs_non_numeric_copies() {
        let app = test::init_service(test_app(test_state())).await;
        let body: Value = test::call_and_read_body_json(&app, open_request("gatinho-brincalhao").to_request()).await;
        let sid = body["data"]["session_id"].as_str().unwrap().to_string();
        let patch = |payload: Value| {
            test::TestRequest::patch()
                .uri(&format!("/api/v1/print-sessions/{}", sid))
                .set_json(payload)
                .to_request()
        };

        let body: Value = test::call_and_read_body_json(&app, patch(json!({ "copies": 4 }))).await;
        assert_eq!(body["data"]["config"]["copies"], 4);

        let body: Value = test::call_and_read_body_json(&app, patch(json!({ "size": "A3", "copies": true }))).await;
        assert_eq!(body["data"]["config"]["size"], "A3");
        assert_eq!(body["data"]["config"]["copies"], 1);

        for odd in [json!([]), json!({})] {
            test::call_service(&app, patch(json!({ "copies": 4 }))).await;
            let body: Value = test::call_and_read_body_json(&app, patch(json!({ "copies": odd }))).await;
            assert_eq!(body["data"]["config"]["copies"], 1);
        }

        test::call_service(&app, patch(json!({ "copies": 4 }))).await;
        let body: Value = test::call_and_read_body_json(&app, patch(json!({ "copies": null }))).await;
        assert_eq!(body["data"]["config"]["copies"], 1);
        assert_eq!(body["data"]["config"]["size"], "A3");
    }

    #[actix_web::test]
    async fn test_completed_session_cannot_be_resubmitted() {
        let state = test_state();
        let app = test::init_service(test_app(state.clone())).await;
        let body: Value = test::call_and_read_body_json(&app, open_request("foguete-espacial").to_request()).await;
        let sid = body["data"]["session_id"].as_str().unwrap().to_string();
        let submit = || {
            test::TestRequest::post()
                .uri(&format!("/api/v1/print-sessions/{}/submit", sid))
                .to_request()
        };

        assert_eq!(test::call_service(&app, submit()).await.status(), StatusCode::OK);
        assert_eq!(test::call_service(&app, submit()).await.status(), StatusCode::NOT_FOUND);
        assert!(state.sessions.print.is_empty());
    }

    #[actix_web::test]
    async fn test_submit_confirms_and_closes_session() {
        let state = test_state();
        let app = test::init_service(test_app(state.clone())).await;
        let body: Value = test::call_and_read_body_json(&app, open_request("unicornio-magico").to_request()).await;
        let sid = body["data"]["session_id"].as_str().unwrap().to_string();

        let req = test::TestRequest::patch()
            .uri(&format!("/api/v1/print-sessions/{}", sid))
            .set_json(json!({ "orientation": "landscape", "copies": 2 }))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::post()
            .uri(&format!("/api/v1/print-sessions/{}/submit", sid))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["navigate_to"], "/");
        let lines = body["data"]["confirmation"]["lines"].as_array().unwrap();
        assert_eq!(lines[0], "Desenho: Unicórnio Mágico");
        assert_eq!(lines[2], "Orientação: Paisagem");
        assert_eq!(lines[5], "Cópias: 2");
        assert!(state.sessions.print.is_empty());
    }

    #[actix_web::test]
    async fn test_concurrent_submit_is_refused() {
        let state = test_state();
        let app = test::init_service(test_app(state.clone())).await;
        let body: Value = test::call_and_read_body_json(&app, open_request("fundo-do-mar").to_request()).await;
        let sid: uuid::Uuid = body["data"]["session_id"].as_str().unwrap().parse().unwrap();

        // Hold the gate as an in-flight submission would
        let gate = state.sessions.print.with(&sid, |s, _| s.gate.clone()).unwrap();
        let guard = gate.try_begin().unwrap();

        let req = test::TestRequest::get().uri(&format!("/api/v1/print-sessions/{}", sid)).to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["is_processing"], true);

        let req = test::TestRequest::post()
            .uri(&format!("/api/v1/print-sessions/{}/submit", sid))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);
        assert_eq!(state.sessions.print.len(), 1);

        drop(guard);
        let req = test::TestRequest::post()
            .uri(&format!("/api/v1/print-sessions/{}/submit", sid))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_backend_failure_keeps_session_idle() {
        let state = test_state_with_backend(Arc::new(OfflineBackend));
        let app = test::init_service(test_app(state.clone())).await;
        let body: Value = test::call_and_read_body_json(&app, open_request("mandala-floral").to_request()).await;
        let sid = body["data"]["session_id"].as_str().unwrap().to_string();

        let req = test::TestRequest::post()
            .uri(&format!("/api/v1/print-sessions/{}/submit", sid))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "SUBMISSION_FAILED");

        let req = test::TestRequest::get().uri(&format!("/api/v1/print-sessions/{}", sid)).to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["is_processing"], false);
    }

    #[actix_web::test]
    async fn test_submit_unknown_session() {
        let app = test::init_service(test_app(test_state())).await;
        let req = test::TestRequest::post()
            .uri(&format!("/api/v1/print-sessions/{}/submit", uuid::Uuid::new_v4()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
