//! Design viewer sessions (zoom state)

use std::sync::Arc;

use actix_web::{web, HttpResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::AppState;
use crate::api::errors::{design_not_found, session_not_found, ErrorResponse};
use crate::domain::{NavigationIntent, ZoomState};
use crate::session::DetailSession;

use super::designs::DesignView;

/// Request body for opening a viewer session
#[derive(Debug, Deserialize, ToSchema)]
pub struct OpenSessionRequest {
    pub design_id: String,
}

/// Zoom control state
#[derive(Serialize, ToSchema)]
pub struct ZoomView {
    pub scale: f64,
    pub percent: u16,
    pub can_zoom_in: bool,
    pub can_zoom_out: bool,
    pub min_scale: f64,
    pub max_scale: f64,
    pub step: f64,
}

impl From<&ZoomState> for ZoomView {
    fn from(zoom: &ZoomState) -> Self {
        ZoomView {
            scale: zoom.scale(),
            percent: zoom.percent(),
            can_zoom_in: zoom.can_zoom_in(),
            can_zoom_out: zoom.can_zoom_out(),
            min_scale: ZoomState::MIN_SCALE,
            max_scale: ZoomState::MAX_SCALE,
            step: ZoomState::STEP,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct DetailSessionView {
    pub session_id: Uuid,
    pub opened_at: DateTime<Utc>,
    pub design: DesignView,
    pub zoom: ZoomView,
    /// Back to the gallery
    pub back_path: String,
}

impl DetailSessionView {
    fn new(session_id: Uuid, session: &DetailSession, opened_at: DateTime<Utc>) -> Self {
        DetailSessionView {
            session_id,
            opened_at,
            design: DesignView::from(session.design.as_ref()),
            zoom: ZoomView::from(&session.zoom),
            back_path: NavigationIntent::CatalogRoot.path(),
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct DetailSessionResponse {
    pub success: bool,
    pub data: DetailSessionView,
}

/// Zoom control actions
#[derive(Debug, Clone, Copy, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ZoomAction {
    In,
    Out,
    Reset,
}

#[derive(Serialize, ToSchema)]
pub struct ZoomResponse {
    pub success: bool,
    pub data: ZoomView,
}

fn respond(state: &AppState, session_id: Uuid) -> HttpResponse {
    let view = state
        .sessions
        .detail
        .with(&session_id, |session, opened_at| DetailSessionView::new(session_id, session, opened_at));

    match view {
        Some(data) => HttpResponse::Ok().json(DetailSessionResponse { success: true, data }),
        None => session_not_found(&session_id),
    }
}

/// POST /api/v1/detail-sessions - Open the viewer for a design
#[utoipa::path(
    post,
    path = "/api/v1/detail-sessions",
    tag = "viewer",
    request_body = OpenSessionRequest,
    responses(
        (status = 200, description = "Viewer session with zoom at 100%", body = DetailSessionResponse),
        (status = 404, description = "Design not found", body = ErrorResponse)
    )
)]
pub async fn open_detail_session(
    state: web::Data<AppState>,
    body: web::Json<OpenSessionRequest>,
) -> HttpResponse {
    let Some(design) = state.catalog.lookup(&body.design_id) else {
        return design_not_found(&body.design_id);
    };

    let session_id = state.sessions.detail.open(DetailSession::new(Arc::clone(&design)));
    info!(session_id = %session_id, design_id = %design.id, "Opened viewer session");

    respond(&state, session_id)
}

/// GET /api/v1/detail-sessions/{session_id} - Current viewer state
#[utoipa::path(
    get,
    path = "/api/v1/detail-sessions/{session_id}",
    tag = "viewer",
    params(("session_id" = Uuid, Path, description = "Viewer session id")),
    responses(
        (status = 200, description = "Viewer session", body = DetailSessionResponse),
        (status = 404, description = "Session not found", body = ErrorResponse)
    )
)]
pub async fn get_detail_session(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> HttpResponse {
    respond(&state, path.into_inner())
}

/// POST /api/v1/detail-sessions/{session_id}/zoom/{action} - Zoom in, out or reset
#[utoipa::path(
    post,
    path = "/api/v1/detail-sessions/{session_id}/zoom/{action}",
    tag = "viewer",
    params(
        ("session_id" = Uuid, Path, description = "Viewer session id"),
        ("action" = ZoomAction, Path, description = "in, out or reset")
    ),
    responses(
        (status = 200, description = "Zoom after the action; bounds are no-ops", body = ZoomResponse),
        (status = 404, description = "Session not found", body = ErrorResponse)
    )
)]
pub async fn zoom(
    state: web::Data<AppState>,
    path: web::Path<(Uuid, ZoomAction)>,
) -> HttpResponse {
    let (session_id, action) = path.into_inner();

    let zoom = state.sessions.detail.with_mut(&session_id, |session| {
        match action {
            ZoomAction::In => session.zoom.zoom_in(),
            ZoomAction::Out => session.zoom.zoom_out(),
            ZoomAction::Reset => session.zoom.reset(),
        };
        ZoomView::from(&session.zoom)
    });

    match zoom {
        Some(data) => HttpResponse::Ok().json(ZoomResponse { success: true, data }),
        None => session_not_found(&session_id),
    }
}

/// DELETE /api/v1/detail-sessions/{session_id} - Leave the viewer
#[utoipa::path(
    delete,
    path = "/api/v1/detail-sessions/{session_id}",
    tag = "viewer",
    params(("session_id" = Uuid, Path, description = "Viewer session id")),
    responses(
        (status = 204, description = "Session discarded"),
        (status = 404, description = "Session not found", body = ErrorResponse)
    )
)]
pub async fn close_detail_session(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> HttpResponse {
    let session_id = path.into_inner();
    match state.sessions.detail.close(&session_id) {
        Some(_) => HttpResponse::NoContent().finish(),
        None => session_not_found(&session_id),
    }
}
