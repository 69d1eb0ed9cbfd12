//! API module - HTTP routes and handlers

pub mod errors;
pub mod handlers;
pub mod openapi;

use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::openapi::ApiDoc;

/// Configure all API routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(errors::json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(errors::query_error_handler))
        .app_data(web::PathConfig::default().error_handler(errors::path_error_handler))
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/designs")
                        // More specific routes first
                        .route("/categories", web::get().to(handlers::designs::list_categories))
                        .route("", web::get().to(handlers::designs::list_designs))
                        .route("/{design_id}", web::get().to(handlers::designs::get_design))
                )
                .service(
                    web::scope("/print")
                        .route("/options", web::get().to(handlers::estimate::print_options))
                        .route("/estimate", web::post().to(handlers::estimate::estimate))
                )
                .service(
                    web::scope("/detail-sessions")
                        .route("", web::post().to(handlers::detail::open_detail_session))
                        .route("/{session_id}", web::get().to(handlers::detail::get_detail_session))
                        .route("/{session_id}", web::delete().to(handlers::detail::close_detail_session))
                        .route("/{session_id}/zoom/{action}", web::post().to(handlers::detail::zoom))
                )
                .service(
                    web::scope("/print-sessions")
                        .route("", web::post().to(handlers::print::open_print_session))
                        .route("/{session_id}", web::get().to(handlers::print::get_print_session))
                        .route("/{session_id}", web::patch().to(handlers::print::update_print_session))
                        .route("/{session_id}", web::delete().to(handlers::print::close_print_session))
                        .route("/{session_id}/submit", web::post().to(handlers::print::submit))
                )
        )
        .route("/health", web::get().to(handlers::health::health_check))
        // Swagger UI and OpenAPI spec
        .service(
            SwaggerUi::new("/swagger-ui/{_:.*}")
                .url("/api-docs/openapi.json", ApiDoc::openapi())
        );
}
