//! OpenAPI 3.0 specification definition

use utoipa::OpenApi;

use crate::api::errors::{ApiError, ErrorResponse};
use crate::api::handlers::{
    health::HealthResponse,
    designs::{DesignView, DesignsListResponse, DesignResponse, CategoriesResponse},
    estimate::{OptionChoice, PrintOptions, PrintOptionsResponse, EstimateView, EstimateResponse},
    detail::{OpenSessionRequest, ZoomView, ZoomAction, DetailSessionView, DetailSessionResponse, ZoomResponse},
    print::{PreviewView, PrintSessionView, PrintSessionResponse, SubmitResponse},
};
use crate::domain::{
    Complexity, ConfigUpdate, Design, Orientation, PaperSize, PaperType, PrintConfiguration,
    PrintQuality,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Print Studio API",
        version = "1.0.0",
        description = "Line-art design catalog with print configuration, live estimates and simulated order submission",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "/", description = "Current server")
    ),
    tags(
        (name = "system", description = "System health and status endpoints"),
        (name = "designs", description = "Design catalog endpoints"),
        (name = "viewer", description = "Design viewer sessions and zoom"),
        (name = "print", description = "Print configuration, estimates and submission")
    ),
    paths(
        crate::api::handlers::health::health_check,
        crate::api::handlers::designs::list_designs,
        crate::api::handlers::designs::list_categories,
        crate::api::handlers::designs::get_design,
        crate::api::handlers::estimate::print_options,
        crate::api::handlers::estimate::estimate,
        crate::api::handlers::detail::open_detail_session,
        crate::api::handlers::detail::get_detail_session,
        crate::api::handlers::detail::zoom,
        crate::api::handlers::detail::close_detail_session,
        crate::api::handlers::print::open_print_session,
        crate::api::handlers::print::get_print_session,
        crate::api::handlers::print::update_print_session,
        crate::api::handlers::print::submit,
        crate::api::handlers::print::close_print_session,
    ),
    components(
        schemas(
            // Shared
            ErrorResponse,
            ApiError,
            HealthResponse,
            // Catalog
            Design,
            Complexity,
            DesignView,
            DesignsListResponse,
            DesignResponse,
            CategoriesResponse,
            // Options and estimates
            PaperSize,
            Orientation,
            PrintQuality,
            PaperType,
            PrintConfiguration,
            ConfigUpdate,
            OptionChoice,
            PrintOptions,
            PrintOptionsResponse,
            EstimateView,
            EstimateResponse,
            // Viewer
            OpenSessionRequest,
            ZoomAction,
            ZoomView,
            DetailSessionView,
            DetailSessionResponse,
            ZoomResponse,
            // Print sessions
            PreviewView,
            PrintSessionView,
            PrintSessionResponse,
            SubmitResponse,
        )
    )
)]
pub struct ApiDoc;
