//! Design catalog endpoints

use actix_web::{web, HttpResponse};
use serde::Serialize;
use tracing::{debug, info};
use utoipa::ToSchema;

use crate::AppState;
use crate::api::errors::{design_not_found, ErrorResponse};
use crate::catalog::CatalogQuery;
use crate::domain::{Design, NavigationIntent};

/// Design record with display extras
#[derive(Serialize, ToSchema)]
pub struct DesignView {
    #[serde(flatten)]
    pub design: Design,
    /// Localized complexity badge
    pub complexity_label: &'static str,
    /// Where the viewer page for this design lives
    pub detail_path: String,
    /// Where the print page for this design lives
    pub print_path: String,
}

impl From<&Design> for DesignView {
    fn from(design: &Design) -> Self {
        DesignView {
            complexity_label: design.complexity.label(),
            detail_path: NavigationIntent::DesignDetail(design.id.clone()).path(),
            print_path: NavigationIntent::PrintConfiguration(design.id.clone()).path(),
            design: design.clone(),
        }
    }
}

/// Response for listing designs
#[derive(Serialize, ToSchema)]
pub struct DesignsListResponse {
    pub success: bool,
    pub data: Vec<DesignView>,
    pub count: usize,
}

/// Response for a single design
#[derive(Serialize, ToSchema)]
pub struct DesignResponse {
    pub success: bool,
    pub data: DesignView,
}

/// Response for the category listing
#[derive(Serialize, ToSchema)]
pub struct CategoriesResponse {
    pub success: bool,
    pub data: Vec<String>,
}

/// GET /api/v1/designs - List designs
#[utoipa::path(
    get,
    path = "/api/v1/designs",
    tag = "designs",
    params(CatalogQuery),
    responses(
        (status = 200, description = "Designs matching the filters, in catalog order", body = DesignsListResponse),
        (status = 400, description = "Invalid filter", body = ErrorResponse)
    )
)]
pub async fn list_designs(
    state: web::Data<AppState>,
    query: web::Query<CatalogQuery>,
) -> HttpResponse {
    let designs = state.catalog.list(&query);
    let data: Vec<DesignView> = designs.iter().map(|d| DesignView::from(d.as_ref())).collect();
    let count = data.len();

    debug!(count, "Listed designs");

    HttpResponse::Ok().json(DesignsListResponse {
        success: true,
        data,
        count,
    })
}

/// GET /api/v1/designs/categories - Distinct categories
#[utoipa::path(
    get,
    path = "/api/v1/designs/categories",
    tag = "designs",
    responses(
        (status = 200, description = "Categories in first-seen order", body = CategoriesResponse)
    )
)]
pub async fn list_categories(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(CategoriesResponse {
        success: true,
        data: state.catalog.categories(),
    })
}

/// GET /api/v1/designs/{design_id} - Get a single design
#[utoipa::path(
    get,
    path = "/api/v1/designs/{design_id}",
    tag = "designs",
    params(
        ("design_id" = String, Path, description = "Design identifier (case-sensitive)")
    ),
    responses(
        (status = 200, description = "Design details", body = DesignResponse),
        (status = 404, description = "Design not found", body = ErrorResponse)
    )
)]
pub async fn get_design(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> HttpResponse {
    let design_id = path.into_inner();

    match state.catalog.lookup(&design_id) {
        Some(design) => {
            info!(design_id = %design_id, "Retrieved design");
            HttpResponse::Ok().json(DesignResponse {
                success: true,
                data: DesignView::from(design.as_ref()),
            })
        }
        None => {
            info!(design_id = %design_id, "Design not found");
            design_not_found(&design_id)
        }
    }
}
