//! Print option domains and stateless estimates

use actix_web::{web, HttpResponse};
use serde::Serialize;
use utoipa::ToSchema;

use crate::AppState;
use crate::api::errors::ErrorResponse;
use crate::domain::{Copies, Orientation, PaperSize, PaperType, PrintConfiguration, PrintQuality};
use crate::estimate::Estimate;
use crate::order::configuration_summary;

/// One selectable value
#[derive(Serialize, ToSchema)]
pub struct OptionChoice {
    pub value: &'static str,
    pub label: &'static str,
}

/// Allowed values for every configuration field
#[derive(Serialize, ToSchema)]
pub struct PrintOptions {
    pub sizes: Vec<OptionChoice>,
    pub orientations: Vec<OptionChoice>,
    pub qualities: Vec<OptionChoice>,
    pub paper_types: Vec<OptionChoice>,
    pub copies_min: u8,
    pub copies_max: u8,
    pub defaults: PrintConfiguration,
}

#[derive(Serialize, ToSchema)]
pub struct PrintOptionsResponse {
    pub success: bool,
    pub data: PrintOptions,
}

/// Estimated figures for a configuration
#[derive(Serialize, ToSchema)]
pub struct EstimateView {
    /// Cost rounded to two decimals
    #[schema(value_type = f64)]
    pub cost: crate::estimate::Cost,
    /// Cost with currency, e.g. "R$ 4.00"
    pub cost_formatted: String,
    /// Turnaround, e.g. "5–8 minutes"
    #[schema(value_type = String)]
    pub time: crate::estimate::Turnaround,
    /// Turnaround bounds in minutes [min, max]
    pub time_range_minutes: [u32; 2],
    /// Compact configuration line, e.g. "A4 • 2 cópia(s)"
    pub summary: String,
}

impl EstimateView {
    pub fn new(config: &PrintConfiguration, currency: &str) -> Self {
        let estimate = Estimate::for_config(config);
        EstimateView {
            cost: estimate.cost,
            cost_formatted: estimate.cost.with_currency(currency),
            time: estimate.time,
            time_range_minutes: [estimate.time.minutes().0, estimate.time.minutes().1],
            summary: configuration_summary(config),
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct EstimateResponse {
    pub success: bool,
    pub data: EstimateView,
}

macro_rules! choices {
    ($ty:ident) => {
        $ty::ALL
            .iter()
            .map(|v| OptionChoice { value: v.as_str(), label: v.label() })
            .collect()
    };
}

/// GET /api/v1/print/options - Allowed values and defaults
#[utoipa::path(
    get,
    path = "/api/v1/print/options",
    tag = "print",
    responses(
        (status = 200, description = "Configuration value domains", body = PrintOptionsResponse)
    )
)]
pub async fn print_options() -> HttpResponse {
    HttpResponse::Ok().json(PrintOptionsResponse {
        success: true,
        data: PrintOptions {
            sizes: choices!(PaperSize),
            orientations: choices!(Orientation),
            qualities: choices!(PrintQuality),
            paper_types: choices!(PaperType),
            copies_min: Copies::MIN,
            copies_max: Copies::MAX,
            defaults: PrintConfiguration::default(),
        },
    })
}

/// POST /api/v1/print/estimate - Estimate a configuration without a session
#[utoipa::path(
    post,
    path = "/api/v1/print/estimate",
    tag = "print",
    request_body = PrintConfiguration,
    responses(
        (status = 200, description = "Estimated cost and turnaround", body = EstimateResponse),
        (status = 400, description = "Unknown option value", body = ErrorResponse)
    )
)]
pub async fn estimate(
    state: web::Data<AppState>,
    body: web::Json<PrintConfiguration>,
) -> HttpResponse {
    HttpResponse::Ok().json(EstimateResponse {
        success: true,
        data: EstimateView::new(&body, &state.settings.print.currency),
    })
}
