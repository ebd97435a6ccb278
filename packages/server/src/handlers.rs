//! HTTP handler functions for the dashboard API.

use actix_web::{HttpResponse, web};
use nypd_arrests_arrest_models::{Selection, SelectionError, parse_month};
use nypd_arrests_server_models::{
    ApiDashboard, ApiDatasetInfo, ApiDropdown, ApiError, ApiHealth, ApiOffenseCount,
    DistributionQueryParams, LOGO_HREF, MapQueryParams, PAGE_DESCRIPTION, PAGE_HEADING,
    PAGE_TITLE,
};

use crate::AppState;

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /api/dashboard`
///
/// Returns the page chrome: title, description, dropdown definitions and
/// a summary of the prepared dataset.
pub async fn dashboard(state: web::Data<AppState>) -> HttpResponse {
    let dataset = state.views.dataset();

    HttpResponse::Ok().json(ApiDashboard {
        title: PAGE_TITLE.to_string(),
        heading: PAGE_HEADING.to_string(),
        description: PAGE_DESCRIPTION.to_string(),
        logo_href: LOGO_HREF.to_string(),
        month_picker: ApiDropdown::months(),
        chart_picker: ApiDropdown::chart_kinds(),
        dataset: ApiDatasetInfo {
            name: state.dataset_name.clone(),
            portal_url: state.portal_url.clone(),
            record_count: dataset.len() as u64,
            top_offenses: dataset
                .top_offenses()
                .iter()
                .map(|t| ApiOffenseCount {
                    offense: t.offense.clone(),
                    count: t.count as u64,
                })
                .collect(),
        },
    })
}

/// `GET /api/map?month=January`
///
/// Returns the map figure for the month.
pub async fn map(
    state: web::Data<AppState>,
    params: web::Query<MapQueryParams>,
) -> HttpResponse {
    match parse_month(&params.month) {
        Ok(month) => HttpResponse::Ok().json(state.views.map(month)),
        Err(e) => unsupported_selection(&e),
    }
}

/// `GET /api/distribution?month=January&kind=Per%20Boroughs`
///
/// Returns the distribution figure for the month and chart kind.
pub async fn distribution(
    state: web::Data<AppState>,
    params: web::Query<DistributionQueryParams>,
) -> HttpResponse {
    match Selection::parse(&params.month, &params.kind) {
        Ok(selection) => {
            HttpResponse::Ok().json(state.views.distribution(selection.month, selection.kind))
        }
        Err(e) => unsupported_selection(&e),
    }
}

fn unsupported_selection(e: &SelectionError) -> HttpResponse {
    log::warn!("Rejected selection: {e}");
    HttpResponse::BadRequest().json(ApiError {
        error: e.to_string(),
    })
}
