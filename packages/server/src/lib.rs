#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web server for the NYPD arrests dashboard.
//!
//! Downloads and prepares the arrest dataset once at startup, then serves
//! the map and distribution figures for each dropdown selection from the
//! `/api` scope, plus the static frontend that renders them. A dataset
//! load failure aborts startup before the server binds.

pub mod config;
mod handlers;

use std::sync::Arc;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{App, HttpServer, middleware, web};
use nypd_arrests_charts::{MapSettings, ViewController};
use nypd_arrests_dataset::DatasetError;
use nypd_arrests_source::{DatasetDefinition, SourceError};

pub use config::{ConfigError, ServerConfig};

/// Shared application state.
pub struct AppState {
    /// Figure builder over the prepared dataset.
    pub views: ViewController,
    /// Dataset name for attribution.
    pub dataset_name: String,
    /// Dataset portal page for attribution.
    pub portal_url: Option<String>,
}

/// Errors that stop the server from starting or running.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// The environment is misconfigured.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The embedded dataset definition is invalid.
    #[error(transparent)]
    Definition(#[from] SourceError),

    /// The dataset could not be loaded or cleaned.
    #[error("Failed to load dataset: {0}")]
    Dataset(#[from] DatasetError),

    /// Binding or running the HTTP server failed.
    #[error("HTTP server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Registers the `/api` routes.
pub fn api_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(handlers::health))
            .route("/dashboard", web::get().to(handlers::dashboard))
            .route("/map", web::get().to(handlers::map))
            .route("/distribution", web::get().to(handlers::distribution)),
    );
}

/// Starts the dashboard server.
///
/// Reads [`ServerConfig`] from the environment, loads and prepares the
/// dataset, and starts the Actix-Web HTTP server. The caller provides the
/// async runtime (e.g. via `#[actix_web::main]`).
///
/// # Errors
///
/// Returns [`ServerError`] if configuration is invalid, the dataset cannot
/// be loaded, or the HTTP server fails to bind or run.
#[allow(clippy::future_not_send)]
pub async fn run_server() -> Result<(), ServerError> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    let config = ServerConfig::from_env()?;
    let definition = DatasetDefinition::nypd_arrests_ytd()?;
    let location = definition.location(config.dataset_url.clone(), config.dataset_path.clone());

    log::info!("Loading dataset {}...", definition.name);
    let dataset = nypd_arrests_dataset::load(&definition, &location).await?;
    log::info!("Dataset ready: {} records", dataset.len());

    let state = web::Data::new(AppState {
        views: ViewController::new(
            Arc::new(dataset),
            MapSettings::new(config.mapbox_access_token.clone()),
        ),
        dataset_name: definition.name.clone(),
        portal_url: definition.portal_url.clone(),
    });

    let static_dir = config.static_dir.clone();

    log::info!("Starting server on {}:{}", config.bind_addr, config.port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .configure(api_routes)
            // Serve frontend static files
            .service(Files::new("/", &static_dir).index_file("index.html"))
    })
    .bind((config.bind_addr.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::test;
    use chrono::NaiveDate;
    use nypd_arrests_arrest_models::{ArrestRecord, Borough};
    use nypd_arrests_chart_models::Figure;
    use nypd_arrests_dataset::PreparedDataset;
    use nypd_arrests_server_models::{ApiDashboard, ApiError, ApiHealth};

    use super::*;

    fn record(month: u32, offense: &str, borough: Borough) -> ArrestRecord {
        ArrestRecord {
            arrest_date: NaiveDate::from_ymd_opt(2022, month, 20).unwrap(),
            offense: offense.to_string(),
            borough,
            age_group: "25-44".to_string(),
            sex: "M".to_string(),
            latitude: Some(40.7),
            longitude: Some(-73.9),
        }
    }

    fn state() -> web::Data<AppState> {
        let dataset = PreparedDataset::from_records(
            vec![
                record(1, "Robbery", Borough::Brooklyn),
                record(1, "Robbery", Borough::Queens),
                record(1, "Assault", Borough::Brooklyn),
            ],
            10,
        );
        web::Data::new(AppState {
            views: ViewController::new(Arc::new(dataset), MapSettings::new("pk.test")),
            dataset_name: "NYPD Arrest Data (Year to Date)".to_string(),
            portal_url: None,
        })
    }

    #[actix_web::test]
    async fn health_reports_version() {
        let app = test::init_service(App::new().configure(api_routes)).await;
        let req = test::TestRequest::get().uri("/api/health").to_request();
        let body: ApiHealth = test::call_and_read_body_json(&app, req).await;
        assert!(body.healthy);
        assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
    }

    #[actix_web::test]
    async fn dashboard_describes_controls_and_dataset() {
        let app =
            test::init_service(App::new().app_data(state()).configure(api_routes)).await;
        let req = test::TestRequest::get().uri("/api/dashboard").to_request();
        let body: ApiDashboard = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.title, "NYPD 2022 Arrests");
        assert_eq!(body.month_picker.options.len(), 9);
        assert_eq!(body.chart_picker.value, "Per Offense Types");
        assert_eq!(body.dataset.record_count, 3);
        assert_eq!(body.dataset.top_offenses[0].offense, "Robbery");
        assert_eq!(body.dataset.top_offenses[0].count, 2);
    }

    #[actix_web::test]
    async fn map_returns_points_for_month() {
        let app =
            test::init_service(App::new().app_data(state()).configure(api_routes)).await;
        let req = test::TestRequest::get()
            .uri("/api/map?month=January")
            .to_request();
        let figure: Figure = test::call_and_read_body_json(&app, req).await;
        let points: usize = figure.scatter_traces().map(|t| t.len()).sum();
        assert_eq!(points, 3);
        assert_eq!(figure.layout.mapbox.unwrap().accesstoken, "pk.test");
    }

    #[actix_web::test]
    async fn distribution_counts_offenses() {
        let app =
            test::init_service(App::new().app_data(state()).configure(api_routes)).await;
        let req = test::TestRequest::get()
            .uri("/api/distribution?month=January&kind=Per%20Offense%20Types")
            .to_request();
        let figure: Figure = test::call_and_read_body_json(&app, req).await;
        let bars: Vec<(String, u64)> = figure
            .bars()
            .map(|b| (b.x[0].clone(), b.y[0]))
            .collect();
        assert_eq!(
            bars,
            vec![("Robbery".to_string(), 2), ("Assault".to_string(), 1)]
        );
    }

    #[actix_web::test]
    async fn empty_month_returns_empty_figure() {
        let app =
            test::init_service(App::new().app_data(state()).configure(api_routes)).await;
        let req = test::TestRequest::get()
            .uri("/api/distribution?month=February&kind=Per%20Boroughs")
            .to_request();
        let figure: Figure = test::call_and_read_body_json(&app, req).await;
        assert!(figure.is_empty());
    }

    #[actix_web::test]
    async fn unknown_chart_kind_is_bad_request() {
        let app =
            test::init_service(App::new().app_data(state()).configure(api_routes)).await;
        let req = test::TestRequest::get()
            .uri("/api/distribution?month=January&kind=Per%20Precinct")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ApiError = test::read_body_json(resp).await;
        assert!(body.error.starts_with("unsupported selection"));
    }

    #[actix_web::test]
    async fn unknown_month_is_bad_request() {
        let app =
            test::init_service(App::new().app_data(state()).configure(api_routes)).await;
        let req = test::TestRequest::get()
            .uri("/api/map?month=December")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
