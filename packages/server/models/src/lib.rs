#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the arrests dashboard server.
//!
//! Figures themselves are served as
//! `nypd_arrests_chart_models::Figure`; this crate covers the query
//! parameters, page metadata and error bodies around them.

use nypd_arrests_arrest_models::{ChartKind, Month};
use serde::{Deserialize, Serialize};

/// Page title shown in the browser tab.
pub const PAGE_TITLE: &str = "NYPD 2022 Arrests";

/// Heading above the dropdowns.
pub const PAGE_HEADING: &str = "NYPD Criminal Reports App";

/// Introductory paragraph under the heading.
pub const PAGE_DESCRIPTION: &str = "This is a breakdown of every arrest effected by the NYPD \
in the ten most common offenses in NYC during 2022. Each record represents an arrest effected \
by the NYPD and includes information about the type of crime, the location of enforcement as \
well as gender and age-group of the arrested.";

/// Where the NYPD logo links to.
pub const LOGO_HREF: &str = "https://en.wikipedia.org/wiki/New_York_City_Police_Department";

/// Query parameters for the map endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapQueryParams {
    /// Month name (January through September).
    pub month: String,
}

/// Query parameters for the distribution endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionQueryParams {
    /// Month name (January through September).
    pub month: String,
    /// Chart kind (`Per Offense Types` or `Per Boroughs`).
    pub kind: String,
}

/// Health check response.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the service is healthy.
    pub healthy: bool,
    /// Service version.
    pub version: String,
}

/// Error body for rejected requests.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    /// Human-readable reason.
    pub error: String,
}

/// A dropdown control definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiDropdown {
    /// DOM id of the control.
    pub id: String,
    /// Option labels, in display order.
    pub options: Vec<String>,
    /// Initially selected option.
    pub value: String,
    /// Placeholder shown when cleared.
    pub placeholder: String,
}

impl ApiDropdown {
    /// The month picker: January through September, January selected.
    #[must_use]
    pub fn months() -> Self {
        Self {
            id: "date-picker".to_string(),
            options: Month::all().iter().map(ToString::to_string).collect(),
            value: Month::January.to_string(),
            placeholder: "Select a Month".to_string(),
        }
    }

    /// The chart kind picker, "Per Offense Types" selected.
    #[must_use]
    pub fn chart_kinds() -> Self {
        Self {
            id: "graph-select".to_string(),
            options: ChartKind::all().iter().map(ToString::to_string).collect(),
            value: ChartKind::PerOffenseTypes.to_string(),
            placeholder: "Select a Plot".to_string(),
        }
    }
}

/// Count of records for one kept offense category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiOffenseCount {
    /// Offense category.
    pub offense: String,
    /// Records in the whole prepared dataset.
    pub count: u64,
}

/// Attribution for the underlying dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiDatasetInfo {
    /// Dataset name.
    pub name: String,
    /// Data portal page, if known.
    pub portal_url: Option<String>,
    /// Records kept after cleaning.
    pub record_count: u64,
    /// Kept offense categories, most frequent first.
    pub top_offenses: Vec<ApiOffenseCount>,
}

/// Everything the page needs to render its static chrome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiDashboard {
    /// Browser tab title.
    pub title: String,
    /// Heading text.
    pub heading: String,
    /// Introductory paragraph.
    pub description: String,
    /// Logo link target.
    pub logo_href: String,
    /// Month dropdown.
    pub month_picker: ApiDropdown,
    /// Chart kind dropdown.
    pub chart_picker: ApiDropdown,
    /// Dataset attribution and summary.
    pub dataset: ApiDatasetInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_dropdown_offers_nine_months() {
        let dropdown = ApiDropdown::months();
        assert_eq!(dropdown.options.len(), 9);
        assert_eq!(dropdown.options.first().map(String::as_str), Some("January"));
        assert_eq!(dropdown.options.last().map(String::as_str), Some("September"));
        assert_eq!(dropdown.value, "January");
    }

    #[test]
    fn chart_dropdown_offers_both_kinds() {
        let dropdown = ApiDropdown::chart_kinds();
        assert_eq!(dropdown.options, ["Per Offense Types", "Per Boroughs"]);
        assert_eq!(dropdown.value, "Per Offense Types");
    }

    #[test]
    fn dashboard_serializes_camel_case() {
        let dashboard = ApiDashboard {
            title: PAGE_TITLE.to_string(),
            heading: PAGE_HEADING.to_string(),
            description: PAGE_DESCRIPTION.to_string(),
            logo_href: LOGO_HREF.to_string(),
            month_picker: ApiDropdown::months(),
            chart_picker: ApiDropdown::chart_kinds(),
            dataset: ApiDatasetInfo {
                name: "x".to_string(),
                portal_url: None,
                record_count: 0,
                top_offenses: Vec::new(),
            },
        };
        let json = serde_json::to_value(&dashboard).unwrap();
        assert_eq!(json["monthPicker"]["id"], "date-picker");
        assert_eq!(json["dataset"]["recordCount"], 0);
        assert_eq!(json["logoHref"], LOGO_HREF);
    }
}
