#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Arrest dataset definition, CSV download and raw row parsing.
//!
//! The dataset is described by an embedded TOML [`DatasetDefinition`]. Raw
//! CSV rows are decoded into [`RawArrestRow`] values holding only the
//! columns the dashboard displays; every other column in the file is
//! ignored at decode time.

pub mod csv_download;
pub mod definition;
pub mod parsing;

use std::path::PathBuf;

use serde::Deserialize;

pub use definition::DatasetDefinition;

/// Errors that can occur while loading the raw dataset.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// I/O error (file read, gzip decode).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The dataset definition could not be parsed.
    #[error("Invalid dataset definition: {0}")]
    Definition(#[from] toml::de::Error),

    /// A column the dashboard depends on is absent from the header row.
    #[error("CSV is missing required column {column:?}")]
    MissingColumn {
        /// Name of the missing column.
        column: &'static str,
    },
}

/// Where the raw CSV is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetLocation {
    /// Download over HTTP(S).
    Url(String),
    /// Read from the local filesystem.
    Path(PathBuf),
}

impl std::fmt::Display for DatasetLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Url(url) => write!(f, "{url}"),
            Self::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Columns that must be present in the CSV header.
pub const REQUIRED_COLUMNS: &[&str] = &[
    "ARREST_DATE",
    "OFNS_DESC",
    "ARREST_BORO",
    "AGE_GROUP",
    "PERP_SEX",
    "Latitude",
    "Longitude",
];

/// One undecoded CSV row, restricted to the columns used for display.
///
/// Identifier, precinct, jurisdiction, law code and projected coordinate
/// columns are dropped by not being declared here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawArrestRow {
    /// `ARREST_DATE`, unparsed.
    #[serde(rename = "ARREST_DATE")]
    pub arrest_date: String,
    /// `OFNS_DESC`, as published (upper case).
    #[serde(rename = "OFNS_DESC")]
    pub offense_description: String,
    /// `ARREST_BORO` single-letter code.
    #[serde(rename = "ARREST_BORO")]
    pub borough_code: String,
    /// `AGE_GROUP`.
    #[serde(rename = "AGE_GROUP")]
    pub age_group: String,
    /// `PERP_SEX`.
    #[serde(rename = "PERP_SEX")]
    pub sex: String,
    /// `Latitude`, unparsed.
    #[serde(rename = "Latitude")]
    pub latitude: String,
    /// `Longitude`, unparsed.
    #[serde(rename = "Longitude")]
    pub longitude: String,
}
