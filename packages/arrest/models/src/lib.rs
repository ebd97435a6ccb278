#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Arrest record, borough, month and chart selection types.
//!
//! These are the closed vocabularies the dashboard works with. Borough
//! codes, selectable months and chart kinds are all enums so that every
//! lookup is an exhaustive `match` rather than a dictionary fallthrough.

use chrono::{Datelike as _, NaiveDate};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// One of the five New York City boroughs.
///
/// Variants are declared in ascending alphabetical order of their display
/// names, so the derived [`Ord`] sorts boroughs alphabetically.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
)]
pub enum Borough {
    /// Code `B`.
    Bronx,
    /// Code `K`.
    Brooklyn,
    /// Code `M`.
    Manhattan,
    /// Code `Q`.
    Queens,
    /// Code `S`.
    #[serde(rename = "Staten Island")]
    #[strum(serialize = "Staten Island")]
    StatenIsland,
}

impl Borough {
    /// Maps an `ARREST_BORO` single-letter code to its borough.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownBoroughCodeError`] for any code outside
    /// `B`, `K`, `M`, `Q`, `S`.
    pub fn from_code(code: &str) -> Result<Self, UnknownBoroughCodeError> {
        match code.trim() {
            "B" => Ok(Self::Bronx),
            "K" => Ok(Self::Brooklyn),
            "M" => Ok(Self::Manhattan),
            "Q" => Ok(Self::Queens),
            "S" => Ok(Self::StatenIsland),
            other => Err(UnknownBoroughCodeError {
                code: other.to_string(),
            }),
        }
    }

    /// Returns all boroughs in ascending alphabetical order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Bronx,
            Self::Brooklyn,
            Self::Manhattan,
            Self::Queens,
            Self::StatenIsland,
        ]
    }
}

/// Error returned when a borough code is not one of the five known codes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown borough code {code:?}: expected one of B, K, M, Q, S")]
pub struct UnknownBoroughCodeError {
    /// The code that was provided.
    pub code: String,
}

/// A selectable month.
///
/// The dataset is year-to-date through September, so only January through
/// September are offered.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
}

impl Month {
    /// Returns the calendar month number (1-based).
    #[must_use]
    pub const fn number(self) -> u32 {
        self as u32 + 1
    }

    /// Whether `date` falls in this month of any year.
    #[must_use]
    pub fn contains(self, date: NaiveDate) -> bool {
        date.month() == self.number()
    }

    /// Returns all selectable months in calendar order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::January,
            Self::February,
            Self::March,
            Self::April,
            Self::May,
            Self::June,
            Self::July,
            Self::August,
            Self::September,
        ]
    }
}

/// Which breakdown the distribution chart shows.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
)]
pub enum ChartKind {
    /// One bar per offense category.
    #[serde(rename = "Per Offense Types")]
    #[strum(to_string = "Per Offense Types")]
    PerOffenseTypes,
    /// One bar per borough.
    #[serde(rename = "Per Boroughs", alias = "Per Borough")]
    #[strum(to_string = "Per Boroughs", serialize = "Per Borough")]
    PerBoroughs,
}

impl ChartKind {
    /// Returns all chart kinds in the order they are offered.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::PerOffenseTypes, Self::PerBoroughs]
    }
}

/// Error returned when a UI selection names an option that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    /// Not one of the selectable month names.
    #[error("unsupported selection: unknown month {0:?}")]
    Month(String),
    /// Not one of the chart kinds.
    #[error("unsupported selection: unknown chart kind {0:?}")]
    ChartKind(String),
}

/// The pair of dropdown values that drives every recompute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    /// Selected month.
    pub month: Month,
    /// Selected distribution chart kind.
    pub kind: ChartKind,
}

impl Selection {
    /// Parses a selection from the raw dropdown strings.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError`] if either value is not a known option.
    pub fn parse(month: &str, kind: &str) -> Result<Self, SelectionError> {
        Ok(Self {
            month: parse_month(month)?,
            kind: kind
                .trim()
                .parse()
                .map_err(|_| SelectionError::ChartKind(kind.to_string()))?,
        })
    }
}

/// Parses a month name (case-insensitive).
///
/// # Errors
///
/// Returns [`SelectionError::Month`] if `name` is not January through
/// September.
pub fn parse_month(name: &str) -> Result<Month, SelectionError> {
    name.trim()
        .parse()
        .map_err(|_| SelectionError::Month(name.to_string()))
}

/// A single cleaned arrest event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrestRecord {
    /// Date the arrest was effected.
    pub arrest_date: NaiveDate,
    /// Title-cased offense description.
    pub offense: String,
    /// Borough where the arrest took place.
    pub borough: Borough,
    /// Perpetrator age group (e.g. `25-44`).
    pub age_group: String,
    /// Perpetrator sex (`M`/`F`).
    pub sex: String,
    /// Latitude, if the source provided a usable value.
    pub latitude: Option<f64>,
    /// Longitude, if the source provided a usable value.
    pub longitude: Option<f64>,
}
