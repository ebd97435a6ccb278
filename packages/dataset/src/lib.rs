#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Loads, cleans and ranks the arrest dataset once at startup.
//!
//! [`prepare`] turns raw CSV rows into a [`PreparedDataset`]: placeholder
//! offenses are dropped, dates parsed, offenses title-cased, borough codes
//! mapped, and only the most frequent offense categories kept. The result
//! is never mutated afterwards and is shared read-only by every request.

use std::collections::BTreeMap;

use nypd_arrests_arrest_models::{ArrestRecord, Borough, Month, UnknownBoroughCodeError};
use nypd_arrests_source::parsing::{parse_arrest_date, parse_lat_lng, title_case};
use nypd_arrests_source::{DatasetDefinition, DatasetLocation, RawArrestRow, SourceError};

/// Errors that fail the whole load.
///
/// Row numbers are 1-based and count data rows only (the header is not
/// row 1).
#[derive(Debug, thiserror::Error)]
pub enum PrepareError {
    /// `ARREST_DATE` matched none of the accepted formats.
    #[error("row {row}: unparsable ARREST_DATE {value:?}")]
    InvalidDate {
        /// Data row number.
        row: usize,
        /// The raw value.
        value: String,
    },

    /// `ARREST_BORO` is not one of the five borough codes.
    #[error("row {row}: {source}")]
    UnknownBorough {
        /// Data row number.
        row: usize,
        /// The lookup failure.
        #[source]
        source: UnknownBoroughCodeError,
    },
}

/// Errors from [`load`].
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// Fetching or decoding the CSV failed.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// Cleaning the rows failed.
    #[error(transparent)]
    Prepare(#[from] PrepareError),
}

/// Cleaning policy for [`prepare`].
#[derive(Debug, Clone, Copy)]
pub struct PrepareOptions<'a> {
    /// Offense description literal meaning "no value".
    pub null_placeholder: &'a str,
    /// How many of the most frequent offense categories to keep.
    pub top_n: usize,
    /// Accepted `ARREST_DATE` formats, tried in order.
    pub date_formats: &'a [String],
}

impl<'a> From<&'a DatasetDefinition> for PrepareOptions<'a> {
    fn from(definition: &'a DatasetDefinition) -> Self {
        Self {
            null_placeholder: &definition.null_placeholder,
            top_n: definition.top_n,
            date_formats: &definition.date_formats,
        }
    }
}

/// Number of records carrying one offense category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OffenseCount {
    /// Title-cased offense category.
    pub offense: String,
    /// Records with this category.
    pub count: usize,
}

/// The cleaned, immutable arrest table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreparedDataset {
    records: Vec<ArrestRecord>,
    top_offenses: Vec<OffenseCount>,
}

impl PreparedDataset {
    /// Builds the table from already-normalized records, keeping only the
    /// `top_n` most frequent offense categories.
    ///
    /// Categories are ranked by count descending, ties broken by name
    /// ascending.
    #[must_use]
    pub fn from_records(records: Vec<ArrestRecord>, top_n: usize) -> Self {
        let top_offenses = rank_offenses(&records, top_n);

        let records: Vec<ArrestRecord> = records
            .into_iter()
            .filter(|r| top_offenses.iter().any(|t| t.offense == r.offense))
            .collect();

        Self {
            records,
            top_offenses,
        }
    }

    /// All kept records, in source order.
    #[must_use]
    pub fn records(&self) -> &[ArrestRecord] {
        &self.records
    }

    /// The kept offense categories, most frequent first.
    #[must_use]
    pub fn top_offenses(&self) -> &[OffenseCount] {
        &self.top_offenses
    }

    /// Zero-based rank of `offense` among the kept categories.
    #[must_use]
    pub fn offense_rank(&self, offense: &str) -> Option<usize> {
        self.top_offenses.iter().position(|t| t.offense == offense)
    }

    /// Records whose arrest date falls in `month` of any year.
    #[must_use]
    pub fn filter_month(&self, month: Month) -> Vec<&ArrestRecord> {
        self.records
            .iter()
            .filter(|r| month.contains(r.arrest_date))
            .collect()
    }

    /// Number of kept records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no records were kept.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn rank_offenses(records: &[ArrestRecord], top_n: usize) -> Vec<OffenseCount> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for record in records {
        *counts.entry(record.offense.as_str()).or_default() += 1;
    }

    // BTreeMap iterates by name, so a stable sort on count keeps name
    // ascending within equal counts.
    let mut ranked: Vec<OffenseCount> = counts
        .into_iter()
        .map(|(offense, count)| OffenseCount {
            offense: offense.to_string(),
            count,
        })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(top_n);
    ranked
}

/// Cleans raw rows into a [`PreparedDataset`].
///
/// Rows whose offense is the placeholder literal or blank are dropped
/// before any other validation.
///
/// # Errors
///
/// Returns [`PrepareError`] for the first row with an unparsable date or an
/// unknown borough code. No partial dataset is produced.
pub fn prepare(
    rows: Vec<RawArrestRow>,
    options: &PrepareOptions<'_>,
) -> Result<PreparedDataset, PrepareError> {
    let raw_count = rows.len();
    let mut placeholders = 0_usize;
    let mut records = Vec::with_capacity(raw_count);

    for (i, row) in rows.into_iter().enumerate() {
        let row_number = i + 1;

        let offense = row.offense_description.trim();
        if offense.is_empty() || offense == options.null_placeholder {
            placeholders += 1;
            continue;
        }

        let arrest_date = parse_arrest_date(&row.arrest_date, options.date_formats).ok_or_else(
            || PrepareError::InvalidDate {
                row: row_number,
                value: row.arrest_date.clone(),
            },
        )?;

        let borough =
            Borough::from_code(&row.borough_code).map_err(|source| PrepareError::UnknownBorough {
                row: row_number,
                source,
            })?;

        let coords = parse_lat_lng(&row.latitude, &row.longitude);

        records.push(ArrestRecord {
            arrest_date,
            offense: title_case(offense),
            borough,
            age_group: row.age_group,
            sex: row.sex,
            latitude: coords.map(|(lat, _)| lat),
            longitude: coords.map(|(_, lng)| lng),
        });
    }

    let dataset = PreparedDataset::from_records(records, options.top_n);

    log::info!(
        "Prepared {} of {raw_count} rows ({placeholders} placeholder offenses dropped, top {} categories kept)",
        dataset.len(),
        dataset.top_offenses().len(),
    );
    for (rank, top) in dataset.top_offenses().iter().enumerate() {
        log::debug!("  #{}: {} ({})", rank + 1, top.offense, top.count);
    }

    Ok(dataset)
}

/// Loads the raw CSV from `location` and prepares it.
///
/// # Errors
///
/// Returns [`DatasetError`] if loading or cleaning fails.
pub async fn load(
    definition: &DatasetDefinition,
    location: &DatasetLocation,
) -> Result<PreparedDataset, DatasetError> {
    let rows = nypd_arrests_source::csv_download::load_raw_rows(definition, location).await?;
    Ok(prepare(rows, &PrepareOptions::from(definition))?)
}
