//! CSV downloader and parser.
//!
//! Downloads the arrest CSV (optionally gzip-compressed) from a URL or
//! reads it from disk, checks the header row, and decodes every row into a
//! [`RawArrestRow`].

use std::io::Read as _;

use crate::definition::{Compression, DatasetDefinition};
use crate::{DatasetLocation, REQUIRED_COLUMNS, RawArrestRow, SourceError};

/// Loads every raw row of the dataset from `location`.
///
/// # Errors
///
/// Returns [`SourceError`] if the download, file read, decompression, or
/// CSV parse fails, or if a required column is missing.
pub async fn load_raw_rows(
    definition: &DatasetDefinition,
    location: &DatasetLocation,
) -> Result<Vec<RawArrestRow>, SourceError> {
    log::info!("[{}] Loading CSV from {location}", definition.id);

    let bytes = match location {
        DatasetLocation::Url(url) => download(url).await?,
        DatasetLocation::Path(path) => std::fs::read(path)?,
    };

    log::debug!("[{}] Read {} bytes", definition.id, bytes.len());

    let gzipped = definition.compression == Some(Compression::Gzip)
        || location.to_string().ends_with(".gz");

    let csv_bytes = if gzipped {
        let decompressed = gunzip(&bytes)?;
        log::debug!("Decompressed to {} bytes", decompressed.len());
        decompressed
    } else {
        bytes
    };

    let rows = parse_rows(&csv_bytes)?;

    log::info!("[{}] Parsed {} rows from CSV", definition.id, rows.len());

    Ok(rows)
}

/// Fetches the raw response body for `url`.
///
/// Non-2xx responses are errors.
async fn download(url: &str) -> Result<Vec<u8>, SourceError> {
    let client = reqwest::Client::builder().build()?;
    let response = client.get(url).send().await?.error_for_status()?;
    let bytes = response.bytes().await?;
    Ok(bytes.to_vec())
}

fn gunzip(bytes: &[u8]) -> Result<Vec<u8>, SourceError> {
    let mut decoder = flate2::read::GzDecoder::new(bytes);
    let mut decompressed = Vec::new();
    decoder.read_to_end(&mut decompressed)?;
    Ok(decompressed)
}

/// Decodes CSV bytes into raw rows.
///
/// Columns not declared on [`RawArrestRow`] are ignored.
///
/// # Errors
///
/// Returns [`SourceError::MissingColumn`] if the header row lacks a
/// required column, or [`SourceError::Csv`] if any row fails to decode.
pub fn parse_rows(bytes: &[u8]) -> Result<Vec<RawArrestRow>, SourceError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(bytes);

    let headers = reader.headers()?.clone();
    for &column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(SourceError::MissingColumn { column });
        }
    }

    reader
        .deserialize::<RawArrestRow>()
        .map(|row| row.map_err(SourceError::from))
        .collect()
}
