//! Config-driven dataset definition.
//!
//! The definition is baked into the binary at compile time via
//! [`include_str!`] and parsed on startup.

use serde::Deserialize;

use crate::{DatasetLocation, SourceError};

/// The embedded NYPD year-to-date arrests definition.
const NYPD_ARRESTS_YTD_TOML: &str = include_str!("../sources/nypd_arrests_ytd.toml");

/// Everything needed to fetch and clean the arrest dataset.
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetDefinition {
    /// Unique identifier (e.g., `"nypd_arrests_ytd"`).
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// URL of the CSV file.
    pub url: String,
    /// Human-readable data portal page for attribution.
    #[serde(default)]
    pub portal_url: Option<String>,
    /// Offense description literal the publisher uses for "no value".
    pub null_placeholder: String,
    /// How many of the most frequent offense categories to keep.
    pub top_n: usize,
    /// `chrono` format strings accepted for `ARREST_DATE`, tried in order.
    pub date_formats: Vec<String>,
    /// Compression applied to the download, if any.
    #[serde(default)]
    pub compression: Option<Compression>,
}

/// Compression formats the downloader understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Compression {
    /// gzip (`.csv.gz`).
    Gzip,
}

impl DatasetDefinition {
    /// Parses a definition from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Definition`] if the TOML is malformed or a
    /// required key is missing.
    pub fn from_toml(text: &str) -> Result<Self, SourceError> {
        Ok(toml::from_str(text)?)
    }

    /// Returns the embedded NYPD year-to-date arrests definition.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Definition`] if the embedded TOML is invalid.
    pub fn nypd_arrests_ytd() -> Result<Self, SourceError> {
        Self::from_toml(NYPD_ARRESTS_YTD_TOML)
    }

    /// Resolves where to read the CSV from.
    ///
    /// A local path wins over a URL override, which wins over the
    /// definition's own URL.
    #[must_use]
    pub fn location(
        &self,
        url_override: Option<String>,
        path_override: Option<std::path::PathBuf>,
    ) -> DatasetLocation {
        path_override.map_or_else(
            || DatasetLocation::Url(url_override.unwrap_or_else(|| self.url.clone())),
            DatasetLocation::Path,
        )
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn embedded_definition_parses() {
        let def = DatasetDefinition::nypd_arrests_ytd().unwrap();
        assert_eq!(def.id, "nypd_arrests_ytd");
        assert_eq!(def.null_placeholder, "(null)");
        assert_eq!(def.top_n, 10);
        assert_eq!(def.date_formats.first().map(String::as_str), Some("%m/%d/%Y"));
        assert_eq!(def.compression, None);
        assert!(def.url.ends_with(".csv"));
    }

    #[test]
    fn parses_gzip_compression() {
        let def = DatasetDefinition::from_toml(
            r#"
            id = "x"
            name = "X"
            url = "https://example.com/x.csv.gz"
            null_placeholder = "(null)"
            top_n = 3
            date_formats = ["%Y-%m-%d"]
            compression = "gzip"
            "#,
        )
        .unwrap();
        assert_eq!(def.compression, Some(Compression::Gzip));
        assert_eq!(def.top_n, 3);
    }

    #[test]
    fn rejects_definition_without_url() {
        let result = DatasetDefinition::from_toml(
            r#"
            id = "x"
            name = "X"
            null_placeholder = "(null)"
            top_n = 3
            date_formats = []
            "#,
        );
        assert!(matches!(result, Err(SourceError::Definition(_))));
    }

    #[test]
    fn location_prefers_path_then_url_override() {
        let def = DatasetDefinition::nypd_arrests_ytd().unwrap();
        assert_eq!(def.location(None, None), DatasetLocation::Url(def.url.clone()));
        assert_eq!(
            def.location(Some("https://mirror/x.csv".to_string()), None),
            DatasetLocation::Url("https://mirror/x.csv".to_string())
        );
        assert_eq!(
            def.location(
                Some("https://mirror/x.csv".to_string()),
                Some(PathBuf::from("data/arrests.csv"))
            ),
            DatasetLocation::Path(PathBuf::from("data/arrests.csv"))
        );
    }
}
