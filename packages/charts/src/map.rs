//! Point-per-arrest map figure.

use std::collections::BTreeMap;

use nypd_arrests_arrest_models::{ArrestRecord, Month};
use nypd_arrests_chart_models::{
    Figure, Font, LatLon, Layout, Legend, Mapbox, Margin, Marker, ScatterMapboxTrace, Title,
    Trace,
};
use nypd_arrests_dataset::PreparedDataset;

use crate::palette::{BACKGROUND, FOREGROUND, offense_color};

/// Map view center used when no filtered record has coordinates.
pub const NYC_CENTER: LatLon = LatLon {
    lat: 40.7128,
    lon: -74.0060,
};

const HOVER_TEMPLATE: &str = "<b>%{fullData.name}</b><br>\
Latitude=%{lat}<br>\
Longitude=%{lon}<br>\
Age Group=%{customdata[0]}<br>\
Sex=%{customdata[1]}<extra></extra>";

/// Tile map settings that come from configuration rather than data.
#[derive(Debug, Clone, PartialEq)]
pub struct MapSettings {
    /// Tile provider access token.
    pub access_token: String,
    /// Tile style name.
    pub style: String,
    /// Initial zoom level.
    pub zoom: f64,
}

impl MapSettings {
    /// Dark tiles at street-level zoom.
    #[must_use]
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            style: "dark".to_string(),
            zoom: 12.0,
        }
    }
}

/// Builds the map figure for `month`.
///
/// One trace per offense category present in the month, in rank order,
/// with one point per record. An empty month yields a figure with no
/// traces.
#[must_use]
pub fn map_view(dataset: &PreparedDataset, month: Month, settings: &MapSettings) -> Figure {
    let filtered = dataset.filter_month(month);

    let mut by_rank: BTreeMap<usize, Vec<&ArrestRecord>> = BTreeMap::new();
    for &record in &filtered {
        if let Some(rank) = dataset.offense_rank(&record.offense) {
            by_rank.entry(rank).or_default().push(record);
        }
    }

    let data: Vec<Trace> = by_rank
        .into_iter()
        .map(|(rank, records)| Trace::Scattermapbox(scatter_trace(rank, &records)))
        .collect();

    log::debug!(
        "map_view({month}): {} records in {} traces",
        filtered.len(),
        data.len()
    );

    Figure {
        data,
        layout: map_layout(center_of(&filtered), settings),
    }
}

fn scatter_trace(rank: usize, records: &[&ArrestRecord]) -> ScatterMapboxTrace {
    let name = records
        .first()
        .map(|r| r.offense.clone())
        .unwrap_or_default();

    ScatterMapboxTrace {
        legendgroup: name.clone(),
        name,
        lat: records.iter().map(|r| r.latitude).collect(),
        lon: records.iter().map(|r| r.longitude).collect(),
        mode: "markers".to_string(),
        marker: Marker {
            color: offense_color(rank).to_string(),
        },
        customdata: records
            .iter()
            .map(|r| vec![r.age_group.clone(), r.sex.clone()])
            .collect(),
        hovertemplate: HOVER_TEMPLATE.to_string(),
        showlegend: true,
    }
}

/// Mean coordinate of the records that have one.
fn center_of(records: &[&ArrestRecord]) -> LatLon {
    let (count, lat_sum, lon_sum) = records
        .iter()
        .filter_map(|r| Some((r.latitude?, r.longitude?)))
        .fold((0_u32, 0.0, 0.0), |(n, la, lo), (lat, lon)| {
            (n + 1, la + lat, lo + lon)
        });

    if count == 0 {
        return NYC_CENTER;
    }

    LatLon {
        lat: lat_sum / f64::from(count),
        lon: lon_sum / f64::from(count),
    }
}

fn map_layout(center: LatLon, settings: &MapSettings) -> Layout {
    Layout {
        autosize: Some(true),
        margin: Some(Margin {
            l: 0,
            r: 20,
            t: 0,
            b: 0,
        }),
        legend: Some(Legend {
            title: Title {
                text: "Type of Offense".to_string(),
            },
            bgcolor: BACKGROUND.to_string(),
            y: 0.95,
            font: Font {
                size: None,
                color: Some(FOREGROUND.to_string()),
            },
        }),
        mapbox: Some(Mapbox {
            accesstoken: settings.access_token.clone(),
            style: settings.style.clone(),
            bearing: 0.0,
            zoom: settings.zoom,
            center,
        }),
        ..Layout::default()
    }
}
