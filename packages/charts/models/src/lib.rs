#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Serializable Plotly-compatible figure, trace and layout types.
//!
//! A [`Figure`] serializes to the `{ "data": [...], "layout": {...} }`
//! object that `Plotly.react` accepts. Only the attributes the dashboard
//! sets are modelled; unset optional attributes are omitted from the JSON
//! so the renderer's defaults apply.

use serde::{Deserialize, Serialize};

/// A complete chart: traces plus layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    /// Traces, drawn in order.
    pub data: Vec<Trace>,
    /// Figure-wide layout.
    pub layout: Layout,
}

impl Figure {
    /// Whether the figure has no traces to draw.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterates over the bar traces of the figure.
    pub fn bars(&self) -> impl Iterator<Item = &BarTrace> {
        self.data.iter().filter_map(|t| match t {
            Trace::Bar(bar) => Some(bar),
            Trace::Scattermapbox(_) => None,
        })
    }

    /// Iterates over the map scatter traces of the figure.
    pub fn scatter_traces(&self) -> impl Iterator<Item = &ScatterMapboxTrace> {
        self.data.iter().filter_map(|t| match t {
            Trace::Scattermapbox(scatter) => Some(scatter),
            Trace::Bar(_) => None,
        })
    }
}

/// A single trace, tagged by its Plotly `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    /// Points on a tile map.
    Scattermapbox(ScatterMapboxTrace),
    /// Categorical bars.
    Bar(BarTrace),
}

/// Points on a tile map, one legend entry per trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterMapboxTrace {
    /// Legend label.
    pub name: String,
    /// Legend group (same as `name`).
    pub legendgroup: String,
    /// Point latitudes; `null` entries are not drawn.
    pub lat: Vec<Option<f64>>,
    /// Point longitudes; `null` entries are not drawn.
    pub lon: Vec<Option<f64>>,
    /// Always `"markers"`.
    pub mode: String,
    /// Marker styling.
    pub marker: Marker,
    /// Per-point extra values referenced by `hovertemplate`.
    pub customdata: Vec<Vec<String>>,
    /// Hover label template.
    pub hovertemplate: String,
    /// Whether the trace appears in the legend.
    pub showlegend: bool,
}

impl ScatterMapboxTrace {
    /// Number of points in the trace.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lat.len()
    }

    /// Whether the trace has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lat.is_empty()
    }
}

/// Categorical bars with text labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarTrace {
    /// Legend label.
    pub name: String,
    /// Legend group (same as `name`).
    pub legendgroup: String,
    /// Category labels.
    pub x: Vec<String>,
    /// Bar heights.
    pub y: Vec<u64>,
    /// Text drawn on each bar.
    pub text: Vec<String>,
    /// Bar styling.
    pub marker: Marker,
    /// Where `text` is drawn relative to the bar.
    pub textposition: TextPosition,
    /// Text rotation in degrees.
    pub textangle: i32,
    /// Text styling.
    pub textfont: Font,
    /// Whether text outside the plot area is clipped.
    pub cliponaxis: bool,
    /// Whether the trace appears in the legend.
    pub showlegend: bool,
}

/// Marker styling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marker {
    /// CSS color.
    pub color: String,
}

/// Placement of bar text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextPosition {
    /// Inside the bar end.
    Inside,
    /// Just past the bar end.
    Outside,
    /// Plotly decides.
    Auto,
}

/// Font styling.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Font {
    /// Size in px.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    /// CSS color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Figure margins in px.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub t: u32,
    pub b: u32,
}

/// A `{ "text": ... }` title object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Title {
    /// Title text; empty hides the title.
    pub text: String,
}

/// Figure-wide layout.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Layout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autosize: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Margin>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showlegend: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plot_bgcolor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paper_bgcolor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mapbox: Option<Mapbox>,
}

/// Legend box styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    /// Legend heading.
    pub title: Title,
    /// Background color.
    pub bgcolor: String,
    /// Vertical anchor position (0-1, paper coordinates).
    pub y: f64,
    /// Entry font.
    pub font: Font,
}

/// How categories on an axis are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryOrder {
    /// Order of appearance in the traces.
    #[serde(rename = "trace")]
    Trace,
    /// Alphabetical ascending.
    #[serde(rename = "category ascending")]
    CategoryAscending,
    /// Alphabetical descending.
    #[serde(rename = "category descending")]
    CategoryDescending,
}

/// A cartesian axis.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showticklabels: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickvals: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categoryorder: Option<CategoryOrder>,
}

/// A geographic coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

/// Tile map subplot settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mapbox {
    /// Tile provider access token.
    pub accesstoken: String,
    /// Tile style name (e.g. `"dark"`).
    pub style: String,
    /// Map rotation in degrees.
    pub bearing: f64,
    /// Zoom level.
    pub zoom: f64,
    /// Initial view center.
    pub center: LatLon,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(name: &str) -> Trace {
        Trace::Bar(BarTrace {
            name: name.to_string(),
            legendgroup: name.to_string(),
            x: vec![name.to_string()],
            y: vec![3],
            text: vec!["3.0".to_string()],
            marker: Marker {
                color: "#636efa".to_string(),
            },
            textposition: TextPosition::Outside,
            textangle: 0,
            textfont: Font::default(),
            cliponaxis: false,
            showlegend: true,
        })
    }

    #[test]
    fn traces_serialize_with_plotly_type_tag() {
        let json = serde_json::to_value(bar("Robbery")).unwrap();
        assert_eq!(json["type"], "bar");
        assert_eq!(json["textposition"], "outside");
        assert_eq!(json["x"][0], "Robbery");
    }

    #[test]
    fn unset_layout_fields_are_omitted() {
        let layout = Layout {
            height: Some(355),
            ..Layout::default()
        };
        let json = serde_json::to_value(&layout).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert_eq!(json["height"], 355);
    }

    #[test]
    fn category_order_uses_plotly_names() {
        let axis = Axis {
            categoryorder: Some(CategoryOrder::CategoryAscending),
            ..Axis::default()
        };
        let json = serde_json::to_value(&axis).unwrap();
        assert_eq!(json["categoryorder"], "category ascending");
    }

    #[test]
    fn missing_coordinates_serialize_as_null() {
        let trace = Trace::Scattermapbox(ScatterMapboxTrace {
            name: "Robbery".to_string(),
            legendgroup: "Robbery".to_string(),
            lat: vec![Some(40.7), None],
            lon: vec![Some(-73.9), None],
            mode: "markers".to_string(),
            marker: Marker {
                color: "#636efa".to_string(),
            },
            customdata: vec![vec!["25-44".to_string(), "M".to_string()]; 2],
            hovertemplate: String::new(),
            showlegend: true,
        });
        let json = serde_json::to_value(&trace).unwrap();
        assert_eq!(json["type"], "scattermapbox");
        assert!(json["lat"][1].is_null());
    }

    #[test]
    fn figure_accessors_split_trace_kinds() {
        let figure = Figure {
            data: vec![bar("A"), bar("B")],
            layout: Layout::default(),
        };
        assert_eq!(figure.bars().count(), 2);
        assert_eq!(figure.scatter_traces().count(), 0);
        assert!(!figure.is_empty());
    }
}
