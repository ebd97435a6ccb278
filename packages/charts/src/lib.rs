#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Builds the map and distribution chart figures for a selection.
//!
//! Both figures are pure functions of the shared [`PreparedDataset`] and
//! the selected month (plus chart kind for the distribution). Nothing is
//! cached between calls; every selection change filters the table afresh.

pub mod distribution;
pub mod map;
pub mod palette;
pub mod si;

use std::sync::Arc;

use nypd_arrests_arrest_models::{ChartKind, Month, Selection};
use nypd_arrests_chart_models::Figure;
use nypd_arrests_dataset::PreparedDataset;

pub use distribution::distribution_view;
pub use map::{MapSettings, map_view};

/// Recomputes both dashboard figures from the shared dataset.
#[derive(Debug, Clone)]
pub struct ViewController {
    dataset: Arc<PreparedDataset>,
    map_settings: MapSettings,
}

impl ViewController {
    /// Creates a controller over `dataset` rendering maps with
    /// `map_settings`.
    #[must_use]
    pub const fn new(dataset: Arc<PreparedDataset>, map_settings: MapSettings) -> Self {
        Self {
            dataset,
            map_settings,
        }
    }

    /// The dataset every figure is computed from.
    #[must_use]
    pub fn dataset(&self) -> &PreparedDataset {
        &self.dataset
    }

    /// Map figure for `month`.
    #[must_use]
    pub fn map(&self, month: Month) -> Figure {
        map_view(&self.dataset, month, &self.map_settings)
    }

    /// Distribution figure for `month` broken down by `kind`.
    #[must_use]
    pub fn distribution(&self, month: Month, kind: ChartKind) -> Figure {
        distribution_view(&self.dataset, month, kind)
    }

    /// Both figures for a full selection, map first.
    #[must_use]
    pub fn render(&self, selection: Selection) -> (Figure, Figure) {
        (
            self.map(selection.month),
            self.distribution(selection.month, selection.kind),
        )
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use nypd_arrests_arrest_models::{ArrestRecord, Borough};

    use super::*;

    fn controller() -> ViewController {
        let records = (1..=9)
            .map(|month| ArrestRecord {
                arrest_date: NaiveDate::from_ymd_opt(2022, month, 15).unwrap(),
                offense: if month % 2 == 0 { "Robbery" } else { "Assault" }.to_string(),
                borough: Borough::all()[month as usize % Borough::all().len()],
                age_group: "<18".to_string(),
                sex: "M".to_string(),
                latitude: Some(40.6),
                longitude: Some(-73.95),
            })
            .collect();
        ViewController::new(
            Arc::new(PreparedDataset::from_records(records, 10)),
            MapSettings::new("token"),
        )
    }

    #[test]
    fn every_month_renders_only_its_records() {
        let controller = controller();
        for month in Month::all() {
            let (map, distribution) = controller.render(Selection {
                month: *month,
                kind: ChartKind::PerOffenseTypes,
            });
            let points: usize = map.scatter_traces().map(|t| t.len()).sum();
            let bars: u64 = distribution.bars().map(|b| b.y.iter().sum::<u64>()).sum();
            assert_eq!(points, 1, "{month}");
            assert_eq!(bars, 1, "{month}");
        }
    }

    #[test]
    fn render_is_idempotent() {
        let controller = controller();
        let selection = Selection {
            month: Month::May,
            kind: ChartKind::PerBoroughs,
        };
        assert_eq!(controller.render(selection), controller.render(selection));
    }
}
