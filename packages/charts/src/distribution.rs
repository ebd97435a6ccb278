//! Bar charts counting arrests per offense type or per borough.

use std::collections::BTreeMap;

use nypd_arrests_arrest_models::{Borough, ChartKind, Month};
use nypd_arrests_chart_models::{
    Axis, BarTrace, CategoryOrder, Figure, Font, Layout, Margin, Marker, TextPosition, Title,
    Trace,
};
use nypd_arrests_dataset::PreparedDataset;

use crate::palette::{BACKGROUND, FOREGROUND, borough_color, offense_color};
use crate::si::format_si_count;

const CHART_HEIGHT: u32 = 355;
const TEXT_SIZE: u32 = 14;

/// Builds the distribution figure for `month` broken down by `kind`.
///
/// Only categories present in the month get a bar, so an empty month
/// yields a figure with no traces.
#[must_use]
pub fn distribution_view(dataset: &PreparedDataset, month: Month, kind: ChartKind) -> Figure {
    match kind {
        ChartKind::PerOffenseTypes => per_offense_types(dataset, month),
        ChartKind::PerBoroughs => per_boroughs(dataset, month),
    }
}

fn per_offense_types(dataset: &PreparedDataset, month: Month) -> Figure {
    let mut counts: BTreeMap<usize, u64> = BTreeMap::new();
    for record in dataset.filter_month(month) {
        if let Some(rank) = dataset.offense_rank(&record.offense) {
            *counts.entry(rank).or_default() += 1;
        }
    }

    let data = counts
        .into_iter()
        .map(|(rank, count)| {
            let offense = &dataset.top_offenses()[rank].offense;
            Trace::Bar(bar(offense, count, offense_color(rank)))
        })
        .collect();

    Figure {
        data,
        layout: Layout {
            xaxis: Some(Axis {
                visible: Some(false),
                showticklabels: Some(false),
                ..Axis::default()
            }),
            ..base_layout()
        },
    }
}

fn per_boroughs(dataset: &PreparedDataset, month: Month) -> Figure {
    // Borough's Ord is alphabetical, so BTreeMap iteration is too.
    let mut counts: BTreeMap<Borough, u64> = BTreeMap::new();
    for record in dataset.filter_month(month) {
        *counts.entry(record.borough).or_default() += 1;
    }

    let tickvals: Vec<String> = counts.keys().map(ToString::to_string).collect();

    let data = counts
        .into_iter()
        .map(|(borough, count)| {
            Trace::Bar(bar(&borough.to_string(), count, borough_color(borough)))
        })
        .collect();

    Figure {
        data,
        layout: Layout {
            xaxis: Some(Axis {
                visible: Some(true),
                showticklabels: Some(true),
                title: Some(Title {
                    text: String::new(),
                }),
                color: Some(FOREGROUND.to_string()),
                tickvals: Some(tickvals),
                categoryorder: Some(CategoryOrder::CategoryAscending),
            }),
            ..base_layout()
        },
    }
}

fn bar(label: &str, count: u64, color: &str) -> BarTrace {
    BarTrace {
        name: label.to_string(),
        legendgroup: label.to_string(),
        x: vec![label.to_string()],
        y: vec![count],
        text: vec![format_si_count(count)],
        marker: Marker {
            color: color.to_string(),
        },
        textposition: TextPosition::Outside,
        textangle: 0,
        textfont: Font {
            size: Some(TEXT_SIZE),
            color: Some(FOREGROUND.to_string()),
        },
        cliponaxis: false,
        showlegend: false,
    }
}

fn base_layout() -> Layout {
    Layout {
        height: Some(CHART_HEIGHT),
        showlegend: Some(false),
        plot_bgcolor: Some(BACKGROUND.to_string()),
        paper_bgcolor: Some(BACKGROUND.to_string()),
        margin: Some(Margin {
            l: 0,
            r: 0,
            t: 10,
            b: 0,
        }),
        yaxis: Some(Axis {
            visible: Some(false),
            showticklabels: Some(false),
            ..Axis::default()
        }),
        ..Layout::default()
    }
}
