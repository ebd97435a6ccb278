//! Colors used by the dashboard figures.

use nypd_arrests_arrest_models::Borough;

/// Plot and paper background.
pub const BACKGROUND: &str = "#31302F";

/// Text on dark backgrounds.
pub const FOREGROUND: &str = "#d8d8d8";

/// Qualitative palette for offense categories, indexed by rank.
pub const OFFENSE_PALETTE: &[&str] = &[
    "#636efa", "#EF553B", "#00cc96", "#ab63fa", "#FFA15A", "#19d3f3", "#FF6692", "#B6E880",
    "#FF97FF", "#FECB52",
];

/// Color for the offense category at `rank`, cycling through
/// [`OFFENSE_PALETTE`].
#[must_use]
pub fn offense_color(rank: usize) -> &'static str {
    OFFENSE_PALETTE[rank % OFFENSE_PALETTE.len()]
}

/// Fixed color for each borough's bar.
#[must_use]
pub const fn borough_color(borough: Borough) -> &'static str {
    match borough {
        Borough::Bronx => "#33FFFB",
        Borough::Brooklyn => "#33DDFF",
        Borough::Manhattan => "#33B9FF",
        Borough::Queens => "#3392FF",
        Borough::StatenIsland => "#3362FF",
    }
}
