//! Shared parsing utilities for raw arrest rows.
//!
//! Date, text and coordinate normalization used by the dataset preparer.

use chrono::{NaiveDate, NaiveDateTime};

/// Parses an arrest date using the first of `formats` that matches.
///
/// Formats carrying a time component are accepted and truncated to the
/// date.
#[must_use]
pub fn parse_arrest_date<S: AsRef<str>>(s: &str, formats: &[S]) -> Option<NaiveDate> {
    let s = s.trim();
    formats.iter().find_map(|format| {
        let format = format.as_ref();
        NaiveDateTime::parse_from_str(s, format)
            .map(|dt| dt.date())
            .or_else(|_| NaiveDate::parse_from_str(s, format))
            .ok()
    })
}

/// Title-cases `s`: a letter is upper-cased when it starts the string or
/// follows a non-letter, and lower-cased otherwise.
///
/// `"ASSAULT 3 & RELATED OFFENSES"` becomes `"Assault 3 & Related Offenses"`.
#[must_use]
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_letter = false;

    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }

    out
}

/// Parses lat/lng strings. Returns `None` if either is blank, unparseable,
/// non-finite, or zero.
#[must_use]
pub fn parse_lat_lng(lat: &str, lng: &str) -> Option<(f64, f64)> {
    let latitude = lat.trim().parse::<f64>().ok()?;
    let longitude = lng.trim().parse::<f64>().ok()?;
    if !latitude.is_finite() || !longitude.is_finite() {
        return None;
    }
    if latitude.abs() < f64::EPSILON || longitude.abs() < f64::EPSILON {
        return None;
    }
    Some((latitude, longitude))
}
