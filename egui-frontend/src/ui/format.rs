//! # Formatting Module
//!
//! French date and emission formatting shared by the form, the calendar
//! and the chart axes.

use chrono::{Datelike, NaiveDate};

/// Full French month names, indexed by month number (1-12)
const MONTH_NAMES: [&str; 12] = [
    "Janvier",
    "Février",
    "Mars",
    "Avril",
    "Mai",
    "Juin",
    "Juillet",
    "Août",
    "Septembre",
    "Octobre",
    "Novembre",
    "Décembre",
];

/// Abbreviated French month names for compact chart labels
const MONTH_ABBREVS: [&str; 12] = [
    "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.",
    "déc.",
];

/// Full French month name for a 1-based month number
pub fn month_name_fr(month: u32) -> &'static str {
    MONTH_NAMES
        .get(month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("")
}

/// Abbreviated French month name for a 1-based month number
pub fn month_abbrev_fr(month: u32) -> &'static str {
    MONTH_ABBREVS
        .get(month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("")
}

/// Format a date as DD/MM/YYYY for display
pub fn format_date_fr(date: NaiveDate) -> String {
    format!("{:02}/{:02}/{}", date.day(), date.month(), date.year())
}

/// Format a date as "15 juin" for compact list rows
pub fn format_date_short_fr(date: NaiveDate) -> String {
    format!("{} {}", date.day(), month_abbrev_fr(date.month()))
}

/// Format a date as YYYY-MM-DD, the wire and field format
pub fn format_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Format an emission amount as "12.5 kg"
pub fn format_emissions(kg: f64) -> String {
    format!("{:.1} kg", kg)
}

/// Format an emission amount with the CO₂ unit spelled out
pub fn format_emissions_full(kg: f64) -> String {
    format!("{:.1} kg CO₂e", kg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_names() {
        assert_eq!(month_name_fr(1), "Janvier");
        assert_eq!(month_name_fr(8), "Août");
        assert_eq!(month_name_fr(12), "Décembre");
        assert_eq!(month_name_fr(0), "");
        assert_eq!(month_name_fr(13), "");
    }

    #[test]
    fn test_month_abbrevs() {
        assert_eq!(month_abbrev_fr(1), "janv.");
        assert_eq!(month_abbrev_fr(5), "mai");
        assert_eq!(month_abbrev_fr(12), "déc.");
    }

    #[test]
    fn test_format_date_fr_pads_day_and_month() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 3).unwrap();
        assert_eq!(format_date_fr(date), "03/06/2025");
    }

    #[test]
    fn test_format_date_short_fr() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        assert_eq!(format_date_short_fr(date), "15 juin");
    }

    #[test]
    fn test_format_iso() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 9).unwrap();
        assert_eq!(format_iso(date), "2025-01-09");
    }

    #[test]
    fn test_format_emissions() {
        assert_eq!(format_emissions(12.46), "12.5 kg");
        assert_eq!(format_emissions(0.0), "0.0 kg");
        assert_eq!(format_emissions_full(3.0), "3.0 kg CO₂e");
    }
}
