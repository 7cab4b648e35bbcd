//! # Calendar State Module
//!
//! This module contains the state of the date-picker calendar: the month and
//! year currently in view, month navigation, and the Monday-first day grid
//! handed to the renderer.
//!
//! ## Responsibilities:
//! - Track the viewed (month, year) independently of the selected date
//! - Navigate between months with year rollover in both directions
//! - Build the day grid with leading blanks and per-day display kinds
//!
//! ## Purpose:
//! The view is reset to the selected date's month every time the popover
//! opens, so navigation never leaks across openings. Day styling is decided
//! here as a `DayCellKind` so the renderer stays a pure painter.

use chrono::{Datelike, NaiveDate};

use crate::ui::format;

/// Monday-first weekday headers shown above the day grid
pub const WEEKDAY_HEADERS: [&str; 7] = ["Lun", "Mar", "Mer", "Jeu", "Ven", "Sam", "Dim"];

/// The month shown before `month`, rolling into the previous year from January
pub fn previous_month(month: u32, year: i32) -> (u32, i32) {
    if month == 1 {
        (12, year - 1)
    } else {
        (month - 1, year)
    }
}

/// The month shown after `month`, rolling into the next year from December
pub fn next_month(month: u32, year: i32) -> (u32, i32) {
    if month == 12 {
        (1, year + 1)
    } else {
        (month + 1, year)
    }
}

/// Number of days in the given month, leap years included
pub fn days_in_month(month: u32, year: i32) -> u32 {
    let (next, next_year) = next_month(month, year);

    NaiveDate::from_ymd_opt(next_year, next, 1)
        .and_then(|date| date.pred_opt())
        .map(|date| date.day())
        .unwrap_or(30)
}

/// How a single day cell should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayCellKind {
    /// The currently selected date
    Selected,

    /// Today, when it is not the selected date
    Today,

    /// A day after today; not clickable
    Future,

    /// Any other day of the viewed month
    Normal,
}

/// One day of the viewed month, ready for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub day: u32,
    pub kind: DayCellKind,
}

/// View state of the date-picker calendar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarState {
    /// Month currently in view (1-12)
    pub view_month: u32,

    /// Year currently in view
    pub view_year: i32,
}

impl CalendarState {
    /// Start the view on today's month
    pub fn new(today: NaiveDate) -> Self {
        Self {
            view_month: today.month(),
            view_year: today.year(),
        }
    }

    /// Point the view at the month containing `date`; called when the
    /// popover opens so it always shows the selected date's month
    pub fn reset_view_to(&mut self, date: NaiveDate) {
        self.view_month = date.month();
        self.view_year = date.year();
    }

    /// Step the view one month back
    pub fn navigate_previous(&mut self) {
        let (month, year) = previous_month(self.view_month, self.view_year);
        self.view_month = month;
        self.view_year = year;
        log::debug!("📅 Calendar view: {}/{}", self.view_month, self.view_year);
    }

    /// Step the view one month forward
    pub fn navigate_next(&mut self) {
        let (month, year) = next_month(self.view_month, self.view_year);
        self.view_month = month;
        self.view_year = year;
        log::debug!("📅 Calendar view: {}/{}", self.view_month, self.view_year);
    }

    /// Title shown between the navigation arrows, e.g. "Juin 2025"
    pub fn month_title(&self) -> String {
        format!("{} {}", format::month_name_fr(self.view_month), self.view_year)
    }

    /// Build the Monday-first day grid for the viewed month. Leading `None`
    /// entries pad the first week so day 1 lands under its weekday header.
    pub fn day_cells(&self, selected: NaiveDate, today: NaiveDate) -> Vec<Option<DayCell>> {
        let first_of_month = match NaiveDate::from_ymd_opt(self.view_year, self.view_month, 1) {
            Some(date) => date,
            None => return Vec::new(),
        };

        let leading_blanks = first_of_month.weekday().num_days_from_monday() as usize;
        let day_count = days_in_month(self.view_month, self.view_year);

        let mut cells: Vec<Option<DayCell>> = vec![None; leading_blanks];

        for day in 1..=day_count {
            let Some(date) = NaiveDate::from_ymd_opt(self.view_year, self.view_month, day) else {
                continue;
            };

            let kind = if date == selected {
                DayCellKind::Selected
            } else if date == today {
                DayCellKind::Today
            } else if date > today {
                DayCellKind::Future
            } else {
                DayCellKind::Normal
            };

            cells.push(Some(DayCell { date, day, kind }));
        }

        cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_previous_month_rolls_into_prior_year() {
        assert_eq!(previous_month(1, 2025), (12, 2024));
        assert_eq!(previous_month(6, 2025), (5, 2025));
    }

    #[test]
    fn test_next_month_rolls_into_next_year() {
        assert_eq!(next_month(12, 2025), (1, 2026));
        assert_eq!(next_month(6, 2025), (7, 2025));
    }

    #[test]
    fn test_days_in_month_handles_leap_years() {
        assert_eq!(days_in_month(2, 2024), 29);
        assert_eq!(days_in_month(2, 2025), 28);
        assert_eq!(days_in_month(4, 2025), 30);
        assert_eq!(days_in_month(12, 2025), 31);
    }

    #[test]
    fn test_new_starts_on_todays_month() {
        let calendar = CalendarState::new(date(2025, 6, 15));
        assert_eq!(calendar.view_month, 6);
        assert_eq!(calendar.view_year, 2025);
    }

    #[test]
    fn test_navigation_round_trip() {
        let mut calendar = CalendarState::new(date(2025, 1, 10));

        calendar.navigate_previous();
        assert_eq!((calendar.view_month, calendar.view_year), (12, 2024));

        calendar.navigate_next();
        assert_eq!((calendar.view_month, calendar.view_year), (1, 2025));
    }

    #[test]
    fn test_reset_view_to_selected_month() {
        let mut calendar = CalendarState::new(date(2025, 6, 15));
        calendar.navigate_next();
        calendar.navigate_next();

        calendar.reset_view_to(date(2025, 6, 10));

        assert_eq!(calendar.view_month, 6);
        assert_eq!(calendar.view_year, 2025);
    }

    #[test]
    fn test_month_title_is_french() {
        let calendar = CalendarState::new(date(2025, 8, 1));
        assert_eq!(calendar.month_title(), "Août 2025");
    }

    #[test]
    fn test_day_grid_leading_blanks_monday_first() {
        // June 2025 starts on a Sunday: six blanks before day 1
        let calendar = CalendarState::new(date(2025, 6, 15));
        let cells = calendar.day_cells(date(2025, 6, 15), date(2025, 6, 15));

        assert_eq!(cells.iter().take_while(|cell| cell.is_none()).count(), 6);
        assert_eq!(cells.len(), 6 + 30);
        assert_eq!(cells[6].unwrap().day, 1);
    }

    #[test]
    fn test_day_grid_no_blanks_when_month_starts_monday() {
        // September 2025 starts on a Monday
        let calendar = CalendarState::new(date(2025, 9, 1));
        let cells = calendar.day_cells(date(2025, 9, 1), date(2025, 9, 1));

        assert!(cells[0].is_some());
        assert_eq!(cells.len(), 30);
    }

    #[test]
    fn test_day_kinds_follow_precedence() {
        let calendar = CalendarState::new(date(2025, 6, 15));
        let cells = calendar.day_cells(date(2025, 6, 10), date(2025, 6, 15));

        let kind_of = |day: u32| {
            cells
                .iter()
                .flatten()
                .find(|cell| cell.day == day)
                .map(|cell| cell.kind)
                .unwrap()
        };

        assert_eq!(kind_of(10), DayCellKind::Selected);
        assert_eq!(kind_of(15), DayCellKind::Today);
        assert_eq!(kind_of(16), DayCellKind::Future);
        assert_eq!(kind_of(1), DayCellKind::Normal);
    }

    #[test]
    fn test_selected_day_wins_over_today() {
        let calendar = CalendarState::new(date(2025, 6, 15));
        let cells = calendar.day_cells(date(2025, 6, 15), date(2025, 6, 15));

        let today_cell = cells
            .iter()
            .flatten()
            .find(|cell| cell.day == 15)
            .unwrap();

        assert_eq!(today_cell.kind, DayCellKind::Selected);
    }

    #[test]
    fn test_viewed_month_without_today_has_no_today_cell() {
        let mut calendar = CalendarState::new(date(2025, 6, 15));
        calendar.navigate_previous();
        let cells = calendar.day_cells(date(2025, 6, 15), date(2025, 6, 15));

        assert!(cells
            .iter()
            .flatten()
            .all(|cell| cell.kind != DayCellKind::Today && cell.kind != DayCellKind::Selected));
    }
}
