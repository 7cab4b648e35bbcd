//! # Form State Module
//!
//! This module contains the authoritative in-memory state of the add-activity
//! form: category/activity selection, quantity input, and the bound date
//! field, plus the submit-time validator.
//!
//! ## Responsibilities:
//! - Two-level category → activity selection with the stale-write guard
//! - Date selection (future days rejected) and the bound ISO field
//! - The four submit validation rules, evaluated independently
//! - Building the `ActivityDraft` handed to the submit boundary
//!
//! ## Purpose:
//! Rendering components read and mutate this struct through its methods; the
//! fields mirror exactly what would be posted by the form. The selected
//! activity id is only ever valid for the active category: changing category
//! clears it, and a selection event whose owner dropdown is not the active
//! category never writes it.

use chrono::NaiveDate;
use shared::{ActivityDraft, ActivityOption, Category, PrefilledForm, SubmitError};

use crate::ui::format;

/// Authoritative state of the add-activity form
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    /// Category whose activity list is currently revealed
    pub active_category: Option<Category>,

    /// Hidden activity field; cleared whenever the category changes
    pub selected_activity_id: Option<String>,

    /// Visible label of the chosen activity
    pub selected_activity_label: Option<String>,

    /// Unit of the chosen activity, shown next to the quantity input
    pub selected_unit: Option<String>,

    /// Free-text quantity input, parsed at submit time
    pub quantity_input: String,

    /// Bound date field (YYYY-MM-DD); empty until a day is picked
    pub date_field: Option<String>,

    /// Calendar selection; defaults to today until the user picks a day
    pub selected_date: NaiveDate,

    /// Today, captured at construction; later days are unselectable
    pub today: NaiveDate,
}

impl FormState {
    /// Create a fresh form with nothing selected
    pub fn new(today: NaiveDate) -> Self {
        Self {
            active_category: None,
            selected_activity_id: None,
            selected_activity_label: None,
            selected_unit: None,
            quantity_input: String::new(),
            date_field: None,
            selected_date: today,
            today,
        }
    }

    /// Create a form seeded with the page's pre-filled values (edit flow)
    pub fn from_prefilled(
        catalog: &[ActivityOption],
        prefilled: &PrefilledForm,
        today: NaiveDate,
    ) -> Self {
        let mut form = Self::new(today);

        if let Some(date) = prefilled.date {
            form.selected_date = date;
            form.date_field = Some(format::format_iso(date));
        }

        if let Some(id) = &prefilled.activity_id {
            if let Some(option) = catalog.iter().find(|option| &option.id == id) {
                form.active_category = Some(option.category);
                form.selected_activity_id = Some(option.id.clone());
                form.selected_activity_label = Some(option.label.clone());
                form.selected_unit = Some(option.unit.clone());
            }
        }

        form
    }

    /// Activate a category: reveal its activity list and clear any activity
    /// chosen under the previous category
    pub fn choose_category(&mut self, category: Category) {
        self.active_category = Some(category);
        self.selected_activity_id = None;
        self.selected_activity_label = None;
        self.selected_unit = None;
        log::info!("🏷️ Category selected: {:?}", category);
    }

    /// Record an activity selection coming from the dropdown owned by
    /// `owner`. The unit display always follows the clicked option; the
    /// hidden field and label are written only when the owner dropdown is
    /// the active category. Returns whether the hidden field was written.
    pub fn choose_activity(&mut self, owner: Category, option: &ActivityOption) -> bool {
        self.selected_unit = Some(option.unit.clone());

        if self.active_category == Some(owner) {
            self.selected_activity_id = Some(option.id.clone());
            self.selected_activity_label = Some(option.label.clone());
            log::info!("✅ Activity selected: {} ({})", option.label, option.id);
            true
        } else {
            log::debug!(
                "Ignored activity selection from inactive dropdown {:?}: {}",
                owner,
                option.id
            );
            false
        }
    }

    /// Select a calendar day. Days after today are rejected and leave the
    /// state untouched. Returns whether the selection was applied.
    pub fn select_day(&mut self, date: NaiveDate) -> bool {
        if date > self.today {
            return false;
        }

        self.selected_date = date;
        self.date_field = Some(format::format_iso(date));
        log::info!("📅 Date selected: {}", date);
        true
    }

    /// Select today and report it in the bound field
    pub fn jump_to_today(&mut self) {
        self.selected_date = self.today;
        self.date_field = Some(format::format_iso(self.today));
        log::info!("📅 Jumped to today: {}", self.today);
    }

    /// Text shown in the date trigger once a date has been picked
    pub fn date_display(&self) -> Option<String> {
        self.date_field
            .as_ref()
            .map(|_| format::format_date_fr(self.selected_date))
    }

    /// Unit suffix shown next to the quantity input, e.g. "(km)"
    pub fn unit_suffix(&self) -> String {
        match &self.selected_unit {
            Some(unit) => format!("({})", unit),
            None => String::new(),
        }
    }

    /// Quantity input parsed as a strictly positive number
    fn parsed_quantity(&self) -> Option<f64> {
        self.quantity_input
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|quantity| *quantity > 0.0)
    }

    /// Evaluate the four submit rules independently, in display order
    pub fn validate(&self) -> Vec<SubmitError> {
        let mut errors = Vec::new();

        if self.active_category.is_none() {
            errors.push(SubmitError::MissingCategory);
        }
        if self.selected_activity_id.as_deref().map_or(true, str::is_empty) {
            errors.push(SubmitError::MissingActivity);
        }
        if self.parsed_quantity().is_none() {
            errors.push(SubmitError::InvalidQuantity);
        }
        if self.date_field.as_deref().map_or(true, str::is_empty) {
            errors.push(SubmitError::MissingDate);
        }

        errors
    }

    /// Validate and build the draft for the submit boundary
    pub fn try_submit(&self) -> Result<ActivityDraft, Vec<SubmitError>> {
        let errors = self.validate();

        match (
            self.active_category,
            self.selected_activity_id.clone(),
            self.parsed_quantity(),
        ) {
            (Some(category), Some(activity_id), Some(quantity)) if errors.is_empty() => {
                Ok(ActivityDraft {
                    category,
                    activity_id,
                    quantity,
                    date: self.selected_date,
                })
            }
            _ => Err(errors),
        }
    }

    /// Return to the fresh-page state
    pub fn reset(&mut self) {
        *self = Self::new(self.today);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn create_test_option(id: &str, category: Category, unit: &str) -> ActivityOption {
        ActivityOption {
            id: id.to_string(),
            category,
            label: format!("Option {}", id),
            unit: unit.to_string(),
        }
    }

    #[test]
    fn test_choose_category_clears_previous_activity() {
        let mut form = FormState::new(test_today());
        let bus = create_test_option("bus", Category::Transport, "km");

        form.choose_category(Category::Transport);
        form.choose_activity(Category::Transport, &bus);
        assert_eq!(form.selected_activity_id.as_deref(), Some("bus"));

        form.choose_category(Category::Food);
        assert_eq!(form.active_category, Some(Category::Food));
        assert!(form.selected_activity_id.is_none());
        assert!(form.selected_activity_label.is_none());
        assert!(form.selected_unit.is_none());
    }

    #[test]
    fn test_choose_category_sequence_keeps_single_active() {
        let mut form = FormState::new(test_today());

        for category in [
            Category::Transport,
            Category::Energy,
            Category::Food,
            Category::Energy,
        ] {
            form.choose_category(category);
            assert_eq!(form.active_category, Some(category));
        }
    }

    #[test]
    fn test_activity_before_any_category_never_writes_hidden_field() {
        let mut form = FormState::new(test_today());
        let bus = create_test_option("bus", Category::Transport, "km");

        let written = form.choose_activity(Category::Transport, &bus);

        assert!(!written);
        assert!(form.selected_activity_id.is_none());
        assert!(form.selected_activity_label.is_none());
        // The unit display still follows the clicked option
        assert_eq!(form.selected_unit.as_deref(), Some("km"));
    }

    #[test]
    fn test_activity_from_inactive_dropdown_is_ignored() {
        let mut form = FormState::new(test_today());
        let boeuf = create_test_option("boeuf", Category::Food, "kg");

        form.choose_category(Category::Transport);
        let written = form.choose_activity(Category::Food, &boeuf);

        assert!(!written);
        assert!(form.selected_activity_id.is_none());
        assert_eq!(form.selected_unit.as_deref(), Some("kg"));
    }

    #[test]
    fn test_activity_selection_for_active_category() {
        let mut form = FormState::new(test_today());
        let metro = create_test_option("metro", Category::Transport, "km");

        form.choose_category(Category::Transport);
        let written = form.choose_activity(Category::Transport, &metro);

        assert!(written);
        assert_eq!(form.selected_activity_id.as_deref(), Some("metro"));
        assert_eq!(form.selected_activity_label.as_deref(), Some("Option metro"));
        assert_eq!(form.unit_suffix(), "(km)");
    }

    #[test]
    fn test_future_day_selection_is_rejected() {
        let mut form = FormState::new(test_today());
        let tomorrow = test_today().succ_opt().unwrap();

        assert!(!form.select_day(tomorrow));
        assert_eq!(form.selected_date, test_today());
        assert!(form.date_field.is_none());
    }

    #[test]
    fn test_day_selection_writes_iso_field() {
        let mut form = FormState::new(test_today());
        let date = NaiveDate::from_ymd_opt(2025, 6, 3).unwrap();

        assert!(form.select_day(date));
        assert_eq!(form.selected_date, date);
        assert_eq!(form.date_field.as_deref(), Some("2025-06-03"));
        assert_eq!(form.date_display().as_deref(), Some("03/06/2025"));
    }

    #[test]
    fn test_today_is_selectable() {
        let mut form = FormState::new(test_today());

        assert!(form.select_day(test_today()));
        assert_eq!(form.date_field.as_deref(), Some("2025-06-15"));
    }

    #[test]
    fn test_jump_to_today() {
        let mut form = FormState::new(test_today());
        form.select_day(NaiveDate::from_ymd_opt(2025, 5, 1).unwrap());

        form.jump_to_today();

        assert_eq!(form.selected_date, test_today());
        assert_eq!(form.date_field.as_deref(), Some("2025-06-15"));
    }

    #[test]
    fn test_date_display_empty_until_selection() {
        let form = FormState::new(test_today());
        assert!(form.date_display().is_none());
    }

    #[test]
    fn test_validate_empty_form_reports_all_four_rules() {
        let form = FormState::new(test_today());

        let errors = form.validate();

        assert_eq!(
            errors,
            vec![
                SubmitError::MissingCategory,
                SubmitError::MissingActivity,
                SubmitError::InvalidQuantity,
                SubmitError::MissingDate,
            ]
        );
    }

    fn filled_form() -> FormState {
        let mut form = FormState::new(test_today());
        let bus = create_test_option("bus", Category::Transport, "km");

        form.choose_category(Category::Transport);
        form.choose_activity(Category::Transport, &bus);
        form.quantity_input = "5".to_string();
        form.select_day(NaiveDate::from_ymd_opt(2025, 6, 10).unwrap());
        form
    }

    #[test]
    fn test_validate_accepts_complete_form() {
        let form = filled_form();
        assert!(form.validate().is_empty());
    }

    #[test]
    fn test_negative_quantity_is_the_only_error() {
        let mut form = filled_form();
        form.quantity_input = "-1".to_string();

        assert_eq!(form.validate(), vec![SubmitError::InvalidQuantity]);
    }

    #[test]
    fn test_zero_and_garbage_quantities_are_invalid() {
        let mut form = filled_form();

        for input in ["0", "abc", "", "  "] {
            form.quantity_input = input.to_string();
            assert_eq!(
                form.validate(),
                vec![SubmitError::InvalidQuantity],
                "input {:?} should be invalid",
                input
            );
        }

        form.quantity_input = "0.5".to_string();
        assert!(form.validate().is_empty());
    }

    #[test]
    fn test_try_submit_builds_draft() {
        let form = filled_form();

        let draft = form.try_submit().unwrap();

        assert_eq!(draft.category, Category::Transport);
        assert_eq!(draft.activity_id, "bus");
        assert_eq!(draft.quantity, 5.0);
        assert_eq!(draft.date, NaiveDate::from_ymd_opt(2025, 6, 10).unwrap());
    }

    #[test]
    fn test_try_submit_rejects_incomplete_form() {
        let mut form = filled_form();
        form.quantity_input.clear();

        let errors = form.try_submit().unwrap_err();
        assert_eq!(errors, vec![SubmitError::InvalidQuantity]);
    }

    #[test]
    fn test_reset_returns_to_fresh_state() {
        let mut form = filled_form();

        form.reset();

        assert_eq!(form, FormState::new(test_today()));
    }

    #[test]
    fn test_prefilled_form_seeds_activity_and_date() {
        let catalog = vec![
            create_test_option("bus", Category::Transport, "km"),
            create_test_option("boeuf", Category::Food, "kg"),
        ];
        let prefilled = PrefilledForm {
            activity_id: Some("boeuf".to_string()),
            date: NaiveDate::from_ymd_opt(2025, 6, 1),
        };

        let form = FormState::from_prefilled(&catalog, &prefilled, test_today());

        assert_eq!(form.active_category, Some(Category::Food));
        assert_eq!(form.selected_activity_id.as_deref(), Some("boeuf"));
        assert_eq!(form.date_field.as_deref(), Some("2025-06-01"));
        assert_eq!(form.selected_date, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
    }

    #[test]
    fn test_prefilled_with_unknown_activity_stays_fresh() {
        let catalog = vec![create_test_option("bus", Category::Transport, "km")];
        let prefilled = PrefilledForm {
            activity_id: Some("inconnu".to_string()),
            date: None,
        };

        let form = FormState::from_prefilled(&catalog, &prefilled, test_today());

        assert!(form.active_category.is_none());
        assert!(form.selected_activity_id.is_none());
    }
}
