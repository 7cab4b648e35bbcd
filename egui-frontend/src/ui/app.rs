//! # App Module
//!
//! This module defines the central application state structure and
//! initialization logic for the EcoTrace front-end.
//!
//! ## Key Types:
//! - `MainTab` - Enum defining available tabs (AddActivity, Dashboard, History)
//! - `UiConfig` - Timing and layout constants shared by the UI
//! - `EcoTraceApp` - Main application state struct
//!
//! ## Key Functions:
//! - `new()` - Initialize the app from the embedded page payload
//! - `submit_form()` - Validate the form and either bank the draft or raise
//!   the validation banners
//! - `take_submission()` - Hand the accepted draft to the outer shell
//!
//! ## State Management:
//! The EcoTraceApp struct holds all application state in a single location
//! and composes the focused state modules from `ui::state`. Interaction
//! rules that span modules (a popover opening resets the calendar view, a
//! successful submit resets the form) live here so components stay thin.

use std::time::Duration;

use chrono::NaiveDate;
use log::info;
use shared::{ActivityDraft, ActivityOption, Category, Recommendation};

use crate::data::{DashboardData, PageData};
use crate::ui::state::{
    BannerState, CalendarState, DashboardState, FormState, HistoryState, PopoverId, PopoverState,
};

/// Tabs available in the main interface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainTab {
    AddActivity,
    Dashboard,
    History,
}

impl MainTab {
    pub const ALL: [MainTab; 3] = [MainTab::AddActivity, MainTab::Dashboard, MainTab::History];

    /// Tab bar label
    pub fn label(&self) -> &'static str {
        match self {
            MainTab::AddActivity => "Ajouter une activité",
            MainTab::Dashboard => "Tableau de bord",
            MainTab::History => "Historique",
        }
    }

    /// Tab bar icon
    pub fn icon(&self) -> &'static str {
        match self {
            MainTab::AddActivity => "➕",
            MainTab::Dashboard => "📊",
            MainTab::History => "📋",
        }
    }
}

/// Timing and layout constants shared by the UI
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// How long a banner stays on screen
    pub banner_lifetime: Duration,

    /// Minimum clearance kept between a popover and the viewport edge
    pub viewport_margin: f32,

    /// Vertical gap between a trigger and its popover
    pub popover_gap: f32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            banner_lifetime: Duration::from_secs(5),
            viewport_margin: 20.0,
            popover_gap: 8.0,
        }
    }
}

/// Main application struct for the EcoTrace front-end
pub struct EcoTraceApp {
    /// Activity catalog from the page payload, all categories mixed
    pub catalog: Vec<ActivityOption>,

    // Form surface
    pub form: FormState,
    pub popovers: PopoverState,
    pub calendar: CalendarState,
    pub banners: BannerState,

    // Read-only tabs
    pub history: HistoryState,
    pub dashboard_data: Option<DashboardData>,
    pub recommendations: Vec<Recommendation>,
    pub dashboard: DashboardState,

    // UI state
    pub current_tab: MainTab,
    pub config: UiConfig,

    /// Draft accepted by the last successful submit, until collected
    pub pending_submission: Option<ActivityDraft>,

    /// Today, captured once at startup
    pub today: NaiveDate,
}

impl EcoTraceApp {
    /// Create a new EcoTraceApp from the embedded page payload
    pub fn new() -> Result<Self, anyhow::Error> {
        info!("🚀 Initializing EcoTrace app");

        let data = PageData::load_embedded()?;
        let today = chrono::Local::now().date_naive();
        let config = UiConfig::default();

        Ok(Self {
            form: FormState::from_prefilled(&data.catalog, &data.prefilled, today),
            popovers: PopoverState::new(),
            calendar: CalendarState::new(today),
            banners: BannerState::new(config.banner_lifetime),
            history: HistoryState::new(data.history),
            dashboard_data: data.dashboard,
            recommendations: data.recommendations,
            dashboard: DashboardState::new(),
            catalog: data.catalog,
            current_tab: MainTab::AddActivity,
            config,
            pending_submission: None,
            today,
        })
    }

    /// Activate a category section; collapses any open popover and clears
    /// the previously chosen activity
    pub fn select_category(&mut self, category: Category) {
        self.form.choose_category(category);
        self.popovers.close_all();
    }

    /// Handle a click on an activity option inside the dropdown owned by
    /// `owner`. Looks the option up in the catalog, applies the selection
    /// rules and collapses the dropdown.
    pub fn select_activity(&mut self, owner: Category, option_id: &str) {
        let Some(option) = self
            .catalog
            .iter()
            .find(|option| option.id == option_id)
            .cloned()
        else {
            return;
        };

        self.form.choose_activity(owner, &option);
        self.popovers.close_all();
    }

    /// Toggle one category's activity dropdown
    pub fn toggle_activity_dropdown(&mut self, category: Category) {
        self.popovers.toggle(PopoverId::Activity(category));
    }

    /// Toggle the date picker; on open the calendar view snaps back to the
    /// selected date's month
    pub fn toggle_date_picker(&mut self) {
        let opening = !self.popovers.is_open(PopoverId::DatePicker);
        self.popovers.toggle(PopoverId::DatePicker);
        if opening {
            self.calendar.reset_view_to(self.form.selected_date);
        }
    }

    /// Handle a click on a calendar day; the picker closes only when the
    /// selection was accepted
    pub fn select_calendar_day(&mut self, date: NaiveDate) {
        if self.form.select_day(date) {
            self.popovers.close_all();
        }
    }

    /// Select today, report it in the field and re-center the view. The
    /// picker stays open.
    pub fn jump_to_today(&mut self) {
        self.form.jump_to_today();
        self.calendar.reset_view_to(self.today);
    }

    /// Validate the form. On success the draft is banked for the shell, a
    /// confirmation banner is shown and the form returns to its fresh
    /// state; on failure each broken rule gets its own banner.
    pub fn submit_form(&mut self) {
        match self.form.try_submit() {
            Ok(draft) => {
                info!(
                    "🌱 Activity accepted: {} x{} on {}",
                    draft.activity_id, draft.quantity, draft.date
                );
                self.pending_submission = Some(draft);
                self.banners.flash_success("Activité ajoutée avec succès !");
                self.form.reset();
                self.popovers.close_all();
            }
            Err(errors) => {
                log::warn!("⚠️ Submit rejected: {} rule(s) failed", errors.len());
                self.banners.show_validation_errors(&errors);
            }
        }
    }

    /// Collect the draft accepted by the last successful submit
    pub fn take_submission(&mut self) -> Option<ActivityDraft> {
        self.pending_submission.take()
    }
}
