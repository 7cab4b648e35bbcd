//! # UI Components Module
//!
//! This module organizes all UI components for the EcoTrace application.
//! Each submodule handles a specific aspect of the user interface.
//!
//! ## Module Organization:
//! - `styling` - Global style setup and shared drawing helpers
//! - `theme` - Color palette and theme constants
//! - `header` - Application header with title and date
//! - `banners` - Flash banner stack (validation errors, confirmations)
//! - `activity_form` - Add-activity form with dependent dropdowns
//! - `calendar_popover` - Floating date-picker
//! - `charts` - Line, bar and donut chart drawing
//! - `data_preparation` - Pure aggregation for the chart series
//! - `history_view` - History tab with table and charts
//! - `dashboard_view` - Dashboard tab with stats and recommendations
//! - `ui_components` - Reusable UI helper functions and drawing utilities
//!
//! ## Architecture:
//! The components are organized to promote reusability and maintainability.
//! Each module has a clear responsibility and minimal dependencies on others.

pub mod activity_form;
pub mod banners;
pub mod calendar_popover;
pub mod charts;
pub mod dashboard_view;
pub mod data_preparation;
pub mod header;
pub mod history_view;
pub mod styling;
pub mod theme;
pub mod ui_components;

pub use styling::{draw_gradient_background, setup_app_style};
pub use theme::*;
