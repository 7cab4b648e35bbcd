//! # Theme Configuration
//!
//! This module provides centralized color and style configuration for the EcoTrace app.
//! All visual styling should use these constants to ensure consistency and easy theme management.
//!
//! ## Future Theming Support
//! This module is designed to support multiple themes/skins in the future. Currently it provides
//! the default "EcoTrace" green theme, but the structure allows for easy addition of new themes.
//!
//! ## Usage
//! ```rust
//! use crate::ui::components::theme::{Theme, CURRENT_THEME};
//!
//! // Use theme colors
//! let color = CURRENT_THEME.interactive.hover_border;
//! ```

use eframe::egui::Color32;
use shared::Category;

/// Main theme configuration structure
#[derive(Debug, Clone)]
pub struct Theme {
    /// Interactive element colors (buttons, dropdowns, etc.)
    pub interactive: InteractiveColors,
    /// Background and layout colors
    pub layout: LayoutColors,
    /// Text and typography colors
    pub typography: TypographyColors,
    /// Calendar-specific colors
    pub calendar: CalendarColors,
    /// Flash banner colors
    pub banner: BannerColors,
    /// Chart series colors
    pub chart: ChartColors,
}

/// Colors for interactive elements (buttons, dropdowns, hover states)
#[derive(Debug, Clone)]
pub struct InteractiveColors {
    /// Primary hover border color - used for consistent outline across all interactive elements
    pub hover_border: Color32,
    /// Hover background color for list rows and dropdown options
    pub hover_background: Color32,
    /// Active/selected background color
    pub active_background: Color32,
    /// Inactive background color
    pub inactive_background: Color32,
    /// Button border colors
    pub button_border_normal: Color32,
    pub button_border_active: Color32,
}

/// Layout and container colors
#[derive(Debug, Clone)]
pub struct LayoutColors {
    /// Gradient background colors
    pub gradient_top: Color32,
    pub gradient_bottom: Color32,
    /// Card and container colors
    pub card_background: Color32,
    pub card_border: Color32,
}

/// Text and typography colors
#[derive(Debug, Clone)]
pub struct TypographyColors {
    /// Primary text color (main content)
    pub primary: Color32,
    /// Secondary text color (less prominent, placeholders)
    pub secondary: Color32,
    /// Heading text color
    pub heading: Color32,
    /// Active/selected text color
    pub active: Color32,
    /// White text (for dark backgrounds)
    pub white: Color32,
}

/// Calendar-specific colors
#[derive(Debug, Clone)]
pub struct CalendarColors {
    /// Current day outline color
    pub today_border: Color32,
    /// Selected day colors
    pub selected_background: Color32,
    pub selected_border: Color32,
    /// Hover background for selectable days
    pub day_hover: Color32,
    /// Text color for unselectable future days
    pub disabled_text: Color32,
    /// Weekday header text
    pub header_text: Color32,
    /// Popover panel background and border
    pub panel_background: Color32,
    pub panel_border: Color32,
}

/// Flash banner colors, one background/text pair per kind
#[derive(Debug, Clone)]
pub struct BannerColors {
    pub success_background: Color32,
    pub success_text: Color32,
    pub danger_background: Color32,
    pub danger_text: Color32,
    pub warning_background: Color32,
    pub warning_text: Color32,
    pub info_background: Color32,
    pub info_text: Color32,
}

/// Chart series colors
#[derive(Debug, Clone)]
pub struct ChartColors {
    /// Per-category colors, matching the category cards
    pub transport: Color32,
    pub food: Color32,
    pub energy: Color32,
    pub consumption: Color32,
    /// Trend line color
    pub trend_line: Color32,
    /// Axis and grid text
    pub grid: Color32,
}

/// The current active theme - EcoTrace green theme
pub const CURRENT_THEME: Theme = Theme {
    interactive: InteractiveColors {
        // PRIMARY: Emerald outline shared by all interactive elements
        hover_border: Color32::from_rgb(16, 185, 129),
        // Soft emerald wash for hovered rows and options
        hover_background: Color32::from_rgb(236, 253, 245),
        // Active button background (emerald)
        active_background: Color32::from_rgb(16, 185, 129),
        // Inactive button background (light gray)
        inactive_background: Color32::from_rgb(248, 250, 252),
        // Button borders
        button_border_normal: Color32::from_rgb(229, 231, 235),
        button_border_active: Color32::from_rgb(5, 150, 105),
    },
    layout: LayoutColors {
        // Background gradient (pale green to light gray)
        gradient_top: Color32::from_rgb(236, 253, 245),
        gradient_bottom: Color32::from_rgb(243, 244, 246),
        // Card styling
        card_background: Color32::WHITE,
        card_border: Color32::from_rgb(229, 231, 235),
    },
    typography: TypographyColors {
        // Text colors
        primary: Color32::from_rgb(31, 41, 55),
        secondary: Color32::from_rgb(107, 114, 128),
        heading: Color32::from_rgb(17, 24, 39),
        active: Color32::from_rgb(5, 150, 105),
        white: Color32::WHITE,
    },
    calendar: CalendarColors {
        // Today keeps an emerald outline when not selected
        today_border: Color32::from_rgb(16, 185, 129),
        // Selected day is filled emerald with white text
        selected_background: Color32::from_rgb(16, 185, 129),
        selected_border: Color32::from_rgb(5, 150, 105),
        // Hover wash for selectable days
        day_hover: Color32::from_rgb(209, 250, 229),
        // Future days are grayed out
        disabled_text: Color32::from_rgb(209, 213, 219),
        header_text: Color32::from_rgb(107, 114, 128),
        panel_background: Color32::WHITE,
        panel_border: Color32::from_rgb(229, 231, 235),
    },
    banner: BannerColors {
        success_background: Color32::from_rgb(209, 250, 229),
        success_text: Color32::from_rgb(6, 95, 70),
        danger_background: Color32::from_rgb(254, 226, 226),
        danger_text: Color32::from_rgb(153, 27, 27),
        warning_background: Color32::from_rgb(254, 243, 199),
        warning_text: Color32::from_rgb(146, 64, 14),
        info_background: Color32::from_rgb(219, 234, 254),
        info_text: Color32::from_rgb(30, 64, 175),
    },
    chart: ChartColors {
        transport: Color32::from_rgb(59, 130, 246),
        food: Color32::from_rgb(249, 115, 22),
        energy: Color32::from_rgb(239, 68, 68),
        consumption: Color32::from_rgb(168, 85, 247),
        trend_line: Color32::from_rgb(16, 185, 129),
        grid: Color32::from_rgb(156, 163, 175),
    },
};

/// Helper functions for common styling patterns
impl Theme {
    /// Get hover border color for interactive elements
    pub fn hover_border(&self) -> Color32 {
        self.interactive.hover_border
    }

    /// Get hover background color for interactive elements
    pub fn hover_background(&self) -> Color32 {
        self.interactive.hover_background
    }

    /// Get the series color for a category, matching its card accent
    pub fn category_color(&self, category: Category) -> Color32 {
        match category {
            Category::Transport => self.chart.transport,
            Category::Food => self.chart.food,
            Category::Energy => self.chart.energy,
            Category::Consumption => self.chart.consumption,
        }
    }
}

/// Convenience constants for the most commonly used colors
pub mod colors {
    use super::CURRENT_THEME;
    use eframe::egui::Color32;

    // Interactive colors - most commonly used
    pub const HOVER_BORDER: Color32 = CURRENT_THEME.interactive.hover_border;
    pub const HOVER_BACKGROUND: Color32 = CURRENT_THEME.interactive.hover_background;
    pub const ACTIVE_BACKGROUND: Color32 = CURRENT_THEME.interactive.active_background;
    pub const INACTIVE_BACKGROUND: Color32 = CURRENT_THEME.interactive.inactive_background;

    // Typography colors
    pub const TEXT_PRIMARY: Color32 = CURRENT_THEME.typography.primary;
    pub const TEXT_SECONDARY: Color32 = CURRENT_THEME.typography.secondary;
    pub const TEXT_WHITE: Color32 = CURRENT_THEME.typography.white;

    // Layout colors
    pub const CARD_BACKGROUND: Color32 = CURRENT_THEME.layout.card_background;
    pub const CARD_BORDER: Color32 = CURRENT_THEME.layout.card_border;
}
