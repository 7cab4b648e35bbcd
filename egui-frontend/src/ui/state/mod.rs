//! # UI State Modules
//!
//! Focused state modules, one per concern, composed by `EcoTraceApp`.
//! Rendering code reads and mutates these; none of them touch egui directly,
//! so every interaction rule is testable without a UI.

pub mod banner_state;
pub mod calendar_state;
pub mod dashboard_state;
pub mod form_state;
pub mod history_state;
pub mod popover_state;

pub use banner_state::{Banner, BannerKind, BannerState};
pub use calendar_state::{CalendarState, DayCell, DayCellKind};
pub use dashboard_state::{DashboardState, RecommendationFilter};
pub use form_state::FormState;
pub use history_state::{HistorySort, HistoryState};
pub use popover_state::{ChevronState, PopoverId, PopoverState};
