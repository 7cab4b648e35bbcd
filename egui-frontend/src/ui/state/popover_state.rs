//! # Popover State Module
//!
//! This module contains the coordinator for the form's transient overlays:
//! the per-category activity dropdowns and the date-picker calendar.
//!
//! ## Responsibilities:
//! - Track which popover (if any) currently holds the single open slot
//! - Toggle and close-all semantics shared by every trigger
//! - Chevron glyph state for the trigger controls
//!
//! ## Purpose:
//! At most one popover is open at any time. Opening one closes whatever else
//! was open; selecting inside a popover, clicking outside, pressing Escape or
//! the explicit close control all funnel through `close_all`.

use shared::Category;

/// Identifies each popover that can claim the open slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopoverId {
    /// Activity dropdown of one category section
    Activity(Category),
    /// The date-picker calendar
    DatePicker,
}

/// Chevron orientation on a popover trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChevronState {
    Closed,
    Open,
}

impl ChevronState {
    /// Glyph drawn on the trigger control
    pub fn glyph(&self) -> &'static str {
        match self {
            ChevronState::Closed => "⏷",
            ChevronState::Open => "⏶",
        }
    }
}

/// Tracks the single popover allowed open at a time
#[derive(Debug, Default)]
pub struct PopoverState {
    /// Currently open popover, if any
    pub open: Option<PopoverId>,

    /// Prevents outside-click detection on the frame a popover opens
    pub just_opened: bool,
}

impl PopoverState {
    /// Create new popover state with everything closed
    pub fn new() -> Self {
        Self {
            open: None,
            just_opened: false,
        }
    }

    /// Toggle one popover: close it if it is the open one, otherwise close
    /// everything and open it
    pub fn toggle(&mut self, id: PopoverId) {
        if self.open == Some(id) {
            self.close_all();
        } else {
            self.open = Some(id);
            self.just_opened = true;
            log::debug!("🔽 Popover opened: {:?}", id);
        }
    }

    /// Close every popover. Safe to call when nothing is open.
    pub fn close_all(&mut self) {
        if self.open.is_some() {
            log::debug!("🔼 Popovers closed");
        }
        self.open = None;
        self.just_opened = false;
    }

    /// Whether a specific popover is open
    pub fn is_open(&self, id: PopoverId) -> bool {
        self.open == Some(id)
    }

    /// Whether any popover is open
    pub fn any_open(&self) -> bool {
        self.open.is_some()
    }

    /// Chevron state for a trigger control
    pub fn chevron(&self, id: PopoverId) -> ChevronState {
        if self.is_open(id) {
            ChevronState::Open
        } else {
            ChevronState::Closed
        }
    }
}
