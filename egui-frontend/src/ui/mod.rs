pub mod app;
pub mod app_coordinator;
pub mod components;
pub mod format;
pub mod state;

pub use app::*;
pub use components::*;
