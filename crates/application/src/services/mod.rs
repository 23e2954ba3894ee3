//! Application services

mod debounce;
mod panel;

pub use debounce::Debouncer;
pub use panel::{ControlPanelService, PanelConfig, PanelSnapshot, PickerSnapshot};
