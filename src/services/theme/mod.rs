// Theme service
// Persisted dark-mode preference applied to the visual environment

mod mapper;
mod service;
mod target;

pub use mapper::{format_dark_mode, parse_dark_mode};
pub use service::ThemePreference;
pub use target::{MarkerSet, ThemeTarget};
