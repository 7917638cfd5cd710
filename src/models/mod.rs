// Module exports for models

pub mod attendance;
pub mod calendar;
pub mod settings;
pub mod theme;
