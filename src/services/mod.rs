// Service module exports

pub mod attendance;
pub mod calendar;
pub mod database;
pub mod preferences;
pub mod settings;
pub mod theme;
