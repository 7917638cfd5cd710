// Settings service
// Locates and loads the application configuration

mod service;

pub use service::SettingsService;
