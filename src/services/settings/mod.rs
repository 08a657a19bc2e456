// Settings service module
// Reads and writes the TOML config file

mod service;

pub use service::SettingsService;
