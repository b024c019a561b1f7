pub mod server_settings;
pub mod status_panel;
