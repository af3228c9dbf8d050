pub mod api_config;
#[allow(clippy::module_inception)]
pub mod config;
pub mod display_config;
pub mod upload_config;
