pub mod config_helper;
pub mod display_helper;
