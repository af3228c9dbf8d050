pub mod commands;
pub mod highlight_markup;
pub mod risk_level;
pub mod session_command;
pub mod sort_field;
pub mod upload_status;
