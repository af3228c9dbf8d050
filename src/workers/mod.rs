pub mod command_runner;
pub mod session_runner;
pub mod upload_worker;
