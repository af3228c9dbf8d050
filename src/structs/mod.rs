pub mod analysis_result;
pub mod cli;
pub mod config;
pub mod document_upload;
pub mod risk_item;
pub mod service_reply;
pub mod sort_state;
pub mod upload_response;
