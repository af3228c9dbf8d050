pub mod cancellation;
pub mod result_store;
pub mod safework_api;
pub mod score_animator;
pub mod text_highlighter;
pub mod upload_controller;
