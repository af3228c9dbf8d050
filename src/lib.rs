//! Command-line dashboard for the SafeWork document risk analysis service.
//!
//! Documents are uploaded as multipart forms, the returned analysis is kept in
//! an in-memory history, and risk keywords in the extracted text are
//! highlighted for review.

pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod logger;
pub mod services;
pub mod structs;
pub mod traits;
pub mod workers;
