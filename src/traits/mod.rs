pub mod analysis_client;
