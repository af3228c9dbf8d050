mod config_flow;
mod upload_flow;
