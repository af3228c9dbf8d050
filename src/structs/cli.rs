use std::path::PathBuf;
use clap::Parser;
use crate::config::config_manager::ConfigOverrides;
use crate::enums::commands::Commands;

#[derive(Parser, Debug)]
#[clap(name = "safework")]
#[clap(about = "Upload safety inspection documents for AI risk analysis", long_about = None)]
pub struct Cli {
    /// Root URL of the analysis service (upload and report endpoints)
    #[clap(long, global = true)]
    pub base_url: Option<String>,

    /// Path to the configuration file (default: ~/safework/config.toml)
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,

    /// Request timeout in seconds
    #[clap(long, global = true)]
    pub timeout: Option<u64>,

    #[clap(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::sort_field::SortField;

    #[test]
    fn parses_upload_with_global_flags() {
        let cli = Cli::parse_from(["safework", "upload", "a.pdf", "b.png", "--sort", "score", "--base-url", "http://svc:5000"]);
        assert_eq!(cli.overrides().base_url.as_deref(), Some("http://svc:5000"));
        match cli.command {
            Commands::Upload { files, sort, ascending, json } => {
                assert_eq!(files.len(), 2);
                assert_eq!(sort, SortField::RiskScore);
                assert!(!ascending);
                assert!(!json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn upload_requires_a_file() {
        assert!(Cli::try_parse_from(["safework", "upload"]).is_err());
    }
}
