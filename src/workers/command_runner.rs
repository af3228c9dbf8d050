use std::path::{Path, PathBuf};
use std::time::Instant;
use crate::config::config_manager::{ConfigManager, ConfigOverrides};
use crate::config::constants::timeout_duration;
use crate::enums::commands::Commands;
use crate::enums::highlight_markup::HighlightMarkup;
use crate::enums::sort_field::{SortDirection, SortField};
use crate::errors::{SafeworkError, SafeworkResult};
use crate::logger::analysis_logger::AnalysisLogger;
use crate::services::safework_api::SafeworkApi;
use crate::services::score_animator::ScoreAnimator;
use crate::services::text_highlighter::TextHighlighter;
use crate::services::upload_controller::UploadController;
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::config::config::Config;
use crate::structs::sort_state::SortState;
use crate::workers::session_runner::SessionRunner;
use crate::workers::upload_worker::UploadWorker;

pub struct CommandRunner {
    config_path: Option<PathBuf>,
    overrides: ConfigOverrides,
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new(config_path: Option<PathBuf>, overrides: ConfigOverrides) -> Self {
        Self {
            config_path,
            overrides,
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> SafeworkResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command(),
            Commands::Validate => self.validate_command(),
            Commands::Upload { files, sort, ascending, json } => self.upload_command(files, sort, ascending, json).await,
            Commands::Report { file_id, print_only } => self.report_command(&file_id, print_only),
            Commands::Highlight { file, markup } => self.highlight_command(&file, markup).await,
            Commands::Session => self.session_command().await,
        };

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::debug!("⏱️  Command completed in {:.2}s", duration.as_secs_f64());
        }

        result
    }

    fn init_command(&self) -> SafeworkResult<()> {
        log::info!("🚀 Initializing safework configuration...");

        let path = match &self.config_path {
            Some(path) => path.clone(),
            None => ConfigManager::default_path()?,
        };

        match ConfigManager::create_sample_config(&path) {
            Ok(()) => {
                log::info!("✅ Configuration file created at {}", path.display());
                log::info!("📝 Set [api].base_url to your analysis service.");
                log::info!("🔧 Run 'safework validate' to check your configuration.");
                Ok(())
            }
            Err(e) => {
                log::error!("❌ Failed to create configuration: {}", e);
                Err(e)
            }
        }
    }

    fn validate_command(&self) -> SafeworkResult<()> {
        log::info!("🔍 Validating configuration...");

        let config = self.load_config()?;
        log::info!("🌐 Analysis service: {}", config.api.base_url);
        log::info!("⏳ Request timeout: {}s", config.api.timeout_secs);
        log::info!(
            "📎 Accepted documents: {} (max {} MB)",
            config.upload.allowed_extensions.join(", "),
            config.upload.max_file_size_mb
        );
        log::info!("🔦 Highlight keywords: {}", config.display.highlight_keywords.len());

        log::info!("✅ Configuration is valid");
        Ok(())
    }

    async fn upload_command(&self, files: Vec<PathBuf>, field: SortField, ascending: bool, json: bool) -> SafeworkResult<()> {
        let config = self.load_config()?;
        let highlighter = TextHighlighter::from_keywords(&config.display.highlight_keywords)?;
        let controller = Self::controller(&config)?;

        log::info!("📤 Uploading {} document(s) to {}", files.len(), config.api.base_url);

        let mut failures = 0usize;
        for path in &files {
            match UploadWorker::upload_path(&controller, path, &config.upload).await {
                Ok(result) => log::info!("✅ {} scored {} ({})", result.filename, result.risk_score, result.risk_level().label()),
                Err(SafeworkError::Cancelled) => {
                    log::warn!("🛑 Upload cancelled, skipping remaining documents");
                    failures += 1;
                    break;
                }
                Err(e) => {
                    log::error!("❌ {}: {}", path.display(), e.status_message());
                    log::error!("   Continuing with next document...");
                    failures += 1;
                }
            }
        }

        let sort = SortState {
            field,
            direction: if ascending { SortDirection::Ascending } else { SortDirection::Descending },
        };
        let rows = controller.sorted_results(&sort);

        if rows.is_empty() {
            log::error!("⚠️ No documents were analyzed.");
            return Err(SafeworkError::system_error(
                "upload documents",
                &format!("all {failures} upload(s) failed"),
            ));
        }

        if json {
            let records: Vec<&AnalysisResult> = rows.iter().map(|r| &**r).collect();
            let output = serde_json::to_string_pretty(&records)
                .map_err(|e| SafeworkError::system_error("serialize analyses", &e.to_string()))?;
            println!("{output}");
        } else {
            if let Some(current) = controller.current() {
                let mut score = ScoreAnimator::default();
                AnalysisLogger::print_analysis(&current, &config.api, &highlighter, &mut score, config.display.score_tick()).await;
            }
            let current = controller.current();
            AnalysisLogger::print_table(&rows, &sort, current.as_deref().map(|c| c.id.as_str()));
        }

        if failures > 0 {
            log::warn!("⚠️ {} of {} document(s) failed", failures, files.len());
        }

        Ok(())
    }

    fn report_command(&self, file_id: &str, print_only: bool) -> SafeworkResult<()> {
        let config = self.load_config()?;
        let url = config.api.report_url(file_id);

        if print_only {
            println!("{url}");
            return Ok(());
        }

        log::info!("📥 Opening report: {url}");
        webbrowser::open(&url).map_err(|e| SafeworkError::system_error("open report in browser", &e.to_string()))
    }

    async fn highlight_command(&self, file: &Path, markup: HighlightMarkup) -> SafeworkResult<()> {
        let config = self.load_config()?;
        let highlighter = TextHighlighter::from_keywords(&config.display.highlight_keywords)?;

        let text = tokio::fs::read_to_string(file)
            .await
            .map_err(|e| SafeworkError::file_error(&file.display().to_string(), "read", &e.to_string()))?;

        let terms = highlighter.find_terms(&text);
        log::info!("🔦 {} risk term(s) in {}", terms.len(), file.display());
        println!("{}", highlighter.highlight(&text, markup));
        Ok(())
    }

    async fn session_command(&self) -> SafeworkResult<()> {
        let config = self.load_config()?;
        let controller = Self::controller(&config)?;
        let mut session = SessionRunner::new(config, controller)?;
        session.run().await
    }

    fn controller(config: &Config) -> SafeworkResult<UploadController<SafeworkApi>> {
        let api = SafeworkApi::new(config.api.clone())?;
        Ok(UploadController::new(api, timeout_duration(config.api.timeout_secs)))
    }

    fn load_config(&self) -> SafeworkResult<Config> {
        let config = match ConfigManager::load(self.config_path.as_deref(), &self.overrides) {
            Ok(config) => config,
            Err(e) => {
                log::error!("❌ Failed to load configuration: {}", e);
                log::error!("💡 Run 'safework init' to create a configuration file.");
                return Err(e);
            }
        };

        if let Err(problems) = ConfigManager::validate_config(&config) {
            for problem in &problems {
                log::error!("   • {problem}");
            }
            return Err(SafeworkError::config_error(
                &format!("{} configuration problem(s) found", problems.len()),
                None,
                Some("Fix the fields listed above or run 'safework init' for a fresh file"),
            ));
        }

        Ok(config)
    }
}
