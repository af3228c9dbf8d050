use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use crate::enums::session_command::SessionCommand;
use crate::errors::{ErrorHandler, SafeworkError, SafeworkResult};
use crate::logger::analysis_logger::AnalysisLogger;
use crate::services::score_animator::ScoreAnimator;
use crate::services::text_highlighter::TextHighlighter;
use crate::services::upload_controller::UploadController;
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::config::config::Config;
use crate::structs::sort_state::SortState;
use crate::traits::analysis_client::AnalysisClient;
use crate::workers::upload_worker::UploadWorker;

/// Interactive dashboard: upload documents, browse the history table and
/// open reports, all against one in-memory result store.
pub struct SessionRunner<C: AnalysisClient> {
    config: Config,
    controller: UploadController<C>,
    highlighter: TextHighlighter,
    sort: SortState,
    score: ScoreAnimator,
}

impl<C: AnalysisClient> SessionRunner<C> {
    pub fn new(config: Config, controller: UploadController<C>) -> SafeworkResult<Self> {
        let highlighter = TextHighlighter::from_keywords(&config.display.highlight_keywords)?;
        Ok(Self {
            config,
            controller,
            highlighter,
            sort: SortState::default(),
            score: ScoreAnimator::default(),
        })
    }

    pub async fn run(&mut self) -> SafeworkResult<()> {
        log::info!("🛡️  SafeWork session started against {}", self.config.api.base_url);
        log::info!("💡 Type 'help' for commands, 'quit' to leave");

        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            print!("\nsafework> ");
            std::io::stdout().flush()?;

            let line = tokio::select! {
                line = lines.next_line() => line?,
                _ = tokio::signal::ctrl_c() => {
                    println!();
                    break;
                }
            };

            let Some(line) = line else {
                break;
            };

            if line.trim().is_empty() {
                continue;
            }

            let command = match line.parse::<SessionCommand>() {
                Ok(command) => command,
                Err(e) => {
                    ErrorHandler::handle_error(&e);
                    continue;
                }
            };

            if command == SessionCommand::Quit {
                break;
            }

            if let Err(e) = self.handle(command).await {
                ErrorHandler::handle_error(&e);
            }
        }

        log::info!("👋 Session closed with {} analyses", self.controller.result_count());
        Ok(())
    }

    async fn handle(&mut self, command: SessionCommand) -> SafeworkResult<()> {
        match command {
            SessionCommand::Upload(path) => {
                let result = UploadWorker::upload_path(&self.controller, &path, &self.config.upload).await?;
                self.show(&result).await;
                self.list();
            }
            SessionCommand::List => self.list(),
            SessionCommand::Sort(field) => {
                self.sort.toggle(field);
                log::info!("↕️  Sorted by {}", self.sort.describe());
                self.list();
            }
            SessionCommand::View(row) => {
                let rows = self.controller.sorted_results(&self.sort);
                let picked = rows.get(row - 1).ok_or_else(|| SafeworkError::input_error(
                    &row.to_string(),
                    &format!("a row between 1 and {}", rows.len()),
                    "Run 'list' to see row numbers",
                ))?;
                let result = self.controller.select(&picked.id)?;
                self.show(&result).await;
            }
            SessionCommand::Show => {
                let current = self.current_or_hint()?;
                self.show(&current).await;
            }
            SessionCommand::Report => {
                let current = self.current_or_hint()?;
                let url = current.report_url(&self.config.api);
                log::info!("📥 Opening report: {url}");
                webbrowser::open(&url)
                    .map_err(|e| SafeworkError::system_error("open report in browser", &e.to_string()))?;
            }
            SessionCommand::Status => {
                let state = self.controller.state();
                log::info!("{} Upload status: {} {}", state.status.icon(), state.status, state.message());
            }
            SessionCommand::Help => println!("{}", SessionCommand::HELP),
            SessionCommand::Quit => {}
        }

        Ok(())
    }

    fn current_or_hint(&self) -> SafeworkResult<Arc<AnalysisResult>> {
        self.controller.current().ok_or_else(|| SafeworkError::input_error(
            "current analysis",
            "an uploaded or selected analysis",
            "Upload a document or select a previous analysis with 'view <row>'",
        ))
    }

    async fn show(&mut self, result: &AnalysisResult) {
        let tick = self.config.display.score_tick();
        AnalysisLogger::print_analysis(result, &self.config.api, &self.highlighter, &mut self.score, tick).await;
    }

    fn list(&self) {
        let rows = self.controller.sorted_results(&self.sort);
        let current = self.controller.current();
        AnalysisLogger::print_table(&rows, &self.sort, current.as_deref().map(|c| c.id.as_str()));
    }
}
