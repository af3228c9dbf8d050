use std::io::Write;
use std::sync::Arc;
use std::time::Duration;
use crate::enums::highlight_markup::HighlightMarkup;
use crate::enums::risk_level::RiskLevel;
use crate::enums::sort_field::SortField;
use crate::helpers::display_helper::DisplayHelper;
use crate::services::score_animator::ScoreAnimator;
use crate::services::text_highlighter::TextHighlighter;
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::config::api_config::ApiConfig;
use crate::structs::sort_state::SortState;

const RESET: &str = "\x1b[0m";
const FILENAME_COLUMN: usize = 36;
const DATE_COLUMN: usize = 24;
const SCORE_COLUMN: usize = 12;

pub struct AnalysisLogger {}

impl AnalysisLogger {

    pub fn risk_panel(score: u8) -> String {
        let level = RiskLevel::from_score(score);
        let color = level.ansi_color();
        let bar = DisplayHelper::score_bar(score);
        let emoji = level.emoji();
        let label = level.label();
        format!(
            "⚠️  Risk Assessment\n   Risk Score {color}{score:>3}{RESET}\n   {color}{bar}{RESET}\n   Low       Medium      High\n   {emoji} {color}{label}{RESET}"
        )
    }

    /// Draws the score panel. `animator` keeps the value shown last, so the
    /// counter moves from there to `score`; with no `tick` it jumps.
    pub async fn print_risk_score(animator: &mut ScoreAnimator, score: u8, tick: Option<Duration>) {
        animator.retarget(score);

        let Some(tick) = tick else {
            animator.settle();
            println!("{}", Self::risk_panel(score));
            return;
        };

        let lines = Self::risk_panel(0).lines().count();
        let mut first = true;

        animator
            .run(tick, |displayed| {
                if !first {
                    print!("\x1b[{lines}A");
                }
                first = false;
                for line in Self::risk_panel(displayed).lines() {
                    println!("\x1b[K{line}");
                }
                let _ = std::io::stdout().flush();
            })
            .await;
    }

    pub fn text_panel(result: &AnalysisResult, highlighter: &TextHighlighter, markup: HighlightMarkup) -> String {
        let mut panel = format!("📄 Extracted Text from {}\n", result.filename);
        if result.extracted_text.trim().is_empty() {
            panel.push_str("   No text extracted yet");
        } else {
            panel.push_str(&highlighter.highlight(&result.extracted_text, markup));
        }
        panel
    }

    pub fn feedback_panel(result: &AnalysisResult) -> Option<String> {
        result
            .gpt_feedback
            .as_ref()
            .map(|feedback| format!("🤖 AI Safety Feedback\n{feedback}"))
    }

    pub fn top_risks_panel(result: &AnalysisResult) -> Option<String> {
        if result.top_risks.is_empty() {
            return None;
        }

        let mut panel = String::from("🔍 Top Risks\n");
        for (i, risk) in result.top_risks.iter().enumerate() {
            panel.push_str(&format!(
                "  {}. {} {} [{}]\n",
                i + 1,
                risk.severity.emoji(),
                risk.description,
                risk.category
            ));
        }
        Some(panel.trim_end().to_string())
    }

    pub async fn print_analysis(
        result: &AnalysisResult,
        api: &ApiConfig,
        highlighter: &TextHighlighter,
        score: &mut ScoreAnimator,
        score_tick: Option<Duration>,
    ) {
        let rule = DisplayHelper::rule('━');

        println!("\n{rule}");
        println!("{}", Self::text_panel(result, highlighter, HighlightMarkup::Ansi));

        if let Some(feedback) = Self::feedback_panel(result) {
            println!("{rule}");
            println!("{feedback}");
        }

        if let Some(risks) = Self::top_risks_panel(result) {
            println!("{rule}");
            println!("{risks}");
        }

        println!("{rule}");
        Self::print_risk_score(score, result.risk_score, score_tick).await;

        if result.has_report() {
            println!("{rule}");
            println!("📥 Download PDF Report: {}", result.report_url(api));
        }
        println!("{rule}");
    }

    pub fn table(rows: &[Arc<AnalysisResult>], sort: &SortState, current: Option<&str>) -> String {
        let mut table = String::from("📋 Previous Analyses\n   History of document safety assessments\n\n");

        if rows.is_empty() {
            table.push_str("   No analyses yet\n   Upload your first document to get started.");
            return table;
        }

        let header = |title: &str, field: SortField| {
            if sort.field == field {
                format!("{title} {}", sort.direction.arrow())
            } else {
                title.to_string()
            }
        };

        table.push_str(&format!(
            "  {:>3}  {}{}{}{}\n",
            "#",
            DisplayHelper::pad(&header("Document", SortField::Filename), FILENAME_COLUMN),
            DisplayHelper::pad(&header("Date", SortField::UploadDate), DATE_COLUMN),
            DisplayHelper::pad(&header("Risk Score", SortField::RiskScore), SCORE_COLUMN),
            "Actions",
        ));

        for (i, row) in rows.iter().enumerate() {
            let level = row.risk_level();
            let marker = if current == Some(row.id.as_str()) { "▶" } else { " " };
            let score = format!("{}{}{RESET}", level.ansi_color(), row.risk_score);
            let actions = if row.has_report() { "View  PDF" } else { "View" };

            table.push_str(&format!(
                "{marker} {:>3}  {}{}{}{}\n",
                i + 1,
                DisplayHelper::pad(&DisplayHelper::truncate(&row.filename, FILENAME_COLUMN - 2), FILENAME_COLUMN),
                DisplayHelper::pad(&DisplayHelper::format_date(&row.upload_date), DATE_COLUMN),
                DisplayHelper::pad(&score, SCORE_COLUMN),
                actions,
            ));
        }

        table.trim_end().to_string()
    }

    pub fn print_table(rows: &[Arc<AnalysisResult>], sort: &SortState, current: Option<&str>) {
        println!("\n{}", Self::table(rows, sort, current));
    }
}
