use chrono::{DateTime, Local, Utc};
use terminal_size::{terminal_size, Width};
use crate::config::constants::{MAX_RISK_SCORE, SCORE_BAR_WIDTH};

const FALLBACK_WIDTH: usize = 80;
const MAX_WIDTH: usize = 120;

pub struct DisplayHelper;

impl DisplayHelper {
    /// Terminal width, capped so panels stay readable on wide screens.
    pub fn width() -> usize {
        terminal_size()
            .map_or(FALLBACK_WIDTH, |(Width(w), _)| usize::from(w))
            .min(MAX_WIDTH)
    }

    pub fn rule(ch: char) -> String {
        ch.to_string().repeat(Self::width())
    }

    /// e.g. `Mar 1, 2025, 09:30 AM` in the local time zone
    pub fn format_date(date: &DateTime<Utc>) -> String {
        date.with_timezone(&Local).format("%b %-d, %Y, %I:%M %p").to_string()
    }

    pub fn score_bar(score: u8) -> String {
        let score = usize::from(score.min(MAX_RISK_SCORE));
        let filled = (score * SCORE_BAR_WIDTH + usize::from(MAX_RISK_SCORE) / 2) / usize::from(MAX_RISK_SCORE);
        format!("{}{}", "█".repeat(filled), "░".repeat(SCORE_BAR_WIDTH - filled))
    }

    /// Cuts `text` to `max` characters, marking the cut with an ellipsis.
    pub fn truncate(text: &str, max: usize) -> String {
        if text.chars().count() <= max {
            return text.to_string();
        }
        let kept: String = text.chars().take(max.saturating_sub(1)).collect();
        format!("{kept}…")
    }

    /// Pads to `width` characters, ignoring ANSI escapes in the count.
    pub fn pad(text: &str, width: usize) -> String {
        let visible = Self::visible_len(text);
        format!("{text}{}", " ".repeat(width.saturating_sub(visible)))
    }

    pub fn visible_len(text: &str) -> usize {
        let mut count = 0;
        let mut in_escape = false;
        for c in text.chars() {
            if in_escape {
                if c == 'm' {
                    in_escape = false;
                }
            } else if c == '\x1b' {
                in_escape = true;
            } else {
                count += 1;
            }
        }
        count
    }
}
