use std::time::Duration;
use serde::{Deserialize, Serialize};
use crate::config::constants::tick_duration;
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    #[serde(default = "ConfigHelper::default_animate_score")]
    pub animate_score: bool,

    #[serde(default = "ConfigHelper::default_score_tick_ms")]
    pub score_tick_ms: u64,

    #[serde(default = "ConfigHelper::default_highlight_keywords")]
    pub highlight_keywords: Vec<String>,
}

impl DisplayConfig {
    /// Interval between score frames, or `None` when the score is drawn at once.
    pub const fn score_tick(&self) -> Option<Duration> {
        if self.animate_score && self.score_tick_ms > 0 {
            Some(tick_duration(self.score_tick_ms))
        } else {
            None
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            animate_score: ConfigHelper::default_animate_score(),
            score_tick_ms: ConfigHelper::default_score_tick_ms(),
            highlight_keywords: ConfigHelper::default_highlight_keywords(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_tick_draws_without_animation() {
        let display = DisplayConfig {
            score_tick_ms: 0,
            ..DisplayConfig::default()
        };
        assert_eq!(display.score_tick(), None);
    }

    #[test]
    fn animation_can_be_switched_off() {
        let mut display = DisplayConfig::default();
        assert_eq!(display.score_tick(), Some(Duration::from_millis(20)));
        display.animate_score = false;
        assert_eq!(display.score_tick(), None);
    }
}
