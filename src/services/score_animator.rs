use std::time::Duration;
use crate::config::constants::MAX_RISK_SCORE;

/// Counter shown in the risk panel. Moves one unit per tick toward the
/// target score and stops once it gets there. Only the displayed value
/// changes; the analysis keeps its own score.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScoreAnimator {
    displayed: u8,
    target: u8,
}

impl ScoreAnimator {
    pub fn new(target: u8) -> Self {
        Self::starting_at(0, target)
    }

    pub fn starting_at(displayed: u8, target: u8) -> Self {
        Self {
            displayed: displayed.min(MAX_RISK_SCORE),
            target: target.min(MAX_RISK_SCORE),
        }
    }

    /// Retargets the animation from whatever is displayed right now.
    pub fn retarget(&mut self, target: u8) {
        self.target = target.min(MAX_RISK_SCORE);
    }

    /// Jumps straight to the target.
    pub fn settle(&mut self) {
        self.displayed = self.target;
    }

    pub const fn displayed(&self) -> u8 {
        self.displayed
    }

    pub const fn target(&self) -> u8 {
        self.target
    }

    pub const fn is_settled(&self) -> bool {
        self.displayed == self.target
    }

    /// Advances by one unit. Returns `false` once there is nothing left to do.
    pub fn tick(&mut self) -> bool {
        if self.displayed < self.target {
            self.displayed += 1;
            true
        } else if self.displayed > self.target {
            self.displayed -= 1;
            true
        } else {
            false
        }
    }

    pub fn remaining_ticks(&self) -> u8 {
        self.displayed.abs_diff(self.target)
    }

    /// Runs the animation on a tokio interval, handing every displayed value
    /// to `render`. A zero `tick` renders the target once.
    pub async fn run<F>(&mut self, tick: Duration, mut render: F)
    where
        F: FnMut(u8),
    {
        if tick.is_zero() {
            self.settle();
        }

        render(self.displayed);
        if self.is_settled() {
            return;
        }

        let mut interval = tokio::time::interval(tick);
        interval.tick().await;

        while self.tick() {
            interval.tick().await;
            render(self.displayed);
        }
    }
}

impl Iterator for ScoreAnimator {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        self.tick().then_some(self.displayed)
    }
}
