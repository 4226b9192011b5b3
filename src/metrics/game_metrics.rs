use std::time::{Duration, Instant};

use crate::game::TickOutcome;

/// Session-wide counters shown next to the score
pub struct SessionMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub crashes: u32,
    pub food_eaten: u32,
}

impl SessionMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            crashes: 0,
            food_eaten: 0,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.start_time.elapsed();
    }

    pub fn on_tick(&mut self, outcome: &TickOutcome) {
        if outcome.collision.is_some() {
            self.crashes += 1;
        }
        if outcome.ate_food {
            self.food_eaten += 1;
        }
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for SessionMetrics {
    fn default() -> Self {
        Self::new()
    }
}
