use crate::config::Difficulty;

/// Difficulty advancement across the rounds of one play session.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct ProgressionTracker {
    difficulty_index: usize,
    completed_cycles: u32,
    effective_speed: u32,
}

impl Default for ProgressionTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressionTracker {
    #[must_use]
    pub fn new() -> Self {
        let mut tracker = Self {
            difficulty_index: 0,
            completed_cycles: 0,
            effective_speed: 0,
        };
        tracker.recompute_speed();
        tracker
    }

    #[must_use]
    pub fn difficulty_index(&self) -> usize {
        self.difficulty_index
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        Difficulty::ALL[self.difficulty_index]
    }

    #[must_use]
    pub fn completed_cycles(&self) -> u32 {
        self.completed_cycles
    }

    /// Movement ticks per second for the next round.
    #[must_use]
    pub fn effective_speed(&self) -> u32 {
        self.effective_speed
    }

    /// Jumps to an explicitly chosen tier, keeping completed cycles.
    pub fn select(&mut self, difficulty: Difficulty) {
        self.difficulty_index = difficulty.index();
        self.recompute_speed();
    }

    /// Moves to the next tier, wrapping into a new cycle after the last one.
    pub fn on_win(&mut self) {
        if self.difficulty_index < Difficulty::MAX_INDEX {
            self.difficulty_index += 1;
        } else {
            self.difficulty_index = 0;
            self.completed_cycles += 1;
        }
        self.recompute_speed();
    }

    /// Drops back to the first tier with no cycle bonus.
    pub fn on_loss(&mut self) {
        self.difficulty_index = 0;
        self.completed_cycles = 0;
        self.recompute_speed();
    }

    fn recompute_speed(&mut self) {
        self.effective_speed = self.difficulty().base_speed() + self.completed_cycles;
    }
}

#[cfg(test)]
mod tests {
    use crate::config::Difficulty;

    use super::ProgressionTracker;

    #[test]
    fn starts_at_easy_base_speed() {
        let tracker = ProgressionTracker::new();

        assert_eq!(tracker.difficulty(), Difficulty::Easy);
        assert_eq!(tracker.completed_cycles(), 0);
        assert_eq!(tracker.effective_speed(), 8);
    }

    #[test]
    fn wins_climb_tiers_then_wrap_into_a_cycle() {
        let mut tracker = ProgressionTracker::new();

        tracker.on_win();
        assert_eq!(tracker.difficulty(), Difficulty::Medium);
        assert_eq!(tracker.effective_speed(), 12);

        tracker.on_win();
        assert_eq!(tracker.difficulty(), Difficulty::Hard);
        assert_eq!(tracker.effective_speed(), 16);

        tracker.on_win();
        assert_eq!(tracker.difficulty_index(), 0);
        assert_eq!(tracker.completed_cycles(), 1);
        assert_eq!(tracker.effective_speed(), 9);

        tracker.on_win();
        assert_eq!(tracker.effective_speed(), 13);
    }

    #[test]
    fn loss_resets_index_and_cycles() {
        let mut tracker = ProgressionTracker::new();
        for _ in 0..5 {
            tracker.on_win();
        }
        assert_eq!(tracker.completed_cycles(), 1);

        tracker.on_loss();

        assert_eq!(tracker.difficulty_index(), 0);
        assert_eq!(tracker.completed_cycles(), 0);
        assert_eq!(tracker.effective_speed(), 8);
    }

    #[test]
    fn select_keeps_cycle_bonus() {
        let mut tracker = ProgressionTracker::new();
        for _ in 0..3 {
            tracker.on_win();
        }

        tracker.select(Difficulty::Hard);

        assert_eq!(tracker.difficulty_index(), 2);
        assert_eq!(tracker.effective_speed(), 17);
    }
}
