use std::fmt;

/// Board width in world units.
pub const WIDTH: i32 = 1600;

/// Board height in world units.
pub const HEIGHT: i32 = 1200;

/// Edge length of one cell in world units.
pub const BLOCK_SIZE: i32 = 80;

/// Points granted for every food eaten.
pub const FOOD_AWARD: u32 = 325;

/// Score that ends a round as a win.
pub const SUCCESS_SCORE: u32 = 1000;

/// Number of cells the snake occupies when a round starts.
pub const INITIAL_SNAKE_LENGTH: usize = 5;

/// Maximum number of cutscene passes before the overlay closes itself.
pub const OVERLAY_MAX_LOOPS: u32 = 32;

/// Frames in one pass of the terminal cutscene clip.
pub const OVERLAY_CLIP_FRAMES: usize = 48;

/// Frame duration of the terminal cutscene clip in milliseconds.
pub const OVERLAY_FRAME_MS: u64 = 40;

/// Tick interval used by menu screens that have no movement cadence.
pub const MENU_TICK_INTERVAL_MS: u64 = 50;

/// Difficulty tiers in ascending order.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All tiers, indexed by progression index.
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Highest valid progression index.
    pub const MAX_INDEX: usize = Self::ALL.len() - 1;

    /// Returns the tier at `index`, or `None` when out of range.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Easy => 0,
            Self::Medium => 1,
            Self::Hard => 2,
        }
    }

    /// Movement ticks per second before cycle bonuses.
    #[must_use]
    pub fn base_speed(self) -> u32 {
        match self {
            Self::Easy => 8,
            Self::Medium => 12,
            Self::Hard => 16,
        }
    }

    /// Round time limit in whole seconds.
    #[must_use]
    pub fn time_limit_secs(self) -> u64 {
        match self {
            Self::Easy => 60,
            Self::Medium => 45,
            Self::Hard => 35,
        }
    }

    #[must_use]
    pub fn time_limit_ms(self) -> u64 {
        self.time_limit_secs() * 1000
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Easy => "EASY",
            Self::Medium => "MEDIUM",
            Self::Hard => "HARD",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::Difficulty;

    #[test]
    fn tiers_are_ordered_and_indexed() {
        assert!(Difficulty::Easy < Difficulty::Medium);
        assert!(Difficulty::Medium < Difficulty::Hard);

        for (index, difficulty) in Difficulty::ALL.iter().enumerate() {
            assert_eq!(difficulty.index(), index);
            assert_eq!(Difficulty::from_index(index), Some(*difficulty));
        }
        assert_eq!(Difficulty::from_index(3), None);
    }

    #[test]
    fn tier_constants_match_game_rules() {
        assert_eq!(Difficulty::Easy.base_speed(), 8);
        assert_eq!(Difficulty::Medium.base_speed(), 12);
        assert_eq!(Difficulty::Hard.base_speed(), 16);

        assert_eq!(Difficulty::Easy.time_limit_ms(), 60_000);
        assert_eq!(Difficulty::Medium.time_limit_ms(), 45_000);
        assert_eq!(Difficulty::Hard.time_limit_ms(), 35_000);
    }
}
