//! Game configuration

use crate::game::GameMode;

/// Attempts per game
pub const DEFAULT_MAX_ATTEMPTS: u32 = 8;

/// Starting blur radius of the fighter image, in pixels
pub const DEFAULT_INITIAL_BLUR: u32 = 14;

/// Organization tag the roster is filtered to
pub const DEFAULT_ORGANIZATION: &str = "ufc";

/// Settings for one game session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub max_attempts: u32,
    pub initial_blur: u32,
    pub organization: String,
    pub mode: GameMode,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            initial_blur: DEFAULT_INITIAL_BLUR,
            organization: DEFAULT_ORGANIZATION.to_string(),
            mode: GameMode::default(),
        }
    }
}

impl GameConfig {
    /// Blur removed per missed guess: `ceil(initial_blur / max_attempts)`
    ///
    /// # Examples
    /// ```
    /// use fighterdle::config::GameConfig;
    ///
    /// let config = GameConfig { max_attempts: 8, initial_blur: 12, ..GameConfig::default() };
    /// assert_eq!(config.blur_step(), 2);
    /// ```
    #[must_use]
    pub const fn blur_step(&self) -> u32 {
        self.initial_blur.div_ceil(self.attempt_cap())
    }

    /// Attempt cap, never below one
    #[must_use]
    pub const fn attempt_cap(&self) -> u32 {
        if self.max_attempts == 0 {
            1
        } else {
            self.max_attempts
        }
    }
}
