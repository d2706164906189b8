use serde::{Deserialize, Serialize};

use super::bot_controller::Difficulty;
use super::types::BoardSize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSettings {
    pub difficulty: Difficulty,
    pub sound_enabled: bool,
    pub color_enabled: bool,
    pub board_size: BoardSize,
}

impl GameSettings {
    pub fn cycle_difficulty(&mut self) {
        self.difficulty = self.difficulty.next();
    }

    pub fn toggle_sound(&mut self) {
        self.sound_enabled = !self.sound_enabled;
    }

    pub fn toggle_color(&mut self) {
        self.color_enabled = !self.color_enabled;
    }

    pub fn cycle_board_size(&mut self) {
        self.board_size = self.board_size.next();
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Medium,
            sound_enabled: true,
            color_enabled: true,
            board_size: BoardSize::Small,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = GameSettings::default();
        assert_eq!(settings.difficulty, Difficulty::Medium);
        assert!(settings.sound_enabled);
        assert!(settings.color_enabled);
        assert_eq!(settings.board_size, BoardSize::Small);
    }

    #[test]
    fn test_cycling_returns_to_start() {
        let mut settings = GameSettings::default();
        for _ in 0..3 {
            settings.cycle_difficulty();
            settings.cycle_board_size();
        }
        assert_eq!(settings, GameSettings::default());

        settings.cycle_board_size();
        assert_eq!(settings.board_size, BoardSize::Medium);
    }

    #[test]
    fn test_toggles() {
        let mut settings = GameSettings::default();
        settings.toggle_sound();
        settings.toggle_color();
        assert!(!settings.sound_enabled);
        assert!(!settings.color_enabled);
        settings.toggle_sound();
        assert!(settings.sound_enabled);
    }
}
