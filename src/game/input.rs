//! Logical input actions and the fixed key bindings for each phase.

use bevy::prelude::*;

use super::{Direction, GamePhase};

/// A logical action produced by the input source.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum InputAction {
    Move(Direction),
    Confirm,
    Pause,
    Resume,
    ShowHighScores,
    ReturnToMenu,
    Quit,
}

impl InputAction {
    /// Maps a pressed key to the action it stands for in `phase`, if any.
    pub fn from_key(phase: GamePhase, key: KeyCode) -> Option<InputAction> {
        match phase {
            GamePhase::Menu => match key {
                KeyCode::Space | KeyCode::Enter => Some(InputAction::Confirm),
                KeyCode::KeyH => Some(InputAction::ShowHighScores),
                KeyCode::Escape | KeyCode::KeyQ => Some(InputAction::Quit),
                _ => None,
            },
            GamePhase::HighScores => match key {
                KeyCode::Escape | KeyCode::Space | KeyCode::Enter | KeyCode::KeyH => {
                    Some(InputAction::ReturnToMenu)
                }
                _ => None,
            },
            GamePhase::Playing => match key {
                KeyCode::Escape | KeyCode::KeyP => Some(InputAction::Pause),
                _ => direction_for(key).map(InputAction::Move),
            },
            GamePhase::Paused => match key {
                KeyCode::Escape | KeyCode::KeyP => Some(InputAction::Resume),
                KeyCode::KeyQ => Some(InputAction::ReturnToMenu),
                _ => None,
            },
            GamePhase::GameOver => match key {
                KeyCode::Space | KeyCode::Enter => Some(InputAction::Confirm),
                KeyCode::Escape => Some(InputAction::ReturnToMenu),
                _ => None,
            },
        }
    }
}

fn direction_for(key: KeyCode) -> Option<Direction> {
    match key {
        KeyCode::ArrowLeft | KeyCode::KeyA => Some(Direction::Left),
        KeyCode::ArrowRight | KeyCode::KeyD => Some(Direction::Right),
        KeyCode::ArrowUp | KeyCode::KeyW => Some(Direction::Up),
        KeyCode::ArrowDown | KeyCode::KeyS => Some(Direction::Down),
        _ => None,
    }
}

/// Keys pressed since the last simulation tick, oldest first.
#[derive(Resource, Default)]
pub struct InputBuffer {
    queued_keys: Vec<KeyCode>,
}

impl InputBuffer {
    pub fn queue_key(&mut self, key: KeyCode) {
        self.queued_keys.push(key);
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, KeyCode> {
        self.queued_keys.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.queued_keys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_depends_on_the_phase() {
        let esc = KeyCode::Escape;
        assert_eq!(InputAction::from_key(GamePhase::Menu, esc), Some(InputAction::Quit));
        assert_eq!(InputAction::from_key(GamePhase::Playing, esc), Some(InputAction::Pause));
        assert_eq!(InputAction::from_key(GamePhase::Paused, esc), Some(InputAction::Resume));
        assert_eq!(
            InputAction::from_key(GamePhase::GameOver, esc),
            Some(InputAction::ReturnToMenu)
        );
    }

    #[test]
    fn movement_keys_only_steer_while_playing() {
        assert_eq!(
            InputAction::from_key(GamePhase::Playing, KeyCode::KeyW),
            Some(InputAction::Move(Direction::Up))
        );
        assert_eq!(
            InputAction::from_key(GamePhase::Playing, KeyCode::ArrowLeft),
            Some(InputAction::Move(Direction::Left))
        );
        assert_eq!(InputAction::from_key(GamePhase::Menu, KeyCode::KeyW), None);
        assert_eq!(InputAction::from_key(GamePhase::Paused, KeyCode::ArrowUp), None);
    }

    #[test]
    fn buffer_drains_in_order() {
        let mut buffer = InputBuffer::default();
        buffer.queue_key(KeyCode::KeyW);
        buffer.queue_key(KeyCode::KeyA);
        let keys: Vec<KeyCode> = buffer.drain().collect();
        assert_eq!(keys, [KeyCode::KeyW, KeyCode::KeyA]);
        assert!(buffer.is_empty());
    }
}
