//! Game events (messages).

use bevy::prelude::*;

use super::{FoodKind, GamePhase, Position};

/// Why a run came to an end.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RunEndCause {
    Wall,
    SelfCollision,
    BoardFull,
}

/// Message emitted by the session for every notable gameplay change.
#[derive(Message, Clone, PartialEq, Debug)]
pub enum GameEvent {
    RunStarted,
    FoodEaten {
        position: Position,
        kind: FoodKind,
        points: u32,
    },
    LevelUp {
        level: u32,
        speed: u32,
    },
    NewHighScore {
        score: u32,
    },
    RunEnded {
        score: u32,
        cause: RunEndCause,
    },
    PhaseChanged {
        from: GamePhase,
        to: GamePhase,
    },
}
