//! Board value types and the ECS marker components used by the UI.

use bevy::prelude::*;

use super::{CELL_SIZE, GAME_HEIGHT, GAME_WIDTH};

/// A cell on the board, stored as the pixel coordinate of its top-left corner.
///
/// Coordinates are always multiples of [`CELL_SIZE`]; `y` grows downwards.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    /// Position of the cell at grid column `column` and row `row`.
    pub const fn from_cell(column: i32, row: i32) -> Self {
        Position {
            x: column * CELL_SIZE,
            y: row * CELL_SIZE,
        }
    }

    /// Check if this position collides with another position.
    pub fn collides_with(&self, other: &Position) -> bool {
        self.x == other.x && self.y == other.y
    }

    /// Returns the neighbouring cell one step in `direction`.
    pub fn step(self, direction: Direction) -> Position {
        let (dx, dy) = direction.delta();
        Position {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// True while the position lies inside `[0, GAME_WIDTH) x [0, GAME_HEIGHT)`.
    pub fn in_bounds(&self) -> bool {
        (0..GAME_WIDTH).contains(&self.x) && (0..GAME_HEIGHT).contains(&self.y)
    }

    /// Center of the cell in continuous board coordinates.
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.x + CELL_SIZE / 2) as f32,
            (self.y + CELL_SIZE / 2) as f32,
        )
    }
}

/// Direction enum for snake movement.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Returns the opposite direction.
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// One cell of movement in board pixels.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Left => (-CELL_SIZE, 0),
            Direction::Right => (CELL_SIZE, 0),
            Direction::Up => (0, -CELL_SIZE),
            Direction::Down => (0, CELL_SIZE),
        }
    }
}

/// Kind of the food currently on the board.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum FoodKind {
    #[default]
    Normal,
    Special,
}

/// Component to mark the sidebar stats text.
#[derive(Component)]
pub struct StatsText;

/// Component to mark the full-screen overlay used by menu, pause and game over.
#[derive(Component)]
pub struct OverlayUI;

/// Component to mark the overlay headline.
#[derive(Component)]
pub struct OverlayTitle;

/// Component to mark the overlay body text.
#[derive(Component)]
pub struct OverlayBody;
