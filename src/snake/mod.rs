//! Snake simulation - body, steering, movement, collision and growth rules.

use std::collections::VecDeque;

use bevy::log::debug;

use crate::game::{Direction, GAME_HEIGHT, GAME_WIDTH, Position};

/// Result of a single movement step.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MoveOutcome {
    Moved,
    AteFood,
    Collided(Collision),
}

/// What the head ran into.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Collision {
    Wall,
    SelfHit,
}

/// The player's snake. The body is stored head-first.
#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Position>,
    direction: Direction,
    next_direction: Direction,
    grow_pending: u32,
}

impl Snake {
    pub fn new(head: Position, direction: Direction) -> Self {
        Snake {
            body: VecDeque::from([head]),
            direction,
            next_direction: direction,
            grow_pending: 0,
        }
    }

    /// A one-cell snake in the middle of the board heading right.
    pub fn centered() -> Self {
        Snake::new(Position::new(GAME_WIDTH / 2, GAME_HEIGHT / 2), Direction::Right)
    }

    pub fn head(&self) -> Position {
        // The body never becomes empty: a step either keeps or replaces the tail.
        self.body[0]
    }

    pub fn body(&self) -> impl ExactSizeIterator<Item = &Position> + '_ {
        self.body.iter()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn occupies(&self, position: &Position) -> bool {
        self.body.iter().any(|cell| cell.collides_with(position))
    }

    /// Direction of the last completed move.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Direction the next step will use.
    pub fn heading(&self) -> Direction {
        self.next_direction
    }

    pub fn grow_pending(&self) -> u32 {
        self.grow_pending
    }

    pub fn add_growth(&mut self, units: u32) {
        self.grow_pending += units;
    }

    /// Requests a turn for the next step. Reversals are ignored.
    ///
    /// The check runs against the last completed move, so two quick turns
    /// inside one movement interval can never fold the head back onto the neck.
    pub fn steer(&mut self, direction: Direction) -> bool {
        if direction == self.direction.opposite() {
            debug!("ignoring reversal to {:?}", direction);
            return false;
        }
        self.next_direction = direction;
        true
    }

    /// Advances the snake by one cell.
    ///
    /// Collisions are detected against the pre-move body and leave the snake
    /// untouched. Landing on `food` keeps the tail for this step; otherwise one
    /// unit of pending growth is consumed or the tail is dropped.
    pub fn try_advance(&mut self, food: Position) -> MoveOutcome {
        let direction = self.next_direction;
        let new_head = self.head().step(direction);

        if !new_head.in_bounds() {
            return MoveOutcome::Collided(Collision::Wall);
        }
        if self.occupies(&new_head) {
            return MoveOutcome::Collided(Collision::SelfHit);
        }

        self.direction = direction;
        self.body.push_front(new_head);

        if new_head.collides_with(&food) {
            return MoveOutcome::AteFood;
        }

        if self.grow_pending > 0 {
            self.grow_pending -= 1;
        } else {
            self.body.pop_back();
        }
        MoveOutcome::Moved
    }
}
