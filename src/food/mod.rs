//! Food placement and the special-food cadence.

use std::collections::HashSet;
use std::f32::consts::TAU;

use bevy::log::{debug, warn};
use rand::prelude::*;

use crate::game::{
    FOOD_PULSE_STEP, FoodKind, GRID_COLUMNS, GRID_ROWS, MAX_SPAWN_ATTEMPTS, Position,
    SPECIAL_FOOD_CADENCE, SPECIAL_FOOD_CHANCE,
};

/// Picks a random free cell, or `None` when every cell is occupied.
///
/// Cells are sampled uniformly until a free one turns up. After
/// [`MAX_SPAWN_ATTEMPTS`] misses the grid is scanned and one of the remaining
/// free cells is chosen uniformly instead.
pub fn spawn_position<R: Rng>(
    rng: &mut R,
    occupied: &HashSet<Position>,
) -> Option<Position> {
    for _ in 0..MAX_SPAWN_ATTEMPTS {
        let position = Position::from_cell(
            rng.random_range(0..GRID_COLUMNS),
            rng.random_range(0..GRID_ROWS),
        );
        if !occupied.contains(&position) {
            return Some(position);
        }
    }

    debug!(
        "food sampling missed {} times, scanning for free cells",
        MAX_SPAWN_ATTEMPTS
    );
    let free: Vec<Position> = (0..GRID_ROWS)
        .flat_map(|row| (0..GRID_COLUMNS).map(move |column| Position::from_cell(column, row)))
        .filter(|position| !occupied.contains(position))
        .collect();
    let choice = free.choose(rng).copied();
    if choice.is_none() {
        warn!("no free cell left for food");
    }
    choice
}

/// The single piece of food on the board plus its timers.
#[derive(Clone, Debug)]
pub struct Food {
    pub position: Position,
    pub kind: FoodKind,
    cadence: u32,
    pulse: f32,
}

impl Food {
    pub fn new(position: Position) -> Self {
        Food {
            position,
            kind: FoodKind::Normal,
            cadence: 0,
            pulse: 0.0,
        }
    }

    /// Pulse animation phase in `[0, TAU)`.
    pub fn pulse(&self) -> f32 {
        self.pulse
    }

    /// Ticks since the kind was last re-rolled or the food was eaten.
    pub fn cadence(&self) -> u32 {
        self.cadence
    }

    /// Advances the timers by one tick.
    ///
    /// Once the cadence counter passes [`SPECIAL_FOOD_CADENCE`] the kind is
    /// re-rolled, becoming special with [`SPECIAL_FOOD_CHANCE`], and the counter
    /// restarts from 0. Rolls therefore land every `SPECIAL_FOOD_CADENCE + 1`
    /// ticks. A special food that is not eaten in time may turn back into a
    /// normal one.
    pub fn tick<R: Rng>(&mut self, rng: &mut R) {
        self.cadence += 1;
        if self.cadence > SPECIAL_FOOD_CADENCE {
            self.cadence = 0;
            self.kind = if rng.random_bool(SPECIAL_FOOD_CHANCE) {
                FoodKind::Special
            } else {
                FoodKind::Normal
            };
            debug!("food re-rolled to {:?}", self.kind);
        }
        self.pulse = (self.pulse + FOOD_PULSE_STEP) % TAU;
    }

    /// Moves the food after it was eaten; it always comes back as normal food.
    pub fn respawn(&mut self, position: Position) {
        self.position = position;
        self.kind = FoodKind::Normal;
        self.cadence = 0;
    }
}
