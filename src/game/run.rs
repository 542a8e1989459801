//! Per-run mutable state: snake, food, progress, effects and run timers.

use std::collections::HashSet;

use bevy::log::debug;
use rand::prelude::*;

use super::{
    DEATH_RED, FoodKind, GOLD, NEON_GREEN, Position, RunEndCause, SCREEN_SHAKE_TICKS,
};
use crate::food::{Food, spawn_position};
use crate::particles::{DEATH_BURST, FOOD_BURST, ParticleSystem, Trail};
use crate::score::{FoodReward, MoveScheduler, Progress};
use crate::snake::{Collision, MoveOutcome, Snake};

/// What happened during one simulation tick of a live run.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TickOutcome {
    /// No movement step was due.
    Idle,
    Moved,
    Ate {
        position: Position,
        kind: FoodKind,
        reward: FoodReward,
    },
    Ended(RunEndCause),
}

/// Everything that is reset when a new run starts.
#[derive(Clone, Debug)]
pub struct RunState {
    pub snake: Snake,
    pub food: Food,
    pub progress: Progress,
    pub particles: ParticleSystem,
    pub trail: Trail,
    scheduler: MoveScheduler,
    screen_shake: u32,
    ticks: u64,
}

impl RunState {
    /// Builds a fresh run with a centered snake and one piece of normal food.
    ///
    /// Returns `None` only if there is no room for food, which a fresh
    /// one-cell snake cannot cause.
    pub fn new<R: Rng>(rng: &mut R) -> Option<Self> {
        Self::with_snake(rng, Snake::centered())
    }

    pub fn with_snake<R: Rng>(rng: &mut R, snake: Snake) -> Option<Self> {
        let food = Food::new(spawn_position(rng, &occupied_by(&snake))?);
        Some(RunState {
            snake,
            food,
            progress: Progress::default(),
            particles: ParticleSystem::default(),
            trail: Trail::default(),
            scheduler: MoveScheduler::default(),
            screen_shake: 0,
            ticks: 0,
        })
    }

    /// Remaining screen-shake ticks.
    pub fn screen_shake(&self) -> u32 {
        self.screen_shake
    }

    /// Simulation ticks played in this run.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// One tick while playing: a movement step if one is due, then the food
    /// timers and the cosmetic effects.
    pub fn tick<R: Rng>(&mut self, rng: &mut R) -> TickOutcome {
        self.ticks += 1;

        let mut outcome = TickOutcome::Idle;
        if self.scheduler.tick(self.progress.speed()) {
            outcome = self.step(rng);
            if let TickOutcome::Ended(_) = outcome {
                return outcome;
            }
        }

        self.food.tick(rng);
        self.tick_effects();
        outcome
    }

    /// One tick after the run has ended: the death burst keeps animating.
    pub fn tick_effects(&mut self) {
        self.particles.tick();
        self.trail.tick();
        self.screen_shake = self.screen_shake.saturating_sub(1);
    }

    /// Sets off the death burst and the screen shake.
    pub fn crash<R: Rng>(&mut self, rng: &mut R) {
        self.screen_shake = SCREEN_SHAKE_TICKS;
        self.particles
            .spawn_burst(rng, self.snake.head().center(), DEATH_RED, &DEATH_BURST);
    }

    fn step<R: Rng>(&mut self, rng: &mut R) -> TickOutcome {
        let previous_head = self.snake.head();
        self.trail.push(previous_head);

        match self.snake.try_advance(self.food.position) {
            MoveOutcome::Moved => TickOutcome::Moved,
            MoveOutcome::Collided(Collision::Wall) => TickOutcome::Ended(RunEndCause::Wall),
            MoveOutcome::Collided(Collision::SelfHit) => {
                TickOutcome::Ended(RunEndCause::SelfCollision)
            }
            MoveOutcome::AteFood => self.eat(rng),
        }
    }

    fn eat<R: Rng>(&mut self, rng: &mut R) -> TickOutcome {
        let position = self.food.position;
        let kind = self.food.kind;
        let reward = self.progress.on_food_eaten(kind);
        self.snake.add_growth(reward.growth);

        let color = match kind {
            FoodKind::Special => GOLD,
            FoodKind::Normal => NEON_GREEN,
        };
        self.particles
            .spawn_burst(rng, position.center(), color, &FOOD_BURST);
        debug!(
            "ate {:?} food at ({}, {}), score {}",
            kind,
            position.x,
            position.y,
            self.progress.score()
        );

        match spawn_position(rng, &occupied_by(&self.snake)) {
            Some(next) => {
                self.food.respawn(next);
                TickOutcome::Ate {
                    position,
                    kind,
                    reward,
                }
            }
            None => TickOutcome::Ended(RunEndCause::BoardFull),
        }
    }
}

fn occupied_by(snake: &Snake) -> HashSet<Position> {
    snake.body().copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Direction;
    use rand::rngs::StdRng;

    fn run_with_food_at(rng: &mut StdRng, food: Position) -> RunState {
        let mut run = RunState::new(rng).unwrap();
        run.food.respawn(food);
        run
    }

    /// Ticks until a movement step happens and returns its outcome.
    fn next_step(run: &mut RunState, rng: &mut StdRng) -> TickOutcome {
        loop {
            let outcome = run.tick(rng);
            if outcome != TickOutcome::Idle {
                return outcome;
            }
        }
    }

    #[test]
    fn fresh_run_starts_centered() {
        let mut rng = StdRng::seed_from_u64(1);
        let run = RunState::new(&mut rng).unwrap();
        assert_eq!(run.snake.head(), Position::new(400, 300));
        assert_eq!(run.snake.len(), 1);
        assert_eq!(run.progress.score(), 0);
        assert_eq!(run.food.kind, FoodKind::Normal);
        assert_ne!(run.food.position, run.snake.head());
        assert!(run.particles.is_empty());
        assert!(run.trail.is_empty());
    }

    #[test]
    fn snake_moves_every_fourth_tick_at_base_speed() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut run = run_with_food_at(&mut rng, Position::new(0, 0));
        let outcomes: Vec<TickOutcome> = (0..4).map(|_| run.tick(&mut rng)).collect();
        assert_eq!(
            outcomes,
            [
                TickOutcome::Idle,
                TickOutcome::Idle,
                TickOutcome::Idle,
                TickOutcome::Moved
            ]
        );
        assert_eq!(run.snake.head(), Position::new(420, 300));
        assert_eq!(run.trail.len(), 1);
    }

    #[test]
    fn eating_normal_food_scores_and_grows() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut run = run_with_food_at(&mut rng, Position::new(420, 300));

        let outcome = next_step(&mut run, &mut rng);
        assert!(matches!(
            outcome,
            TickOutcome::Ate {
                kind: FoodKind::Normal,
                ..
            }
        ));
        assert_eq!(run.progress.score(), 10);
        assert_eq!(run.snake.grow_pending(), 1);
        assert_eq!(run.snake.len(), 2);
        assert_eq!(run.particles.len(), 15);
        assert!(!run.snake.occupies(&run.food.position));

        run.food.respawn(Position::new(0, 0));
        assert_eq!(next_step(&mut run, &mut rng), TickOutcome::Moved);
        assert_eq!(run.snake.len(), 3);
        assert_eq!(run.snake.grow_pending(), 0);
    }

    #[test]
    fn special_food_is_worth_more() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut run = run_with_food_at(&mut rng, Position::new(420, 300));
        run.food.kind = FoodKind::Special;

        next_step(&mut run, &mut rng);
        assert_eq!(run.progress.score(), 50);
        assert_eq!(run.snake.grow_pending(), 3);
        assert_eq!(run.food.kind, FoodKind::Normal);
    }

    #[test]
    fn wall_hit_ends_the_run_without_moving() {
        let mut rng = StdRng::seed_from_u64(9);
        let snake = Snake::new(Position::new(780, 300), Direction::Right);
        let mut run = RunState::with_snake(&mut rng, snake).unwrap();
        run.food.respawn(Position::new(0, 0));

        assert_eq!(
            next_step(&mut run, &mut rng),
            TickOutcome::Ended(RunEndCause::Wall)
        );
        assert_eq!(run.snake.head(), Position::new(780, 300));

        run.crash(&mut rng);
        assert_eq!(run.screen_shake(), 20);
        assert_eq!(run.particles.len(), 30);
    }

    #[test]
    fn effects_wind_down_after_a_crash() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut run = RunState::new(&mut rng).unwrap();
        run.crash(&mut rng);
        for _ in 0..20 {
            run.tick_effects();
        }
        assert_eq!(run.screen_shake(), 0);
        assert_eq!(run.particles.len(), 30);
        for _ in 0..100 {
            run.tick_effects();
        }
        assert!(run.particles.is_empty());
    }

    #[test]
    fn speed_up_shortens_the_move_interval() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut run = run_with_food_at(&mut rng, Position::new(0, 0));
        for _ in 0..2 {
            run.progress.on_food_eaten(FoodKind::Special);
        }
        assert_eq!(run.progress.speed(), 10);
        assert_eq!(run.tick(&mut rng), TickOutcome::Idle);
        assert_eq!(run.tick(&mut rng), TickOutcome::Moved);
    }
}
