//! Game resources (singleton state): the session state machine and its render snapshot.

use std::mem;

use bevy::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::{
    Direction, GameEvent, InputAction, MENU_ANIMATION_STEP, RunEndCause, RunState, TickOutcome,
};
use crate::food::Food;
use crate::particles::{Particle, TrailSegment};
use crate::snake::Snake;
use crate::storage::ScoreStore;

/// Game phase enum to track which state the game is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    #[default]
    Menu,
    HighScores,
    Playing,
    Paused,
    GameOver,
}

/// Whether the main loop should keep going after an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Phase plus the data that only exists in that phase.
enum Screen {
    Menu,
    HighScores,
    Playing(RunState),
    Paused(RunState),
    GameOver(RunState),
}

impl Screen {
    fn phase(&self) -> GamePhase {
        match self {
            Screen::Menu => GamePhase::Menu,
            Screen::HighScores => GamePhase::HighScores,
            Screen::Playing(_) => GamePhase::Playing,
            Screen::Paused(_) => GamePhase::Paused,
            Screen::GameOver(_) => GamePhase::GameOver,
        }
    }

    fn run(&self) -> Option<&RunState> {
        match self {
            Screen::Playing(run) | Screen::Paused(run) | Screen::GameOver(run) => Some(run),
            Screen::Menu | Screen::HighScores => None,
        }
    }
}

/// Main game state resource.
///
/// Owns every piece of mutable game state. A fresh [`RunState`] is built on
/// each transition into `Playing` from the menu or the game-over screen, so a
/// restart can never inherit anything from the previous run.
#[derive(Resource)]
pub struct GameSession {
    screen: Screen,
    high_score: u32,
    record_announced: bool,
    store: Box<dyn ScoreStore>,
    rng: StdRng,
    menu_animation: f32,
    events: Vec<GameEvent>,
}

impl GameSession {
    pub fn new(store: impl ScoreStore + 'static) -> Self {
        Self::with_rng(store, StdRng::from_rng(&mut rand::rng()))
    }

    /// Session with an explicit random source, for deterministic play.
    pub fn with_rng(store: impl ScoreStore + 'static, rng: StdRng) -> Self {
        let high_score = store.load();
        info!("loaded high score {}", high_score);
        GameSession {
            screen: Screen::Menu,
            high_score,
            record_announced: false,
            store: Box::new(store),
            rng,
            menu_animation: 0.0,
            events: Vec::new(),
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.screen.phase()
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// The current run, while playing, paused or on the game-over screen.
    pub fn run(&self) -> Option<&RunState> {
        self.screen.run()
    }

    pub fn run_mut(&mut self) -> Option<&mut RunState> {
        match &mut self.screen {
            Screen::Playing(run) | Screen::Paused(run) | Screen::GameOver(run) => Some(run),
            Screen::Menu | Screen::HighScores => None,
        }
    }

    /// Takes the events produced since the last call.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        mem::take(&mut self.events)
    }

    /// Applies one input action to the active phase.
    pub fn handle(&mut self, action: InputAction) -> Flow {
        if action == InputAction::Quit {
            info!("quit requested");
            return Flow::Quit;
        }

        match (self.phase(), action) {
            (GamePhase::Menu | GamePhase::GameOver, InputAction::Confirm) => self.start_run(),
            (GamePhase::Menu, InputAction::ShowHighScores) => {
                self.transition(|_| Screen::HighScores)
            }
            (
                GamePhase::HighScores | GamePhase::Paused | GamePhase::GameOver,
                InputAction::ReturnToMenu,
            ) => self.transition(|_| Screen::Menu),
            (GamePhase::Playing, InputAction::Move(direction)) => self.steer(direction),
            (GamePhase::Playing, InputAction::Pause) => self.transition(|screen| match screen {
                Screen::Playing(run) => Screen::Paused(run),
                other => other,
            }),
            (GamePhase::Paused, InputAction::Resume) => self.transition(|screen| match screen {
                Screen::Paused(run) => Screen::Playing(run),
                other => other,
            }),
            (phase, action) => debug!("{:?} ignored while {:?}", action, phase),
        }
        Flow::Continue
    }

    /// Advances the active phase by one fixed tick.
    pub fn tick(&mut self) {
        let outcome = match &mut self.screen {
            Screen::Menu | Screen::HighScores => {
                self.menu_animation += MENU_ANIMATION_STEP;
                return;
            }
            Screen::Paused(_) => return,
            Screen::GameOver(run) => {
                run.tick_effects();
                return;
            }
            Screen::Playing(run) => (run.tick(&mut self.rng), run.progress.score()),
        };

        match outcome {
            (
                TickOutcome::Ate {
                    position,
                    kind,
                    reward,
                },
                score,
            ) => {
                self.events.push(GameEvent::FoodEaten {
                    position,
                    kind,
                    points: reward.points,
                });
                if reward.level_up
                    && let Some(run) = self.run()
                {
                    let (level, speed) = (run.progress.level(), run.progress.speed());
                    info!("level {} reached, speed {}", level, speed);
                    self.events.push(GameEvent::LevelUp { level, speed });
                }
                self.record_score(score);
            }
            (TickOutcome::Ended(cause), score) => {
                // A meal that filled the board still counts.
                self.record_score(score);
                self.end_run(cause, score);
            }
            (TickOutcome::Idle | TickOutcome::Moved, _) => {}
        }
    }

    /// Read-only view of everything the renderer draws.
    pub fn snapshot(&self) -> FrameSnapshot<'_> {
        FrameSnapshot {
            phase: self.phase(),
            high_score: self.high_score,
            menu_animation: self.menu_animation,
            board: self.run().map(|run| BoardView {
                snake: &run.snake,
                food: &run.food,
                particles: run.particles.particles(),
                trail: run.trail.segments(),
                score: run.progress.score(),
                level: run.progress.level(),
                speed: run.progress.speed(),
                length: run.snake.len(),
                screen_shake: run.screen_shake(),
            }),
        }
    }

    fn steer(&mut self, direction: Direction) {
        if let Some(run) = self.run_mut() {
            run.snake.steer(direction);
        }
    }

    fn start_run(&mut self) {
        let Some(run) = RunState::new(&mut self.rng) else {
            warn!("no room to place food, staying in {:?}", self.phase());
            return;
        };
        self.record_announced = false;
        self.transition(|_| Screen::Playing(run));
        self.events.push(GameEvent::RunStarted);
    }

    fn record_score(&mut self, score: u32) {
        if score <= self.high_score {
            return;
        }
        self.high_score = score;
        if !self.record_announced {
            self.record_announced = true;
            self.events.push(GameEvent::NewHighScore { score });
        }
    }

    fn end_run(&mut self, cause: RunEndCause, score: u32) {
        if let Screen::Playing(run) = &mut self.screen {
            run.crash(&mut self.rng);
        }
        self.transition(|screen| match screen {
            Screen::Playing(run) => Screen::GameOver(run),
            other => other,
        });

        debug!("run over ({:?}), final score {}", cause, score);
        self.events.push(GameEvent::RunEnded { score, cause });
        if let Err(err) = self.store.save(self.high_score) {
            warn!("could not save high score: {err:#}");
        }
    }

    fn transition(&mut self, next: impl FnOnce(Screen) -> Screen) {
        let from = self.phase();
        let current = mem::replace(&mut self.screen, Screen::Menu);
        self.screen = next(current);
        let to = self.phase();
        if from != to {
            info!("{:?} -> {:?}", from, to);
            self.events.push(GameEvent::PhaseChanged { from, to });
        }
    }
}

/// Board-side part of a frame, present whenever a run exists.
pub struct BoardView<'a> {
    pub snake: &'a Snake,
    pub food: &'a Food,
    pub particles: &'a [Particle],
    pub trail: &'a [TrailSegment],
    pub score: u32,
    pub level: u32,
    pub speed: u32,
    pub length: usize,
    pub screen_shake: u32,
}

/// What the renderer gets to see each frame.
pub struct FrameSnapshot<'a> {
    pub phase: GamePhase,
    pub high_score: u32,
    pub menu_animation: f32,
    pub board: Option<BoardView<'a>>,
}
