//! Core game module: shared types, the session state machine, and the plugin
//! that feeds it input and drives it at a fixed tick rate.

mod components;
mod constants;
mod events;
mod input;
mod resources;
mod run;

pub use components::*;
pub use constants::*;
pub use events::*;
pub use input::*;
pub use resources::*;
pub use run::*;

use bevy::app::AppExit;
use bevy::prelude::*;

use crate::storage::FileStore;

/// Plugin for input collection and the fixed-rate simulation.
pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_hz(TICK_RATE_HZ))
            .insert_resource(GameSession::new(FileStore::from_env()))
            .init_resource::<InputBuffer>()
            .add_message::<GameEvent>()
            .add_systems(Update, (collect_input, log_game_events))
            .add_systems(FixedUpdate, advance_game);
    }
}

/// System to queue every key pressed this frame for the next tick.
fn collect_input(keyboard_input: Res<ButtonInput<KeyCode>>, mut input_buffer: ResMut<InputBuffer>) {
    for key in keyboard_input.get_just_pressed() {
        input_buffer.queue_key(*key);
    }
}

/// System running one simulation tick: dispatch queued input, then update.
fn advance_game(
    mut session: ResMut<GameSession>,
    mut input_buffer: ResMut<InputBuffer>,
    mut events: MessageWriter<GameEvent>,
    mut exit: MessageWriter<AppExit>,
) {
    for key in input_buffer.drain() {
        let Some(action) = InputAction::from_key(session.phase(), key) else {
            continue;
        };
        if session.handle(action) == Flow::Quit {
            exit.write(AppExit::Success);
            return;
        }
    }

    session.tick();
    events.write_batch(session.drain_events());
}

/// System to report gameplay events in the log.
fn log_game_events(mut reader: MessageReader<GameEvent>) {
    for event in reader.read() {
        match event {
            GameEvent::RunStarted => info!("new run started"),
            GameEvent::NewHighScore { score } => info!("new high score: {}", score),
            GameEvent::RunEnded { score, cause } => {
                info!("Game Over! Final score: {} ({:?})", score, cause)
            }
            GameEvent::FoodEaten { kind, points, .. } => debug!("{:?} food, +{}", kind, points),
            GameEvent::LevelUp { level, speed } => debug!("level {} at speed {}", level, speed),
            GameEvent::PhaseChanged { from, to } => debug!("phase {:?} -> {:?}", from, to),
        }
    }
}
