//! UI plugin - camera, sidebar stats and the menu / pause / game over overlays.

use bevy::post_process::bloom::Bloom;
use bevy::prelude::*;
use bevy::render::view::Hdr;

use crate::game::{
    DEATH_RED, FrameSnapshot, GAME_WIDTH, GOLD, GamePhase, GameSession, NEON_BLUE, NEON_GREEN,
    OverlayBody, OverlayTitle, OverlayUI, StatsText,
};

/// Plugin for UI and screen text.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_system)
            .add_systems(Update, (update_stats_text, update_overlay));
    }
}

/// Text shown over the board (or the menu backdrop) for one phase.
#[derive(Debug, PartialEq)]
struct Overlay {
    title: &'static str,
    title_color: Color,
    body: String,
    dim: f32,
}

fn overlay_for(snapshot: &FrameSnapshot) -> Option<Overlay> {
    let score = snapshot.board.as_ref().map_or(0, |board| board.score);
    match snapshot.phase {
        GamePhase::Playing => None,
        GamePhase::Menu => Some(Overlay {
            title: "NEON SNAKE",
            title_color: NEON_GREEN,
            body: format!(
                "Next Generation Gaming\n\n\
                 PRESS SPACE TO START\nH - HIGH SCORES\nESC - QUIT\n\n\
                 High Score: {}",
                snapshot.high_score
            ),
            dim: 0.0,
        }),
        GamePhase::HighScores => Some(Overlay {
            title: "HIGH SCORES",
            title_color: GOLD,
            body: format!("Best: {}\n\nESC - Back", snapshot.high_score),
            dim: 0.3,
        }),
        GamePhase::Paused => Some(Overlay {
            title: "PAUSED",
            title_color: NEON_BLUE,
            body: "ESC - Resume\nQ - Main Menu".to_string(),
            dim: 120.0 / 255.0,
        }),
        GamePhase::GameOver => {
            let record = if score > 0 && score == snapshot.high_score {
                "\nNEW HIGH SCORE!"
            } else {
                ""
            };
            Some(Overlay {
                title: "GAME OVER",
                title_color: DEATH_RED,
                body: format!(
                    "Final Score: {score}{record}\n\nSPACE - Play Again\nESC - Main Menu"
                ),
                dim: 180.0 / 255.0,
            })
        }
    }
}

fn stats_for(snapshot: &FrameSnapshot) -> Option<String> {
    let board = snapshot.board.as_ref()?;
    Some(format!(
        "STATS\n\nScore: {}\nHigh: {}\nLevel: {}\nSpeed: {}\nLength: {}\n\n\
         CONTROLS\n\nWASD / Arrows - Move\nESC - Pause",
        board.score, snapshot.high_score, board.level, board.speed, board.length
    ))
}

/// Initial setup system - camera, sidebar text, overlay.
fn setup_system(mut commands: Commands) {
    // Setup camera with HDR and bloom for glowing effects
    commands.spawn((
        Camera2d,
        Hdr,
        Bloom {
            intensity: 0.3,
            low_frequency_boost: 0.6,
            low_frequency_boost_curvature: 0.5,
            high_pass_frequency: 0.8,
            ..default()
        },
    ));

    commands.spawn((
        Text::default(),
        TextFont {
            font_size: 22.0,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(50.0),
            left: Val::Px(GAME_WIDTH as f32 + 20.0),
            ..default()
        },
        Visibility::Hidden,
        StatsText,
    ));

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BackgroundColor(Color::NONE),
            OverlayUI,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::default(),
                TextFont {
                    font_size: 48.0,
                    ..default()
                },
                TextColor(NEON_GREEN),
                Node {
                    margin: UiRect::bottom(Val::Px(30.0)),
                    ..default()
                },
                OverlayTitle,
            ));
            parent.spawn((
                Text::default(),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                OverlayBody,
            ));
        });
}

/// System to update the sidebar stats.
fn update_stats_text(
    session: Res<GameSession>,
    mut query: Query<(&mut Text, &mut Visibility), With<StatsText>>,
) {
    if let Ok((mut text, mut visibility)) = query.single_mut() {
        match stats_for(&session.snapshot()) {
            Some(stats) => {
                *text = Text::from(stats);
                *visibility = Visibility::Inherited;
            }
            None => *visibility = Visibility::Hidden,
        }
    }
}

type OverlayRootQuery<'w, 's> =
    Query<'w, 's, (&'static mut BackgroundColor, &'static mut Visibility), With<OverlayUI>>;
type OverlayTitleQuery<'w, 's> = Query<
    'w,
    's,
    (&'static mut Text, &'static mut TextColor),
    (With<OverlayTitle>, Without<OverlayBody>, Without<StatsText>),
>;
type OverlayBodyQuery<'w, 's> = Query<
    'w,
    's,
    &'static mut Text,
    (With<OverlayBody>, Without<OverlayTitle>, Without<StatsText>),
>;

/// System to show the overlay matching the current phase.
fn update_overlay(
    session: Res<GameSession>,
    mut root: OverlayRootQuery,
    mut title: OverlayTitleQuery,
    mut body: OverlayBodyQuery,
) {
    let Ok((mut background, mut visibility)) = root.single_mut() else {
        return;
    };

    let Some(overlay) = overlay_for(&session.snapshot()) else {
        *visibility = Visibility::Hidden;
        return;
    };

    *visibility = Visibility::Inherited;
    background.0 = Color::srgba(0.0, 0.0, 0.0, overlay.dim);
    if let Ok((mut text, mut color)) = title.single_mut() {
        *text = Text::from(overlay.title);
        color.0 = overlay.title_color;
    }
    if let Ok(mut text) = body.single_mut() {
        *text = Text::from(overlay.body);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::InputAction;
    use crate::storage::MemoryStore;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn session_with_high_score(high_score: u32) -> GameSession {
        GameSession::with_rng(MemoryStore::with_score(high_score), StdRng::seed_from_u64(5))
    }

    #[test]
    fn menu_shows_the_high_score() {
        let session = session_with_high_score(340);
        let overlay = overlay_for(&session.snapshot()).unwrap();
        assert_eq!(overlay.title, "NEON SNAKE");
        assert!(overlay.body.contains("High Score: 340"));
        assert!(stats_for(&session.snapshot()).is_none());
    }

    #[test]
    fn playing_shows_stats_without_overlay() {
        let mut session = session_with_high_score(90);
        session.handle(InputAction::Confirm);
        let snapshot = session.snapshot();
        assert!(overlay_for(&snapshot).is_none());
        let stats = stats_for(&snapshot).unwrap();
        assert!(stats.contains("Score: 0"));
        assert!(stats.contains("High: 90"));
        assert!(stats.contains("Level: 1"));
        assert!(stats.contains("Speed: 8"));
        assert!(stats.contains("Length: 1"));
    }

    #[test]
    fn pause_dims_the_board() {
        let mut session = session_with_high_score(0);
        session.handle(InputAction::Confirm);
        session.handle(InputAction::Pause);
        let overlay = overlay_for(&session.snapshot()).unwrap();
        assert_eq!(overlay.title, "PAUSED");
        assert!(overlay.dim > 0.0);
    }

    #[test]
    fn scoreless_game_over_is_not_a_record() {
        let mut session = session_with_high_score(0);
        session.handle(InputAction::Confirm);
        while session.phase() == GamePhase::Playing {
            session.tick();
            if let Some(run) = session.run_mut() {
                run.food.respawn(crate::game::Position::new(0, 0));
            }
        }
        let overlay = overlay_for(&session.snapshot()).unwrap();
        assert_eq!(overlay.title, "GAME OVER");
        assert!(overlay.body.contains("Final Score: 0"));
        assert!(!overlay.body.contains("NEW HIGH SCORE"));
    }
}
