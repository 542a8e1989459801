//! Rendering plugin - draws the board, the snake, food, trail and particles
//! from the session snapshot every frame.

use bevy::color::Mix;
use bevy::prelude::*;
use bevy_vector_shapes::prelude::*;
use rand::prelude::*;

use crate::game::{
    BoardView, CELL_SIZE, DARK_BG_COLOR, DEATH_RED, FoodKind, GAME_BG_COLOR, GAME_HEIGHT,
    GAME_WIDTH, GOLD, GRADIENT_END, GRADIENT_START, GRID_LINE_COLOR, GameSession, NEON_BLUE,
    NEON_GREEN, Position, SCREEN_SHAKE_TICKS, SIDEBAR_BG_COLOR, SIDEBAR_WIDTH, WINDOW_HEIGHT,
    WINDOW_WIDTH, Z_BACKGROUND, Z_FOOD, Z_GRID, Z_PARTICLES, Z_SNAKE_HEAD, Z_SNAKE_SEGMENT,
    Z_TRAIL,
};

/// Plugin for rendering and visual effects.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (draw_menu_backdrop, draw_board).chain());
    }
}

const SHAKE_AMPLITUDE: f32 = 3.0;
const MENU_DOTS: usize = 50;

/// Converts board pixels (origin top-left, `y` down) into world space
/// (origin at the window center, `y` up).
fn board_to_world(point: Vec2, z: f32) -> Vec3 {
    Vec3::new(
        point.x - WINDOW_WIDTH as f32 / 2.0,
        WINDOW_HEIGHT as f32 / 2.0 - point.y,
        z,
    )
}

/// Fills an axis-aligned rectangle given by its top-left corner in board pixels.
fn fill_rect(painter: &mut ShapePainter, top_left: Vec2, size: Vec2, z: f32, color: Color) {
    painter.transform = Transform::from_translation(board_to_world(top_left + size / 2.0, z));
    painter.color = color;
    painter.rect(size);
}

/// Rounded rectangle with a soft halo, used for the head and the food.
fn glowing_rect(
    painter: &mut ShapePainter,
    top_left: Vec2,
    size: Vec2,
    z: f32,
    color: Color,
    glow_layers: u32,
) {
    let radius = 5.0 / (size.x / 2.0);
    painter.corner_radii = Vec4::splat(radius);
    for layer in 0..glow_layers {
        let alpha = (50.0 - layer as f32 * 15.0) / 255.0;
        if alpha <= 0.0 {
            continue;
        }
        let grow = Vec2::splat(layer as f32 * 2.0);
        fill_rect(
            painter,
            top_left - grow,
            size + grow * 2.0,
            z - 0.01,
            color.with_alpha(alpha),
        );
    }
    fill_rect(painter, top_left, size, z, color);
    painter.corner_radii = Vec4::ZERO;
}

/// Random jitter while the screen-shake counter runs, fading with it.
fn shake_offset(remaining: u32) -> Vec2 {
    if remaining == 0 {
        return Vec2::ZERO;
    }
    let decay = remaining as f32 / SCREEN_SHAKE_TICKS as f32;
    let mut rng = rand::rng();
    Vec2::new(
        rng.random_range(-SHAKE_AMPLITUDE..=SHAKE_AMPLITUDE),
        rng.random_range(-SHAKE_AMPLITUDE..=SHAKE_AMPLITUDE),
    ) * decay
}

/// System to draw the animated gradient behind the menu screens.
fn draw_menu_backdrop(session: Res<GameSession>, mut painter: ShapePainter) {
    let snapshot = session.snapshot();
    if snapshot.board.is_some() {
        return;
    }

    painter.reset();
    let width = WINDOW_WIDTH as f32;
    let height = WINDOW_HEIGHT as f32;
    let bands = 70;
    let band_height = height / bands as f32;
    for band in 0..bands {
        let ratio = band as f32 / bands as f32;
        fill_rect(
            &mut painter,
            Vec2::new(0.0, band as f32 * band_height),
            Vec2::new(width, band_height + 1.0),
            Z_BACKGROUND,
            GRADIENT_START.mix(&GRADIENT_END, ratio),
        );
    }

    let phase = snapshot.menu_animation;
    painter.color = NEON_BLUE;
    for dot in 0..MENU_DOTS {
        let x = (dot as f32 * 20.0 + phase * 50.0) % width;
        let y = 100.0 + (phase + dot as f32 * 0.1).sin() * 50.0;
        painter.transform = Transform::from_translation(board_to_world(Vec2::new(x, y), Z_GRID));
        painter.circle(2.0);
    }
}

/// System to draw the board whenever a run exists.
fn draw_board(session: Res<GameSession>, mut painter: ShapePainter) {
    let snapshot = session.snapshot();
    let Some(board) = snapshot.board else {
        return;
    };

    painter.reset();
    let shake = shake_offset(board.screen_shake);
    draw_arena(&mut painter, shake);
    draw_trail(&mut painter, &board, shake);
    draw_food(&mut painter, &board, shake);
    draw_snake(&mut painter, &board, shake);
    draw_particles(&mut painter, &board, shake);
}

fn draw_arena(painter: &mut ShapePainter, shake: Vec2) {
    let game_size = Vec2::new(GAME_WIDTH as f32, GAME_HEIGHT as f32);

    fill_rect(
        painter,
        Vec2::ZERO,
        Vec2::new(WINDOW_WIDTH as f32, WINDOW_HEIGHT as f32),
        Z_BACKGROUND - 0.2,
        DARK_BG_COLOR,
    );
    fill_rect(painter, shake, game_size, Z_BACKGROUND - 0.1, GAME_BG_COLOR);
    fill_rect(
        painter,
        Vec2::new(GAME_WIDTH as f32, 0.0),
        Vec2::new(SIDEBAR_WIDTH as f32, WINDOW_HEIGHT as f32),
        Z_BACKGROUND,
        SIDEBAR_BG_COLOR,
    );

    painter.thickness = 1.0;
    painter.color = GRID_LINE_COLOR;
    painter.transform = Transform::IDENTITY;
    for x in (0..GAME_WIDTH).step_by(CELL_SIZE as usize) {
        let x = x as f32 + shake.x;
        painter.line(
            board_to_world(Vec2::new(x, shake.y), Z_GRID),
            board_to_world(Vec2::new(x, GAME_HEIGHT as f32 + shake.y), Z_GRID),
        );
    }
    for y in (0..GAME_HEIGHT).step_by(CELL_SIZE as usize) {
        let y = y as f32 + shake.y;
        painter.line(
            board_to_world(Vec2::new(shake.x, y), Z_GRID),
            board_to_world(Vec2::new(GAME_WIDTH as f32 + shake.x, y), Z_GRID),
        );
    }

    painter.hollow = true;
    painter.thickness = 2.0;
    fill_rect(painter, shake, game_size, Z_GRID, NEON_BLUE);
    painter.hollow = false;
}

fn cell_top_left(position: Position, shake: Vec2) -> Vec2 {
    Vec2::new(position.x as f32, position.y as f32) + shake
}

fn draw_trail(painter: &mut ShapePainter, board: &BoardView, shake: Vec2) {
    let size = Vec2::splat(CELL_SIZE as f32 - 2.0);
    painter.corner_radii = Vec4::splat(3.0 / (size.x / 2.0));
    for segment in board.trail {
        fill_rect(
            painter,
            cell_top_left(segment.position, shake) + Vec2::ONE,
            size,
            Z_TRAIL,
            NEON_GREEN.with_alpha(segment.fade()),
        );
    }
    painter.corner_radii = Vec4::ZERO;
}

fn draw_food(painter: &mut ShapePainter, board: &BoardView, shake: Vec2) {
    let pulse = 2.0 + board.food.pulse().sin();
    let color = match board.food.kind {
        FoodKind::Special => GOLD,
        FoodKind::Normal => DEATH_RED,
    };
    glowing_rect(
        painter,
        cell_top_left(board.food.position, shake) - Vec2::splat(pulse),
        Vec2::splat(CELL_SIZE as f32 + pulse * 2.0),
        Z_FOOD,
        color,
        3,
    );
}

fn draw_snake(painter: &mut ShapePainter, board: &BoardView, shake: Vec2) {
    let cell = CELL_SIZE as f32;
    for (i, &segment) in board.snake.body().enumerate() {
        let top_left = cell_top_left(segment, shake);
        if i == 0 {
            glowing_rect(painter, top_left, Vec2::splat(cell), Z_SNAKE_HEAD, NEON_GREEN, 2);
            painter.color = Color::WHITE;
            for eye in [Vec2::new(5.0, 5.0), Vec2::new(15.0, 5.0)] {
                painter.transform =
                    Transform::from_translation(board_to_world(top_left + eye, Z_SNAKE_HEAD + 0.1));
                painter.circle(2.0);
            }
        } else {
            let intensity = (255.0 - i as f32 * 10.0).max(50.0) / 255.0;
            painter.corner_radii = Vec4::splat(3.0 / ((cell - 2.0) / 2.0));
            fill_rect(
                painter,
                top_left + Vec2::ONE,
                Vec2::splat(cell - 2.0),
                Z_SNAKE_SEGMENT,
                Color::srgb(0.0, intensity, 0.0),
            );
            painter.corner_radii = Vec4::ZERO;
        }
    }
}

fn draw_particles(painter: &mut ShapePainter, board: &BoardView, shake: Vec2) {
    for particle in board.particles {
        painter.color = particle.color.with_alpha(particle.fade());
        painter.transform =
            Transform::from_translation(board_to_world(particle.position + shake, Z_PARTICLES));
        painter.circle(particle.radius);
    }
}
