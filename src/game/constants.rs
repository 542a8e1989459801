//! Game constants for board size, timing, progression, effects, and colors.

use bevy::prelude::*;

// Window and board geometry, in pixels
pub const WINDOW_WIDTH: u32 = 1000;
pub const WINDOW_HEIGHT: u32 = 700;
pub const GAME_WIDTH: i32 = 800;
pub const GAME_HEIGHT: i32 = 600;
pub const SIDEBAR_WIDTH: u32 = WINDOW_WIDTH - GAME_WIDTH as u32;
pub const CELL_SIZE: i32 = 20;
pub const GRID_COLUMNS: i32 = GAME_WIDTH / CELL_SIZE;
pub const GRID_ROWS: i32 = GAME_HEIGHT / CELL_SIZE;

// Timing. Every lifetime below is counted in ticks at this rate.
pub const TICK_RATE_HZ: f64 = 60.0;
pub const BASE_MOVE_INTERVAL: u32 = 12;
pub const TRAIL_LIFE: u32 = 20;
pub const SPECIAL_FOOD_CADENCE: u32 = 600;
pub const SCREEN_SHAKE_TICKS: u32 = 20;
pub const FOOD_PULSE_STEP: f32 = 0.2;
pub const MENU_ANIMATION_STEP: f32 = 0.02;

// Progression
pub const BASE_SPEED: u32 = 8;
pub const MAX_SPEED: u32 = 15;
pub const POINTS_PER_LEVEL: u32 = 100;
pub const NORMAL_FOOD_POINTS: u32 = 10;
pub const NORMAL_FOOD_GROWTH: u32 = 1;
pub const SPECIAL_FOOD_POINTS: u32 = 50;
pub const SPECIAL_FOOD_GROWTH: u32 = 3;
pub const SPECIAL_FOOD_CHANCE: f64 = 0.3;

// Food placement
pub const MAX_SPAWN_ATTEMPTS: u32 = 256;

// Particles
pub const PARTICLE_GRAVITY: f32 = 0.1;

// Persistence
pub const HIGH_SCORE_FILE: &str = "snake_highscore.json";
pub const HIGH_SCORE_PATH_ENV: &str = "SNAKE_HIGHSCORE_PATH";

// Colors
pub const DARK_BG_COLOR: Color = Color::srgb(0.071, 0.071, 0.098);
pub const GAME_BG_COLOR: Color = Color::srgb(0.098, 0.098, 0.137);
pub const SIDEBAR_BG_COLOR: Color = Color::srgb(0.137, 0.137, 0.176);
pub const GRID_LINE_COLOR: Color = Color::srgb(0.157, 0.157, 0.196);
pub const NEON_GREEN: Color = Color::srgb(0.224, 1.0, 0.078);
pub const NEON_BLUE: Color = Color::srgb(0.0, 1.0, 1.0);
pub const GOLD: Color = Color::srgb(1.0, 0.843, 0.0);
pub const DEATH_RED: Color = Color::srgb(1.0, 0.271, 0.227);
pub const GRADIENT_START: Color = Color::srgb(0.541, 0.169, 0.886);
pub const GRADIENT_END: Color = Color::srgb(0.118, 0.565, 1.0);

// Z-index constants for rendering layers
pub const Z_BACKGROUND: f32 = 0.0;
pub const Z_GRID: f32 = 0.5;
pub const Z_TRAIL: f32 = 1.0;
pub const Z_FOOD: f32 = 1.5;
pub const Z_SNAKE_SEGMENT: f32 = 2.0;
pub const Z_SNAKE_HEAD: f32 = 2.5;
pub const Z_PARTICLES: f32 = 3.0;
