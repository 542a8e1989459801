//! Arcade snake: a fixed-tick simulation with menu, pause and game-over
//! screens, particle effects and a persisted high score, hosted on Bevy.

pub mod food;
pub mod game;
pub mod particles;
pub mod rendering;
pub mod score;
pub mod snake;
pub mod storage;
pub mod ui;
