pub mod config;
pub mod cues;
pub mod error;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod logging;
pub mod overlay;
pub mod progression;
pub mod renderer;
pub mod round;
pub mod settings;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
