pub mod app;
pub mod config;
pub mod feedback;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod obstacles;
pub mod renderer;
pub mod snake;
pub mod speed;
pub mod terminal_runtime;
pub mod ui;
