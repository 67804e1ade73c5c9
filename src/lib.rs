pub mod app;
pub mod config;
pub mod data;
pub mod generation;
pub mod model;
pub mod prompt;
pub mod ui;
pub mod view_models;

pub use app::QuizApp;
