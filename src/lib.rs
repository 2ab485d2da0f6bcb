// src/lib.rs

pub mod api;
pub mod app;
pub mod chat;
pub mod config;
pub mod errors;
pub mod key_handlers;
pub mod logging;
pub mod models;
pub mod repl;
pub mod status_indicator;
pub mod surface;
pub mod ui;

pub use app::App;
