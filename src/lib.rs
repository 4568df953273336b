// src/lib.rs
pub mod analysis;
pub mod app;
pub mod canvas;
pub mod codec;
pub mod state;
pub mod ui;

pub use app::MythosApp;
