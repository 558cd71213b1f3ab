// src/config/mod.rs
//! Configuration system for twofauth-export
//!
//! Optional TOML file next to the executable; built-in defaults otherwise.

pub use app::{load, Config, Paths};

mod app;
mod defaults;
