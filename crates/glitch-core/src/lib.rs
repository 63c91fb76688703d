//! Glitch Core - shared types for the glyph-grid effect engine
//!
//! This crate provides:
//! - RGB color handling with linear interpolation
//! - Deterministic pseudo-random number generation
//! - The engine configuration surface (serde + toml)

pub mod color;
pub mod config;
pub mod rand;

pub use color::Rgb;
pub use config::{
    ConfigError, Direction, FontConfig, GlitchConfig, Intensity, Pattern, Theme,
};
pub use rand::Rng;
