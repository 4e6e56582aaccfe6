//! Heartbeat Core - Foundational types for the heartbeat animation
//!
//! This crate provides the types every other heartbeat crate depends on:
//! - `Point2D`, `SizedPoint` - Canvas-space point types
//! - `Color` - RGBA color with hex parsing
//! - `HeartConfig` - Layered TOML configuration with validation
//! - Error types and Result alias

mod config;
mod error;
mod types;

pub use config::{
    AnimationConfig, CanvasConfig, HeartConfig, ShapeConfig, DEFAULT_CONFIG_FILE,
    MAX_CANVAS_DIMENSION, MAX_FRAME_INTERVAL_MS, MAX_HALO_JITTER, SEED_ENV_VAR,
};
pub use error::{HeartError, Result};
pub use types::{Color, Point2D, SizedPoint};
