//! Layered configuration
//!
//! Config is resolved with three layers of precedence (highest wins):
//! 1. Environment variable: `HEARTBEAT_SEED`
//! 2. TOML file: an explicit path, or `heartbeat.toml` in the working directory
//! 3. Built-in defaults (640x480 canvas, 20-frame cycle, 3000 outline samples)

use crate::error::{HeartError, Result};
use crate::types::Color;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable that overrides the random seed
pub const SEED_ENV_VAR: &str = "HEARTBEAT_SEED";

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "heartbeat.toml";

/// Largest accepted canvas width or height, in pixels
pub const MAX_CANVAS_DIMENSION: u32 = 16_384;

/// Largest accepted halo jitter radius, in pixels
pub const MAX_HALO_JITTER: u32 = 1_000;

/// Largest accepted frame interval (one minute)
pub const MAX_FRAME_INTERVAL_MS: u64 = 60_000;

/// Drawing surface dimensions and colors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
    pub background: Color,
    pub heart_color: Color,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            background: Color::BLACK,
            heart_color: Color::from_hex(0xFF2121),
        }
    }
}

impl CanvasConfig {
    /// Canvas center in canvas coordinates
    pub fn center(&self) -> (f64, f64) {
        (self.width as f64 / 2.0, self.height as f64 / 2.0)
    }
}

/// Static point-set sampling parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeConfig {
    /// Heart curve enlargement for the outline
    pub scale: f64,
    pub outline_samples: usize,
    pub edge_samples_per_point: usize,
    pub edge_spread: f64,
    pub center_samples: usize,
    pub center_spread: f64,
}

impl Default for ShapeConfig {
    fn default() -> Self {
        Self {
            scale: 11.0,
            outline_samples: 3000,
            edge_samples_per_point: 3,
            edge_spread: 0.05,
            center_samples: 10000,
            center_spread: 0.17,
        }
    }
}

/// Frame cycle and halo parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub cycle_length: usize,
    pub frame_interval_ms: u64,
    /// Heart curve enlargement for halo candidates
    pub halo_scale: f64,
    /// Max per-axis integer jitter applied to halo points
    pub halo_jitter: u32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            cycle_length: 20,
            frame_interval_ms: 50,
            halo_scale: 11.6,
            halo_jitter: 6,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeartConfig {
    /// Fixed seed for reproducible output; random when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub canvas: CanvasConfig,
    pub shape: ShapeConfig,
    pub animation: AnimationConfig,
}

impl HeartConfig {
    /// Load config with layered precedence: defaults < file < env var.
    ///
    /// An explicit `path` must exist; without one, `heartbeat.toml` is used if present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(p) => Self::load_file(p)?,
            None => {
                let local = Path::new(DEFAULT_CONFIG_FILE);
                if local.exists() {
                    Self::load_file(local)?
                } else {
                    Self::default()
                }
            }
        };

        config.apply_seed_override(std::env::var(SEED_ENV_VAR).ok().as_deref())?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: HeartConfig = toml::from_str(content)
            .map_err(|e| HeartError::Config(format!("invalid configuration: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            HeartError::Config(format!("Failed to parse config {}: {}", path.display(), e))
        })
    }

    /// Apply a seed from the environment layer, if one was set
    pub fn apply_seed_override(&mut self, value: Option<&str>) -> Result<()> {
        if let Some(raw) = value {
            let seed = raw.trim().parse::<u64>().map_err(|_| {
                HeartError::Config(format!("{} must be an unsigned integer, got '{}'", SEED_ENV_VAR, raw))
            })?;
            self.seed = Some(seed);
        }
        Ok(())
    }

    /// Reject settings the animation cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(HeartError::Config(format!(
                "canvas must be non-empty, got {}x{}",
                self.canvas.width, self.canvas.height
            )));
        }
        if self.canvas.width > MAX_CANVAS_DIMENSION || self.canvas.height > MAX_CANVAS_DIMENSION {
            return Err(HeartError::Config(format!(
                "canvas must be at most {}x{}, got {}x{}",
                MAX_CANVAS_DIMENSION, MAX_CANVAS_DIMENSION, self.canvas.width, self.canvas.height
            )));
        }
        if self.animation.cycle_length == 0 {
            return Err(HeartError::Config("cycle_length must be at least 1".to_string()));
        }
        if !(1..=MAX_FRAME_INTERVAL_MS).contains(&self.animation.frame_interval_ms) {
            return Err(HeartError::Config(format!(
                "frame_interval_ms must be between 1 and {}, got {}",
                MAX_FRAME_INTERVAL_MS, self.animation.frame_interval_ms
            )));
        }
        if self.animation.halo_jitter > MAX_HALO_JITTER {
            return Err(HeartError::Config(format!(
                "halo_jitter must be at most {}, got {}",
                MAX_HALO_JITTER, self.animation.halo_jitter
            )));
        }
        if self.shape.outline_samples == 0 {
            return Err(HeartError::Config("outline_samples must be at least 1".to_string()));
        }
        check_positive("shape.scale", self.shape.scale)?;
        check_positive("animation.halo_scale", self.animation.halo_scale)?;
        check_non_negative("shape.edge_spread", self.shape.edge_spread)?;
        check_non_negative("shape.center_spread", self.shape.center_spread)?;
        Ok(())
    }
}

fn check_positive(field: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(HeartError::Config(format!("{} must be a positive number, got {}", field, value)))
    }
}

fn check_non_negative(field: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(HeartError::Config(format!("{} must be zero or positive, got {}", field, value)))
    }
}
