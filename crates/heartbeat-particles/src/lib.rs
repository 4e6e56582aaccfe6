//! Heartbeat Particles - a pulsing heart made of points
//!
//! Provides the whole particle model:
//! - Parametric heart curve, pulse curve and radial forces
//! - Seedable exponential scatter sampling
//! - Static outline / edge / center point sets built once
//! - A per-frame cache covering one animation cycle
//! - A drawing-surface boundary plus a software RGBA canvas

pub mod animator;
pub mod curves;
pub mod points;
pub mod sampler;
pub mod surface;

pub use animator::{FrameStats, HeartAnimation};
pub use points::{HeartShape, PointSet};
pub use sampler::Sampler;
pub use surface::{DrawSurface, PixelCanvas};
