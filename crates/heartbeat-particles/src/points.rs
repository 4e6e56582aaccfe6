//! Static point sets sampled once from the heart curve

use crate::curves::heart_position;
use crate::sampler::Sampler;
use heartbeat_core::{Point2D, ShapeConfig};
use std::collections::HashSet;

/// Insertion-ordered set of points, deduplicated on exact coordinates.
#[derive(Debug, Clone, Default)]
pub struct PointSet {
    points: Vec<Point2D>,
    seen: HashSet<(u64, u64)>,
}

impl PointSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
            seen: HashSet::with_capacity(capacity),
        }
    }

    /// Returns false if an equal point is already present.
    pub fn insert(&mut self, point: Point2D) -> bool {
        if self.seen.insert(point.key()) {
            self.points.push(point);
            true
        } else {
            false
        }
    }

    pub fn contains(&self, point: &Point2D) -> bool {
        self.seen.contains(&point.key())
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn as_slice(&self) -> &[Point2D] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point2D> {
        self.points.iter()
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point2D;
    type IntoIter = std::slice::Iter<'a, Point2D>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// The three base collections every frame is derived from. Never mutated after `build`.
#[derive(Debug, Clone)]
pub struct HeartShape {
    outline: PointSet,
    edge_diffusion: PointSet,
    center_diffusion: PointSet,
}

impl HeartShape {
    pub fn build(config: &ShapeConfig, sampler: &mut Sampler) -> Self {
        let center = sampler.center();

        let mut outline = PointSet::with_capacity(config.outline_samples);
        for _ in 0..config.outline_samples {
            let angle = sampler.uniform_angle();
            outline.insert(heart_position(angle, config.scale, center));
        }

        let mut edge_diffusion =
            PointSet::with_capacity(outline.len() * config.edge_samples_per_point);
        for point in &outline {
            for _ in 0..config.edge_samples_per_point {
                edge_diffusion.insert(sampler.scatter_toward(*point, config.edge_spread));
            }
        }

        let mut center_diffusion = PointSet::with_capacity(config.center_samples);
        for _ in 0..config.center_samples {
            let Some(&point) = sampler.choose(outline.as_slice()) else {
                break;
            };
            center_diffusion.insert(sampler.scatter_toward(point, config.center_spread));
        }

        Self {
            outline,
            edge_diffusion,
            center_diffusion,
        }
    }

    /// Points on the heart curve
    pub fn outline(&self) -> &PointSet {
        &self.outline
    }

    /// Soft texture around the silhouette edge. Built alongside the others but not drawn.
    pub fn edge_diffusion(&self) -> &PointSet {
        &self.edge_diffusion
    }

    /// Denser fill toward the interior
    pub fn center_diffusion(&self) -> &PointSet {
        &self.center_diffusion
    }
}
