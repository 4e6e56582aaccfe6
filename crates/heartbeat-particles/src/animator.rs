//! Per-frame halo generation, pulse displacement and the frame cache

use crate::curves::{frame_phase, heart_position, pulse_curve, RadialForce};
use crate::points::{HeartShape, PointSet};
use crate::sampler::Sampler;
use crate::surface::{draw_points, DrawSurface};
use heartbeat_core::{HeartConfig, Point2D, Result, SizedPoint};
use serde::Serialize;

/// Peak pulse displacement applied to outline and center points
const PULSE_AMPLITUDE: f64 = 10.0;
const HALO_BASE_RADIUS: f64 = 4.0;
const HALO_RADIUS_SWING: f64 = 6.0;
const HALO_BASE_COUNT: f64 = 3000.0;
const HALO_COUNT_SWING: f64 = 4000.0;

/// Diagnostics for one cached frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrameStats {
    pub frame: usize,
    /// Pulse force strength applied to outline and center points
    pub ratio: f64,
    pub halo_radius: i64,
    pub halo_requested: usize,
    /// Halo candidates left after coordinate dedup
    pub halo_kept: usize,
    pub total_points: usize,
}

/// Halo sizing for a frame: `(radius, candidate count)`
pub fn halo_parameters(frame: usize) -> (i64, usize) {
    let curve = pulse_curve(frame_phase(frame));
    let radius = (HALO_BASE_RADIUS + HALO_RADIUS_SWING * (1.0 + curve)) as i64;
    let count = (HALO_BASE_COUNT + HALO_COUNT_SWING * curve.powi(2)) as usize;
    (radius, count)
}

/// Pulse force strength for a frame
pub fn pulse_ratio(frame: usize) -> f64 {
    PULSE_AMPLITUDE * pulse_curve(frame_phase(frame))
}

/// The heart animation: base point sets plus every frame of one cycle, computed up front.
pub struct HeartAnimation {
    config: HeartConfig,
    shape: HeartShape,
    frames: Vec<Vec<SizedPoint>>,
    stats: Vec<FrameStats>,
}

impl HeartAnimation {
    /// Validate `config`, then build with its seed (or fresh entropy).
    pub fn new(config: HeartConfig) -> Result<Self> {
        let center = config.canvas.center();
        let sampler = match config.seed {
            Some(seed) => Sampler::seeded(seed, center),
            None => Sampler::from_entropy(center),
        };
        Self::with_sampler(config, sampler)
    }

    pub fn with_sampler(config: HeartConfig, mut sampler: Sampler) -> Result<Self> {
        config.validate()?;

        let shape = HeartShape::build(&config.shape, &mut sampler);
        println!(
            "[heart] Built {} outline, {} edge, {} center point(s)",
            shape.outline().len(),
            shape.edge_diffusion().len(),
            shape.center_diffusion().len()
        );

        let cycle_length = config.animation.cycle_length;
        let mut frames = Vec::with_capacity(cycle_length);
        let mut stats = Vec::with_capacity(cycle_length);
        for frame in 0..cycle_length {
            let (points, frame_stats) = compute_frame(frame, &shape, &config, &mut sampler);
            frames.push(points);
            stats.push(frame_stats);
        }
        println!("[heart] Cached {} frame(s)", frames.len());

        Ok(Self {
            config,
            shape,
            frames,
            stats,
        })
    }

    pub fn config(&self) -> &HeartConfig {
        &self.config
    }

    pub fn shape(&self) -> &HeartShape {
        &self.shape
    }

    pub fn cycle_length(&self) -> usize {
        self.frames.len()
    }

    /// Points for `frame_index`, wrapped into the cycle
    pub fn frame(&self, frame_index: u64) -> &[SizedPoint] {
        &self.frames[self.wrap(frame_index)]
    }

    pub fn frame_stats(&self, frame_index: u64) -> &FrameStats {
        &self.stats[self.wrap(frame_index)]
    }

    pub fn stats(&self) -> &[FrameStats] {
        &self.stats
    }

    /// Draw one cached frame onto `surface`. Does not clear it first.
    pub fn render<S: DrawSurface + ?Sized>(&self, surface: &mut S, frame_index: u64) -> Result<()> {
        draw_points(surface, self.frame(frame_index), self.config.canvas.heart_color)
    }

    fn wrap(&self, frame_index: u64) -> usize {
        (frame_index % self.frames.len() as u64) as usize
    }
}

/// Builds one frame: halo, then displaced outline, then displaced center fill.
fn compute_frame(
    frame: usize,
    shape: &HeartShape,
    config: &HeartConfig,
    sampler: &mut Sampler,
) -> (Vec<SizedPoint>, FrameStats) {
    let center = sampler.center();
    let ratio = pulse_ratio(frame);
    let (halo_radius, halo_requested) = halo_parameters(frame);

    let mut points = Vec::with_capacity(
        halo_requested + shape.outline().len() + shape.center_diffusion().len(),
    );

    let mut halo = PointSet::with_capacity(halo_requested);
    for _ in 0..halo_requested {
        let angle = sampler.uniform_angle();
        let candidate = heart_position(angle, config.animation.halo_scale, center);
        let shrunk = RadialForce::SHRINK.apply(candidate, halo_radius as f64, center);

        if halo.insert(shrunk) {
            let dx = sampler.jitter(config.animation.halo_jitter);
            let dy = sampler.jitter(config.animation.halo_jitter);
            let size = sampler.point_size();
            let jittered = Point2D::new(shrunk.x + dx as f64, shrunk.y + dy as f64);
            points.push(SizedPoint::from_point(jittered, size));
        }
    }
    let halo_kept = points.len();

    for base in [shape.outline(), shape.center_diffusion()] {
        for point in base {
            let moved = RadialForce::PULSE.apply(*point, ratio, center);
            points.push(SizedPoint::from_point(moved, sampler.point_size()));
        }
    }

    let stats = FrameStats {
        frame,
        ratio,
        halo_radius,
        halo_requested,
        halo_kept,
        total_points: points.len(),
    };
    (points, stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::PixelCanvas;
    use heartbeat_core::{Color, HeartError};

    /// Records draw calls instead of rasterizing them
    #[derive(Default)]
    struct RecordingSurface {
        rects: Vec<(i32, i32, u32, u32, Color)>,
        clears: usize,
    }

    impl DrawSurface for RecordingSurface {
        fn clear(&mut self) -> Result<()> {
            self.rects.clear();
            self.clears += 1;
            Ok(())
        }

        fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Color) -> Result<()> {
            self.rects.push((x, y, width, height, color));
            Ok(())
        }
    }

    fn small_config(cycle_length: usize, seed: u64) -> HeartConfig {
        let mut config = HeartConfig::default();
        config.seed = Some(seed);
        config.animation.cycle_length = cycle_length;
        config.shape.outline_samples = 300;
        config.shape.center_samples = 800;
        config
    }

    #[test]
    fn halo_parameters_at_rest() {
        // pulse_curve(0) == 0
        assert_eq!(halo_parameters(0), (10, 3000));
        assert_eq!(pulse_ratio(0), 0.0);
    }

    #[test]
    fn halo_parameters_at_peak() {
        // Frame 5 is phase pi/2 where sin(3p) == -1
        let (radius, count) = halo_parameters(5);
        let curve = -4.0 / (2.0 * std::f64::consts::PI);
        assert_eq!(radius, (4.0 + 6.0 * (1.0 + curve)) as i64);
        assert_eq!(count, (3000.0 + 4000.0 * curve * curve) as usize);
        assert!(pulse_ratio(5) < 0.0);
    }

    #[test]
    fn single_frame_end_to_end() {
        let mut config = HeartConfig {
            seed: Some(2024),
            ..HeartConfig::default()
        };
        config.animation.cycle_length = 1;

        let anim = HeartAnimation::new(config).unwrap();
        assert_eq!(anim.cycle_length(), 1);

        let stats = anim.frame_stats(0);
        let (_, requested) = halo_parameters(0);
        assert_eq!(stats.halo_requested, requested);
        assert!(stats.halo_kept <= requested);

        let shape = anim.shape();
        assert!(shape.outline().len() <= 3000);
        assert!(shape.center_diffusion().len() <= 10000);

        let frame = anim.frame(0);
        assert_eq!(
            frame.len(),
            stats.halo_kept + shape.outline().len() + shape.center_diffusion().len()
        );
        assert_eq!(frame.len(), stats.total_points);
        assert!(frame.iter().all(|p| p.size == 1 || p.size == 2));
    }

    #[test]
    fn zero_ratio_frame_keeps_outline_in_place() {
        let anim = HeartAnimation::new(small_config(1, 5)).unwrap();
        let halo_kept = anim.frame_stats(0).halo_kept;
        let outline = anim.shape().outline().as_slice();
        let drawn = &anim.frame(0)[halo_kept..halo_kept + outline.len()];
        for (base, p) in outline.iter().zip(drawn) {
            assert_eq!((p.x, p.y), (base.x as i32, base.y as i32));
        }
    }

    #[test]
    fn frame_lookup_wraps() {
        let anim = HeartAnimation::new(small_config(4, 8)).unwrap();
        assert_eq!(anim.cycle_length(), 4);
        for f in 0..4u64 {
            assert_eq!(anim.frame(f), anim.frame(f + 4));
            assert_eq!(anim.frame(f), anim.frame(f + 400));
            assert_eq!(anim.frame_stats(f).frame, f as usize);
        }
    }

    #[test]
    fn render_is_periodic() {
        let anim = HeartAnimation::new(small_config(3, 21)).unwrap();
        let mut a = RecordingSurface::default();
        let mut b = RecordingSurface::default();
        anim.render(&mut a, 1).unwrap();
        anim.render(&mut b, 1 + 3).unwrap();
        assert_eq!(a.rects, b.rects);
        assert_eq!(a.rects.len(), anim.frame(1).len());
    }

    #[test]
    fn render_uses_heart_color_and_point_size() {
        let anim = HeartAnimation::new(small_config(1, 3)).unwrap();
        let mut surface = RecordingSurface::default();
        anim.render(&mut surface, 0).unwrap();

        let color = anim.config().canvas.heart_color;
        for ((x, y, w, h, c), p) in surface.rects.iter().zip(anim.frame(0)) {
            assert_eq!((*x, *y), (p.x, p.y));
            assert_eq!((*w, *h), (p.size, p.size));
            assert_eq!(*c, color);
        }
        assert_eq!(surface.clears, 0);
    }

    #[test]
    fn same_seed_same_cache() {
        let a = HeartAnimation::new(small_config(2, 77)).unwrap();
        let b = HeartAnimation::new(small_config(2, 77)).unwrap();
        assert_eq!(a.frame(0), b.frame(0));
        assert_eq!(a.frame(1), b.frame(1));
        assert_eq!(a.stats(), b.stats());
    }

    #[test]
    fn invalid_config_fails_fast() {
        let mut config = small_config(1, 1);
        config.animation.cycle_length = 0;
        assert!(matches!(HeartAnimation::new(config), Err(HeartError::Config(_))));
    }

    #[test]
    fn oversized_halo_jitter_fails_fast() {
        let mut config = small_config(1, 1);
        config.animation.halo_jitter = 3_000_000_000;
        assert!(matches!(HeartAnimation::new(config), Err(HeartError::Config(_))));
    }

    #[test]
    fn closed_surface_propagates() {
        let anim = HeartAnimation::new(small_config(1, 4)).unwrap();
        let mut canvas = PixelCanvas::new(640, 480, Color::BLACK);
        canvas.close();
        let err = anim.render(&mut canvas, 0).unwrap_err();
        assert!(matches!(err, HeartError::SurfaceUnavailable(_)));
    }
}
