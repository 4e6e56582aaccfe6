//! Heart parametric curve, pulse curve and radial forces

use heartbeat_core::Point2D;
use std::f64::consts::PI;

/// Point on the heart curve at `angle`, enlarged by `scale` and centered on `center`.
///
/// Coordinates are truncated toward zero, so nearby angles collapse onto the same pixel.
pub fn heart_position(angle: f64, scale: f64, center: (f64, f64)) -> Point2D {
    let x = 16.0 * angle.sin().powi(3);
    let y = -(13.0 * angle.cos()
        - 5.0 * (2.0 * angle).cos()
        - 2.0 * (3.0 * angle).cos()
        - (4.0 * angle).cos());

    Point2D::new((x * scale + center.0).trunc(), (y * scale + center.1).trunc())
}

/// Bounded periodic pulse signal: `4 sin(3p) / 2π`, period `2π/3`
pub fn pulse_curve(p: f64) -> f64 {
    2.0 * (2.0 * (3.0 * p).sin()) / (2.0 * PI)
}

/// Curve input for a frame index
pub fn frame_phase(frame: usize) -> f64 {
    frame as f64 / 10.0 * PI
}

/// Inverse-power force along the line from the canvas center to a point.
///
/// The displacement is `strength * sign / d2^exponent * offset * factor` and is
/// subtracted from the point, where `d2` is the squared distance to `center`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialForce {
    pub exponent: f64,
    pub sign: f64,
    pub factor: f64,
}

impl RadialForce {
    /// Halo contraction
    pub const SHRINK: Self = Self {
        exponent: 1.6,
        sign: -1.0,
        factor: 1.0,
    };

    /// Silhouette beat; direction follows the sign of `strength`
    pub const PULSE: Self = Self {
        exponent: 0.52,
        sign: 1.0,
        factor: 0.5,
    };

    pub fn apply(&self, point: Point2D, strength: f64, center: (f64, f64)) -> Point2D {
        let offset_x = point.x - center.0;
        let offset_y = point.y - center.1;
        let distance_squared = offset_x * offset_x + offset_y * offset_y;
        if distance_squared == 0.0 {
            return point;
        }

        let force = self.sign / distance_squared.powf(self.exponent);
        let dx = strength * force * offset_x * self.factor;
        let dy = strength * force * offset_y * self.factor;

        Point2D::new(point.x - dx, point.y - dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CENTER: (f64, f64) = (320.0, 240.0);

    #[test]
    fn heart_position_at_zero_angle() {
        let p = heart_position(0.0, 11.0, CENTER);
        assert_eq!(p, Point2D::new(320.0, 185.0));
    }

    #[test]
    fn heart_position_stays_on_canvas() {
        for i in 0..10_000 {
            let angle = i as f64 / 10_000.0 * 2.0 * PI;
            let p = heart_position(angle, 11.0, CENTER);
            assert!(p.x >= 0.0 && p.x < 640.0, "x out of bounds at angle {angle}: {}", p.x);
            assert!(p.y >= 0.0 && p.y < 480.0, "y out of bounds at angle {angle}: {}", p.y);
            assert_eq!(p.x, p.x.trunc());
            assert_eq!(p.y, p.y.trunc());
        }
    }

    #[test]
    fn pulse_curve_bounded_and_periodic() {
        let bound = 4.0 / (2.0 * PI);
        for i in 0..1000 {
            let p = i as f64 * 0.01 - 5.0;
            let v = pulse_curve(p);
            assert!(v.abs() <= bound + 1e-12);
            assert!((v - pulse_curve(p + 2.0 * PI / 3.0)).abs() < 1e-9);
        }
        assert!((pulse_curve(PI / 6.0) - bound).abs() < 1e-12);
    }

    #[test]
    fn forces_leave_center_unchanged() {
        let center = Point2D::new(CENTER.0, CENTER.1);
        assert_eq!(RadialForce::SHRINK.apply(center, 10.0, CENTER), center);
        assert_eq!(RadialForce::PULSE.apply(center, -6.3, CENTER), center);
    }

    #[test]
    fn pulse_force_direction_follows_strength() {
        let p = Point2D::new(420.0, 240.0);
        let inward = RadialForce::PULSE.apply(p, 5.0, CENTER);
        let outward = RadialForce::PULSE.apply(p, -5.0, CENTER);
        assert!(inward.x < p.x);
        assert!(outward.x > p.x);
        assert_eq!(inward.y, 240.0);

        // 5 * 0.5 * 100 / (10000^0.52)
        let expected = 420.0 - 5.0 * 0.5 * 100.0 / 10_000f64.powf(0.52);
        assert!((inward.x - expected).abs() < 1e-9);
    }

    #[test]
    fn shrink_force_matches_formula() {
        let p = Point2D::new(323.0, 244.0);
        let moved = RadialForce::SHRINK.apply(p, 8.0, CENTER);
        // d2 = 25, displacement = 8 * -1/25^1.6 * offset
        let force = -1.0 / 25f64.powf(1.6);
        assert!((moved.x - (323.0 - 8.0 * force * 3.0)).abs() < 1e-12);
        assert!((moved.y - (244.0 - 8.0 * force * 4.0)).abs() < 1e-12);
    }

    #[test]
    fn frame_phase_steps_by_tenth_pi() {
        assert_eq!(frame_phase(0), 0.0);
        assert!((frame_phase(5) - PI / 2.0).abs() < 1e-12);
    }
}
