//! Drives a cached animation onto a surface, one frame index at a time

use crate::clock::FrameClock;
use heartbeat_core::Result;
use heartbeat_particles::{DrawSurface, HeartAnimation};
use std::time::Duration;

/// Replays frames with monotonically increasing indices, clearing the surface before each.
pub struct Player<'a> {
    animation: &'a HeartAnimation,
    clock: FrameClock,
    next_frame: u64,
}

impl<'a> Player<'a> {
    pub fn new(animation: &'a HeartAnimation) -> Self {
        let interval = Duration::from_millis(animation.config().animation.frame_interval_ms);
        Self {
            animation,
            clock: FrameClock::with_interval(interval),
            next_frame: 0,
        }
    }

    /// Index the next `advance` will render
    pub fn next_frame(&self) -> u64 {
        self.next_frame
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(self.clock.frame_interval)
    }

    /// Clear `surface` and draw the next frame. Returns the index drawn.
    pub fn advance<S: DrawSurface + ?Sized>(&mut self, surface: &mut S) -> Result<u64> {
        let frame = self.next_frame;
        surface.clear()?;
        self.animation.render(surface, frame)?;
        self.next_frame += 1;
        Ok(frame)
    }

    /// Render `count` frames back to back, handing each finished surface to `on_frame`.
    pub fn run_offline<S, F>(&mut self, surface: &mut S, count: u64, mut on_frame: F) -> Result<()>
    where
        S: DrawSurface,
        F: FnMut(u64, &S) -> Result<()>,
    {
        for _ in 0..count {
            let frame = self.advance(surface)?;
            on_frame(frame, surface)?;
        }
        Ok(())
    }

    /// Like `run_offline`, but paced by the frame clock. A slow frame delays the next one.
    pub fn run_realtime<S, F>(&mut self, surface: &mut S, count: u64, mut on_frame: F) -> Result<()>
    where
        S: DrawSurface,
        F: FnMut(u64, &S) -> Result<()>,
    {
        let mut rendered = 0;
        while rendered < count {
            self.clock.tick();
            while self.clock.frame_due() && rendered < count {
                self.clock.consume_frame();
                let frame = self.advance(surface)?;
                on_frame(frame, surface)?;
                rendered += 1;
            }
            if rendered < count {
                std::thread::sleep(self.clock.time_until_next());
            }
        }
        println!(
            "[player] Played {} frame(s) over {:.2}s",
            rendered, self.clock.total_time
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heartbeat_core::{Color, HeartConfig, HeartError};
    use heartbeat_particles::PixelCanvas;

    /// Counts clears and rect draws
    #[derive(Default)]
    struct CountingSurface {
        clears: usize,
        rects_since_clear: usize,
        fail_after_clears: Option<usize>,
    }

    impl DrawSurface for CountingSurface {
        fn clear(&mut self) -> Result<()> {
            if self.fail_after_clears == Some(self.clears) {
                return Err(HeartError::SurfaceUnavailable("window closed".to_string()));
            }
            self.clears += 1;
            self.rects_since_clear = 0;
            Ok(())
        }

        fn fill_rect(&mut self, _x: i32, _y: i32, _w: u32, _h: u32, _c: Color) -> Result<()> {
            self.rects_since_clear += 1;
            Ok(())
        }
    }

    fn animation(cycle_length: usize) -> HeartAnimation {
        let mut config = HeartConfig::default();
        config.seed = Some(17);
        config.animation.cycle_length = cycle_length;
        config.animation.frame_interval_ms = 1;
        config.shape.outline_samples = 100;
        config.shape.center_samples = 200;
        HeartAnimation::new(config).unwrap()
    }

    #[test]
    fn advance_clears_then_draws_increasing_indices() {
        let anim = animation(3);
        let mut player = Player::new(&anim);
        let mut surface = CountingSurface::default();

        for expected in 0..7u64 {
            assert_eq!(player.advance(&mut surface).unwrap(), expected);
            assert_eq!(surface.rects_since_clear, anim.frame(expected).len());
        }
        assert_eq!(surface.clears, 7);
        assert_eq!(player.next_frame(), 7);
    }

    #[test]
    fn offline_run_visits_each_frame() {
        let anim = animation(2);
        let mut player = Player::new(&anim);
        let mut canvas = PixelCanvas::from_config(&anim.config().canvas);
        let mut seen = Vec::new();

        player
            .run_offline(&mut canvas, 4, |frame, canvas| {
                seen.push((frame, canvas.painted_count()));
                Ok(())
            })
            .unwrap();

        assert_eq!(seen.iter().map(|s| s.0).collect::<Vec<_>>(), vec![0, 1, 2, 3]);
        assert_eq!(seen[0].1, seen[2].1);
        assert!(seen[0].1 > 0);
    }

    #[test]
    fn realtime_run_renders_requested_count() {
        let anim = animation(2);
        let mut player = Player::new(&anim);
        assert_eq!(player.frame_interval(), Duration::from_millis(1));

        let mut surface = CountingSurface::default();
        let mut frames = 0;
        player
            .run_realtime(&mut surface, 3, |_, _| {
                frames += 1;
                Ok(())
            })
            .unwrap();
        assert_eq!(frames, 3);
        assert_eq!(surface.clears, 3);
    }

    #[test]
    fn surface_failure_stops_playback() {
        let anim = animation(2);
        let mut player = Player::new(&anim);
        let mut surface = CountingSurface {
            fail_after_clears: Some(1),
            ..CountingSurface::default()
        };

        assert_eq!(player.advance(&mut surface).unwrap(), 0);
        let err = player.advance(&mut surface).unwrap_err();
        assert!(matches!(err, HeartError::SurfaceUnavailable(_)));
        assert_eq!(player.next_frame(), 1);
    }
}
