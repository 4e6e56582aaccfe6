//! Headless frame export command

use anyhow::{Context, Result};
use heartbeat_core::HeartError;
use heartbeat_particles::{HeartAnimation, PixelCanvas};
use heartbeat_runtime::Player;
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, RgbaImage};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

pub struct RenderArgs {
    pub config: Option<String>,
    pub seed: Option<u64>,
    pub output: String,
    pub frames: Option<u64>,
    pub gif: bool,
    pub realtime: bool,
}

pub fn run(args: RenderArgs) -> Result<()> {
    let config = super::load_config(args.config.as_deref(), args.seed)?;
    let animation = HeartAnimation::new(config).context("Failed to build animation")?;

    let count = args.frames.unwrap_or(animation.cycle_length() as u64);
    let interval_ms = animation.config().animation.frame_interval_ms;
    let mut canvas = PixelCanvas::from_config(&animation.config().canvas);
    let mut player = Player::new(&animation);

    if args.gif {
        let file = File::create(&args.output)
            .context(format!("Failed to create {}", args.output))?;
        let mut encoder = GifEncoder::new(BufWriter::new(file));
        encoder
            .set_repeat(Repeat::Infinite)
            .context("Failed to configure GIF encoder")?;

        let delay = gif_delay(interval_ms)?;
        drive(&mut player, &mut canvas, count, args.realtime, |_, canvas| {
            let frame = Frame::from_parts(to_image(canvas)?, 0, 0, delay);
            encoder
                .encode_frame(frame)
                .map_err(|e| HeartError::ExportError(format!("Failed to encode GIF frame: {}", e)))
        })?;

        println!("Rendered {} frame(s) to {}", count, args.output);
    } else {
        let dir = Path::new(&args.output);
        fs::create_dir_all(dir).context(format!("Failed to create {}", args.output))?;

        drive(&mut player, &mut canvas, count, args.realtime, |frame, canvas| {
            let path = dir.join(format!("frame_{:04}.png", frame));
            to_image(canvas)?.save(&path).map_err(|e| {
                HeartError::ExportError(format!("Failed to save {}: {}", path.display(), e))
            })
        })?;

        println!(
            "Rendered {} {}x{} frame(s) to {}/",
            count,
            canvas.width(),
            canvas.height(),
            args.output
        );
    }

    Ok(())
}

fn drive<F>(
    player: &mut Player<'_>,
    canvas: &mut PixelCanvas,
    count: u64,
    realtime: bool,
    on_frame: F,
) -> heartbeat_core::Result<()>
where
    F: FnMut(u64, &PixelCanvas) -> heartbeat_core::Result<()>,
{
    if realtime {
        player.run_realtime(canvas, count, on_frame)
    } else {
        player.run_offline(canvas, count, on_frame)
    }
}

fn gif_delay(interval_ms: u64) -> Result<Delay> {
    let ms = u32::try_from(interval_ms)
        .with_context(|| format!("Frame interval {}ms is too long for a GIF delay", interval_ms))?;
    Ok(Delay::from_numer_denom_ms(ms, 1))
}

fn to_image(canvas: &PixelCanvas) -> heartbeat_core::Result<RgbaImage> {
    RgbaImage::from_raw(canvas.width(), canvas.height(), canvas.pixels().to_vec())
        .ok_or_else(|| HeartError::ExportError("Failed to create image buffer".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use heartbeat_core::Color;
    use heartbeat_particles::DrawSurface;

    #[test]
    fn canvas_converts_to_image() {
        let mut canvas = PixelCanvas::new(4, 3, Color::BLACK);
        canvas.fill_rect(1, 1, 1, 1, Color::WHITE).unwrap();
        let img = to_image(&canvas).unwrap();
        assert_eq!(img.dimensions(), (4, 3));
        assert_eq!(img.get_pixel(1, 1).0, [255, 255, 255, 255]);
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 255]);
    }

    #[test]
    fn gif_delay_rejects_out_of_range_interval() {
        assert_eq!(gif_delay(50).unwrap(), Delay::from_numer_denom_ms(50, 1));
        assert!(gif_delay(u64::from(u32::MAX) + 1).is_err());
    }
}
