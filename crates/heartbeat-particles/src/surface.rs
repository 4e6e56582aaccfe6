//! Drawing surface boundary and a software RGBA canvas

use heartbeat_core::{CanvasConfig, Color, HeartError, Result, SizedPoint};

/// The two operations the animation needs from whatever it draws on.
pub trait DrawSurface {
    /// Remove all prior drawings
    fn clear(&mut self) -> Result<()>;

    /// Fill an axis-aligned rectangle with no stroke
    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Color) -> Result<()>;
}

/// Draw each point as a filled `size x size` square
pub fn draw_points<S: DrawSurface + ?Sized>(
    surface: &mut S,
    points: &[SizedPoint],
    color: Color,
) -> Result<()> {
    for p in points {
        surface.fill_rect(p.x, p.y, p.size, p.size, color)?;
    }
    Ok(())
}

/// RGBA8 raster; rectangles are clipped to its bounds.
pub struct PixelCanvas {
    width: u32,
    height: u32,
    background: [u8; 4],
    pixels: Vec<u8>,
    closed: bool,
}

impl PixelCanvas {
    /// Sized from validated config, so `width * height` fits in memory.
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        let background = background.to_rgba8();
        let pixels = background.repeat(width as usize * height as usize);
        Self {
            width,
            height,
            background,
            pixels,
            closed: false,
        }
    }

    pub fn from_config(config: &CanvasConfig) -> Self {
        Self::new(config.width, config.height, config.background)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let mut out = [0u8; 4];
        out.copy_from_slice(&self.pixels[i..i + 4]);
        Some(out)
    }

    /// Raw RGBA bytes, row-major
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Number of pixels that differ from the background
    pub fn painted_count(&self) -> usize {
        self.pixels
            .chunks_exact(4)
            .filter(|px| px[..] != self.background[..])
            .count()
    }

    /// Every later draw call fails with `SurfaceUnavailable`
    pub fn close(&mut self) {
        self.closed = true;
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    fn ensure_open(&self) -> Result<()> {
        if self.closed {
            Err(HeartError::SurfaceUnavailable("pixel canvas is closed".to_string()))
        } else {
            Ok(())
        }
    }
}

impl DrawSurface for PixelCanvas {
    fn clear(&mut self) -> Result<()> {
        self.ensure_open()?;
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&self.background);
        }
        Ok(())
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Color) -> Result<()> {
        self.ensure_open()?;

        let x0 = x.max(0) as i64;
        let y0 = y.max(0) as i64;
        let x1 = (x as i64 + width as i64).min(self.width as i64);
        let y1 = (y as i64 + height as i64).min(self.height as i64);
        if x0 >= x1 || y0 >= y1 {
            return Ok(());
        }

        let rgba = color.to_rgba8();
        for row in y0..y1 {
            let start = ((row * self.width as i64 + x0) * 4) as usize;
            let end = ((row * self.width as i64 + x1) * 4) as usize;
            for px in self.pixels[start..end].chunks_exact_mut(4) {
                px.copy_from_slice(&rgba);
            }
        }
        Ok(())
    }
}
