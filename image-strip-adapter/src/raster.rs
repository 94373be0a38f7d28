use std::borrow::Cow;
use std::path::Path;

use image::imageops::{self, FilterType};
use image::{ImageFormat, ImageResult, Rgba, RgbaImage};
use image_strip::{Rect, Rgb, Surface, Viewport};

/// A CPU raster surface backed by an owned `RgbaImage`.
///
/// Draw targets are rounded to whole pixels and clipped to the canvas. Images are resampled
/// with `filter` only when the target size differs from the source size.
#[derive(Clone, Debug)]
pub struct RasterSurface {
    canvas: RgbaImage,
    filter: FilterType,
}

impl RasterSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            canvas: RgbaImage::new(width, height),
            filter: FilterType::Triangle,
        }
    }

    pub fn for_viewport(viewport: Viewport) -> Self {
        Self::new(viewport.canvas_width, viewport.canvas_height)
    }

    pub fn with_filter(mut self, filter: FilterType) -> Self {
        self.filter = filter;
        self
    }

    pub fn width(&self) -> u32 {
        self.canvas.width()
    }

    pub fn height(&self) -> u32 {
        self.canvas.height()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.canvas
    }

    pub fn into_image(self) -> RgbaImage {
        self.canvas
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> ImageResult<()> {
        self.canvas.save_with_format(path, ImageFormat::Png)
    }

    /// Pixel span `[start, end)` of `[lo, hi)` clipped to `0..limit`.
    fn clip_span(lo: f64, hi: f64, limit: u32) -> (u32, u32) {
        let start = lo.round().clamp(0.0, limit as f64) as u32;
        let end = hi.round().clamp(0.0, limit as f64) as u32;
        (start, end.max(start))
    }
}

impl Surface<RgbaImage> for RasterSurface {
    fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        let (x0, x1) = Self::clip_span(rect.x, rect.right(), self.canvas.width());
        let (y0, y1) = Self::clip_span(rect.y, rect.bottom(), self.canvas.height());
        let px = Rgba([color.r, color.g, color.b, 255]);
        for y in y0..y1 {
            for x in x0..x1 {
                self.canvas.put_pixel(x, y, px);
            }
        }
    }

    fn draw_image(&mut self, pixels: &RgbaImage, target: Rect) {
        let width = target.width.round();
        let height = target.height.round();
        if width < 1.0 || height < 1.0 {
            return;
        }

        let x = target.x.round();
        let y = target.y.round();
        let (cw, ch) = (self.canvas.width() as f64, self.canvas.height() as f64);
        if x >= cw || y >= ch || x + width <= 0.0 || y + height <= 0.0 {
            return;
        }

        let (width, height) = (width as u32, height as u32);
        let scaled = if pixels.dimensions() == (width, height) {
            Cow::Borrowed(pixels)
        } else {
            Cow::Owned(imageops::resize(pixels, width, height, self.filter))
        };
        imageops::overlay(&mut self.canvas, &*scaled, x as i64, y as i64);
    }
}
