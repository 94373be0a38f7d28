use crate::geometry::{draw_position, fit_dimensions, slot_x, visible_range};
use crate::{AssetSet, Point, Rect, Rgb, Size, Viewport};

/// A drawable raster target supplied by the host.
///
/// The engine only writes to it. Draw targets may fall partly or fully outside the surface;
/// implementations clip.
pub trait Surface<P> {
    fn fill_rect(&mut self, rect: Rect, color: Rgb);

    fn draw_image(&mut self, pixels: &P, target: Rect);
}

/// One image placement within a frame.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DrawCommand {
    pub index: usize,
    pub position: Point,
    pub size: Size,
}

impl DrawCommand {
    pub fn rect(&self) -> Rect {
        Rect::from_point_size(self.position, self.size)
    }
}

/// Placements for every asset in the visible range at `offset`.
///
/// The inclusive end index is kept, so the slot just past the right edge is included even when
/// none of it is on screen.
pub fn frame_plan<P>(assets: &AssetSet<P>, offset: f64, viewport: Viewport) -> Vec<DrawCommand> {
    let Viewport {
        canvas_width,
        canvas_height,
    } = viewport;

    visible_range(offset, canvas_width, assets.len())
        .indices()
        .map(|index| {
            let size = fit_dimensions(&assets[index], canvas_width, canvas_height);
            let x = slot_x(index, offset, canvas_width);
            DrawCommand {
                index,
                position: draw_position(size, x, canvas_width, canvas_height),
                size,
            }
        })
        .collect()
}

/// Clears `surface` and draws the visible assets. Returns how many images were drawn.
///
/// An empty asset set draws nothing, not even the background.
pub fn render<P, S: Surface<P> + ?Sized>(
    surface: &mut S,
    assets: &AssetSet<P>,
    offset: f64,
    viewport: Viewport,
    background: Rgb,
) -> usize {
    if assets.is_empty() {
        return 0;
    }

    surface.fill_rect(viewport.rect(), background);

    let plan = frame_plan(assets, offset, viewport);
    for cmd in &plan {
        surface.draw_image(&assets[cmd.index].pixels, cmd.rect());
    }
    strace!(offset, drawn = plan.len(), "render");
    plan.len()
}
