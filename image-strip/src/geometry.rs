//! Pure layout math for the strip. Nothing here holds state.

use crate::{ImageAsset, Point, Size, VisibleRange};

/// Slot indexes overlapped by a viewport starting at `offset`.
///
/// `start_index = floor(offset / canvas_width)` and
/// `end_index = ceil((offset + canvas_width) / canvas_width)`, inclusive. The result is not
/// intersected with `0..asset_count`; callers skip out-of-bounds indexes.
pub fn visible_range(offset: f64, canvas_width: u32, asset_count: usize) -> VisibleRange {
    let cw = canvas_width as f64;
    if cw <= 0.0 {
        return VisibleRange {
            start_index: 0,
            end_index: -1,
            count: asset_count,
        };
    }
    VisibleRange {
        start_index: (offset / cw).floor() as i64,
        end_index: ((offset + cw) / cw).ceil() as i64,
        count: asset_count,
    }
}

/// Shrink-to-fit size for an asset inside a `canvas_width` x `canvas_height` slot.
pub fn fit_dimensions<P>(asset: &ImageAsset<P>, canvas_width: u32, canvas_height: u32) -> Size {
    fit_size(asset.intrinsic_size(), canvas_width, canvas_height)
}

/// Uniformly scales `intrinsic` down so it fits the canvas. Never upscales.
pub fn fit_size(intrinsic: Size, canvas_width: u32, canvas_height: u32) -> Size {
    let cw = canvas_width as f64;
    let ch = canvas_height as f64;
    if intrinsic.width > cw || intrinsic.height > ch {
        let scale = (cw / intrinsic.width).min(ch / intrinsic.height);
        return Size {
            width: intrinsic.width * scale,
            height: intrinsic.height * scale,
        };
    }
    intrinsic
}

/// Top-left corner that centers `dims` inside the slot whose left edge is at `slot_x`.
pub fn draw_position(dims: Size, slot_x: f64, canvas_width: u32, canvas_height: u32) -> Point {
    Point {
        x: slot_x + (canvas_width as f64 - dims.width) / 2.0,
        y: (canvas_height as f64 - dims.height) / 2.0,
    }
}

/// Screen-space left edge of slot `index` at the given scroll offset.
pub fn slot_x(index: usize, offset: f64, canvas_width: u32) -> f64 {
    index as f64 * canvas_width as f64 - offset
}

pub fn total_width(asset_count: usize, canvas_width: u32) -> f64 {
    asset_count as f64 * canvas_width as f64
}

/// Largest valid offset: `max(0, total_width - canvas_width)`.
pub fn max_offset(asset_count: usize, canvas_width: u32) -> f64 {
    (total_width(asset_count, canvas_width) - canvas_width as f64).max(0.0)
}

pub fn clamp_offset(raw: f64, asset_count: usize, canvas_width: u32) -> f64 {
    let max = max_offset(asset_count, canvas_width);
    if raw.is_nan() {
        return 0.0;
    }
    raw.clamp(0.0, max)
}
