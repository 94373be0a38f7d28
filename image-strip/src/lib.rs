//! A headless, drag-scrollable horizontal image strip.
//!
//! Images are laid out left-to-right, one per canvas-wide slot. A pointer drag pans a viewport
//! across the strip and only the slots under the viewport are drawn each frame.
//!
//! For a filesystem asset source, an `image`-backed raster surface and mouse/touch event shims,
//! see the `image-strip-adapter` crate.
//!
//! This crate focuses on the engine:
//! - all-or-nothing asynchronous batch loading with a stale-result guard
//! - the drag state machine and offset clamping
//! - visible-range, shrink-to-fit and centering math
//! - the per-frame draw pass against a host [`Surface`]
//!
//! It is UI-agnostic. A host is expected to provide:
//! - an [`AssetSource`] resolving identifiers into pixel handles
//! - pointer/touch samples
//! - a [`Surface`] matching the configured canvas size
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod asset;
mod drag;
mod error;
pub mod geometry;
mod loader;
mod options;
mod render;
mod slider;
mod state;
mod types;


pub use asset::{AssetSet, AssetSource, ImageAsset};
pub use drag::{DragState, DragTracker};
pub use error::{AssetLoadError, ConfigError};
pub use geometry::{draw_position, fit_dimensions, visible_range};
pub use loader::{AssetLoader, LoadCompletion, LoadOutcome, LoadStatus, LoadTicket, load_batch};
pub use options::SliderOptions;
pub use render::{DrawCommand, Surface, frame_plan, render};
pub use slider::ImageSlider;
pub use state::SliderState;
pub use types::{
    CursorHint, DEFAULT_BACKGROUND, Point, PointerSample, Rect, Rgb, Size, Viewport, VisibleRange,
};
