//! Adapter utilities for the `image-strip` crate.
//!
//! The `image-strip` crate is UI-agnostic and focuses on the engine math and state. This crate
//! provides the host-side pieces commonly needed to put it on screen:
//!
//! - [`FsSource`]: resolves identifiers as image files (async read + `image` decode)
//! - [`RasterSurface`]: a clipped CPU surface backed by an `RgbaImage`
//! - [`HostEvent`] / [`dispatch`]: mouse and touch translation into pointer samples
//! - [`Controller`]: ties a slider, a source and a surface together
//!
//! This crate is intentionally framework-agnostic (no windowing or GUI toolkit bindings).
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod controller;
mod input;
mod raster;
mod source;

#[cfg(test)]
mod tests;

pub use controller::{Controller, RasterController};
pub use input::{HostEvent, dispatch};
pub use raster::RasterSurface;
pub use source::FsSource;
