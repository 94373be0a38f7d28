/// The fixed-size visible window the strip is observed through.
///
/// Every image gets a slot exactly `canvas_width` wide, so the viewport also defines the strip
/// layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub canvas_width: u32,
    pub canvas_height: u32,
}

impl Viewport {
    pub fn new(canvas_width: u32, canvas_height: u32) -> Self {
        Self {
            canvas_width,
            canvas_height,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect {
            x: 0.0,
            y: 0.0,
            width: self.canvas_width as f64,
            height: self.canvas_height as f64,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A target rectangle in surface coordinates. May extend past the surface bounds.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn from_point_size(origin: Point, size: Size) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            width: size.width,
            height: size.height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Background fill used to clear the surface before each frame.
pub const DEFAULT_BACKGROUND: Rgb = Rgb::new(242, 242, 242);

impl Default for Rgb {
    fn default() -> Self {
        DEFAULT_BACKGROUND
    }
}

/// A single pointer coordinate, already unified across mouse and touch input.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointerSample {
    pub x: f64,
}

impl PointerSample {
    pub fn new(x: f64) -> Self {
        Self { x }
    }
}

/// Cursor affordance a host can show over the surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CursorHint {
    Grab,
    Grabbing,
}

impl CursorHint {
    /// CSS-style cursor name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Grab => "grab",
            Self::Grabbing => "grabbing",
        }
    }
}

/// Slot indexes touched by the viewport at a given offset.
///
/// Both ends are inclusive and unfiltered: `start_index` can be negative and `end_index` can
/// reach past the last asset. Use [`VisibleRange::indices`] to iterate only existing slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleRange {
    pub start_index: i64,
    pub end_index: i64, // inclusive
    pub count: usize,
}

impl VisibleRange {
    /// Indexes in `start_index..=end_index` that refer to an existing asset.
    pub fn indices(&self) -> impl Iterator<Item = usize> + use<> {
        let count = self.count as i64;
        let start = self.start_index.max(0);
        let end = self.end_index.min(count - 1);
        (start..=end).map(|i| i as usize)
    }

    pub fn is_empty(&self) -> bool {
        self.indices().next().is_none()
    }
}
