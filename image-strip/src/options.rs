use crate::{ConfigError, DEFAULT_BACKGROUND, Rgb, Viewport};

/// Configuration for [`crate::ImageSlider`].
///
/// Everything the engine needs is passed in here once; nothing is read from ambient state.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SliderOptions {
    /// Image identifiers in display order (paths, URLs, bundle keys; resolved by the host).
    pub identifiers: Vec<String>,
    pub viewport: Viewport,
    /// Fill colour used to clear the surface before each frame.
    pub background: Rgb,
    /// Offset the strip starts at after each successful load. Clamped to the strip.
    pub initial_offset: f64,
}

impl SliderOptions {
    pub fn new<I, S>(identifiers: I, canvas_width: u32, canvas_height: u32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            identifiers: identifiers.into_iter().map(Into::into).collect(),
            viewport: Viewport::new(canvas_width, canvas_height),
            background: DEFAULT_BACKGROUND,
            initial_offset: 0.0,
        }
    }

    pub fn with_background(mut self, background: Rgb) -> Self {
        self.background = background;
        self
    }

    pub fn with_initial_offset(mut self, offset: f64) -> Self {
        self.initial_offset = offset;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.viewport.canvas_width == 0 {
            return Err(ConfigError::ZeroCanvasWidth);
        }
        if self.viewport.canvas_height == 0 {
            return Err(ConfigError::ZeroCanvasHeight);
        }
        if self.identifiers.is_empty() {
            return Err(ConfigError::NoImages);
        }
        Ok(())
    }
}
