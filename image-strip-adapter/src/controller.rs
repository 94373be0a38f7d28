use image_strip::{
    AssetSource, ConfigError, CursorHint, ImageSlider, LoadOutcome, LoadStatus, SliderOptions,
    Surface,
};

use crate::{FsSource, HostEvent, RasterSurface, dispatch};

/// A framework-neutral controller that owns a slider, its asset source and its surface.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `load` / `set_identifiers` to (re)load images
/// - `handle` with each translated pointer/touch event
///
/// Every call that changes the offset or completes a load redraws the surface.
pub struct Controller<S: AssetSource, F> {
    slider: ImageSlider<S::Pixels>,
    source: S,
    surface: F,
}

/// A controller reading image files and drawing into an in-memory `RgbaImage`.
pub type RasterController = Controller<FsSource, RasterSurface>;

impl RasterController {
    pub fn raster(options: SliderOptions, source: FsSource) -> Result<Self, ConfigError> {
        let surface = RasterSurface::for_viewport(options.viewport);
        Self::new(options, source, surface)
    }
}

impl<S, F> Controller<S, F>
where
    S: AssetSource,
    F: Surface<S::Pixels>,
{
    pub fn new(options: SliderOptions, source: S, surface: F) -> Result<Self, ConfigError> {
        Ok(Self {
            slider: ImageSlider::new(options)?,
            source,
            surface,
        })
    }

    pub fn slider(&self) -> &ImageSlider<S::Pixels> {
        &self.slider
    }

    pub fn slider_mut(&mut self) -> &mut ImageSlider<S::Pixels> {
        &mut self.slider
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn surface(&self) -> &F {
        &self.surface
    }

    pub fn into_parts(self) -> (ImageSlider<S::Pixels>, S, F) {
        (self.slider, self.source, self.surface)
    }

    pub fn status(&self) -> &LoadStatus {
        self.slider.status()
    }

    pub fn cursor(&self) -> CursorHint {
        self.slider.cursor()
    }

    /// Text a host shows instead of the surface while it is not drawable.
    pub fn status_text(&self) -> Option<String> {
        match self.slider.status() {
            LoadStatus::Loading => Some("Loading images...".to_owned()),
            LoadStatus::Failed(err) => Some(format!("Error loading images: {err}")),
            LoadStatus::Ready => None,
        }
    }

    /// Loads the current identifier list and draws the first frame on success.
    pub async fn load(&mut self) -> LoadOutcome {
        let outcome = self.slider.load_with(&self.source).await;
        adebug!(?outcome, "Controller::load");
        self.slider.render_if_needed(&mut self.surface);
        outcome
    }

    /// Replaces the identifier list and reloads.
    pub async fn set_identifiers<I, T>(&mut self, identifiers: I) -> Result<LoadOutcome, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let ticket = self.slider.set_identifiers(identifiers)?;
        let completion = ticket.run(&self.source).await;
        let outcome = self.slider.complete_load(completion);
        adebug!(?outcome, "Controller::set_identifiers");
        self.slider.render_if_needed(&mut self.surface);
        Ok(outcome)
    }

    /// Forwards a host event and redraws if the offset changed. Returns `true` on redraw.
    pub fn handle(&mut self, event: &HostEvent) -> bool {
        dispatch(&mut self.slider, event);
        self.slider.render_if_needed(&mut self.surface)
    }

    /// Redraws unconditionally. Returns how many images were drawn.
    pub fn redraw(&mut self) -> usize {
        self.slider.render(&mut self.surface)
    }
}
