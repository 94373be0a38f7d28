use crate::geometry;
use crate::render::{self, DrawCommand, Surface};
use crate::{
    AssetLoader, AssetSet, AssetSource, ConfigError, CursorHint, DragTracker, LoadCompletion,
    LoadOutcome, LoadStatus, LoadTicket, PointerSample, SliderOptions, SliderState, Viewport,
    VisibleRange,
};

/// A headless, drag-scrollable horizontal image strip.
///
/// This type is UI-agnostic:
/// - It does not hold any UI objects; pixels are an opaque `P` handle.
/// - Your adapter drives it with pointer/touch samples and a [`Surface`] to draw on.
/// - Loading is split into [`ImageSlider::start_load`] / [`LoadTicket::run`] /
///   [`ImageSlider::complete_load`] so a newer load can supersede one still in flight.
///
/// Drag input is ignored until the current load is ready.
#[derive(Clone, Debug)]
pub struct ImageSlider<P> {
    options: SliderOptions,
    loader: AssetLoader<P>,
    drag: DragTracker,
    frame_pending: bool,
}

impl<P> ImageSlider<P> {
    /// Creates a slider in the `Loading` state. Call [`ImageSlider::start_load`] (or
    /// [`ImageSlider::load_with`]) to actually fetch the images.
    pub fn new(options: SliderOptions) -> Result<Self, ConfigError> {
        options.validate()?;
        sdebug!(
            count = options.identifiers.len(),
            canvas_width = options.viewport.canvas_width,
            canvas_height = options.viewport.canvas_height,
            "ImageSlider::new"
        );
        Ok(Self {
            loader: AssetLoader::new(options.identifiers.clone()),
            drag: DragTracker::default(),
            frame_pending: false,
            options,
        })
    }

    pub fn options(&self) -> &SliderOptions {
        &self.options
    }

    pub fn viewport(&self) -> Viewport {
        self.options.viewport
    }

    pub fn identifiers(&self) -> &[String] {
        self.loader.identifiers()
    }

    pub fn status(&self) -> &LoadStatus {
        self.loader.status()
    }

    pub fn assets(&self) -> &AssetSet<P> {
        self.loader.assets()
    }

    pub fn offset(&self) -> f64 {
        self.drag.offset()
    }

    pub fn total_width(&self) -> f64 {
        geometry::total_width(self.assets().len(), self.options.viewport.canvas_width)
    }

    pub fn max_offset(&self) -> f64 {
        geometry::max_offset(self.assets().len(), self.options.viewport.canvas_width)
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn cursor(&self) -> CursorHint {
        if self.is_dragging() {
            CursorHint::Grabbing
        } else {
            CursorHint::Grab
        }
    }

    pub fn state(&self) -> SliderState {
        SliderState {
            offset: self.drag.offset(),
            is_dragging: self.drag.is_dragging(),
            drag_anchor_x: self.drag.anchor_x().unwrap_or_default(),
        }
    }

    /// Returns `true` when the offset or the asset set changed since the last render.
    pub fn needs_render(&self) -> bool {
        self.frame_pending
    }

    pub fn visible_range(&self) -> VisibleRange {
        geometry::visible_range(
            self.offset(),
            self.options.viewport.canvas_width,
            self.assets().len(),
        )
    }

    pub fn frame_plan(&self) -> Vec<DrawCommand> {
        render::frame_plan(self.assets(), self.offset(), self.options.viewport)
    }

    /// Starts loading the current identifier list, superseding any load in flight.
    ///
    /// Clears loaded assets, cancels any drag and resets the offset.
    pub fn start_load(&mut self) -> LoadTicket {
        self.drag.reset(0.0);
        self.frame_pending = false;
        self.loader.begin()
    }

    /// Replaces the identifier list and starts a full reload.
    pub fn set_identifiers<I, S>(&mut self, identifiers: I) -> Result<LoadTicket, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let identifiers: Vec<String> = identifiers.into_iter().map(Into::into).collect();
        if identifiers.is_empty() {
            return Err(ConfigError::NoImages);
        }
        self.options.identifiers = identifiers.clone();
        self.drag.reset(0.0);
        self.frame_pending = false;
        Ok(self.loader.replace(identifiers))
    }

    /// Applies a finished load. Results from a superseded load, or a second completion for the
    /// same load, are dropped without touching any state.
    pub fn complete_load(&mut self, completion: LoadCompletion<P>) -> LoadOutcome {
        let outcome = self.loader.complete(completion);
        if let LoadOutcome::Ready { .. } = outcome {
            let max = self.max_offset();
            self.drag.reset(0.0);
            self.drag.set_offset_clamped(self.options.initial_offset, max);
            self.frame_pending = true;
        }
        outcome
    }

    /// Runs a whole load against `source`: start, resolve every identifier, apply.
    pub async fn load_with<S>(&mut self, source: &S) -> LoadOutcome
    where
        S: AssetSource<Pixels = P> + ?Sized,
    {
        let ticket = self.start_load();
        let completion = ticket.run(source).await;
        self.complete_load(completion)
    }

    pub fn pointer_down(&mut self, sample: PointerSample) {
        if !self.status().is_ready() {
            return;
        }
        strace!(x = sample.x, "ImageSlider::pointer_down");
        self.drag.pointer_down(sample);
    }

    /// Returns `true` when the offset changed.
    pub fn pointer_move(&mut self, sample: PointerSample) -> bool {
        if !self.status().is_ready() {
            return false;
        }
        let max = self.max_offset();
        let changed = self.drag.pointer_move(sample, max);
        if changed {
            strace!(offset = self.drag.offset(), "ImageSlider::pointer_move");
            self.frame_pending = true;
        }
        changed
    }

    pub fn pointer_up(&mut self) {
        if self.drag.release() {
            strace!(offset = self.drag.offset(), "ImageSlider::pointer_up");
        }
    }

    /// Leaving the surface ends a drag exactly like releasing the pointer.
    pub fn pointer_leave(&mut self) {
        self.pointer_up();
    }

    /// Only the first touch point is read.
    pub fn touch_start(&mut self, touches: &[PointerSample]) {
        if let Some(&first) = touches.first() {
            self.pointer_down(first);
        }
    }

    pub fn touch_move(&mut self, touches: &[PointerSample]) -> bool {
        match touches.first() {
            Some(&first) => self.pointer_move(first),
            None => false,
        }
    }

    pub fn touch_end(&mut self) {
        self.pointer_up();
    }

    /// Moves the strip programmatically, clamped to the valid range.
    ///
    /// Returns `true` when the offset changed. Ignored until the current load is ready.
    pub fn set_offset(&mut self, offset: f64) -> bool {
        if !self.status().is_ready() {
            return false;
        }
        let max = self.max_offset();
        let changed = self.drag.set_offset_clamped(offset, max);
        self.frame_pending |= changed;
        changed
    }

    /// Draws the current frame unconditionally. Returns how many images were drawn.
    ///
    /// Nothing is drawn unless the current load is ready.
    pub fn render<S: Surface<P> + ?Sized>(&mut self, surface: &mut S) -> usize {
        self.frame_pending = false;
        if !self.status().is_ready() {
            return 0;
        }
        render::render(
            surface,
            self.loader.assets(),
            self.drag.offset(),
            self.options.viewport,
            self.options.background,
        )
    }

    /// Draws only if the offset or asset set changed since the last render.
    pub fn render_if_needed<S: Surface<P> + ?Sized>(&mut self, surface: &mut S) -> bool {
        if !self.frame_pending {
            return false;
        }
        self.render(surface);
        true
    }
}
