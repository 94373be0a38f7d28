use image_strip::{ImageSlider, PointerSample};

/// Pointer input as a host UI toolkit reports it.
///
/// Coordinates are the horizontal client positions the host hands out; touch events carry the
/// positions of every active touch point in the host's order.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HostEvent {
    MouseDown { client_x: f64 },
    MouseMove { client_x: f64 },
    MouseUp,
    MouseLeave,
    TouchStart { touches: Vec<f64> },
    TouchMove { touches: Vec<f64> },
    TouchEnd,
}

impl HostEvent {
    /// The primary pointer sample carried by this event, if any.
    ///
    /// For touch events this is the first touch point; the rest are ignored.
    pub fn sample(&self) -> Option<PointerSample> {
        match self {
            Self::MouseDown { client_x } | Self::MouseMove { client_x } => {
                Some(PointerSample::new(*client_x))
            }
            Self::TouchStart { touches } | Self::TouchMove { touches } => {
                touches.first().copied().map(PointerSample::new)
            }
            Self::MouseUp | Self::MouseLeave | Self::TouchEnd => None,
        }
    }
}

/// Forwards a host event to the slider. Returns `true` when the offset changed.
pub fn dispatch<P>(slider: &mut ImageSlider<P>, event: &HostEvent) -> bool {
    let sample = event.sample();
    match event {
        HostEvent::MouseDown { .. } => {
            if let Some(s) = sample {
                slider.pointer_down(s);
            }
            false
        }
        HostEvent::TouchStart { .. } => {
            slider.touch_start(sample.as_slice());
            false
        }
        HostEvent::MouseMove { .. } => sample.is_some_and(|s| slider.pointer_move(s)),
        HostEvent::TouchMove { .. } => slider.touch_move(sample.as_slice()),
        HostEvent::MouseUp => {
            slider.pointer_up();
            false
        }
        HostEvent::MouseLeave => {
            slider.pointer_leave();
            false
        }
        HostEvent::TouchEnd => {
            slider.touch_end();
            false
        }
    }
}
