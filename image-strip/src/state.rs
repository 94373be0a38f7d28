/// A lightweight snapshot of the slider's scroll and drag state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SliderState {
    pub offset: f64,
    pub is_dragging: bool,
    /// Last pointer x seen during the current drag. Meaningless when `is_dragging` is false.
    pub drag_anchor_x: f64,
}
