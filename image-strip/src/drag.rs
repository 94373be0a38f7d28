use crate::PointerSample;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        anchor_x: f64,
    },
}

/// Pointer-drag state machine driving the strip offset.
///
/// The anchor is rebased on every move, so each move contributes only the delta since the
/// previous sample. The tracker does not know the strip length; callers pass the current
/// maximum offset on each move.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragTracker {
    state: DragState,
    offset: f64,
}

impl DragTracker {
    pub fn new(offset: f64) -> Self {
        Self {
            state: DragState::Idle,
            offset: offset.max(0.0),
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    pub fn anchor_x(&self) -> Option<f64> {
        match self.state {
            DragState::Dragging { anchor_x } => Some(anchor_x),
            DragState::Idle => None,
        }
    }

    pub fn pointer_down(&mut self, sample: PointerSample) {
        self.state = DragState::Dragging { anchor_x: sample.x };
    }

    /// Returns `true` when the offset changed.
    pub fn pointer_move(&mut self, sample: PointerSample, max_offset: f64) -> bool {
        let DragState::Dragging { anchor_x } = self.state else {
            return false;
        };

        let delta = anchor_x - sample.x;
        let next = clamp(self.offset + delta, max_offset);
        self.state = DragState::Dragging { anchor_x: sample.x };

        if next == self.offset {
            return false;
        }
        self.offset = next;
        true
    }

    /// Ends a drag (pointer up or pointer leaving the surface). Returns `true` if one was active.
    pub fn release(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        self.state = DragState::Idle;
        was_dragging
    }

    /// Sets the offset directly, clamped to `[0, max_offset]`. Returns `true` when it changed.
    pub fn set_offset_clamped(&mut self, offset: f64, max_offset: f64) -> bool {
        let next = clamp(offset, max_offset);
        if next == self.offset {
            return false;
        }
        self.offset = next;
        true
    }

    pub fn reset(&mut self, offset: f64) {
        *self = Self::new(offset);
    }
}

fn clamp(raw: f64, max_offset: f64) -> f64 {
    if raw.is_nan() {
        return 0.0;
    }
    raw.clamp(0.0, max_offset.max(0.0))
}
