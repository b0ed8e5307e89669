//! Viewport gestures.
//!
//! The host forwards raw pointer events to [`InputState`], which folds them
//! into at most one gesture of each kind per frame. The driver drains the
//! folded gestures with [`InputState::take_gestures`].

/// A logical viewport gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gesture {
    /// Pointer drag in viewport pixels.
    Drag { dx: f32, dy: f32 },
    /// Pinch or trackpad magnification; `1.0` means no change.
    Pinch { magnification: f32 },
    /// Two-finger or middle-button pan in viewport pixels.
    Pan { dx: f32, dy: f32 },
    /// Click or tap on empty space.
    Tap,
}

/// Per-frame gesture accumulator.
#[derive(Debug, Clone, PartialEq)]
pub struct InputState {
    /// Drag movement since last frame
    drag_delta: (f32, f32),
    /// Pan movement since last frame
    pan_delta: (f32, f32),
    /// Combined magnification since last frame
    magnification: f32,
    tapped: bool,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            drag_delta: (0.0, 0.0),
            pan_delta: (0.0, 0.0),
            magnification: 1.0,
            tapped: false,
        }
    }
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a pointer drag event.
    pub fn on_drag(&mut self, dx: f32, dy: f32) {
        self.drag_delta.0 += dx;
        self.drag_delta.1 += dy;
    }

    /// Handle a pan event.
    pub fn on_pan(&mut self, dx: f32, dy: f32) {
        self.pan_delta.0 += dx;
        self.pan_delta.1 += dy;
    }

    /// Handle a magnification event. Successive pinches multiply.
    pub fn on_pinch(&mut self, magnification: f32) {
        if magnification.is_finite() && magnification > 0.0 {
            self.magnification *= magnification;
        }
    }

    pub fn on_tap(&mut self) {
        self.tapped = true;
    }

    /// Whether anything arrived since the last drain.
    pub fn has_pending(&self) -> bool {
        *self != Self::default()
    }

    /// Return the folded gestures and clear per-frame state.
    ///
    /// A tap comes first so a deselect is not undone by the same frame's
    /// camera moves.
    pub fn take_gestures(&mut self) -> Vec<Gesture> {
        let state = std::mem::take(self);
        let mut gestures = Vec::new();

        if state.tapped {
            gestures.push(Gesture::Tap);
        }
        if state.drag_delta != (0.0, 0.0) {
            let (dx, dy) = state.drag_delta;
            gestures.push(Gesture::Drag { dx, dy });
        }
        if state.pan_delta != (0.0, 0.0) {
            let (dx, dy) = state.pan_delta;
            gestures.push(Gesture::Pan { dx, dy });
        }
        if state.magnification != 1.0 {
            gestures.push(Gesture::Pinch {
                magnification: state.magnification,
            });
        }
        gestures
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_frame_has_no_gestures() {
        let mut input = InputState::new();
        assert!(!input.has_pending());
        assert!(input.take_gestures().is_empty());
    }

    #[test]
    fn test_drags_accumulate() {
        let mut input = InputState::new();
        input.on_drag(3.0, 1.0);
        input.on_drag(2.0, -4.0);

        assert_eq!(
            input.take_gestures(),
            vec![Gesture::Drag { dx: 5.0, dy: -3.0 }]
        );
        assert!(!input.has_pending());
    }

    #[test]
    fn test_pinches_multiply() {
        let mut input = InputState::new();
        input.on_pinch(2.0);
        input.on_pinch(0.75);
        input.on_pinch(0.0);

        assert_eq!(
            input.take_gestures(),
            vec![Gesture::Pinch { magnification: 1.5 }]
        );
    }

    #[test]
    fn test_tap_comes_first() {
        let mut input = InputState::new();
        input.on_pan(1.0, 0.0);
        input.on_tap();

        let gestures = input.take_gestures();
        assert_eq!(gestures[0], Gesture::Tap);
        assert_eq!(gestures[1], Gesture::Pan { dx: 1.0, dy: 0.0 });
    }
}
