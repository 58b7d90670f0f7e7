// SPDX-License-Identifier: MPL-2.0
//! Swipe-down dismissal sub-component for the modal sheet on compact layouts.

/// Viewport width below which the modal behaves as a swipeable bottom sheet.
pub const COMPACT_BREAKPOINT: f32 = 1024.0;

/// Hard cap on the dismissal distance, in logical pixels.
const DISMISS_DISTANCE_CAP: f32 = 160.0;

/// Fraction of the viewport height that dismisses when smaller than the cap.
const DISMISS_VIEWPORT_FRACTION: f32 = 0.2;

/// Downward displacement needed to dismiss the sheet.
#[must_use]
pub fn dismiss_threshold(viewport_height: f32) -> f32 {
    DISMISS_DISTANCE_CAP.min(viewport_height * DISMISS_VIEWPORT_FRACTION)
}

/// Whether the viewport width counts as compact layout.
#[must_use]
pub fn is_compact(viewport_width: f32) -> bool {
    viewport_width < COMPACT_BREAKPOINT
}

/// Swipe sub-component state.
///
/// Tracks a single active pointer or touch drag on the modal sheet. Upward
/// movement clamps to zero; downward movement is deliberately unclamped, so
/// the sheet can follow the pointer past the viewport edge.
#[derive(Debug, Clone, Default)]
pub struct State {
    dragging: bool,
    start_y: f32,
    offset: f32,
}

/// Messages for the swipe sub-component. Mouse press/move/release and touch
/// finger press/move/lift sequences feed the same three messages.
#[derive(Debug, Clone)]
pub enum Message {
    /// A drag begins at vertical position `y`. The compact-layout predicate
    /// and the modal-open flag are evaluated by the orchestrator at start
    /// time and passed in.
    DragStarted {
        y: f32,
        viewport_width: f32,
        modal_open: bool,
    },
    /// The pointer moved to vertical position `y` during a drag.
    DragMoved { y: f32 },
    /// The drag ended; the dismissal decision uses the viewport height as it
    /// is at release time.
    DragEnded { viewport_height: f32 },
}

/// Effects produced by swipe gestures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// No effect.
    None,
    /// The drag passed the threshold; the orchestrator closes the modal.
    Dismiss,
}

impl State {
    /// Handle a swipe message.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::DragStarted {
                y,
                viewport_width,
                modal_open,
            } => {
                if !is_compact(viewport_width) || !modal_open {
                    return Effect::None;
                }
                self.dragging = true;
                self.start_y = y;
                self.offset = 0.0;
                Effect::None
            }
            Message::DragMoved { y } => {
                if self.dragging {
                    self.offset = (y - self.start_y).max(0.0);
                }
                Effect::None
            }
            Message::DragEnded { viewport_height } => {
                if !self.dragging {
                    return Effect::None;
                }
                self.dragging = false;
                let displacement = self.offset;
                self.offset = 0.0;

                if displacement > dismiss_threshold(viewport_height) {
                    Effect::Dismiss
                } else {
                    Effect::None
                }
            }
        }
    }

    /// Whether a drag is currently in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Live vertical offset applied to the sheet while dragging.
    #[must_use]
    pub fn offset(&self) -> f32 {
        self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started(state: &mut State) {
        state.handle(Message::DragStarted {
            y: 100.0,
            viewport_width: 800.0,
            modal_open: true,
        });
    }

    #[test]
    fn threshold_caps_at_160() {
        assert_eq!(dismiss_threshold(800.0), 160.0);
        assert_eq!(dismiss_threshold(2000.0), 160.0);
    }

    #[test]
    fn threshold_uses_viewport_fraction_when_smaller() {
        assert_eq!(dismiss_threshold(500.0), 100.0);
    }

    #[test]
    fn drag_does_not_start_on_wide_viewport() {
        let mut state = State::default();
        state.handle(Message::DragStarted {
            y: 100.0,
            viewport_width: 1280.0,
            modal_open: true,
        });
        assert!(!state.is_dragging());
    }

    #[test]
    fn drag_does_not_start_while_closed() {
        let mut state = State::default();
        state.handle(Message::DragStarted {
            y: 100.0,
            viewport_width: 800.0,
            modal_open: false,
        });
        assert!(!state.is_dragging());
    }

    #[test]
    fn breakpoint_boundary_is_exclusive() {
        assert!(is_compact(1023.0));
        assert!(!is_compact(1024.0));
    }

    #[test]
    fn downward_movement_tracks_offset() {
        let mut state = State::default();
        started(&mut state);
        state.handle(Message::DragMoved { y: 180.0 });
        assert_eq!(state.offset(), 80.0);
    }

    #[test]
    fn upward_movement_clamps_to_zero() {
        let mut state = State::default();
        started(&mut state);
        state.handle(Message::DragMoved { y: 40.0 });
        assert_eq!(state.offset(), 0.0);
    }

    #[test]
    fn downward_offset_is_not_clamped_to_sheet_height() {
        let mut state = State::default();
        started(&mut state);
        state.handle(Message::DragMoved { y: 3000.0 });
        assert_eq!(state.offset(), 2900.0);
    }

    #[test]
    fn displacement_past_threshold_dismisses() {
        let mut state = State::default();
        started(&mut state);
        state.handle(Message::DragMoved { y: 261.0 }); // d = 161
        let effect = state.handle(Message::DragEnded {
            viewport_height: 800.0,
        });
        assert_eq!(effect, Effect::Dismiss);
        assert!(!state.is_dragging());
        assert_eq!(state.offset(), 0.0);
    }

    #[test]
    fn displacement_below_threshold_snaps_back() {
        let mut state = State::default();
        started(&mut state);
        state.handle(Message::DragMoved { y: 259.0 }); // d = 159
        let effect = state.handle(Message::DragEnded {
            viewport_height: 800.0,
        });
        assert_eq!(effect, Effect::None);
        assert!(!state.is_dragging());
        assert_eq!(state.offset(), 0.0);
    }

    #[test]
    fn displacement_equal_to_threshold_snaps_back() {
        let mut state = State::default();
        started(&mut state);
        state.handle(Message::DragMoved { y: 260.0 }); // d = 160, not strictly greater
        let effect = state.handle(Message::DragEnded {
            viewport_height: 800.0,
        });
        assert_eq!(effect, Effect::None);
    }

    #[test]
    fn end_without_drag_is_ignored() {
        let mut state = State::default();
        let effect = state.handle(Message::DragEnded {
            viewport_height: 800.0,
        });
        assert_eq!(effect, Effect::None);
    }

    #[test]
    fn moves_without_drag_are_ignored() {
        let mut state = State::default();
        state.handle(Message::DragMoved { y: 500.0 });
        assert_eq!(state.offset(), 0.0);
    }

    #[test]
    fn short_viewport_uses_fractional_threshold() {
        let mut state = State::default();
        started(&mut state);
        state.handle(Message::DragMoved { y: 201.0 }); // d = 101 > 0.2 * 500
        let effect = state.handle(Message::DragEnded {
            viewport_height: 500.0,
        });
        assert_eq!(effect, Effect::Dismiss);
    }
}
