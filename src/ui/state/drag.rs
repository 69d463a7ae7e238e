// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Handles click-and-drag horizontal scrolling of the gallery strip, and
//! tells a click apart from a drag.

use crate::config::DEFAULT_DRAG_SENSITIVITY;

/// Pointer travel (logical px) below which a press-release is still a click.
pub const CLICK_SLOP: f32 = 3.0;

/// Phase of a strip drag.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging {
        /// Pointer X at press, relative to the strip.
        start_x: f32,
        /// Scroll offset at press.
        anchor: f32,
        /// Image under the pointer at press, if any.
        item: Option<usize>,
        /// Whether the pointer left the click slop.
        moved: bool,
    },
}

/// Manages grab-and-drag state for the strip
#[derive(Debug, Clone)]
pub struct DragState {
    phase: DragPhase,
    sensitivity: f32,
}

impl Default for DragState {
    fn default() -> Self {
        Self::new(DEFAULT_DRAG_SENSITIVITY)
    }
}

impl DragState {
    #[must_use]
    pub fn new(sensitivity: f32) -> Self {
        Self {
            phase: DragPhase::Idle,
            sensitivity,
        }
    }

    #[must_use]
    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    /// Starts a drag at pointer `x` with the strip scrolled to `anchor`.
    pub fn press(&mut self, x: f32, anchor: f32, item: Option<usize>) {
        self.phase = DragPhase::Dragging {
            start_x: x,
            anchor,
            item,
            moved: false,
        };
    }

    /// Moves the pointer to `x` and returns the new scroll offset, clamped
    /// to `[0, max_offset]`. Returns `None` when idle.
    pub fn move_to(&mut self, x: f32, max_offset: f32) -> Option<f32> {
        let DragPhase::Dragging {
            start_x,
            anchor,
            moved,
            ..
        } = &mut self.phase
        else {
            return None;
        };

        let travel = x - *start_x;
        if travel.abs() > CLICK_SLOP {
            *moved = true;
        }

        let walk = travel * self.sensitivity;
        Some((*anchor - walk).clamp(0.0, max_offset.max(0.0)))
    }

    /// Ends the drag. Returns the pressed image if this was a click.
    pub fn release(&mut self) -> Option<usize> {
        let phase = std::mem::take(&mut self.phase);
        match phase {
            DragPhase::Dragging {
                item: Some(index),
                moved: false,
                ..
            } => Some(index),
            _ => None,
        }
    }

    /// Pointer left the strip: ends the drag without selecting.
    pub fn leave(&mut self) {
        self.phase = DragPhase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_drag_state_is_idle() {
        let state = DragState::default();
        assert!(!state.is_dragging());
        assert_eq!(state.phase(), DragPhase::Idle);
    }

    #[test]
    fn press_records_start_and_anchor() {
        let mut state = DragState::default();
        state.press(100.0, 40.0, Some(2));

        assert_eq!(
            state.phase(),
            DragPhase::Dragging {
                start_x: 100.0,
                anchor: 40.0,
                item: Some(2),
                moved: false,
            }
        );
    }

    #[test]
    fn move_applies_sensitivity_against_anchor() {
        let mut state = DragState::new(1.5);
        state.press(200.0, 300.0, None);

        // Pointer moved left by 20px: content scrolls right by 30px
        assert_eq!(state.move_to(180.0, 1_000.0), Some(330.0));
        // Pointer moved right by 40px: content scrolls left by 60px
        assert_eq!(state.move_to(240.0, 1_000.0), Some(240.0));
    }

    #[test]
    fn offset_is_clamped_to_scroll_range() {
        let mut state = DragState::new(1.5);
        state.press(0.0, 10.0, None);

        assert_eq!(state.move_to(100.0, 500.0), Some(0.0));
        assert_eq!(state.move_to(-1_000.0, 500.0), Some(500.0));
    }

    #[test]
    fn move_when_idle_does_nothing() {
        let mut state = DragState::default();
        assert_eq!(state.move_to(50.0, 100.0), None);
    }

    #[test]
    fn press_release_without_move_is_a_click() {
        let mut state = DragState::default();
        state.press(10.0, 0.0, Some(1));
        assert_eq!(state.release(), Some(1));
        assert!(!state.is_dragging());
    }

    #[test]
    fn jitter_within_slop_is_still_a_click() {
        let mut state = DragState::default();
        state.press(10.0, 0.0, Some(1));
        state.move_to(12.0, 100.0);
        assert_eq!(state.release(), Some(1));
    }

    #[test]
    fn drag_beyond_slop_is_not_a_click() {
        let mut state = DragState::default();
        state.press(10.0, 0.0, Some(1));
        state.move_to(30.0, 100.0);
        assert_eq!(state.release(), None);
    }

    #[test]
    fn returning_to_start_after_drag_is_not_a_click() {
        let mut state = DragState::default();
        state.press(10.0, 0.0, Some(1));
        state.move_to(60.0, 100.0);
        state.move_to(10.0, 100.0);
        assert_eq!(state.release(), None);
    }

    #[test]
    fn press_on_gap_never_selects() {
        let mut state = DragState::default();
        state.press(10.0, 0.0, None);
        assert_eq!(state.release(), None);
    }

    #[test]
    fn leave_resets_to_idle() {
        let mut state = DragState::default();
        state.press(10.0, 0.0, Some(0));
        state.leave();
        assert!(!state.is_dragging());
        assert_eq!(state.release(), None);
    }
}
