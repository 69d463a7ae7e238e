// SPDX-License-Identifier: MPL-2.0
//! Horizontal photo strip with click-and-drag scrolling.
//!
//! The strip reports pointer activity as messages; [`State::handle`] runs them
//! through the [`DragState`] machine and answers with an [`Effect`]: scroll the
//! strip, select an image, or nothing.

mod view;

pub use view::{view, ViewContext};

use crate::ui::state::DragState;
use iced::widget::scrollable::RelativeOffset;
use iced::Point;

/// Widget id of the strip's scrollable.
pub const STRIP_ID: &str = "gallery-strip";

#[derive(Debug, Clone)]
pub enum Message {
    /// Primary button pressed over image `index`.
    ItemPressed(usize),
    /// Primary button pressed over the strip, outside any image.
    StripPressed,
    /// Pointer moved; position relative to the strip.
    CursorMoved(Point),
    Released,
    /// Pointer left the strip.
    Exited,
    /// The scrollable reported its viewport.
    Scrolled { offset: f32, max_offset: f32 },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Scroll the strip to this position.
    ScrollTo(RelativeOffset),
    /// Image `index` was clicked.
    Select(usize),
}

#[derive(Debug, Clone, Default)]
pub struct State {
    drag: DragState,
    cursor_x: Option<f32>,
    /// Press seen before any cursor position; starts on the next move.
    deferred_press: Option<Option<usize>>,
    offset: f32,
    max_offset: f32,
}

impl State {
    #[must_use]
    pub fn new(sensitivity: f32) -> Self {
        Self {
            drag: DragState::new(sensitivity),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Current horizontal scroll offset in logical pixels.
    #[must_use]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    #[must_use]
    pub fn max_offset(&self) -> f32 {
        self.max_offset
    }

    /// Back to the start of a fresh strip.
    pub fn reset(&mut self) {
        self.drag.leave();
        self.deferred_press = None;
        self.offset = 0.0;
    }

    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::ItemPressed(index) => self.press(Some(index)),
            Message::StripPressed => self.press(None),
            Message::CursorMoved(position) => {
                self.cursor_x = Some(position.x);

                if let Some(item) = self.deferred_press.take() {
                    self.drag.press(position.x, self.offset, item);
                    return Effect::None;
                }

                match self.drag.move_to(position.x, self.max_offset) {
                    Some(offset) => {
                        self.offset = offset;
                        Effect::ScrollTo(self.relative_offset())
                    }
                    None => Effect::None,
                }
            }
            Message::Released => {
                self.deferred_press.take();
                match self.drag.release() {
                    Some(index) => Effect::Select(index),
                    None => Effect::None,
                }
            }
            Message::Exited => {
                self.cursor_x = None;
                self.deferred_press = None;
                self.drag.leave();
                Effect::None
            }
            Message::Scrolled { offset, max_offset } => {
                self.offset = offset;
                self.max_offset = max_offset.max(0.0);
                Effect::None
            }
        }
    }

    fn press(&mut self, item: Option<usize>) -> Effect {
        match self.cursor_x {
            Some(x) => self.drag.press(x, self.offset, item),
            None => self.deferred_press = Some(item),
        }
        Effect::None
    }

    fn relative_offset(&self) -> RelativeOffset {
        let x = if self.max_offset > 0.0 {
            self.offset / self.max_offset
        } else {
            0.0
        };
        RelativeOffset { x, y: 0.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(max_offset: f32) -> State {
        let mut state = State::new(1.5);
        state.handle(Message::Scrolled {
            offset: 0.0,
            max_offset,
        });
        state
    }

    fn move_to(state: &mut State, x: f32) -> Effect {
        state.handle(Message::CursorMoved(Point::new(x, 10.0)))
    }

    #[test]
    fn drag_scrolls_by_scaled_delta() {
        let mut state = strip(1_000.0);
        state.handle(Message::Scrolled {
            offset: 400.0,
            max_offset: 1_000.0,
        });
        move_to(&mut state, 300.0);

        state.handle(Message::ItemPressed(0));
        let effect = move_to(&mut state, 200.0);
        state.handle(Message::Released);

        // 400 - (200 - 300) * 1.5
        assert_eq!(state.offset(), 550.0);
        assert_eq!(effect, Effect::ScrollTo(RelativeOffset { x: 0.55, y: 0.0 }));
    }

    #[test]
    fn drag_does_not_select() {
        let mut state = strip(1_000.0);
        move_to(&mut state, 100.0);
        state.handle(Message::ItemPressed(2));
        move_to(&mut state, 20.0);

        assert_eq!(state.handle(Message::Released), Effect::None);
    }

    #[test]
    fn click_selects_pressed_image() {
        let mut state = strip(1_000.0);
        move_to(&mut state, 150.0);

        state.handle(Message::ItemPressed(1));
        assert_eq!(state.handle(Message::Released), Effect::Select(1));
        assert!(!state.is_dragging());
    }

    #[test]
    fn click_on_gap_selects_nothing() {
        let mut state = strip(1_000.0);
        move_to(&mut state, 150.0);

        state.handle(Message::StripPressed);
        assert_eq!(state.handle(Message::Released), Effect::None);
    }

    #[test]
    fn leaving_the_strip_ends_the_drag() {
        let mut state = strip(1_000.0);
        move_to(&mut state, 150.0);
        state.handle(Message::ItemPressed(0));
        state.handle(Message::Exited);

        assert!(!state.is_dragging());
        assert_eq!(move_to(&mut state, 10.0), Effect::None);
        assert_eq!(state.handle(Message::Released), Effect::None);
    }

    #[test]
    fn moving_without_press_does_not_scroll() {
        let mut state = strip(1_000.0);
        assert_eq!(move_to(&mut state, 10.0), Effect::None);
        assert_eq!(move_to(&mut state, 500.0), Effect::None);
        assert_eq!(state.offset(), 0.0);
    }

    #[test]
    fn press_before_any_cursor_position_starts_on_first_move() {
        let mut state = strip(1_000.0);
        state.handle(Message::ItemPressed(0));

        assert_eq!(move_to(&mut state, 100.0), Effect::None);
        assert!(state.is_dragging());
        move_to(&mut state, 90.0);
        assert_eq!(state.offset(), 15.0);
    }

    #[test]
    fn offset_never_leaves_scroll_range() {
        let mut state = strip(200.0);
        move_to(&mut state, 0.0);
        state.handle(Message::StripPressed);

        move_to(&mut state, -1_000.0);
        assert_eq!(state.offset(), 200.0);
        move_to(&mut state, 1_000.0);
        assert_eq!(state.offset(), 0.0);
    }

    #[test]
    fn strip_without_overflow_scrolls_to_origin() {
        let mut state = strip(0.0);
        move_to(&mut state, 50.0);
        state.handle(Message::StripPressed);

        let effect = move_to(&mut state, 0.0);
        assert_eq!(effect, Effect::ScrollTo(RelativeOffset { x: 0.0, y: 0.0 }));
    }

    #[test]
    fn reset_returns_to_origin() {
        let mut state = strip(1_000.0);
        state.handle(Message::Scrolled {
            offset: 300.0,
            max_offset: 1_000.0,
        });
        state.reset();
        assert_eq!(state.offset(), 0.0);
    }
}
