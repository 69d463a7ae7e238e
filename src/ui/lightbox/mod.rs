// SPDX-License-Identifier: MPL-2.0
//! Fullscreen single-image overlay.
//!
//! # Lifecycle
//!
//! - **Closed**: no [`Selection`].
//! - **Opening**: a selection exists but the overlay is still invisible; the
//!   parent runs the delay from [`Effect::ScheduleReveal`] and answers with
//!   [`Message::Revealed`].
//! - **Open**: visible. Arrow keys and controls move through the images;
//!   Escape, the close control and backdrop clicks close it.
//!
//! Each opening carries a generation so a reveal from an earlier opening
//! cannot show a later one early. The reveal starts a fade and scale-up
//! ([`REVEAL_DURATION`]) that the view samples through [`State::progress`].

mod view;

pub use view::view;

use crate::content::ImageRef;
use iced::animation::{Animation, Easing};
use iced::keyboard::{self, key::Named, Key};
use iced::time::Instant;
use iced::{event, window, Event, Subscription};
use std::time::Duration;

/// Length of the entry fade and scale-up.
pub const REVEAL_DURATION: Duration = Duration::from_millis(300);

/// Image scale at the start of the entry transition.
pub const INITIAL_SCALE: f32 = 0.95;

/// Images of the strip plus the one shown fullscreen.
///
/// The shown image is always `images[index]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    images: Vec<ImageRef>,
    index: usize,
}

impl Selection {
    /// Returns `None` if `index` is out of range.
    #[must_use]
    pub fn new(images: Vec<ImageRef>, index: usize) -> Option<Self> {
        (index < images.len()).then_some(Self { images, index })
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    #[must_use]
    pub fn images(&self) -> &[ImageRef] {
        &self.images
    }

    #[must_use]
    pub fn current(&self) -> &ImageRef {
        &self.images[self.index]
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.index > 0
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.index + 1 < self.images.len()
    }

    /// Moves to `index` if it is in range. Returns whether it moved.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index < self.images.len() {
            self.index = index;
            true
        } else {
            false
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Closed,
    Opening,
    Open,
}

#[derive(Debug, Clone)]
pub enum Message {
    Open(Selection),
    /// Reveal delay for the given opening elapsed at the given instant.
    Revealed(u64, Instant),
    /// Animation frame.
    Tick(Instant),
    Close,
    /// Click on the dimmed area around the image.
    BackdropPressed,
    /// Click on the image itself.
    ContentPressed,
    Previous,
    Next,
    GoTo(usize),
    KeyPressed(Key),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Send [`Message::Revealed`] with this generation after the reveal delay.
    ScheduleReveal(u64),
}

#[derive(Debug, Clone)]
pub struct State {
    selection: Option<Selection>,
    visible: bool,
    generation: u64,
    reveal: Animation<bool>,
    now: Instant,
}

impl Default for State {
    fn default() -> Self {
        Self {
            selection: None,
            visible: false,
            generation: 0,
            reveal: hidden(),
            now: Instant::now(),
        }
    }
}

fn hidden() -> Animation<bool> {
    Animation::new(false)
        .duration(REVEAL_DURATION)
        .easing(Easing::EaseOut)
}

impl State {
    #[must_use]
    pub fn phase(&self) -> Phase {
        match (&self.selection, self.visible) {
            (None, _) => Phase::Closed,
            (Some(_), false) => Phase::Opening,
            (Some(_), true) => Phase::Open,
        }
    }

    #[must_use]
    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Instant of the latest frame or reveal.
    #[must_use]
    pub fn now(&self) -> Instant {
        self.now
    }

    /// Entry transition progress at `at`, from 0 (hidden) to 1 (shown).
    #[must_use]
    pub fn progress(&self, at: Instant) -> f32 {
        self.reveal.interpolate(0.0, 1.0, at)
    }

    /// Image scale at `at`, from [`INITIAL_SCALE`] to 1.
    #[must_use]
    pub fn scale(&self, at: Instant) -> f32 {
        self.reveal.interpolate(INITIAL_SCALE, 1.0, at)
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.reveal.is_animating(self.now)
    }

    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::Open(selection) => {
                self.generation += 1;
                self.selection = Some(selection);
                self.visible = false;
                self.reveal = hidden();
                Effect::ScheduleReveal(self.generation)
            }
            Message::Revealed(generation, at) => {
                if generation == self.generation && self.selection.is_some() && !self.visible {
                    self.visible = true;
                    self.now = at;
                    self.reveal.go_mut(true, at);
                }
                Effect::None
            }
            Message::Tick(at) => {
                self.now = at;
                Effect::None
            }
            Message::Close | Message::BackdropPressed => {
                self.close();
                Effect::None
            }
            Message::ContentPressed => Effect::None,
            Message::Previous => {
                if let Some(index) = self.current_index().and_then(|i| i.checked_sub(1)) {
                    self.go_to(index);
                }
                Effect::None
            }
            Message::Next => {
                if let Some(index) = self.current_index() {
                    self.go_to(index + 1);
                }
                Effect::None
            }
            Message::GoTo(index) => {
                self.go_to(index);
                Effect::None
            }
            Message::KeyPressed(key) => {
                if self.phase() != Phase::Open {
                    return Effect::None;
                }
                match key {
                    Key::Named(Named::Escape) => self.handle(Message::Close),
                    Key::Named(Named::ArrowRight) => self.handle(Message::Next),
                    Key::Named(Named::ArrowLeft) => self.handle(Message::Previous),
                    _ => Effect::None,
                }
            }
        }
    }

    fn current_index(&self) -> Option<usize> {
        self.selection.as_ref().map(Selection::index)
    }

    fn go_to(&mut self, index: usize) {
        if let Some(selection) = self.selection.as_mut() {
            if !selection.go_to(index) {
                tracing::trace!(index, len = selection.len(), "lightbox index out of range");
            }
        }
    }

    fn close(&mut self) {
        self.selection = None;
        self.visible = false;
        self.reveal = hidden();
    }
}

/// Keyboard listener while open, plus frame ticks while the entry
/// transition runs.
pub fn subscription(state: &State) -> Subscription<Message> {
    if state.phase() != Phase::Open {
        return Subscription::none();
    }

    let keys = event::listen_with(|event, _status, _window| match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
            Some(Message::KeyPressed(key))
        }
        _ => None,
    });

    if state.is_animating() {
        Subscription::batch([keys, window::frames().map(Message::Tick)])
    } else {
        keys
    }
}
