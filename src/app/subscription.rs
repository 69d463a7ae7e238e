// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Window events are always routed. Keyboard events only reach the lightbox
//! while it is open, and frame ticks only while its entry transition runs.

use super::Message;
use crate::ui::lightbox;
use iced::{event, window, Subscription};

/// Window lifecycle events: first size, resizes and close requests.
pub fn window_events() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| match event {
        event::Event::Window(window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        event::Event::Window(window::Event::Opened { size, .. })
        | event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        _ => None,
    })
}

pub fn create(lightbox: &lightbox::State) -> Subscription<Message> {
    Subscription::batch([
        window_events(),
        lightbox::subscription(lightbox).map(Message::Lightbox),
    ])
}
