// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Components return effects; this module turns them into tasks and keeps
//! the page, gallery and lightbox consistent with each other.

use super::{App, Message};
use crate::content::{self, loader};
use crate::links;
use crate::ui::gallery;
use crate::ui::lightbox::{self, Selection};
use crate::ui::page;
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::time::Instant;
use iced::Task;

impl App {
    pub(super) fn handle_loader(&mut self, message: loader::Message) -> Task<Message> {
        match self.loader.handle(message) {
            loader::Effect::DocumentReplaced => self.refresh_page(),
            loader::Effect::None => Task::none(),
        }
    }

    pub(super) fn handle_page(&mut self, message: page::Message) -> Task<Message> {
        match message {
            page::Message::Gallery(msg) => self.handle_gallery(msg),
            page::Message::LinkActivated(target) => {
                Task::perform(links::open_external(target), Message::LinkOpened)
            }
        }
    }

    fn handle_gallery(&mut self, message: gallery::Message) -> Task<Message> {
        match self.gallery.handle(message) {
            gallery::Effect::None => Task::none(),
            gallery::Effect::ScrollTo(offset) => {
                operation::snap_to(Id::new(gallery::STRIP_ID), offset)
            }
            gallery::Effect::Select(index) => {
                match Selection::new(self.page.gallery.value.clone(), index) {
                    Some(selection) => {
                        self.handle_lightbox(lightbox::Message::Open(selection))
                    }
                    None => {
                        tracing::debug!(index, "gallery selection out of range");
                        Task::none()
                    }
                }
            }
        }
    }

    pub(super) fn handle_lightbox(&mut self, message: lightbox::Message) -> Task<Message> {
        match self.lightbox.handle(message) {
            lightbox::Effect::None => Task::none(),
            lightbox::Effect::ScheduleReveal(generation) => {
                let delay = self.config.lightbox.reveal_delay();
                Task::perform(
                    async move {
                        tokio::time::sleep(delay).await;
                        (generation, Instant::now())
                    },
                    |(generation, at)| Message::Lightbox(lightbox::Message::Revealed(generation, at)),
                )
            }
        }
    }

    /// Re-resolves the page from the loader's document.
    fn refresh_page(&mut self) -> Task<Message> {
        self.page = content::resolve(self.loader.document());
        self.gallery.reset();

        Task::batch([
            operation::snap_to(Id::new(gallery::STRIP_ID), RelativeOffset { x: 0.0, y: 0.0 }),
            self.request_images(),
        ])
    }

    /// Starts loads for every page image the store has not seen yet.
    pub(super) fn request_images(&mut self) -> Task<Message> {
        let loads = self.images.request(self.page.images());
        Task::batch(loads.into_iter().map(|(image, load)| {
            Task::perform(load, move |result| Message::ImageLoaded(image.clone(), result))
        }))
    }
}
