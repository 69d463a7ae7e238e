// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is always drawn; the lightbox stacks on top of it while a
//! selection is open.

use super::Message;
use crate::content::ResolvedPage;
use crate::media::ImageStore;
use crate::ui::gallery;
use crate::ui::lightbox;
use crate::ui::page;
use crate::ui::theming::ColorScheme;
use iced::widget::Stack;
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub page: &'a ResolvedPage,
    pub store: &'a ImageStore,
    pub gallery: &'a gallery::State,
    pub lightbox: &'a lightbox::State,
    pub gallery_image_height: f32,
    pub window_height: f32,
    pub scheme: ColorScheme,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let page = page::view(page::ViewContext {
        page: ctx.page,
        store: ctx.store,
        gallery: ctx.gallery,
        gallery_image_height: ctx.gallery_image_height,
        header_height: ctx.window_height,
        scheme: ctx.scheme,
    })
    .map(Message::Page);

    match lightbox::view(ctx.lightbox, ctx.store) {
        Some(overlay) => Stack::new()
            .push(page)
            .push(overlay.map(Message::Lightbox))
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => page,
    }
}
