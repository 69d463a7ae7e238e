// SPDX-License-Identifier: MPL-2.0
//! Single-view portfolio page.
//!
//! Sections, top to bottom: hero header with the headshot and name,
//! description and photo strip, brand logos, contact button, social links.
//! Everything renders from a [`ResolvedPage`], so every field already has its
//! fallback applied.

mod brands;
mod contact;
mod header;
mod socials;

use crate::content::ResolvedPage;
use crate::media::ImageStore;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::gallery;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{Column, Container, Scrollable, Text};
use iced::{alignment::Horizontal, font, Element, Font, Length};

#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
    /// A social or contact link was activated.
    LinkActivated(String),
}

pub struct ViewContext<'a> {
    pub page: &'a ResolvedPage,
    pub store: &'a ImageStore,
    pub gallery: &'a gallery::State,
    pub gallery_image_height: f32,
    /// Height of the hero header (the window height).
    pub header_height: f32,
    pub scheme: ColorScheme,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let photos = Column::new()
        .push(heading("My Photos", typography::TITLE_LG))
        .push(
            Text::new(ctx.page.description.value.as_str())
                .size(typography::BODY)
                .width(Length::Fixed(sizing::DESCRIPTION_MAX_WIDTH))
                .align_x(Horizontal::Center),
        )
        .push(
            gallery::view(gallery::ViewContext {
                images: &ctx.page.gallery.value,
                store: ctx.store,
                image_height: ctx.gallery_image_height,
                is_dragging: ctx.gallery.is_dragging(),
            })
            .map(Message::Gallery),
        )
        .spacing(spacing::MD)
        .padding([spacing::LG, 0.0])
        .align_x(Horizontal::Center);

    let content = Column::new()
        .push(header::view(ctx.page, ctx.store, ctx.header_height))
        .push(photos)
        .push(brands::view(&ctx.page.brands, ctx.store))
        .push(contact::view(&ctx.page.contact))
        .push(socials::view(&ctx.page.socials, &ctx.scheme))
        .spacing(spacing::XL)
        .width(Length::Fill)
        .align_x(Horizontal::Center);

    Container::new(Scrollable::new(content).width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::surface)
        .into()
}

/// Centered bold section heading.
fn heading<'a>(label: &'a str, size: f32) -> Element<'a, Message> {
    Text::new(label)
        .size(size)
        .font(Font {
            weight: font::Weight::Semibold,
            ..Font::DEFAULT
        })
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
}
