// SPDX-License-Identifier: MPL-2.0
//! Full-height hero: headshot as the backdrop, name centered on top.

use super::Message;
use crate::content::ResolvedPage;
use crate::media::{ImageStore, Lookup};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{image, Container, Stack, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    font, ContentFit, Element, Font, Length,
};

pub(super) fn view<'a>(
    page: &'a ResolvedPage,
    store: &'a ImageStore,
    height: f32,
) -> Element<'a, Message> {
    let backdrop: Element<'a, Message> = match store.lookup(&page.headshot.value) {
        Lookup::Ready(data) => image(data.handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Cover)
            .into(),
        Lookup::Broken(Some(placeholder)) => image(placeholder.handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Cover)
            .into(),
        Lookup::Broken(None) | Lookup::Loading => Container::new(Text::new(""))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::placeholder)
            .into(),
    };

    let name = Container::new(
        Text::new(page.name)
            .size(typography::HERO)
            .font(Font {
                weight: font::Weight::Bold,
                ..Font::DEFAULT
            }),
    )
    .padding([spacing::SM, spacing::XL])
    .style(styles::container::banner);

    let overlay = Container::new(name)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .push(backdrop)
        .push(overlay)
        .into()
}
