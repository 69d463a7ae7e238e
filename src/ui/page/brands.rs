// SPDX-License-Identifier: MPL-2.0
//! Grid of partner brand logos.

use super::{heading, Message};
use crate::content::fallback::Brand;
use crate::media::{ImageStore, Lookup};
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::widget::{image, Column, Container, Row, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    ContentFit, Element, Length,
};

pub(super) fn view<'a>(brands: &'a [Brand], store: &'a ImageStore) -> Element<'a, Message> {
    let rows = brands.chunks(sizing::BRAND_COLUMNS).map(|chunk| -> Element<'a, Message> {
        Row::with_children(chunk.iter().map(|brand| logo(brand, store)))
            .spacing(spacing::LG)
            .align_y(Vertical::Center)
            .into()
    });

    Column::new()
        .push(heading("Brands I've Worked With", typography::TITLE_LG))
        .push(
            Column::with_children(rows)
                .spacing(spacing::LG)
                .align_x(Horizontal::Center),
        )
        .spacing(spacing::XL)
        .padding([spacing::XL, 0.0])
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
}

fn logo<'a>(brand: &'a Brand, store: &'a ImageStore) -> Element<'a, Message> {
    let height = Length::Fixed(brand.height);
    match store.lookup(&brand.logo) {
        Lookup::Ready(data) => image(data.handle.clone())
            .height(height)
            .width(Length::Fixed(brand.height * data.aspect_ratio()))
            .content_fit(ContentFit::Contain)
            .into(),
        Lookup::Broken(Some(placeholder)) => image(placeholder.handle.clone())
            .height(height)
            .width(height)
            .content_fit(ContentFit::Contain)
            .into(),
        Lookup::Broken(None) | Lookup::Loading => Container::new(Text::new(""))
            .height(height)
            .width(height)
            .into(),
    }
}
