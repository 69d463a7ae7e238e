// SPDX-License-Identifier: MPL-2.0
//! "My Socials" footer.

use super::{heading, Message};
use crate::content::fallback::{SocialLink, Source};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, Column, Row, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Element, Length,
};

pub(super) fn view<'a>(links: &'a [SocialLink], scheme: &ColorScheme) -> Element<'a, Message> {
    let row = Row::with_children(links.iter().map(|l| link(l, scheme)))
        .spacing(spacing::MD)
        .align_y(Vertical::Center);

    Column::new()
        .push(heading("My Socials", typography::TITLE_SM))
        .push(row)
        .spacing(spacing::MD)
        .padding([spacing::LG, 0.0])
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
}

fn link<'a>(link: &'a SocialLink, scheme: &ColorScheme) -> Element<'a, Message> {
    let tint = match link.url.source {
        Source::Content => scheme.accent,
        Source::Default => scheme.neutral,
    };

    let label = Row::new()
        .push(
            icons::social(link.kind)
                .width(Length::Fixed(sizing::ICON_MD))
                .height(Length::Fixed(sizing::ICON_MD))
                .style(styles::svg::tinted(tint)),
        )
        .push(Text::new(link.kind.label()).size(typography::BODY))
        .spacing(spacing::XS)
        .align_y(Vertical::Center);

    button(label)
        .padding(spacing::XXS)
        .style(styles::button_link(link.url.source))
        .on_press(Message::LinkActivated(link.url.value.clone()))
        .into()
}
