// SPDX-License-Identifier: MPL-2.0
//! "Let's Talk!" section with the mail link.

use super::{heading, Message};
use crate::content::fallback::Contact;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Text};
use iced::{alignment::Horizontal, Element, Length};

pub(super) fn view(contact: &Contact) -> Element<'_, Message> {
    let cta = button(Text::new("Contact Me :)").size(typography::BODY))
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::contact)
        .on_press(Message::LinkActivated(contact.href()));

    Column::new()
        .push(heading("Let's Talk!", typography::TITLE_LG))
        .push(cta)
        .spacing(spacing::MD)
        .padding([spacing::XL, 0.0])
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
}
