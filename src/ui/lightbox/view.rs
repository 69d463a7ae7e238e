// SPDX-License-Identifier: MPL-2.0
//! Lightbox rendering.

use super::{Message, Selection, State};
use crate::media::{ImageStore, Lookup};
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, image, mouse_area, opaque, Column, Container, Row, Space, Stack, Svg, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    ContentFit, Element, Length,
};

/// Portions the scaled frame is divided into.
const SCALE_PORTIONS: u16 = 1000;

/// Overlay controls drawn above the backdrop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Control {
    Close,
    Previous,
    Next,
}

/// Controls shown for a selection. None until the lightbox is revealed, and
/// no arrow past either end of the gallery.
pub(super) fn controls(selection: &Selection, visible: bool) -> Vec<Control> {
    if !visible {
        return Vec::new();
    }

    let mut controls = vec![Control::Close];
    if selection.has_previous() {
        controls.push(Control::Previous);
    }
    if selection.has_next() {
        controls.push(Control::Next);
    }
    controls
}

/// Renders the overlay, or `None` while closed.
pub fn view<'a>(state: &'a State, store: &'a ImageStore) -> Option<Element<'a, Message>> {
    let selection = state.selection()?;
    let now = state.now();
    let progress = state.progress(now);
    let image_opacity = opacity::TRANSPARENT + (opacity::OPAQUE - opacity::TRANSPARENT) * progress;

    let content: Element<'a, Message> = match store.lookup(selection.current()) {
        Lookup::Ready(data) => image(data.handle.clone())
            .content_fit(ContentFit::Contain)
            .opacity(image_opacity)
            .into(),
        Lookup::Broken(Some(placeholder)) => image(placeholder.handle.clone())
            .content_fit(ContentFit::Contain)
            .opacity(image_opacity)
            .into(),
        Lookup::Broken(None) => placeholder(
            Text::new("Image unavailable")
                .size(typography::BODY)
                .color(palette::WHITE),
        ),
        Lookup::Loading => placeholder(Space::new()),
    };

    // Presses on the image are swallowed so they never reach the backdrop
    let content = mouse_area(content).on_press(Message::ContentPressed);

    let backdrop = mouse_area(
        Container::new(scaled(content.into(), state.scale(now)))
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::SECTION)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(styles::container::backdrop(progress)),
    )
    .on_press(Message::BackdropPressed);

    let stack = controls(selection, state.is_visible()).into_iter().fold(
        Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(backdrop),
        |stack, control| stack.push(layer(control)),
    );

    Some(opaque(stack))
}

/// Fills the image frame so presses while loading land on the content.
fn placeholder<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

/// Centers `content` in a frame `scale` times the available size.
fn scaled(content: Element<'_, Message>, scale: f32) -> Element<'_, Message> {
    let inner = (scale.clamp(0.0, 1.0) * f32::from(SCALE_PORTIONS)).round() as u16;
    let margin = (SCALE_PORTIONS - inner) / 2;
    if margin == 0 {
        return content;
    }

    let frame = Container::new(content)
        .width(Length::FillPortion(inner))
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center);

    Column::new()
        .push(Space::new().height(Length::FillPortion(margin)))
        .push(
            Row::new()
                .push(Space::new().width(Length::FillPortion(margin)))
                .push(frame)
                .push(Space::new().width(Length::FillPortion(margin)))
                .height(Length::FillPortion(inner)),
        )
        .push(Space::new().height(Length::FillPortion(margin)))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn layer<'a>(control: Control) -> Element<'a, Message> {
    match control {
        Control::Close => Container::new(button_for(icons::close(), Message::Close))
            .width(Length::Fill)
            .padding(spacing::LG)
            .align_x(Horizontal::Right)
            .into(),
        Control::Previous => Container::new(button_for(icons::chevron_left(), Message::Previous))
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::LG)
            .align_x(Horizontal::Left)
            .align_y(Vertical::Center)
            .into(),
        Control::Next => Container::new(button_for(icons::chevron_right(), Message::Next))
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::LG)
            .align_x(Horizontal::Right)
            .align_y(Vertical::Center)
            .into(),
    }
}

fn button_for<'a>(icon: Svg<'a>, on_press: Message) -> Element<'a, Message> {
    button(
        icon.width(Length::Fixed(sizing::ICON_MD))
            .height(Length::Fixed(sizing::ICON_MD))
            .style(styles::svg::tinted(palette::WHITE)),
    )
    .width(Length::Fixed(sizing::LIGHTBOX_BUTTON))
    .height(Length::Fixed(sizing::LIGHTBOX_BUTTON))
    .padding(spacing::XS)
    .on_press(on_press)
    .style(styles::button_overlay(
        palette::WHITE,
        opacity::OVERLAY_MEDIUM,
        opacity::OVERLAY_STRONG,
    ))
    .into()
}
