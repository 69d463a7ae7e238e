// SPDX-License-Identifier: MPL-2.0
//! Gallery strip rendering.

use super::{Message, STRIP_ID};
use crate::content::ImageRef;
use crate::media::{ImageStore, Lookup};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::mouse;
use iced::widget::scrollable::{Direction, Scrollbar, Viewport};
use iced::widget::{image, mouse_area, Container, Id, Row, Scrollable, Text};
use iced::{alignment::Horizontal, alignment::Vertical, Element, Length};

pub struct ViewContext<'a> {
    pub images: &'a [ImageRef],
    pub store: &'a ImageStore,
    pub image_height: f32,
    pub is_dragging: bool,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let store = ctx.store;
    let height = ctx.image_height;
    let items = ctx
        .images
        .iter()
        .enumerate()
        .map(|(index, image_ref)| -> Element<'a, Message> {
            let tile = tile(store.lookup(image_ref), height);
            mouse_area(tile)
                .on_press(Message::ItemPressed(index))
                .into()
        });

    let strip = Row::with_children(items)
        .spacing(spacing::MD)
        .padding([0.0, spacing::MD])
        .align_y(Vertical::Center);

    let scrollable = Scrollable::new(strip)
        .id(Id::new(STRIP_ID))
        .width(Length::Fill)
        .direction(Direction::Horizontal(Scrollbar::hidden()))
        .on_scroll(|viewport: Viewport| {
            let bounds = viewport.bounds();
            let content = viewport.content_bounds();
            Message::Scrolled {
                offset: viewport.absolute_offset().x,
                max_offset: (content.width - bounds.width).max(0.0),
            }
        });

    let interaction = if ctx.is_dragging {
        mouse::Interaction::Grabbing
    } else {
        mouse::Interaction::Grab
    };

    mouse_area(scrollable)
        .on_press(Message::StripPressed)
        .on_release(Message::Released)
        .on_move(Message::CursorMoved)
        .on_exit(Message::Exited)
        .interaction(interaction)
        .into()
}

fn tile<'a>(lookup: Lookup<'a>, height: f32) -> Element<'a, Message> {
    match lookup {
        Lookup::Ready(data) => image(data.handle.clone())
            .height(Length::Fixed(height))
            .width(Length::Fixed(height * data.aspect_ratio()))
            .into(),
        Lookup::Broken(Some(placeholder)) => image(placeholder.handle.clone())
            .height(Length::Fixed(height))
            .width(Length::Fixed(height))
            .into(),
        Lookup::Broken(None) => Container::new(Text::new("Image unavailable").size(typography::BODY))
            .width(Length::Fixed(height))
            .height(Length::Fixed(height))
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(styles::container::placeholder)
            .into(),
        Lookup::Loading => Container::new(Text::new(""))
            .width(Length::Fixed(height * 0.75))
            .height(Length::Fixed(height))
            .style(styles::container::placeholder)
            .into(),
    }
}
