use iced::widget::{button, center, column, container, image, opaque, row, text};
use iced::{Alignment, Border, Color, Element, Length, Theme};

use crate::state::gallery::DisplayedImage;
use crate::Message;

/// Full-size viewer laid over the gallery.
///
/// Previous/next stop dead at the list boundaries; the matching button is
/// disabled instead of wrapping around.
pub fn view<'a>(current: &'a DisplayedImage, index: usize, total: usize) -> Element<'a, Message> {
    let header = row![
        text(&current.name).size(16).width(Length::Fill),
        text(format!("{} / {}", index + 1, total)).size(16),
    ]
    .spacing(12);

    let viewer = image(current.handle.clone())
        .width(Length::Fill)
        .height(Length::Fixed(560.0));

    let controls = row![
        button("< Previous")
            .on_press_maybe((index > 0).then_some(Message::PreviousImage))
            .padding(10),
        button("Close").on_press(Message::ClosePopup).padding(10),
        button("Next >")
            .on_press_maybe((index + 1 < total).then_some(Message::NextImage))
            .padding(10),
    ]
    .spacing(12);

    let card = container(
        column![header, viewer, controls]
            .spacing(12)
            .align_x(Alignment::Center),
    )
    .padding(16)
    .max_width(900)
    .style(card_style);

    opaque(center(card).style(backdrop_style))
}

fn card_style(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(theme.palette().background.into()),
        border: Border {
            radius: 8.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

fn backdrop_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.85).into()),
        ..container::Style::default()
    }
}
