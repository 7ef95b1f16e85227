use iced::widget::{button, column, container, row, scrollable, text, Column};
use iced::{Element, Length};
use std::path::PathBuf;

use crate::{file_label, Message};

const EXPANDED_WIDTH: f32 = 240.0;
const COLLAPSED_WIDTH: f32 = 48.0;

/// Archive list sidebar.
///
/// Lists the picked ZIP files by name; clicking one loads it. Collapsed,
/// the sidebar shrinks to a slim strip holding only the toggle button.
pub fn view(
    archives: &[PathBuf],
    selected: Option<usize>,
    collapsed: bool,
) -> Element<'_, Message> {
    if collapsed {
        let toggle = button(text("»").size(16)).on_press(Message::ToggleSidebar);
        return container(toggle)
            .width(Length::Fixed(COLLAPSED_WIDTH))
            .height(Length::Fill)
            .padding(8)
            .into();
    }

    let header = row![
        text("Archives").size(20).width(Length::Fill),
        button(text("«").size(16)).on_press(Message::ToggleSidebar),
    ]
    .spacing(8);

    let mut listing = Column::new().spacing(4);
    if archives.is_empty() {
        listing = listing.push(text("No archives picked yet.").size(14));
    }
    for (index, path) in archives.iter().enumerate() {
        let is_selected = selected == Some(index);
        listing = listing.push(
            button(text(file_label(path)).size(14))
                .style(move |theme, status| {
                    if is_selected {
                        button::primary(theme, status)
                    } else {
                        button::text(theme, status)
                    }
                })
                .width(Length::Fill)
                .on_press(Message::ArchiveSelected(index)),
        );
    }

    let content = column![
        header,
        button("Open ZIP Files")
            .on_press(Message::PickArchives)
            .padding(10),
        scrollable(listing).height(Length::Fill),
    ]
    .spacing(12);

    container(content)
        .width(Length::Fixed(EXPANDED_WIDTH))
        .height(Length::Fill)
        .padding(12)
        .into()
}
