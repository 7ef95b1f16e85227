use iced::widget::{container, image, mouse_area, scrollable, text};
use iced::{Element, Length};
use iced_aw::Wrap;

use crate::state::gallery::DisplayedImage;
use crate::Message;

/// Thumbnail grid of the selected folder, wrapping to the window width.
/// Clicking a thumbnail opens the popup viewer at that image.
pub fn view(images: &[DisplayedImage], thumbnail_size: f32) -> Element<'_, Message> {
    if images.is_empty() {
        return container(text("No images to show. Pick an archive and a folder.").size(16))
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into();
    }

    let thumbnails: Vec<Element<'_, Message>> = images
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            mouse_area(image(entry.handle.clone()).width(Length::Fixed(thumbnail_size)))
                .on_press(Message::ThumbnailClicked(index))
                .into()
        })
        .collect();

    scrollable(Wrap::with_elements(thumbnails).spacing(8.0).line_spacing(8.0))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
