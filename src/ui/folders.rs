use iced::widget::{button, container, text};
use iced::Element;
use iced_aw::Wrap;

use crate::state::indexer::FolderGroup;
use crate::Message;

/// Folder switcher above the grid. One button per folder group, in the
/// archive's first-seen order; exactly one carries the active style.
pub fn view<'a>(folders: &'a [FolderGroup], active: Option<&str>) -> Element<'a, Message> {
    let mut buttons: Vec<Element<'a, Message>> = Vec::with_capacity(folders.len());

    for group in folders {
        let is_active = active == Some(group.key.as_str());
        buttons.push(
            button(text(button_label(&group.key)).size(14))
                .style(move |theme, status| {
                    if is_active {
                        button::primary(theme, status)
                    } else {
                        button::secondary(theme, status)
                    }
                })
                .on_press(Message::FolderSelected(group.key.clone()))
                .into(),
        );
    }

    container(Wrap::with_elements(buttons).spacing(6.0).line_spacing(6.0)).into()
}

/// Last path segment of a folder key; the root group displays as "Root".
pub fn button_label(key: &str) -> &str {
    let label = key.rsplit('/').next().unwrap_or(key);
    if label.is_empty() {
        "Root"
    } else {
        label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_is_last_path_segment() {
        assert_eq!(button_label("chapter1"), "chapter1");
        assert_eq!(button_label("book/chapter1"), "chapter1");
        assert_eq!(button_label("a/b/c"), "c");
    }

    #[test]
    fn test_root_group_label() {
        assert_eq!(button_label(""), "Root");
    }
}
