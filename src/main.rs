use iced::widget::image::Handle;
use iced::widget::{row, slider, text, Column, Stack};
use iced::{Alignment, Element, Length, Task, Theme};
use rfd::FileDialog;
use std::path::{Path, PathBuf};

mod archive;
mod state;
mod ui;

use archive::reader;
use state::gallery::{DisplayedImage, GalleryState};
use state::indexer::{self, FolderGroup};

/// Thumbnail width bounds for the size slider, in pixels
const MIN_THUMBNAIL_SIZE: f32 = 60.0;
const MAX_THUMBNAIL_SIZE: f32 = 400.0;
const DEFAULT_THUMBNAIL_SIZE: f32 = 150.0;

/// Main application state
struct ZipGallery {
    /// ZIP files picked by the user, shown in the sidebar
    archives: Vec<PathBuf>,
    /// Path of the loaded archive. Set only once its listing installs, so
    /// a failed load leaves the previous archive browsable; folder clicks
    /// extract from this path even after the sidebar list is re-picked.
    loaded_archive: Option<PathBuf>,
    /// Folder groups, displayed images and popup cursor
    gallery: GalleryState,
    /// Thumbnail width in pixels
    thumbnail_size: f32,
    /// Sidebar collapsed to a slim strip
    sidebar_collapsed: bool,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub(crate) enum Message {
    /// User clicked the "Open ZIP Files" button
    PickArchives,
    /// User clicked an archive in the sidebar
    ArchiveSelected(usize),
    /// Background listing and indexing of an archive completed
    ArchiveIndexed {
        stamp: u64,
        path: PathBuf,
        result: Result<Vec<FolderGroup>, String>,
    },
    /// User clicked a folder button
    FolderSelected(String),
    /// Background extraction of a folder's images completed
    FolderImagesLoaded {
        stamp: u64,
        folder: String,
        result: Result<Vec<(String, Vec<u8>)>, String>,
    },
    /// User clicked a thumbnail in the grid
    ThumbnailClicked(usize),
    ClosePopup,
    NextImage,
    PreviousImage,
    ToggleSidebar,
    ThumbnailSizeChanged(f32),
}

impl ZipGallery {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        (
            ZipGallery {
                archives: Vec::new(),
                loaded_archive: None,
                gallery: GalleryState::new(),
                thumbnail_size: DEFAULT_THUMBNAIL_SIZE,
                sidebar_collapsed: false,
                status: "Pick one or more ZIP archives to get started.".to_string(),
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PickArchives => {
                // Show the native file picker dialog
                let picked = FileDialog::new()
                    .add_filter("ZIP archives", &["zip"])
                    .set_title("Select ZIP Archives")
                    .pick_files();

                if let Some(paths) = picked {
                    // The dialog filter is advisory on some platforms;
                    // enforce the .zip suffix here
                    self.archives = paths.into_iter().filter(|p| is_zip_file(p)).collect();
                    self.status = match self.archives.len() {
                        0 => "No ZIP files in that selection.".to_string(),
                        n => format!("{} archive(s) listed. Click one to browse.", n),
                    };
                }

                Task::none()
            }
            Message::ArchiveSelected(index) => {
                let Some(path) = self.archives.get(index).cloned() else {
                    return Task::none();
                };

                self.status = format!("Loading {}...", file_label(&path));

                // Stamp the operation; an in-flight older load or folder
                // extraction can no longer apply once this resolves
                let stamp = self.gallery.begin_operation();
                Task::perform(index_archive(path, stamp), |(stamp, path, result)| {
                    Message::ArchiveIndexed {
                        stamp,
                        path,
                        result,
                    }
                })
            }
            Message::ArchiveIndexed {
                stamp,
                path,
                result,
            } => match result {
                Ok(folders) => {
                    let image_count: usize = folders.iter().map(|g| g.entries.len()).sum();

                    if !self.gallery.install_archive(stamp, folders) {
                        log::debug!("discarding stale archive listing");
                        return Task::none();
                    }
                    self.loaded_archive = Some(path);
                    log::info!(
                        "indexed archive: {} folders, {} images",
                        self.gallery.folders().len(),
                        image_count
                    );

                    // Browse the first folder right away, under the same stamp
                    match self.gallery.active_folder().map(str::to_string) {
                        Some(key) => {
                            let names = self.folder_entries(&key);
                            self.spawn_extraction(key, names, stamp)
                        }
                        None => {
                            self.status = "No images found in this archive.".to_string();
                            Task::none()
                        }
                    }
                }
                Err(err) => {
                    // A bad archive is reported and the current gallery
                    // stays as it is
                    log::error!("archive load failed: {}", err);
                    if self.gallery.is_current(stamp) {
                        self.status = format!("⚠️ Could not open archive: {}", err);
                    }
                    Task::none()
                }
            },
            Message::FolderSelected(key) => {
                // Unknown keys are a no-op
                if let Some((stamp, names)) = self.gallery.select_folder(&key) {
                    return self.spawn_extraction(key, names, stamp);
                }
                Task::none()
            }
            Message::FolderImagesLoaded {
                stamp,
                folder,
                result,
            } => {
                match result {
                    Ok(payloads) => {
                        let images: Vec<DisplayedImage> = payloads
                            .into_iter()
                            .map(|(name, bytes)| DisplayedImage {
                                name,
                                folder: folder.clone(),
                                handle: Handle::from_bytes(bytes),
                            })
                            .collect();
                        let count = images.len();

                        if self.gallery.install_images(stamp, images) {
                            self.status = if count == 0 {
                                format!(
                                    "No displayable images in {}.",
                                    ui::folders::button_label(&folder)
                                )
                            } else {
                                format!(
                                    "✅ {} images in {}",
                                    count,
                                    ui::folders::button_label(&folder)
                                )
                            };
                        } else {
                            log::debug!("discarding stale image batch for {}", folder);
                        }
                    }
                    Err(err) => {
                        log::error!("extracting folder {} failed: {}", folder, err);
                        if self.gallery.is_current(stamp) {
                            self.status = format!("⚠️ Could not read folder: {}", err);
                        }
                    }
                }
                Task::none()
            }
            Message::ThumbnailClicked(index) => {
                self.gallery.open_at(index);
                Task::none()
            }
            Message::ClosePopup => {
                self.gallery.close_popup();
                Task::none()
            }
            Message::NextImage => {
                self.gallery.next();
                Task::none()
            }
            Message::PreviousImage => {
                self.gallery.previous();
                Task::none()
            }
            Message::ToggleSidebar => {
                self.sidebar_collapsed = !self.sidebar_collapsed;
                Task::none()
            }
            Message::ThumbnailSizeChanged(size) => {
                self.thumbnail_size = size;
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let loaded_index = self
            .loaded_archive
            .as_ref()
            .and_then(|loaded| self.archives.iter().position(|path| path == loaded));
        let sidebar = ui::sidebar::view(&self.archives, loaded_index, self.sidebar_collapsed);

        let toolbar = row![
            text("Thumbnail size").size(14),
            slider(
                MIN_THUMBNAIL_SIZE..=MAX_THUMBNAIL_SIZE,
                self.thumbnail_size,
                Message::ThumbnailSizeChanged
            )
            .step(10.0)
            .width(Length::Fixed(180.0)),
            text(format!("{}px", self.thumbnail_size as u32)).size(14),
        ]
        .spacing(8)
        .align_y(Alignment::Center);

        let mut content = Column::new()
            .spacing(12)
            .padding(12)
            .width(Length::Fill)
            .height(Length::Fill);
        if !self.gallery.folders().is_empty() {
            content = content.push(ui::folders::view(
                self.gallery.folders(),
                self.gallery.active_folder(),
            ));
        }
        content = content
            .push(toolbar)
            .push(ui::grid::view(self.gallery.images(), self.thumbnail_size))
            .push(text(&self.status).size(14));

        let base: Element<Message> = row![sidebar, content].into();

        // The popup goes on top of everything while an image is open
        match (self.gallery.cursor(), self.gallery.current_image()) {
            (Some(index), Some(current)) => Stack::new()
                .push(base)
                .push(ui::popup::view(current, index, self.gallery.images().len()))
                .into(),
            _ => base,
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Kick off background extraction of one folder's images
    fn spawn_extraction(&mut self, key: String, names: Vec<String>, stamp: u64) -> Task<Message> {
        let Some(path) = self.loaded_archive.clone() else {
            return Task::none();
        };

        self.status = format!(
            "Loading {} images from {}...",
            names.len(),
            ui::folders::button_label(&key)
        );

        Task::perform(
            extract_folder(path, key, names, stamp),
            |(stamp, folder, result)| Message::FolderImagesLoaded {
                stamp,
                folder,
                result,
            },
        )
    }

    fn folder_entries(&self, key: &str) -> Vec<String> {
        self.gallery
            .folders()
            .iter()
            .find(|group| group.key == key)
            .map(|group| group.entries.clone())
            .unwrap_or_default()
    }
}

fn main() -> iced::Result {
    env_logger::init();

    iced::application("ZIP Gallery", ZipGallery::update, ZipGallery::view)
        .theme(ZipGallery::theme)
        .centered()
        .run_with(ZipGallery::new)
}

fn is_zip_file(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("zip"))
}

/// File name of an archive path, for list rows and status messages
pub(crate) fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// List and index an archive in a background task
async fn index_archive(path: PathBuf, stamp: u64) -> (u64, PathBuf, Result<Vec<FolderGroup>, String>) {
    let task_path = path.clone();
    let listed = tokio::task::spawn_blocking(move || {
        let entries = reader::list_entries(&task_path)?;
        Ok::<_, reader::ArchiveError>(indexer::index_entries(&entries))
    })
    .await;

    let result = match listed {
        Ok(Ok(folders)) => Ok(folders),
        Ok(Err(err)) => Err(err.to_string()),
        Err(err) => Err(format!("Task join error: {}", err)),
    };
    (stamp, path, result)
}

/// Extract one folder's images in a background task.
/// The archive is re-opened inside the task; a ZipArchive owns its reader
/// and cannot be shared with overlapping extractions.
async fn extract_folder(
    path: PathBuf,
    folder: String,
    names: Vec<String>,
    stamp: u64,
) -> (u64, String, Result<Vec<(String, Vec<u8>)>, String>) {
    let extracted =
        tokio::task::spawn_blocking(move || reader::read_folder_images(&path, &names)).await;

    let result = match extracted {
        Ok(Ok(images)) => Ok(images),
        Ok(Err(err)) => Err(err.to_string()),
        Err(err) => Err(format!("Task join error: {}", err)),
    };
    (stamp, folder, result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zip_suffix_check_is_case_insensitive() {
        assert!(is_zip_file(Path::new("photos.zip")));
        assert!(is_zip_file(Path::new("photos.ZIP")));
        assert!(!is_zip_file(Path::new("photos.rar")));
        assert!(!is_zip_file(Path::new("zip")));
    }

    #[test]
    fn test_file_label_uses_the_file_name() {
        assert_eq!(file_label(Path::new("/tmp/a/b/pics.zip")), "pics.zip");
    }
}
