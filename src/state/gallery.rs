/// Gallery state
///
/// Owns everything the gallery currently shows: the indexed folder groups
/// of the loaded archive, the extracted images of the selected folder, and
/// the popup cursor. All mutation goes through the operations below; the
/// UI layer only reads.

use iced::widget::image::Handle;

use super::indexer::FolderGroup;

/// One image extracted from the archive and ready to draw.
#[derive(Debug, Clone)]
pub struct DisplayedImage {
    /// Full entry name inside the archive
    pub name: String,
    /// Folder key the image belongs to
    pub folder: String,
    /// Decoded payload handle for the renderer
    pub handle: Handle,
}

/// Folder groups, displayed images and popup cursor of the active archive.
///
/// Extraction runs in background tasks that may overlap when the user
/// clicks around quickly. Every mutating operation bumps a generation
/// counter and stamps the task it spawns; a completion whose stamp no
/// longer matches is discarded whole, so a stale batch can never replace
/// or mix into a newer one.
#[derive(Debug, Default)]
pub struct GalleryState {
    folders: Vec<FolderGroup>,
    active_folder: Option<String>,
    images: Vec<DisplayedImage>,
    cursor: Option<usize>,
    generation: u64,
}

impl GalleryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new load operation and return its stamp. Anything still in
    /// flight from an earlier operation is implicitly cancelled: its
    /// completion will no longer match.
    pub fn begin_operation(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// True if `stamp` belongs to the most recent operation.
    pub fn is_current(&self, stamp: u64) -> bool {
        stamp == self.generation
    }

    /// Install the folder groups of a freshly indexed archive.
    ///
    /// Returns false (leaving all state untouched) if the stamp is stale.
    /// On success the displayed images and cursor are reset and the first
    /// folder group becomes the active one.
    pub fn install_archive(&mut self, stamp: u64, folders: Vec<FolderGroup>) -> bool {
        if !self.is_current(stamp) {
            return false;
        }

        self.active_folder = folders.first().map(|group| group.key.clone());
        self.folders = folders;
        self.images.clear();
        self.cursor = None;
        true
    }

    /// Make `key` the active folder and start a new extraction operation.
    ///
    /// Returns the operation stamp plus the entry names to extract, or
    /// `None` (a no-op) if no such folder exists. The displayed images are
    /// cleared immediately; the new batch arrives via `install_images`.
    pub fn select_folder(&mut self, key: &str) -> Option<(u64, Vec<String>)> {
        let names = self
            .folders
            .iter()
            .find(|group| group.key == key)?
            .entries
            .clone();

        let stamp = self.begin_operation();
        self.active_folder = Some(key.to_string());
        self.images.clear();
        self.cursor = None;
        Some((stamp, names))
    }

    /// Install an extracted image batch.
    ///
    /// A stale batch is dropped in its entirety and false is returned.
    /// Replacing the list also drops the previous handles, releasing their
    /// textures.
    pub fn install_images(&mut self, stamp: u64, images: Vec<DisplayedImage>) -> bool {
        if !self.is_current(stamp) {
            return false;
        }

        self.images = images;
        self.cursor = None;
        true
    }

    /// Open the popup on the image at `index`; out of range is a no-op.
    pub fn open_at(&mut self, index: usize) {
        if index < self.images.len() {
            self.cursor = Some(index);
        }
    }

    pub fn close_popup(&mut self) {
        self.cursor = None;
    }

    /// Advance the popup cursor, stopping at the last image.
    pub fn next(&mut self) {
        if let Some(index) = self.cursor {
            if index + 1 < self.images.len() {
                self.cursor = Some(index + 1);
            }
        }
    }

    /// Move the popup cursor back, stopping at the first image.
    pub fn previous(&mut self) {
        if let Some(index) = self.cursor {
            if index > 0 {
                self.cursor = Some(index - 1);
            }
        }
    }

    pub fn folders(&self) -> &[FolderGroup] {
        &self.folders
    }

    pub fn active_folder(&self) -> Option<&str> {
        self.active_folder.as_deref()
    }

    pub fn images(&self) -> &[DisplayedImage] {
        &self.images
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn current_image(&self) -> Option<&DisplayedImage> {
        self.cursor.and_then(|index| self.images.get(index))
    }

    pub fn has_previous(&self) -> bool {
        matches!(self.cursor, Some(index) if index > 0)
    }

    pub fn has_next(&self) -> bool {
        matches!(self.cursor, Some(index) if index + 1 < self.images.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(key: &str, entries: &[&str]) -> FolderGroup {
        FolderGroup {
            key: key.to_string(),
            entries: entries.iter().map(|e| e.to_string()).collect(),
        }
    }

    fn img(name: &str) -> DisplayedImage {
        DisplayedImage {
            name: name.to_string(),
            folder: String::new(),
            handle: Handle::from_bytes(vec![0u8; 4]),
        }
    }

    fn loaded_gallery() -> GalleryState {
        let mut gallery = GalleryState::new();
        let stamp = gallery.begin_operation();
        assert!(gallery.install_archive(
            stamp,
            vec![group("a", &["a/1.png", "a/2.png"]), group("b", &["b/1.png"])],
        ));
        gallery
    }

    #[test]
    fn test_install_archive_selects_first_folder() {
        let gallery = loaded_gallery();
        assert_eq!(gallery.active_folder(), Some("a"));
        assert!(gallery.images().is_empty());
        assert_eq!(gallery.cursor(), None);
    }

    #[test]
    fn test_install_archive_with_no_groups_leaves_gallery_empty() {
        let mut gallery = GalleryState::new();
        let stamp = gallery.begin_operation();
        assert!(gallery.install_archive(stamp, Vec::new()));
        assert_eq!(gallery.active_folder(), None);
        assert!(gallery.folders().is_empty());
    }

    #[test]
    fn test_stale_archive_listing_is_rejected() {
        let mut gallery = loaded_gallery();
        let old_stamp = gallery.begin_operation();
        let _new_stamp = gallery.begin_operation();

        assert!(!gallery.install_archive(old_stamp, vec![group("x", &["x/1.png"])]));
        // Previous folders survive untouched
        assert_eq!(gallery.folders().len(), 2);
        assert_eq!(gallery.active_folder(), Some("a"));
    }

    #[test]
    fn test_select_unknown_folder_is_a_no_op() {
        let mut gallery = loaded_gallery();
        assert!(gallery.select_folder("missing").is_none());
        assert_eq!(gallery.active_folder(), Some("a"));
    }

    #[test]
    fn test_overlapping_selects_keep_only_the_newest_batch() {
        let mut gallery = loaded_gallery();

        let (first_stamp, _) = gallery.select_folder("a").unwrap();
        let (second_stamp, _) = gallery.select_folder("b").unwrap();

        // The first folder's batch resolves after the second select
        assert!(!gallery.install_images(first_stamp, vec![img("a/1.png"), img("a/2.png")]));
        assert!(gallery.images().is_empty());

        assert!(gallery.install_images(second_stamp, vec![img("b/1.png")]));
        let names: Vec<&str> = gallery.images().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["b/1.png"]);
    }

    #[test]
    fn test_cursor_clamps_at_both_ends() {
        let mut gallery = loaded_gallery();
        let (stamp, _) = gallery.select_folder("a").unwrap();
        assert!(gallery.install_images(stamp, vec![img("1"), img("2"), img("3")]));

        gallery.open_at(1);
        gallery.next();
        assert_eq!(gallery.cursor(), Some(2));
        assert!(!gallery.has_next());
        gallery.next();
        assert_eq!(gallery.cursor(), Some(2));

        gallery.previous();
        gallery.previous();
        assert_eq!(gallery.cursor(), Some(0));
        assert!(!gallery.has_previous());
        gallery.previous();
        assert_eq!(gallery.cursor(), Some(0));
    }

    #[test]
    fn test_navigation_without_open_popup_is_a_no_op() {
        let mut gallery = loaded_gallery();
        let (stamp, _) = gallery.select_folder("a").unwrap();
        assert!(gallery.install_images(stamp, vec![img("1")]));

        gallery.next();
        gallery.previous();
        assert_eq!(gallery.cursor(), None);
    }

    #[test]
    fn test_open_at_out_of_range_is_a_no_op() {
        let mut gallery = loaded_gallery();
        let (stamp, _) = gallery.select_folder("a").unwrap();
        assert!(gallery.install_images(stamp, vec![img("1")]));

        gallery.open_at(5);
        assert_eq!(gallery.cursor(), None);
        gallery.open_at(0);
        assert_eq!(gallery.cursor(), Some(0));
    }

    #[test]
    fn test_select_folder_resets_cursor_and_images() {
        let mut gallery = loaded_gallery();
        let (stamp, _) = gallery.select_folder("a").unwrap();
        assert!(gallery.install_images(stamp, vec![img("1"), img("2")]));
        gallery.open_at(1);

        let (_, names) = gallery.select_folder("b").unwrap();
        assert_eq!(names, vec!["b/1.png"]);
        assert!(gallery.images().is_empty());
        assert_eq!(gallery.cursor(), None);
        assert_eq!(gallery.active_folder(), Some("b"));
    }
}
