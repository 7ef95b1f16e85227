/// Archive indexing
///
/// Turns the flat entry listing of a ZIP archive into per-folder image
/// groups. This is a pure transformation: no payload is read here, only
/// entry names and directory flags are inspected.

use super::natural::natural_cmp;

/// Extensions the gallery knows how to display.
const IMAGE_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "gif"];

/// One entry as listed from an archive, before any payload is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryMeta {
    /// Full forward-slash path inside the archive
    pub name: String,
    pub is_dir: bool,
}

/// The image entries sharing one parent folder inside the archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderGroup {
    /// Path up to (excluding) the last '/'; empty for root-level entries
    pub key: String,
    /// Full entry names in natural order
    pub entries: Vec<String>,
}

/// True if the entry name ends in a displayable image extension.
pub fn is_image_name(name: &str) -> bool {
    match name.rsplit_once('.') {
        Some((_, ext)) => IMAGE_EXTENSIONS
            .iter()
            .any(|known| ext.eq_ignore_ascii_case(known)),
        None => false,
    }
}

/// Parent path of an entry inside the archive. Entries without a path
/// separator belong to the root group, keyed by the empty string.
pub fn folder_key(name: &str) -> &str {
    match name.rfind('/') {
        Some(idx) => &name[..idx],
        None => "",
    }
}

/// Group an archive listing into per-folder image sets.
///
/// Directory entries and non-image files are dropped. Each kept entry
/// lands in exactly one group, keyed by its immediate parent path. Groups
/// appear in the order their folder first occurs in the listing; within a
/// group, entries are naturally sorted by full name.
pub fn index_entries(entries: &[EntryMeta]) -> Vec<FolderGroup> {
    let mut groups: Vec<FolderGroup> = Vec::new();

    for entry in entries {
        if entry.is_dir || !is_image_name(&entry.name) {
            continue;
        }

        let key = folder_key(&entry.name);
        match groups.iter_mut().find(|group| group.key == key) {
            Some(group) => group.entries.push(entry.name.clone()),
            None => groups.push(FolderGroup {
                key: key.to_string(),
                entries: vec![entry.name.clone()],
            }),
        }
    }

    for group in &mut groups {
        group.entries.sort_by(|a, b| natural_cmp(a, b));
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str) -> EntryMeta {
        EntryMeta {
            name: name.to_string(),
            is_dir: false,
        }
    }

    fn dir(name: &str) -> EntryMeta {
        EntryMeta {
            name: name.to_string(),
            is_dir: true,
        }
    }

    #[test]
    fn test_directories_and_non_images_are_dropped() {
        let entries = vec![
            dir("photos/"),
            file("photos/readme.txt"),
            file("photos/cover.png"),
            file("photos/archive.zip"),
        ];
        let groups = index_entries(&entries);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].entries, vec!["photos/cover.png"]);
    }

    #[test]
    fn test_extension_match_is_case_insensitive() {
        let entries = vec![file("a.JPG"), file("b.Png"), file("c.JPEG"), file("d.gif")];
        let groups = index_entries(&entries);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].key, "");
        assert_eq!(groups[0].entries.len(), 4);
    }

    #[test]
    fn test_grouped_by_immediate_parent() {
        let entries = vec![
            file("a/1.png"),
            file("a/b/1.png"),
            file("1.png"),
            file("a/2.png"),
        ];
        let groups = index_entries(&entries);

        let keys: Vec<&str> = groups.iter().map(|g| g.key.as_str()).collect();
        assert_eq!(keys, vec!["a", "a/b", ""]);
        assert_eq!(groups[0].entries, vec!["a/1.png", "a/2.png"]);
        assert_eq!(groups[1].entries, vec!["a/b/1.png"]);
        assert_eq!(groups[2].entries, vec!["1.png"]);
    }

    #[test]
    fn test_folder_order_follows_first_occurrence() {
        let entries = vec![
            file("z/1.png"),
            file("a/1.png"),
            file("z/2.png"),
            file("m/1.png"),
        ];
        let groups = index_entries(&entries);

        let keys: Vec<&str> = groups.iter().map(|g| g.key.as_str()).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_entries_are_naturally_sorted_within_a_group() {
        let entries = vec![
            file("pages/p10.jpg"),
            file("pages/p2.jpg"),
            file("pages/p1.jpg"),
        ];
        let groups = index_entries(&entries);

        assert_eq!(
            groups[0].entries,
            vec!["pages/p1.jpg", "pages/p2.jpg", "pages/p10.jpg"]
        );
    }

    #[test]
    fn test_indexing_is_idempotent() {
        let entries = vec![
            file("b/img3.png"),
            file("a/img10.gif"),
            file("a/img2.gif"),
            dir("a/"),
        ];

        let first = index_entries(&entries);
        let second = index_entries(&entries);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_listing_yields_no_groups() {
        assert!(index_entries(&[]).is_empty());

        let only_noise = vec![dir("a/"), file("a/notes.md")];
        assert!(index_entries(&only_noise).is_empty());
    }

    #[test]
    fn test_folder_key_of_root_entry_is_empty() {
        assert_eq!(folder_key("cover.png"), "");
        assert_eq!(folder_key("a/cover.png"), "a");
        assert_eq!(folder_key("a/b/cover.png"), "a/b");
    }

    #[test]
    fn test_name_without_extension_is_not_an_image() {
        assert!(!is_image_name("png"));
        assert!(!is_image_name("picture"));
        assert!(is_image_name(".png"));
    }
}
