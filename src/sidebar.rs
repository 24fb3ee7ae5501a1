use crate::{
    gallery::folder_contains_image,
    tree::{Folder, Node},
};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Folder,
    File,
}

/// One sidebar row. The id is the structural id the front end sends back
/// on selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarEntry {
    pub id: String,
    pub name: String,
    pub kind: EntryKind,

    /// Marker for folders that directly contain at least one displayable
    /// image.
    pub with_images: bool,

    pub children: Vec<SidebarEntry>,
}

/// Entries for every child of the folder, keyed by structural id.
///
/// Hidden files still consume an index so ids stay in lockstep with
/// [`Node::get_by_id`] no matter the `show_files` setting.
pub fn build_sidebar(folder: &Folder, node_id: &str, show_files: bool) -> Vec<SidebarEntry> {
    let mut entries = vec![];

    for (index, child) in folder.children.iter().enumerate() {
        let id = format!("{node_id}-{index}");

        match child {
            Node::Folder(sub) => {
                let children = build_sidebar(sub, &id, show_files);
                entries.push(SidebarEntry {
                    id,
                    name: sub.name.clone(),
                    kind: EntryKind::Folder,
                    with_images: folder_contains_image(sub),
                    children,
                });
            }
            Node::Leaf(leaf) => {
                if show_files {
                    entries.push(SidebarEntry {
                        id,
                        name: leaf.name.clone(),
                        kind: EntryKind::File,
                        with_images: false,
                        children: vec![],
                    });
                }
            }
        }
    }

    entries
}
