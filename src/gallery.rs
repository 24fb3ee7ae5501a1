use crate::{
    config::UrlBase,
    tree::{Folder, Node},
};
use serde::Serialize;

pub const SUPPORTED_IMAGE_FORMATS: [&str; 5] = ["png", "webp", "jpg", "jpeg", "avif"];

const DEFAULT_DIMENSION: u32 = 200;

/// Extension check on the substring after the last dot. A name without a
/// dot yields the whole name as the "extension" and never matches, which
/// is the intended treatment for extensionless files.
pub fn is_supported_image(filename: &str) -> bool {
    let extension = filename
        .rsplit('.')
        .next()
        .unwrap_or(filename)
        .to_lowercase();
    SUPPORTED_IMAGE_FORMATS.contains(&extension.as_str())
}

/// Whether any of the folder's immediate children has a displayable image
/// name. Non-recursive, and a pure name check: a subfolder named like an
/// image counts too.
pub fn folder_contains_image(folder: &Folder) -> bool {
    folder
        .children
        .iter()
        .any(|child| is_supported_image(child.name()))
}

/// A resolved, displayable image reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GalleryItem {
    pub src: String,
    pub thumb: String,
    pub width: u32,
    pub height: u32,
}

/// Gallery items for the folder's immediate file children, in child order.
/// Addresses are the base URL joined with the folder path and file name.
pub fn select_items(folder: &Folder, base: &UrlBase) -> Vec<GalleryItem> {
    let mut items = vec![];

    for child in &folder.children {
        let Node::Leaf(leaf) = child else {
            continue;
        };

        if !is_supported_image(&leaf.name) {
            continue;
        }

        let mut segments: Vec<&str> = folder
            .path
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();
        segments.push(&leaf.name);

        let url = base.join(&segments);
        items.push(GalleryItem {
            src: url.clone(),
            thumb: url,
            width: leaf.width.unwrap_or(DEFAULT_DIMENSION),
            height: leaf.height.unwrap_or(DEFAULT_DIMENSION),
        });
    }

    items
}
