use std::sync::{Arc, RwLock};

use minijinja::Environment;
use tracing::{debug, info};

use crate::{
    config::{Config, UrlBase},
    error::GalleryError,
    gallery::{self, GalleryItem},
    sidebar::{self, SidebarEntry},
    tree::{Folder, Node},
};

lazy_static::lazy_static! {
    pub static ref INDEX: String =
        std::fs::read_to_string("public/index.html").expect("missing template");
}

/// Shared server state: the immutable annotated tree plus the derived
/// selection, which is wholly replaced on each folder click.
#[derive(Debug, Clone)]
pub struct Gallery {
    pub context: Environment<'static>,

    pub title: String,

    pub base: UrlBase,

    pub show_files: bool,

    pub initial_folder: Option<String>,

    tree: Arc<Node>,

    selection: Arc<RwLock<Selection>>,
}

#[derive(Debug, Clone, Default)]
pub struct Selection {
    pub current_folder: String,
    pub items: Vec<GalleryItem>,
}

impl Gallery {
    pub fn new(tree: Node, config: &Config) -> Self {
        let mut context = Environment::new();

        context
            .add_template("index", &INDEX)
            .expect("unable to load template");

        let base = config.base_url();
        let title = config
            .title
            .clone()
            .unwrap_or_else(|| base.as_str().to_string());

        Self {
            context,
            title,
            base,
            show_files: config.show_files,
            initial_folder: config.initial_folder.clone(),
            tree: Arc::new(tree),
            selection: Arc::new(RwLock::new(Selection::default())),
        }
    }

    /// Sidebar entries for the root. Empty when the document root is a
    /// single file.
    pub fn sidebar(&self) -> Vec<SidebarEntry> {
        match self.tree.as_folder() {
            Some(root) => sidebar::build_sidebar(root, "0", self.show_files),
            None => vec![],
        }
    }

    /// Sidebar entries for the folder with the given structural id.
    pub fn sidebar_for(&self, id: &str) -> Result<Vec<SidebarEntry>, GalleryError> {
        let folder = self.folder_by_id(id)?;
        Ok(sidebar::build_sidebar(folder, id, self.show_files))
    }

    /// Selects the folder with the given structural id and returns its
    /// gallery items.
    pub fn select_by_id(&self, id: &str) -> Result<Vec<GalleryItem>, GalleryError> {
        let folder = self.folder_by_id(id)?;
        Ok(self.select_folder(folder))
    }

    /// Selects the folder with the given path, if any. Used to restore a
    /// deep link on page load.
    pub fn select_by_path(&self, path: &str) -> Option<Vec<GalleryItem>> {
        let folder = self.tree.find_by_path(path)?.as_folder()?;
        Some(self.select_folder(folder))
    }

    /// Replaces the current selection with the folder and its items.
    pub fn select_folder(&self, folder: &Folder) -> Vec<GalleryItem> {
        let items = gallery::select_items(folder, &self.base);

        info!("Selected {} ({} items)", folder.path, items.len());

        let mut selection = self.selection.write().expect("selection lock poisoned");
        selection.current_folder = folder.path.clone();
        selection.items = items.clone();

        items
    }

    pub fn selection(&self) -> Selection {
        self.selection.read().expect("selection lock poisoned").clone()
    }

    fn folder_by_id(&self, id: &str) -> Result<&Folder, GalleryError> {
        let node = self
            .tree
            .get_by_id(id)
            .ok_or_else(|| GalleryError::NotFound(id.to_string()))?;

        debug!("Resolved {id} to {}", node.path());

        node.as_folder()
            .ok_or_else(|| GalleryError::NotFound(format!("{id}: not a folder")))
    }
}
