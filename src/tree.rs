use crate::structure::RawNode;
use std::cmp::Ordering;

/// An annotated tree node. Folders and files are distinct variants so an
/// empty folder can never be mistaken for a file.
#[derive(Debug, Clone)]
pub enum Node {
    Folder(Folder),
    Leaf(Leaf),
}

#[derive(Debug, Clone)]
pub struct Folder {
    pub name: String,

    /// `/`-joined names from the root (exclusive) down to this folder.
    /// Empty for the root itself.
    pub path: String,

    /// Sorted on load: folders first, then files, alphabetical within
    /// each group.
    pub children: Vec<Node>,
}

#[derive(Debug, Clone)]
pub struct Leaf {
    pub name: String,
    pub path: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl Node {
    pub fn name(&self) -> &str {
        match self {
            Node::Folder(folder) => &folder.name,
            Node::Leaf(leaf) => &leaf.name,
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Node::Folder(folder) => &folder.path,
            Node::Leaf(leaf) => &leaf.path,
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, Node::Folder(_))
    }

    pub fn as_folder(&self) -> Option<&Folder> {
        match self {
            Node::Folder(folder) => Some(folder),
            Node::Leaf(_) => None,
        }
    }

    /// Resolves a structural id of the form `0-i-j-...`, i.e. the index
    /// path through each ancestor's children. Ids are computed on the fly
    /// during the walk, so they always reflect the sorted order.
    pub fn get_by_id(&self, id: &str) -> Option<&Node> {
        self.find_by_id("0", id)
    }

    fn find_by_id<'a>(&'a self, current: &str, target: &str) -> Option<&'a Node> {
        if current == target {
            return Some(self);
        }

        let Node::Folder(folder) = self else {
            return None;
        };

        for (index, child) in folder.children.iter().enumerate() {
            let child_id = format!("{current}-{index}");
            if let Some(found) = child.find_by_id(&child_id, target) {
                return Some(found);
            }
        }

        None
    }

    /// First node whose `path` matches the target exactly. Used to restore
    /// a deep-linked folder from the page URL.
    pub fn find_by_path(&self, target: &str) -> Option<&Node> {
        if self.path() == target {
            return Some(self);
        }

        let Node::Folder(folder) = self else {
            return None;
        };

        for child in &folder.children {
            if let Some(found) = child.find_by_path(target) {
                return Some(found);
            }
        }

        None
    }
}

/// Turns the raw document into the annotated tree.
///
/// Pure value transformation: paths are assigned relative to the root
/// (the root's own name never appears in them) and every folder's
/// children are sorted.
pub fn load(raw: RawNode) -> Node {
    match raw.children {
        Some(children) => Node::Folder(Folder {
            name: raw.name,
            path: String::new(),
            children: load_children(children, ""),
        }),
        None => Node::Leaf(Leaf {
            name: raw.name,
            path: String::new(),
            width: raw.width,
            height: raw.height,
        }),
    }
}

fn load_children(raw: Vec<RawNode>, parent_path: &str) -> Vec<Node> {
    let mut children: Vec<Node> = raw
        .into_iter()
        .map(|child| annotate(child, parent_path))
        .collect();

    children.sort_by(|a, b| match (a.is_folder(), b.is_folder()) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => a.name().to_lowercase().cmp(&b.name().to_lowercase()),
    });

    children
}

fn annotate(raw: RawNode, parent_path: &str) -> Node {
    let path = if parent_path.is_empty() {
        raw.name.clone()
    } else {
        format!("{parent_path}/{}", raw.name)
    };

    match raw.children {
        Some(children) => {
            let children = load_children(children, &path);
            Node::Folder(Folder {
                name: raw.name,
                path,
                children,
            })
        }
        None => Node::Leaf(Leaf {
            name: raw.name,
            path,
            width: raw.width,
            height: raw.height,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Node {
        let raw: RawNode = serde_json::from_str(
            r#"{
                "name": "root",
                "children": [
                    {"name": "zebra.png"},
                    {"name": "B", "children": [
                        {"name": "C", "children": []},
                        {"name": "photo.jpg"}
                    ]},
                    {"name": "A", "children": []},
                    {"name": "apple.png"}
                ]
            }"#,
        )
        .unwrap();
        load(raw)
    }

    fn names(folder: &Folder) -> Vec<&str> {
        folder.children.iter().map(Node::name).collect()
    }

    #[test]
    fn folders_sort_before_files() {
        let root = sample();
        let root = root.as_folder().unwrap();
        assert_eq!(vec!["A", "B", "apple.png", "zebra.png"], names(root));
    }

    #[test]
    fn sorting_applies_at_every_level() {
        let root = sample();
        let b = root.find_by_path("B").unwrap().as_folder().unwrap();
        assert_eq!(vec!["C", "photo.jpg"], names(b));
    }

    #[test]
    fn paths_join_ancestor_names() {
        let root = sample();
        assert_eq!("", root.path());
        assert_eq!("B", root.find_by_path("B").unwrap().path());

        let c = root.find_by_path("B/C").unwrap();
        assert_eq!("C", c.name());
        assert_eq!("B/C", c.path());

        let photo = root.find_by_path("B/photo.jpg").unwrap();
        assert!(!photo.is_folder());
    }

    #[test]
    fn empty_children_is_a_folder() {
        let root = sample();
        let a = root.find_by_path("A").unwrap();
        assert!(a.is_folder());
        assert!(a.as_folder().unwrap().children.is_empty());
    }

    #[test]
    fn resolve_by_structural_id() {
        let raw: RawNode = serde_json::from_str(
            r#"{"name":"root","children":[
                {"name":"A"},
                {"name":"B","children":[{"name":"C"}]}
            ]}"#,
        )
        .unwrap();
        let root = load(raw);

        // B sorts before A (folders first), so B is child 0.
        let c = root.get_by_id("0-0-0").unwrap();
        assert_eq!("C", c.name());

        let a = root.get_by_id("0-1").unwrap();
        assert_eq!("A", a.name());

        assert!(root.get_by_id("0-5").is_none());
        assert!(root.get_by_id("0-0-0-0").is_none());
    }

    #[test]
    fn structural_ids_follow_child_indices() {
        // Hand-built, unsorted: ids encode whatever order the children
        // are actually in.
        let root = Node::Folder(Folder {
            name: "root".into(),
            path: String::new(),
            children: vec![
                Node::Leaf(Leaf {
                    name: "A".into(),
                    path: "A".into(),
                    width: None,
                    height: None,
                }),
                Node::Folder(Folder {
                    name: "B".into(),
                    path: "B".into(),
                    children: vec![Node::Leaf(Leaf {
                        name: "C".into(),
                        path: "B/C".into(),
                        width: None,
                        height: None,
                    })],
                }),
            ],
        });

        assert_eq!("C", root.get_by_id("0-1-0").unwrap().name());
        assert_eq!("C", root.find_by_path("B/C").unwrap().name());
        assert!(root.find_by_path("Z").is_none());
    }

    #[test]
    fn resolve_root_id() {
        let root = sample();
        let found = root.get_by_id("0").unwrap();
        assert_eq!("root", found.name());
    }

    #[test]
    fn unknown_path_resolves_to_none() {
        let root = sample();
        assert!(root.find_by_path("Z").is_none());
        assert!(root.find_by_path("B/C/D").is_none());
    }
}
