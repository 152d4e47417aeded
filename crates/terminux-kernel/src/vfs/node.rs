//! Tree nodes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A node in the virtual filesystem tree.
///
/// The node's name is not stored here; it is the key in the parent's
/// `children` map. Children are kept in name order so listings are stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    Directory {
        #[serde(default)]
        children: BTreeMap<String, Node>,
    },
    File {
        #[serde(default)]
        content: String,
    },
}

/// The kind tag of a node, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Directory,
    File,
}

impl Node {
    /// An empty directory.
    pub fn directory() -> Self {
        Node::Directory {
            children: BTreeMap::new(),
        }
    }

    /// An empty file.
    pub fn file() -> Self {
        Node::File {
            content: String::new(),
        }
    }

    /// A file holding `content`.
    pub fn file_with(content: impl Into<String>) -> Self {
        Node::File {
            content: content.into(),
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Directory { .. } => NodeKind::Directory,
            Node::File { .. } => NodeKind::File,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Node::Directory { .. })
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Node::File { .. })
    }

    /// Children of a directory, `None` for files.
    pub fn children(&self) -> Option<&BTreeMap<String, Node>> {
        match self {
            Node::Directory { children } => Some(children),
            Node::File { .. } => None,
        }
    }

    pub(crate) fn children_mut(&mut self) -> Option<&mut BTreeMap<String, Node>> {
        match self {
            Node::Directory { children } => Some(children),
            Node::File { .. } => None,
        }
    }

    /// Content of a file, `None` for directories.
    pub fn content(&self) -> Option<&str> {
        match self {
            Node::File { content } => Some(content),
            Node::Directory { .. } => None,
        }
    }

    /// Number of nodes below this one (not counting itself).
    pub fn descendant_count(&self) -> usize {
        match self {
            Node::Directory { children } => children
                .values()
                .map(|child| 1 + child.descendant_count())
                .sum(),
            Node::File { .. } => 0,
        }
    }
}

#[cfg(test)]
impl Node {
    /// Builder-style helper for assembling directory trees in tests.
    pub(crate) fn with_child(mut self, name: &str, child: Node) -> Self {
        if let Some(children) = self.children_mut() {
            children.insert(name.to_string(), child);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_variant() {
        assert_eq!(Node::directory().kind(), NodeKind::Directory);
        assert_eq!(Node::file().kind(), NodeKind::File);
        assert!(Node::file_with("x").is_file());
    }

    #[test]
    fn children_only_for_directories() {
        assert!(Node::directory().children().is_some());
        assert!(Node::file().children().is_none());
        assert_eq!(Node::file_with("hi").content(), Some("hi"));
        assert_eq!(Node::directory().content(), None);
    }

    #[test]
    fn descendant_count_walks_subtree() {
        let tree = Node::directory()
            .with_child("a", Node::directory().with_child("b", Node::file()))
            .with_child("c", Node::file());
        assert_eq!(tree.descendant_count(), 3);
    }

    #[test]
    fn serializes_with_type_tag() {
        let tree = Node::directory().with_child("notes.txt", Node::file_with("hi"));
        let json = serde_json::to_value(&tree).unwrap();
        assert_eq!(json["type"], "directory");
        assert_eq!(json["children"]["notes.txt"]["type"], "file");
        assert_eq!(json["children"]["notes.txt"]["content"], "hi");
    }

    #[test]
    fn deserializes_missing_payload_as_empty() {
        let node: Node = serde_json::from_str(r#"{"type":"file"}"#).unwrap();
        assert_eq!(node, Node::file());
        let node: Node = serde_json::from_str(r#"{"type":"directory"}"#).unwrap();
        assert_eq!(node, Node::directory());
    }
}
