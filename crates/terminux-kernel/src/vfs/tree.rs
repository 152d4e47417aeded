//! The rooted in-memory tree.

use std::collections::BTreeMap;

use tracing::{debug, trace, warn};

use super::error::FsError;
use super::node::{Node, NodeKind};
use super::path::{is_valid_name, join, segments};
use super::seed;

/// One row of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub kind: NodeKind,
}

/// A virtual filesystem: one exclusively owned tree of nodes.
///
/// Every mutation goes through the methods below, which enforce name
/// validity and sibling uniqueness. Instances are independent; nothing is
/// shared between them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vfs {
    root: Node,
}

impl Default for Vfs {
    fn default() -> Self {
        Self::seeded(seed::DEFAULT_HOME)
    }
}

impl Vfs {
    /// Create a filesystem holding only the root directory.
    pub fn new() -> Self {
        Self {
            root: Node::directory(),
        }
    }

    /// Create the starting tree: `/etc`, `/usr`, `/var` and a populated home.
    pub fn seeded(home: &str) -> Self {
        let mut vfs = Self::new();
        if let Err(error) = vfs.seed(home) {
            warn!(%error, home, "seed tree is incomplete");
        }
        vfs
    }

    fn seed(&mut self, home: &str) -> Result<(), FsError> {
        for dir in seed::SYSTEM_DIRS {
            self.create_dir_all(&join("/", dir))?;
        }
        self.create_dir_all(home)?;
        for dir in seed::HOME_DIRS {
            self.insert_if_absent(home, dir, Node::directory())?;
        }
        self.insert_if_absent(home, seed::WELCOME_FILE, Node::file_with(seed::WELCOME_TEXT))?;
        self.insert_if_absent(home, seed::README_FILE, Node::file_with(seed::README_TEXT))?;
        Ok(())
    }

    fn insert_if_absent(&mut self, dir: &str, name: &str, node: Node) -> Result<(), FsError> {
        self.directory_mut(dir)?
            .entry(name.to_string())
            .or_insert(node);
        Ok(())
    }

    /// The root directory node.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Walk from the root to `path`.
    ///
    /// Empty segments are ignored, so `/`, `//` and `` all name the root.
    /// Returns `None` when a segment is missing or passes through a file.
    pub fn get_node_at_path(&self, path: &str) -> Option<&Node> {
        let mut node = &self.root;
        for segment in segments(path) {
            node = match node.children().and_then(|c| c.get(segment)) {
                Some(child) => child,
                None => {
                    trace!(path, segment, "lookup missed");
                    return None;
                }
            };
        }
        Some(node)
    }

    fn get_node_at_path_mut(&mut self, path: &str) -> Option<&mut Node> {
        let mut node = &mut self.root;
        for segment in segments(path) {
            node = node.children_mut()?.get_mut(segment)?;
        }
        Some(node)
    }

    pub fn exists(&self, path: &str) -> bool {
        self.get_node_at_path(path).is_some()
    }

    /// Children of the directory at `path`.
    pub fn directory(&self, path: &str) -> Result<&BTreeMap<String, Node>, FsError> {
        let node = self
            .get_node_at_path(path)
            .ok_or_else(|| FsError::not_found(path))?;
        node.children()
            .ok_or_else(|| FsError::not_a_directory(path))
    }

    fn directory_mut(&mut self, path: &str) -> Result<&mut BTreeMap<String, Node>, FsError> {
        let node = self
            .get_node_at_path_mut(path)
            .ok_or_else(|| FsError::not_found(path))?;
        node.children_mut()
            .ok_or_else(|| FsError::not_a_directory(path))
    }

    /// List the directory at `path` in name order.
    pub fn list(&self, path: &str) -> Result<Vec<DirEntry>, FsError> {
        Ok(self
            .directory(path)?
            .iter()
            .map(|(name, node)| DirEntry {
                name: name.clone(),
                kind: node.kind(),
            })
            .collect())
    }

    /// Content of the file at `path`.
    pub fn read_file(&self, path: &str) -> Result<&str, FsError> {
        let node = self
            .get_node_at_path(path)
            .ok_or_else(|| FsError::not_found(path))?;
        node.content()
            .ok_or_else(|| FsError::is_a_directory(path))
    }

    /// Add `node` as `dir/name`.
    ///
    /// Fails if the parent is missing or a file, the name is invalid, or a
    /// sibling already uses the name (files and directories share one
    /// namespace).
    pub fn create_child(&mut self, dir: &str, name: &str, node: Node) -> Result<(), FsError> {
        if !is_valid_name(name) {
            return Err(FsError::InvalidName {
                name: name.to_string(),
            });
        }
        let children = self.directory_mut(dir)?;
        if children.contains_key(name) {
            return Err(FsError::AlreadyExists {
                path: join(dir, name),
            });
        }
        debug!(path = %join(dir, name), kind = ?node.kind(), "created node");
        children.insert(name.to_string(), node);
        Ok(())
    }

    /// Create an empty file at `dir/name` unless something already uses the
    /// name. Returns whether a file was created.
    pub fn ensure_file(&mut self, dir: &str, name: &str) -> Result<bool, FsError> {
        match self.create_child(dir, name, Node::file()) {
            Ok(()) => Ok(true),
            Err(FsError::AlreadyExists { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Create every missing directory along `path`.
    pub fn create_dir_all(&mut self, path: &str) -> Result<(), FsError> {
        let mut node = &mut self.root;
        let mut walked = String::from("/");
        for segment in segments(path) {
            let children = node
                .children_mut()
                .ok_or_else(|| FsError::not_a_directory(walked.clone()))?;
            walked = join(&walked, segment);
            node = children
                .entry(segment.to_string())
                .or_insert_with(Node::directory);
        }
        if node.is_dir() {
            Ok(())
        } else {
            Err(FsError::not_a_directory(walked))
        }
    }

    /// Detach `dir/name` and return it, subtree included.
    pub fn remove_child(&mut self, dir: &str, name: &str) -> Result<Node, FsError> {
        if !is_valid_name(name) {
            return Err(FsError::InvalidName {
                name: name.to_string(),
            });
        }
        let removed = self
            .directory_mut(dir)?
            .remove(name)
            .ok_or_else(|| FsError::not_found(join(dir, name)))?;
        debug!(
            path = %join(dir, name),
            kind = ?removed.kind(),
            descendants = removed.descendant_count(),
            "removed node"
        );
        Ok(removed)
    }

    /// Replace the content of the file at `path`.
    pub fn set_file_content(&mut self, path: &str, content: impl Into<String>) -> Result<(), FsError> {
        let node = self
            .get_node_at_path_mut(path)
            .ok_or_else(|| FsError::not_found(path))?;
        match node {
            Node::File { content: current } => {
                *current = content.into();
                debug!(path, bytes = current.len(), "wrote file");
                Ok(())
            }
            Node::Directory { .. } => Err(FsError::is_a_directory(path)),
        }
    }

    /// Pretty JSON dump of the whole tree.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.root)
    }
}
