/*!
 * Core types and data structures for the simulated file system
 */

use serde::Deserialize;
use strum::{Display, EnumString};

/// Kind of a node in the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum NodeKind {
    /// Node with a `contents` list
    #[strum(serialize = "dir")]
    Directory,
    /// Node without a `contents` list
    #[strum(serialize = "file")]
    File,
}

/// Listing metadata carried by every node
///
/// Fields are optional because the structure document is not validated on
/// load; the long format reports whichever one it needs and cannot find.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Metadata {
    /// Permission string such as `rwxr-xr-x`
    #[serde(default)]
    pub permissions: Option<String>,
    /// Modification time in seconds since the epoch
    #[serde(default)]
    pub time_modified: Option<i64>,
    /// Size in bytes
    #[serde(default)]
    pub size: Option<u64>,
}

/// Represents a directory in the tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryNode {
    /// Directory name (empty for the root)
    pub name: String,
    /// Directory metadata
    pub metadata: Metadata,
    /// Directory contents in stored order
    pub contents: Vec<Node>,
}

/// Represents a file in the tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNode {
    /// File name
    pub name: String,
    /// File metadata
    pub metadata: Metadata,
}

/// A generic tree node
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawNode")]
pub enum Node {
    /// Directory node
    Directory(DirectoryNode),
    /// File node
    File(FileNode),
}

/// Node as it appears in the structure document
#[derive(Deserialize)]
struct RawNode {
    #[serde(default)]
    name: String,
    #[serde(flatten)]
    metadata: Metadata,
    contents: Option<Vec<Node>>,
}

impl From<RawNode> for Node {
    fn from(raw: RawNode) -> Self {
        match raw.contents {
            Some(contents) => Node::Directory(DirectoryNode {
                name: raw.name,
                metadata: raw.metadata,
                contents,
            }),
            None => Node::File(FileNode {
                name: raw.name,
                metadata: raw.metadata,
            }),
        }
    }
}

impl Node {
    /// Node name
    pub fn name(&self) -> &str {
        match self {
            Node::Directory(dir) => &dir.name,
            Node::File(file) => &file.name,
        }
    }

    /// Node metadata
    pub fn metadata(&self) -> &Metadata {
        match self {
            Node::Directory(dir) => &dir.metadata,
            Node::File(file) => &file.metadata,
        }
    }

    /// Whether this node is a directory or a file
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Directory(_) => NodeKind::Directory,
            Node::File(_) => NodeKind::File,
        }
    }

    /// Hidden nodes have a name starting with `.`
    pub fn is_hidden(&self) -> bool {
        self.name().starts_with('.')
    }
}
