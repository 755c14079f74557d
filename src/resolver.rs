/*!
 * Path resolution against the simulated tree
 */

use log::debug;

use crate::error::{LsFsError, Result};
use crate::types::{DirectoryNode, FileNode, Node, NodeKind};

/// Node found at the end of a path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolved<'a> {
    /// Path names a directory
    Directory(&'a DirectoryNode),
    /// Path names a file
    File(&'a FileNode),
}

impl Resolved<'_> {
    /// Kind of the resolved node
    pub fn kind(&self) -> NodeKind {
        match self {
            Resolved::Directory(_) => NodeKind::Directory,
            Resolved::File(_) => NodeKind::File,
        }
    }
}

/// Walk `path` from `root` one `/`-separated segment at a time
///
/// `""` and `"."` name the root. Every failure, whether a missing name or an
/// attempt to descend through a file, is reported as [`LsFsError::NotFound`].
/// An empty segment never matches, even a child loaded without a name.
pub fn resolve<'a>(root: &'a DirectoryNode, path: &str) -> Result<Resolved<'a>> {
    if path.is_empty() || path == "." {
        return Ok(Resolved::Directory(root));
    }

    let mut current = Resolved::Directory(root);
    for segment in path.split('/') {
        let dir = match current {
            Resolved::Directory(dir) => dir,
            Resolved::File(file) => {
                debug!("Cannot descend into file '{}' at '{}'", file.name, segment);
                return Err(LsFsError::NotFound(path.to_string()));
            }
        };

        if segment.is_empty() {
            debug!("Empty segment in '{}'", path);
            return Err(LsFsError::NotFound(path.to_string()));
        }

        current = match dir.contents.iter().find(|node| node.name() == segment) {
            Some(Node::Directory(child)) => Resolved::Directory(child),
            Some(Node::File(child)) => Resolved::File(child),
            None => {
                debug!("No entry '{}' in directory '{}'", segment, dir.name);
                return Err(LsFsError::NotFound(path.to_string()));
            }
        };
    }

    debug!("Resolved '{}' to a {}", path, current.kind());
    Ok(current)
}
