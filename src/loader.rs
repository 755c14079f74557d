/*!
 * Loading the simulated tree from its JSON description
 */

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use log::debug;

use crate::bail;
use crate::error::{LsFsError, Result};
use crate::types::{DirectoryNode, Node};

/// Load the root directory from a structure document on disk
pub fn load_structure(path: &Path) -> Result<DirectoryNode> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(LsFsError::MissingStructure(path.to_path_buf()))
        }
        Err(e) => return Err(e.into()),
    };

    debug!("Loading structure from {}", path.display());
    let node: Node = serde_json::from_reader(BufReader::new(file))?;
    into_root(node)
}

/// Parse the root directory from an in-memory structure document
pub fn parse_structure(document: &str) -> Result<DirectoryNode> {
    let node: Node = serde_json::from_str(document)?;
    into_root(node)
}

fn into_root(node: Node) -> Result<DirectoryNode> {
    match node {
        Node::Directory(root) => {
            debug!("Loaded root with {} entries", root.contents.len());
            Ok(root)
        }
        Node::File(file) => bail!(InvalidStructure, "root node '{}' has no contents", file.name),
    }
}
