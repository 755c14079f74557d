/*!
 * Selection of the entries of a directory to be listed
 */

use log::debug;

use crate::types::{DirectoryNode, Node, NodeKind};

/// Entries of `dir` in stored order, minus hidden ones unless `show_hidden`,
/// restricted to `filter` when one is given
pub fn select(dir: &DirectoryNode, show_hidden: bool, filter: Option<NodeKind>) -> Vec<&Node> {
    let selected: Vec<&Node> = dir
        .contents
        .iter()
        .filter(|node| show_hidden || !node.is_hidden())
        .filter(|node| filter.map_or(true, |kind| node.kind() == kind))
        .collect();

    debug!(
        "Selected {} of {} entries in '{}'",
        selected.len(),
        dir.contents.len(),
        dir.name
    );
    selected
}
