/*!
 * lsfs - List the contents of a simulated file system
 *
 * This library loads a file-system tree described by a JSON document and
 * renders `ls`-style listings of it without touching the real file system.
 */

pub mod config;
pub mod error;
pub mod listing;
pub mod loader;
pub mod resolver;
pub mod selector;
pub mod types;
pub mod utils;


// Re-export main components for easier access
pub use config::{Config, STRUCTURE_FILE};
pub use error::{LsFsError, Result};
pub use listing::{sort_entries, Lister, ListingOptions};
pub use loader::{load_structure, parse_structure};
pub use resolver::{resolve, Resolved};
pub use selector::select;
pub use types::{DirectoryNode, FileNode, Metadata, Node, NodeKind};
pub use utils::human_readable_size;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
