/*!
 * Sorting and rendering of listings
 *
 * A listing is rendered into a `String` in full before anything is printed,
 * so a failure part way through (a missing field in long format, say) never
 * leaves partial output behind.
 */

use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone};
use log::debug;

use crate::error::{LsFsError, Result};
use crate::resolver::Resolved;
use crate::selector::select;
use crate::types::{DirectoryNode, FileNode, Metadata, Node, NodeKind};
use crate::utils::human_readable_size;

/// Format of the modification time column
const TIME_FORMAT: &str = "%b %d %H:%M";

/// Options controlling how a listing is produced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListingOptions {
    /// One entry per line with permissions, size and time
    pub long: bool,
    /// Include entries whose name starts with `.`
    pub show_hidden: bool,
    /// Invert the sort order
    pub reverse: bool,
    /// Sort by modification time instead of name
    pub sort_by_time: bool,
    /// Scale sizes with K/M/G/T/P units
    pub human_readable: bool,
    /// Only list entries of this kind
    pub filter: Option<NodeKind>,
}

/// Order `entries` by name, or by modification time when `sort_by_time`,
/// then invert the result when `reverse`
///
/// Both sorts are stable. Entries without a modification time sort first.
pub fn sort_entries(entries: &mut [&Node], sort_by_time: bool, reverse: bool) {
    if sort_by_time {
        entries.sort_by_key(|node| node.metadata().time_modified);
    } else {
        entries.sort_by(|a, b| a.name().cmp(b.name()));
    }

    if reverse {
        entries.reverse();
    }
}

/// Renders resolved nodes as listing text
pub struct Lister<Tz: TimeZone = Local> {
    options: ListingOptions,
    timezone: Tz,
}

impl Lister<Local> {
    /// Create a lister rendering times in the local timezone
    pub fn new(options: ListingOptions) -> Self {
        Self::with_timezone(options, Local)
    }
}

impl<Tz: TimeZone> Lister<Tz>
where
    Tz::Offset: Display,
{
    /// Create a lister rendering times in `timezone`
    pub fn with_timezone(options: ListingOptions, timezone: Tz) -> Self {
        Self { options, timezone }
    }

    /// Render the listing for a resolved path
    pub fn render(&self, target: Resolved<'_>) -> Result<String> {
        match target {
            Resolved::Directory(dir) => self.render_directory(dir),
            Resolved::File(file) => self.render_file(file),
        }
    }

    /// Render the selected and sorted entries of a directory
    pub fn render_directory(&self, dir: &DirectoryNode) -> Result<String> {
        let mut entries = select(dir, self.options.show_hidden, self.options.filter);
        sort_entries(&mut entries, self.options.sort_by_time, self.options.reverse);
        debug!(
            "Rendering {} entries ({} format)",
            entries.len(),
            if self.options.long { "long" } else { "short" }
        );

        let mut out = String::new();
        if self.options.long {
            for node in entries {
                let line = self.long_line(node.name(), node.metadata(), node.name())?;
                out.push_str(&line);
                out.push('\n');
            }
        } else {
            for node in entries {
                out.push_str(node.name());
                out.push_str("  ");
            }
            out.push('\n');
        }

        Ok(out)
    }

    /// Render a single file named directly on the command line
    pub fn render_file(&self, file: &FileNode) -> Result<String> {
        if self.options.long {
            let display_name = format!("./{}", file.name);
            let mut line = self.long_line(&file.name, &file.metadata, &display_name)?;
            line.push('\n');
            Ok(line)
        } else {
            Ok(format!("{}\n", file.name))
        }
    }

    /// Format one long-format line: permissions, size, time, name
    fn long_line(&self, name: &str, metadata: &Metadata, display_name: &str) -> Result<String> {
        let missing = |field| LsFsError::MissingField {
            name: name.to_string(),
            field,
        };

        let permissions = metadata
            .permissions
            .as_deref()
            .ok_or_else(|| missing("permissions"))?;
        let size = metadata.size.ok_or_else(|| missing("size"))?;
        let time_modified = metadata
            .time_modified
            .ok_or_else(|| missing("modification time"))?;

        let size = if self.options.human_readable {
            human_readable_size(size)
        } else {
            size.to_string()
        };
        let time = self.format_time(name, time_modified)?;

        Ok(format!(
            "{:<10} {:>5} {} {}",
            permissions, size, time, display_name
        ))
    }

    /// Format a modification time as `Mon DD HH:MM`
    fn format_time(&self, name: &str, secs: i64) -> Result<String> {
        let utc = DateTime::from_timestamp(secs, 0).ok_or_else(|| LsFsError::InvalidTimestamp {
            name: name.to_string(),
            value: secs,
        })?;

        Ok(utc
            .with_timezone(&self.timezone)
            .format(TIME_FORMAT)
            .to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::parse_structure;
    use chrono::Utc;

    fn dir(json: &str) -> DirectoryNode {
        parse_structure(json).unwrap()
    }

    fn sample() -> DirectoryNode {
        dir(r#"{
            "name": "",
            "contents": [
                {"name": "b.txt", "size": 2048, "time_modified": 300, "permissions": "rw-r--r--"},
                {"name": "a.txt", "size": 10, "time_modified": 100, "permissions": "rw-r--r--"},
                {"name": "C.txt", "size": 20, "time_modified": 100, "permissions": "rw-------"},
                {"name": "d", "contents": [], "size": 4096, "time_modified": 200, "permissions": "rwxr-xr-x"}
            ]
        }"#)
    }

    fn names(entries: &[&Node]) -> Vec<String> {
        entries.iter().map(|n| n.name().to_string()).collect()
    }

    fn utc_lister(options: ListingOptions) -> Lister<Utc> {
        Lister::with_timezone(options, Utc)
    }

    #[test]
    fn test_sort_by_name_is_case_sensitive() {
        let root = sample();
        let mut entries: Vec<&Node> = root.contents.iter().collect();
        sort_entries(&mut entries, false, false);
        assert_eq!(names(&entries), ["C.txt", "a.txt", "b.txt", "d"]);
    }

    #[test]
    fn test_reverse_is_exact_reverse_of_name_sort() {
        let root = sample();
        let mut forward: Vec<&Node> = root.contents.iter().collect();
        sort_entries(&mut forward, false, false);
        let mut backward: Vec<&Node> = root.contents.iter().collect();
        sort_entries(&mut backward, false, true);

        forward.reverse();
        assert_eq!(names(&forward), names(&backward));
    }

    #[test]
    fn test_sort_by_time_is_stable() {
        let root = sample();
        let mut entries: Vec<&Node> = root.contents.iter().collect();
        sort_entries(&mut entries, true, false);
        // a.txt and C.txt share a timestamp and keep their stored order
        assert_eq!(names(&entries), ["a.txt", "C.txt", "d", "b.txt"]);

        sort_entries(&mut entries, true, true);
        assert_eq!(names(&entries), ["b.txt", "d", "C.txt", "a.txt"]);
    }

    #[test]
    fn test_short_listing() {
        let output = utc_lister(ListingOptions::default())
            .render_directory(&sample())
            .unwrap();
        assert_eq!(output, "C.txt  a.txt  b.txt  d  \n");
    }

    #[test]
    fn test_short_listing_of_empty_directory() {
        let output = utc_lister(ListingOptions::default())
            .render_directory(&dir(r#"{"contents": []}"#))
            .unwrap();
        assert_eq!(output, "\n");
    }

    #[test]
    fn test_long_listing_layout() {
        let options = ListingOptions {
            long: true,
            filter: Some(NodeKind::File),
            ..Default::default()
        };
        let output = utc_lister(options).render_directory(&sample()).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(
            lines,
            [
                "rw-------     20 Jan 01 00:01 C.txt",
                "rw-r--r--     10 Jan 01 00:01 a.txt",
                "rw-r--r--   2048 Jan 01 00:05 b.txt",
            ]
        );
    }

    #[test]
    fn test_long_listing_human_readable() {
        let options = ListingOptions {
            long: true,
            human_readable: true,
            sort_by_time: true,
            reverse: true,
            ..Default::default()
        };
        let output = utc_lister(options).render_directory(&sample()).unwrap();
        let first = output.lines().next().unwrap();
        assert_eq!(first, "rw-r--r--   2.0K Jan 01 00:05 b.txt");
        assert!(output.contains("rwxr-xr-x   4.0K Jan 01 00:03 d"));
    }

    #[test]
    fn test_single_file() {
        let file = FileNode {
            name: "file1.txt".to_string(),
            metadata: Metadata {
                permissions: Some("rw-r--r--".to_string()),
                time_modified: Some(1609459200),
                size: Some(100),
            },
        };

        let short = utc_lister(ListingOptions::default()).render_file(&file).unwrap();
        assert_eq!(short, "file1.txt\n");

        let long = utc_lister(ListingOptions {
            long: true,
            ..Default::default()
        })
        .render_file(&file)
        .unwrap();
        assert_eq!(long, "rw-r--r--    100 Jan 01 00:00 ./file1.txt\n");
    }

    #[test]
    fn test_long_listing_requires_metadata() {
        let root = dir(r#"{"contents": [{"name": "subdir", "contents": [], "permissions": "rwxr-xr-x", "time_modified": 0}]}"#);
        let options = ListingOptions {
            long: true,
            ..Default::default()
        };

        match utc_lister(options).render_directory(&root) {
            Err(LsFsError::MissingField { name, field }) => {
                assert_eq!(name, "subdir");
                assert_eq!(field, "size");
            }
            other => panic!("unexpected result: {:?}", other),
        }

        // The short format never looks at metadata
        assert_eq!(
            utc_lister(ListingOptions::default())
                .render_directory(&root)
                .unwrap(),
            "subdir  \n"
        );
    }

    #[test]
    fn test_out_of_range_timestamp() {
        let root = dir(r#"{"contents": [{"name": "f", "size": 1, "permissions": "rw-r--r--", "time_modified": 9223372036854775807}]}"#);
        let options = ListingOptions {
            long: true,
            ..Default::default()
        };
        assert!(matches!(
            utc_lister(options).render_directory(&root),
            Err(LsFsError::InvalidTimestamp { .. })
        ));
    }
}
