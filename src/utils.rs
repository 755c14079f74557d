/*!
 * Utility functions for lsfs
 */

const UNITS: [&str; 4] = ["K", "M", "G", "T"];

/// Format a byte count the way `ls -h` does
///
/// Sizes below 1024 are printed as a bare integer; larger sizes are divided by
/// 1024 until they fit a unit and printed with one decimal place. Anything at
/// or beyond 1024T is shown in petabytes.
pub fn human_readable_size(size: u64) -> String {
    if size < 1024 {
        return size.to_string();
    }

    let mut scaled = size as f64 / 1024.0;
    for unit in UNITS {
        if scaled < 1024.0 {
            return format!("{:.1}{}", scaled, unit);
        }
        scaled /= 1024.0;
    }

    format!("{:.1}P", scaled)
}
