//! Human-readable byte counts

const UNITS: [&str; 8] = ["B", "KiB", "MiB", "GiB", "TiB", "PiB", "EiB", "ZiB"];

/// Render a byte count with binary units and one decimal place
///
/// ```
/// use tenet_client::format_size;
///
/// assert_eq!(format_size(2 * 1024 * 1024), "2.0 MiB");
/// assert_eq!(format_size(512), "512.0 B");
/// ```
pub fn format_size(bytes: u64) -> String {
    let mut value = bytes as f64;
    for unit in UNITS {
        if value < 1024.0 {
            return format!("{:.1} {}", value, unit);
        }
        value /= 1024.0;
    }
    format!("{:.1} YiB", value)
}
