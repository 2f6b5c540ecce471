//! Utility functions used throughout the application

use std::path::PathBuf;

/// Get platform-specific debug log directory and file name
pub fn get_debug_log_path() -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push("docdeck-debug.log");
    path
}

/// Format bytes into human-readable string (e.g., "1.2 KB", "5.3 MB")
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.0} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// Pseudo file size for a simulated upload, derived from the file name so
/// the same name always gets the same size
pub fn simulated_file_size(name: &str) -> String {
    let seed = name
        .bytes()
        .fold(7u64, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u64));
    format_bytes(20 * 1024 + seed % (4 * 1024 * 1024))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(120 * 1024), "120 KB");
        assert_eq!(format_bytes(2_516_582), "2.4 MB");
        assert_eq!(format_bytes(3 * 1024 * 1024 * 1024), "3.0 GB");
    }

    #[test]
    fn test_simulated_file_size_is_stable() {
        assert_eq!(simulated_file_size("plan.pdf"), simulated_file_size("plan.pdf"));
        assert!(simulated_file_size("plan.pdf").ends_with("KB") || simulated_file_size("plan.pdf").ends_with("MB"));
    }
}
