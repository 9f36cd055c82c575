//! Display Helpers
//!
//! Counter formatting and URL helpers for card faces.

/// Screenshot thumbnail service template; the site URL is appended as-is
const SCREENSHOT_PREFIX: &str = "https://image.thum.io/get/width/375/crop/800/viewportWidth/375/";

/// Compact counter: 45200 -> "45.2K", 1000 -> "1K", 999 -> "999"
pub fn format_count(n: u32) -> String {
    if n >= 1000 {
        let thousands = format!("{:.1}", n as f64 / 1000.0);
        let trimmed = thousands.strip_suffix(".0").unwrap_or(&thousands);
        format!("{}K", trimmed)
    } else {
        n.to_string()
    }
}

/// Thumbnail URL for a site
pub fn screenshot_url(url: &str) -> String {
    format!("{}{}", SCREENSHOT_PREFIX, url)
}

/// URL without the scheme, for captions
pub fn display_url(url: &str) -> &str {
    url.strip_prefix("https://").unwrap_or(url)
}
