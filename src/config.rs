//! Build-time Configuration
//!
//! Values are baked in at compile time via `option_env!` so the bundle
//! needs no runtime config file.

use log::LevelFilter;

/// Remote API base URL (no trailing slash)
pub const API_BASE_URL: &str = match option_env!("BOOKCOMPASS_API_URL") {
    Some(url) => url,
    None => "http://localhost:5000",
};

/// Raw log level string
const LOG_LEVEL_RAW: Option<&str> = option_env!("BOOKCOMPASS_LOG");

/// Local storage key for the session (token + user)
pub const SESSION_KEY: &str = "bookcompass.session";

/// Local storage key for the basket
pub const BASKET_KEY: &str = "bookcompass.basket";

/// How long a toast stays on screen
pub const TOAST_TIMEOUT_MS: u32 = 4_000;

/// Number of books per section on the home page
pub const FEATURED_COUNT: usize = 4;

/// Max quantity for a digital line item (e-books, audiobooks)
pub const DIGITAL_QUANTITY_CAP: u32 = 1;

/// Lines kept by the in-memory log buffer
pub const LOG_BUFFER_CAPACITY: usize = 200;

/// Audio skip step for the audiobook player
pub const AUDIO_SKIP_SECONDS: f64 = 15.0;

/// Resolve the configured log level
pub fn log_level() -> LevelFilter {
    parse_log_level(LOG_LEVEL_RAW)
}

fn parse_log_level(raw: Option<&str>) -> LevelFilter {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(LevelFilter::Info)
}

/// Join an API path onto the base URL
pub fn api_url(path: &str) -> String {
    let base = API_BASE_URL.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level(None), LevelFilter::Info);
        assert_eq!(parse_log_level(Some("debug")), LevelFilter::Debug);
        assert_eq!(parse_log_level(Some(" WARN ")), LevelFilter::Warn);
        assert_eq!(parse_log_level(Some("nonsense")), LevelFilter::Info);
    }

    #[test]
    fn test_api_url_joins_slashes() {
        let with_slash = api_url("/api/books/audiobooks");
        let without = api_url("api/books/audiobooks");
        assert_eq!(with_slash, without);
        assert!(with_slash.ends_with("/api/books/audiobooks"));
        assert!(!with_slash.contains("//api"));
    }
}
