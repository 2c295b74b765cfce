//! URL classifier that detects which video platform a pasted link belongs to
//! and extracts the platform-specific video identifier.
//!
//! This module is a pattern-matching layer over a fixed table of recognition
//! rules. Rules are evaluated in priority order (YouTube rules before
//! Facebook rules); the first matching rule wins. Classification and
//! extraction are pure functions of the input string.
//!
//! # Example
//!
//! ```rust
//! use clipshelf_core::resolver::{self, Platform};
//!
//! let detection = resolver::resolve("https://www.youtube.com/watch?v=dQw4w9WgXcQ").unwrap();
//! assert_eq!(detection.platform, Platform::Youtube);
//! assert_eq!(detection.video_id, "dQw4w9WgXcQ");
//!
//! assert_eq!(resolver::classify("https://example.com"), Platform::Unknown);
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of video platforms recognized by URL shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Youtube,
    Facebook,
    Unknown,
}

impl Platform {
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Youtube => "youtube",
            Platform::Facebook => "facebook",
            Platform::Unknown => "unknown",
        }
    }

    /// Whether this platform is one Clipshelf can save entries for.
    pub fn is_recognized(self) -> bool {
        self != Platform::Unknown
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A successful classification: the platform plus the captured identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detection {
    pub platform: Platform,
    pub video_id: String,
    /// Human-readable description of the matched rule
    pub description: String,
}

/// Recognition rule for one URL shape.
#[derive(Debug, Clone)]
struct UrlPattern {
    /// Unique identifier for this pattern
    id: &'static str,
    /// The platform this pattern recognizes
    platform: Platform,
    /// Regex with a `video_id` named capture group
    pattern: Regex,
    /// Priority (higher = checked first)
    priority: u32,
    /// Human-readable description
    description: &'static str,
}

/// Information about a pattern for documentation (the `formats` command).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternInfo {
    pub id: String,
    pub platform: Platform,
    pub description: String,
    pub example: String,
}

static PATTERNS: Lazy<Vec<UrlPattern>> = Lazy::new(build_patterns);

/// Build the rule table. YouTube rules carry a higher priority than Facebook
/// rules; the ordering is a contract even though no known shape matches both
/// sets.
fn build_patterns() -> Vec<UrlPattern> {
    let mut patterns = vec![
        UrlPattern {
            id: "youtube_watch",
            platform: Platform::Youtube,
            pattern: Regex::new(
                r"(?:https?://)?(?:www\.|m\.)?youtube\.com/watch\?v=(?P<video_id>[A-Za-z0-9_-]+)",
            )
            .unwrap(),
            priority: 100,
            description: "YouTube watch URL (youtube.com/watch?v=...)",
        },
        UrlPattern {
            id: "youtube_short_link",
            platform: Platform::Youtube,
            pattern: Regex::new(r"(?:https?://)?youtu\.be/(?P<video_id>[A-Za-z0-9_-]+)").unwrap(),
            priority: 100,
            description: "YouTube short link (youtu.be/...)",
        },
        UrlPattern {
            id: "youtube_embed",
            platform: Platform::Youtube,
            pattern: Regex::new(
                r"(?:https?://)?(?:www\.)?youtube\.com/embed/(?P<video_id>[A-Za-z0-9_-]+)",
            )
            .unwrap(),
            priority: 100,
            description: "YouTube embed URL",
        },
        UrlPattern {
            id: "youtube_shorts",
            platform: Platform::Youtube,
            pattern: Regex::new(
                r"(?:https?://)?(?:www\.|m\.)?youtube\.com/shorts/(?P<video_id>[A-Za-z0-9_-]+)",
            )
            .unwrap(),
            priority: 100,
            description: "YouTube Shorts URL",
        },
        UrlPattern {
            id: "facebook_page_video",
            platform: Platform::Facebook,
            pattern: Regex::new(r"facebook\.com/.+/videos/(?P<video_id>\d+)").unwrap(),
            priority: 90,
            description: "Facebook page video URL (facebook.com/<page>/videos/...)",
        },
        UrlPattern {
            id: "facebook_watch",
            platform: Platform::Facebook,
            pattern: Regex::new(r"facebook\.com/watch/?\?v=(?P<video_id>\d+)").unwrap(),
            priority: 90,
            description: "Facebook watch URL (facebook.com/watch/?v=...)",
        },
        UrlPattern {
            id: "facebook_short_link",
            platform: Platform::Facebook,
            pattern: Regex::new(r"(?:https?://)?fb\.watch/(?P<video_id>[^/?\s]+)").unwrap(),
            priority: 90,
            description: "Facebook short link (fb.watch/...)",
        },
        UrlPattern {
            id: "facebook_reel",
            platform: Platform::Facebook,
            pattern: Regex::new(r"facebook\.com/reel/(?P<video_id>\d+)").unwrap(),
            priority: 90,
            description: "Facebook reel URL",
        },
    ];

    // Sort by priority (highest first)
    patterns.sort_by(|a, b| b.priority.cmp(&a.priority));
    patterns
}

/// Classify a URL into a platform. Returns [`Platform::Unknown`] when no
/// rule matches.
pub fn classify(url: &str) -> Platform {
    let url = url.trim();
    PATTERNS
        .iter()
        .find(|p| p.pattern.is_match(url))
        .map(|p| p.platform)
        .unwrap_or(Platform::Unknown)
}

/// Extract the platform-specific video identifier from a URL.
///
/// Consistent with [`classify`]: whenever `classify` names a platform, the
/// first matching rule here belongs to that platform and its capture group
/// yields the identifier.
pub fn extract_id(url: &str) -> Option<String> {
    let url = url.trim();
    for pattern in PATTERNS.iter() {
        if let Some(captures) = pattern.pattern.captures(url) {
            if let Some(m) = captures.name("video_id") {
                return Some(m.as_str().to_string());
            }
        }
    }
    None
}

/// Whether a URL matches any recognition rule. The validation gate before
/// persistence or any network action.
pub fn is_recognized(url: &str) -> bool {
    classify(url).is_recognized()
}

/// Classify a URL and extract its identifier in one pass.
///
/// Returns `None` if no rule matches the input.
pub fn resolve(url: &str) -> Option<Detection> {
    let url = url.trim();
    for pattern in PATTERNS.iter() {
        if let Some(captures) = pattern.pattern.captures(url) {
            if let Some(m) = captures.name("video_id") {
                return Some(Detection {
                    platform: pattern.platform,
                    video_id: m.as_str().to_string(),
                    description: pattern.description.to_string(),
                });
            }
        }
    }
    None
}

/// List all recognition rules (for documentation/help).
pub fn patterns() -> Vec<PatternInfo> {
    PATTERNS
        .iter()
        .map(|p| PatternInfo {
            id: p.id.to_string(),
            platform: p.platform,
            description: p.description.to_string(),
            example: pattern_example(p.id),
        })
        .collect()
}

/// Canonical watch URL for a YouTube video id.
pub fn watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={}", video_id)
}

/// Embed URL for a YouTube video id.
pub fn embed_url(video_id: &str) -> String {
    format!("https://www.youtube.com/embed/{}", video_id)
}

fn pattern_example(pattern_id: &str) -> String {
    match pattern_id {
        "youtube_watch" => "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
        "youtube_short_link" => "https://youtu.be/dQw4w9WgXcQ",
        "youtube_embed" => "https://www.youtube.com/embed/dQw4w9WgXcQ",
        "youtube_shorts" => "https://www.youtube.com/shorts/aBcDeFgHiJk",
        "facebook_page_video" => "https://www.facebook.com/somepage/videos/1234567890",
        "facebook_watch" => "https://www.facebook.com/watch/?v=1234567890",
        "facebook_short_link" => "https://fb.watch/aBcDeF12/",
        "facebook_reel" => "https://www.facebook.com/reel/1234567890",
        _ => "",
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_youtube_urls() {
        // Standard watch URL
        let detection = resolve("https://www.youtube.com/watch?v=dQw4w9WgXcQ").unwrap();
        assert_eq!(detection.platform, Platform::Youtube);
        assert_eq!(detection.video_id, "dQw4w9WgXcQ");

        // Short link
        let detection = resolve("https://youtu.be/dQw4w9WgXcQ").unwrap();
        assert_eq!(detection.platform, Platform::Youtube);
        assert_eq!(detection.video_id, "dQw4w9WgXcQ");

        // Embed URL
        let detection = resolve("https://www.youtube.com/embed/dQw4w9WgXcQ").unwrap();
        assert_eq!(detection.platform, Platform::Youtube);
        assert_eq!(detection.video_id, "dQw4w9WgXcQ");

        // Shorts
        let detection = resolve("https://www.youtube.com/shorts/aBcDeFgHiJk").unwrap();
        assert_eq!(detection.platform, Platform::Youtube);
        assert_eq!(detection.video_id, "aBcDeFgHiJk");
    }

    #[test]
    fn test_youtube_without_scheme() {
        assert_eq!(classify("youtube.com/watch?v=dQw4w9WgXcQ"), Platform::Youtube);
        assert_eq!(classify("youtu.be/dQw4w9WgXcQ"), Platform::Youtube);
    }

    #[test]
    fn test_facebook_urls() {
        let detection = resolve("https://www.facebook.com/somepage/videos/1234567890").unwrap();
        assert_eq!(detection.platform, Platform::Facebook);
        assert_eq!(detection.video_id, "1234567890");

        let detection = resolve("https://www.facebook.com/watch/?v=1234567890").unwrap();
        assert_eq!(detection.platform, Platform::Facebook);
        assert_eq!(detection.video_id, "1234567890");

        let detection = resolve("https://fb.watch/aBcDeF12/").unwrap();
        assert_eq!(detection.platform, Platform::Facebook);
        assert_eq!(detection.video_id, "aBcDeF12");

        let detection = resolve("https://www.facebook.com/reel/1234567890").unwrap();
        assert_eq!(detection.platform, Platform::Facebook);
        assert_eq!(detection.video_id, "1234567890");
    }

    #[test]
    fn test_unrecognized_input() {
        assert_eq!(classify("not a url"), Platform::Unknown);
        assert_eq!(classify("https://example.com"), Platform::Unknown);
        assert_eq!(classify("https://vimeo.com/12345"), Platform::Unknown);
        assert_eq!(extract_id("not a url"), None);
        assert_eq!(extract_id("https://example.com"), None);
        assert!(resolve("https://example.com").is_none());
        assert!(!is_recognized("https://example.com"));
    }

    #[test]
    fn test_classify_and_extract_agree() {
        let inputs = [
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://youtu.be/dQw4w9WgXcQ",
            "https://www.youtube.com/embed/dQw4w9WgXcQ",
            "https://www.youtube.com/shorts/aBcDeFgHiJk",
            "https://www.facebook.com/somepage/videos/42",
            "https://www.facebook.com/watch/?v=42",
            "https://fb.watch/xyz/",
            "https://www.facebook.com/reel/42",
        ];
        for input in inputs {
            let platform = classify(input);
            assert!(platform.is_recognized(), "expected {} to be recognized", input);
            assert!(
                extract_id(input).is_some(),
                "expected an id for recognized input {}",
                input
            );
        }
    }

    #[test]
    fn test_input_is_trimmed() {
        let detection = resolve("  https://youtu.be/dQw4w9WgXcQ\n").unwrap();
        assert_eq!(detection.video_id, "dQw4w9WgXcQ");
    }

    #[test]
    fn test_pure_and_idempotent() {
        let url = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";
        assert_eq!(classify(url), classify(url));
        assert_eq!(extract_id(url), extract_id(url));
        assert_eq!(resolve(url), resolve(url));
    }

    #[test]
    fn test_youtube_rules_sort_before_facebook() {
        let patterns = patterns();
        let first_facebook = patterns
            .iter()
            .position(|p| p.platform == Platform::Facebook)
            .unwrap();
        assert!(patterns[..first_facebook]
            .iter()
            .all(|p| p.platform == Platform::Youtube));
    }

    #[test]
    fn test_link_builders() {
        assert_eq!(
            watch_url("dQw4w9WgXcQ"),
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ"
        );
        assert_eq!(
            embed_url("dQw4w9WgXcQ"),
            "https://www.youtube.com/embed/dQw4w9WgXcQ"
        );
    }
}
