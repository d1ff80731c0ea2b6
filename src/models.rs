//! Data models for scraped programs and the persisted cache entry.
//!
//! This module defines the two structures that cross component boundaries:
//! - [`Program`]: one program extracted from the NPO site (or seeded from the
//!   fallback catalog)
//! - [`ProgramCache`]: the single persisted cache entry wrapping a program
//!   list with its storage timestamp
//!
//! Field names use snake_case on the wire to stay compatible with the cache
//! files written by earlier versions of this tool.

use serde::{Deserialize, Serialize};

/// One program entry destined for the RSS feed.
///
/// Programs are created by the extractor (or the fallback catalog), persisted
/// verbatim by the cache store, and consumed read-only by the feed assembler.
///
/// # Fields
///
/// * `title` - Trimmed heading text, at least 3 characters
/// * `link` - Absolute URL to the program page
/// * `description` - Extracted description, or the fixed default
/// * `is_new` - Whether the source markup carried the "nieuw" marker
/// * `published_date` - RFC 3339 timestamp stamped at extraction time
/// * `image` - Optional image URL, rendered as an enclosure when present
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Program {
    /// The program title.
    pub title: String,
    /// Absolute link to the program page.
    pub link: String,
    /// Short description shown in the feed entry.
    pub description: String,
    /// True when the program is marked as new on the site.
    pub is_new: bool,
    /// Extraction timestamp in RFC 3339 form.
    pub published_date: String,
    /// Optional image URL; absent unless discoverable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// The persisted cache entry: a program list plus its storage time.
///
/// There is exactly one cache entry (no keying). It is overwritten on every
/// successful extraction and read once per pipeline invocation. `timestamp`
/// is epoch seconds; entries older than the configured validity window are
/// treated as absent.
#[derive(Debug, Deserialize, Serialize)]
pub struct ProgramCache {
    /// Epoch seconds at which the entry was written.
    pub timestamp: f64,
    /// The cached program list, in feed order.
    pub programs: Vec<Program>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_program() -> Program {
        Program {
            title: "Test Show".to_string(),
            link: "https://npo.nl/start/test-show".to_string(),
            description: "Programma op NPO".to_string(),
            is_new: true,
            published_date: "2025-05-06T20:30:00+00:00".to_string(),
            image: None,
        }
    }

    #[test]
    fn test_program_serialization_uses_snake_case() {
        let json = serde_json::to_string(&sample_program()).unwrap();
        assert!(json.contains("\"is_new\":true"));
        assert!(json.contains("\"published_date\""));
    }

    #[test]
    fn test_program_omits_absent_image() {
        let json = serde_json::to_string(&sample_program()).unwrap();
        assert!(!json.contains("image"));

        let mut with_image = sample_program();
        with_image.image = Some("https://npo.nl/img/test.jpg".to_string());
        let json = serde_json::to_string(&with_image).unwrap();
        assert!(json.contains("\"image\":\"https://npo.nl/img/test.jpg\""));
    }

    #[test]
    fn test_program_deserializes_without_image_field() {
        let json = r#"{
            "title": "Test Show",
            "link": "https://npo.nl/start/test-show",
            "description": "Programma op NPO",
            "is_new": false,
            "published_date": "2025-05-06T20:30:00+00:00"
        }"#;

        let program: Program = serde_json::from_str(json).unwrap();
        assert_eq!(program.title, "Test Show");
        assert!(!program.is_new);
        assert_eq!(program.image, None);
    }

    #[test]
    fn test_program_cache_round_trip() {
        let cache = ProgramCache {
            timestamp: 1_746_563_400.0,
            programs: vec![sample_program()],
        };

        let json = serde_json::to_string(&cache).unwrap();
        let parsed: ProgramCache = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.timestamp, 1_746_563_400.0);
        assert_eq!(parsed.programs, vec![sample_program()]);
    }
}
