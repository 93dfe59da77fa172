//! Height Estimator — maps one content entry to an estimated rendered height.
//!
//! Heights are in pixels and are intentional approximations: there is no real
//! layout engine behind web content of unknown height, so per-kind constants and
//! character counts stand in for measurement. The constants below are contract,
//! not implementation detail — changing any of them changes pagination.

use crate::model::{ContentEntry, EntryContent};

// ────────────────────────────────────────────────────────────────────────────
// Height constants (pixels)
// ────────────────────────────────────────────────────────────────────────────

pub const HEADING_HEIGHT: u32 = 60;
/// Floor for a text block, even when the text is empty or missing.
pub const TEXT_MIN_HEIGHT: u32 = 100;
pub const TEXT_HEIGHT_PER_CHAR: f64 = 0.5;
/// Sized so up to four photos share one 820px page.
pub const PHOTO_HEIGHT: u32 = 180;
/// Menus occupy nearly a full page — and are page-isolated regardless.
pub const MENU_HEIGHT: u32 = 600;
pub const FULL_PAGE_PHOTO_HEIGHT: u32 = 600;
pub const BLOG_BASE_HEIGHT: u32 = 200;
pub const BLOG_HEIGHT_PER_CHAR: f64 = 0.3;
/// Per attached image: the featured image plus every gallery image.
pub const BLOG_HEIGHT_PER_IMAGE: u32 = 200;
/// Defensive default for kinds this engine version does not know.
pub const UNKNOWN_HEIGHT: u32 = 100;

// ────────────────────────────────────────────────────────────────────────────
// Estimation
// ────────────────────────────────────────────────────────────────────────────

/// Estimates the rendered pixel height of a single entry.
///
/// Pure and total: malformed payloads (empty text, no images) fall back to the
/// documented floors, never an error.
pub fn estimated_height(entry: &ContentEntry) -> u32 {
    match &entry.content {
        EntryContent::Heading { .. } => HEADING_HEIGHT,
        EntryContent::Text { text } => {
            let scaled = (text.chars().count() as f64 * TEXT_HEIGHT_PER_CHAR).floor() as u32;
            scaled.max(TEXT_MIN_HEIGHT)
        }
        EntryContent::Photo { .. } => PHOTO_HEIGHT,
        EntryContent::Menu { .. } => MENU_HEIGHT,
        EntryContent::FullPagePhoto { .. } => FULL_PAGE_PHOTO_HEIGHT,
        EntryContent::Blog {
            body,
            featured_image,
            gallery,
            ..
        } => {
            let image_count = usize::from(featured_image.is_some()) + gallery.len();
            BLOG_BASE_HEIGHT
                + (body.chars().count() as f64 * BLOG_HEIGHT_PER_CHAR).floor() as u32
                + BLOG_HEIGHT_PER_IMAGE * image_count as u32
        }
        EntryContent::Unknown => UNKNOWN_HEIGHT,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn make_entry(content: EntryContent) -> ContentEntry {
        ContentEntry {
            id: Uuid::new_v4(),
            order: 0,
            manual_break_before: false,
            content,
        }
    }

    #[test]
    fn test_fixed_height_kinds() {
        let heading = make_entry(EntryContent::Heading {
            text: "Winter".to_string(),
            level: 2,
        });
        assert_eq!(estimated_height(&heading), 60);

        let photo = make_entry(EntryContent::Photo {
            image: "a.jpg".to_string(),
            caption: None,
        });
        assert_eq!(estimated_height(&photo), 180);

        let menu = make_entry(EntryContent::Menu {
            image: "m.png".to_string(),
        });
        assert_eq!(estimated_height(&menu), 600);

        let spread = make_entry(EntryContent::FullPagePhoto {
            image: "s.jpg".to_string(),
            caption: Some("The lake".to_string()),
        });
        assert_eq!(estimated_height(&spread), 600);
    }

    #[test]
    fn test_text_scales_at_half_pixel_per_char() {
        let text = make_entry(EntryContent::Text {
            text: "x".repeat(300),
        });
        assert_eq!(estimated_height(&text), 150, "300 chars * 0.5 = 150");

        let odd = make_entry(EntryContent::Text {
            text: "x".repeat(301),
        });
        assert_eq!(estimated_height(&odd), 150, "301 * 0.5 floors to 150");
    }

    #[test]
    fn test_empty_text_gets_the_floor() {
        let empty = make_entry(EntryContent::Text {
            text: String::new(),
        });
        assert_eq!(estimated_height(&empty), 100);

        let short = make_entry(EntryContent::Text {
            text: "hi".to_string(),
        });
        assert_eq!(estimated_height(&short), 100, "1px scaled, floored to 100");
    }

    #[test]
    fn test_blog_counts_featured_plus_gallery_images() {
        let blog = make_entry(EntryContent::Blog {
            title: "Road trip".to_string(),
            body: "y".repeat(1000),
            featured_image: Some("hero.jpg".to_string()),
            gallery: vec!["1.jpg".to_string(), "2.jpg".to_string()],
        });
        // 200 base + floor(1000 * 0.3) + 200 * 3 images
        assert_eq!(estimated_height(&blog), 200 + 300 + 600);
    }

    #[test]
    fn test_blog_with_no_body_and_no_images() {
        let blog = make_entry(EntryContent::Blog {
            title: "Untitled".to_string(),
            body: String::new(),
            featured_image: None,
            gallery: vec![],
        });
        assert_eq!(estimated_height(&blog), 200);
    }

    #[test]
    fn test_unknown_kind_gets_defensive_default() {
        let unknown = make_entry(EntryContent::Unknown);
        assert_eq!(estimated_height(&unknown), 100);
    }

    #[test]
    fn test_estimate_is_deterministic() {
        let entry = make_entry(EntryContent::Text {
            text: "the same text".to_string(),
        });
        assert_eq!(estimated_height(&entry), estimated_height(&entry));
    }
}
