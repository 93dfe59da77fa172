//! Data model — content entries as stored by the content service, and the pages
//! derived from them.
//!
//! Entries are immutable inputs with all related data already denormalized onto
//! them (image URLs resolved, text hydrated). Pages are ephemeral: fully recomputed
//! on every pagination run, never patched incrementally.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ────────────────────────────────────────────────────────────────────────────
// Content entries
// ────────────────────────────────────────────────────────────────────────────

/// Kind-specific payload of a content entry.
///
/// The store rows are duck-typed (a `kind` column plus nullable payload columns);
/// modeled here as a tagged union so every placement rule is an exhaustive match.
/// Unrecognized kinds deserialize to [`EntryContent::Unknown`] rather than failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EntryContent {
    /// Section heading. `level` is 1–6, for the renderer only.
    Heading {
        #[serde(default)]
        text: String,
        #[serde(default = "default_heading_level")]
        level: u8,
    },
    /// Free-form text block.
    Text {
        #[serde(default)]
        text: String,
    },
    /// A photo that may share a page with other entries (up to the per-page cap).
    Photo {
        #[serde(default)]
        image: String,
        #[serde(default)]
        caption: Option<String>,
    },
    /// A scanned menu. Always page-isolated.
    Menu {
        #[serde(default)]
        image: String,
    },
    /// A photo spread occupying a page by itself. Always page-isolated.
    FullPagePhoto {
        #[serde(default)]
        image: String,
        #[serde(default)]
        caption: Option<String>,
    },
    /// An embedded blog post: title, body, optional featured image, gallery.
    Blog {
        #[serde(default)]
        title: String,
        #[serde(default)]
        body: String,
        #[serde(default)]
        featured_image: Option<String>,
        #[serde(default)]
        gallery: Vec<String>,
    },
    /// Fallback for kinds this engine version does not know.
    #[serde(other)]
    Unknown,
}

fn default_heading_level() -> u8 {
    1
}

impl EntryContent {
    /// Stable kind name, matching the store's `kind` column values.
    pub fn kind_name(&self) -> &'static str {
        match self {
            EntryContent::Heading { .. } => "heading",
            EntryContent::Text { .. } => "text",
            EntryContent::Photo { .. } => "photo",
            EntryContent::Menu { .. } => "menu",
            EntryContent::FullPagePhoto { .. } => "full_page_photo",
            EntryContent::Blog { .. } => "blog",
            EntryContent::Unknown => "unknown",
        }
    }

    /// True for kinds that must occupy a page exclusively.
    pub fn is_isolated(&self) -> bool {
        matches!(
            self,
            EntryContent::Menu { .. } | EntryContent::FullPagePhoto { .. }
        )
    }

    /// True for the shareable photo kind (subject to the per-page photo cap).
    pub fn is_photo(&self) -> bool {
        matches!(self, EntryContent::Photo { .. })
    }
}

/// One item to place on a page.
///
/// `order` is unique within a section and is the only placement precedence — the
/// packer groups entries into pages but never reorders them relative to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentEntry {
    pub id: Uuid,
    pub order: i64,
    /// Author directive: force a new page to start before this entry.
    /// A no-op on the first entry of a section.
    #[serde(default)]
    pub manual_break_before: bool,
    #[serde(flatten)]
    pub content: EntryContent,
}

// ────────────────────────────────────────────────────────────────────────────
// Pages
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageKind {
    Cover,
    Content,
}

/// A packed unit of output — one physical page of the scrapbook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// 1-based position in the final sequence (the cover, if present, is 1).
    pub index: usize,
    pub kind: PageKind,
    pub entries: Vec<ContentEntry>,
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
