//! Page Packer — greedy single-pass bin-packing of content entries into pages.
//!
//! # Placement rules
//! - `manual_break_before` closes the current page first (no-op on a fresh page).
//! - `menu` and `full_page_photo` are isolated: always alone on their own page.
//! - `photo` entries share a page up to `photo_share_per_page`; the cap, not the
//!   height budget, decides when a photo forces a new page.
//! - Everything else fits by estimated height against the page budget, less a
//!   safety margin; an entry too tall for any page still lands alone (overflow is
//!   accepted, never split or dropped).
//!
//! Entries are processed strictly in `order` — the packer groups, never reorders.
//! The pass is O(n), total over its input, and fully recomputed on every run.

use tracing::{debug, warn};

use crate::errors::EngineError;
use crate::estimate::estimated_height;
use crate::model::{ContentEntry, Page, PageKind};

// ────────────────────────────────────────────────────────────────────────────
// Configuration
// ────────────────────────────────────────────────────────────────────────────

pub const DEFAULT_PAGE_HEIGHT_BUDGET: u32 = 820;
pub const DEFAULT_PHOTO_SHARE_PER_PAGE: usize = 4;
pub const DEFAULT_SAFETY_MARGIN: u32 = 200;
/// Header/footer space treated as already spent on every page.
pub const BASE_PADDING: u32 = 100;

/// Pagination knobs. The defaults are the documented contract; changing any of
/// them changes pagination output deterministically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationConfig {
    /// Maximum estimated content height per page, in pixels.
    pub page_height_budget: u32,
    /// Whether the viewer prepends a synthetic cover page.
    pub include_cover: bool,
    /// Maximum number of `photo` entries on one page.
    pub photo_share_per_page: usize,
    /// Height reserved below the budget before an entry is considered a fit.
    pub safety_margin: u32,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        PaginationConfig {
            page_height_budget: DEFAULT_PAGE_HEIGHT_BUDGET,
            include_cover: true,
            photo_share_per_page: DEFAULT_PHOTO_SHARE_PER_PAGE,
            safety_margin: DEFAULT_SAFETY_MARGIN,
        }
    }
}

impl PaginationConfig {
    /// Rejects configurations under which the fit check is degenerate.
    ///
    /// The budget must leave room above the safety margin and base padding, and
    /// at least one photo must be allowed per page.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.page_height_budget <= self.safety_margin + BASE_PADDING {
            return Err(EngineError::Config(format!(
                "page_height_budget ({}) must exceed safety_margin ({}) + base padding ({})",
                self.page_height_budget, self.safety_margin, BASE_PADDING
            )));
        }
        if self.photo_share_per_page == 0 {
            return Err(EngineError::Config(
                "photo_share_per_page must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Packing
// ────────────────────────────────────────────────────────────────────────────

/// Packs a section's entries into content pages.
///
/// Input may arrive in store order; the working list is stable-sorted by `order`
/// (the sole placement precedence) before the forward pass. Every entry appears
/// in exactly one output page. Empty input yields zero pages.
pub fn pack(entries: &[ContentEntry], config: &PaginationConfig) -> Vec<Page> {
    let mut ordered: Vec<&ContentEntry> = entries.iter().collect();
    ordered.sort_by_key(|entry| entry.order);

    let fit_ceiling = config.page_height_budget - config.safety_margin;

    let mut raw_pages: Vec<Vec<ContentEntry>> = Vec::new();
    let mut current: Vec<ContentEntry> = Vec::new();
    let mut current_height = BASE_PADDING;
    let mut photos_on_page = 0usize;

    for entry in ordered {
        if entry.manual_break_before && !current.is_empty() {
            close_page(&mut raw_pages, &mut current, &mut current_height, &mut photos_on_page);
        }

        if entry.content.is_isolated() {
            // Never shares a page, before or after.
            close_page(&mut raw_pages, &mut current, &mut current_height, &mut photos_on_page);
            raw_pages.push(vec![entry.clone()]);
            continue;
        }

        if entry.content.is_photo() {
            if photos_on_page >= config.photo_share_per_page {
                close_page(&mut raw_pages, &mut current, &mut current_height, &mut photos_on_page);
            }
            current_height += estimated_height(entry);
            photos_on_page += 1;
            current.push(entry.clone());
            continue;
        }

        let height = estimated_height(entry);
        if !current.is_empty() && current_height + height > fit_ceiling {
            close_page(&mut raw_pages, &mut current, &mut current_height, &mut photos_on_page);
        }
        if current.is_empty() && BASE_PADDING + height > fit_ceiling {
            // Too tall for any page: placed alone, overflow accepted.
            warn!(
                entry_id = %entry.id,
                kind = entry.content.kind_name(),
                height,
                fit_ceiling,
                "entry exceeds the page budget; placing it alone with overflow"
            );
        }
        current_height += height;
        current.push(entry.clone());
    }

    if !current.is_empty() {
        raw_pages.push(current);
    }

    let pages: Vec<Page> = raw_pages
        .into_iter()
        .enumerate()
        .map(|(i, entries)| Page {
            index: i + 1,
            kind: PageKind::Content,
            entries,
        })
        .collect();

    debug!(
        entries = entries.len(),
        pages = pages.len(),
        budget = config.page_height_budget,
        "packed section"
    );
    pages
}

/// Closes the accumulator page if non-empty and resets per-page state.
fn close_page(
    raw_pages: &mut Vec<Vec<ContentEntry>>,
    current: &mut Vec<ContentEntry>,
    current_height: &mut u32,
    photos_on_page: &mut usize,
) {
    if !current.is_empty() {
        raw_pages.push(std::mem::take(current));
    }
    *current_height = BASE_PADDING;
    *photos_on_page = 0;
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
