//! Cover/Navigation Wrapper — per-session viewing state over packed pages.
//!
//! One `ScrapbookViewer` is constructed per viewing session and owns its cursor
//! explicitly; there is no module-level "current page" state. Navigation is
//! defensive throughout: out-of-range jumps clamp, `next`/`previous` at the ends
//! are no-ops, and every transition in the no-content state is ignored.

use tracing::debug;

use crate::errors::EngineError;
use crate::model::{ContentEntry, Page, PageKind};
use crate::packer::{pack, PaginationConfig};

// ────────────────────────────────────────────────────────────────────────────
// State machine
// ────────────────────────────────────────────────────────────────────────────

/// Viewing state: either there is nothing to show, or a 1-based current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerState {
    /// The section packed to zero pages and no cover was requested.
    /// Terminal until the next `load`; navigation is ignored.
    NoContent,
    Viewing(usize),
}

/// A viewing session over one section's packed pages.
pub struct ScrapbookViewer {
    config: PaginationConfig,
    pages: Vec<Page>,
    state: ViewerState,
}

impl ScrapbookViewer {
    /// Creates a viewer with no loaded content. The config is validated here —
    /// the engine's only fatal boundary (everything downstream is total).
    pub fn new(config: PaginationConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(ScrapbookViewer {
            config,
            pages: Vec::new(),
            state: ViewerState::NoContent,
        })
    }

    /// Packs `entries`, prepends a cover if configured, renumbers pages 1..N,
    /// and positions the cursor on page 1.
    ///
    /// Pages are fully recomputed on every load; call again whenever the
    /// underlying section changes.
    pub fn load(&mut self, entries: &[ContentEntry]) {
        let mut pages = pack(entries, &self.config);

        if self.config.include_cover {
            pages.insert(
                0,
                Page {
                    index: 1,
                    kind: PageKind::Cover,
                    entries: Vec::new(),
                },
            );
        }
        for (i, page) in pages.iter_mut().enumerate() {
            page.index = i + 1;
        }

        self.state = if pages.is_empty() {
            ViewerState::NoContent
        } else {
            ViewerState::Viewing(1)
        };
        debug!(
            pages = pages.len(),
            cover = self.config.include_cover,
            "loaded section into viewer"
        );
        self.pages = pages;
    }

    pub fn state(&self) -> ViewerState {
        self.state
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// The page under the cursor, or `None` in the no-content state.
    pub fn current_page(&self) -> Option<&Page> {
        match self.state {
            ViewerState::Viewing(i) => self.pages.get(i - 1),
            ViewerState::NoContent => None,
        }
    }

    /// Advances one page; no-op on the last page or with no content.
    pub fn next(&mut self) {
        if let ViewerState::Viewing(i) = self.state {
            if i < self.pages.len() {
                self.state = ViewerState::Viewing(i + 1);
            }
        }
    }

    /// Goes back one page; no-op on page 1 or with no content.
    pub fn previous(&mut self) {
        if let ViewerState::Viewing(i) = self.state {
            if i > 1 {
                self.state = ViewerState::Viewing(i - 1);
            }
        }
    }

    /// Jumps to the requested page, clamped into `[1, N]`. Out-of-range
    /// requests (including negative ones) are corrected, never rejected.
    pub fn jump(&mut self, requested: i64) {
        if let ViewerState::Viewing(_) = self.state {
            let clamped = requested.clamp(1, self.pages.len() as i64) as usize;
            self.state = ViewerState::Viewing(clamped);
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
