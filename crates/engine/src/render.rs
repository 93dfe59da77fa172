//! Renderer Adapter seam — the contract external renderers implement, plus the
//! shared block-grouping pass they all need.
//!
//! The engine never renders. The live viewer, the editor preview, and the
//! flip-book each plug in their own `PageRenderer` (HTML fragment, canvas, PDF
//! page) and consume the same packed pages, so their pagination can no longer
//! drift apart.

use crate::model::{ContentEntry, Page};

// ────────────────────────────────────────────────────────────────────────────
// Renderer contract
// ────────────────────────────────────────────────────────────────────────────

/// Converts one packed page into a displayable artifact.
///
/// Implementations live outside the engine. They must render entries in the
/// order given and should use [`layout_blocks`] so contiguous photos appear as
/// one grid block.
pub trait PageRenderer {
    type Output;

    fn render_page(&self, page: &Page) -> Self::Output;
}

// ────────────────────────────────────────────────────────────────────────────
// Block grouping
// ────────────────────────────────────────────────────────────────────────────

/// A visual block on a page: either one entry, or a run of photos rendered as
/// a single grid.
#[derive(Debug, PartialEq)]
pub enum PageBlock<'a> {
    Single(&'a ContentEntry),
    PhotoGrid(Vec<&'a ContentEntry>),
}

/// Groups a page's entries into render blocks.
///
/// Contiguous `photo` entries collapse into one `PhotoGrid` (a lone photo is a
/// grid of one); everything else becomes a `Single` block. Entry order is
/// preserved across blocks.
pub fn layout_blocks(page: &Page) -> Vec<PageBlock<'_>> {
    let mut blocks: Vec<PageBlock<'_>> = Vec::new();
    let mut run: Vec<&ContentEntry> = Vec::new();

    for entry in &page.entries {
        if entry.content.is_photo() {
            run.push(entry);
            continue;
        }
        if !run.is_empty() {
            blocks.push(PageBlock::PhotoGrid(std::mem::take(&mut run)));
        }
        blocks.push(PageBlock::Single(entry));
    }
    if !run.is_empty() {
        blocks.push(PageBlock::PhotoGrid(run));
    }
    blocks
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EntryContent, PageKind};
    use uuid::Uuid;

    fn make_entry(order: i64, content: EntryContent) -> ContentEntry {
        ContentEntry {
            id: Uuid::new_v4(),
            order,
            manual_break_before: false,
            content,
        }
    }

    fn make_photo(order: i64) -> ContentEntry {
        make_entry(
            order,
            EntryContent::Photo {
                image: format!("{order}.jpg"),
                caption: None,
            },
        )
    }

    fn make_text(order: i64) -> ContentEntry {
        make_entry(
            order,
            EntryContent::Text {
                text: "note".to_string(),
            },
        )
    }

    fn make_page(entries: Vec<ContentEntry>) -> Page {
        Page {
            index: 1,
            kind: PageKind::Content,
            entries,
        }
    }

    #[test]
    fn test_contiguous_photos_collapse_into_one_grid() {
        let page = make_page(vec![make_text(1), make_photo(2), make_photo(3), make_photo(4)]);
        let blocks = layout_blocks(&page);
        assert_eq!(blocks.len(), 2);
        assert!(matches!(blocks[0], PageBlock::Single(_)));
        match &blocks[1] {
            PageBlock::PhotoGrid(photos) => assert_eq!(photos.len(), 3),
            other => panic!("expected a photo grid, got {other:?}"),
        }
    }

    #[test]
    fn test_interleaved_photos_form_separate_grids() {
        let page = make_page(vec![make_photo(1), make_text(2), make_photo(3)]);
        let blocks = layout_blocks(&page);
        assert_eq!(blocks.len(), 3);
        assert!(matches!(blocks[0], PageBlock::PhotoGrid(_)));
        assert!(matches!(blocks[1], PageBlock::Single(_)));
        assert!(matches!(blocks[2], PageBlock::PhotoGrid(_)));
    }

    #[test]
    fn test_lone_photo_is_a_grid_of_one() {
        let page = make_page(vec![make_photo(1)]);
        let blocks = layout_blocks(&page);
        match &blocks[..] {
            [PageBlock::PhotoGrid(photos)] => assert_eq!(photos.len(), 1),
            other => panic!("expected one grid block, got {other:?}"),
        }
    }

    #[test]
    fn test_blocks_preserve_entry_order() {
        let page = make_page(vec![make_text(1), make_photo(2), make_text(3)]);
        let blocks = layout_blocks(&page);
        let orders: Vec<i64> = blocks
            .iter()
            .flat_map(|b| match b {
                PageBlock::Single(e) => vec![e.order],
                PageBlock::PhotoGrid(photos) => photos.iter().map(|e| e.order).collect(),
            })
            .collect();
        assert_eq!(orders, vec![1, 2, 3]);
    }

    #[test]
    fn test_empty_page_has_no_blocks() {
        let page = make_page(vec![]);
        assert!(layout_blocks(&page).is_empty());
    }

    #[test]
    fn test_renderer_trait_is_object_usable_per_page() {
        // Minimal text renderer standing in for the HTML/canvas/PDF adapters.
        struct KindLister;
        impl PageRenderer for KindLister {
            type Output = String;
            fn render_page(&self, page: &Page) -> String {
                page.entries
                    .iter()
                    .map(|e| e.content.kind_name())
                    .collect::<Vec<_>>()
                    .join(",")
            }
        }

        let page = make_page(vec![make_text(1), make_photo(2)]);
        assert_eq!(KindLister.render_page(&page), "text,photo");
    }
}
