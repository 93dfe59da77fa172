//! Keepsake pagination engine.
//!
//! Takes a section's flat, ordered list of heterogeneous content entries (headings,
//! text blocks, photos, menus, full-page photos, blog posts) and deterministically
//! partitions it into fixed-size visual pages, honoring per-kind layout rules,
//! manual page-break directives, and an approximate content-height budget.
//!
//! The engine is a pure, synchronous computation module: no I/O, no async, no
//! globals. Entries arrive fully hydrated from the content store; rendering each
//! packed page is the caller's job via [`render::PageRenderer`].

pub mod errors;
pub mod estimate;
pub mod model;
pub mod packer;
pub mod render;
pub mod viewer;

// Re-export the public API consumed by viewers, editor previews, and renderers.
pub use errors::EngineError;
pub use estimate::estimated_height;
pub use model::{ContentEntry, EntryContent, Page, PageKind};
pub use packer::{pack, PaginationConfig};
pub use render::{layout_blocks, PageBlock, PageRenderer};
pub use viewer::{ScrapbookViewer, ViewerState};
