//! Pagination types shared with the api crate.
//!
//! Offset pages (`PageRequest`/`Page`) serve history listings, cursor pages
//! (`ScrollRequest`/`ScrollPage`) serve the customer scroll.

pub use customer_core_api::pagination::{Page, PageRequest, ScrollPage, ScrollRequest};
