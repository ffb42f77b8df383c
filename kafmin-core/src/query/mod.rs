//! Listing order and cursor-based pagination support.
//!
//! Sorting is applied as the final step of every listing, using a registry
//! of per-field comparators built once at first use. Cursors produced by the
//! model types decode into skeleton entities that these comparators can
//! position within an ordered listing.

pub mod page;
pub mod sort;
