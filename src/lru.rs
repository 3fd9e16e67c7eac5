//! LRU Cache for Paragraph Deduplication
//!
//! Publisher templates often render the same paragraph twice inside one
//! section (a hidden mobile copy next to the desktop copy). The section
//! assembler checks each paragraph against this cache before appending it.
//!
//! This module re-exports `LruCache` from the `html-cleaning` crate.

pub use html_cleaning::dedup::LruCache;

/// Capacity used for one section's paragraph cache.
pub const SECTION_DEDUP_CAPACITY: usize = 256;

/// Returns `true` the first time `text` is offered to `cache`.
pub fn first_sighting(cache: &mut LruCache, text: &str) -> bool {
    let key = text.to_string();
    if cache.get(&key).is_some() {
        return false;
    }
    cache.put(&key, 1);
    true
}
