//! Format code caching.

use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::{Mutex, PoisonError};

use crate::ast::XLNumFmt;
use crate::error::FormatError;

/// Global cache for parsed format codes.
static CACHE: Mutex<Option<LruCache<String, XLNumFmt>>> = Mutex::new(None);

const CACHE_SIZE: NonZeroUsize = match NonZeroUsize::new(100) {
    Some(size) => size,
    None => panic!("cache size must be non-zero"),
};

/// Get or parse a format code, using the cache.
///
/// Cached formats share their sections with every caller, so repeated
/// lookups of a code are cheap clones.
pub fn get_or_parse(format_code: &str) -> Result<XLNumFmt, FormatError> {
    // Entries are only inserted whole, so a poisoned lock still guards a
    // consistent cache.
    let mut cache_guard = CACHE.lock().unwrap_or_else(PoisonError::into_inner);

    let cache = cache_guard.get_or_insert_with(|| LruCache::new(CACHE_SIZE));

    if let Some(fmt) = cache.get(format_code) {
        return Ok(fmt.clone());
    }

    let fmt = XLNumFmt::parse(format_code)?;
    tracing::trace!(format_code, "caching parsed format code");
    cache.put(format_code.to_string(), fmt.clone());
    Ok(fmt)
}
