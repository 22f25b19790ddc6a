#![warn(missing_docs)]
//! Texture loading seam with process-lifetime caching.
//!
//! The renderer collaborator implements [`TextureLoader`]; the cache makes
//! sure each key is loaded at most once and that a failed load degrades to
//! flat-color rendering instead of aborting the session.

use std::collections::HashMap;

use thiserror::Error;
use tracing::warn;

/// Opaque handle to a texture the rendering backend has uploaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u32);

/// Errors emitted while loading textures.
#[derive(Debug, Error)]
pub enum AssetError {
    /// Wrap IO errors when reading texture files.
    #[error("failed to read texture {key}: {source}")]
    Io {
        /// Cache key of the texture that failed to load.
        key: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// The file was read but could not be decoded.
    #[error("unsupported texture format for {0}")]
    Format(String),
}

/// Loader seam implemented by the rendering backend.
pub trait TextureLoader {
    /// Load and upload the texture identified by `key`.
    fn load(&mut self, key: &str) -> Result<TextureHandle, AssetError>;
}

enum CacheEntry {
    Loaded(TextureHandle),
    Failed,
}

/// Texture cache keyed by string, alive for the whole process.
#[derive(Default)]
pub struct TextureCache {
    entries: HashMap<String, CacheEntry>,
}

impl TextureCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Fetch the handle for `key`, loading it on first use. A failed load is
    /// logged once, remembered, and reported as `None` so callers fall back
    /// to flat-color rendering.
    pub fn get(&mut self, key: &str, loader: &mut dyn TextureLoader) -> Option<TextureHandle> {
        if !self.entries.contains_key(key) {
            let entry = match loader.load(key) {
                Ok(handle) => CacheEntry::Loaded(handle),
                Err(err) => {
                    warn!("texture {key} unavailable: {err}; falling back to flat color");
                    CacheEntry::Failed
                }
            };
            self.entries.insert(key.to_owned(), entry);
        }
        match self.entries.get(key) {
            Some(CacheEntry::Loaded(handle)) => Some(*handle),
            _ => None,
        }
    }

    /// Number of cached entries (including recorded failures).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been loaded yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CountingLoader {
        calls: usize,
        fail: bool,
    }

    impl TextureLoader for CountingLoader {
        fn load(&mut self, key: &str) -> Result<TextureHandle, AssetError> {
            self.calls += 1;
            if self.fail {
                Err(AssetError::Format(key.to_owned()))
            } else {
                Ok(TextureHandle(self.calls as u32))
            }
        }
    }

    #[test]
    fn loads_each_key_once() {
        let mut cache = TextureCache::new();
        let mut loader = CountingLoader {
            calls: 0,
            fail: false,
        };
        let first = cache.get("dirt", &mut loader);
        let second = cache.get("dirt", &mut loader);
        assert_eq!(first, second);
        assert_eq!(loader.calls, 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn failed_load_is_remembered() {
        let mut cache = TextureCache::new();
        let mut loader = CountingLoader {
            calls: 0,
            fail: true,
        };
        assert!(cache.get("missing", &mut loader).is_none());
        assert!(cache.get("missing", &mut loader).is_none());
        // The failure is cached; the loader is not retried every frame.
        assert_eq!(loader.calls, 1);
    }

    #[test]
    fn distinct_keys_load_separately() {
        let mut cache = TextureCache::new();
        let mut loader = CountingLoader {
            calls: 0,
            fail: false,
        };
        let dirt = cache.get("dirt", &mut loader);
        let farmland = cache.get("farmland", &mut loader);
        assert_ne!(dirt, farmland);
        assert_eq!(loader.calls, 2);
    }
}
