//! Headless rendering backend: resolves texture keys through the asset
//! cache and records draw calls instead of rasterizing them.

use std::fs;
use std::path::PathBuf;

use glam::Vec3;
use homestead_assets::{AssetError, TextureCache, TextureHandle, TextureLoader};
use homestead_physics::Aabb;
use homestead_world::Renderer;
use tracing::trace;

const TEXTURE_DIR: &str = "assets/textures";

/// Loads textures from `assets/textures/<key>.png`.
///
/// Only the file read happens here; the handle is a running counter standing
/// in for a GPU upload.
#[derive(Default)]
pub struct FileTextureLoader {
    next_handle: u32,
}

impl TextureLoader for FileTextureLoader {
    fn load(&mut self, key: &str) -> Result<TextureHandle, AssetError> {
        let path = PathBuf::from(TEXTURE_DIR).join(format!("{key}.png"));
        fs::read(&path).map_err(|source| AssetError::Io {
            key: key.to_owned(),
            source,
        })?;
        self.next_handle += 1;
        Ok(TextureHandle(self.next_handle))
    }
}

/// How a recorded draw call was shaded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shading {
    /// The key resolved to a cached texture.
    Textured(TextureHandle),
    /// The key failed to load; the model renders in a flat color.
    FlatColor,
}

/// Draw-call recorder used by the headless session.
pub struct HeadlessRenderer<L: TextureLoader> {
    cache: TextureCache,
    loader: L,
    models_drawn: usize,
    wire_boxes_drawn: usize,
}

impl<L: TextureLoader> HeadlessRenderer<L> {
    /// A renderer resolving keys through `loader`.
    pub fn new(loader: L) -> Self {
        Self {
            cache: TextureCache::new(),
            loader,
            models_drawn: 0,
            wire_boxes_drawn: 0,
        }
    }

    /// Models drawn since construction.
    pub fn models_drawn(&self) -> usize {
        self.models_drawn
    }

    /// Wireframe boxes drawn since construction.
    pub fn wire_boxes_drawn(&self) -> usize {
        self.wire_boxes_drawn
    }

    fn resolve(&mut self, key: &str) -> Shading {
        match self.cache.get(key, &mut self.loader) {
            Some(handle) => Shading::Textured(handle),
            None => Shading::FlatColor,
        }
    }
}

impl<L: TextureLoader> Renderer for HeadlessRenderer<L> {
    fn draw_model(&mut self, key: &str, position: Vec3, size: Vec3) {
        let shading = self.resolve(key);
        self.models_drawn += 1;
        trace!(key, ?position, ?size, ?shading, "draw model");
    }

    fn draw_wire_box(&mut self, aabb: Aabb, color: [f32; 4]) {
        self.wire_boxes_drawn += 1;
        trace!(?aabb, ?color, "draw wire box");
    }
}
