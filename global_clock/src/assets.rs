//! Texture store - lazy image loading with missing-asset fallback
//!
//! Backgrounds and clock skins are decoded once and cached by path. A file
//! that is absent or fails to decode is remembered as missing so it is probed
//! only once, and the window degrades to a fallback image or no image at all.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use nannou::prelude::*;
use nannou::wgpu;

use shared::TimeZoneCatalog;

/// Error raised when an image asset cannot be loaded
#[derive(Debug)]
pub struct MissingResource(pub PathBuf);

impl std::fmt::Display for MissingResource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Missing image resource: {}", self.0.display())
    }
}

impl std::error::Error for MissingResource {}

/// Root directory the relative media paths resolve against: next to the
/// executable when bundled, otherwise the working directory.
pub fn media_root() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .filter(|dir| dir.join("medias").is_dir())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Path-keyed texture cache. `None` marks a resource that failed to load.
pub struct TextureStore {
    root: PathBuf,
    cache: HashMap<PathBuf, Option<wgpu::Texture>>,
}

impl TextureStore {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            cache: HashMap::new(),
        }
    }

    /// Load `path` (relative to the media root) into the cache if it is not
    /// there yet. Returns whether a texture is available for it.
    pub fn ensure(&mut self, app: &App, path: &Path) -> bool {
        if let Some(cached) = self.cache.get(path) {
            return cached.is_some();
        }

        let full = self.root.join(path);
        let loaded = wgpu::Texture::from_path(app, &full).ok();
        if loaded.is_none() {
            eprintln!("{}", MissingResource(full));
        }
        let available = loaded.is_some();
        self.cache.insert(path.to_path_buf(), loaded);
        available
    }

    /// Cached texture for a relative path, if it loaded successfully
    pub fn get(&self, path: &Path) -> Option<&wgpu::Texture> {
        self.cache.get(path).and_then(Option::as_ref)
    }

    /// Background for a city, falling back to the first catalog image that
    /// loads when the city's own photo is missing. `None` means no background.
    pub fn background_for(
        &mut self,
        app: &App,
        zones: &TimeZoneCatalog,
        city: &str,
    ) -> Option<PathBuf> {
        if let Some(path) = zones.background_for(city) {
            if self.ensure(app, path) {
                return Some(path.to_path_buf());
            }
        } else {
            eprintln!("No background image defined for city: {}", city);
        }

        let fallback: Vec<PathBuf> = zones.all_backgrounds().map(Path::to_path_buf).collect();
        fallback.into_iter().find(|path| self.ensure(app, path))
    }
}
