//! [`Graphics`] backed by the Bevy asset server

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use bevy::prelude::*;

use super::components::{ImageRegistry, RegistryEntry};
use crate::scene::{Graphics, ImageHandle, Size, TextStyle};

/// Loads go through the asset server and resolve asynchronously. The file is
/// checked for existence up front so a missing asset still fails the load.
pub struct BevyGraphics<'a> {
    assets: &'a AssetServer,
    asset_root: &'a Path,
    registry: &'a mut ImageRegistry,
}

impl<'a> BevyGraphics<'a> {
    pub fn new(
        assets: &'a AssetServer,
        asset_root: &'a Path,
        registry: &'a mut ImageRegistry,
    ) -> Self {
        Self {
            assets,
            asset_root,
            registry,
        }
    }

    fn push(&mut self, entry: RegistryEntry) -> ImageHandle {
        let handle = ImageHandle(self.registry.entries.len() as u32);
        self.registry.entries.push(entry);
        handle
    }
}

/// Resolve `path` under `root`, failing when no such file exists
fn existing_asset(root: &Path, path: &str) -> Result<PathBuf> {
    let full = root.join(path);
    if !full.is_file() {
        bail!("asset not found: {}", full.display());
    }
    Ok(full)
}

impl Graphics for BevyGraphics<'_> {
    fn load_image(&mut self, path: &str) -> Result<ImageHandle> {
        existing_asset(self.asset_root, path)?;
        let handle: Handle<Image> = self.assets.load(path.to_string());
        Ok(self.push(RegistryEntry::Image { handle, size: None }))
    }

    fn scale_image(&mut self, image: ImageHandle, size: Size) -> ImageHandle {
        if let Some(&scaled) = self.registry.scaled.get(&(image, size)) {
            return scaled;
        }
        let handle = match self.registry.get(image.0) {
            Some(RegistryEntry::Image { handle, .. }) => handle.clone(),
            _ => return image,
        };
        let scaled = self.push(RegistryEntry::Image {
            handle,
            size: Some(size),
        });
        self.registry.scaled.insert((image, size), scaled);
        scaled
    }

    fn render_text(&mut self, text: &str, style: &TextStyle) -> ImageHandle {
        let key = (text.to_string(), style.clone());
        if let Some(&rendered) = self.registry.texts.get(&key) {
            return rendered;
        }
        let font = style
            .font
            .as_ref()
            .map(|path| self.assets.load::<Font>(path.clone()));
        let rendered = self.push(RegistryEntry::Text {
            text: text.to_string(),
            font,
            size: style.size,
            color: Color::srgb_u8(style.color.r, style.color.g, style.color.b),
        });
        self.registry.texts.insert(key, rendered);
        rendered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_asset_is_an_error() {
        let root = Path::new(env!("CARGO_MANIFEST_DIR"));
        let err = existing_asset(root, "Assets/not_there.png").unwrap_err();
        assert!(err.to_string().contains("asset not found"));
    }

    #[test]
    fn existing_asset_resolves_under_root() {
        let root = Path::new(env!("CARGO_MANIFEST_DIR"));
        let full = existing_asset(root, "Cargo.toml").unwrap();
        assert_eq!(full, root.join("Cargo.toml"));
    }

    #[test]
    fn directory_is_not_an_asset() {
        let root = Path::new(env!("CARGO_MANIFEST_DIR"));
        assert!(existing_asset(root, "src").is_err());
    }
}
