//! The graphics collaborator seen from the scene engine
//!
//! The engine never talks to a window directly. It asks a [`Graphics`]
//! implementation to load, scale and rasterize things into [`ImageHandle`]s,
//! and hands those handles to a [`Canvas`] once per frame. The headless
//! implementations here back the console runner and the tests; the Bevy
//! frontend provides its own.

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{bail, Result};

use super::types::{Color, ImageHandle, Position, Size};

/// Everything a text rasterizer needs besides the string itself
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextStyle {
    /// Font file, or `None` for the backend's default font
    pub font: Option<String>,
    pub size: u32,
    pub antialias: bool,
    pub color: Color,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font: None,
            size: 10,
            antialias: true,
            color: Color::BLACK,
        }
    }
}

/// Image loading, scaling and text rasterization
pub trait Graphics {
    fn load_image(&mut self, path: &str) -> Result<ImageHandle>;
    fn scale_image(&mut self, image: ImageHandle, size: Size) -> ImageHandle;
    fn render_text(&mut self, text: &str, style: &TextStyle) -> ImageHandle;
}

/// The per-frame blit target
pub trait Canvas {
    fn blit(&mut self, image: ImageHandle, at: Position);
}

/// One recorded blit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawCall {
    pub image: ImageHandle,
    pub at: Position,
}

/// A [`Canvas`] that records blits in order
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    calls: Vec<DrawCall>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    /// Forget the previous frame
    pub fn clear(&mut self) {
        self.calls.clear();
    }

    pub fn contains(&self, image: ImageHandle) -> bool {
        self.calls.iter().any(|call| call.image == image)
    }
}

impl Canvas for DrawList {
    fn blit(&mut self, image: ImageHandle, at: Position) {
        self.calls.push(DrawCall { image, at });
    }
}

#[derive(Debug, Clone)]
enum Entry {
    Image { path: String, size: Option<Size> },
    Text { text: String, style: TextStyle },
}

/// Graphics backend that only keeps bookkeeping about what was asked of it
///
/// Without an asset root every path is accepted. With one, loading a file
/// that does not exist under the root fails. Scaling the same image to the
/// same size, or rasterizing the same string in the same style, hands back
/// the earlier handle.
#[derive(Debug, Clone, Default)]
pub struct HeadlessGraphics {
    asset_root: Option<PathBuf>,
    entries: Vec<Entry>,
    scaled: HashMap<(ImageHandle, Size), ImageHandle>,
    texts: HashMap<(String, TextStyle), ImageHandle>,
}

impl HeadlessGraphics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_asset_root(root: impl Into<PathBuf>) -> Self {
        Self {
            asset_root: Some(root.into()),
            ..Self::default()
        }
    }

    fn push(&mut self, entry: Entry) -> ImageHandle {
        let handle = ImageHandle(self.entries.len() as u32);
        self.entries.push(entry);
        handle
    }

    /// Source path of an image handle (scaled copies keep their source path)
    pub fn path_of(&self, image: ImageHandle) -> Option<&str> {
        match self.entries.get(image.0 as usize)? {
            Entry::Image { path, .. } => Some(path),
            Entry::Text { .. } => None,
        }
    }

    /// Size an image was scaled to, if it was scaled
    pub fn size_of(&self, image: ImageHandle) -> Option<Size> {
        match self.entries.get(image.0 as usize)? {
            Entry::Image { size, .. } => *size,
            Entry::Text { .. } => None,
        }
    }

    /// String a text handle was rasterized from
    pub fn text_of(&self, image: ImageHandle) -> Option<&str> {
        match self.entries.get(image.0 as usize)? {
            Entry::Text { text, .. } => Some(text),
            Entry::Image { .. } => None,
        }
    }

    pub fn text_style_of(&self, image: ImageHandle) -> Option<&TextStyle> {
        match self.entries.get(image.0 as usize)? {
            Entry::Text { style, .. } => Some(style),
            Entry::Image { .. } => None,
        }
    }

    /// Number of handles handed out so far
    pub fn handle_count(&self) -> usize {
        self.entries.len()
    }
}

impl Graphics for HeadlessGraphics {
    fn load_image(&mut self, path: &str) -> Result<ImageHandle> {
        if let Some(root) = &self.asset_root {
            let full = root.join(path);
            if !full.is_file() {
                bail!("asset not found: {}", full.display());
            }
        }
        Ok(self.push(Entry::Image {
            path: path.to_string(),
            size: None,
        }))
    }

    fn scale_image(&mut self, image: ImageHandle, size: Size) -> ImageHandle {
        if let Some(&scaled) = self.scaled.get(&(image, size)) {
            return scaled;
        }
        let path = self.path_of(image).unwrap_or_default().to_string();
        let scaled = self.push(Entry::Image {
            path,
            size: Some(size),
        });
        self.scaled.insert((image, size), scaled);
        scaled
    }

    fn render_text(&mut self, text: &str, style: &TextStyle) -> ImageHandle {
        let key = (text.to_string(), style.clone());
        if let Some(&rendered) = self.texts.get(&key) {
            return rendered;
        }
        let rendered = self.push(Entry::Text {
            text: key.0.clone(),
            style: style.clone(),
        });
        self.texts.insert(key, rendered);
        rendered
    }
}
