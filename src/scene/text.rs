//! Mutable text labels
//!
//! A label keeps its string and style together with the rasterized buffer.
//! Every setter re-rasterizes immediately, so `rendered()` is always current.

use super::canvas::{Graphics, TextStyle};
use super::types::{Color, ImageHandle};

pub struct TextLabel {
    text: String,
    style: TextStyle,
    rendered: ImageHandle,
}

impl TextLabel {
    /// Black, size 10, antialiased, default font
    pub fn new(text: impl Into<String>, gfx: &mut dyn Graphics) -> Self {
        Self::with_style(text, TextStyle::default(), gfx)
    }

    pub fn with_style(text: impl Into<String>, style: TextStyle, gfx: &mut dyn Graphics) -> Self {
        let text = text.into();
        let rendered = gfx.render_text(&text, &style);
        Self {
            text,
            style,
            rendered,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn style(&self) -> &TextStyle {
        &self.style
    }

    pub fn rendered(&self) -> ImageHandle {
        self.rendered
    }

    fn rerender(&mut self, gfx: &mut dyn Graphics) {
        self.rendered = gfx.render_text(&self.text, &self.style);
    }

    pub fn set_text(&mut self, text: impl Into<String>, gfx: &mut dyn Graphics) {
        self.text = text.into();
        self.rerender(gfx);
    }

    pub fn set_font(&mut self, font: Option<String>, gfx: &mut dyn Graphics) {
        self.style.font = font;
        self.rerender(gfx);
    }

    pub fn set_color(&mut self, color: Color, gfx: &mut dyn Graphics) {
        self.style.color = color;
        self.rerender(gfx);
    }

    pub fn set_size(&mut self, size: u32, gfx: &mut dyn Graphics) {
        self.style.size = size;
        self.rerender(gfx);
    }

    pub fn set_antialias(&mut self, antialias: bool, gfx: &mut dyn Graphics) {
        self.style.antialias = antialias;
        self.rerender(gfx);
    }
}
