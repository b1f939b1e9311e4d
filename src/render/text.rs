use std::path::{Path, PathBuf};

use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};
use fontdue::{Font, FontSettings};

use crate::error::{read_file, Error, Result};

/// Pixel extent of a laid-out string.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextExtent {
    pub width: f32,
    pub height: f32,
}

/// Text measurement supplied by the rendering surface.
pub trait TextMeasurer {
    fn measure(&mut self, text: &str, font_size: f32) -> TextExtent;
}

impl<M: TextMeasurer + ?Sized> TextMeasurer for &mut M {
    fn measure(&mut self, text: &str, font_size: f32) -> TextExtent {
        (**self).measure(text, font_size)
    }
}

/// Headless estimate: every character advances `advance * font_size` and the
/// line is exactly `font_size` tall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmMeasurer {
    pub advance: f32,
}

impl Default for EmMeasurer {
    fn default() -> Self {
        Self { advance: 0.6 }
    }
}

impl TextMeasurer for EmMeasurer {
    fn measure(&mut self, text: &str, font_size: f32) -> TextExtent {
        TextExtent {
            width: text.chars().count() as f32 * font_size * self.advance,
            height: font_size,
        }
    }
}

/// Measures with real glyph metrics from a TrueType/OpenType font.
pub struct FontdueMeasurer {
    font: Font,
    layout: Layout,
}

impl FontdueMeasurer {
    pub fn new(font: Font) -> Self {
        Self {
            font,
            layout: Layout::new(CoordinateSystem::PositiveYDown),
        }
    }

    pub fn from_bytes(data: Vec<u8>, origin: &Path) -> Result<Self> {
        let font = Font::from_bytes(data, FontSettings::default()).map_err(|reason| Error::Font {
            path: origin.to_path_buf(),
            reason: reason.to_string(),
        })?;
        Ok(Self::new(font))
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let data = read_file(path)?;
        Self::from_bytes(data, path)
    }

    /// Probe the usual Windows, WSL and Linux font locations.
    pub fn load_system() -> Result<Self> {
        let mut candidates: Vec<PathBuf> = Vec::new();

        if let Ok(windir) = std::env::var("WINDIR") {
            candidates.push(PathBuf::from(format!("{windir}\\Fonts\\arial.ttf")));
            candidates.push(PathBuf::from(format!("{windir}\\Fonts\\segoeui.ttf")));
        }

        candidates.push(PathBuf::from("C:\\Windows\\Fonts\\arial.ttf"));
        candidates.push(PathBuf::from("/mnt/c/Windows/Fonts/arial.ttf"));
        candidates.push(PathBuf::from("/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf"));
        candidates.push(PathBuf::from("/usr/share/fonts/TTF/DejaVuSans.ttf"));
        candidates.push(PathBuf::from("/System/Library/Fonts/Supplemental/Arial.ttf"));

        for path in candidates {
            match Self::from_path(&path) {
                Ok(measurer) => {
                    tracing::info!("Loaded measurement font from {}", path.display());
                    return Ok(measurer);
                }
                Err(e) => tracing::trace!("Skipping font candidate: {e}"),
            }
        }

        Err(Error::NoSystemFont)
    }
}

impl TextMeasurer for FontdueMeasurer {
    fn measure(&mut self, text: &str, font_size: f32) -> TextExtent {
        self.layout.reset(&LayoutSettings::default());
        self.layout
            .append(&[&self.font], &TextStyle::new(text, font_size, 0));

        // Right edge of the last pen position, not of the last bitmap, so
        // trailing side bearings count toward the width.
        let mut width: f32 = 0.0;
        for glyph in self.layout.glyphs() {
            let advance = self.font.metrics_indexed(glyph.key.glyph_index, font_size).advance_width;
            width = width.max(glyph.x + advance.max(glyph.width as f32));
        }

        let height = if self.layout.glyphs().is_empty() {
            font_size
        } else {
            self.layout.height()
        };

        TextExtent { width, height }
    }
}
