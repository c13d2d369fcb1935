/// This module provides access to the 12-pixel glyph dataset
pub mod glyphs;
