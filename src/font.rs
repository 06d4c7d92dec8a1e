//! Row-encoded bitmap fonts.
//!
//! A glyph is `height` rows of 16 bits; pixel `j` of a row is bit `15 - j`,
//! so only the top `width` bits of each row are used. Glyphs are stored one
//! after the other in a flat table and looked up by an 8-bit character code:
//!
//! | code          | glyph slot          |
//! |---------------|---------------------|
//! | 32..=126      | `code - 32`         |
//! | 192..=255     | `code - 192 + 96`   |
//! | 168 (`Ё`)     | 160                 |
//! | 184 (`ё`)     | 161                 |
//!
//! The upper half follows Windows-1251, so Cyrillic text is drawn from
//! CP1251 bytes. [`encode_cp1251`] maps a `char` onto that code space.

mod fixed_5x7;

/// Code of `Ё` in Windows-1251.
pub const CP1251_IO_UPPER: u8 = 168;
/// Code of `ё` in Windows-1251.
pub const CP1251_IO_LOWER: u8 = 184;

const FIRST_PRINTABLE: u8 = 32;
const LAST_PRINTABLE: u8 = 126;
const FIRST_CYRILLIC: u8 = 192;
const CYRILLIC_SLOT: usize = 96;
const IO_UPPER_SLOT: usize = 160;
const IO_LOWER_SLOT: usize = 161;

/// Immutable bitmap font.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Font {
    /// Glyph width in pixels; columns past 16 have no row bit and stay blank
    pub width: u8,
    /// Glyph height in pixels, one table row each
    pub height: u8,
    /// `height` rows per glyph, glyphs in slot order
    pub data: &'static [u16],
}

/// 5 × 7 font covering printable ASCII and the CP1251 Cyrillic block.
pub static FONT_5X7: Font = Font::new(5, 7, &fixed_5x7::DATA);

impl Font {
    /// Wrap a glyph table.
    #[must_use]
    pub const fn new(width: u8, height: u8, data: &'static [u16]) -> Self {
        Self {
            width,
            height,
            data,
        }
    }

    /// Rows of the glyph for `code`, `None` when the code has no slot or the
    /// table is too short to hold it.
    #[must_use]
    pub fn glyph(&self, code: u8) -> Option<&'static [u16]> {
        let height = usize::from(self.height);
        let start = glyph_index(code)? * height;
        let data: &'static [u16] = self.data;
        data.get(start..start + height)
    }
}

/// Slot of the glyph for an 8-bit character code.
#[must_use]
pub const fn glyph_index(code: u8) -> Option<usize> {
    match code {
        FIRST_PRINTABLE..=LAST_PRINTABLE => Some((code - FIRST_PRINTABLE) as usize),
        FIRST_CYRILLIC..=u8::MAX => Some((code - FIRST_CYRILLIC) as usize + CYRILLIC_SLOT),
        CP1251_IO_UPPER => Some(IO_UPPER_SLOT),
        CP1251_IO_LOWER => Some(IO_LOWER_SLOT),
        _ => None,
    }
}

/// Windows-1251 code of `c`, limited to the characters the glyph mapping
/// knows: printable ASCII, `А..я`, `Ё` and `ё`.
#[must_use]
pub fn encode_cp1251(c: char) -> Option<u8> {
    match c {
        ' '..='~' => Some(c as u8),
        'А'..='я' => Some((c as u32 - 'А' as u32) as u8 + FIRST_CYRILLIC),
        'Ё' => Some(CP1251_IO_UPPER),
        'ё' => Some(CP1251_IO_LOWER),
        _ => None,
    }
}
