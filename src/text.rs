//! Glyph rasterizer.
//!
//! Every set bit of a glyph becomes `scale × scale` calls to
//! [`St7789::draw_pixel`], each its own window and one-pixel write. Slow, but
//! it needs no buffer and clips per pixel.

use crate::fmt::trace;
use crate::font::{encode_cp1251, Font};
use crate::interface::{BulkChannel, ByteTransport};
use crate::{Color, Error, St7789};

const ROW_MSB: u16 = 0x8000;

impl<T, C> St7789<T, C>
where
    T: ByteTransport,
    C: BulkChannel,
{
    /// Draw the glyph for the 8-bit character `code` with its top-left corner
    /// at `(x, y)`, every font pixel scaled to a `scale × scale` block.
    /// A `scale` of zero draws at scale one.
    ///
    /// The character is drawn when it fits horizontally *or* vertically;
    /// pixels that end up off the panel are dropped one by one.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfBounds`] when the glyph fits neither axis,
    /// [`Error::UnknownGlyph`] when `code` has no glyph in `font`. Nothing is
    /// sent in either case.
    pub fn draw_char(
        &mut self,
        x: u16,
        y: u16,
        color: Color,
        font: &Font,
        scale: u8,
        code: u8,
    ) -> Result<(), Error> {
        let scale = i32::from(scale.max(1));
        let geometry = self.geometry();
        let fits_x = u32::from(geometry.width) >= u32::from(x) + u32::from(font.width);
        let fits_y = u32::from(geometry.height) >= u32::from(y) + u32::from(font.height);
        if !(fits_x || fits_y) {
            trace!("glyph {} at ({}, {}) off the panel", code, x, y);
            return Err(Error::OutOfBounds);
        }
        let Some(rows) = font.glyph(code) else {
            trace!("no glyph for code {}", code);
            return Err(Error::UnknownGlyph);
        };

        let (x, y) = (i32::from(x), i32::from(y));
        for (i, row) in rows.iter().enumerate() {
            let top = y + i as i32 * scale;
            for j in 0..font.width.min(16) {
                if row & (ROW_MSB >> j) == 0 {
                    continue;
                }
                let left = x + i32::from(j) * scale;
                for dy in 0..scale {
                    for dx in 0..scale {
                        let _ = self.draw_pixel(left + dx, top + dy, color);
                    }
                }
            }
        }
        Ok(())
    }

    /// Draw 8-bit character codes left to right starting at `(x, y)`.
    ///
    /// The pen advances by `font.width × scale` per code whether or not the
    /// code could be drawn. There is no wrapping; text running past the
    /// right edge is clipped.
    pub fn draw_string(&mut self, x: u16, y: u16, color: Color, font: &Font, scale: u8, text: &[u8]) {
        let advance = u16::from(font.width) * u16::from(scale.max(1));
        let mut x = x;
        for code in text {
            let _ = self.draw_char(x, y, color, font, scale, *code);
            x = x.saturating_add(advance);
        }
    }

    /// [`St7789::draw_string`] for UTF-8 text. Characters are mapped to
    /// Windows-1251 with [`encode_cp1251`]; characters without a code leave a
    /// blank cell.
    pub fn draw_str(&mut self, x: u16, y: u16, color: Color, font: &Font, scale: u8, text: &str) {
        let advance = u16::from(font.width) * u16::from(scale.max(1));
        let mut x = x;
        for c in text.chars() {
            if let Some(code) = encode_cp1251(c) {
                let _ = self.draw_char(x, y, color, font, scale, code);
            }
            x = x.saturating_add(advance);
        }
    }
}
