//! Built-in 5x7 bitmap font.
//!
//! The glyph bitmaps are baked into an RGBA atlas at renderer startup and
//! drawn as sprite regions. Covers digits, A-Z, and the punctuation a HUD
//! needs. Lowercase input maps to uppercase.

/// Glyph cell width in unscaled pixels.
pub const GLYPH_WIDTH: u32 = 5;
/// Glyph cell height in unscaled pixels.
pub const GLYPH_HEIGHT: u32 = 7;
/// Horizontal advance between glyph origins (one column of spacing).
pub const GLYPH_ADVANCE: u32 = GLYPH_WIDTH + 1;

/// Each glyph is 7 rows of 5 bits, most significant bit leftmost.
const GLYPHS: &[(char, [u8; 7])] = &[
    (' ', [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    ('!', [0x04, 0x04, 0x04, 0x04, 0x04, 0x00, 0x04]),
    ('.', [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C]),
    ('-', [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00]),
    (':', [0x00, 0x0C, 0x0C, 0x00, 0x0C, 0x0C, 0x00]),
    ('0', [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E]),
    ('1', [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E]),
    ('2', [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F]),
    ('3', [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E]),
    ('4', [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02]),
    ('5', [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E]),
    ('6', [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E]),
    ('7', [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08]),
    ('8', [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E]),
    ('9', [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C]),
    ('A', [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11]),
    ('B', [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E]),
    ('C', [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E]),
    ('D', [0x1C, 0x12, 0x11, 0x11, 0x11, 0x12, 0x1C]),
    ('E', [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F]),
    ('F', [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10]),
    ('G', [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F]),
    ('H', [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11]),
    ('I', [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E]),
    ('J', [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C]),
    ('K', [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11]),
    ('L', [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F]),
    ('M', [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11]),
    ('N', [0x11, 0x19, 0x15, 0x13, 0x11, 0x11, 0x11]),
    ('O', [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E]),
    ('P', [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10]),
    ('Q', [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D]),
    ('R', [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11]),
    ('S', [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E]),
    ('T', [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04]),
    ('U', [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E]),
    ('V', [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04]),
    ('W', [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A]),
    ('X', [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11]),
    ('Y', [0x11, 0x11, 0x0A, 0x04, 0x04, 0x04, 0x04]),
    ('Z', [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F]),
];

fn glyph_index(ch: char) -> Option<usize> {
    let ch = ch.to_ascii_uppercase();
    GLYPHS.iter().position(|(glyph, _)| *glyph == ch)
}

/// Atlas dimensions: one row of glyph cells.
pub(crate) fn atlas_size() -> (u32, u32) {
    (GLYPHS.len() as u32 * GLYPH_ADVANCE, GLYPH_HEIGHT)
}

/// Bake the atlas as RGBA8: opaque white where a bit is set, transparent
/// elsewhere. Tinting happens at draw time.
pub(crate) fn build_atlas_rgba() -> Vec<u8> {
    let (width, height) = atlas_size();
    let mut pixels = vec![0u8; (width * height * 4) as usize];
    for (index, (_, rows)) in GLYPHS.iter().enumerate() {
        let cell_x = index as u32 * GLYPH_ADVANCE;
        for (y, row) in rows.iter().enumerate() {
            for x in 0..GLYPH_WIDTH {
                if row & (1 << (GLYPH_WIDTH - 1 - x)) != 0 {
                    let offset = (((y as u32 * width) + cell_x + x) * 4) as usize;
                    pixels[offset..offset + 4].copy_from_slice(&[255, 255, 255, 255]);
                }
            }
        }
    }
    pixels
}

/// Normalized UV rectangle of a glyph in the atlas, or `None` for
/// characters the font does not cover.
pub(crate) fn glyph_uv(ch: char) -> Option<[f32; 4]> {
    let index = glyph_index(ch)?;
    let (atlas_width, _) = atlas_size();
    Some([
        (index as u32 * GLYPH_ADVANCE) as f32 / atlas_width as f32,
        0.0,
        GLYPH_WIDTH as f32 / atlas_width as f32,
        1.0,
    ])
}

/// Width of a rendered line in pixels, without drawing it.
pub fn measure_text(text: &str, scale: f32) -> f32 {
    let count = text.chars().count() as f32;
    if count == 0.0 {
        0.0
    } else {
        (count * GLYPH_ADVANCE as f32 - 1.0) * scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_lookup_covers_hud_text() {
        for ch in "SCORE 0123456789 GAME OVER".chars() {
            assert!(glyph_index(ch).is_some(), "missing glyph {ch:?}");
        }
        assert!(glyph_index('a').is_some()); // lowercase folds to uppercase
        assert!(glyph_index('%').is_none());
    }

    #[test]
    fn test_atlas_dimensions_match_glyph_count() {
        let (width, height) = atlas_size();
        assert_eq!(width, GLYPHS.len() as u32 * GLYPH_ADVANCE);
        assert_eq!(height, GLYPH_HEIGHT);
        assert_eq!(build_atlas_rgba().len(), (width * height * 4) as usize);
    }

    #[test]
    fn test_glyph_uv_within_unit_square() {
        let [x, y, w, h] = glyph_uv('Z').unwrap();
        assert!(x >= 0.0 && x + w <= 1.0);
        assert_eq!(y, 0.0);
        assert_eq!(h, 1.0);
    }

    #[test]
    fn test_measure_text() {
        assert_eq!(measure_text("", 2.0), 0.0);
        // Four cells minus the trailing gap, doubled.
        assert_eq!(measure_text("0020", 2.0), 46.0);
    }
}
