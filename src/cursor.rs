//! Custom mouse cursor
//!
//! The cursor is drawn as ASCII art and compiled into the data/mask bit
//! planes SDL expects. Bits are packed most-significant first, eight pixels
//! per byte, one row after another.

use crate::error::GameError;
use sdl2::mouse::Cursor;

/// Bunny ears; `X` is black, `.` is white, spaces are transparent
pub const BUNNY_CURSOR: [&str; 24] = [
    "            XXXX   XXXX ",
    "           XX..XX XX..XX",
    "           XX...XXX...XX",
    "           XX....XX...XX",
    "            XX...XX..XX ",
    "              XX.XXXXX  ",
    "          XXXXXXXX..XXX ",
    "         XX.XXXXXX....XX",
    "        XXX...XXXXX...XX",
    "       XXX.....XX XX..XX",
    "       XX.......XX  XXX ",
    "      XX........XX      ",
    "     XX.........XX      ",
    "     XX........XXX      ",
    "    XX........XXX       ",
    "   XX........XXX        ",
    "   XX.......XXX         ",
    "  XX......XXX           ",
    " XX......XXX            ",
    " XX....XXX              ",
    "XX....XXX               ",
    "XX..XXX                 ",
    "XXXXXX                  ",
    "XXXX                    ",
];

/// Hotspot at the tip in the bottom-left corner
pub const BUNNY_HOTSPOT: (i32, i32) = (0, 23);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorBitmap {
    pub data: Vec<u8>,
    pub mask: Vec<u8>,
    pub width: usize,
    pub height: usize,
}

/// Compiles ASCII art into cursor bit planes
///
/// `black` pixels set data and mask, `white` pixels set only mask, `xor`
/// pixels set only data (inverted screen where supported). Every other
/// character is transparent.
pub fn compile(rows: &[&str], black: char, white: char, xor: char) -> Result<CursorBitmap, GameError> {
    let width = rows.first().map(|row| row.chars().count()).unwrap_or(0);
    if width == 0 || width % 8 != 0 {
        return Err(GameError::Cursor(format!(
            "width must be a non-zero multiple of 8, got {}",
            width
        )));
    }
    if let Some(index) = rows.iter().position(|row| row.chars().count() != width) {
        return Err(GameError::Cursor(format!(
            "row {} is not {} characters wide",
            index, width
        )));
    }

    let bytes = width / 8 * rows.len();
    let mut data = Vec::with_capacity(bytes);
    let mut mask = Vec::with_capacity(bytes);

    for row in rows {
        let mut data_byte = 0u8;
        let mut mask_byte = 0u8;

        for (column, pixel) in row.chars().enumerate() {
            data_byte <<= 1;
            mask_byte <<= 1;

            if pixel == black {
                data_byte |= 1;
                mask_byte |= 1;
            } else if pixel == white {
                mask_byte |= 1;
            } else if pixel == xor {
                data_byte |= 1;
            }

            if column % 8 == 7 {
                data.push(data_byte);
                mask.push(mask_byte);
                data_byte = 0;
                mask_byte = 0;
            }
        }
    }

    Ok(CursorBitmap {
        data,
        mask,
        width,
        height: rows.len(),
    })
}

/// Builds the bunny cursor as an SDL cursor
///
/// The returned cursor must stay alive for as long as it is in use.
pub fn bunny_cursor() -> Result<Cursor, GameError> {
    let bitmap = compile(&BUNNY_CURSOR, 'X', '.', 'O')?;
    let cursor = Cursor::new(
        &bitmap.data,
        &bitmap.mask,
        bitmap.width as i32,
        bitmap.height as i32,
        BUNNY_HOTSPOT.0,
        BUNNY_HOTSPOT.1,
    )?;
    Ok(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixels_map_to_bit_planes() {
        let bitmap = compile(&["X.O     "], 'X', '.', 'O').unwrap();
        assert_eq!(bitmap.data, vec![0b1010_0000]);
        assert_eq!(bitmap.mask, vec![0b1100_0000]);
        assert_eq!((bitmap.width, bitmap.height), (8, 1));
    }

    #[test]
    fn test_rows_pack_left_to_right() {
        let bitmap = compile(&["       XX       ", "................"], 'X', '.', 'O').unwrap();
        assert_eq!(bitmap.data, vec![0b0000_0001, 0b1000_0000, 0, 0]);
        assert_eq!(bitmap.mask, vec![0b0000_0001, 0b1000_0000, 0xFF, 0xFF]);
    }

    #[test]
    fn test_bunny_cursor_compiles() {
        let bitmap = compile(&BUNNY_CURSOR, 'X', '.', 'O').unwrap();
        assert_eq!((bitmap.width, bitmap.height), (24, 24));
        assert_eq!(bitmap.data.len(), 24 * 3);
        // Bottom row "XXXX" followed by transparency
        assert_eq!(&bitmap.data[69..72], &[0b1111_0000, 0, 0]);
    }

    #[test]
    fn test_width_must_be_multiple_of_eight() {
        assert!(matches!(compile(&["XXXX"], 'X', '.', 'O'), Err(GameError::Cursor(_))));
        assert!(matches!(compile(&[], 'X', '.', 'O'), Err(GameError::Cursor(_))));
    }

    #[test]
    fn test_ragged_rows_are_rejected() {
        let result = compile(&["XXXXXXXX", "XXXX"], 'X', '.', 'O');
        assert!(matches!(result, Err(GameError::Cursor(msg)) if msg.contains("row 1")));
    }
}
