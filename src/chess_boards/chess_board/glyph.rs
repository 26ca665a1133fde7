//! Byte-level codec for piece glyphs. Game logic never looks at these bytes; descriptors
//! compare by value.
//!
//! | First code point |  Byte 1  |  Byte 2  |  Byte 3  |  Byte 4  |
//! |:----------------:|:--------:|:--------:|:--------:|:--------:|
//! |           U+0000 | 0xxxxxxx |          |          |          |
//! |           U+0080 | 110xxxxx | 10xxxxxx |          |          |
//! |           U+0800 | 1110xxxx | 10xxxxxx | 10xxxxxx |          |
//! |          U+10000 | 11110xxx | 10xxxxxx | 10xxxxxx | 10xxxxxx |

use crate::error::GlyphError;

/// Encodes `symbol` into `buf` and returns the used prefix.
pub fn encode(symbol: char, buf: &mut [u8; 4]) -> &[u8] {
    symbol.encode_utf8(buf).as_bytes()
}

/// Number of bytes announced by a lead byte, or `None` for a continuation or invalid byte.
fn sequence_length(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7f => Some(1),
        0xc0..=0xdf => Some(2),
        0xe0..=0xef => Some(3),
        0xf0..=0xf7 => Some(4),
        _ => None,
    }
}

/// Decodes the glyph at the start of `bytes`, returning it with the number of bytes consumed.
/// `offset` is only used for error reporting.
pub fn decode_at(bytes: &[u8], offset: usize) -> Result<(char, usize), GlyphError> {
    let lead = *bytes.first().ok_or(GlyphError::Truncated { offset })?;
    let len = sequence_length(lead).ok_or(GlyphError::InvalidSequence { offset })?;
    if bytes.len() < len {
        return Err(GlyphError::Truncated { offset });
    }
    let text = std::str::from_utf8(&bytes[..len]).map_err(|_| GlyphError::InvalidSequence { offset })?;
    text.chars()
        .next()
        .map(|c| (c, len))
        .ok_or(GlyphError::InvalidSequence { offset })
}

pub fn decode(bytes: &[u8]) -> Result<(char, usize), GlyphError> {
    decode_at(bytes, 0)
}

/// Decodes a whole byte buffer glyph by glyph.
pub fn decode_all(bytes: &[u8]) -> Result<Vec<char>, GlyphError> {
    let mut glyphs = Vec::with_capacity(bytes.len());
    let mut offset = 0;
    while offset < bytes.len() {
        let (glyph, len) = decode_at(&bytes[offset..], offset)?;
        glyphs.push(glyph);
        offset += len;
    }
    Ok(glyphs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoded_lengths() {
        let mut buf = [0u8; 4];
        assert_eq!(encode('.', &mut buf), b".");
        assert_eq!(encode('♔', &mut buf), "♔".as_bytes());
        assert_eq!(encode('♔', &mut buf).len(), 3);
        assert_eq!(encode('🐁', &mut buf).len(), 4);
    }

    #[test]
    fn test_decode_reports_consumed_bytes() {
        let bytes = "🐀♟.".as_bytes();
        assert_eq!(decode(bytes), Ok(('🐀', 4)));
        assert_eq!(decode(&bytes[4..]), Ok(('♟', 3)));
        assert_eq!(decode_all(bytes), Ok(vec!['🐀', '♟', '.']));
    }

    #[test]
    fn test_decode_errors() {
        let bytes = "♔".as_bytes();
        assert_eq!(decode(&bytes[..2]), Err(GlyphError::Truncated { offset: 0 }));
        assert_eq!(decode(&bytes[1..]), Err(GlyphError::InvalidSequence { offset: 0 }));
        assert_eq!(decode(&[]), Err(GlyphError::Truncated { offset: 0 }));
        assert_eq!(decode_all(b"ab\xff"), Err(GlyphError::InvalidSequence { offset: 2 }));
    }
}
