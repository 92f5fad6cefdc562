//! EBCDIC encoding support for IBM mainframe code pages.
//!
//! A [`CodePage`] is a 256-entry byte-to-character table. The bundled pages
//! cover the code pages COMMAREA programs are usually compiled against:
//!
//! - **Base pages:** CP037, CP500, CP1047
//! - **Euro-enabled pages:** CP1140
//! - **Open systems:** ISO-8859-1 (identity mapping)
//!
//! Any other single-byte table can be supplied with [`CodePage::new`].
//! Use [`CodePageRegistry`] or [`CodePage::by_name`] for runtime lookup.

mod registry;
mod tables;

pub use registry::CodePageRegistry;

use crate::error::EncodingError;

/// Result type for encoding operations.
pub type Result<T> = std::result::Result<T, EncodingError>;

/// Marks a byte that has no character in a caller-supplied table.
pub const UNDEFINED: char = char::REPLACEMENT_CHARACTER;

/// IBM-037, EBCDIC USA/Canada.
pub static CP037: CodePage = CodePage::new("CP037", 37, tables::CP037_TABLE);

/// IBM-500, EBCDIC International.
pub static CP500: CodePage = CodePage::new("CP500", 500, tables::CP500_TABLE);

/// IBM-1047, EBCDIC Latin-1 open systems. The COMMAREA default.
pub static CP1047: CodePage = CodePage::new("CP1047", 1047, tables::CP1047_TABLE);

/// IBM-1140, CP037 with the Euro sign.
pub static CP1140: CodePage = CodePage::new("CP1140", 1140, tables::CP1140_TABLE);

/// ISO-8859-1, for peers that exchange ASCII-family buffers.
pub static ISO8859_1: CodePage = CodePage::new("ISO-8859-1", 819, tables::LATIN1_TABLE);

/// A single-byte code page.
///
/// Holds the decode table (byte to character) and a reverse index for
/// Latin-1 characters that is derived when the page is built. Characters
/// outside Latin-1 (the Euro sign in CP1140) are found by scanning the
/// decode table.
#[derive(Debug, Clone)]
pub struct CodePage {
    /// Code page name (e.g. "CP1047").
    pub name: &'static str,
    /// Coded character set identifier.
    pub ccsid: u16,
    to_unicode: [char; 256],
    from_latin1: [Option<u8>; 256],
}

impl CodePage {
    /// Build a code page from its byte-to-character table.
    ///
    /// Entries equal to [`UNDEFINED`] are bytes the page does not define.
    /// When two bytes map to the same character the lower byte is used for
    /// encoding.
    pub const fn new(name: &'static str, ccsid: u16, table: [char; 256]) -> Self {
        let mut from_latin1 = [None; 256];
        let mut byte = 0;
        while byte < 256 {
            let code = table[byte] as u32;
            if code < 256 && from_latin1[code as usize].is_none() {
                from_latin1[code as usize] = Some(byte as u8);
            }
            byte += 1;
        }
        Self {
            name,
            ccsid,
            to_unicode: table,
            from_latin1,
        }
    }

    /// Decode EBCDIC bytes to a UTF-8 string.
    ///
    /// # Errors
    /// Returns `EncodingError::UndefinedByte` for bytes the page does not
    /// define. The bundled pages define all 256 bytes.
    pub fn decode(&self, bytes: &[u8]) -> Result<String> {
        let mut result = String::with_capacity(bytes.len());
        for &b in bytes {
            result.push(self.decode_byte(b)?);
        }
        Ok(result)
    }

    /// Encode a UTF-8 string to EBCDIC bytes, one byte per character.
    ///
    /// # Errors
    /// Returns `EncodingError::Unmappable` if the string contains a
    /// character that cannot be represented in this code page.
    pub fn encode(&self, s: &str) -> Result<Vec<u8>> {
        let mut result = Vec::with_capacity(s.len());
        for ch in s.chars() {
            result.push(self.encode_char(ch)?);
        }
        Ok(result)
    }

    /// Convert a single EBCDIC byte to its Unicode character.
    pub fn decode_byte(&self, byte: u8) -> Result<char> {
        match self.to_unicode[byte as usize] {
            UNDEFINED => Err(EncodingError::UndefinedByte {
                byte,
                code_page: self.name,
            }),
            ch => Ok(ch),
        }
    }

    /// Convert a single character to its EBCDIC byte.
    pub fn encode_char(&self, ch: char) -> Result<u8> {
        let found = match u8::try_from(ch) {
            Ok(latin1) => self.from_latin1[latin1 as usize],
            Err(_) => self
                .to_unicode
                .iter()
                .position(|&c| c == ch && c != UNDEFINED)
                .map(|pos| pos as u8),
        };
        found.ok_or(EncodingError::Unmappable {
            ch,
            code_page: self.name,
        })
    }

    /// Look up a code page by CCSID number.
    ///
    /// # Errors
    /// Returns `EncodingError::InvalidCodePage` if the CCSID is not recognized.
    pub fn from_ccsid(ccsid: u16) -> Result<&'static CodePage> {
        CodePageRegistry::from_ccsid(ccsid)
    }

    /// Look up a code page by name (e.g., "CP037", "IBM-1047").
    ///
    /// # Errors
    /// Returns `EncodingError::InvalidCodePage` if the name is not recognized.
    pub fn by_name(name: &str) -> Result<&'static CodePage> {
        CodePageRegistry::by_name(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cp1047_roundtrip() {
        let original = "HELLO WORLD";
        let encoded = CP1047.encode(original).unwrap();
        let decoded = CP1047.decode(&encoded).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_cp037_roundtrip() {
        let original = "hello, world!";
        let encoded = CP037.encode(original).unwrap();
        assert_eq!(CP037.decode(&encoded).unwrap(), original);
    }

    #[test]
    fn test_digits_and_space() {
        for cp in [&CP037, &CP500, &CP1047, &CP1140] {
            assert_eq!(
                cp.encode("0123456789").unwrap(),
                vec![0xF0, 0xF1, 0xF2, 0xF3, 0xF4, 0xF5, 0xF6, 0xF7, 0xF8, 0xF9],
                "{}",
                cp.name
            );
            assert_eq!(cp.encode(" ").unwrap(), vec![0x40], "{}", cp.name);
        }
    }

    #[test]
    fn test_overpunch_letters_share_zone_nibbles() {
        // '{' and 'A'-'I' carry the C zone, '}' and 'J'-'R' the D zone.
        assert_eq!(CP1047.encode("{ABCDEFGHI").unwrap()[0], 0xC0);
        assert_eq!(CP1047.encode("I").unwrap(), vec![0xC9]);
        assert_eq!(CP1047.encode("}").unwrap(), vec![0xD0]);
        assert_eq!(CP1047.encode("R").unwrap(), vec![0xD9]);
    }

    #[test]
    fn test_cp1047_brackets_differ_from_cp037() {
        assert_eq!(CP1047.encode("[]^").unwrap(), vec![0xAD, 0xBD, 0x5F]);
        assert_eq!(CP037.encode("[]^").unwrap(), vec![0xBA, 0xBB, 0xB0]);
    }

    #[test]
    fn test_all_bytes_roundtrip() {
        for cp in [&CP037, &CP500, &CP1047, &CP1140, &ISO8859_1] {
            for b in 0u8..=255 {
                let decoded = cp.decode(&[b]).unwrap();
                assert_eq!(
                    cp.encode(&decoded).unwrap(),
                    vec![b],
                    "{}: roundtrip failed for byte 0x{:02X}",
                    cp.name,
                    b
                );
            }
        }
    }

    #[test]
    fn test_cp1140_euro_sign() {
        assert_eq!(CP1140.decode(&[0x9F]).unwrap(), "€");
        assert_eq!(CP1140.encode("100€").unwrap(), vec![0xF1, 0xF0, 0xF0, 0x9F]);
    }

    #[test]
    fn test_encode_unsupported_char() {
        let err = CP1047.encode("€").unwrap_err();
        assert_eq!(
            err,
            EncodingError::Unmappable {
                ch: '€',
                code_page: "CP1047"
            }
        );
    }

    #[test]
    fn test_custom_code_page_with_undefined_byte() {
        let mut table = tables::LATIN1_TABLE;
        table[0xFF] = UNDEFINED;
        let cp = CodePage::new("TEST", 1, table);

        assert!(matches!(
            cp.decode(&[0x41, 0xFF]),
            Err(EncodingError::UndefinedByte { byte: 0xFF, .. })
        ));
        assert!(cp.encode("\u{FF}").is_err());
        assert_eq!(cp.encode("A").unwrap(), vec![0x41]);
    }

    #[test]
    fn test_iso8859_1_is_identity() {
        assert_eq!(ISO8859_1.encode("AZ09 ").unwrap(), b"AZ09 ".to_vec());
    }
}
