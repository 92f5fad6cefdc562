//! Runtime lookup of the bundled code pages by CCSID or name.

use super::{CodePage, CP037, CP1047, CP1140, CP500, ISO8859_1};
use crate::error::EncodingError;

/// Registry of the bundled code pages.
pub struct CodePageRegistry;

impl CodePageRegistry {
    /// All bundled code pages.
    pub fn all() -> [&'static CodePage; 5] {
        [&CP037, &CP500, &CP1047, &CP1140, &ISO8859_1]
    }

    /// Look up a code page by CCSID.
    pub fn from_ccsid(ccsid: u16) -> Result<&'static CodePage, EncodingError> {
        Self::all()
            .into_iter()
            .find(|cp| cp.ccsid == ccsid)
            .ok_or_else(|| EncodingError::InvalidCodePage(format!("CCSID {ccsid}")))
    }

    /// Look up a code page by name.
    ///
    /// Accepts "CP1047", "IBM-1047", "IBM1047", "EBCDIC-1047", a bare CCSID
    /// ("1047"), and "ISO-8859-1" / "LATIN1". Matching is case-insensitive.
    pub fn by_name(name: &str) -> Result<&'static CodePage, EncodingError> {
        let upper = name.trim().to_ascii_uppercase();
        if matches!(upper.as_str(), "ISO-8859-1" | "ISO8859-1" | "LATIN1" | "LATIN-1") {
            return Ok(&ISO8859_1);
        }

        let digits = ["EBCDIC-", "IBM-", "IBM", "CP", "CCSID"]
            .iter()
            .find_map(|prefix| upper.strip_prefix(prefix))
            .unwrap_or(&upper);

        digits
            .parse::<u16>()
            .ok()
            .and_then(|ccsid| Self::from_ccsid(ccsid).ok())
            .ok_or_else(|| EncodingError::InvalidCodePage(name.to_string()))
    }
}
