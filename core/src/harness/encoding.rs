use encoding_rs::Encoding;
use log::warn;
use oem_cp::code_table::DECODING_TABLE_CP_MAP;
use oem_cp::code_table_type::TableType;

use crate::platform::Platform;

/// Decoding applied to both captured streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    /// Native console code page, used on Windows.
    CodePage(u16, &'static Encoding),
    /// DOS code page with all 128 upper bytes mapped (437, 850, ...).
    DosTable(u16, &'static [char; 128]),
    /// DOS code page with unmapped bytes, decoded to U+FFFD.
    PartialDosTable(u16, &'static [Option<char>; 128]),
}

impl TextEncoding {
    pub fn for_platform(platform: Platform) -> Self {
        if !platform.is_windows() {
            return TextEncoding::Utf8;
        }
        match oem_code_page() {
            Some(code_page) => TextEncoding::from_code_page(code_page),
            None => {
                warn!("Cannot query the OEM code page, decoding GnuPG output as UTF-8");
                TextEncoding::Utf8
            }
        }
    }

    /// `encoding_rs` decoders first, then the DOS tables. Unknown code pages degrade to UTF-8.
    pub fn from_code_page(code_page: u16) -> Self {
        if let Some(encoding) = codepage::to_encoding(code_page) {
            return TextEncoding::CodePage(code_page, encoding);
        }
        match DECODING_TABLE_CP_MAP.get(&code_page) {
            Some(&TableType::Complete(table)) => TextEncoding::DosTable(code_page, table),
            Some(&TableType::Incomplete(table)) => TextEncoding::PartialDosTable(code_page, table),
            None => {
                warn!("No decoder for code page {code_page}, decoding GnuPG output as UTF-8");
                TextEncoding::Utf8
            }
        }
    }

    pub fn decode(&self, bytes: &[u8]) -> String {
        match self {
            TextEncoding::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
            TextEncoding::CodePage(_, encoding) => {
                encoding.decode_without_bom_handling(bytes).0.into_owned()
            }
            TextEncoding::DosTable(_, table) => oem_cp::decode_string_complete_table(bytes, table),
            TextEncoding::PartialDosTable(_, table) => {
                oem_cp::decode_string_incomplete_table_lossy(bytes, table)
            }
        }
    }
}

#[cfg(windows)]
fn oem_code_page() -> Option<u16> {
    // SAFETY: GetOEMCP takes no arguments and only reads process locale state.
    let code_page = unsafe { windows_sys::Win32::Globalization::GetOEMCP() };
    u16::try_from(code_page).ok().filter(|cp| *cp != 0)
}

#[cfg(not(windows))]
fn oem_code_page() -> Option<u16> {
    None
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn non_windows_platforms_use_utf8() {
        assert_eq!(TextEncoding::for_platform(Platform::Linux), TextEncoding::Utf8);
        assert_eq!(TextEncoding::for_platform(Platform::Mac), TextEncoding::Utf8);
        assert_eq!(TextEncoding::for_platform(Platform::Unknown), TextEncoding::Utf8);
    }

    #[test]
    fn utf8_decoding_is_lossy() {
        let text = TextEncoding::Utf8.decode("Schlüssel".as_bytes());
        assert_eq!(text, "Schlüssel");
        assert_eq!(TextEncoding::Utf8.decode(&[b'o', 0xff, b'k']), "o\u{fffd}k");
    }

    #[test]
    fn cyrillic_console_code_page() {
        let encoding = TextEncoding::from_code_page(866);
        assert!(matches!(encoding, TextEncoding::CodePage(866, _)));
        assert_eq!(encoding.decode(&[0x8a, 0xab, 0xee, 0xe7]), "Ключ");
    }

    #[test]
    fn western_dos_code_pages() {
        for code_page in [437, 850] {
            let encoding = TextEncoding::from_code_page(code_page);
            assert!(matches!(encoding, TextEncoding::DosTable(cp, _) if cp == code_page));
            assert_eq!(encoding.decode(&[0x81, 0x84, 0x94]), "üäö");
        }
    }

    #[test]
    fn central_european_dos_code_page() {
        let encoding = TextEncoding::from_code_page(852);
        assert_ne!(encoding, TextEncoding::Utf8);
        // ü ä ö, then č and ř which 850 lacks
        assert_eq!(encoding.decode(&[0x81, 0x84, 0x94, 0x9f, 0xfd]), "üäöčř");
        assert_eq!(encoding.decode(b"gpg: ok"), "gpg: ok");
    }

    #[test]
    fn unknown_code_page_falls_back() {
        assert_eq!(TextEncoding::from_code_page(12345), TextEncoding::Utf8);
    }
}
