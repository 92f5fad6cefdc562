//! Byte-to-character tables for the bundled EBCDIC code pages.
//!
//! Each table maps an EBCDIC byte (the index) to the Unicode character it
//! represents. Only the decode direction is stored; [`CodePage::new`]
//! derives the encode direction at compile time.
//!
//! [`CodePage::new`]: super::CodePage::new

/// IBM-037 (USA/Canada).
pub(crate) const CP037_TABLE: [char; 256] = [
    '\u{00}', '\u{01}', '\u{02}', '\u{03}', '\u{9C}', '\u{09}', '\u{86}', '\u{7F}', // 0x00
    '\u{97}', '\u{8D}', '\u{8E}', '\u{0B}', '\u{0C}', '\u{0D}', '\u{0E}', '\u{0F}', // 0x08
    '\u{10}', '\u{11}', '\u{12}', '\u{13}', '\u{9D}', '\u{85}', '\u{08}', '\u{87}', // 0x10
    '\u{18}', '\u{19}', '\u{92}', '\u{8F}', '\u{1C}', '\u{1D}', '\u{1E}', '\u{1F}', // 0x18
    '\u{80}', '\u{81}', '\u{82}', '\u{83}', '\u{84}', '\u{0A}', '\u{17}', '\u{1B}', // 0x20
    '\u{88}', '\u{89}', '\u{8A}', '\u{8B}', '\u{8C}', '\u{05}', '\u{06}', '\u{07}', // 0x28
    '\u{90}', '\u{91}', '\u{16}', '\u{93}', '\u{94}', '\u{95}', '\u{96}', '\u{04}', // 0x30
    '\u{98}', '\u{99}', '\u{9A}', '\u{9B}', '\u{14}', '\u{15}', '\u{9E}', '\u{1A}', // 0x38
    ' ', '\u{A0}', '\u{E2}', '\u{E4}', '\u{E0}', '\u{E1}', '\u{E3}', '\u{E5}', // 0x40
    '\u{E7}', '\u{F1}', '\u{A2}', '.', '<', '(', '+', '|', // 0x48
    '&', '\u{E9}', '\u{EA}', '\u{EB}', '\u{E8}', '\u{ED}', '\u{EE}', '\u{EF}', // 0x50
    '\u{EC}', '\u{DF}', '!', '$', '*', ')', ';', '\u{AC}', // 0x58
    '-', '/', '\u{C2}', '\u{C4}', '\u{C0}', '\u{C1}', '\u{C3}', '\u{C5}', // 0x60
    '\u{C7}', '\u{D1}', '\u{A6}', ',', '%', '_', '>', '?', // 0x68
    '\u{F8}', '\u{C9}', '\u{CA}', '\u{CB}', '\u{C8}', '\u{CD}', '\u{CE}', '\u{CF}', // 0x70
    '\u{CC}', '`', ':', '#', '@', '\'', '=', '"', // 0x78
    '\u{D8}', 'a', 'b', 'c', 'd', 'e', 'f', 'g', // 0x80
    'h', 'i', '\u{AB}', '\u{BB}', '\u{F0}', '\u{FD}', '\u{FE}', '\u{B1}', // 0x88
    '\u{B0}', 'j', 'k', 'l', 'm', 'n', 'o', 'p', // 0x90
    'q', 'r', '\u{AA}', '\u{BA}', '\u{E6}', '\u{B8}', '\u{C6}', '\u{A4}', // 0x98
    '\u{B5}', '~', 's', 't', 'u', 'v', 'w', 'x', // 0xA0
    'y', 'z', '\u{A1}', '\u{BF}', '\u{D0}', '\u{DD}', '\u{DE}', '\u{AE}', // 0xA8
    '^', '\u{A3}', '\u{A5}', '\u{B7}', '\u{A9}', '\u{A7}', '\u{B6}', '\u{BC}', // 0xB0
    '\u{BD}', '\u{BE}', '[', ']', '\u{AF}', '\u{A8}', '\u{B4}', '\u{D7}', // 0xB8
    '{', 'A', 'B', 'C', 'D', 'E', 'F', 'G', // 0xC0
    'H', 'I', '\u{AD}', '\u{F4}', '\u{F6}', '\u{F2}', '\u{F3}', '\u{F5}', // 0xC8
    '}', 'J', 'K', 'L', 'M', 'N', 'O', 'P', // 0xD0
    'Q', 'R', '\u{B9}', '\u{FB}', '\u{FC}', '\u{F9}', '\u{FA}', '\u{FF}', // 0xD8
    '\\', '\u{F7}', 'S', 'T', 'U', 'V', 'W', 'X', // 0xE0
    'Y', 'Z', '\u{B2}', '\u{D4}', '\u{D6}', '\u{D2}', '\u{D3}', '\u{D5}', // 0xE8
    '0', '1', '2', '3', '4', '5', '6', '7', // 0xF0
    '8', '9', '\u{B3}', '\u{DB}', '\u{DC}', '\u{D9}', '\u{DA}', '\u{9F}', // 0xF8
];

/// IBM-500 (International Latin-1).
pub(crate) const CP500_TABLE: [char; 256] = [
    '\u{00}', '\u{01}', '\u{02}', '\u{03}', '\u{9C}', '\u{09}', '\u{86}', '\u{7F}', // 0x00
    '\u{97}', '\u{8D}', '\u{8E}', '\u{0B}', '\u{0C}', '\u{0D}', '\u{0E}', '\u{0F}', // 0x08
    '\u{10}', '\u{11}', '\u{12}', '\u{13}', '\u{9D}', '\u{85}', '\u{08}', '\u{87}', // 0x10
    '\u{18}', '\u{19}', '\u{92}', '\u{8F}', '\u{1C}', '\u{1D}', '\u{1E}', '\u{1F}', // 0x18
    '\u{80}', '\u{81}', '\u{82}', '\u{83}', '\u{84}', '\u{0A}', '\u{17}', '\u{1B}', // 0x20
    '\u{88}', '\u{89}', '\u{8A}', '\u{8B}', '\u{8C}', '\u{05}', '\u{06}', '\u{07}', // 0x28
    '\u{90}', '\u{91}', '\u{16}', '\u{93}', '\u{94}', '\u{95}', '\u{96}', '\u{04}', // 0x30
    '\u{98}', '\u{99}', '\u{9A}', '\u{9B}', '\u{14}', '\u{15}', '\u{9E}', '\u{1A}', // 0x38
    ' ', '\u{A0}', '\u{E2}', '\u{E4}', '\u{E0}', '\u{E1}', '\u{E3}', '\u{E5}', // 0x40
    '\u{E7}', '\u{F1}', '[', '.', '<', '(', '+', '!', // 0x48
    '&', '\u{E9}', '\u{EA}', '\u{EB}', '\u{E8}', '\u{ED}', '\u{EE}', '\u{EF}', // 0x50
    '\u{EC}', '\u{DF}', ']', '$', '*', ')', ';', '^', // 0x58
    '-', '/', '\u{C2}', '\u{C4}', '\u{C0}', '\u{C1}', '\u{C3}', '\u{C5}', // 0x60
    '\u{C7}', '\u{D1}', '\u{A6}', ',', '%', '_', '>', '?', // 0x68
    '\u{F8}', '\u{C9}', '\u{CA}', '\u{CB}', '\u{C8}', '\u{CD}', '\u{CE}', '\u{CF}', // 0x70
    '\u{CC}', '`', ':', '#', '@', '\'', '=', '"', // 0x78
    '\u{D8}', 'a', 'b', 'c', 'd', 'e', 'f', 'g', // 0x80
    'h', 'i', '\u{AB}', '\u{BB}', '\u{F0}', '\u{FD}', '\u{FE}', '\u{B1}', // 0x88
    '\u{B0}', 'j', 'k', 'l', 'm', 'n', 'o', 'p', // 0x90
    'q', 'r', '\u{AA}', '\u{BA}', '\u{E6}', '\u{B8}', '\u{C6}', '\u{A4}', // 0x98
    '\u{B5}', '~', 's', 't', 'u', 'v', 'w', 'x', // 0xA0
    'y', 'z', '\u{A1}', '\u{BF}', '\u{D0}', '\u{DD}', '\u{DE}', '\u{AE}', // 0xA8
    '\u{A2}', '\u{A3}', '\u{A5}', '\u{B7}', '\u{A9}', '\u{A7}', '\u{B6}', '\u{BC}', // 0xB0
    '\u{BD}', '\u{BE}', '\u{AC}', '|', '\u{AF}', '\u{A8}', '\u{B4}', '\u{D7}', // 0xB8
    '{', 'A', 'B', 'C', 'D', 'E', 'F', 'G', // 0xC0
    'H', 'I', '\u{AD}', '\u{F4}', '\u{F6}', '\u{F2}', '\u{F3}', '\u{F5}', // 0xC8
    '}', 'J', 'K', 'L', 'M', 'N', 'O', 'P', // 0xD0
    'Q', 'R', '\u{B9}', '\u{FB}', '\u{FC}', '\u{F9}', '\u{FA}', '\u{FF}', // 0xD8
    '\\', '\u{F7}', 'S', 'T', 'U', 'V', 'W', 'X', // 0xE0
    'Y', 'Z', '\u{B2}', '\u{D4}', '\u{D6}', '\u{D2}', '\u{D3}', '\u{D5}', // 0xE8
    '0', '1', '2', '3', '4', '5', '6', '7', // 0xF0
    '8', '9', '\u{B3}', '\u{DB}', '\u{DC}', '\u{D9}', '\u{DA}', '\u{9F}', // 0xF8
];

/// IBM-1047 (Latin-1 open systems, the z/OS UNIX default).
pub(crate) const CP1047_TABLE: [char; 256] = [
    '\u{00}', '\u{01}', '\u{02}', '\u{03}', '\u{9C}', '\u{09}', '\u{86}', '\u{7F}', // 0x00
    '\u{97}', '\u{8D}', '\u{8E}', '\u{0B}', '\u{0C}', '\u{0D}', '\u{0E}', '\u{0F}', // 0x08
    '\u{10}', '\u{11}', '\u{12}', '\u{13}', '\u{9D}', '\u{85}', '\u{08}', '\u{87}', // 0x10
    '\u{18}', '\u{19}', '\u{92}', '\u{8F}', '\u{1C}', '\u{1D}', '\u{1E}', '\u{1F}', // 0x18
    '\u{80}', '\u{81}', '\u{82}', '\u{83}', '\u{84}', '\u{0A}', '\u{17}', '\u{1B}', // 0x20
    '\u{88}', '\u{89}', '\u{8A}', '\u{8B}', '\u{8C}', '\u{05}', '\u{06}', '\u{07}', // 0x28
    '\u{90}', '\u{91}', '\u{16}', '\u{93}', '\u{94}', '\u{95}', '\u{96}', '\u{04}', // 0x30
    '\u{98}', '\u{99}', '\u{9A}', '\u{9B}', '\u{14}', '\u{15}', '\u{9E}', '\u{1A}', // 0x38
    ' ', '\u{A0}', '\u{E2}', '\u{E4}', '\u{E0}', '\u{E1}', '\u{E3}', '\u{E5}', // 0x40
    '\u{E7}', '\u{F1}', '\u{A2}', '.', '<', '(', '+', '|', // 0x48
    '&', '\u{E9}', '\u{EA}', '\u{EB}', '\u{E8}', '\u{ED}', '\u{EE}', '\u{EF}', // 0x50
    '\u{EC}', '\u{DF}', '!', '$', '*', ')', ';', '^', // 0x58
    '-', '/', '\u{C2}', '\u{C4}', '\u{C0}', '\u{C1}', '\u{C3}', '\u{C5}', // 0x60
    '\u{C7}', '\u{D1}', '\u{A6}', ',', '%', '_', '>', '?', // 0x68
    '\u{F8}', '\u{C9}', '\u{CA}', '\u{CB}', '\u{C8}', '\u{CD}', '\u{CE}', '\u{CF}', // 0x70
    '\u{CC}', '`', ':', '#', '@', '\'', '=', '"', // 0x78
    '\u{D8}', 'a', 'b', 'c', 'd', 'e', 'f', 'g', // 0x80
    'h', 'i', '\u{AB}', '\u{BB}', '\u{F0}', '\u{FD}', '\u{FE}', '\u{B1}', // 0x88
    '\u{B0}', 'j', 'k', 'l', 'm', 'n', 'o', 'p', // 0x90
    'q', 'r', '\u{AA}', '\u{BA}', '\u{E6}', '\u{B8}', '\u{C6}', '\u{A4}', // 0x98
    '\u{B5}', '~', 's', 't', 'u', 'v', 'w', 'x', // 0xA0
    'y', 'z', '\u{A1}', '\u{BF}', '\u{D0}', '[', '\u{DE}', '\u{AE}', // 0xA8
    '\u{AC}', '\u{A3}', '\u{A5}', '\u{B7}', '\u{A9}', '\u{A7}', '\u{B6}', '\u{BC}', // 0xB0
    '\u{BD}', '\u{BE}', '\u{DD}', '\u{A8}', '\u{AF}', ']', '\u{B4}', '\u{D7}', // 0xB8
    '{', 'A', 'B', 'C', 'D', 'E', 'F', 'G', // 0xC0
    'H', 'I', '\u{AD}', '\u{F4}', '\u{F6}', '\u{F2}', '\u{F3}', '\u{F5}', // 0xC8
    '}', 'J', 'K', 'L', 'M', 'N', 'O', 'P', // 0xD0
    'Q', 'R', '\u{B9}', '\u{FB}', '\u{FC}', '\u{F9}', '\u{FA}', '\u{FF}', // 0xD8
    '\\', '\u{F7}', 'S', 'T', 'U', 'V', 'W', 'X', // 0xE0
    'Y', 'Z', '\u{B2}', '\u{D4}', '\u{D6}', '\u{D2}', '\u{D3}', '\u{D5}', // 0xE8
    '0', '1', '2', '3', '4', '5', '6', '7', // 0xF0
    '8', '9', '\u{B3}', '\u{DB}', '\u{DC}', '\u{D9}', '\u{DA}', '\u{9F}', // 0xF8
];

/// IBM-1140 is IBM-037 with the Euro sign at 0x9F.
pub(crate) const CP1140_TABLE: [char; 256] = {
    let mut table = CP037_TABLE;
    table[0x9F] = '\u{20AC}';
    table
};

/// ISO-8859-1, where every byte is its own code point.
pub(crate) const LATIN1_TABLE: [char; 256] = {
    let mut table = ['\0'; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = i as u8 as char;
        i += 1;
    }
    table
};
