//! Standard (base-14) Helvetica fonts and their metrics
//!
//! The engine never embeds font programs. Every viewer ships the Helvetica
//! family, so only the AFM advance widths are needed here to measure and
//! align text.

use lopdf::{Dictionary, Object};

/// Font weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

/// Font style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

/// Advance widths for Helvetica, code points 32..=126, 1/1000 em.
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, //
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, //
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, //
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, //
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, //
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

/// Advance widths for Helvetica-Bold, code points 32..=126, 1/1000 em.
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, //
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611, //
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, //
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556, //
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, //
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

/// One of the four Helvetica variants every PDF viewer provides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StandardFont {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
    HelveticaBoldOblique,
}

impl StandardFont {
    /// All variants, in resource-name order
    pub const ALL: [StandardFont; 4] = [
        StandardFont::Helvetica,
        StandardFont::HelveticaBold,
        StandardFont::HelveticaOblique,
        StandardFont::HelveticaBoldOblique,
    ];

    /// Pick the variant for a weight/style combination
    pub fn from_style(weight: FontWeight, style: FontStyle) -> Self {
        match (weight, style) {
            (FontWeight::Regular, FontStyle::Normal) => StandardFont::Helvetica,
            (FontWeight::Bold, FontStyle::Normal) => StandardFont::HelveticaBold,
            (FontWeight::Regular, FontStyle::Italic) => StandardFont::HelveticaOblique,
            (FontWeight::Bold, FontStyle::Italic) => StandardFont::HelveticaBoldOblique,
        }
    }

    /// PostScript name used as /BaseFont
    pub fn base_font_name(self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::HelveticaBold => "Helvetica-Bold",
            StandardFont::HelveticaOblique => "Helvetica-Oblique",
            StandardFont::HelveticaBoldOblique => "Helvetica-BoldOblique",
        }
    }

    /// Page resource name (e.g. "F1")
    pub fn resource_name(self) -> &'static str {
        match self {
            StandardFont::Helvetica => "F1",
            StandardFont::HelveticaBold => "F2",
            StandardFont::HelveticaOblique => "F3",
            StandardFont::HelveticaBoldOblique => "F4",
        }
    }

    fn is_bold(self) -> bool {
        matches!(
            self,
            StandardFont::HelveticaBold | StandardFont::HelveticaBoldOblique
        )
    }

    /// Advance width of a character in 1/1000 em
    ///
    /// Oblique variants share the upright widths.
    pub fn char_width(self, c: char) -> u16 {
        let table = if self.is_bold() {
            &HELVETICA_BOLD_WIDTHS
        } else {
            &HELVETICA_WIDTHS
        };

        let code = c as u32;
        if (32..=126).contains(&code) {
            return table[(code - 32) as usize];
        }

        match c {
            '\u{00A0}' => 278,
            '©' | '®' => 737,
            '°' => 400,
            '·' | '•' => 350,
            '‘' | '’' => {
                if self.is_bold() {
                    278
                } else {
                    222
                }
            }
            '“' | '”' => {
                if self.is_bold() {
                    500
                } else {
                    333
                }
            }
            '–' => 556,
            '—' | '…' | '™' => 1000,
            _ => 556,
        }
    }

    /// Width of a string in points at the given size
    pub fn text_width_points(self, text: &str, font_size: f32) -> f32 {
        let units: u32 = text.chars().map(|c| self.char_width(c) as u32).sum();
        units as f32 * font_size / 1000.0
    }

    /// Font dictionary for a non-embedded Type1 font
    pub fn to_pdf_dictionary(self) -> Dictionary {
        let mut dict = Dictionary::new();
        dict.set("Type", Object::Name(b"Font".to_vec()));
        dict.set("Subtype", Object::Name(b"Type1".to_vec()));
        dict.set(
            "BaseFont",
            Object::Name(self.base_font_name().as_bytes().to_vec()),
        );
        dict.set("Encoding", Object::Name(b"WinAnsiEncoding".to_vec()));
        dict
    }
}

/// Encode text as WinAnsi (CP1252) bytes
///
/// Characters outside the encoding become `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| {
            let code = c as u32;
            match c {
                ' '..='~' => code as u8,
                '\u{00A0}'..='\u{00FF}' => code as u8,
                '€' => 0x80,
                '…' => 0x85,
                '‘' => 0x91,
                '’' => 0x92,
                '“' => 0x93,
                '”' => 0x94,
                '•' => 0x95,
                '–' => 0x96,
                '—' => 0x97,
                '™' => 0x99,
                _ => b'?',
            }
        })
        .collect()
}

/// Encode text as a PDF hex string (e.g. "<48656C6C6F>")
pub fn encode_text_hex(text: &str) -> String {
    let mut hex = String::with_capacity(text.len() * 2 + 2);
    hex.push('<');
    for byte in encode_win_ansi(text) {
        hex.push_str(&format!("{byte:02X}"));
    }
    hex.push('>');
    hex
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_style() {
        assert_eq!(
            StandardFont::from_style(FontWeight::Regular, FontStyle::Normal),
            StandardFont::Helvetica
        );
        assert_eq!(
            StandardFont::from_style(FontWeight::Bold, FontStyle::Italic),
            StandardFont::HelveticaBoldOblique
        );
    }

    #[test]
    fn test_ascii_widths() {
        assert_eq!(StandardFont::Helvetica.char_width(' '), 278);
        assert_eq!(StandardFont::Helvetica.char_width('A'), 667);
        assert_eq!(StandardFont::HelveticaBold.char_width('A'), 722);
        assert_eq!(StandardFont::Helvetica.char_width('~'), 584);
        assert_eq!(StandardFont::HelveticaOblique.char_width('i'), 222);
        assert_eq!(StandardFont::HelveticaBoldOblique.char_width('i'), 278);
    }

    #[test]
    fn test_text_width_points() {
        // "00" = 2 * 556 units at 10pt
        let width = StandardFont::Helvetica.text_width_points("00", 10.0);
        assert!((width - 11.12).abs() < 1e-4);
        assert_eq!(StandardFont::Helvetica.text_width_points("", 12.0), 0.0);
    }

    #[test]
    fn test_copyright_sign_width() {
        assert_eq!(StandardFont::Helvetica.char_width('©'), 737);
    }

    #[test]
    fn test_encode_win_ansi() {
        assert_eq!(encode_win_ansi("Ab"), vec![0x41, 0x62]);
        assert_eq!(encode_win_ansi("©"), vec![0xA9]);
        assert_eq!(encode_win_ansi("€"), vec![0x80]);
        assert_eq!(encode_win_ansi("สวัสดี"), vec![b'?'; 6]);
    }

    #[test]
    fn test_encode_text_hex() {
        assert_eq!(encode_text_hex("Hello"), "<48656C6C6F>");
        assert_eq!(encode_text_hex(""), "<>");
    }

    #[test]
    fn test_font_dictionary() {
        let dict = StandardFont::HelveticaBold.to_pdf_dictionary();
        assert_eq!(dict.get(b"BaseFont").unwrap().as_name().unwrap(), b"Helvetica-Bold");
        assert_eq!(dict.get(b"Subtype").unwrap().as_name().unwrap(), b"Type1");
        assert_eq!(
            dict.get(b"Encoding").unwrap().as_name().unwrap(),
            b"WinAnsiEncoding"
        );
    }

    #[test]
    fn test_resource_names_unique() {
        let mut names: Vec<_> = StandardFont::ALL.iter().map(|f| f.resource_name()).collect();
        names.dedup();
        assert_eq!(names.len(), 4);
    }
}
