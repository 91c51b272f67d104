//! Numeric character references.
//!
//! [§ 13.2.5.80 Numeric character reference end state](https://html.spec.whatwg.org/multipage/parsing.html#numeric-character-reference-end-state)

use crate::error::ParseErrorKind;
use crate::reader::is_noncharacter;

/// One past the largest Unicode code point. Accumulated codes saturate here.
const OUT_OF_RANGE: u32 = 0x11_0000;

/// "If the number is one of the numbers in the first column of the following
/// table, then find the row with that number in the first column, and set
/// the character reference code to the number in the second column."
///
/// The Windows-1252 interpretation of the C1 control range.
const C1_REPLACEMENTS: [(u32, char); 27] = [
    (0x80, '\u{20AC}'), // EURO SIGN
    (0x82, '\u{201A}'), // SINGLE LOW-9 QUOTATION MARK
    (0x83, '\u{0192}'), // LATIN SMALL LETTER F WITH HOOK
    (0x84, '\u{201E}'), // DOUBLE LOW-9 QUOTATION MARK
    (0x85, '\u{2026}'), // HORIZONTAL ELLIPSIS
    (0x86, '\u{2020}'), // DAGGER
    (0x87, '\u{2021}'), // DOUBLE DAGGER
    (0x88, '\u{02C6}'), // MODIFIER LETTER CIRCUMFLEX ACCENT
    (0x89, '\u{2030}'), // PER MILLE SIGN
    (0x8A, '\u{0160}'), // LATIN CAPITAL LETTER S WITH CARON
    (0x8B, '\u{2039}'), // SINGLE LEFT-POINTING ANGLE QUOTATION MARK
    (0x8C, '\u{0152}'), // LATIN CAPITAL LIGATURE OE
    (0x8E, '\u{017D}'), // LATIN CAPITAL LETTER Z WITH CARON
    (0x91, '\u{2018}'), // LEFT SINGLE QUOTATION MARK
    (0x92, '\u{2019}'), // RIGHT SINGLE QUOTATION MARK
    (0x93, '\u{201C}'), // LEFT DOUBLE QUOTATION MARK
    (0x94, '\u{201D}'), // RIGHT DOUBLE QUOTATION MARK
    (0x95, '\u{2022}'), // BULLET
    (0x96, '\u{2013}'), // EN DASH
    (0x97, '\u{2014}'), // EM DASH
    (0x98, '\u{02DC}'), // SMALL TILDE
    (0x99, '\u{2122}'), // TRADE MARK SIGN
    (0x9A, '\u{0161}'), // LATIN SMALL LETTER S WITH CARON
    (0x9B, '\u{203A}'), // SINGLE RIGHT-POINTING ANGLE QUOTATION MARK
    (0x9C, '\u{0153}'), // LATIN SMALL LIGATURE OE
    (0x9E, '\u{017E}'), // LATIN SMALL LETTER Z WITH CARON
    (0x9F, '\u{0178}'), // LATIN CAPITAL LETTER Y WITH DIAERESIS
];

/// "Multiply the character reference code by `radix` and add a numeric
/// version of the current input character."
///
/// Saturates just above U+10FFFF so arbitrarily long digit runs never
/// overflow; anything saturated is out of range either way.
#[must_use]
pub const fn accumulate(code: u32, radix: u32, digit: u32) -> u32 {
    let next = code.saturating_mul(radix).saturating_add(digit);
    if next > OUT_OF_RANGE {
        OUT_OF_RANGE
    } else {
        next
    }
}

/// Map a character reference code to the character it produces, together
/// with the parse error it raises, if any.
///
/// Zero, surrogates, values above U+10FFFF and noncharacters all become
/// U+FFFD. Controls are kept (after the C1 remapping) but flagged.
#[must_use]
pub fn resolve(code: u32) -> (char, Option<ParseErrorKind>) {
    const REPLACEMENT: char = '\u{FFFD}';

    if code == 0 {
        return (REPLACEMENT, Some(ParseErrorKind::NullCharacterReference));
    }
    if code > 0x10_FFFF {
        return (
            REPLACEMENT,
            Some(ParseErrorKind::CharacterReferenceOutsideUnicodeRange),
        );
    }
    if (0xD800..=0xDFFF).contains(&code) {
        return (REPLACEMENT, Some(ParseErrorKind::SurrogateCharacterReference));
    }
    if is_noncharacter(code) {
        return (
            REPLACEMENT,
            Some(ParseErrorKind::NoncharacterCharacterReference),
        );
    }

    let is_control = matches!(code, 0x01..=0x1F | 0x7F..=0x9F);
    let is_whitespace = matches!(code, 0x09 | 0x0A | 0x0C | 0x20);
    if code == 0x0D || (is_control && !is_whitespace) {
        let c = C1_REPLACEMENTS
            .iter()
            .find(|(from, _)| *from == code)
            .map(|&(_, to)| to)
            .or_else(|| char::from_u32(code))
            .unwrap_or(REPLACEMENT);
        return (c, Some(ParseErrorKind::ControlCharacterReference));
    }

    (char::from_u32(code).unwrap_or(REPLACEMENT), None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_code_points() {
        assert_eq!(resolve(0x41), ('A', None));
        assert_eq!(resolve(0x1F600), ('😀', None));
        assert_eq!(resolve(0x09), ('\t', None));
    }

    #[test]
    fn test_rejected_code_points() {
        assert_eq!(
            resolve(0),
            ('\u{FFFD}', Some(ParseErrorKind::NullCharacterReference))
        );
        assert_eq!(
            resolve(0xD800),
            ('\u{FFFD}', Some(ParseErrorKind::SurrogateCharacterReference))
        );
        assert_eq!(
            resolve(0x11_0000),
            (
                '\u{FFFD}',
                Some(ParseErrorKind::CharacterReferenceOutsideUnicodeRange)
            )
        );
        assert_eq!(
            resolve(0xFFFE),
            (
                '\u{FFFD}',
                Some(ParseErrorKind::NoncharacterCharacterReference)
            )
        );
    }

    #[test]
    fn test_c1_remapping() {
        assert_eq!(
            resolve(0x80),
            ('€', Some(ParseErrorKind::ControlCharacterReference))
        );
        assert_eq!(
            resolve(0x9F),
            ('Ÿ', Some(ParseErrorKind::ControlCharacterReference))
        );
        // Unassigned in Windows-1252: kept as the control itself.
        assert_eq!(
            resolve(0x81),
            ('\u{81}', Some(ParseErrorKind::ControlCharacterReference))
        );
        assert_eq!(
            resolve(0x0D),
            ('\r', Some(ParseErrorKind::ControlCharacterReference))
        );
    }

    #[test]
    fn test_accumulate_saturates() {
        let mut code = 0;
        for _ in 0..40 {
            code = accumulate(code, 16, 0xF);
        }
        assert_eq!(code, OUT_OF_RANGE);
        assert_eq!(accumulate(12, 10, 3), 123);
    }
}
