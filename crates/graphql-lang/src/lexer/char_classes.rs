//! Character classification, split out the way
//! `graphql/language/character_classes.py` separates it from the lexer body.

#[inline]
pub fn is_name_start(ch: u8) -> bool {
    ch == b'_' || ch.is_ascii_alphabetic()
}

#[inline]
pub fn is_name_continue(ch: u8) -> bool {
    ch == b'_' || ch.is_ascii_alphanumeric()
}

#[inline]
pub fn is_digit(ch: u8) -> bool {
    ch.is_ascii_digit()
}

#[inline]
pub fn is_line_terminator(ch: u8) -> bool {
    ch == b'\n' || ch == b'\r'
}

#[inline]
pub fn is_whitespace(ch: u8) -> bool {
    ch == b' ' || ch == b'\t'
}

/// Source characters below U+0020 are disallowed unescaped inside strings,
/// except horizontal tab.
#[inline]
pub fn is_disallowed_in_string(ch: u8) -> bool {
    ch < 0x20 && ch != b'\t'
}
