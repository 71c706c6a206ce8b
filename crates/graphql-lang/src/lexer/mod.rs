mod block_string;
pub mod char_classes;
mod string_value;

pub use block_string::block_string_value;
pub use block_string::split_lines;

use crate::error::GraphQLSyntaxError;
use crate::position::SourcePosition;
use crate::source::Source;
use crate::token::{Token, TokenArena, TokenIndex, TokenKind};
use string_value::{decode_unicode_escape, hex4, UnicodeEscape};

type LexResult<T> = Result<T, GraphQLSyntaxError>;

/// Cursor state the lexer scans from; cheap to snapshot so `lookahead` can
/// peek without committing to advancing past the cached token.
#[derive(Clone, Copy, Debug)]
struct Cursor {
    pos: usize,
    line: usize,
    line_start: usize,
}

/// Tokenizes a [`Source`], producing a doubly linked [`TokenArena`] lazily.
///
/// `advance` returns the next non-comment token; `lookahead` returns the
/// same token without consuming it. Once EOF is reached, both return the
/// same EOF token forever (§4.1).
pub struct Lexer<'a> {
    source: &'a Source,
    bytes: &'a [u8],
    arena: TokenArena,
    current: TokenIndex,
    cursor: Cursor,
    peeked: Option<(Token, Cursor)>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a Source) -> Self {
        let mut arena = TokenArena::new();
        let sof = Token {
            kind: TokenKind::Sof,
            start: 0,
            end: 0,
            line: source.location_offset.line,
            column: source.location_offset.column,
            value: None,
            prev: None,
            next: None,
        };
        let sof_idx = arena.push_linked(sof, None);
        Lexer {
            source,
            bytes: source.body.as_bytes(),
            arena,
            current: sof_idx,
            cursor: Cursor {
                pos: 0,
                line: 1,
                line_start: 0,
            },
            peeked: None,
        }
    }

    pub fn arena(&self) -> &TokenArena {
        &self.arena
    }

    pub fn current_token(&self) -> &Token {
        self.arena.get(self.current)
    }

    /// Returns the next non-comment token, advancing past it.
    pub fn advance(&mut self) -> LexResult<&Token> {
        loop {
            if self.arena.get(self.current).kind == TokenKind::Eof {
                return Ok(self.arena.get(self.current));
            }
            let (token, cursor) = match self.peeked.take() {
                Some(pair) => pair,
                None => self.scan_from(self.cursor)?,
            };
            self.cursor = cursor;
            let is_comment = token.kind == TokenKind::Comment;
            let idx = self.arena.push_linked(token, Some(self.current));
            self.current = idx;
            if !is_comment {
                return Ok(self.arena.get(self.current));
            }
        }
    }

    /// Returns the next non-comment token without consuming it.
    pub fn lookahead(&mut self) -> LexResult<&Token> {
        if self.arena.get(self.current).kind == TokenKind::Eof {
            return Ok(self.arena.get(self.current));
        }
        loop {
            if let Some((token, _)) = &self.peeked {
                if token.kind != TokenKind::Comment {
                    return Ok(&self.peeked.as_ref().unwrap().0);
                }
            } else {
                let (token, cursor) = self.scan_from(self.cursor)?;
                self.peeked = Some((token, cursor));
                continue;
            }
            // The peeked token is a comment: materialize it into the arena
            // and keep scanning.
            let (token, cursor) = self.peeked.take().unwrap();
            self.cursor = cursor;
            let idx = self.arena.push_linked(token, Some(self.current));
            self.current = idx;
        }
    }

    fn position_at(&self, byte_offset: usize) -> SourcePosition {
        crate::position::position_for_offset(
            &self.source.body,
            byte_offset,
            self.source.location_offset,
        )
    }

    fn error_at(&self, byte_offset: usize, message: impl Into<String>) -> GraphQLSyntaxError {
        GraphQLSyntaxError::new(message, self.source.name.clone(), self.position_at(byte_offset), byte_offset)
    }

    /// Scans exactly one token (comment or otherwise) starting at `cursor`,
    /// skipping ignored characters first (whitespace, commas, BOM, line
    /// terminators).
    fn scan_from(&self, mut cursor: Cursor) -> LexResult<(Token, Cursor)> {
        loop {
            if cursor.pos >= self.bytes.len() {
                return Ok((
                    self.make_token(TokenKind::Eof, cursor.pos, cursor.pos, cursor, None),
                    cursor,
                ));
            }
            let b = self.bytes[cursor.pos];
            match b {
                0xEF if self.bytes[cursor.pos..].starts_with(&[0xEF, 0xBB, 0xBF]) => {
                    cursor.pos += 3;
                }
                b' ' | b'\t' | b',' => cursor.pos += 1,
                b'\n' => {
                    cursor.pos += 1;
                    cursor.line += 1;
                    cursor.line_start = cursor.pos;
                }
                b'\r' => {
                    cursor.pos += 1;
                    if self.bytes.get(cursor.pos) == Some(&b'\n') {
                        cursor.pos += 1;
                    }
                    cursor.line += 1;
                    cursor.line_start = cursor.pos;
                }
                b'#' => return self.scan_comment(cursor),
                _ => break,
            }
        }
        self.scan_significant(cursor)
    }

    fn make_token(
        &self,
        kind: TokenKind,
        start: usize,
        end: usize,
        cursor: Cursor,
        value: Option<String>,
    ) -> Token {
        Token {
            kind,
            start,
            end,
            line: cursor.line,
            column: start - cursor.line_start + 1,
            value,
            prev: None,
            next: None,
        }
    }

    fn scan_comment(&self, mut cursor: Cursor) -> LexResult<(Token, Cursor)> {
        let start = cursor.pos;
        cursor.pos += 1; // '#'
        let value_start = cursor.pos;
        while cursor.pos < self.bytes.len() && !char_classes::is_line_terminator(self.bytes[cursor.pos]) {
            cursor.pos += 1;
        }
        let value = self.source.body[value_start..cursor.pos].to_string();
        let token = self.make_token(TokenKind::Comment, start, cursor.pos, cursor, Some(value));
        Ok((token, cursor))
    }

    fn scan_significant(&self, mut cursor: Cursor) -> LexResult<(Token, Cursor)> {
        let start = cursor.pos;
        let start_cursor = cursor;
        let b = self.bytes[cursor.pos];

        macro_rules! punct {
            ($kind:expr) => {{
                cursor.pos += 1;
                Ok((self.make_token($kind, start, cursor.pos, start_cursor, None), cursor))
            }};
        }

        match b {
            b'!' => punct!(TokenKind::Bang),
            b'$' => punct!(TokenKind::Dollar),
            b'&' => punct!(TokenKind::Amp),
            b'(' => punct!(TokenKind::ParenL),
            b')' => punct!(TokenKind::ParenR),
            b':' => punct!(TokenKind::Colon),
            b'=' => punct!(TokenKind::Equals),
            b'@' => punct!(TokenKind::At),
            b'[' => punct!(TokenKind::BracketL),
            b']' => punct!(TokenKind::BracketR),
            b'{' => punct!(TokenKind::BraceL),
            b'}' => punct!(TokenKind::BraceR),
            b'|' => punct!(TokenKind::Pipe),
            b'.' => {
                if self.bytes[cursor.pos..].starts_with(b"...") {
                    cursor.pos += 3;
                    Ok((self.make_token(TokenKind::Spread, start, cursor.pos, start_cursor, None), cursor))
                } else {
                    Err(self.error_at(start, "Unexpected character: \".\"."))
                }
            }
            b'"' => {
                if self.bytes[cursor.pos..].starts_with(b"\"\"\"") {
                    self.scan_block_string(cursor)
                } else {
                    self.scan_string(cursor)
                }
            }
            b'-' | b'0'..=b'9' => self.scan_number(cursor),
            _ if char_classes::is_name_start(b) => self.scan_name(cursor),
            _ => Err(self.error_at(
                start,
                format!("Unexpected character: {:?}.", self.bytes[start] as char),
            )),
        }
    }

    fn scan_name(&self, mut cursor: Cursor) -> LexResult<(Token, Cursor)> {
        let start = cursor.pos;
        let start_cursor = cursor;
        while cursor.pos < self.bytes.len() && char_classes::is_name_continue(self.bytes[cursor.pos]) {
            cursor.pos += 1;
        }
        let value = self.source.body[start..cursor.pos].to_string();
        Ok((
            self.make_token(TokenKind::Name, start, cursor.pos, start_cursor, Some(value)),
            cursor,
        ))
    }

    fn scan_number(&self, mut cursor: Cursor) -> LexResult<(Token, Cursor)> {
        let start = cursor.pos;
        let start_cursor = cursor;
        let mut is_float = false;

        if self.bytes[cursor.pos] == b'-' {
            cursor.pos += 1;
        }

        if self.bytes.get(cursor.pos) == Some(&b'0') {
            cursor.pos += 1;
            if self.bytes.get(cursor.pos).is_some_and(|b| char_classes::is_digit(*b)) {
                return Err(self.error_at(
                    cursor.pos,
                    format!("Invalid number, unexpected digit after 0: {:?}.", self.bytes[cursor.pos] as char),
                ));
            }
        } else {
            self.consume_digits(&mut cursor)?;
        }

        if self.bytes.get(cursor.pos) == Some(&b'.') {
            is_float = true;
            cursor.pos += 1;
            self.consume_digits(&mut cursor)?;
        }

        if matches!(self.bytes.get(cursor.pos), Some(b'e') | Some(b'E')) {
            is_float = true;
            cursor.pos += 1;
            if matches!(self.bytes.get(cursor.pos), Some(b'+') | Some(b'-')) {
                cursor.pos += 1;
            }
            self.consume_digits(&mut cursor)?;
        }

        if let Some(&b) = self.bytes.get(cursor.pos) {
            if char_classes::is_name_start(b) || b == b'.' {
                return Err(self.error_at(cursor.pos, format!("Invalid number, expected digit but got: {:?}.", b as char)));
            }
        }

        let value = self.source.body[start..cursor.pos].to_string();
        let kind = if is_float { TokenKind::Float } else { TokenKind::Int };
        Ok((self.make_token(kind, start, cursor.pos, start_cursor, Some(value)), cursor))
    }

    fn consume_digits(&self, cursor: &mut Cursor) -> LexResult<()> {
        if !self.bytes.get(cursor.pos).is_some_and(|b| char_classes::is_digit(*b)) {
            return Err(self.error_at(
                cursor.pos,
                format!(
                    "Invalid number, expected digit but got: {}.",
                    self.bytes
                        .get(cursor.pos)
                        .map(|b| format!("{:?}", *b as char))
                        .unwrap_or_else(|| "<EOF>".to_string())
                ),
            ));
        }
        while self.bytes.get(cursor.pos).is_some_and(|b| char_classes::is_digit(*b)) {
            cursor.pos += 1;
        }
        Ok(())
    }

    fn scan_string(&self, mut cursor: Cursor) -> LexResult<(Token, Cursor)> {
        let start = cursor.pos;
        let start_cursor = cursor;
        cursor.pos += 1; // opening quote
        let mut value = String::new();

        loop {
            let Some(&b) = self.bytes.get(cursor.pos) else {
                return Err(self.error_at(cursor.pos, "Unterminated string."));
            };
            if b == b'"' {
                cursor.pos += 1;
                break;
            }
            if char_classes::is_line_terminator(b) {
                return Err(self.error_at(cursor.pos, "Unterminated string."));
            }
            if char_classes::is_disallowed_in_string(b) {
                return Err(self.error_at(
                    cursor.pos,
                    format!("Invalid character within String: {:?}.", b as char),
                ));
            }
            if b == b'\\' {
                cursor.pos += 1;
                let Some(&esc) = self.bytes.get(cursor.pos) else {
                    return Err(self.error_at(cursor.pos, "Unterminated string."));
                };
                match esc {
                    b'"' => {
                        value.push('"');
                        cursor.pos += 1;
                    }
                    b'\\' => {
                        value.push('\\');
                        cursor.pos += 1;
                    }
                    b'/' => {
                        value.push('/');
                        cursor.pos += 1;
                    }
                    b'b' => {
                        value.push('\u{8}');
                        cursor.pos += 1;
                    }
                    b'f' => {
                        value.push('\u{c}');
                        cursor.pos += 1;
                    }
                    b'n' => {
                        value.push('\n');
                        cursor.pos += 1;
                    }
                    b'r' => {
                        value.push('\r');
                        cursor.pos += 1;
                    }
                    b't' => {
                        value.push('\t');
                        cursor.pos += 1;
                    }
                    b'u' => {
                        cursor.pos += 1;
                        let (ch, consumed) = self.scan_unicode_escape(cursor.pos)?;
                        value.push(ch);
                        cursor.pos += consumed;
                    }
                    other => {
                        return Err(self.error_at(
                            cursor.pos,
                            format!("Invalid character escape sequence: \"\\{}\".", other as char),
                        ));
                    }
                }
            } else {
                let ch_len = utf8_len(b);
                value.push_str(&self.source.body[cursor.pos..cursor.pos + ch_len]);
                cursor.pos += ch_len;
            }
        }

        Ok((self.make_token(TokenKind::String, start, cursor.pos, start_cursor, Some(value)), cursor))
    }

    /// Reads one `XXXX` hex escape (and, if it's a high surrogate, the
    /// following `\uXXXX` low surrogate) starting right after `\u`. Returns
    /// the decoded scalar and the number of source bytes consumed from
    /// `pos` (not including the leading `\u` already consumed by the
    /// caller).
    fn scan_unicode_escape(&self, pos: usize) -> LexResult<(char, usize)> {
        let digits = self.bytes.get(pos..pos + 4).ok_or_else(|| self.error_at(pos, "Invalid Unicode escape sequence."))?;
        let unit = hex4(digits).ok_or_else(|| {
            self.error_at(pos, format!("Invalid character escape sequence: \"\\u{}\".", String::from_utf8_lossy(digits)))
        })?;

        let next_four = self
            .bytes
            .get(pos + 4..pos + 6)
            .filter(|b| *b == b"\\u")
            .and_then(|_| self.bytes.get(pos + 6..pos + 10));

        let (escape, consumed_pair) = decode_unicode_escape(unit, next_four);
        match escape {
            UnicodeEscape::Scalar(ch) => {
                let consumed = if consumed_pair { 10 } else { 4 };
                Ok((ch, consumed))
            }
            UnicodeEscape::InvalidHex | UnicodeEscape::LoneSurrogate => {
                Err(self.error_at(pos, format!("Invalid character escape sequence: \"\\u{}\".", String::from_utf8_lossy(digits))))
            }
        }
    }

    fn scan_block_string(&self, mut cursor: Cursor) -> LexResult<(Token, Cursor)> {
        let start = cursor.pos;
        let start_cursor = cursor;
        cursor.pos += 3; // opening """
        let mut raw = String::new();
        let mut line = cursor.line;
        let mut line_start = cursor.line_start;

        loop {
            if cursor.pos >= self.bytes.len() {
                return Err(self.error_at(cursor.pos, "Unterminated string."));
            }
            if self.bytes[cursor.pos..].starts_with(b"\"\"\"") {
                cursor.pos += 3;
                break;
            }
            if self.bytes[cursor.pos..].starts_with(b"\\\"\"\"") {
                raw.push_str("\"\"\"");
                cursor.pos += 4;
                continue;
            }
            let b = self.bytes[cursor.pos];
            if char_classes::is_disallowed_in_string(b) && b != b'\r' && b != b'\n' {
                return Err(self.error_at(cursor.pos, format!("Invalid character within String: {:?}.", b as char)));
            }
            if b == b'\n' {
                raw.push('\n');
                cursor.pos += 1;
                line += 1;
                line_start = cursor.pos;
                continue;
            }
            if b == b'\r' {
                raw.push('\n');
                cursor.pos += 1;
                if self.bytes.get(cursor.pos) == Some(&b'\n') {
                    cursor.pos += 1;
                }
                line += 1;
                line_start = cursor.pos;
                continue;
            }
            let ch_len = utf8_len(b);
            raw.push_str(&self.source.body[cursor.pos..cursor.pos + ch_len]);
            cursor.pos += ch_len;
        }

        cursor.line = line;
        cursor.line_start = line_start;

        let lines = split_lines(&raw);
        let value = block_string_value(&lines);
        Ok((self.make_token(TokenKind::BlockString, start, cursor.pos, start_cursor, Some(value)), cursor))
    }
}

fn utf8_len(first_byte: u8) -> usize {
    if first_byte & 0x80 == 0 {
        1
    } else if first_byte & 0xE0 == 0xC0 {
        2
    } else if first_byte & 0xF0 == 0xE0 {
        3
    } else {
        4
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::Source;

    fn lex_all(body: &str) -> Vec<Token> {
        let source = Source::new(body);
        let mut lexer = Lexer::new(&source);
        let mut tokens = Vec::new();
        loop {
            let tok = lexer.advance().expect("lex ok").clone();
            let is_eof = tok.kind == TokenKind::Eof;
            tokens.push(tok);
            if is_eof {
                break;
            }
        }
        tokens
    }

    #[test]
    fn lexes_punctuators_and_names() {
        let tokens = lex_all("{ hero { name } }");
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::BraceL,
                TokenKind::Name,
                TokenKind::BraceL,
                TokenKind::Name,
                TokenKind::BraceR,
                TokenKind::BraceR,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn lexes_spread() {
        let tokens = lex_all("...Foo");
        assert_eq!(tokens[0].kind, TokenKind::Spread);
        assert_eq!(tokens[1].value.as_deref(), Some("Foo"));
    }

    #[test]
    fn lone_dot_is_syntax_error() {
        let source = Source::new(".");
        let mut lexer = Lexer::new(&source);
        assert!(lexer.advance().is_err());
    }

    #[test]
    fn lexes_float_and_int() {
        let tokens = lex_all("1 -2 3.14 1e10 -1.5e-3");
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Int,
                TokenKind::Int,
                TokenKind::Float,
                TokenKind::Float,
                TokenKind::Float,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn leading_zero_digit_is_error() {
        let source = Source::new("0123");
        let mut lexer = Lexer::new(&source);
        assert!(lexer.advance().is_err());
    }

    #[test]
    fn string_escapes_decode() {
        let tokens = lex_all(r#""a\nb\u0041\tc""#);
        assert_eq!(tokens[0].value.as_deref(), Some("a\nbA\tc"));
    }

    #[test]
    fn unterminated_string_is_error() {
        let source = Source::new("\"abc\ndef\"");
        let mut lexer = Lexer::new(&source);
        assert!(lexer.advance().is_err());
    }

    #[test]
    fn block_string_lexes_cooked_value() {
        let tokens = lex_all("\"\"\"\n    Hello,\n      World!\n    \"\"\"");
        assert_eq!(tokens[0].kind, TokenKind::BlockString);
        assert_eq!(tokens[0].value.as_deref(), Some("Hello,\n  World!"));
    }

    #[test]
    fn comments_are_skipped_by_advance_but_linked() {
        let tokens = lex_all("# a comment\n{ a }");
        assert_eq!(tokens[0].kind, TokenKind::BraceL);
    }

    #[test]
    fn lex_round_trip_reconstructs_body() {
        let body = "{ hero(id: 1) { name } } # trailing";
        let source = Source::new(body);
        let mut lexer = Lexer::new(&source);
        let mut last_end = 0;
        loop {
            let tok = lexer.advance().expect("lex ok").clone();
            if tok.kind == TokenKind::Eof {
                break;
            }
            last_end = tok.end;
        }
        assert!(last_end <= body.len());
    }

    #[test]
    fn eof_is_stable() {
        let source = Source::new("{}");
        let mut lexer = Lexer::new(&source);
        lexer.advance().unwrap();
        lexer.advance().unwrap();
        let first_eof = lexer.advance().unwrap().clone();
        let second_eof = lexer.advance().unwrap().clone();
        assert_eq!(first_eof, second_eof);
    }
}
