mod kind;

pub use kind::TokenKind;

/// An index into a [`TokenArena`]'s token list.
///
/// Stands in for the raw `prev`/`next` pointers of the reference
/// implementation's doubly-linked token list: the arena owns every `Token`,
/// and `prev`/`next` are just indices into it, so the whole stream is
/// dropped in one piece along with the `Source` it was lexed from.
pub type TokenIndex = usize;

/// A single lexed token.
///
/// Tokens form a doubly linked list via `prev`/`next` indices into the
/// owning [`TokenArena`], bookended by synthetic `Sof`/`Eof` tokens.
/// Comments are retained in the list (so callers walking `prev`/`next`
/// directly can still see them) but are skipped by [`Lexer::advance`](crate::lexer::Lexer::advance).
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Byte offset of the first character, inclusive.
    pub start: usize,
    /// Byte offset one past the last character.
    pub end: usize,
    pub line: usize,
    pub column: usize,
    /// The parsed value for Name/Int/Float/String/BlockString tokens.
    pub value: Option<String>,
    pub prev: Option<TokenIndex>,
    pub next: Option<TokenIndex>,
}

impl Token {
    pub fn description(&self) -> String {
        match &self.value {
            Some(v) if self.kind == TokenKind::Name => format!("Name \"{v}\""),
            Some(v) => format!("{} \"{}\"", self.kind.description(), v),
            None => self.kind.description().to_string(),
        }
    }
}

/// Owns the doubly linked list of [`Token`]s produced while lexing a single
/// [`Source`](crate::Source).
#[derive(Clone, Debug, Default)]
pub struct TokenArena {
    tokens: Vec<Token>,
}

impl TokenArena {
    pub fn new() -> Self {
        TokenArena { tokens: Vec::new() }
    }

    pub fn get(&self, idx: TokenIndex) -> &Token {
        &self.tokens[idx]
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Appends a token, linking it after `prev` (if any), and returns its
    /// index.
    pub(crate) fn push_linked(&mut self, mut token: Token, prev: Option<TokenIndex>) -> TokenIndex {
        token.prev = prev;
        let idx = self.tokens.len();
        self.tokens.push(token);
        if let Some(prev_idx) = prev {
            self.tokens[prev_idx].next = Some(idx);
        }
        idx
    }
}
