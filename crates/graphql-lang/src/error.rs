use crate::position::SourcePosition;

/// A syntax error raised by the lexer or parser.
///
/// Always fatal for the document being processed (§7, error kind 1); carries
/// enough information for callers to render a `^` caret under the offending
/// character, the way the reference implementation's `printSourceLocation`
/// does.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("Syntax Error: {message}")]
pub struct GraphQLSyntaxError {
    pub message: String,
    pub source_name: String,
    pub position: SourcePosition,
    /// Byte offset into the source body, for callers that want their own
    /// caret rendering.
    pub byte_offset: usize,
}

impl GraphQLSyntaxError {
    pub fn new(
        message: impl Into<String>,
        source_name: impl Into<String>,
        position: SourcePosition,
        byte_offset: usize,
    ) -> Self {
        GraphQLSyntaxError {
            message: message.into(),
            source_name: source_name.into(),
            position,
            byte_offset,
        }
    }
}
