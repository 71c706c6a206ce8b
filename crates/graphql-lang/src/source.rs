/// A one-based line/column offset applied when computing the position of
/// embedded GraphQL documents (for example a GraphQL block inside a larger
/// host document).
///
/// The zero value `LocationOffset { line: 1, column: 1 }` means "no offset":
/// the source's own line/column numbering is reported as-is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LocationOffset {
    pub line: usize,
    pub column: usize,
}

impl Default for LocationOffset {
    fn default() -> Self {
        LocationOffset { line: 1, column: 1 }
    }
}

/// Wraps GraphQL source text with a name (used in error messages) and a
/// logical origin offset (used when the text was extracted from a larger
/// host document, so reported positions match the host file rather than the
/// extracted snippet).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Source {
    pub body: String,
    pub name: String,
    pub location_offset: LocationOffset,
}

impl Source {
    pub fn new(body: impl Into<String>) -> Self {
        Source {
            body: body.into(),
            name: "GraphQL request".to_string(),
            location_offset: LocationOffset::default(),
        }
    }

    pub fn named(body: impl Into<String>, name: impl Into<String>) -> Self {
        Source {
            body: body.into(),
            name: name.into(),
            location_offset: LocationOffset::default(),
        }
    }

    pub fn with_location_offset(mut self, offset: LocationOffset) -> Self {
        assert!(offset.line > 0, "line offset must be positive");
        assert!(offset.column > 0, "column offset must be positive");
        self.location_offset = offset;
        self
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

impl From<&str> for Source {
    fn from(value: &str) -> Self {
        Source::new(value)
    }
}

impl From<String> for Source {
    fn from(value: String) -> Self {
        Source::new(value)
    }
}
