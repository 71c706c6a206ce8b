//! Name validation (§3 invariant 8), grounded on
//! `graphql/type/assert_name.py` / `graphql/utilities/assert_valid_name.py`
//! via `original_source/`.

use crate::error::SchemaError;

/// `/^[_A-Za-z][_A-Za-z0-9]*$/`, and must not begin with `__` unless the
/// name belongs to an introspection type (callers that build introspection
/// types pass `allow_introspection = true`).
pub fn assert_valid_name(name: &str, allow_introspection: bool) -> Result<(), SchemaError> {
    if name.is_empty() {
        return Err(SchemaError::InvalidName { name: name.to_string(), reason: "must not be empty".into() });
    }
    let mut chars = name.chars();
    let first = chars.next().unwrap();
    if !(first == '_' || first.is_ascii_alphabetic()) {
        return Err(SchemaError::InvalidName {
            name: name.to_string(),
            reason: "must start with an underscore or a letter".into(),
        });
    }
    if !chars.all(|c| c == '_' || c.is_ascii_alphanumeric()) {
        return Err(SchemaError::InvalidName {
            name: name.to_string(),
            reason: "must only contain underscores, letters, and digits".into(),
        });
    }
    if !allow_introspection && name.starts_with("__") {
        return Err(SchemaError::InvalidName {
            name: name.to_string(),
            reason: "must not begin with \"__\", which is reserved for introspection types".into(),
        });
    }
    Ok(())
}

/// Enum value names additionally reject `true`/`false`/`null` (§3 invariant 7).
pub fn assert_valid_enum_value_name(name: &str) -> Result<(), SchemaError> {
    assert_valid_name(name, false)?;
    if matches!(name, "true" | "false" | "null") {
        return Err(SchemaError::InvalidName {
            name: name.to_string(),
            reason: "must not be \"true\", \"false\", or \"null\"".into(),
        });
    }
    Ok(())
}
