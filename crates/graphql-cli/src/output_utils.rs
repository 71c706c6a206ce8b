//! Small terminal-output constants. The teacher's `crates/graphql` CLI
//! references an `output_utils` module for these same two constants, but
//! its source isn't in this retrieval pack — authored fresh here, in the
//! teacher's own style (plain `&str` constants, no ANSI color crate).

pub const GREEN_CHECK: &str = "\u{2705}";
pub const RED_X: &str = "\u{274c}";
