//! The block-string value algorithm (§4.1, §8 "Block-string value
//! algorithm"): turns the raw, possibly-indented lines of a `"""..."""`
//! block string into its cooked value.

fn leading_whitespace_len(line: &str) -> usize {
    line.chars().take_while(|c| *c == ' ' || *c == '\t').count()
}

fn is_blank(line: &str) -> bool {
    line.chars().all(|c| c == ' ' || c == '\t')
}

/// Computes the cooked value of a block string from its raw lines (already
/// split on line terminators, with `\"""` already unescaped to `"""`).
pub fn block_string_value(raw_lines: &[&str]) -> String {
    if raw_lines.is_empty() {
        return String::new();
    }

    let common_indent = raw_lines
        .iter()
        .skip(1)
        .filter(|line| !is_blank(line))
        .map(|line| leading_whitespace_len(line))
        .min();

    let mut lines: Vec<String> = raw_lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            if i == 0 {
                line.to_string()
            } else if let Some(indent) = common_indent {
                let strip = indent.min(line.chars().count());
                line.chars().skip(strip).collect()
            } else {
                line.to_string()
            }
        })
        .collect();

    while lines.first().is_some_and(|l| is_blank(l)) {
        lines.remove(0);
    }
    while lines.last().is_some_and(|l| is_blank(l)) {
        lines.pop();
    }

    lines.join("\n")
}

/// Splits block-string content on GraphQL line terminators (`\r\n`, `\r`,
/// `\n`), the way the lexer would have seen them while scanning.
pub fn split_lines(content: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let bytes = content.as_bytes();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\r' => {
                lines.push(&content[start..i]);
                if bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
                i += 1;
                start = i;
            }
            b'\n' => {
                lines.push(&content[start..i]);
                i += 1;
                start = i;
            }
            _ => i += 1,
        }
    }
    lines.push(&content[start..]);
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_common_indent_and_blank_edges() {
        let raw = "\n    Hello,\n      World!\n\n    Yours,\n      GraphQL.\n  ";
        let lines = split_lines(raw);
        let value = block_string_value(&lines);
        assert_eq!(value, "Hello,\n  World!\n\nYours,\n  GraphQL.");
    }

    #[test]
    fn first_line_indent_is_untouched() {
        let raw = "    Hello\n    World";
        let lines = split_lines(raw);
        let value = block_string_value(&lines);
        assert_eq!(value, "    Hello\nWorld");
    }

    #[test]
    fn common_indent_is_independent_of_depth() {
        let shallow = block_string_value(&split_lines("a\n  b\n  c"));
        let deep = block_string_value(&split_lines("a\n      b\n      c"));
        assert_eq!(shallow, deep);
    }
}
