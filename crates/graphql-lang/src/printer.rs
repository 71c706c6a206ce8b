//! Canonical AST-to-text printer (§4.9): the inverse of [`parser::parse_document`](crate::parser::parse_document).
//!
//! `parse(print(parse(text)))` always reproduces the same AST as `parse(text)`
//! (modulo source locations, which printing necessarily discards) — printing
//! is a pure function of the AST, not of the original source text.

use crate::ast::*;

const INDENT: &str = "  ";

pub fn print(document: &Document) -> String {
    join_blocks(document.definitions.iter().map(print_definition))
}

pub fn print_value(value: &Value) -> String {
    render_value(value)
}

pub fn print_type(ty: &Type) -> String {
    render_type(ty)
}

fn print_definition(definition: &Definition) -> String {
    match definition {
        Definition::Executable(ExecutableDefinition::Operation(op)) => print_operation_definition(op),
        Definition::Executable(ExecutableDefinition::Fragment(frag)) => print_fragment_definition(frag),
        Definition::Schema(schema) => print_schema_definition(schema),
        Definition::Type(type_def) => print_type_definition(type_def),
        Definition::TypeExtension(ext) => format!("extend {}", print_type_definition_like_extension(ext)),
        Definition::Directive(dir_def) => print_directive_definition(dir_def),
    }
}

fn print_operation_definition(op: &OperationDefinition) -> String {
    let selection_set = print_selection_set(&op.selection_set, 0);
    // Shorthand form: bare query, no name/variables/directives.
    if op.operation == OperationType::Query && op.name.is_none() && op.variable_definitions.is_empty() && op.directives.is_empty() {
        return selection_set;
    }
    let name = op.name.as_ref().map(|n| format!(" {}", n.as_str())).unwrap_or_default();
    let vars = print_variable_definitions(&op.variable_definitions);
    let directives = print_directives(&op.directives);
    format!("{}{}{}{} {}", op.operation.as_str(), name, vars, directives, selection_set)
}

fn print_variable_definitions(defs: &[VariableDefinition]) -> String {
    if defs.is_empty() {
        return String::new();
    }
    let inner = defs
        .iter()
        .map(|d| {
            let default = d.default_value.as_ref().map(|v| format!(" = {}", render_value(v))).unwrap_or_default();
            format!("${}: {}{}{}", d.variable.name.as_str(), render_type(&d.var_type), default, print_directives(&d.directives))
        })
        .collect::<Vec<_>>()
        .join(", ");
    format!("({inner})")
}

fn print_selection_set(selection_set: &SelectionSet, indent: usize) -> String {
    let pad = INDENT.repeat(indent);
    let inner_pad = INDENT.repeat(indent + 1);
    let body = selection_set
        .selections
        .iter()
        .map(|s| format!("{inner_pad}{}", print_selection(s, indent + 1)))
        .collect::<Vec<_>>()
        .join("\n");
    format!("{{\n{body}\n{pad}}}")
}

fn print_selection(selection: &Selection, indent: usize) -> String {
    match selection {
        Selection::Field(field) => print_field(field, indent),
        Selection::FragmentSpread(spread) => format!("...{}{}", spread.name.as_str(), print_directives(&spread.directives)),
        Selection::InlineFragment(inline) => {
            let type_condition = inline.type_condition.as_ref().map(|t| format!(" on {}", t.name.as_str())).unwrap_or_default();
            let directives = print_directives(&inline.directives);
            format!("...{}{} {}", type_condition, directives, print_selection_set(&inline.selection_set, indent))
        }
    }
}

fn print_field(field: &Field, indent: usize) -> String {
    let alias = field.alias.as_ref().map(|a| format!("{}: ", a.as_str())).unwrap_or_default();
    let args = print_arguments(&field.arguments);
    let directives = print_directives(&field.directives);
    let selection_set = field.selection_set.as_ref().map(|ss| format!(" {}", print_selection_set(ss, indent))).unwrap_or_default();
    format!("{alias}{}{args}{directives}{selection_set}", field.name.as_str())
}

fn print_arguments(arguments: &[Argument]) -> String {
    if arguments.is_empty() {
        return String::new();
    }
    let inner = arguments
        .iter()
        .map(|a| format!("{}: {}", a.name.as_str(), render_value(&a.value)))
        .collect::<Vec<_>>()
        .join(", ");
    format!("({inner})")
}

fn print_directives(directives: &[Directive]) -> String {
    if directives.is_empty() {
        return String::new();
    }
    directives.iter().map(|d| format!(" @{}{}", d.name.as_str(), print_arguments(&d.arguments))).collect()
}

fn print_fragment_definition(frag: &FragmentDefinition) -> String {
    format!(
        "fragment {} on {}{} {}",
        frag.name.as_str(),
        frag.type_condition.name.as_str(),
        print_directives(&frag.directives),
        print_selection_set(&frag.selection_set, 0)
    )
}

fn render_value(value: &Value) -> String {
    match value {
        Value::Variable(v) => format!("${}", v.name.as_str()),
        Value::Int(v) => v.value.clone(),
        Value::Float(v) => v.value.clone(),
        Value::String(v) => print_string_value(v),
        Value::Boolean(v) => v.value.to_string(),
        Value::Null(_) => "null".to_string(),
        Value::Enum(v) => v.value.clone(),
        Value::List(v) => format!("[{}]", v.values.iter().map(render_value).collect::<Vec<_>>().join(", ")),
        Value::Object(v) => {
            format!(
                "{{{}}}",
                v.fields.iter().map(|f| format!("{}: {}", f.name.as_str(), render_value(&f.value))).collect::<Vec<_>>().join(", ")
            )
        }
    }
}

fn print_string_value(value: &StringValue) -> String {
    if value.block {
        print_block_string(&value.value)
    } else {
        print_quoted_string(&value.value)
    }
}

fn print_quoted_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Re-indents `content` to two spaces and wraps it in `"""`. Single-line
/// block strings without leading/trailing whitespace stay on one line;
/// anything else is reproduced on its own indented lines, matching the
/// reference implementation's `printBlockString`.
fn print_block_string(content: &str) -> String {
    let escaped = content.replace("\"\"\"", "\\\"\"\"");
    if !escaped.contains('\n') {
        return format!("\"\"\"{escaped}\"\"\"");
    }
    let lines: Vec<&str> = escaped.split('\n').collect();
    let body = lines.join("\n");
    format!("\"\"\"\n{body}\n\"\"\"")
}

fn print_schema_definition(schema: &SchemaDefinition) -> String {
    let ops = schema
        .operation_types
        .iter()
        .map(|(op, named)| format!("{INDENT}{}: {}", op.as_str(), named.name.as_str()))
        .collect::<Vec<_>>()
        .join("\n");
    format!("schema{} {{\n{ops}\n}}", print_directives(&schema.directives))
}

fn print_description(description: &Option<StringValue>) -> String {
    match description {
        Some(sv) => format!("{}\n", print_string_value(sv)),
        None => String::new(),
    }
}

fn print_type_definition(type_def: &TypeDefinition) -> String {
    match type_def {
        TypeDefinition::Scalar(d) => {
            format!("{}scalar {}{}", print_description(&d.description), d.name.as_str(), print_directives(&d.directives))
        }
        TypeDefinition::Object(d) => format!(
            "{}{}",
            print_description(&d.description),
            print_fielded_type("type", &d.name, &d.interfaces, &d.directives, &d.fields)
        ),
        TypeDefinition::Interface(d) => format!(
            "{}{}",
            print_description(&d.description),
            print_fielded_type("interface", &d.name, &d.interfaces, &d.directives, &d.fields)
        ),
        TypeDefinition::Union(d) => {
            format!("{}{}", print_description(&d.description), print_union_type(&d.name, &d.directives, &d.types))
        }
        TypeDefinition::Enum(d) => {
            format!("{}{}", print_description(&d.description), print_enum_type(&d.name, &d.directives, &d.values))
        }
        TypeDefinition::InputObject(d) => format!(
            "{}{}",
            print_description(&d.description),
            print_input_fielded_type(&d.name, &d.directives, &d.fields)
        ),
    }
}

fn print_type_definition_like_extension(ext: &TypeExtension) -> String {
    match ext {
        TypeExtension::Scalar(d) => format!("scalar {}{}", d.name.as_str(), print_directives(&d.directives)),
        TypeExtension::Object(d) => print_fielded_type("type", &d.name, &d.interfaces, &d.directives, &d.fields),
        TypeExtension::Interface(d) => print_fielded_type("interface", &d.name, &d.interfaces, &d.directives, &d.fields),
        TypeExtension::Union(d) => print_union_type(&d.name, &d.directives, &d.types),
        TypeExtension::Enum(d) => print_enum_type(&d.name, &d.directives, &d.values),
        TypeExtension::InputObject(d) => print_input_fielded_type(&d.name, &d.directives, &d.fields),
    }
}

fn print_fielded_type(
    keyword: &str,
    name: &Name,
    interfaces: &[NamedType],
    directives: &[Directive],
    fields: &[FieldDefinition],
) -> String {
    let implements = if interfaces.is_empty() {
        String::new()
    } else {
        format!(" implements {}", interfaces.iter().map(|i| i.name.as_str()).collect::<Vec<_>>().join(" & "))
    };
    let directives = print_directives(directives);
    if fields.is_empty() {
        return format!("{keyword} {}{implements}{directives}", name.as_str());
    }
    let body = fields
        .iter()
        .map(|f| format!("{INDENT}{}{}", indent_lines(&print_description(&f.description), INDENT), print_field_definition(f)))
        .collect::<Vec<_>>()
        .join("\n");
    format!("{keyword} {}{implements}{directives} {{\n{body}\n}}", name.as_str())
}

fn indent_lines(text: &str, indent: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    // `text` is always a single description line followed by "\n"; re-indent
    // it so it lines up under the field it describes.
    text.trim_end_matches('\n').lines().map(|l| format!("{l}\n{indent}")).collect()
}

fn print_field_definition(field: &FieldDefinition) -> String {
    let args = print_input_value_definitions(&field.arguments);
    format!(
        "{}{}: {}{}",
        field.name.as_str(),
        args,
        render_type(&field.field_type),
        print_directives(&field.directives)
    )
}

fn print_input_value_definitions(args: &[InputValueDefinition]) -> String {
    if args.is_empty() {
        return String::new();
    }
    let inner = args.iter().map(print_input_value_definition).collect::<Vec<_>>().join(", ");
    format!("({inner})")
}

fn print_input_value_definition(arg: &InputValueDefinition) -> String {
    let default = arg.default_value.as_ref().map(|v| format!(" = {}", render_value(v))).unwrap_or_default();
    format!("{}: {}{}{}", arg.name.as_str(), render_type(&arg.value_type), default, print_directives(&arg.directives))
}

fn print_union_type(name: &Name, directives: &[Directive], types: &[NamedType]) -> String {
    let members = if types.is_empty() {
        String::new()
    } else {
        format!(" = {}", types.iter().map(|t| t.name.as_str()).collect::<Vec<_>>().join(" | "))
    };
    format!("union {}{}{members}", name.as_str(), print_directives(directives))
}

fn print_enum_type(name: &Name, directives: &[Directive], values: &[EnumValueDefinition]) -> String {
    if values.is_empty() {
        return format!("enum {}{}", name.as_str(), print_directives(directives));
    }
    let body = values
        .iter()
        .map(|v| {
            format!(
                "{INDENT}{}{}{}",
                indent_lines(&print_description(&v.description), INDENT),
                v.name.as_str(),
                print_directives(&v.directives)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!("enum {}{} {{\n{body}\n}}", name.as_str(), print_directives(directives))
}

fn print_input_fielded_type(name: &Name, directives: &[Directive], fields: &[InputValueDefinition]) -> String {
    if fields.is_empty() {
        return format!("input {}{}", name.as_str(), print_directives(directives));
    }
    let body = fields
        .iter()
        .map(|f| format!("{INDENT}{}{}", indent_lines(&print_description(&f.description), INDENT), print_input_value_definition(f)))
        .collect::<Vec<_>>()
        .join("\n");
    format!("input {}{} {{\n{body}\n}}", name.as_str(), print_directives(directives))
}

fn print_directive_definition(def: &DirectiveDefinition) -> String {
    let args = print_input_value_definitions(&def.arguments);
    let repeatable = if def.repeatable { " repeatable" } else { "" };
    let locations = def.locations.iter().map(|l| l.as_str()).collect::<Vec<_>>().join(" | ");
    format!("{}directive @{}{args}{repeatable} on {locations}", print_description(&def.description), def.name.as_str())
}

fn render_type(ty: &Type) -> String {
    match ty {
        Type::Named(t) => t.name.as_str().to_string(),
        Type::List(t) => format!("[{}]", render_type(&t.inner)),
        Type::NonNull(t) => format!("{}!", render_nullable_type(&t.inner)),
    }
}

fn render_nullable_type(ty: &NullableType) -> String {
    match ty {
        NullableType::Named(t) => t.name.as_str().to_string(),
        NullableType::List(t) => format!("[{}]", render_type(&t.inner)),
    }
}

fn join_blocks(blocks: impl Iterator<Item = String>) -> String {
    blocks.collect::<Vec<_>>().join("\n\n")
}

#[cfg(test)]
#[path = "tests/printer_tests.rs"]
mod printer_tests;
