//! Recursive-descent parser (§4.2): consumes the [`Lexer`] one token of
//! lookahead at a time and builds an immutable [`Document`].

use crate::ast::*;
use crate::error::GraphQLSyntaxError;
use crate::lexer::Lexer;
use crate::source::Source;
use crate::token::{Token, TokenKind};

type PResult<T> = Result<T, GraphQLSyntaxError>;

/// Options controlling how a document is parsed.
#[derive(Clone, Copy, Debug)]
pub struct ParseOptions {
    /// When true, every node's `loc` is left `None`. Saves the (tiny)
    /// bookkeeping cost when callers don't need source locations (e.g. a
    /// pre-validated, cached document being re-parsed for introspection).
    pub no_location: bool,
    /// Hard cap on the number of tokens a single parse will consume, as a
    /// defense against pathological input; `None` means unbounded.
    pub max_tokens: Option<usize>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions { no_location: false, max_tokens: None }
    }
}

pub fn parse_document(source: &Source, options: ParseOptions) -> PResult<Document> {
    let mut parser = Parser::new(source, options)?;
    let doc = parser.parse_document()?;
    parser.expect_token(TokenKind::Eof)?;
    Ok(doc)
}

pub fn parse_value(text: &str) -> PResult<Value> {
    let source = Source::new(text);
    let mut parser = Parser::new(&source, ParseOptions::default())?;
    let value = parser.parse_value_literal(false)?;
    parser.expect_token(TokenKind::Eof)?;
    Ok(value)
}

pub fn parse_type(text: &str) -> PResult<Type> {
    let source = Source::new(text);
    let mut parser = Parser::new(&source, ParseOptions::default())?;
    let ty = parser.parse_type_reference()?;
    parser.expect_token(TokenKind::Eof)?;
    Ok(ty)
}

struct Parser<'a> {
    lexer: Lexer<'a>,
    source_name: String,
    options: ParseOptions,
    token_count: usize,
}

impl<'a> Parser<'a> {
    fn new(source: &'a Source, options: ParseOptions) -> PResult<Self> {
        let mut lexer = Lexer::new(source);
        lexer.advance()?; // consume SOF's successor so `current` is the first real token
        Ok(Parser { lexer, source_name: source.name.clone(), options, token_count: 0 })
    }

    fn current(&self) -> &Token {
        self.lexer.current_token()
    }

    fn loc(&self, start: &Token) -> Option<Location> {
        if self.options.no_location {
            return None;
        }
        Some(Location { start: start.start, end: self.prev_end() })
    }

    /// The end byte offset of the last consumed, non-comment token: `current`
    /// is always unconsumed lookahead once a node's fields have been parsed,
    /// so a node's `loc.end` comes from walking back over `prev` links.
    fn prev_end(&self) -> usize {
        let arena = self.lexer.arena();
        let mut idx = self.lexer.current_token().prev;
        while let Some(i) = idx {
            let tok = arena.get(i);
            if tok.kind != TokenKind::Comment {
                return tok.end;
            }
            idx = tok.prev;
        }
        self.lexer.current_token().start
    }

    fn advance(&mut self) -> PResult<&Token> {
        self.token_count += 1;
        if let Some(max) = self.options.max_tokens {
            if self.token_count > max {
                let tok = self.lexer.current_token();
                return Err(GraphQLSyntaxError::new(
                    "Document exceeds the configured maximum token count.",
                    self.source_name.clone(),
                    crate::position::SourcePosition::new(tok.line, tok.column),
                    tok.start,
                ));
            }
        }
        self.lexer.advance()
    }

    fn unexpected(&self, expected: &str) -> GraphQLSyntaxError {
        let tok = self.current();
        GraphQLSyntaxError::new(
            format!("Expected {expected}, found {}.", tok.description()),
            self.source_name.clone(),
            crate::position::SourcePosition::new(tok.line, tok.column),
            tok.start,
        )
    }

    fn expect_token(&mut self, kind: TokenKind) -> PResult<Token> {
        let tok = self.current().clone();
        if tok.kind == kind {
            self.advance()?;
            Ok(tok)
        } else {
            Err(self.unexpected(kind.description()))
        }
    }

    fn skip_token(&mut self, kind: TokenKind) -> PResult<bool> {
        if self.current().kind == kind {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn at_keyword(&self, word: &str) -> bool {
        let tok = self.current();
        tok.kind == TokenKind::Name && tok.value.as_deref() == Some(word)
    }

    fn expect_keyword(&mut self, word: &str) -> PResult<Token> {
        if self.at_keyword(word) {
            let tok = self.current().clone();
            self.advance()?;
            Ok(tok)
        } else {
            Err(self.unexpected(&format!("\"{word}\"")))
        }
    }

    fn skip_keyword(&mut self, word: &str) -> PResult<bool> {
        if self.at_keyword(word) {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn parse_name(&mut self) -> PResult<Name> {
        let tok = self.expect_token(TokenKind::Name)?;
        Ok(Name { value: tok.value.clone().unwrap_or_default(), loc: self.loc(&tok) })
    }

    fn any<T>(
        &mut self,
        open: TokenKind,
        close: TokenKind,
        mut parse_one: impl FnMut(&mut Self) -> PResult<T>,
    ) -> PResult<Vec<T>> {
        self.expect_token(open)?;
        let mut items = Vec::new();
        while !self.skip_token(close)? {
            items.push(parse_one(self)?);
        }
        Ok(items)
    }

    fn optional_many<T>(
        &mut self,
        open: TokenKind,
        close: TokenKind,
        mut parse_one: impl FnMut(&mut Self) -> PResult<T>,
    ) -> PResult<Vec<T>> {
        if self.current().kind != open {
            return Ok(Vec::new());
        }
        self.any(open, close, |p| parse_one(p))
    }

    // ---- Document / definitions ----

    fn parse_document(&mut self) -> PResult<Document> {
        let start = self.current().clone();
        let mut definitions = Vec::new();
        while self.current().kind != TokenKind::Eof {
            definitions.push(self.parse_definition()?);
        }
        Ok(Document { definitions, loc: self.loc(&start) })
    }

    fn parse_definition(&mut self) -> PResult<Definition> {
        if self.current().kind == TokenKind::BraceL {
            return Ok(Definition::Executable(ExecutableDefinition::Operation(
                self.parse_operation_definition_shorthand()?,
            )));
        }
        if self.current().kind == TokenKind::Name {
            match self.current().value.as_deref() {
                Some("query") | Some("mutation") | Some("subscription") => {
                    return Ok(Definition::Executable(ExecutableDefinition::Operation(
                        self.parse_operation_definition()?,
                    )));
                }
                Some("fragment") => {
                    return Ok(Definition::Executable(ExecutableDefinition::Fragment(
                        self.parse_fragment_definition()?,
                    )));
                }
                Some("schema") => return Ok(Definition::Schema(self.parse_schema_definition()?)),
                Some("scalar") => return Ok(Definition::Type(TypeDefinition::Scalar(self.parse_scalar_type_definition()?))),
                Some("type") => return Ok(Definition::Type(TypeDefinition::Object(self.parse_object_type_definition()?))),
                Some("interface") => {
                    return Ok(Definition::Type(TypeDefinition::Interface(self.parse_interface_type_definition()?)))
                }
                Some("union") => return Ok(Definition::Type(TypeDefinition::Union(self.parse_union_type_definition()?))),
                Some("enum") => return Ok(Definition::Type(TypeDefinition::Enum(self.parse_enum_type_definition()?))),
                Some("input") => {
                    return Ok(Definition::Type(TypeDefinition::InputObject(self.parse_input_object_type_definition()?)))
                }
                Some("directive") => return Ok(Definition::Directive(self.parse_directive_definition()?)),
                Some("extend") => return self.parse_type_system_extension(),
                _ => {}
            }
        }
        if self.current().kind == TokenKind::String || self.current().kind == TokenKind::BlockString {
            // A description precedes a type-system definition.
            return self.parse_definition_with_description();
        }
        Err(self.unexpected("a definition"))
    }

    fn parse_definition_with_description(&mut self) -> PResult<Definition> {
        let description = self.parse_description()?;
        if self.at_keyword("schema") {
            return Ok(Definition::Schema(self.parse_schema_definition_inner(description)?));
        }
        if self.at_keyword("scalar") {
            return Ok(Definition::Type(TypeDefinition::Scalar(self.parse_scalar_type_definition_inner(description)?)));
        }
        if self.at_keyword("type") {
            return Ok(Definition::Type(TypeDefinition::Object(self.parse_object_type_definition_inner(description)?)));
        }
        if self.at_keyword("interface") {
            return Ok(Definition::Type(TypeDefinition::Interface(
                self.parse_interface_type_definition_inner(description)?,
            )));
        }
        if self.at_keyword("union") {
            return Ok(Definition::Type(TypeDefinition::Union(self.parse_union_type_definition_inner(description)?)));
        }
        if self.at_keyword("enum") {
            return Ok(Definition::Type(TypeDefinition::Enum(self.parse_enum_type_definition_inner(description)?)));
        }
        if self.at_keyword("input") {
            return Ok(Definition::Type(TypeDefinition::InputObject(
                self.parse_input_object_type_definition_inner(description)?,
            )));
        }
        if self.at_keyword("directive") {
            return Ok(Definition::Directive(self.parse_directive_definition_inner(description)?));
        }
        Err(self.unexpected("a type system definition after description"))
    }

    // ---- Operations ----

    fn parse_operation_definition_shorthand(&mut self) -> PResult<OperationDefinition> {
        let start = self.current().clone();
        let selection_set = self.parse_selection_set()?;
        Ok(OperationDefinition {
            operation: OperationType::Query,
            name: None,
            variable_definitions: Vec::new(),
            directives: Vec::new(),
            selection_set,
            loc: self.loc(&start),
        })
    }

    fn parse_operation_definition(&mut self) -> PResult<OperationDefinition> {
        let start = self.current().clone();
        let operation = self.parse_operation_type()?;
        let name = if self.current().kind == TokenKind::Name { Some(self.parse_name()?) } else { None };
        let variable_definitions = self.parse_variable_definitions()?;
        let directives = self.parse_directives(false)?;
        let selection_set = self.parse_selection_set()?;
        Ok(OperationDefinition {
            operation,
            name,
            variable_definitions,
            directives,
            selection_set,
            loc: self.loc(&start),
        })
    }

    fn parse_operation_type(&mut self) -> PResult<OperationType> {
        let tok = self.expect_token(TokenKind::Name)?;
        match tok.value.as_deref() {
            Some("query") => Ok(OperationType::Query),
            Some("mutation") => Ok(OperationType::Mutation),
            Some("subscription") => Ok(OperationType::Subscription),
            _ => Err(self.unexpected("\"query\", \"mutation\", or \"subscription\"")),
        }
    }

    fn parse_variable_definitions(&mut self) -> PResult<Vec<VariableDefinition>> {
        self.optional_many(TokenKind::ParenL, TokenKind::ParenR, |p| p.parse_variable_definition())
    }

    fn parse_variable_definition(&mut self) -> PResult<VariableDefinition> {
        let start = self.current().clone();
        let variable = self.parse_variable()?;
        self.expect_token(TokenKind::Colon)?;
        let var_type = self.parse_type_reference()?;
        let default_value = if self.skip_token(TokenKind::Equals)? {
            Some(self.parse_value_literal(true)?)
        } else {
            None
        };
        let directives = self.parse_directives(true)?;
        Ok(VariableDefinition { variable, var_type, default_value, directives, loc: self.loc(&start) })
    }

    fn parse_variable(&mut self) -> PResult<Variable> {
        let start = self.current().clone();
        self.expect_token(TokenKind::Dollar)?;
        let name = self.parse_name()?;
        Ok(Variable { name, loc: self.loc(&start) })
    }

    // ---- Selections ----

    fn parse_selection_set(&mut self) -> PResult<SelectionSet> {
        let start = self.current().clone();
        let selections = self.any(TokenKind::BraceL, TokenKind::BraceR, |p| p.parse_selection())?;
        if selections.is_empty() {
            return Err(self.unexpected("at least one selection"));
        }
        Ok(SelectionSet { selections, loc: self.loc(&start) })
    }

    fn parse_selection(&mut self) -> PResult<Selection> {
        if self.current().kind == TokenKind::Spread {
            self.parse_fragment()
        } else {
            Ok(Selection::Field(self.parse_field()?))
        }
    }

    fn parse_field(&mut self) -> PResult<Field> {
        let start = self.current().clone();
        let name_or_alias = self.parse_name()?;
        let (alias, name) = if self.skip_token(TokenKind::Colon)? {
            (Some(name_or_alias), self.parse_name()?)
        } else {
            (None, name_or_alias)
        };
        let arguments = self.parse_arguments(false)?;
        let directives = self.parse_directives(false)?;
        let selection_set = if self.current().kind == TokenKind::BraceL {
            Some(self.parse_selection_set()?)
        } else {
            None
        };
        Ok(Field { alias, name, arguments, directives, selection_set, loc: self.loc(&start) })
    }

    fn parse_arguments(&mut self, is_const: bool) -> PResult<Vec<Argument>> {
        self.optional_many(TokenKind::ParenL, TokenKind::ParenR, |p| p.parse_argument(is_const))
    }

    fn parse_argument(&mut self, is_const: bool) -> PResult<Argument> {
        let start = self.current().clone();
        let name = self.parse_name()?;
        self.expect_token(TokenKind::Colon)?;
        let value = self.parse_value_literal(is_const)?;
        Ok(Argument { name, value, loc: self.loc(&start) })
    }

    fn parse_fragment(&mut self) -> PResult<Selection> {
        let start = self.current().clone();
        self.expect_token(TokenKind::Spread)?;
        let has_type_condition = self.at_keyword("on");
        if !has_type_condition && self.current().kind == TokenKind::Name {
            let name = self.parse_name()?;
            let directives = self.parse_directives(false)?;
            return Ok(Selection::FragmentSpread(FragmentSpread { name, directives, loc: self.loc(&start) }));
        }
        let type_condition = if has_type_condition { Some(self.parse_type_condition()?) } else { None };
        let directives = self.parse_directives(false)?;
        let selection_set = self.parse_selection_set()?;
        Ok(Selection::InlineFragment(InlineFragment { type_condition, directives, selection_set, loc: self.loc(&start) }))
    }

    fn parse_type_condition(&mut self) -> PResult<NamedType> {
        self.expect_keyword("on")?;
        self.parse_named_type()
    }

    fn parse_fragment_definition(&mut self) -> PResult<FragmentDefinition> {
        let start = self.current().clone();
        self.expect_keyword("fragment")?;
        let name = self.parse_name()?;
        let type_condition = self.parse_type_condition()?;
        let directives = self.parse_directives(false)?;
        let selection_set = self.parse_selection_set()?;
        Ok(FragmentDefinition { name, type_condition, directives, selection_set, loc: self.loc(&start) })
    }

    // ---- Values ----

    fn parse_value_literal(&mut self, is_const: bool) -> PResult<Value> {
        let tok = self.current().clone();
        match tok.kind {
            TokenKind::BracketL => Ok(Value::List(self.parse_list_value(is_const)?)),
            TokenKind::BraceL => Ok(Value::Object(self.parse_object_value(is_const)?)),
            TokenKind::Int => {
                self.advance()?;
                Ok(Value::Int(IntValue { value: tok.value.clone().unwrap_or_default(), loc: self.loc(&tok) }))
            }
            TokenKind::Float => {
                self.advance()?;
                Ok(Value::Float(FloatValue { value: tok.value.clone().unwrap_or_default(), loc: self.loc(&tok) }))
            }
            TokenKind::String | TokenKind::BlockString => {
                self.advance()?;
                Ok(Value::String(StringValue {
                    value: tok.value.clone().unwrap_or_default(),
                    block: tok.kind == TokenKind::BlockString,
                    loc: self.loc(&tok),
                }))
            }
            TokenKind::Name => match tok.value.as_deref() {
                Some("true") => {
                    self.advance()?;
                    Ok(Value::Boolean(BooleanValue { value: true, loc: self.loc(&tok) }))
                }
                Some("false") => {
                    self.advance()?;
                    Ok(Value::Boolean(BooleanValue { value: false, loc: self.loc(&tok) }))
                }
                Some("null") => {
                    self.advance()?;
                    Ok(Value::Null(NullValue { loc: self.loc(&tok) }))
                }
                _ => {
                    self.advance()?;
                    Ok(Value::Enum(EnumValue { value: tok.value.clone().unwrap_or_default(), loc: self.loc(&tok) }))
                }
            },
            TokenKind::Dollar if !is_const => Ok(Value::Variable(self.parse_variable()?)),
            _ => Err(self.unexpected("a value")),
        }
    }

    fn parse_list_value(&mut self, is_const: bool) -> PResult<ListValue> {
        let start = self.current().clone();
        let values = self.any(TokenKind::BracketL, TokenKind::BracketR, |p| p.parse_value_literal(is_const))?;
        Ok(ListValue { values, loc: self.loc(&start) })
    }

    fn parse_object_value(&mut self, is_const: bool) -> PResult<ObjectValue> {
        let start = self.current().clone();
        let fields = self.any(TokenKind::BraceL, TokenKind::BraceR, |p| p.parse_object_field(is_const))?;
        Ok(ObjectValue { fields, loc: self.loc(&start) })
    }

    fn parse_object_field(&mut self, is_const: bool) -> PResult<ObjectField> {
        let start = self.current().clone();
        let name = self.parse_name()?;
        self.expect_token(TokenKind::Colon)?;
        let value = self.parse_value_literal(is_const)?;
        Ok(ObjectField { name, value, loc: self.loc(&start) })
    }

    // ---- Directives ----

    fn parse_directives(&mut self, is_const: bool) -> PResult<Vec<Directive>> {
        let mut directives = Vec::new();
        while self.current().kind == TokenKind::At {
            directives.push(self.parse_directive(is_const)?);
        }
        Ok(directives)
    }

    fn parse_directive(&mut self, is_const: bool) -> PResult<Directive> {
        let start = self.current().clone();
        self.expect_token(TokenKind::At)?;
        let name = self.parse_name()?;
        let arguments = self.parse_arguments(is_const)?;
        Ok(Directive { name, arguments, loc: self.loc(&start) })
    }

    // ---- Types ----

    fn parse_type_reference(&mut self) -> PResult<Type> {
        let start = self.current().clone();
        let ty = if self.skip_token(TokenKind::BracketL)? {
            let inner = self.parse_type_reference()?;
            self.expect_token(TokenKind::BracketR)?;
            Type::List(Box::new(ListType { inner, loc: self.loc(&start) }))
        } else {
            Type::Named(self.parse_named_type()?)
        };
        if self.skip_token(TokenKind::Bang)? {
            let inner = match ty {
                Type::Named(n) => NullableType::Named(n),
                Type::List(l) => NullableType::List(l),
                Type::NonNull(_) => return Err(self.unexpected("a nullable type before \"!\"")),
            };
            Ok(Type::NonNull(Box::new(NonNullType { inner, loc: self.loc(&start) })))
        } else {
            Ok(ty)
        }
    }

    fn parse_named_type(&mut self) -> PResult<NamedType> {
        let start = self.current().clone();
        let name = self.parse_name()?;
        Ok(NamedType { name, loc: self.loc(&start) })
    }

    // ---- Type system: shared bits ----

    fn parse_description(&mut self) -> PResult<Option<StringValue>> {
        if matches!(self.current().kind, TokenKind::String | TokenKind::BlockString) {
            match self.parse_value_literal(true)? {
                Value::String(s) => Ok(Some(s)),
                _ => unreachable!(),
            }
        } else {
            Ok(None)
        }
    }

    fn parse_implements_interfaces(&mut self) -> PResult<Vec<NamedType>> {
        let mut interfaces = Vec::new();
        if self.skip_keyword("implements")? {
            self.skip_token(TokenKind::Amp)?;
            loop {
                interfaces.push(self.parse_named_type()?);
                if !self.skip_token(TokenKind::Amp)? {
                    break;
                }
            }
        }
        Ok(interfaces)
    }

    fn parse_fields_definition(&mut self) -> PResult<Vec<FieldDefinition>> {
        self.optional_many(TokenKind::BraceL, TokenKind::BraceR, |p| p.parse_field_definition())
    }

    fn parse_field_definition(&mut self) -> PResult<FieldDefinition> {
        let start = self.current().clone();
        let description = self.parse_description()?;
        let name = self.parse_name()?;
        let arguments = self.parse_argument_defs()?;
        self.expect_token(TokenKind::Colon)?;
        let field_type = self.parse_type_reference()?;
        let directives = self.parse_directives(true)?;
        Ok(FieldDefinition { description, name, arguments, field_type, directives, loc: self.loc(&start) })
    }

    fn parse_argument_defs(&mut self) -> PResult<Vec<InputValueDefinition>> {
        self.optional_many(TokenKind::ParenL, TokenKind::ParenR, |p| p.parse_input_value_definition())
    }

    fn parse_input_value_definition(&mut self) -> PResult<InputValueDefinition> {
        let start = self.current().clone();
        let description = self.parse_description()?;
        let name = self.parse_name()?;
        self.expect_token(TokenKind::Colon)?;
        let value_type = self.parse_type_reference()?;
        let default_value = if self.skip_token(TokenKind::Equals)? { Some(self.parse_value_literal(true)?) } else { None };
        let directives = self.parse_directives(true)?;
        Ok(InputValueDefinition { description, name, value_type, default_value, directives, loc: self.loc(&start) })
    }

    fn parse_enum_values_definition(&mut self) -> PResult<Vec<EnumValueDefinition>> {
        self.optional_many(TokenKind::BraceL, TokenKind::BraceR, |p| p.parse_enum_value_definition())
    }

    fn parse_enum_value_definition(&mut self) -> PResult<EnumValueDefinition> {
        let start = self.current().clone();
        let description = self.parse_description()?;
        let name = self.parse_name()?;
        let directives = self.parse_directives(true)?;
        Ok(EnumValueDefinition { description, name, directives, loc: self.loc(&start) })
    }

    fn parse_input_fields_definition(&mut self) -> PResult<Vec<InputValueDefinition>> {
        self.optional_many(TokenKind::BraceL, TokenKind::BraceR, |p| p.parse_input_value_definition())
    }

    fn parse_union_member_types(&mut self) -> PResult<Vec<NamedType>> {
        let mut types = Vec::new();
        if self.skip_token(TokenKind::Equals)? {
            self.skip_token(TokenKind::Pipe)?;
            loop {
                types.push(self.parse_named_type()?);
                if !self.skip_token(TokenKind::Pipe)? {
                    break;
                }
            }
        }
        Ok(types)
    }

    // ---- Type system: definitions ----

    fn parse_schema_definition(&mut self) -> PResult<SchemaDefinition> {
        self.parse_schema_definition_inner(None)
    }

    fn parse_schema_definition_inner(&mut self, description: Option<StringValue>) -> PResult<SchemaDefinition> {
        let start = self.current().clone();
        self.expect_keyword("schema")?;
        let directives = self.parse_directives(true)?;
        let operation_types =
            self.any(TokenKind::BraceL, TokenKind::BraceR, |p| p.parse_operation_type_definition())?;
        Ok(SchemaDefinition { description, directives, operation_types, loc: self.loc(&start) })
    }

    fn parse_operation_type_definition(&mut self) -> PResult<(OperationType, NamedType)> {
        let operation = self.parse_operation_type()?;
        self.expect_token(TokenKind::Colon)?;
        let named_type = self.parse_named_type()?;
        Ok((operation, named_type))
    }

    fn parse_scalar_type_definition(&mut self) -> PResult<ScalarTypeDefinition> {
        self.parse_scalar_type_definition_inner(None)
    }

    fn parse_scalar_type_definition_inner(&mut self, description: Option<StringValue>) -> PResult<ScalarTypeDefinition> {
        let start = self.current().clone();
        self.expect_keyword("scalar")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives(true)?;
        Ok(ScalarTypeDefinition { description, name, directives, loc: self.loc(&start) })
    }

    fn parse_object_type_definition(&mut self) -> PResult<ObjectTypeDefinition> {
        self.parse_object_type_definition_inner(None)
    }

    fn parse_object_type_definition_inner(&mut self, description: Option<StringValue>) -> PResult<ObjectTypeDefinition> {
        let start = self.current().clone();
        self.expect_keyword("type")?;
        let name = self.parse_name()?;
        let interfaces = self.parse_implements_interfaces()?;
        let directives = self.parse_directives(true)?;
        let fields = self.parse_fields_definition()?;
        Ok(ObjectTypeDefinition { description, name, directives, interfaces, fields, loc: self.loc(&start) })
    }

    fn parse_interface_type_definition(&mut self) -> PResult<InterfaceTypeDefinition> {
        self.parse_interface_type_definition_inner(None)
    }

    fn parse_interface_type_definition_inner(
        &mut self,
        description: Option<StringValue>,
    ) -> PResult<InterfaceTypeDefinition> {
        let start = self.current().clone();
        self.expect_keyword("interface")?;
        let name = self.parse_name()?;
        let interfaces = self.parse_implements_interfaces()?;
        let directives = self.parse_directives(true)?;
        let fields = self.parse_fields_definition()?;
        Ok(InterfaceTypeDefinition { description, name, directives, interfaces, fields, loc: self.loc(&start) })
    }

    fn parse_union_type_definition(&mut self) -> PResult<UnionTypeDefinition> {
        self.parse_union_type_definition_inner(None)
    }

    fn parse_union_type_definition_inner(&mut self, description: Option<StringValue>) -> PResult<UnionTypeDefinition> {
        let start = self.current().clone();
        self.expect_keyword("union")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives(true)?;
        let types = self.parse_union_member_types()?;
        Ok(UnionTypeDefinition { description, name, directives, types, loc: self.loc(&start) })
    }

    fn parse_enum_type_definition(&mut self) -> PResult<EnumTypeDefinition> {
        self.parse_enum_type_definition_inner(None)
    }

    fn parse_enum_type_definition_inner(&mut self, description: Option<StringValue>) -> PResult<EnumTypeDefinition> {
        let start = self.current().clone();
        self.expect_keyword("enum")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives(true)?;
        let values = self.parse_enum_values_definition()?;
        Ok(EnumTypeDefinition { description, name, directives, values, loc: self.loc(&start) })
    }

    fn parse_input_object_type_definition(&mut self) -> PResult<InputObjectTypeDefinition> {
        self.parse_input_object_type_definition_inner(None)
    }

    fn parse_input_object_type_definition_inner(
        &mut self,
        description: Option<StringValue>,
    ) -> PResult<InputObjectTypeDefinition> {
        let start = self.current().clone();
        self.expect_keyword("input")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives(true)?;
        let fields = self.parse_input_fields_definition()?;
        Ok(InputObjectTypeDefinition { description, name, directives, fields, loc: self.loc(&start) })
    }

    fn parse_directive_definition(&mut self) -> PResult<DirectiveDefinition> {
        self.parse_directive_definition_inner(None)
    }

    fn parse_directive_definition_inner(&mut self, description: Option<StringValue>) -> PResult<DirectiveDefinition> {
        let start = self.current().clone();
        self.expect_keyword("directive")?;
        self.expect_token(TokenKind::At)?;
        let name = self.parse_name()?;
        let arguments = self.parse_argument_defs()?;
        let repeatable = self.skip_keyword("repeatable")?;
        self.expect_keyword("on")?;
        let locations = self.parse_directive_locations()?;
        Ok(DirectiveDefinition { description, name, arguments, repeatable, locations, loc: self.loc(&start) })
    }

    fn parse_directive_locations(&mut self) -> PResult<Vec<DirectiveLocation>> {
        self.skip_token(TokenKind::Pipe)?;
        let mut locations = vec![self.parse_directive_location()?];
        while self.skip_token(TokenKind::Pipe)? {
            locations.push(self.parse_directive_location()?);
        }
        Ok(locations)
    }

    fn parse_directive_location(&mut self) -> PResult<DirectiveLocation> {
        let name = self.parse_name()?;
        DirectiveLocation::from_name(&name.value).ok_or_else(|| self.unexpected("a directive location"))
    }

    // ---- Type system extensions ----

    fn parse_type_system_extension(&mut self) -> PResult<Definition> {
        self.expect_keyword("extend")?;
        if self.at_keyword("schema") {
            return Err(self.unexpected("schema extensions are not part of this workspace's scope"));
        }
        if self.at_keyword("scalar") {
            return Ok(Definition::TypeExtension(TypeExtension::Scalar(self.parse_scalar_type_extension()?)));
        }
        if self.at_keyword("type") {
            return Ok(Definition::TypeExtension(TypeExtension::Object(self.parse_object_type_extension()?)));
        }
        if self.at_keyword("interface") {
            return Ok(Definition::TypeExtension(TypeExtension::Interface(self.parse_interface_type_extension()?)));
        }
        if self.at_keyword("union") {
            return Ok(Definition::TypeExtension(TypeExtension::Union(self.parse_union_type_extension()?)));
        }
        if self.at_keyword("enum") {
            return Ok(Definition::TypeExtension(TypeExtension::Enum(self.parse_enum_type_extension()?)));
        }
        if self.at_keyword("input") {
            return Ok(Definition::TypeExtension(TypeExtension::InputObject(self.parse_input_object_type_extension()?)));
        }
        Err(self.unexpected("a type system definition after \"extend\""))
    }

    fn parse_scalar_type_extension(&mut self) -> PResult<ScalarTypeExtension> {
        let start = self.current().clone();
        self.expect_keyword("scalar")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives(true)?;
        if directives.is_empty() {
            return Err(self.unexpected("a directive"));
        }
        Ok(ScalarTypeExtension { name, directives, loc: self.loc(&start) })
    }

    fn parse_object_type_extension(&mut self) -> PResult<ObjectTypeExtension> {
        let start = self.current().clone();
        self.expect_keyword("type")?;
        let name = self.parse_name()?;
        let interfaces = self.parse_implements_interfaces()?;
        let directives = self.parse_directives(true)?;
        let fields = self.parse_fields_definition()?;
        if interfaces.is_empty() && directives.is_empty() && fields.is_empty() {
            return Err(self.unexpected("an interface list, directive, or field set"));
        }
        Ok(ObjectTypeExtension { name, directives, interfaces, fields, loc: self.loc(&start) })
    }

    fn parse_interface_type_extension(&mut self) -> PResult<InterfaceTypeExtension> {
        let start = self.current().clone();
        self.expect_keyword("interface")?;
        let name = self.parse_name()?;
        let interfaces = self.parse_implements_interfaces()?;
        let directives = self.parse_directives(true)?;
        let fields = self.parse_fields_definition()?;
        if interfaces.is_empty() && directives.is_empty() && fields.is_empty() {
            return Err(self.unexpected("an interface list, directive, or field set"));
        }
        Ok(InterfaceTypeExtension { name, directives, interfaces, fields, loc: self.loc(&start) })
    }

    fn parse_union_type_extension(&mut self) -> PResult<UnionTypeExtension> {
        let start = self.current().clone();
        self.expect_keyword("union")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives(true)?;
        let types = self.parse_union_member_types()?;
        if directives.is_empty() && types.is_empty() {
            return Err(self.unexpected("a directive or member type set"));
        }
        Ok(UnionTypeExtension { name, directives, types, loc: self.loc(&start) })
    }

    fn parse_enum_type_extension(&mut self) -> PResult<EnumTypeExtension> {
        let start = self.current().clone();
        self.expect_keyword("enum")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives(true)?;
        let values = self.parse_enum_values_definition()?;
        if directives.is_empty() && values.is_empty() {
            return Err(self.unexpected("a directive or value set"));
        }
        Ok(EnumTypeExtension { name, directives, values, loc: self.loc(&start) })
    }

    fn parse_input_object_type_extension(&mut self) -> PResult<InputObjectTypeExtension> {
        let start = self.current().clone();
        self.expect_keyword("input")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives(true)?;
        let fields = self.parse_input_fields_definition()?;
        if directives.is_empty() && fields.is_empty() {
            return Err(self.unexpected("a directive or field set"));
        }
        Ok(InputObjectTypeExtension { name, directives, fields, loc: self.loc(&start) })
    }
}

#[cfg(test)]
#[path = "tests/parser_tests.rs"]
mod parser_tests;
