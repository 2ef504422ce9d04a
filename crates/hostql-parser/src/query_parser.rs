//! Recursive descent parser for query documents.
//!
//! Every grammar rule has a `parse_*` method returning `Result<Node, ()>`.
//! `Err(())` means an error has already been recorded; the top-level loop
//! then skips ahead to the next definition and keeps going, so one call to
//! [`QueryParser::parse_document()`] reports as many errors as it can.

use crate::ast;
use crate::token::Token;
use crate::token::TokenKind;
use crate::token_source::StrTokenSource;
use crate::token_source::TokenSource;
use crate::ParseError;
use crate::ParseErrorKind;
use crate::SourcePosition;
use crate::TokenStream;
use indexmap::IndexMap;

/// Default maximum nesting depth of selection sets, list/object literals and
/// list type annotations. Deeper input is rejected rather than risking the
/// stack. See [`QueryParser::with_max_depth()`].
pub const MAX_NESTING_DEPTH: usize = 128;

/// Whether a value may reference a variable.
#[derive(Clone, Copy, Debug, PartialEq)]
enum ValueContext {
    /// Arguments of fields and directives.
    Dynamic,
    /// Variable default values.
    Const,
}

pub struct QueryParser<'src, TTokenSource: TokenSource<'src> = StrTokenSource<'src>> {
    token_stream: TokenStream<'src, TTokenSource>,
    errors: Vec<ParseError>,

    /// Current nesting of selection sets, list/object values and list type
    /// annotations.
    recursion_depth: usize,
    max_depth: usize,

    /// `{` tokens consumed but not yet closed. Recovery uses this to find
    /// its way back to the top level.
    open_braces: usize,

    /// Position of the most recently consumed token. EOF errors point here.
    last_position: SourcePosition,
}

impl<'src> QueryParser<'src, StrTokenSource<'src>> {
    /// Creates a parser over query source text.
    ///
    /// ```
    /// use hostql_parser::QueryParser;
    ///
    /// let doc = QueryParser::new("query Q { a }").parse_document().unwrap();
    /// assert_eq!(doc.operations().count(), 1);
    /// ```
    pub fn new(source: &'src str) -> Self {
        Self::from_token_source(StrTokenSource::new(source))
    }
}

impl<'src, TTokenSource: TokenSource<'src>> QueryParser<'src, TTokenSource> {
    pub fn from_token_source(token_source: TTokenSource) -> Self {
        Self {
            token_stream: TokenStream::new(token_source),
            errors: Vec::new(),
            recursion_depth: 0,
            max_depth: MAX_NESTING_DEPTH,
            open_braces: 0,
            last_position: SourcePosition::default(),
        }
    }

    /// Replaces the [`MAX_NESTING_DEPTH`] limit.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Parses a complete document.
    ///
    /// A document without any definitions is valid and yields an empty
    /// [`ast::Document`].
    pub fn parse_document(mut self) -> Result<ast::Document, Vec<ParseError>> {
        let mut definitions = Vec::new();
        loop {
            let Some(token) = self.token_stream.peek() else {
                break;
            };
            let result = match &token.kind {
                TokenKind::Eof => break,
                TokenKind::CurlyBraceOpen
                | TokenKind::Name("query" | "mutation" | "subscription") => self
                    .parse_operation_definition()
                    .map(ast::Definition::Operation),
                TokenKind::Name("fragment") => self
                    .parse_fragment_definition()
                    .map(ast::Definition::Fragment),
                _ => {
                    self.record_unexpected(&[
                        "query",
                        "mutation",
                        "subscription",
                        "fragment",
                        "{",
                    ]);
                    self.consume_token();
                    Err(())
                },
            };
            match result {
                Ok(definition) => definitions.push(definition),
                Err(()) => self.recover_to_next_definition(),
            }
        }

        if self.errors.is_empty() {
            Ok(ast::Document { definitions })
        } else {
            Err(self.errors)
        }
    }

    // =========================================================================
    // Error recording and recovery
    // =========================================================================

    fn record_error(&mut self, error: ParseError) {
        self.errors.push(error);
    }

    /// Records an error describing the next token as unexpected.
    ///
    /// End of input and lexer error tokens get their own error kinds.
    fn record_unexpected(&mut self, expected: &[&str]) {
        let expected_list: Vec<String> =
            expected.iter().map(|e| (*e).to_string()).collect();
        let expected_text = expected
            .iter()
            .map(|e| format!("`{e}`"))
            .collect::<Vec<_>>()
            .join(" or ");

        let error = match self.token_stream.peek() {
            None => ParseError::new(
                format!("expected {expected_text}, found end of input"),
                self.last_position,
                ParseErrorKind::UnexpectedEof { expected: expected_list },
            ),
            Some(Token { kind: TokenKind::Eof, position }) => ParseError::new(
                format!("expected {expected_text}, found end of input"),
                *position,
                ParseErrorKind::UnexpectedEof { expected: expected_list },
            ),
            Some(Token { kind: TokenKind::Error { message }, position }) => {
                ParseError::new(message.clone(), *position, ParseErrorKind::LexerError)
            },
            Some(Token { kind, position }) => {
                let found = kind.describe();
                ParseError::new(
                    format!("expected {expected_text}, found `{found}`"),
                    *position,
                    ParseErrorKind::UnexpectedToken {
                        expected: expected_list,
                        found,
                    },
                )
            },
        };
        self.record_error(error);
    }

    /// Skips tokens until the start of the next top-level definition.
    ///
    /// Braces left open by the failed definition are balanced first so that a
    /// nested `{` or a field named `query` is not mistaken for a new
    /// definition.
    fn recover_to_next_definition(&mut self) {
        let mut depth = self.open_braces;
        loop {
            let Some(token) = self.token_stream.peek() else {
                break;
            };
            match &token.kind {
                TokenKind::Eof => break,
                TokenKind::CurlyBraceOpen if depth == 0 => break,
                TokenKind::Name("query" | "mutation" | "subscription" | "fragment")
                    if depth == 0 =>
                {
                    break;
                },
                TokenKind::CurlyBraceOpen => depth += 1,
                TokenKind::CurlyBraceClose => depth = depth.saturating_sub(1),
                _ => (),
            }
            self.consume_token();
        }
        self.open_braces = 0;
        self.recursion_depth = 0;
    }

    fn enter_recursion(&mut self) -> Result<(), ()> {
        self.recursion_depth += 1;
        if self.recursion_depth > self.max_depth {
            let position = self.peek_position();
            self.record_error(ParseError::new(
                format!(
                    "maximum nesting depth of {} exceeded",
                    self.max_depth,
                ),
                position,
                ParseErrorKind::RecursionLimitExceeded,
            ));
            self.recursion_depth -= 1;
            return Err(());
        }
        Ok(())
    }

    fn exit_recursion(&mut self) {
        self.recursion_depth -= 1;
    }

    // =========================================================================
    // Token helpers
    // =========================================================================

    fn consume_token(&mut self) -> Option<Token<'src>> {
        let token = self.token_stream.consume()?;
        self.last_position = token.position;
        match token.kind {
            TokenKind::CurlyBraceOpen => self.open_braces += 1,
            TokenKind::CurlyBraceClose => {
                self.open_braces = self.open_braces.saturating_sub(1)
            },
            _ => (),
        }
        Some(token)
    }

    fn peek_position(&mut self) -> SourcePosition {
        let fallback = self.last_position;
        self.token_stream
            .peek()
            .map(|token| token.position)
            .unwrap_or(fallback)
    }

    /// Whether the next token has the same kind as `kind`. Only meaningful
    /// for punctuators and keywords without payload.
    fn peek_is(&mut self, kind: &TokenKind<'_>) -> bool {
        self.token_stream
            .peek()
            .is_some_and(|token| std::mem::discriminant(&token.kind) == std::mem::discriminant(kind))
    }

    fn peek_is_keyword(&mut self, keyword: &str) -> bool {
        self.token_stream
            .peek()
            .is_some_and(|token| token.kind == TokenKind::Name(keyword))
    }

    fn peek_is_name_like(&mut self) -> bool {
        self.token_stream
            .peek()
            .is_some_and(|token| token.kind.is_name_like())
    }

    /// Consumes a punctuator of the given kind or records an error.
    fn expect(&mut self, kind: &TokenKind<'_>) -> Result<Token<'src>, ()> {
        if self.peek_is(kind) {
            return self.consume_token().ok_or(());
        }
        let expected = kind.as_punctuator_str().unwrap_or("token");
        self.record_unexpected(&[expected]);
        Err(())
    }

    /// Consumes a name. `true`, `false` and `null` are accepted as names.
    fn expect_name(&mut self) -> Result<(String, SourcePosition), ()> {
        if self.peek_is_name_like()
            && let Some(token) = self.consume_token()
            && let Some(name) = token.kind.name_text()
        {
            return Ok((name.to_string(), token.position));
        }
        self.record_unexpected(&["name"]);
        Err(())
    }

    fn expect_keyword(&mut self, keyword: &str) -> Result<SourcePosition, ()> {
        if self.peek_is_keyword(keyword)
            && let Some(token) = self.consume_token()
        {
            return Ok(token.position);
        }
        self.record_unexpected(&[keyword]);
        Err(())
    }

    // =========================================================================
    // Definitions
    // =========================================================================

    fn parse_operation_definition(&mut self) -> Result<ast::OperationDefinition, ()> {
        if self.peek_is(&TokenKind::CurlyBraceOpen) {
            let selection_set = self.parse_selection_set()?;
            return Ok(ast::OperationDefinition {
                kind: ast::OperationKind::Query,
                name: None,
                variable_definitions: Vec::new(),
                directives: Vec::new(),
                position: selection_set.position,
                selection_set,
            });
        }

        let (keyword, position) = self.expect_name()?;
        let kind = match keyword.as_str() {
            "query" => ast::OperationKind::Query,
            "mutation" => ast::OperationKind::Mutation,
            "subscription" => ast::OperationKind::Subscription,
            _ => {
                self.record_error(ParseError::new(
                    format!("unknown operation type `{keyword}`"),
                    position,
                    ParseErrorKind::InvalidSyntax,
                ));
                return Err(());
            },
        };

        let name = if self.peek_is_name_like() {
            Some(self.expect_name()?.0)
        } else {
            None
        };
        let variable_definitions = if self.peek_is(&TokenKind::ParenOpen) {
            self.parse_variable_definitions()?
        } else {
            Vec::new()
        };
        let directives = self.parse_directives()?;
        let selection_set = self.parse_selection_set()?;

        Ok(ast::OperationDefinition {
            kind,
            name,
            variable_definitions,
            directives,
            selection_set,
            position,
        })
    }

    fn parse_fragment_definition(&mut self) -> Result<ast::FragmentDefinition, ()> {
        let position = self.expect_keyword("fragment")?;
        let (name, name_position) = self.expect_name()?;
        if name == "on" {
            self.record_error(ParseError::new(
                "a fragment cannot be named `on`",
                name_position,
                ParseErrorKind::ReservedName { name },
            ));
            return Err(());
        }
        self.expect_keyword("on")?;
        let (type_condition, _) = self.expect_name()?;
        let directives = self.parse_directives()?;
        let selection_set = self.parse_selection_set()?;

        Ok(ast::FragmentDefinition {
            name,
            type_condition,
            directives,
            selection_set,
            position,
        })
    }

    fn parse_variable_definitions(&mut self) -> Result<Vec<ast::VariableDefinition>, ()> {
        let open = self.expect(&TokenKind::ParenOpen)?;
        if self.peek_is(&TokenKind::ParenClose) {
            self.record_error(ParseError::new(
                "variable definitions cannot be empty",
                open.position,
                ParseErrorKind::InvalidEmptyConstruct {
                    construct: "()".to_string(),
                },
            ));
            return Err(());
        }

        let mut definitions = Vec::new();
        while !self.peek_is(&TokenKind::ParenClose) {
            if self.token_stream.is_at_end() {
                self.record_unclosed(")", open.position);
                return Err(());
            }
            let dollar = self.expect(&TokenKind::Dollar)?;
            let (name, _) = self.expect_name()?;
            self.expect(&TokenKind::Colon)?;
            let type_annotation = self.parse_type_annotation()?;
            let default_value = if self.peek_is(&TokenKind::Equals) {
                self.consume_token();
                Some(self.parse_value(ValueContext::Const)?)
            } else {
                None
            };
            let directives = self.parse_directives()?;
            definitions.push(ast::VariableDefinition {
                name,
                type_annotation,
                default_value,
                directives,
                position: dollar.position,
            });
        }
        self.expect(&TokenKind::ParenClose)?;
        Ok(definitions)
    }

    fn parse_type_annotation(&mut self) -> Result<ast::TypeAnnotation, ()> {
        self.enter_recursion()?;
        let result = self.parse_type_annotation_impl();
        self.exit_recursion();
        result
    }

    fn parse_type_annotation_impl(&mut self) -> Result<ast::TypeAnnotation, ()> {
        let annotation = if self.peek_is(&TokenKind::SquareBracketOpen) {
            self.consume_token();
            let element = self.parse_type_annotation()?;
            self.expect(&TokenKind::SquareBracketClose)?;
            ast::TypeAnnotation::List {
                element: Box::new(element),
                nullable: true,
            }
        } else {
            let (name, _) = self.expect_name()?;
            ast::TypeAnnotation::Named { name, nullable: true }
        };

        if !self.peek_is(&TokenKind::Bang) {
            return Ok(annotation);
        }
        self.consume_token();
        Ok(match annotation {
            ast::TypeAnnotation::Named { name, .. } => {
                ast::TypeAnnotation::Named { name, nullable: false }
            },
            ast::TypeAnnotation::List { element, .. } => {
                ast::TypeAnnotation::List { element, nullable: false }
            },
        })
    }

    // =========================================================================
    // Selections
    // =========================================================================

    fn parse_selection_set(&mut self) -> Result<ast::SelectionSet, ()> {
        self.enter_recursion()?;
        let result = self.parse_selection_set_impl();
        self.exit_recursion();
        result
    }

    fn parse_selection_set_impl(&mut self) -> Result<ast::SelectionSet, ()> {
        let open = self.expect(&TokenKind::CurlyBraceOpen)?;
        if self.peek_is(&TokenKind::CurlyBraceClose) {
            self.record_error(ParseError::new(
                "selection set cannot be empty",
                open.position,
                ParseErrorKind::InvalidEmptyConstruct {
                    construct: "{}".to_string(),
                },
            ));
        }

        let mut items = Vec::new();
        while !self.peek_is(&TokenKind::CurlyBraceClose) {
            if self.token_stream.is_at_end() {
                self.record_unclosed("}", open.position);
                return Err(());
            }
            items.push(self.parse_selection()?);
        }
        self.expect(&TokenKind::CurlyBraceClose)?;

        Ok(ast::SelectionSet {
            items,
            position: open.position,
        })
    }

    fn parse_selection(&mut self) -> Result<ast::Selection, ()> {
        if !self.peek_is(&TokenKind::Ellipsis) {
            return self.parse_field().map(ast::Selection::Field);
        }

        let ellipsis = self.expect(&TokenKind::Ellipsis)?;
        if self.peek_is_keyword("on")
            || self.peek_is(&TokenKind::At)
            || self.peek_is(&TokenKind::CurlyBraceOpen)
        {
            let type_condition = if self.peek_is_keyword("on") {
                self.consume_token();
                Some(self.expect_name()?.0)
            } else {
                None
            };
            let directives = self.parse_directives()?;
            let selection_set = self.parse_selection_set()?;
            return Ok(ast::Selection::InlineFragment(ast::InlineFragment {
                type_condition,
                directives,
                selection_set,
                position: ellipsis.position,
            }));
        }

        let (fragment_name, _) = self.expect_name()?;
        let directives = self.parse_directives()?;
        Ok(ast::Selection::FragmentSpread(ast::FragmentSpread {
            fragment_name,
            directives,
            position: ellipsis.position,
        }))
    }

    /// `alias: name(args) @directives { selections }`
    fn parse_field(&mut self) -> Result<ast::Field, ()> {
        let (first_name, position) = self.expect_name()?;
        let (alias, name) = if self.peek_is(&TokenKind::Colon) {
            self.consume_token();
            let (name, _) = self.expect_name()?;
            (Some(first_name), name)
        } else {
            (None, first_name)
        };

        let arguments = if self.peek_is(&TokenKind::ParenOpen) {
            self.parse_arguments()?
        } else {
            Vec::new()
        };
        let directives = self.parse_directives()?;
        let selection_set = if self.peek_is(&TokenKind::CurlyBraceOpen) {
            Some(self.parse_selection_set()?)
        } else {
            None
        };

        Ok(ast::Field {
            alias,
            name,
            arguments,
            directives,
            selection_set,
            position,
        })
    }

    /// Input ended inside a delimited construct. `closing` names the token
    /// that would have closed it.
    fn record_unclosed(&mut self, closing: &str, opened_at: SourcePosition) {
        let position = self.last_position;
        self.record_error(ParseError::new(
            format!("unexpected end of input: expected `{closing}` to close the delimiter opened at {opened_at}"),
            position,
            ParseErrorKind::UnexpectedEof {
                expected: vec![closing.to_string()],
            },
        ));
    }

    // =========================================================================
    // Directives and arguments
    // =========================================================================

    fn parse_directives(&mut self) -> Result<Vec<ast::Directive>, ()> {
        let mut directives = Vec::new();
        while self.peek_is(&TokenKind::At) {
            let at = self.expect(&TokenKind::At)?;
            let (name, _) = self.expect_name()?;
            let arguments = if self.peek_is(&TokenKind::ParenOpen) {
                self.parse_arguments()?
            } else {
                Vec::new()
            };
            directives.push(ast::Directive {
                name,
                arguments,
                position: at.position,
            });
        }
        Ok(directives)
    }

    fn parse_arguments(&mut self) -> Result<Vec<ast::Argument>, ()> {
        let open = self.expect(&TokenKind::ParenOpen)?;
        if self.peek_is(&TokenKind::ParenClose) {
            self.record_error(ParseError::new(
                "argument list cannot be empty",
                open.position,
                ParseErrorKind::InvalidEmptyConstruct {
                    construct: "()".to_string(),
                },
            ));
            return Err(());
        }

        let mut arguments = Vec::new();
        while !self.peek_is(&TokenKind::ParenClose) {
            if self.token_stream.is_at_end() {
                self.record_unclosed(")", open.position);
                return Err(());
            }
            let (name, position) = self.expect_name()?;
            self.expect(&TokenKind::Colon)?;
            let value = self.parse_value(ValueContext::Dynamic)?;
            arguments.push(ast::Argument { name, value, position });
        }
        self.expect(&TokenKind::ParenClose)?;
        Ok(arguments)
    }

    // =========================================================================
    // Values
    // =========================================================================

    fn parse_value(&mut self, context: ValueContext) -> Result<ast::Value, ()> {
        self.enter_recursion()?;
        let result = self.parse_value_impl(context);
        self.exit_recursion();
        result
    }

    fn parse_value_impl(&mut self, context: ValueContext) -> Result<ast::Value, ()> {
        let Some(token) = self.token_stream.peek() else {
            self.record_unexpected(&["value"]);
            return Err(());
        };
        match &token.kind {
            TokenKind::Dollar => {
                let dollar = self.expect(&TokenKind::Dollar)?;
                let (name, _) = self.expect_name()?;
                if context == ValueContext::Const {
                    self.record_error(ParseError::new(
                        format!("variable `${name}` cannot be used in a constant value"),
                        dollar.position,
                        ParseErrorKind::InvalidSyntax,
                    ));
                    return Err(());
                }
                Ok(ast::Value::Variable(name))
            },
            TokenKind::IntValue(_) => {
                let token = self.consume_token().ok_or(())?;
                match token.kind.parse_int_value() {
                    Some(Ok(value)) => Ok(ast::Value::Int(value)),
                    _ => {
                        self.record_error(ParseError::new(
                            format!(
                                "integer `{}` does not fit in 64 bits",
                                token.kind.describe(),
                            ),
                            token.position,
                            ParseErrorKind::InvalidValue,
                        ));
                        Err(())
                    },
                }
            },
            TokenKind::FloatValue(_) => {
                let token = self.consume_token().ok_or(())?;
                match token.kind.parse_float_value() {
                    Some(Ok(value)) if value.is_finite() => Ok(ast::Value::Float(value)),
                    _ => {
                        self.record_error(ParseError::new(
                            format!("float `{}` is out of range", token.kind.describe()),
                            token.position,
                            ParseErrorKind::InvalidValue,
                        ));
                        Err(())
                    },
                }
            },
            TokenKind::StringValue(_) => {
                let token = self.consume_token().ok_or(())?;
                match token.kind.parse_string_value() {
                    Some(Ok(value)) => Ok(ast::Value::String(value)),
                    Some(Err(err)) => {
                        self.record_error(ParseError::new(
                            err.to_string(),
                            token.position,
                            ParseErrorKind::InvalidValue,
                        ));
                        Err(())
                    },
                    None => Err(()),
                }
            },
            TokenKind::True => {
                self.consume_token();
                Ok(ast::Value::Boolean(true))
            },
            TokenKind::False => {
                self.consume_token();
                Ok(ast::Value::Boolean(false))
            },
            TokenKind::Null => {
                self.consume_token();
                Ok(ast::Value::Null)
            },
            TokenKind::Name(name) => {
                let name = (*name).to_string();
                self.consume_token();
                Ok(ast::Value::Enum(name))
            },
            TokenKind::SquareBracketOpen => self.parse_list_value(context),
            TokenKind::CurlyBraceOpen => self.parse_object_value(context),
            _ => {
                self.record_unexpected(&["value"]);
                Err(())
            },
        }
    }

    fn parse_list_value(&mut self, context: ValueContext) -> Result<ast::Value, ()> {
        let open = self.expect(&TokenKind::SquareBracketOpen)?;
        let mut items = Vec::new();
        while !self.peek_is(&TokenKind::SquareBracketClose) {
            if self.token_stream.is_at_end() {
                self.record_unclosed("]", open.position);
                return Err(());
            }
            items.push(self.parse_value(context)?);
        }
        self.expect(&TokenKind::SquareBracketClose)?;
        Ok(ast::Value::List(items))
    }

    fn parse_object_value(&mut self, context: ValueContext) -> Result<ast::Value, ()> {
        let open = self.expect(&TokenKind::CurlyBraceOpen)?;
        let mut fields = IndexMap::new();
        while !self.peek_is(&TokenKind::CurlyBraceClose) {
            if self.token_stream.is_at_end() {
                self.record_unclosed("}", open.position);
                return Err(());
            }
            let (name, position) = self.expect_name()?;
            self.expect(&TokenKind::Colon)?;
            let value = self.parse_value(context)?;
            if fields.contains_key(&name) {
                self.record_error(ParseError::new(
                    format!("duplicate object field `{name}`"),
                    position,
                    ParseErrorKind::InvalidValue,
                ));
                return Err(());
            }
            fields.insert(name, value);
        }
        self.expect(&TokenKind::CurlyBraceClose)?;
        Ok(ast::Value::Object(fields))
    }
}
