//! Declaration parser for interface text.
//!
//! The parser walks the token stream produced by [`Lexer`] and builds the
//! declaration tree through a [`ScopeStack`]: every declaration with a body
//! opens a scope, its members are collected into it, and closing the body
//! hands them to the enclosing declaration.
//!
//! Bodies of functions, initializers and accessors are skipped. Declarations
//! that fail to parse are skipped with a warning; only scope imbalance aborts
//! the whole parse.

use apidelta_foundation::{Error, ErrorContext, ErrorKind, Result};
use apidelta_model::{
    AssociatedType, Declaration, EnumCase, Extension, Function, Initializer, Parameter, Property,
    Root, Subscript, TypeAlias, TypeDecl, TypeKeyword,
};
use tracing::{trace, warn};

use crate::lexer::Lexer;
use crate::scope::ScopeStack;
use crate::span::Span;
use crate::token::{Token, TokenKind};

/// Keywords that introduce a declaration.
const DECLARATION_KEYWORDS: &[&str] = &[
    "struct",
    "class",
    "enum",
    "protocol",
    "actor",
    "extension",
    "func",
    "init",
    "subscript",
    "var",
    "let",
    "case",
    "associatedtype",
    "typealias",
    "deinit",
    "operator",
    "precedencegroup",
    "import",
    "macro",
];

/// Declarations that are recognised but not modeled.
const UNSUPPORTED_KEYWORDS: &[&str] = &["deinit", "operator", "precedencegroup", "import", "macro"];

/// Declaration modifiers. `class` is handled separately.
const MODIFIERS: &[&str] = &[
    "public",
    "private",
    "fileprivate",
    "internal",
    "package",
    "open",
    "static",
    "final",
    "override",
    "mutating",
    "nonmutating",
    "lazy",
    "weak",
    "unowned",
    "optional",
    "required",
    "convenience",
    "dynamic",
    "indirect",
    "prefix",
    "postfix",
    "infix",
    "nonisolated",
    "distributed",
    "consuming",
    "borrowing",
    "__consuming",
    "_const",
];

const EFFECT_SPECIFIERS: &[&str] = &["async", "throws", "rethrows", "reasync"];

const ACCESSOR_KEYWORDS: &[&str] = &[
    "get",
    "set",
    "_read",
    "_modify",
    "read",
    "modify",
    "willSet",
    "didSet",
    "init",
    "unsafeAddress",
    "unsafeMutableAddress",
];

const ACCESSOR_MODIFIERS: &[&str] = &[
    "mutating",
    "nonmutating",
    "consuming",
    "borrowing",
    "__consuming",
];

/// Attributes and modifiers shared by every element a declaration produces.
#[derive(Clone, Debug, Default)]
struct Preamble {
    attributes: Vec<String>,
    modifiers: Vec<String>,
}

/// Parser for interface source.
pub struct Parser<'src> {
    /// Source text (token text and error context).
    source: &'src str,
    /// All tokens; the last one is always end of input.
    tokens: Vec<Token>,
    /// Index of the current token.
    pos: usize,
    /// Member collections of the declarations being built.
    scopes: ScopeStack,
    /// Number of malformed declarations skipped so far.
    skipped: usize,
    /// Module being parsed, for log fields.
    module: String,
}

impl<'src> Parser<'src> {
    /// Creates a new parser for the given source.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            tokens: Lexer::tokenize_all(source),
            pos: 0,
            scopes: ScopeStack::new(),
            skipped: 0,
            module: String::new(),
        }
    }

    /// Number of malformed declarations skipped during parsing.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Parses the whole source as the body of module `module_name`.
    ///
    /// # Errors
    /// Returns an unbalanced-scope error if the scope stack is corrupted.
    /// Malformed declarations are skipped, not reported.
    pub fn parse_module(&mut self, module_name: &str) -> Result<Root> {
        module_name.clone_into(&mut self.module);
        self.parse_members(false)
            .map_err(|err| err.with_context(self.fatal_context()))?;
        let scopes = std::mem::take(&mut self.scopes);
        let members = scopes
            .finish()
            .map_err(|err| err.with_context(self.fatal_context()))?;
        Ok(Root::new(module_name, members))
    }

    /// Module name and current position, attached to errors that abort the
    /// whole module.
    fn fatal_context(&self) -> ErrorContext {
        let span = self.current().span;
        ErrorContext::new()
            .with_source(self.module.as_str())
            .with_position(span.line, span.column)
    }

    // =========================================================================
    // Members
    // =========================================================================

    /// Parses declarations until end of input, or until the closing brace when
    /// `in_body` is set.
    fn parse_members(&mut self, in_body: bool) -> Result<()> {
        loop {
            match &self.current().kind {
                TokenKind::Eof => {
                    if in_body {
                        return Err(self.error("unexpected end of input, expected '}'"));
                    }
                    return Ok(());
                }
                TokenKind::RBrace => {
                    self.advance();
                    if in_body {
                        return Ok(());
                    }
                    warn!(line = self.previous().span.line, "ignoring unmatched '}}'");
                }
                TokenKind::Semicolon => self.advance(),
                TokenKind::Hash => self.skip_line(),
                _ => self.parse_declaration()?,
            }
        }
    }

    /// Parses one declaration, skipping it if it is malformed.
    fn parse_declaration(&mut self) -> Result<()> {
        let start = self.pos;
        let depth = self.scopes.depth();
        match self.declaration() {
            Ok(()) => Ok(()),
            Err(err) if err.is_recoverable() => {
                if let ErrorKind::Syntax {
                    message,
                    line,
                    column,
                    ..
                } = &err.kind
                {
                    warn!(
                        module = self.module.as_str(),
                        line,
                        column,
                        message = message.as_str(),
                        "skipping malformed declaration"
                    );
                }
                self.scopes.truncate(depth);
                self.pos = start;
                self.skip_declaration();
                self.skipped += 1;
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    fn declaration(&mut self) -> Result<()> {
        let preamble = self.parse_preamble()?;
        let Some(keyword) = self.current().identifier().map(str::to_string) else {
            return Err(self.error(&format!(
                "expected declaration, found {}",
                self.current().kind.name()
            )));
        };

        if UNSUPPORTED_KEYWORDS.contains(&keyword.as_str()) {
            trace!(
                keyword = keyword.as_str(),
                line = self.current().span.line,
                "skipping unsupported declaration"
            );
            self.skip_declaration();
            return Ok(());
        }

        let elements = match keyword.as_str() {
            "struct" | "class" | "enum" | "protocol" | "actor" => {
                vec![self.type_declaration(preamble, &keyword)?]
            }
            "extension" => vec![self.extension_declaration(preamble)?],
            "func" => vec![self.function_declaration(preamble)?],
            "init" => vec![self.initializer_declaration(preamble)?],
            "subscript" => vec![self.subscript_declaration(preamble)?],
            "var" | "let" => self.property_declarations(preamble, &keyword)?,
            "case" => self.case_declarations(preamble)?,
            "associatedtype" => vec![self.associated_type_declaration(preamble)?],
            "typealias" => vec![self.type_alias_declaration(preamble)?],
            other => return Err(self.error(&format!("unknown declaration keyword `{other}`"))),
        };
        self.scopes.collect(elements)
    }

    /// Parses attributes and modifiers in any interleaving.
    fn parse_preamble(&mut self) -> Result<Preamble> {
        let mut preamble = Preamble::default();
        loop {
            if self.current().kind == TokenKind::At {
                preamble.attributes.push(self.parse_attribute()?);
            } else if self.at_modifier() {
                preamble.modifiers.push(self.parse_modifier());
            } else {
                return Ok(preamble);
            }
        }
    }

    fn at_modifier(&self) -> bool {
        let Some(word) = self.current().identifier() else {
            return false;
        };
        if word == "class" {
            // `class func`, `class var`, `class final` and so on.
            return self.peek(1).identifier().is_some_and(|next| {
                DECLARATION_KEYWORDS.contains(&next) || MODIFIERS.contains(&next)
            });
        }
        MODIFIERS.contains(&word)
    }

    fn parse_modifier(&mut self) -> String {
        let start = self.pos;
        self.advance();
        // `private(set)`, `unowned(safe)`, `nonisolated(unsafe)`.
        if self.current().kind == TokenKind::LParen && self.current().is_attached() {
            self.skip_group();
        }
        self.render(start, self.pos)
    }

    /// Parses `@Name`, `@Module.Name` or `@Name(arguments)`.
    fn parse_attribute(&mut self) -> Result<String> {
        let start = self.pos;
        self.advance();
        self.expect_identifier()?;
        while self.current().is_operator(".")
            && self.current().is_attached()
            && self.peek(1).identifier().is_some()
        {
            self.advance();
            self.advance();
        }
        if self.current().kind == TokenKind::LParen && self.current().is_attached() {
            self.skip_group();
        }
        Ok(self.render(start, self.pos))
    }

    // =========================================================================
    // Declarations with bodies
    // =========================================================================

    fn type_declaration(&mut self, preamble: Preamble, keyword: &str) -> Result<Declaration> {
        let keyword = TypeKeyword::from_keyword(keyword)
            .ok_or_else(|| self.error(&format!("`{keyword}` is not a type keyword")))?;
        self.advance();
        let name = self.expect_identifier()?;
        let generic_parameter_clause = self.parse_generic_parameter_clause()?;
        let inheritance = self.parse_inheritance()?;
        let generic_where_clause = self.parse_where_clause();
        let members = self.parse_body()?;

        Ok(Declaration::Type(TypeDecl {
            keyword,
            attributes: preamble.attributes,
            modifiers: preamble.modifiers,
            name,
            generic_parameter_clause,
            inheritance,
            generic_where_clause,
            members,
        }))
    }

    fn extension_declaration(&mut self, preamble: Preamble) -> Result<Declaration> {
        self.advance();
        let extended_type_name = self.parse_type()?;
        let inheritance = self.parse_inheritance()?;
        let generic_where_clause = self.parse_where_clause();
        let members = self.parse_body()?;

        Ok(Declaration::Extension(Extension {
            attributes: preamble.attributes,
            modifiers: preamble.modifiers,
            extended_type_name,
            inheritance,
            generic_where_clause,
            members,
        }))
    }

    /// Parses `{ members }` through a fresh scope.
    fn parse_body(&mut self) -> Result<Vec<Declaration>> {
        self.expect(&TokenKind::LBrace)?;
        self.scopes.enter();
        self.parse_members(true)?;
        self.scopes.exit()
    }

    // =========================================================================
    // Function-like declarations
    // =========================================================================

    fn function_declaration(&mut self, preamble: Preamble) -> Result<Declaration> {
        self.advance();
        let name = self.parse_function_name()?;
        let generic_parameter_clause = self.parse_generic_parameter_clause()?;
        let parameters = self.parse_parameter_clause(true)?;
        let effect_specifiers = self.parse_effect_specifiers();
        let return_type = if self.current().kind == TokenKind::Arrow {
            self.advance();
            Some(self.parse_type()?)
        } else {
            None
        };
        let generic_where_clause = self.parse_where_clause();
        self.skip_code_block();

        Ok(Declaration::Function(Function {
            attributes: preamble.attributes,
            modifiers: preamble.modifiers,
            name,
            generic_parameter_clause,
            parameters,
            effect_specifiers,
            return_type,
            generic_where_clause,
        }))
    }

    /// An identifier, or a run of adjacent operator tokens such as `==` or `<`.
    fn parse_function_name(&mut self) -> Result<String> {
        if self.current().identifier().is_some() {
            return self.expect_identifier();
        }
        let start = self.pos;
        while matches!(
            self.current().kind,
            TokenKind::Operator(_) | TokenKind::LAngle | TokenKind::RAngle
        ) && (self.pos == start || self.current().is_attached())
        {
            self.advance();
        }
        if self.pos == start {
            return Err(self.error(&format!(
                "expected function name, found {}",
                self.current().kind.name()
            )));
        }
        Ok(self.render(start, self.pos))
    }

    fn initializer_declaration(&mut self, preamble: Preamble) -> Result<Declaration> {
        self.advance();
        let optional_mark = if (self.current().is_operator("?") || self.current().is_operator("!"))
            && self.current().is_attached()
        {
            let mark = self.current().text(self.source).to_string();
            self.advance();
            Some(mark)
        } else {
            None
        };
        let generic_parameter_clause = self.parse_generic_parameter_clause()?;
        let parameters = self.parse_parameter_clause(true)?;
        let effect_specifiers = self.parse_effect_specifiers();
        let generic_where_clause = self.parse_where_clause();
        self.skip_code_block();

        Ok(Declaration::Initializer(Initializer {
            attributes: preamble.attributes,
            modifiers: preamble.modifiers,
            optional_mark,
            generic_parameter_clause,
            parameters,
            effect_specifiers,
            generic_where_clause,
        }))
    }

    fn subscript_declaration(&mut self, preamble: Preamble) -> Result<Declaration> {
        self.advance();
        let generic_parameter_clause = self.parse_generic_parameter_clause()?;
        let parameters = self.parse_parameter_clause(true)?;
        self.expect(&TokenKind::Arrow)?;
        let return_type = self.parse_type()?;
        let generic_where_clause = self.parse_where_clause();
        let accessors = self.parse_accessor_block()?;

        Ok(Declaration::Subscript(Subscript {
            attributes: preamble.attributes,
            modifiers: preamble.modifiers,
            generic_parameter_clause,
            parameters,
            return_type,
            generic_where_clause,
            accessors,
        }))
    }

    /// Parses `(a: Int, _ b: String = "")`.
    ///
    /// Function-like parameters must be labeled; enum case associated values
    /// may be bare types.
    fn parse_parameter_clause(&mut self, labels_required: bool) -> Result<Vec<Parameter>> {
        self.expect(&TokenKind::LParen)?;
        let mut parameters = Vec::new();
        if self.current().kind == TokenKind::RParen {
            self.advance();
            return Ok(parameters);
        }
        loop {
            parameters.push(self.parse_parameter(labels_required)?);
            match self.current().kind {
                TokenKind::Comma => self.advance(),
                TokenKind::RParen => {
                    self.advance();
                    return Ok(parameters);
                }
                _ => {
                    return Err(self.error(&format!(
                        "expected ',' or ')' in parameter list, found {}",
                        self.current().kind.name()
                    )));
                }
            }
        }
    }

    fn parse_parameter(&mut self, labels_required: bool) -> Result<Parameter> {
        let mut attributes = Vec::new();
        while self.current().kind == TokenKind::At {
            attributes.push(self.parse_attribute()?);
        }

        let (first_name, second_name) = if self.current().identifier().is_some()
            && self.peek(1).kind == TokenKind::Colon
        {
            let first = self.expect_identifier()?;
            self.advance();
            (Some(first), None)
        } else if self.current().identifier().is_some()
            && self.peek(1).identifier().is_some()
            && self.peek(2).kind == TokenKind::Colon
        {
            let first = self.expect_identifier()?;
            let second = self.expect_identifier()?;
            self.advance();
            (Some(first), Some(second))
        } else if labels_required {
            return Err(self.error(&format!(
                "expected parameter name, found {}",
                self.current().kind.name()
            )));
        } else {
            (None, None)
        };

        let type_annotation = self.parse_type()?;
        let default_value = if self.current().is_operator("=") {
            self.advance();
            Some(self.parse_expression()?)
        } else {
            None
        };

        Ok(Parameter {
            attributes,
            first_name,
            second_name,
            type_annotation,
            default_value,
        })
    }

    /// Parses `async`, `throws`, `throws(E)`, `rethrows` and `reasync`.
    fn parse_effect_specifiers(&mut self) -> Option<String> {
        let start = self.pos;
        while self
            .current()
            .identifier()
            .is_some_and(|word| EFFECT_SPECIFIERS.contains(&word))
        {
            self.advance();
            if self.current().kind == TokenKind::LParen && self.current().is_attached() {
                self.skip_group();
            }
        }
        (self.pos > start).then(|| self.render(start, self.pos))
    }

    // =========================================================================
    // Bindings and cases
    // =========================================================================

    fn property_declarations(
        &mut self,
        preamble: Preamble,
        binding_kind: &str,
    ) -> Result<Vec<Declaration>> {
        self.advance();
        let mut properties = Vec::new();
        loop {
            let name = self.expect_identifier()?;
            let type_annotation = if self.current().kind == TokenKind::Colon {
                self.advance();
                Some(self.parse_type()?)
            } else {
                None
            };
            let initializer_value = if self.current().is_operator("=") {
                self.advance();
                Some(self.parse_expression()?)
            } else {
                None
            };
            let accessors = self.parse_accessor_block()?;

            properties.push(Declaration::Property(Property {
                attributes: preamble.attributes.clone(),
                modifiers: preamble.modifiers.clone(),
                binding_kind: binding_kind.to_string(),
                name,
                type_annotation,
                initializer_value,
                accessors,
            }));

            if self.current().kind == TokenKind::Comma {
                self.advance();
            } else {
                return Ok(properties);
            }
        }
    }

    fn case_declarations(&mut self, preamble: Preamble) -> Result<Vec<Declaration>> {
        self.advance();
        let mut cases = Vec::new();
        loop {
            let name = self.expect_identifier()?;
            let parameters = if self.current().kind == TokenKind::LParen {
                Some(self.parse_parameter_clause(false)?)
            } else {
                None
            };
            let raw_value = if self.current().is_operator("=") {
                self.advance();
                Some(self.parse_expression()?)
            } else {
                None
            };

            cases.push(Declaration::EnumCase(EnumCase {
                attributes: preamble.attributes.clone(),
                modifiers: preamble.modifiers.clone(),
                name,
                parameters,
                raw_value,
            }));

            if self.current().kind == TokenKind::Comma {
                self.advance();
            } else {
                return Ok(cases);
            }
        }
    }

    /// Normalizes an accessor block to its accessor keywords, e.g. `{ get set }`.
    ///
    /// A block holding a bare getter body is reported as `{ get }`.
    fn parse_accessor_block(&mut self) -> Result<Option<String>> {
        if self.current().kind != TokenKind::LBrace {
            return Ok(None);
        }
        self.advance();

        let mut accessors: Vec<String> = Vec::new();
        let mut modifiers: Vec<String> = Vec::new();
        loop {
            let token = self.current();
            match &token.kind {
                TokenKind::RBrace => {
                    self.advance();
                    break;
                }
                TokenKind::Eof => return Err(self.error("unterminated accessor block")),
                TokenKind::At => {
                    self.parse_attribute()?;
                }
                TokenKind::Identifier(word) if ACCESSOR_MODIFIERS.contains(&word.as_str()) => {
                    modifiers.push(word.clone());
                    self.advance();
                }
                TokenKind::Identifier(word) if ACCESSOR_KEYWORDS.contains(&word.as_str()) => {
                    let mut parts = std::mem::take(&mut modifiers);
                    parts.push(word.clone());
                    self.advance();
                    // `set(newValue)`
                    if self.current().kind == TokenKind::LParen {
                        self.skip_group();
                    }
                    if let Some(effects) = self.parse_effect_specifiers() {
                        parts.push(effects);
                    }
                    self.skip_code_block();
                    accessors.push(parts.join(" "));
                }
                _ => {
                    self.skip_to_block_end();
                    accessors.clear();
                    break;
                }
            }
        }

        if accessors.is_empty() {
            return Ok(Some("{ get }".to_string()));
        }
        Ok(Some(format!("{{ {} }}", accessors.join(" "))))
    }

    // =========================================================================
    // Associated types and aliases
    // =========================================================================

    fn associated_type_declaration(&mut self, preamble: Preamble) -> Result<Declaration> {
        self.advance();
        let name = self.expect_identifier()?;
        let inheritance = self.parse_inheritance()?;
        let default_type = if self.current().is_operator("=") {
            self.advance();
            Some(self.parse_type()?)
        } else {
            None
        };
        let generic_where_clause = self.parse_where_clause();

        Ok(Declaration::AssociatedType(AssociatedType {
            attributes: preamble.attributes,
            modifiers: preamble.modifiers,
            name,
            inheritance,
            default_type,
            generic_where_clause,
        }))
    }

    fn type_alias_declaration(&mut self, preamble: Preamble) -> Result<Declaration> {
        self.advance();
        let name = self.expect_identifier()?;
        let generic_parameter_clause = self.parse_generic_parameter_clause()?;
        if !self.current().is_operator("=") {
            return Err(self.error(&format!(
                "expected '=' in typealias, found {}",
                self.current().kind.name()
            )));
        }
        self.advance();
        let aliased_type = self.parse_type()?;
        let generic_where_clause = self.parse_where_clause();

        Ok(Declaration::TypeAlias(TypeAlias {
            attributes: preamble.attributes,
            modifiers: preamble.modifiers,
            name,
            generic_parameter_clause,
            aliased_type,
            generic_where_clause,
        }))
    }

    // =========================================================================
    // Clauses
    // =========================================================================

    /// Parses `<T: P, U>` if present.
    fn parse_generic_parameter_clause(&mut self) -> Result<Option<String>> {
        if self.current().kind != TokenKind::LAngle {
            return Ok(None);
        }
        let start = self.pos;
        let mut depth = 0usize;
        loop {
            match self.current().kind {
                TokenKind::LAngle | TokenKind::LParen | TokenKind::LBracket => depth += 1,
                TokenKind::RAngle | TokenKind::RParen | TokenKind::RBracket => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        self.advance();
                        return Ok(Some(self.render(start, self.pos)));
                    }
                }
                TokenKind::Eof | TokenKind::LBrace | TokenKind::RBrace => {
                    return Err(self.error("unterminated generic parameter clause"));
                }
                _ => {}
            }
            self.advance();
        }
    }

    /// Parses `: A, B & C` if present.
    fn parse_inheritance(&mut self) -> Result<Option<Vec<String>>> {
        if self.current().kind != TokenKind::Colon {
            return Ok(None);
        }
        self.advance();
        let mut types = vec![self.parse_type()?];
        while self.current().kind == TokenKind::Comma {
            self.advance();
            types.push(self.parse_type()?);
        }
        Ok(Some(types))
    }

    /// Parses `where T: P, U == V` if present, keyword included.
    fn parse_where_clause(&mut self) -> Option<String> {
        if !self.current().is_word("where") {
            return None;
        }
        let start = self.pos;
        let mut depth = 0usize;
        loop {
            let token = self.current();
            if self.pos > start && depth == 0 && token.leading_newline {
                break;
            }
            match token.kind {
                TokenKind::Eof | TokenKind::Semicolon => break,
                TokenKind::LBrace if depth == 0 => break,
                TokenKind::LParen | TokenKind::LBracket | TokenKind::LBrace => depth += 1,
                TokenKind::RParen | TokenKind::RBracket | TokenKind::RBrace => {
                    if depth == 0 {
                        break;
                    }
                    depth -= 1;
                }
                _ => {}
            }
            self.advance();
        }
        Some(self.render(start, self.pos))
    }

    /// Parses a type up to the next clause boundary.
    fn parse_type(&mut self) -> Result<String> {
        let start = self.pos;
        let mut depth = 0usize;
        loop {
            let token = self.current();
            if self.pos > start && depth == 0 && token.leading_newline {
                break;
            }
            match &token.kind {
                TokenKind::Eof => break,
                TokenKind::LBrace if depth == 0 => break,
                TokenKind::LParen | TokenKind::LBracket | TokenKind::LBrace | TokenKind::LAngle => {
                    depth += 1;
                }
                TokenKind::RParen | TokenKind::RBracket | TokenKind::RBrace | TokenKind::RAngle => {
                    if depth == 0 {
                        break;
                    }
                    depth -= 1;
                }
                TokenKind::Comma | TokenKind::Colon | TokenKind::Semicolon if depth == 0 => break,
                TokenKind::Operator(op) if depth == 0 && op == "=" => break,
                TokenKind::Identifier(word) if depth == 0 && word == "where" => break,
                _ => {}
            }
            self.advance();
        }
        if self.pos == start {
            return Err(self.error(&format!(
                "expected type, found {}",
                self.current().kind.name()
            )));
        }
        Ok(self.render(start, self.pos))
    }

    /// Parses a value expression (default values, raw values, initializers).
    fn parse_expression(&mut self) -> Result<String> {
        let start = self.pos;
        let mut depth = 0usize;
        loop {
            let token = self.current();
            if self.pos > start && depth == 0 && token.leading_newline {
                break;
            }
            match token.kind {
                TokenKind::Eof => break,
                // A brace after the value opens an accessor block.
                TokenKind::LBrace if depth == 0 && self.pos > start => break,
                TokenKind::LParen | TokenKind::LBracket | TokenKind::LBrace => depth += 1,
                TokenKind::RParen | TokenKind::RBracket | TokenKind::RBrace => {
                    if depth == 0 {
                        break;
                    }
                    depth -= 1;
                }
                TokenKind::Comma | TokenKind::Semicolon if depth == 0 => break,
                _ => {}
            }
            self.advance();
        }
        if self.pos == start {
            return Err(self.error(&format!(
                "expected expression, found {}",
                self.current().kind.name()
            )));
        }
        Ok(self.render(start, self.pos))
    }

    // =========================================================================
    // Skipping
    // =========================================================================

    /// Skips the current declaration: at least one token, then up to the next
    /// line break or closing brace outside any body.
    ///
    /// Only braces nest here, so an unclosed `(` cannot swallow the lines
    /// that follow it.
    fn skip_declaration(&mut self) {
        let mut depth = 0usize;
        let mut first = true;
        loop {
            let token = self.current();
            if token.kind == TokenKind::Eof {
                return;
            }
            if !first && depth == 0 && (token.leading_newline || token.kind == TokenKind::RBrace)
            {
                return;
            }
            match token.kind {
                TokenKind::LBrace => depth += 1,
                TokenKind::RBrace => depth = depth.saturating_sub(1),
                _ => {}
            }
            self.advance();
            first = false;
        }
    }

    /// Skips a balanced group starting at the current opening delimiter.
    fn skip_group(&mut self) {
        let mut depth = 0usize;
        loop {
            let kind = &self.current().kind;
            if *kind == TokenKind::Eof {
                return;
            }
            if kind.is_open_delimiter() {
                depth += 1;
            } else if kind.is_close_delimiter() {
                depth = depth.saturating_sub(1);
            }
            self.advance();
            if depth == 0 {
                return;
            }
        }
    }

    /// Skips a `{ ... }` body if one follows.
    fn skip_code_block(&mut self) {
        if self.current().kind == TokenKind::LBrace {
            self.skip_group();
        }
    }

    /// Skips to just past the `}` closing the block we are inside.
    fn skip_to_block_end(&mut self) {
        let mut depth = 1usize;
        loop {
            let kind = &self.current().kind;
            if *kind == TokenKind::Eof {
                return;
            }
            if kind.is_open_delimiter() {
                depth += 1;
            } else if kind.is_close_delimiter() {
                depth -= 1;
            }
            self.advance();
            if depth == 0 {
                return;
            }
        }
    }

    /// Skips the rest of a compiler directive line such as `#if os(macOS)`.
    fn skip_line(&mut self) {
        self.advance();
        while self.current().kind != TokenKind::Eof && !self.current().leading_newline {
            self.advance();
        }
    }

    // =========================================================================
    // Token access
    // =========================================================================

    fn current(&self) -> &Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn peek(&self, offset: usize) -> &Token {
        &self.tokens[(self.pos + offset).min(self.tokens.len() - 1)]
    }

    fn previous(&self) -> &Token {
        &self.tokens[self.pos.saturating_sub(1)]
    }

    fn advance(&mut self) {
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
    }

    /// Expects the current token to be of a specific kind, then advances.
    fn expect(&mut self, expected: &TokenKind) -> Result<()> {
        if std::mem::discriminant(&self.current().kind) == std::mem::discriminant(expected) {
            self.advance();
            Ok(())
        } else {
            Err(self.error(&format!(
                "expected {}, found {}",
                expected.name(),
                self.current().kind.name()
            )))
        }
    }

    fn expect_identifier(&mut self) -> Result<String> {
        match &self.current().kind {
            TokenKind::Identifier(name) => {
                let name = name.clone();
                self.advance();
                Ok(name)
            }
            other => Err(self.error(&format!("expected identifier, found {}", other.name()))),
        }
    }

    /// Renders tokens `start..end` with single spaces where the source had
    /// any spacing. Comments are dropped.
    fn render(&self, start: usize, end: usize) -> String {
        let mut text = String::new();
        for (i, token) in self.tokens[start..end].iter().enumerate() {
            if i > 0 && token.leading_space {
                text.push(' ');
            }
            text.push_str(token.text(self.source));
        }
        text
    }

    /// Creates a syntax error at the current position.
    fn error(&self, message: &str) -> Error {
        self.error_at(self.current().span, message)
    }

    /// Creates a syntax error at a specific span.
    fn error_at(&self, span: Span, message: &str) -> Error {
        Error::syntax(message, span.line, span.column, self.context_at(span))
    }

    /// The source line containing a span.
    fn context_at(&self, span: Span) -> String {
        let start = span.start.min(self.source.len());
        let line_start = self.source[..start].rfind('\n').map_or(0, |i| i + 1);
        let line_end = self.source[start..]
            .find('\n')
            .map_or(self.source.len(), |i| start + i);
        self.source[line_start..line_end].trim_end().to_string()
    }
}
