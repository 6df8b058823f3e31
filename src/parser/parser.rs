//! Recursive descent parser for exception declarations and method headers

use super::error::ParseError;
use super::lexer::{Lexer, LexicalToken, Token};
use super::span::Location;
use super::ExceptionDecl;
use crate::signature::MethodSignature;

// Contextual keyword marking the root of an unchecked subtree
const UNCHECKED: &str = "unchecked";

pub struct Parser {
    tokens: Vec<LexicalToken>,
    current: usize,
    end: Location,
}

impl Parser {
    pub fn new(source: &str) -> Result<Self, ParseError> {
        let tokens = Lexer::new(source).tokenize()?;
        let mut end = Location::start();
        end.advance_str(source);
        Ok(Self { tokens, current: 0, end })
    }

    /// `decl*` until end of input
    pub fn parse_declarations(&mut self) -> Result<Vec<ExceptionDecl>, ParseError> {
        let mut decls = Vec::new();
        while !self.is_at_end() {
            decls.push(self.parse_declaration()?);
        }
        Ok(decls)
    }

    /// `["unchecked"] "class" QName ["extends" QName] ("{" ... "}" | ";")`
    fn parse_declaration(&mut self) -> Result<ExceptionDecl, ParseError> {
        let mut unchecked = false;
        loop {
            if self.check_contextual(UNCHECKED) {
                self.advance();
                unchecked = true;
            } else if self.check(Token::At) {
                self.skip_annotation()?;
            } else if self.peek().map(|t| t.token.is_modifier()).unwrap_or(false) {
                self.advance();
            } else {
                break;
            }
        }
        let location = self.expect(Token::Class, "'class'")?.location;
        let name = self.expect(Token::Identifier, "exception name")?.lexeme.clone();
        let extends = if self.matches(Token::Extends) {
            Some(self.parse_qualified_name()?)
        } else {
            None
        };
        self.parse_terminator()?;
        Ok(ExceptionDecl { name, extends, unchecked, location })
    }

    /// `modifier* [Type] Ident "(" params ")" ["throws" QName ("," QName)*] [";" | body]`
    ///
    /// The header must make up the whole input. A header without a return type
    /// is read as a constructor.
    pub fn parse_method(&mut self) -> Result<MethodSignature, ParseError> {
        self.skip_modifiers()?;
        if self.check(Token::Lt) {
            self.parse_type_arguments()?;
        }
        let first = self.parse_type()?;
        let name = if self.check(Token::LParen) && is_simple_identifier(&first) {
            first
        } else {
            self.expect(Token::Identifier, "method name")?.lexeme.clone()
        };

        self.expect(Token::LParen, "'('")?;
        let mut parameters = Vec::new();
        if !self.check(Token::RParen) {
            loop {
                parameters.push(self.parse_parameter()?);
                if !self.matches(Token::Comma) {
                    break;
                }
            }
        }
        self.expect(Token::RParen, "')'")?;

        let mut throws = Vec::new();
        if self.matches(Token::Throws) {
            loop {
                throws.push(self.parse_qualified_name()?);
                if !self.matches(Token::Comma) {
                    break;
                }
            }
        }
        if !self.is_at_end() {
            self.parse_terminator()?;
        }
        if let Some(extra) = self.peek() {
            return Err(ParseError::unexpected_token("end of input", &extra.lexeme, extra.location));
        }
        Ok(MethodSignature::new(name).with_parameters(parameters).throwing(throws))
    }

    /// `["final"] Type ["..."] Ident`; varargs are recorded as arrays
    fn parse_parameter(&mut self) -> Result<String, ParseError> {
        while self.check(Token::At) || self.check(Token::Final) {
            if self.check(Token::At) {
                self.skip_annotation()?;
            } else {
                self.advance();
            }
        }
        let mut ty = self.parse_type()?;
        if self.matches(Token::Ellipsis) {
            ty.push_str("[]");
        }
        self.expect(Token::Identifier, "parameter name")?;
        Ok(ty)
    }

    /// `QName [TypeArgs] ("[" "]")*`, rendered back without whitespace
    fn parse_type(&mut self) -> Result<String, ParseError> {
        let mut ty = self.parse_qualified_name()?;
        if self.check(Token::Lt) {
            ty.push_str(&self.parse_type_arguments()?);
        }
        while self.matches(Token::LBracket) {
            self.expect(Token::RBracket, "']'")?;
            ty.push_str("[]");
        }
        Ok(ty)
    }

    fn parse_type_arguments(&mut self) -> Result<String, ParseError> {
        self.expect(Token::Lt, "'<'")?;
        let mut args = Vec::new();
        loop {
            let arg = if self.matches(Token::Question) {
                if self.matches(Token::Extends) {
                    format!("? extends {}", self.parse_type()?)
                } else if self.matches(Token::Super) {
                    format!("? super {}", self.parse_type()?)
                } else {
                    "?".to_string()
                }
            } else {
                let ty = self.parse_type()?;
                // type parameter declarations: <T extends Exception>
                if self.matches(Token::Extends) {
                    format!("{} extends {}", ty, self.parse_type()?)
                } else {
                    ty
                }
            };
            args.push(arg);
            if !self.matches(Token::Comma) {
                break;
            }
        }
        self.expect(Token::Gt, "'>'")?;
        Ok(format!("<{}>", args.join(",")))
    }

    fn parse_qualified_name(&mut self) -> Result<String, ParseError> {
        let mut name = self.expect(Token::Identifier, "type name")?.lexeme.clone();
        while self.check(Token::Dot) {
            self.advance();
            name.push('.');
            name.push_str(&self.expect(Token::Identifier, "identifier after '.'")?.lexeme);
        }
        Ok(name)
    }

    /// `;` or a brace-balanced body whose contents are ignored
    fn parse_terminator(&mut self) -> Result<(), ParseError> {
        if self.matches(Token::Semicolon) {
            return Ok(());
        }
        self.expect(Token::LBrace, "'{' or ';'")?;
        let mut depth = 1usize;
        while depth > 0 {
            match self.advance().map(|t| t.token) {
                Some(Token::LBrace) => depth += 1,
                Some(Token::RBrace) => depth -= 1,
                Some(_) => {}
                None => return Err(ParseError::unexpected_end_of_input("'}'", self.end)),
            }
        }
        Ok(())
    }

    fn skip_modifiers(&mut self) -> Result<(), ParseError> {
        loop {
            if self.check(Token::At) {
                self.skip_annotation()?;
            } else if self.peek().map(|t| t.token.is_modifier()).unwrap_or(false) {
                self.advance();
            } else {
                return Ok(());
            }
        }
    }

    /// `@QName ["(" ... ")"]`
    fn skip_annotation(&mut self) -> Result<(), ParseError> {
        self.expect(Token::At, "'@'")?;
        self.parse_qualified_name()?;
        if self.matches(Token::LParen) {
            let mut depth = 1usize;
            while depth > 0 {
                match self.advance().map(|t| t.token) {
                    Some(Token::LParen) => depth += 1,
                    Some(Token::RParen) => depth -= 1,
                    Some(_) => {}
                    None => return Err(ParseError::unexpected_end_of_input("')'", self.end)),
                }
            }
        }
        Ok(())
    }

    fn peek(&self) -> Option<&LexicalToken> {
        self.tokens.get(self.current)
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.tokens.len()
    }

    fn check(&self, token: Token) -> bool {
        self.peek().map(|t| t.is(token)).unwrap_or(false)
    }

    /// Identifier spelled as a contextual keyword
    fn check_contextual(&self, keyword: &str) -> bool {
        self.peek().map(|t| t.is(Token::Identifier) && t.lexeme == keyword).unwrap_or(false)
    }

    fn matches(&mut self, token: Token) -> bool {
        if self.check(token) {
            self.current += 1;
            true
        } else {
            false
        }
    }

    fn advance(&mut self) -> Option<&LexicalToken> {
        let tok = self.tokens.get(self.current);
        if tok.is_some() {
            self.current += 1;
        }
        tok
    }

    fn expect(&mut self, token: Token, expected: &str) -> Result<&LexicalToken, ParseError> {
        match self.tokens.get(self.current) {
            Some(t) if t.is(token) => {
                self.current += 1;
                Ok(&self.tokens[self.current - 1])
            }
            Some(t) => Err(ParseError::unexpected_token(expected, &t.lexeme, t.location)),
            None => Err(ParseError::unexpected_end_of_input(expected, self.end)),
        }
    }
}

fn is_simple_identifier(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}
