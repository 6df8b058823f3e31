//! Parser for exception declarations and method headers
//!
//! Reads a Java-shaped subset only: `class X extends Y {}` declarations for the
//! exception hierarchy and single method headers with their `throws` clause.

pub mod error;
pub mod lexer;
pub mod parser;
pub mod span;

pub use error::ParseError;
pub use lexer::Lexer;
pub use parser::Parser;
pub use span::Location;

use crate::signature::MethodSignature;

/// One exception type declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExceptionDecl {
    pub name: String,
    pub extends: Option<String>,
    /// Declared with the `unchecked` keyword: roots an unchecked subtree
    pub unchecked: bool,
    pub location: Location,
}

/// Parse a sequence of exception declarations
pub fn parse_declarations(source: &str) -> Result<Vec<ExceptionDecl>, ParseError> {
    let decls = Parser::new(source)?.parse_declarations()?;
    log::trace!("parsed {} exception declarations", decls.len());
    Ok(decls)
}

/// Parse a single method header such as `void read() throws IOException`
pub fn parse_method(source: &str) -> Result<MethodSignature, ParseError> {
    Parser::new(source)?.parse_method()
}
