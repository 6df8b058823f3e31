use super::span::Location;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected {expected} but found '{found}' at {location}")]
    UnexpectedToken {
        expected: String,
        found: String,
        location: Location,
    },

    #[error("expected {expected} but reached end of input at {location}")]
    UnexpectedEndOfInput { expected: String, location: Location },

    #[error("unrecognized input '{lexeme}' at {location}")]
    Lexical { lexeme: String, location: Location },

    #[error("input exceeds {limit} tokens")]
    TooManyTokens { limit: usize },
}

impl ParseError {
    pub fn unexpected_token(expected: &str, found: &str, location: Location) -> Self {
        ParseError::UnexpectedToken {
            expected: expected.to_string(),
            found: found.to_string(),
            location,
        }
    }

    pub fn unexpected_end_of_input(expected: &str, location: Location) -> Self {
        ParseError::UnexpectedEndOfInput {
            expected: expected.to_string(),
            location,
        }
    }

    /// Location of the error, when it has one
    pub fn location(&self) -> Option<Location> {
        match self {
            ParseError::UnexpectedToken { location, .. }
            | ParseError::UnexpectedEndOfInput { location, .. }
            | ParseError::Lexical { location, .. } => Some(*location),
            ParseError::TooManyTokens { .. } => None,
        }
    }
}
