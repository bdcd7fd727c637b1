//!
//! src/errors.rs  
//!
//! Defines enums and methods of error conversion 
//! for errors the rating pipeline uses 
//!
//!

use thiserror::Error; 

/// Rejections raised while checking user supplied text 
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid uri")]
    InvalidIdentifierFormat, 
    #[error("Not an integer!")]
    NotAnInteger, 
    #[error("Not an integer 1-10 (got {0})")]
    OutOfRange(i64)
}

#[derive(Error, Debug)]
pub enum RaterError {
    #[error("config error: {0}")]
    Config(String),
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error("prompt error: {0}")]
    Prompt(String),
    #[error("http error: {0}")]
    Transport(String),
    #[error("parse error: {0}")]
    Parse(String)
}

impl From<reqwest::Error> for RaterError {
    fn from(e: reqwest::Error) -> Self { RaterError::Transport(e.to_string()) }
}

impl From<serde_json::Error> for RaterError {
    fn from(e: serde_json::Error) -> Self { RaterError::Parse(e.to_string()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_match_prompt_wording() {
        let e: RaterError = ValidationError::InvalidIdentifierFormat.into();
        assert_eq!(e.to_string(), "Invalid uri");
        assert_eq!(ValidationError::NotAnInteger.to_string(), "Not an integer!");
        assert_eq!(
            ValidationError::OutOfRange(15).to_string(), 
            "Not an integer 1-10 (got 15)"
        );
    }

    #[test]
    fn json_errors_become_parse_errors() {
        let bad = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        assert!(matches!(RaterError::from(bad), RaterError::Parse(_)));
    }
}
