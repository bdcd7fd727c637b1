//!
//! src/identifier.rs
//!
//! Checks user supplied album uris and extracts the 22 character key
//!

use std::fmt;

use crate::errors::ValidationError;

pub const URI_PREFIX: &str = "spotify:album:";
pub const ID_LEN: usize = 22;

/// Canonical album key. Only constructible through [`Identifier::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier(String);

impl Identifier {
    /// Accepts exactly `spotify:album:` followed by 22 ascii alphanumerics
    pub fn parse(input: &str) -> Result<Identifier, ValidationError> {
        let key = input.strip_prefix(URI_PREFIX)
            .filter(|rest| rest.len() == ID_LEN)
            .filter(|rest| rest.bytes().all(|b| b.is_ascii_alphanumeric()))
            .ok_or(ValidationError::InvalidIdentifierFormat)?;

        Ok(Identifier(key.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
