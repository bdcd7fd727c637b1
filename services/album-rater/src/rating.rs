//!
//! src/rating.rs
//!
//! Integer rating in 1..=10. Zero is rejected.
//!

use serde::Serialize;

use crate::errors::ValidationError;

pub const MIN_RATING: i64 = 1;
pub const MAX_RATING: i64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    pub fn parse(input: &str) -> Result<Rating, ValidationError> {
        let value: i64 = input.parse()
            .map_err(|_| ValidationError::NotAnInteger)?;
        Rating::try_from(value)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Rating {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if !(MIN_RATING..=MAX_RATING).contains(&value) {
            return Err(ValidationError::OutOfRange(value));
        }
        Ok(Rating(value as u8))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_whole_range() {
        for r in 1..=10 {
            assert_eq!(Rating::parse(&r.to_string()).unwrap().value() as i64, r);
        }
        assert_eq!(Rating::parse("+9").unwrap().value(), 9);
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(Rating::parse("0"), Err(ValidationError::OutOfRange(0)));
        assert_eq!(Rating::parse("-3"), Err(ValidationError::OutOfRange(-3)));
        assert_eq!(Rating::parse("11"), Err(ValidationError::OutOfRange(11)));
        assert_eq!(Rating::parse("15"), Err(ValidationError::OutOfRange(15)));
    }

    #[test]
    fn rejects_non_numeric() {
        for input in ["", "nine", "9.5", " 9", "9 ", "0x9", "99999999999999999999"] {
            assert_eq!(Rating::parse(input), Err(ValidationError::NotAnInteger), "{input:?}");
        }
    }

    #[test]
    fn serializes_as_bare_integer() {
        let r = Rating::try_from(7).unwrap();
        assert_eq!(serde_json::to_string(&r).unwrap(), "7");
    }
}
