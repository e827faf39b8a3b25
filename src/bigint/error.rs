use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant};

#[derive(Debug, Clone, Display, Error, PartialEq, Eq)]
#[display("Cannot parse an integer from an empty string!")]
pub struct EmptyInputError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidDigitError {
    pub offset: usize,
    pub byte: u8,
}

impl Display for InvalidDigitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid digit {:?} at offset {}!", self.byte as char, self.offset)
    }
}

impl Error for InvalidDigitError {}

#[derive(Debug, Clone, Display, Error, PartialEq, Eq)]
#[display("Subtraction would produce a negative value!")]
pub struct NegativeDifferenceError;

#[derive(Debug, Clone, Display, Error, From, IsVariant, PartialEq, Eq)]
pub enum ParseBigIntError {
    Empty(EmptyInputError),
    InvalidDigit(InvalidDigitError),
}
