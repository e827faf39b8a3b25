use derive_more::{Display, Error, From, IsVariant, TryInto};

#[derive(Debug, Clone, Display, Error, PartialEq, Eq)]
#[display("Input does not match the expected numeric pattern!")]
pub struct InvalidPatternError;

#[derive(Debug, Clone, Display, Error, PartialEq, Eq)]
#[display("Value out of range for the target type!")]
pub struct OutOfRangeError;

#[derive(Debug, Clone, Display, Error, PartialEq, Eq)]
#[display("Buffer too small for the formatted value!")]
pub struct BufferOverflowError;

#[derive(Debug, Clone, Display, Error, From, IsVariant, TryInto, PartialEq, Eq)]
pub enum FromCharsError {
    InvalidPattern(InvalidPatternError),
    OutOfRange(OutOfRangeError),
}
