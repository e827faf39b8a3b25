use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error};

#[derive(Debug)]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for range with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

#[derive(Debug)]
pub struct RadixOutOfRange {
    pub radix: u32,
}

impl Display for RadixOutOfRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Radix {} outside of the supported range 2..=36!", self.radix)
    }
}

impl Error for RadixOutOfRange {}

#[derive(Debug, Display, Error)]
#[display("Division by zero!")]
pub struct DivideByZero;
