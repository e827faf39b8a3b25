use std::fmt::{self, Debug, Formatter};

/// Digit characters shared by every radix-aware formatter in the crate, lowercase per the usual
/// convention for bases above ten.
pub(crate) const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Wraps a pre-rendered string so that [`Debug`] writes it without surrounding quotes, for
/// embedding numeric values in `debug_struct` output.
pub struct DebugUnquoted(pub String);

impl Debug for DebugUnquoted {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
