#[derive(Debug, Clone, PartialEq, Eq)]
/// A value could not be read as a number.
///
/// Only dynamic conversions can fail: a slice that is neither one nor two
/// elements long, or a string that is not `re` or `re,im`.
pub struct TypeConversionError {
    /// The rejected input.
    pub input: String,
}

impl std::fmt::Display for TypeConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Expected numeric type, found '{}'", self.input)
    }
}

impl std::error::Error for TypeConversionError {}
