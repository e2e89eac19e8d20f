use thiserror::Error;

/// Errors returned by fallible vector operations.
///
/// Every error is local to the failing call: no partially computed value is produced, and the
/// operands are left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// A run-time sized operand did not have the vector's length.
    #[error("length mismatch: expected {expected} elements, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// The operation is only defined for vectors of a specific dimension.
    #[error("{operation} is only defined for {expected}-dimensional vectors, not {actual}-dimensional ones")]
    Dimension {
        operation: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The operation needs a direction, but the vector has zero length.
    #[error("cannot {operation} a zero vector")]
    DegenerateVector { operation: &'static str },

    /// The operation is undefined for vectors without elements.
    #[error("cannot determine {property} of an empty vector")]
    EmptyVector { property: &'static str },

    /// Checked element access out of range.
    #[error("index {index} is out of range for a vector of length {len}")]
    Index { index: usize, len: usize },

    /// An element list was longer than the vector's dimension.
    #[error("cannot construct a {capacity}-element vector from {actual} elements")]
    Construction { capacity: usize, actual: usize },
}

/// Result type of fallible vector operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            Error::LengthMismatch {
                expected: 3,
                actual: 2
            }
            .to_string(),
            "length mismatch: expected 3 elements, got 2"
        );
        assert_eq!(
            Error::Dimension {
                operation: "cross product",
                expected: 3,
                actual: 2,
            }
            .to_string(),
            "cross product is only defined for 3-dimensional vectors, not 2-dimensional ones"
        );
        assert_eq!(
            Error::DegenerateVector {
                operation: "normalize"
            }
            .to_string(),
            "cannot normalize a zero vector"
        );
        assert_eq!(
            Error::Index { index: 5, len: 2 }.to_string(),
            "index 5 is out of range for a vector of length 2"
        );
    }
}
