use crate::array::DType;
use thiserror::Error;

/// Failure to match an operation's argument signature.
///
/// Every operation fails fast with one of these before producing output;
/// there are no partial results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ArgumentError {
    /// Wrong number of positional arguments.
    #[error("{op}() takes {expected} positional arguments but {got} were given")]
    Arity {
        op: &'static str,
        expected: usize,
        got: usize,
    },

    /// A positional argument has the wrong kind (e.g. array where int expected).
    #[error("{op}() argument {index} must be {expected}, not {got}")]
    ArgumentType {
        op: &'static str,
        index: usize,
        expected: &'static str,
        got: &'static str,
    },

    /// Integer argument does not fit a 32-bit signed integer.
    #[error("integer {value} out of range for a 32-bit argument")]
    IntOutOfRange { value: i64 },

    /// Array element type differs from the one the operation accepts.
    #[error("expected array of dtype {expected}, got {got}")]
    DType { expected: DType, got: DType },

    /// Array has the wrong number of dimensions.
    #[error("expected array of rank {expected}, got rank {got}")]
    Rank { expected: usize, got: usize },

    /// Last dimension is not the required channel count.
    #[error("expected {expected} channels, got {got}")]
    Channels { expected: usize, got: usize },

    /// Buffer length disagrees with `product(shape) * itemsize`.
    #[error("buffer holds {got} bytes but shape {shape:?} of {dtype} needs {expected}")]
    BufferSize {
        shape: Vec<usize>,
        dtype: DType,
        expected: usize,
        got: usize,
    },

    /// `product(shape) * itemsize` overflows `usize`.
    #[error("array shape {shape:?} is too large")]
    ShapeOverflow { shape: Vec<usize> },

    /// Array memory is not a single C-contiguous block.
    #[error("array must be C-contiguous")]
    NotContiguous,

    /// No operation registered under this name.
    #[error("no operation named {0:?}")]
    UnknownOperation(String),
}

impl ArgumentError {
    /// True for errors about what was passed rather than its contents.
    pub fn is_type_error(&self) -> bool {
        matches!(
            self,
            Self::Arity { .. }
                | Self::ArgumentType { .. }
                | Self::DType { .. }
                | Self::UnknownOperation(_)
        )
    }
}
