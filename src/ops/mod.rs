//! The fixed operation table exposed to host callers.
//!
//! Every operation is stateless: it validates its positional arguments,
//! reads borrowed input buffers, and returns a freshly allocated value. A
//! mismatch in arity, argument kind, dtype, rank or channel count aborts the
//! call with an [`ArgumentError`] before any output exists.
//!
//! ```
//! use buffer_transforms::ops::{call, Value};
//!
//! let sum = call("add", &[Value::Int(2), Value::Int(3)]).unwrap();
//! assert_eq!(sum, Value::Int(5));
//! ```
pub mod add;
pub mod describe;
pub mod edges;
pub mod invert;

pub use add::add;
pub use describe::{describe_array, describe_array_to, print_description, ArrayDescription};
pub use edges::{detect_edges, detect_edges_with, EdgeDetection, EdgeOptions};
pub use invert::{invert_channels, Invert};

use crate::array::{NdArray, NdArrayView};
use crate::error::ArgumentError;

/// Name under which the table is exported to the host.
pub const MODULE_NAME: &str = "python_cpp_module";
pub const MODULE_DOC: &str = "Buffer transforms over foreign n-dimensional arrays";

/// Array in, new array out.
pub trait ArrayTransform {
    fn apply(&self, input: &NdArrayView<'_>) -> Result<NdArray, ArgumentError>;
}

/// A positional argument or return value of a host call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    Int(i64),
    Array(NdArray),
}

impl Value {
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Array(_) => "ndarray",
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            Value::Array(_) => None,
        }
    }

    pub fn into_array(self) -> Option<NdArray> {
        match self {
            Value::Array(a) => Some(a),
            Value::Int(_) => None,
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<NdArray> for Value {
    fn from(a: NdArray) -> Self {
        Value::Array(a)
    }
}

/// Narrow a host integer to the 32-bit range the operations accept.
pub fn int_arg(value: i64) -> Result<i32, ArgumentError> {
    i32::try_from(value).map_err(|_| ArgumentError::IntOutOfRange { value })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    InvertChannels,
    DetectEdges,
    DescribeArray,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::InvertChannels,
        Operation::DetectEdges,
        Operation::DescribeArray,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::InvertChannels => "invert_channels",
            Operation::DetectEdges => "detect_edges",
            Operation::DescribeArray => "describe_array",
        }
    }

    pub const fn doc(self) -> &'static str {
        match self {
            Operation::Add => "add(a, b) -> int: sum of two integers",
            Operation::InvertChannels => {
                "invert_channels(image) -> ndarray: 255 - v for every byte of an (H, W, C) uint8 array"
            }
            Operation::DetectEdges => {
                "detect_edges(image, low, high) -> ndarray: Canny edges of an (H, W, 3) uint8 BGR array as (H, W, 1)"
            }
            Operation::DescribeArray => {
                "describe_array(array) -> int: print array metadata and leading bytes, return 0"
            }
        }
    }

    pub const fn arity(self) -> usize {
        match self {
            Operation::Add => 2,
            Operation::InvertChannels | Operation::DescribeArray => 1,
            Operation::DetectEdges => 3,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.name() == name)
    }

    /// Check arity and argument kinds, then run the operation.
    pub fn call(self, args: &[Value]) -> Result<Value, ArgumentError> {
        if args.len() != self.arity() {
            return Err(ArgumentError::Arity {
                op: self.name(),
                expected: self.arity(),
                got: args.len(),
            });
        }
        match self {
            Operation::Add => {
                let a = self.int_at(args, 0)?;
                let b = self.int_at(args, 1)?;
                Ok(Value::Int(add(a, b)))
            }
            Operation::InvertChannels => {
                let input = self.array_at(args, 0)?;
                Invert.apply(&input).map(Value::Array)
            }
            Operation::DetectEdges => {
                let input = self.array_at(args, 0)?;
                let low = self.int_at(args, 1)?;
                let high = self.int_at(args, 2)?;
                EdgeOptions::with_thresholds(low, high)
                    .apply(&input)
                    .map(Value::Array)
            }
            Operation::DescribeArray => {
                let input = self.array_at(args, 0)?;
                Ok(Value::Int(describe_array(&input)))
            }
        }
    }

    fn int_at(self, args: &[Value], index: usize) -> Result<i32, ArgumentError> {
        match &args[index] {
            Value::Int(v) => int_arg(*v),
            other => Err(self.kind_error(index, "int", other)),
        }
    }

    fn array_at<'a>(self, args: &'a [Value], index: usize) -> Result<NdArrayView<'a>, ArgumentError> {
        match &args[index] {
            Value::Array(a) => Ok(a.as_view()),
            other => Err(self.kind_error(index, "ndarray", other)),
        }
    }

    fn kind_error(self, index: usize, expected: &'static str, got: &Value) -> ArgumentError {
        ArgumentError::ArgumentType {
            op: self.name(),
            index,
            expected,
            got: got.kind(),
        }
    }
}

/// Look up `name` in the table and call it.
pub fn call(name: &str, args: &[Value]) -> Result<Value, ArgumentError> {
    Operation::from_name(name)
        .ok_or_else(|| ArgumentError::UnknownOperation(name.to_string()))?
        .call(args)
}
