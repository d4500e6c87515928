//! Array introspection: a debugging aid that prints array metadata.
use crate::array::NdArrayView;
use log::warn;
use serde::Serialize;
use std::fmt;
use std::io::{self, Write};

/// Leading raw bytes included in a description.
pub const SAMPLE_BYTES: usize = 10;

/// Metadata of an array plus its first few raw bytes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrayDescription {
    pub ndim: usize,
    pub shape: Vec<usize>,
    /// Host dtype name, e.g. `"uint8"`
    pub dtype: String,
    pub type_num: i32,
    pub itemsize: usize,
    /// Element count
    pub size: usize,
    pub nbytes: usize,
    pub head: Vec<u8>,
}

impl ArrayDescription {
    pub fn of(view: &NdArrayView<'_>) -> Self {
        let bytes = view.as_bytes();
        Self {
            ndim: view.ndim(),
            shape: view.shape().to_vec(),
            dtype: view.dtype().name().to_string(),
            type_num: view.dtype().type_num(),
            itemsize: view.itemsize(),
            size: view.len(),
            nbytes: view.nbytes(),
            head: bytes[..bytes.len().min(SAMPLE_BYTES)].to_vec(),
        }
    }
}

impl fmt::Display for ArrayDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "#Dims: {}", self.ndim)?;
        for (i, extent) in self.shape.iter().enumerate() {
            writeln!(f, "Dim{i}: {extent}")?;
        }
        writeln!(f, "NpyType: {}", self.type_num)?;
        writeln!(f, "ItemSize: {}", self.itemsize)?;
        writeln!(f, "TotalSize: {}", self.size)?;
        writeln!(f, "TotalBytes: {}", self.nbytes)?;
        for b in &self.head {
            write!(f, "{b} ")?;
        }
        writeln!(f)
    }
}

/// Write the description of `view` to `out`. Always yields 0.
pub fn describe_array_to<W: Write>(view: &NdArrayView<'_>, out: &mut W) -> io::Result<i64> {
    write!(out, "{}", ArrayDescription::of(view))?;
    out.flush()?;
    Ok(0)
}

/// Print the description of `view` to standard output and return 0.
pub fn describe_array(view: &NdArrayView<'_>) -> i64 {
    print_description(&ArrayDescription::of(view))
}

/// Print an already captured description to standard output and return 0.
///
/// A failed write is logged, never reported to the caller.
pub fn print_description(desc: &ArrayDescription) -> i64 {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    if let Err(err) = write!(lock, "{desc}").and_then(|()| lock.flush()) {
        warn!("describe_array: failed to write to stdout: {err}");
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array::DType;

    fn render(view: &NdArrayView<'_>) -> String {
        let mut buf = Vec::new();
        assert_eq!(describe_array_to(view, &mut buf).unwrap(), 0);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn prints_metadata_and_first_ten_bytes() {
        let mut data = vec![0u8; 4 * 5 * 3];
        data[..3].copy_from_slice(&[5, 6, 7]);
        let view = NdArrayView::from_u8(&[4, 5, 3], &data).unwrap();
        assert_eq!(
            render(&view),
            "#Dims: 3\nDim0: 4\nDim1: 5\nDim2: 3\nNpyType: 2\nItemSize: 1\n\
             TotalSize: 60\nTotalBytes: 60\n5 6 7 0 0 0 0 0 0 0 \n"
        );
    }

    #[test]
    fn wide_dtype_counts_elements_and_bytes_separately() {
        let data = [1u8, 0, 0, 0, 2, 0, 0, 0];
        let view = NdArrayView::new(&[2], DType::Int32, &data).unwrap();
        let desc = ArrayDescription::of(&view);
        assert_eq!(desc.size, 2);
        assert_eq!(desc.nbytes, 8);
        assert_eq!(desc.itemsize, 4);
        assert_eq!(desc.type_num, 5);
        assert_eq!(desc.dtype, "int32");
        assert_eq!(desc.head, data.to_vec());
    }

    #[test]
    fn empty_buffer_prints_no_samples() {
        let view = NdArrayView::from_u8(&[0, 3], &[]).unwrap();
        let text = render(&view);
        assert!(text.ends_with("TotalBytes: 0\n\n"), "{text:?}");
    }

    #[test]
    fn stdout_variant_returns_zero() {
        let view = NdArrayView::from_u8(&[1], &[9]).unwrap();
        assert_eq!(describe_array(&view), 0);
    }
}
