use buffer_transforms::ops::{self, ArrayDescription};
use buffer_transforms::{DType, NdArray, NdArrayView};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    // Demo stub: exercises every operation on synthetic buffers.
    println!("add(1, 3) = {}", ops::add(1, 3));

    let (h, w) = (480usize, 640usize);
    let mut zeros = NdArray::zeros(&[h, w, 3], DType::UInt8).map_err(|e| e.to_string())?;
    zeros.as_bytes_mut()[..3].copy_from_slice(&[5, 6, 7]);
    ops::describe_array(&zeros.as_view());

    let disc = disc_bgr(h, w);
    let shape = [h, w, 3];
    let view = NdArrayView::from_u8(&shape, &disc).map_err(|e| e.to_string())?;

    let inverted = ops::invert_channels(&view).map_err(|e| e.to_string())?;
    let desc = ArrayDescription::of(&inverted.as_view());
    println!("inverted: shape={:?} head={:?}", desc.shape, desc.head);

    let edges = ops::detect_edges(&view, 100, 200).map_err(|e| e.to_string())?;
    let edge_pixels = edges.as_bytes().iter().filter(|&&v| v == 255).count();
    println!("edges: shape={:?} edge_pixels={edge_pixels}", edges.shape());
    Ok(())
}

/// Bright disc on a dark background, packed BGR.
fn disc_bgr(h: usize, w: usize) -> Vec<u8> {
    let (cy, cx) = (h as f32 / 2.0, w as f32 / 2.0);
    let r2 = (h.min(w) as f32 / 4.0).powi(2);
    let mut data = Vec::with_capacity(h * w * 3);
    for y in 0..h {
        for x in 0..w {
            let d2 = (y as f32 - cy).powi(2) + (x as f32 - cx).powi(2);
            let px = if d2 <= r2 { [60u8, 180, 230] } else { [30u8, 20, 10] };
            data.extend_from_slice(&px);
        }
    }
    data
}
