//! I/O helpers for color arrays and JSON.
//!
//! - `load_bgr_array`: read a PNG/JPEG/BMP into an `(H, W, 3)` u8 array in
//!   BGR channel order, the layout the host's imaging library hands over.
//! - `save_array_image`: write an `(H, W, 1)` or `(H, W, 3)` BGR u8 array to disk.
//! - `write_json_file`: pretty-print a serializable value to disk.
use crate::array::{DType, NdArray, NdArrayView};
use image::{DynamicImage, GrayImage, RgbImage};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk as a packed BGR `(H, W, 3)` u8 array.
pub fn load_bgr_array(path: &Path) -> Result<NdArray, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgb8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    let mut data = img.into_raw();
    for px in data.chunks_exact_mut(3) {
        px.swap(0, 2);
    }
    NdArray::from_vec(vec![height, width, 3], DType::UInt8, data).map_err(|e| e.to_string())
}

/// Save a u8 array with 1 (gray) or 3 (BGR) channels.
pub fn save_array_image(array: &NdArrayView<'_>, path: &Path) -> Result<(), String> {
    array.expect_dtype(DType::UInt8).map_err(|e| e.to_string())?;
    let (h, w, c) = array.hwc().map_err(|e| e.to_string())?;
    ensure_parent_dir(path)?;
    let data = array.as_bytes().to_vec();
    let image = match c {
        1 => GrayImage::from_raw(w as u32, h as u32, data).map(DynamicImage::ImageLuma8),
        3 => {
            let mut rgb = data;
            for px in rgb.chunks_exact_mut(3) {
                px.swap(0, 2);
            }
            RgbImage::from_raw(w as u32, h as u32, rgb).map(DynamicImage::ImageRgb8)
        }
        other => return Err(format!("Cannot save image with {other} channels")),
    }
    .ok_or_else(|| "Failed to create image buffer".to_string())?;
    image
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bgr_round_trip_through_png() {
        let dir = std::env::temp_dir().join(format!("buffer_transforms_io_{}", std::process::id()));
        let path = dir.join("px.png");
        let arr = NdArray::from_vec(vec![1, 2, 3], DType::UInt8, vec![10, 20, 30, 40, 50, 60])
            .unwrap();
        save_array_image(&arr.as_view(), &path).unwrap();
        let back = load_bgr_array(&path).unwrap();
        assert_eq!(back, arr);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn rejects_two_channel_images() {
        let arr = NdArray::zeros(&[1, 1, 2], DType::UInt8).unwrap();
        let err = save_array_image(&arr.as_view(), Path::new("unused.png")).unwrap_err();
        assert!(err.contains("2 channels"));
    }
}
