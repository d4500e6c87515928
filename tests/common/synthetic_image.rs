/// Generates a high-contrast checkerboard as a packed `(H, W, 3)` BGR buffer.
pub fn checkerboard_bgr(width: usize, height: usize, cell: usize) -> Vec<u8> {
    assert!(cell > 0, "cell size must be positive");

    let mut img = Vec::with_capacity(width * height * 3);
    for y in 0..height {
        for x in 0..width {
            let cx = x / cell;
            let cy = y / cell;
            let val = if (cx + cy) & 1 == 0 { 32u8 } else { 220u8 };
            img.extend_from_slice(&[val, val, val]);
        }
    }
    img
}

/// Uniform `(H, W, 3)` buffer.
pub fn flat_bgr(width: usize, height: usize, bgr: [u8; 3]) -> Vec<u8> {
    bgr.iter()
        .copied()
        .cycle()
        .take(width * height * 3)
        .collect()
}
