//! Hysteresis edge tracking.
//!
//! Strong candidates seed a flood fill that absorbs weak candidates reachable
//! through 8-connected chains of weak or strong pixels. Everything else is
//! dropped. Output is binary: 255 on edges, 0 elsewhere.
use crate::edges::nms::{Candidate, NmsMap};
use crate::image::GrayImageU8;

pub const EDGE: u8 = 255;

pub fn hysteresis(map: &NmsMap) -> GrayImageU8 {
    let (w, h) = (map.w, map.h);
    let mut out = GrayImageU8::zeros(w, h);
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for y in 0..h {
        for x in 0..w {
            if map.get(x, y) == Candidate::Strong && out.get(x, y) == 0 {
                out.set(x, y, EDGE);
                stack.push((x, y));
                while let Some((cx, cy)) = stack.pop() {
                    for ny in cy.saturating_sub(1)..=(cy + 1).min(h - 1) {
                        for nx in cx.saturating_sub(1)..=(cx + 1).min(w - 1) {
                            if out.get(nx, ny) == 0 && map.get(nx, ny) != Candidate::Suppressed {
                                out.set(nx, ny, EDGE);
                                stack.push((nx, ny));
                            }
                        }
                    }
                }
            }
        }
    }

    out
}
