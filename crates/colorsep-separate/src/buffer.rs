//! Whole-buffer separation using Rayon.
//!
//! A [`Separation`] is immutable, so every pixel is transformed
//! independently on the Rayon pool with no synchronization.
//!
//! # Example
//!
//! ```rust
//! use colorsep_separate::{buffer, Separation};
//!
//! let pixels = vec![0xFF8000u32; 4 * 4];
//! let sheet = buffer::contact_sheet(&Separation::Hsv, 4, 4, &pixels).unwrap();
//! assert_eq!(sheet.len(), 8 * 8);
//! ```

use crate::{Separation, SeparationResult};
use colorsep_core::Color;
use rayon::prelude::*;
use tracing::{debug, trace};

/// Separates every color, returning one buffer per output channel.
pub fn separate_pixels(separation: &Separation, pixels: &[Color]) -> [Vec<Color>; 3] {
    trace!(len = pixels.len(), model = %separation.kind(), "separate_pixels");

    let swatches: Vec<[Color; 3]> = pixels.par_iter().map(|&c| separation.separate(c)).collect();
    split(&swatches, |c| c)
}

/// Separates packed `0xRRGGBB` pixels into three packed channel buffers.
///
/// Output channels are clamped to 8 bits on packing; NaN packs as 0.
pub fn separate_packed(separation: &Separation, pixels: &[u32]) -> [Vec<u32>; 3] {
    trace!(len = pixels.len(), model = %separation.kind(), "separate_packed");

    let swatches: Vec<[Color; 3]> = pixels
        .par_iter()
        .map(|&p| separation.separate(Color::from_packed(p)))
        .collect();
    split(&swatches, Color::to_packed)
}

fn split<T>(swatches: &[[Color; 3]], f: impl Fn(Color) -> T) -> [Vec<T>; 3] {
    let mut out = [
        Vec::with_capacity(swatches.len()),
        Vec::with_capacity(swatches.len()),
        Vec::with_capacity(swatches.len()),
    ];
    for [c0, c1, c2] in swatches {
        out[0].push(f(*c0));
        out[1].push(f(*c1));
        out[2].push(f(*c2));
    }
    out
}

/// Lays out an image and its three separations on a 2x2 grid.
///
/// ```text
/// +---------+---------+
/// |  input  |  ch 0   |
/// +---------+---------+
/// |  ch 1   |  ch 2   |
/// +---------+---------+
/// ```
///
/// `pixels` is `width * height` packed `0xRRGGBB` values in row-major
/// order; the result is `2 * width` by `2 * height`.
///
/// # Errors
///
/// [`colorsep_core::Error::BufferSize`] (wrapped) when `pixels.len()` is not
/// `width * height`.
pub fn contact_sheet(
    separation: &Separation,
    width: u32,
    height: u32,
    pixels: &[u32],
) -> SeparationResult<Vec<u32>> {
    let (w, h) = (width as usize, height as usize);
    if pixels.len() != w * h {
        return Err(colorsep_core::Error::buffer_size(width, height, pixels.len()).into());
    }
    debug!(width, height, model = %separation.kind(), "Building contact sheet");
    if w == 0 || h == 0 {
        return Ok(Vec::new());
    }

    let [ch0, ch1, ch2] = separate_packed(separation, pixels);
    let mut sheet = vec![0u32; 4 * w * h];

    sheet
        .par_chunks_mut(2 * w)
        .enumerate()
        .for_each(|(y, row)| {
            let (left, right) = row.split_at_mut(w);
            let (src_left, src_right) = if y < h {
                (pixels, &ch0)
            } else {
                (&ch1[..], &ch2)
            };
            let src_y = y % h;
            let span = src_y * w..(src_y + 1) * w;
            left.copy_from_slice(&src_left[span.clone()]);
            right.copy_from_slice(&src_right[span]);
        });

    Ok(sheet)
}
