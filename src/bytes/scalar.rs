use archmage::prelude::*;

use crate::{Channels, Lut};

// ===========================================================================
// LUT substitution (scalar only)
// ===========================================================================

/// Remap each selected channel plane of `buf`, one plane at a time.
pub(super) fn adjust_row_scalar(buf: &mut [u8], lut: &Lut, channels: Channels, stride: usize) {
    for offset in channels.offsets() {
        for px in buf.chunks_exact_mut(stride) {
            px[offset] = lut[px[offset] as usize];
        }
    }
}

pub(super) fn adjust_strided_scalar(
    buf: &mut [u8],
    lut: &Lut,
    channels: Channels,
    w: usize,
    h: usize,
    stride: usize,
    bpp: usize,
) {
    for y in 0..h {
        adjust_row_scalar(&mut buf[y * stride..][..w * bpp], lut, channels, bpp);
    }
}

// ===========================================================================
// Scalar row implementations
// ===========================================================================

pub(super) fn invert_words_row_scalar(_token: ScalarToken, row: &mut [u8], mask: u32) {
    for px in row.chunks_exact_mut(4) {
        let v = u32::from_le_bytes([px[0], px[1], px[2], px[3]]);
        px.copy_from_slice(&(v ^ mask).to_le_bytes());
    }
}

// ===========================================================================
// Scalar contiguous wrappers (dispatch targets for incant!)
// ===========================================================================

pub(super) fn invert_words_impl_scalar(t: ScalarToken, b: &mut [u8], mask: u32) {
    invert_words_row_scalar(t, b, mask);
}

// ===========================================================================
// Scalar strided wrappers
// ===========================================================================

pub(super) fn invert_words_strided_scalar(
    t: ScalarToken,
    buf: &mut [u8],
    mask: u32,
    row_bytes: usize,
    h: usize,
    stride: usize,
) {
    for y in 0..h {
        invert_words_row_scalar(t, &mut buf[y * stride..][..row_bytes], mask);
    }
}
