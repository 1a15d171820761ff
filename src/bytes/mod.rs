// ---------------------------------------------------------------------------
// Raw-slice primitives behind `adjust` and `invert`.
//
// LUT substitution is a byte gather and stays scalar. Word inversion is a
// plain XOR: #[rite] row functions hold the SIMD loops, #[arcane] wrappers
// are the incant! dispatch targets.
// ---------------------------------------------------------------------------

use archmage::incant;

use crate::{Channels, Error, Lut};

pub use crate::layout::{COLOR_MASK, FULL_MASK};

mod scalar;
use scalar::*;

#[cfg(target_arch = "x86_64")]
mod avx2;
#[cfg(target_arch = "x86_64")]
use avx2::*;

#[cfg(target_arch = "aarch64")]
mod neon;
#[cfg(target_arch = "aarch64")]
use neon::*;

#[cfg(target_arch = "wasm32")]
mod wasm;
#[cfg(target_arch = "wasm32")]
use wasm::*;


// ===========================================================================
// Validation helpers
// ===========================================================================

#[inline]
fn check_elements(len: usize, count: usize, stride: usize) -> Result<usize, Error> {
    if stride == 0 {
        return Err(Error::InvalidStride);
    }
    let needed = count.checked_mul(stride).ok_or(Error::InvalidStride)?;
    if len < needed {
        return Err(Error::BufferTooShort { needed, len });
    }
    Ok(needed)
}

#[inline]
fn check_strided(
    len: usize,
    width: usize,
    height: usize,
    stride: usize,
    bpp: usize,
) -> Result<(), Error> {
    if width == 0 || height == 0 || bpp == 0 {
        return Err(Error::InvalidStride);
    }
    let row_bytes = width.checked_mul(bpp).ok_or(Error::InvalidStride)?;
    if row_bytes > stride {
        return Err(Error::InvalidStride);
    }
    let needed = (height - 1)
        .checked_mul(stride)
        .ok_or(Error::InvalidStride)?
        .checked_add(row_bytes)
        .ok_or(Error::InvalidStride)?;
    if len < needed {
        return Err(Error::BufferTooShort { needed, len });
    }
    Ok(())
}

#[inline]
fn check_words(len: usize) -> Result<(), Error> {
    if !len.is_multiple_of(4) {
        Err(Error::NotWordAligned { len })
    } else {
        Ok(())
    }
}

// ===========================================================================
// Utility
// ===========================================================================

/// `mask` as little-endian bytes, repeated to fill `N` bytes.
#[inline(always)]
fn mask_pattern<const N: usize>(mask: u32) -> [u8; N] {
    let bytes = mask.to_le_bytes();
    core::array::from_fn(|i| bytes[i % 4])
}

// ===========================================================================
// Public API: LUT substitution
// ===========================================================================

/// Remap selected channels of `count` consecutive elements through `lut`.
///
/// Element `k` starts at byte `k * stride`; channel bit `i` of `channels`
/// addresses byte `i` of each element, so `stride` also bounds which
/// channels may be selected. Only the first `count * stride` bytes are
/// touched. An empty `channels` is a no-op.
///
/// ```rust
/// use dibtone::{Channels, bytes, negative_lut};
///
/// let mut bgr = [10u8, 20, 30, 40, 50, 60];
/// bytes::adjust_elements(&mut bgr, &negative_lut(), Channels::RED, 2, 3).unwrap();
/// assert_eq!(bgr, [10, 20, 225, 40, 50, 195]);
/// ```
pub fn adjust_elements(
    buf: &mut [u8],
    lut: &Lut,
    channels: Channels,
    count: usize,
    stride: usize,
) -> Result<(), Error> {
    let needed = check_elements(buf.len(), count, stride)?;
    channels.check_element(stride)?;
    ltrace!(
        "adjust {} elements, stride {}, channels {:?}",
        count,
        stride,
        channels
    );
    adjust_row_scalar(&mut buf[..needed], lut, channels, stride);
    Ok(())
}

/// Remap selected channels of a strided image through `lut`, row by row.
///
/// `stride` is the distance in bytes between the start of consecutive rows.
/// Must be ≥ `width × bytes_per_pixel`. Padding bytes between rows are never
/// read or written. The buffer must be at least
/// `(height - 1) * stride + width * bytes_per_pixel` bytes.
pub fn adjust_strided(
    buf: &mut [u8],
    width: usize,
    height: usize,
    stride: usize,
    bytes_per_pixel: usize,
    lut: &Lut,
    channels: Channels,
) -> Result<(), Error> {
    check_strided(buf.len(), width, height, stride, bytes_per_pixel)?;
    channels.check_element(bytes_per_pixel)?;
    ltrace!(
        "adjust {}x{} rows, stride {}, {} bytes/px, channels {:?}",
        width,
        height,
        stride,
        bytes_per_pixel,
        channels
    );
    adjust_strided_scalar(buf, lut, channels, width, height, stride, bytes_per_pixel);
    Ok(())
}

// ===========================================================================
// Public API: word inversion
// ===========================================================================

/// XOR every little-endian 4-byte word of `buf` with `mask`.
///
/// Use [`COLOR_MASK`] to keep byte 3 of each word (reserved/alpha) and
/// [`FULL_MASK`] to flip everything. `buf.len()` must be a multiple of 4.
/// Applying the same mask twice restores the input.
///
/// ```rust
/// use dibtone::bytes;
///
/// let mut bgra = [0x00u8, 0xFF, 0x10, 0x80];
/// bytes::invert_words(&mut bgra, bytes::COLOR_MASK).unwrap();
/// assert_eq!(bgra, [0xFF, 0x00, 0xEF, 0x80]);
/// ```
pub fn invert_words(buf: &mut [u8], mask: u32) -> Result<(), Error> {
    check_words(buf.len())?;
    ltrace!("invert {} words, mask {:#010x}", buf.len() / 4, mask);
    incant!(invert_words_impl(buf, mask), [v3, arm_v2, wasm128, scalar]);
    Ok(())
}

/// XOR each row of a strided image with `mask`, word by word.
///
/// Row bytes (`width × bytes_per_pixel`) must be a multiple of 4; padding
/// between rows is never read or written.
pub fn invert_words_strided(
    buf: &mut [u8],
    width: usize,
    height: usize,
    stride: usize,
    bytes_per_pixel: usize,
    mask: u32,
) -> Result<(), Error> {
    check_strided(buf.len(), width, height, stride, bytes_per_pixel)?;
    check_words(width * bytes_per_pixel)?;
    incant!(
        invert_words_strided(buf, mask, width * bytes_per_pixel, height, stride),
        [v3, arm_v2, wasm128, scalar]
    );
    Ok(())
}
