//! Typed operations on [`rgb`] crate pixel slices via bytemuck.
//!
//! Palettes and 32 bpp pixels are `Bgra<u8>` (the alpha field doubles as the
//! reserved byte of a palette record); 24 bpp pixels are `Bgr<u8>`.
//!
//! ```rust
//! use rgb::Bgra;
//! use dibtone::{Channels, typed_rgb};
//!
//! let mut palette = vec![Bgra { b: 10u8, g: 20, r: 30, a: 0 }; 4];
//! typed_rgb::adjust_palette(&mut palette, &dibtone::negative_lut(), Channels::RED);
//! assert_eq!(palette[0], Bgra { b: 10, g: 20, r: 225, a: 0 });
//! ```

use rgb::{Bgr, Bgra};

use crate::bytes::{self, COLOR_MASK, FULL_MASK};
use crate::{Channels, Error, Lut};

// ---------------------------------------------------------------------------
// LUT adjustment
// ---------------------------------------------------------------------------

/// Remap the selected channels of every palette entry.
///
/// Every channel, including the reserved byte, is addressable. Bits outside
/// [`Channels::ALL`] are ignored.
pub fn adjust_palette(palette: &mut [Bgra<u8>], lut: &Lut, channels: Channels) {
    adjust_bgra(palette, lut, channels);
}

/// Remap the selected channels of 32 bpp pixels.
pub fn adjust_bgra(pixels: &mut [Bgra<u8>], lut: &Lut, channels: Channels) {
    let n = pixels.len();
    let raw: &mut [u8] = bytemuck::cast_slice_mut(pixels);
    bytes::adjust_elements(raw, lut, channels & Channels::ALL, n, 4)
        .expect("typed slice is always valid");
}

/// Remap the selected channels of 24 bpp pixels.
///
/// [`Channels::ALPHA`] has no byte in a `Bgr<u8>` and is rejected with
/// [`Error::ChannelOutOfElement`].
pub fn adjust_bgr(pixels: &mut [Bgr<u8>], lut: &Lut, channels: Channels) -> Result<(), Error> {
    let n = pixels.len();
    let raw: &mut [u8] = bytemuck::cast_slice_mut(pixels);
    bytes::adjust_elements(raw, lut, channels, n, 3)
}

// ---------------------------------------------------------------------------
// Inversion
// ---------------------------------------------------------------------------

/// Invert the colors of every palette entry, keeping the reserved byte.
pub fn invert_palette(palette: &mut [Bgra<u8>]) {
    invert_bgra(palette);
}

/// Invert 32 bpp pixels, keeping alpha.
pub fn invert_bgra(pixels: &mut [Bgra<u8>]) {
    let raw: &mut [u8] = bytemuck::cast_slice_mut(pixels);
    bytes::invert_words(raw, COLOR_MASK).expect("typed slice is always valid");
}

/// Invert every byte of 24 bpp pixels.
pub fn invert_bgr(pixels: &mut [Bgr<u8>]) {
    let raw: &mut [u8] = bytemuck::cast_slice_mut(pixels);
    let (words, tail) = raw.split_at_mut(raw.len() & !3);
    bytes::invert_words(words, FULL_MASK).expect("split at a word boundary");
    for b in tail {
        *b = !*b;
    }
}
