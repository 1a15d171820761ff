//! Whole-image operations on [`imgref`] views.
//!
//! Each function works row by row; stride padding between rows is never
//! read or written. No allocation, and channels are validated before the
//! first row is touched.
//!
//! ```rust
//! use rgb::Bgr;
//! use ::imgref::ImgRefMut;
//! use dibtone::{Channels, imgref};
//!
//! // 2x2 image stored with a stride of 3 pixels.
//! let mut buf = vec![Bgr { b: 0u8, g: 100, r: 200 }; 5];
//! let img = ImgRefMut::new_stride(&mut buf, 2, 2, 3);
//! imgref::adjust_bgr(img, &dibtone::brightness_lut(20.0).unwrap(), Channels::RGB).unwrap();
//! assert_eq!(buf[0], Bgr { b: 51, g: 151, r: 251 });
//! assert_eq!(buf[2], Bgr { b: 0, g: 100, r: 200 });
//! ```

use imgref::ImgRefMut;
use rgb::{Bgr, Bgra};

use crate::bytes::{self, COLOR_MASK};
use crate::{Channels, Error, Lut, typed_rgb};

/// Remap the selected channels of a 32 bpp image.
pub fn adjust_bgra(
    mut img: ImgRefMut<'_, Bgra<u8>>,
    lut: &Lut,
    channels: Channels,
) -> Result<(), Error> {
    channels.check_element(4)?;
    for row in img.rows_mut() {
        typed_rgb::adjust_bgra(row, lut, channels);
    }
    Ok(())
}

/// Remap the selected channels of a 24 bpp image.
///
/// [`Channels::ALPHA`] is rejected before any row is written.
pub fn adjust_bgr(
    mut img: ImgRefMut<'_, Bgr<u8>>,
    lut: &Lut,
    channels: Channels,
) -> Result<(), Error> {
    channels.check_element(3)?;
    for row in img.rows_mut() {
        typed_rgb::adjust_bgr(row, lut, channels)?;
    }
    Ok(())
}

/// Invert a 32 bpp image, keeping alpha.
pub fn invert_bgra(mut img: ImgRefMut<'_, Bgra<u8>>) -> Result<(), Error> {
    let (w, h, stride) = (img.width(), img.height(), img.stride());
    if w == 0 || h == 0 {
        return Ok(());
    }
    let raw: &mut [u8] = bytemuck::cast_slice_mut(img.buf_mut());
    bytes::invert_words_strided(raw, w, h, stride * 4, 4, COLOR_MASK)
}

/// Invert every byte of a 24 bpp image.
pub fn invert_bgr(mut img: ImgRefMut<'_, Bgr<u8>>) {
    for row in img.rows_mut() {
        typed_rgb::invert_bgr(row);
    }
}
