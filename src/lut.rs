//! 256-entry lookup tables for [`adjust`](crate::adjust).
//!
//! Generators work in a normalized domain where offsets are fractions of
//! full scale: `lut[x] = saturate(round(scale * x + offset * 255))`.
//!
//! ```rust
//! let lut = dibtone::brightness_lut(25.0).unwrap();
//! assert_eq!(lut[0], 64);
//! assert_eq!(lut[200], 255);
//! ```

use crate::{Error, Result};

/// Maps an input channel value to an output channel value.
pub type Lut = [u8; 256];

/// `lut[x] = x`.
pub fn identity_lut() -> Lut {
    core::array::from_fn(|x| x as u8)
}

/// `lut[x] = 255 - x`.
pub fn negative_lut() -> Lut {
    core::array::from_fn(|x| 255 - x as u8)
}

/// Fill `lut` with `saturate(round(scale * x + offset * 255))`.
///
/// Halves round up. `lut` is left untouched if either parameter is not
/// finite.
pub fn build_linear_lut(lut: &mut Lut, scale: f64, offset: f64) -> Result<()> {
    if !scale.is_finite() || !offset.is_finite() {
        return Err(Error::NonFiniteParameter);
    }
    let bias = offset * 255.0;
    for (x, out) in lut.iter_mut().enumerate() {
        let v = (scale * x as f64 + bias).clamp(0.0, 255.0);
        *out = (v + 0.5) as u8;
    }
    ltrace!("linear lut: scale={} offset={}", scale, offset);
    Ok(())
}

/// Brightness shift by `percent` of full scale, nominally in [-100, 100].
///
/// Out-of-range values saturate instead of failing.
pub fn build_brightness_lut(lut: &mut Lut, percent: f64) -> Result<()> {
    build_linear_lut(lut, 1.0, percent / 100.0)
}

/// Contrast change by `percent`, pivoting around mid-gray (127.5).
///
/// `percent = 0` is the identity, `-100` collapses everything to mid-gray.
pub fn build_contrast_lut(lut: &mut Lut, percent: f64) -> Result<()> {
    let scale = percent / 100.0 + 1.0;
    build_linear_lut(lut, scale, -(scale - 1.0) / 2.0)
}

/// Fresh table from [`build_linear_lut`].
pub fn linear_lut(scale: f64, offset: f64) -> Result<Lut> {
    let mut lut = [0; 256];
    build_linear_lut(&mut lut, scale, offset)?;
    Ok(lut)
}

/// Fresh table from [`build_brightness_lut`].
pub fn brightness_lut(percent: f64) -> Result<Lut> {
    let mut lut = [0; 256];
    build_brightness_lut(&mut lut, percent)?;
    Ok(lut)
}

/// Fresh table from [`build_contrast_lut`].
pub fn contrast_lut(percent: f64) -> Result<Lut> {
    let mut lut = [0; 256];
    build_contrast_lut(&mut lut, percent)?;
    Ok(lut)
}
