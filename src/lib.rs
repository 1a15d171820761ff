//! # dibtone
//!
//! In-place tone adjustment for device-independent bitmaps.
//!
//! Two operations cover every supported bit depth behind a single contract:
//!
//! - [`adjust`] remaps selected BGRA channels through a 256-entry [`Lut`].
//!   Palette bitmaps (1/4/8 bpp) have their palette remapped; direct-color
//!   bitmaps (24/32 bpp) are remapped scanline by scanline, leaving pitch
//!   padding alone.
//! - [`invert`] flips every color bit. The reserved byte of palette entries
//!   and the alpha byte of 32 bpp pixels are preserved.
//!
//! ```rust
//! use dibtone::{BitDepth, Channels, ColorRecord, DibMut};
//!
//! let mut pixels = vec![0u8; 4];
//! let mut palette = vec![ColorRecord::new(30, 20, 10); 4];
//! let mut dib = DibMut::indexed(&mut pixels, &mut palette, 4, 1, 4, BitDepth::Eight).unwrap();
//!
//! dibtone::adjust(&mut dib, &dibtone::negative_lut(), Channels::RED).unwrap();
//! assert_eq!(palette[0], ColorRecord::new(225, 20, 10));
//! ```
//!
//! ## Core operations (always available)
//!
//! The [`bytes`] module exposes the raw `&mut [u8]` primitives the bitmap
//! operations are built on. Inversion is SIMD-accelerated on x86-64 AVX2,
//! ARM NEON, and WASM SIMD128 with automatic fallback to scalar code.
//!
//! ## Feature flags
//!
//! - **`rgb`**: Typed operations on [`rgb`] pixel slices (`Bgr<u8>`,
//!   `Bgra<u8>`) via bytemuck.
//! - **`imgref`**: Whole-image operations on [`imgref`] views. Implies `rgb`.
//! - **`logging`**: Emit `debug`/`trace` records through the `log` crate.

#![no_std]
#![forbid(unsafe_code)]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

#[macro_use]
mod log;

mod adjust;
mod bitmap;
pub mod bytes;
mod channels;
mod error;
mod invert;
mod layout;
pub mod lut;

pub use adjust::adjust;
pub use bitmap::{Bitmap, ColorRecord, DibMut};
pub use channels::Channels;
pub use error::{Error, ErrorKind, Result};
pub use invert::invert;
pub use layout::{BitDepth, Layout};
pub use lut::{
    Lut, brightness_lut, build_brightness_lut, build_contrast_lut, build_linear_lut, contrast_lut,
    identity_lut, linear_lut, negative_lut,
};

#[cfg(feature = "rgb")]
pub mod typed_rgb;

#[cfg(feature = "imgref")]
pub mod imgref;
