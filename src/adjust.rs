use crate::bytes;
use crate::layout::COLOR_RECORD_SIZE;
use crate::{BitDepth, Bitmap, Channels, Error, Layout, Lut, Result};

/// Remap the selected `channels` of a bitmap through `lut`, in place.
///
/// Palette bitmaps (1/4/8 bpp) have their first
/// [`color_count`](Bitmap::color_count) palette records remapped and their
/// pixel indices left alone. Direct-color bitmaps (24/32 bpp) are remapped
/// scanline by scanline: `width` pixels starting at `row * pitch`, leaving
/// any pitch padding untouched.
///
/// # Errors
///
/// Nothing is written when an error is returned.
///
/// - [`Error::UnsupportedDepth`] for a bit depth outside {1, 4, 8, 24, 32}.
/// - [`Error::ChannelOutOfElement`] if `channels` selects a byte the layout
///   does not have, i.e. [`Channels::ALPHA`] on 24 bpp.
/// - [`Error::MissingPalette`] for a palette bitmap without a palette.
/// - [`Error::BufferTooShort`] / [`Error::InvalidStride`] when the buffers
///   do not match the reported geometry. Direct-color pixel data must span
///   `height * pitch` bytes, the same extent [`invert`](crate::invert)
///   requires.
pub fn adjust<B: Bitmap + ?Sized>(bitmap: &mut B, lut: &Lut, channels: Channels) -> Result<()> {
    let depth = BitDepth::try_from(bitmap.bit_depth()).inspect_err(|e| {
        ldebug!("adjust rejected: {}", e);
    })?;
    let layout = depth.layout();
    channels
        .check_element(layout.element_size())
        .inspect_err(|e| {
            ldebug!("adjust rejected for {:?}: {}", layout, e);
        })?;

    match layout {
        Layout::Indexed => {
            let colors = bitmap.color_count();
            ldebug!(
                "adjust {} bpp palette: {} colors, channels {:?}",
                depth.bits(),
                colors,
                channels
            );
            let palette = bitmap.palette_mut().ok_or(Error::MissingPalette)?;
            let bytes: &mut [u8] = bytemuck::cast_slice_mut(palette);
            bytes::adjust_elements(bytes, lut, channels, colors, COLOR_RECORD_SIZE)
        }
        Layout::Bgr24 | Layout::Bgra32 => {
            let (width, height, pitch) = (bitmap.width(), bitmap.height(), bitmap.pitch());
            ldebug!(
                "adjust {} bpp pixels: {}x{}, pitch {}, channels {:?}",
                depth.bits(),
                width,
                height,
                pitch,
                channels
            );
            if width == 0 || height == 0 {
                return Ok(());
            }
            let needed = pitch.checked_mul(height).ok_or(Error::InvalidStride)?;
            let pixels = bitmap.pixels_mut();
            if pixels.len() < needed {
                return Err(Error::BufferTooShort {
                    needed,
                    len: pixels.len(),
                });
            }
            bytes::adjust_strided(
                pixels,
                width,
                height,
                pitch,
                layout.element_size(),
                lut,
                channels,
            )
        }
    }
}
