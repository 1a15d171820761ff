use crate::bytes;
use crate::layout::COLOR_RECORD_SIZE;
use crate::{BitDepth, Bitmap, Error, Layout, Result};

/// Flip every color bit of a bitmap, in place.
///
/// Palette bitmaps have their first [`color_count`](Bitmap::color_count)
/// palette records inverted. Direct-color bitmaps have the first
/// `pitch * height` bytes of pixel data inverted as little-endian 4-byte
/// words, padding included. The reserved byte of palette records and the
/// alpha byte of 32 bpp pixels are kept; 24 bpp has no such byte and every
/// bit flips. Calling `invert` twice restores the original bitmap.
///
/// # Errors
///
/// Nothing is written when an error is returned.
///
/// - [`Error::UnsupportedDepth`] for a bit depth outside {1, 4, 8, 24, 32}.
/// - [`Error::MissingPalette`] for a palette bitmap without a palette.
/// - [`Error::NotWordAligned`] if `pitch * height` is not a multiple of 4.
/// - [`Error::BufferTooShort`] when the buffers are smaller than reported.
pub fn invert<B: Bitmap + ?Sized>(bitmap: &mut B) -> Result<()> {
    let depth = BitDepth::try_from(bitmap.bit_depth()).inspect_err(|e| {
        ldebug!("invert rejected: {}", e);
    })?;
    let layout = depth.layout();
    let mask = layout.invert_mask();

    let (words, len): (&mut [u8], usize) = match layout {
        Layout::Indexed => {
            let colors = bitmap.color_count();
            let palette = bitmap.palette_mut().ok_or(Error::MissingPalette)?;
            let len = colors
                .checked_mul(COLOR_RECORD_SIZE)
                .ok_or(Error::InvalidStride)?;
            (bytemuck::cast_slice_mut(palette), len)
        }
        Layout::Bgr24 | Layout::Bgra32 => {
            let len = bitmap
                .pitch()
                .checked_mul(bitmap.height())
                .ok_or(Error::InvalidStride)?;
            (bitmap.pixels_mut(), len)
        }
    };
    if words.len() < len {
        return Err(Error::BufferTooShort {
            needed: len,
            len: words.len(),
        });
    }
    ldebug!(
        "invert {} bpp {:?}: {} bytes, mask {:#010x}",
        depth.bits(),
        layout,
        len,
        mask
    );
    bytes::invert_words(&mut words[..len], mask)
}

#[cfg(test)]
mod tests {
    extern crate alloc;
    use super::*;
    use crate::{ColorRecord, DibMut};
    use alloc::{vec, vec::Vec};

    fn pattern(n: usize) -> Vec<u8> {
        (0..n).map(|i| (i * 13 % 251) as u8).collect()
    }

    fn palette(n: usize) -> Vec<ColorRecord> {
        (0..n)
            .map(|i| ColorRecord::from_bgra([i as u8, 0x80, (255 - i) as u8, 0x5A]))
            .collect()
    }

    #[test]
    fn bgra32_single_pixel() {
        let mut pixels = vec![0x00, 0xFF, 0x10, 0x80];
        let mut dib = DibMut::direct(&mut pixels, 1, 1, 4, BitDepth::ThirtyTwo).unwrap();
        invert(&mut dib).unwrap();
        assert_eq!(pixels, [0xFF, 0x00, 0xEF, 0x80]);
    }

    #[test]
    fn twice_restores_every_depth() {
        for depth in BitDepth::ALL {
            let (w, h) = (11, 5);
            let pitch = depth.aligned_pitch(w);
            let orig_pixels = pattern(pitch * h);
            let orig_pal = palette(depth.max_colors().unwrap_or(0).min(16));
            let mut pixels = orig_pixels.clone();
            let mut pal = orig_pal.clone();
            let mut dib = if depth.layout().is_indexed() {
                DibMut::indexed(&mut pixels, &mut pal, w, h, pitch, depth).unwrap()
            } else {
                DibMut::direct(&mut pixels, w, h, pitch, depth).unwrap()
            };
            invert(&mut dib).unwrap();
            invert(&mut dib).unwrap();
            assert_eq!(pixels, orig_pixels, "{depth:?}");
            assert_eq!(pal, orig_pal, "{depth:?}");
        }
    }

    #[test]
    fn palette_keeps_reserved_and_pixels() {
        for depth in [BitDepth::One, BitDepth::Four, BitDepth::Eight] {
            let orig_pal = palette(depth.max_colors().unwrap().min(16));
            let orig_pixels = pattern(8);
            let mut pal = orig_pal.clone();
            let mut pixels = orig_pixels.clone();
            let mut dib = DibMut::indexed(&mut pixels, &mut pal, 2, 2, 4, depth).unwrap();
            invert(&mut dib).unwrap();
            assert_eq!(pixels, orig_pixels);
            for (new, old) in pal.iter().zip(&orig_pal) {
                assert_eq!(new.blue, !old.blue);
                assert_eq!(new.green, !old.green);
                assert_eq!(new.red, !old.red);
                assert_eq!(new.reserved, old.reserved);
            }
        }
    }

    #[test]
    fn bgra32_keeps_alpha() {
        let (w, h) = (6, 3);
        let orig = pattern(w * 4 * h);
        let mut pixels = orig.clone();
        let mut dib = DibMut::direct(&mut pixels, w, h, w * 4, BitDepth::ThirtyTwo).unwrap();
        invert(&mut dib).unwrap();
        for (i, (new, old)) in pixels.iter().zip(&orig).enumerate() {
            if i % 4 == 3 {
                assert_eq!(new, old, "alpha byte {i}");
            } else {
                assert_eq!(*new, !*old, "color byte {i}");
            }
        }
    }

    #[test]
    fn bgr24_flips_every_byte() {
        // 5 pixels = 15 bytes, padded to 16.
        let (w, h) = (5, 4);
        let pitch = BitDepth::TwentyFour.aligned_pitch(w);
        let orig = pattern(pitch * h);
        let mut pixels = orig.clone();
        let mut dib = DibMut::direct(&mut pixels, w, h, pitch, BitDepth::TwentyFour).unwrap();
        invert(&mut dib).unwrap();
        assert!(pixels.iter().zip(&orig).all(|(new, old)| *new == !*old));
    }

    #[test]
    fn unaligned_buffer_rejected_untouched() {
        // pitch 3 * height 3 = 9 bytes: not whole words.
        let orig = pattern(9);
        let mut pixels = orig.clone();
        let mut dib = DibMut::direct(&mut pixels, 1, 3, 3, BitDepth::TwentyFour).unwrap();
        assert_eq!(invert(&mut dib), Err(Error::NotWordAligned { len: 9 }));
        assert_eq!(pixels, orig);
    }

    #[test]
    fn only_addressed_bytes_change() {
        let orig = pattern(40);
        let mut pixels = orig.clone();
        let mut dib = DibMut::direct(&mut pixels, 2, 4, 8, BitDepth::ThirtyTwo).unwrap();
        invert(&mut dib).unwrap();
        assert_eq!(&pixels[32..], &orig[32..]);
    }

    struct RawBitmap {
        depth: u32,
        pixels: Vec<u8>,
        palette: Option<Vec<ColorRecord>>,
        colors: usize,
    }

    impl Bitmap for RawBitmap {
        fn bit_depth(&self) -> u32 {
            self.depth
        }
        fn width(&self) -> usize {
            2
        }
        fn height(&self) -> usize {
            2
        }
        fn pitch(&self) -> usize {
            8
        }
        fn color_count(&self) -> usize {
            self.colors
        }
        fn pixels_mut(&mut self) -> &mut [u8] {
            &mut self.pixels
        }
        fn palette_mut(&mut self) -> Option<&mut [ColorRecord]> {
            self.palette.as_deref_mut()
        }
    }

    #[test]
    fn unsupported_depth_rejected_untouched() {
        let mut bmp = RawBitmap {
            depth: 16,
            pixels: pattern(16),
            palette: None,
            colors: 0,
        };
        assert_eq!(invert(&mut bmp), Err(Error::UnsupportedDepth(16)));
        assert_eq!(bmp.pixels, pattern(16));
    }

    #[test]
    fn missing_or_short_palette_rejected() {
        let mut bmp = RawBitmap {
            depth: 1,
            pixels: pattern(16),
            palette: None,
            colors: 2,
        };
        assert_eq!(invert(&mut bmp), Err(Error::MissingPalette));

        bmp.palette = Some(palette(1));
        assert_eq!(
            invert(&mut bmp),
            Err(Error::BufferTooShort { needed: 8, len: 4 })
        );
        assert_eq!(bmp.palette.as_deref(), Some(palette(1).as_slice()));
    }

    #[test]
    fn short_pixel_buffer_rejected() {
        let mut bmp = RawBitmap {
            depth: 24,
            pixels: pattern(12),
            palette: None,
            colors: 0,
        };
        assert_eq!(
            invert(&mut bmp),
            Err(Error::BufferTooShort { needed: 16, len: 12 })
        );
    }
}
