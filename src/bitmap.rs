//! The bitmap seam: what [`adjust`](crate::adjust) and
//! [`invert`](crate::invert) need from an in-memory bitmap, and a borrowed
//! view implementing it over caller-owned buffers.

use bytemuck::{Pod, Zeroable};

use crate::{BitDepth, Error, Result};

/// One palette entry, also the layout of a 32 bpp pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
#[repr(C)]
pub struct ColorRecord {
    pub blue: u8,
    pub green: u8,
    pub red: u8,
    /// Unused by color rendering; never touched by inversion.
    pub reserved: u8,
}

impl ColorRecord {
    /// Record with the reserved byte cleared.
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self {
            blue,
            green,
            red,
            reserved: 0,
        }
    }

    /// Record from bytes in storage order (B, G, R, reserved).
    pub const fn from_bgra(bytes: [u8; 4]) -> Self {
        Self {
            blue: bytes[0],
            green: bytes[1],
            red: bytes[2],
            reserved: bytes[3],
        }
    }
}

/// Accessors for an in-memory bitmap.
///
/// Implementors guarantee that [`pixels_mut`](Bitmap::pixels_mut) spans at
/// least `height * pitch` bytes and that the palette, when present, holds at
/// least [`color_count`](Bitmap::color_count) records. The operations still
/// check both and report [`Error::BufferTooShort`] instead of indexing out of
/// bounds.
pub trait Bitmap {
    /// Bits per pixel. Values outside {1, 4, 8, 24, 32} are rejected by the
    /// operations as unsupported.
    fn bit_depth(&self) -> u32;

    /// Width in pixels.
    fn width(&self) -> usize;

    /// Height in scanlines.
    fn height(&self) -> usize;

    /// Distance in bytes between the starts of consecutive scanlines.
    fn pitch(&self) -> usize;

    /// Palette entries in use. Only meaningful for bit depths up to 8.
    fn color_count(&self) -> usize;

    /// Pixel data, scanline 0 first.
    fn pixels_mut(&mut self) -> &mut [u8];

    /// Palette, if the bitmap has one.
    fn palette_mut(&mut self) -> Option<&mut [ColorRecord]>;
}

/// Mutable bitmap view over caller-owned pixel and palette buffers.
///
/// Construction checks geometry once; the view never allocates.
#[derive(Debug)]
pub struct DibMut<'a> {
    depth: BitDepth,
    width: usize,
    height: usize,
    pitch: usize,
    pixels: &'a mut [u8],
    palette: Option<&'a mut [ColorRecord]>,
}

impl<'a> DibMut<'a> {
    /// View over a direct-color (24 or 32 bpp) pixel buffer.
    ///
    /// Indexed depths need a palette and are refused with
    /// [`Error::MissingPalette`]; use [`DibMut::indexed`] for them.
    pub fn direct(
        pixels: &'a mut [u8],
        width: usize,
        height: usize,
        pitch: usize,
        depth: BitDepth,
    ) -> Result<Self> {
        if depth.layout().is_indexed() {
            return Err(Error::MissingPalette);
        }
        check_geometry(pixels.len(), width, height, pitch, depth)?;
        Ok(Self {
            depth,
            width,
            height,
            pitch,
            pixels,
            palette: None,
        })
    }

    /// View over a palette (1, 4 or 8 bpp) bitmap. Every palette record
    /// counts as a color in use.
    pub fn indexed(
        pixels: &'a mut [u8],
        palette: &'a mut [ColorRecord],
        width: usize,
        height: usize,
        pitch: usize,
        depth: BitDepth,
    ) -> Result<Self> {
        if !depth.layout().is_indexed() {
            return Err(Error::UnexpectedPalette(depth.bits()));
        }
        check_geometry(pixels.len(), width, height, pitch, depth)?;
        Ok(Self {
            depth,
            width,
            height,
            pitch,
            pixels,
            palette: Some(palette),
        })
    }

    /// Validated bit depth of the view.
    pub fn depth(&self) -> BitDepth {
        self.depth
    }
}

fn check_geometry(
    len: usize,
    width: usize,
    height: usize,
    pitch: usize,
    depth: BitDepth,
) -> Result<()> {
    let row_bytes = width
        .checked_mul(depth.bits() as usize)
        .ok_or(Error::InvalidStride)?
        .div_ceil(8);
    if row_bytes > pitch {
        return Err(Error::InvalidStride);
    }
    let needed = height.checked_mul(pitch).ok_or(Error::InvalidStride)?;
    if len < needed {
        return Err(Error::BufferTooShort { needed, len });
    }
    Ok(())
}

impl Bitmap for DibMut<'_> {
    fn bit_depth(&self) -> u32 {
        self.depth.bits()
    }

    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn pitch(&self) -> usize {
        self.pitch
    }

    fn color_count(&self) -> usize {
        self.palette.as_deref().map_or(0, <[ColorRecord]>::len)
    }

    fn pixels_mut(&mut self) -> &mut [u8] {
        &mut *self.pixels
    }

    fn palette_mut(&mut self) -> Option<&mut [ColorRecord]> {
        self.palette.as_deref_mut()
    }
}

#[cfg(test)]
mod tests {
    extern crate alloc;
    use super::*;
    use alloc::vec;

    #[test]
    fn color_record_is_bgra_bytes() {
        let rec = ColorRecord::new(30, 20, 10);
        assert_eq!(bytemuck::bytes_of(&rec), &[10, 20, 30, 0]);
        assert_eq!(ColorRecord::from_bgra([1, 2, 3, 4]).reserved, 4);
    }

    #[test]
    fn direct_view_checks_geometry() {
        let mut buf = vec![0u8; 16 * 3];
        assert!(DibMut::direct(&mut buf, 5, 3, 16, BitDepth::TwentyFour).is_ok());
        assert_eq!(
            DibMut::direct(&mut buf, 6, 3, 16, BitDepth::TwentyFour).unwrap_err(),
            Error::InvalidStride
        );
        assert_eq!(
            DibMut::direct(&mut buf, 4, 4, 16, BitDepth::ThirtyTwo).unwrap_err(),
            Error::BufferTooShort { needed: 64, len: 48 }
        );
        assert_eq!(
            DibMut::direct(&mut buf, 4, 3, 16, BitDepth::Eight).unwrap_err(),
            Error::MissingPalette
        );
    }

    #[test]
    fn indexed_view_counts_palette() {
        let mut pixels = vec![0u8; 8];
        let mut palette = vec![ColorRecord::default(); 16];
        let mut dib = DibMut::indexed(&mut pixels, &mut palette, 3, 2, 4, BitDepth::Four).unwrap();
        assert_eq!(dib.color_count(), 16);
        assert_eq!(dib.bit_depth(), 4);
        assert!(dib.palette_mut().is_some());
    }

    #[test]
    fn indexed_view_rejects_direct_depth() {
        let mut pixels = vec![0u8; 8];
        let mut palette = vec![ColorRecord::default(); 2];
        assert_eq!(
            DibMut::indexed(&mut pixels, &mut palette, 1, 2, 4, BitDepth::ThirtyTwo).unwrap_err(),
            Error::UnexpectedPalette(32)
        );
        let err = DibMut::indexed(&mut pixels, &mut palette, 1, 2, 4, BitDepth::TwentyFour)
            .unwrap_err();
        assert_eq!(err, Error::UnexpectedPalette(24));
        assert_eq!(err.kind(), crate::ErrorKind::InvalidArgument);
    }

    #[test]
    fn views_report_their_depth() {
        let mut pixels = vec![0u8; 24];
        let dib = DibMut::direct(&mut pixels, 2, 2, 12, BitDepth::TwentyFour).unwrap();
        assert_eq!(dib.depth(), BitDepth::TwentyFour);
        assert_eq!(dib.depth().bits(), dib.bit_depth());
        drop(dib);

        let mut palette = vec![ColorRecord::default(); 2];
        let dib = DibMut::indexed(&mut pixels, &mut palette, 8, 2, 4, BitDepth::One).unwrap();
        assert_eq!(dib.depth(), BitDepth::One);
        assert!(dib.depth().layout().is_indexed());
    }
}
