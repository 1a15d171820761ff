use crate::{Channels, Error, Result};

/// XOR mask that flips the three color bytes of a little-endian word and
/// keeps byte 3 (reserved or alpha).
pub const COLOR_MASK: u32 = 0x00FF_FFFF;

/// XOR mask that flips every bit of a word.
pub const FULL_MASK: u32 = 0xFFFF_FFFF;

/// Size of one palette entry / 32 bpp pixel.
pub const COLOR_RECORD_SIZE: usize = 4;

/// Supported bits-per-pixel values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BitDepth {
    One,
    Four,
    Eight,
    TwentyFour,
    ThirtyTwo,
}

impl BitDepth {
    /// Every supported depth, ascending.
    pub const ALL: [BitDepth; 5] = [
        BitDepth::One,
        BitDepth::Four,
        BitDepth::Eight,
        BitDepth::TwentyFour,
        BitDepth::ThirtyTwo,
    ];

    /// Bits per pixel.
    pub const fn bits(self) -> u32 {
        match self {
            BitDepth::One => 1,
            BitDepth::Four => 4,
            BitDepth::Eight => 8,
            BitDepth::TwentyFour => 24,
            BitDepth::ThirtyTwo => 32,
        }
    }

    /// Storage strategy for this depth.
    pub const fn layout(self) -> Layout {
        match self {
            BitDepth::One | BitDepth::Four | BitDepth::Eight => Layout::Indexed,
            BitDepth::TwentyFour => Layout::Bgr24,
            BitDepth::ThirtyTwo => Layout::Bgra32,
        }
    }

    /// Palette entries addressable by a pixel index, `None` for direct color.
    pub const fn max_colors(self) -> Option<usize> {
        match self.layout() {
            Layout::Indexed => Some(1 << self.bits()),
            Layout::Bgr24 | Layout::Bgra32 => None,
        }
    }

    /// Smallest pitch that holds `width` pixels, in bytes.
    pub const fn min_pitch(self, width: usize) -> usize {
        (width * self.bits() as usize).div_ceil(8)
    }

    /// Pitch rounded up to a 4-byte boundary, as DIB scanlines are stored.
    pub const fn aligned_pitch(self, width: usize) -> usize {
        self.min_pitch(width).next_multiple_of(4)
    }
}

impl TryFrom<u32> for BitDepth {
    type Error = Error;

    fn try_from(bits: u32) -> Result<Self> {
        match bits {
            1 => Ok(BitDepth::One),
            4 => Ok(BitDepth::Four),
            8 => Ok(BitDepth::Eight),
            24 => Ok(BitDepth::TwentyFour),
            32 => Ok(BitDepth::ThirtyTwo),
            other => Err(Error::UnsupportedDepth(other)),
        }
    }
}

/// How color channels are stored for a given bit depth.
///
/// Adjustment and inversion both dispatch through this instead of matching on
/// raw depths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    /// Pixels are palette indices; colors live in 4-byte palette records.
    Indexed,
    /// Packed 3-byte B, G, R pixels.
    Bgr24,
    /// 4-byte B, G, R, A pixels.
    Bgra32,
}

impl Layout {
    /// Bytes per element: one palette record or one pixel.
    pub const fn element_size(self) -> usize {
        match self {
            Layout::Indexed | Layout::Bgra32 => COLOR_RECORD_SIZE,
            Layout::Bgr24 => 3,
        }
    }

    /// Channels that have a byte inside each element.
    pub const fn channels(self) -> Channels {
        Channels::fitting(self.element_size())
    }

    /// Mask XORed into each little-endian word by [`invert`](crate::invert).
    ///
    /// 24 bpp has no reserved byte, and its pixels straddle word boundaries,
    /// so every bit is flipped.
    pub const fn invert_mask(self) -> u32 {
        match self {
            Layout::Indexed | Layout::Bgra32 => COLOR_MASK,
            Layout::Bgr24 => FULL_MASK,
        }
    }

    pub const fn is_indexed(self) -> bool {
        matches!(self, Layout::Indexed)
    }
}
