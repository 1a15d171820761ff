//! Error type shared by every operation in the crate.
//!
//! All validation runs before the first write, so an `Err` always means the
//! caller's buffers are untouched.

use thiserror::Error;

use crate::Channels;

/// Broad category of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The request itself is malformed: geometry, buffer sizes, channel
    /// selection or LUT parameters.
    InvalidArgument,
    /// The bitmap uses a bit depth outside {1, 4, 8, 24, 32}.
    UnsupportedFormat,
}

/// Errors reported by bitmap and buffer operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Bit depth is not one of 1, 4, 8, 24 or 32.
    #[error("unsupported bit depth: {0} bpp")]
    UnsupportedDepth(u32),

    /// A selected channel has no byte inside an element of this size.
    #[error("channels {requested:?} do not fit in a {element_size}-byte element")]
    ChannelOutOfElement {
        requested: Channels,
        element_size: usize,
    },

    /// Indexed bitmap without a palette.
    #[error("indexed bitmap has no palette")]
    MissingPalette,

    /// Palette supplied for a direct-color depth.
    #[error("{0} bpp is a direct-color depth and takes no palette")]
    UnexpectedPalette(u32),

    /// Buffer holds fewer bytes than the operation addresses.
    #[error("buffer too short: need {needed} bytes, have {len}")]
    BufferTooShort { needed: usize, len: usize },

    /// Width, height and stride do not describe a valid strided buffer.
    #[error("invalid stride or dimensions")]
    InvalidStride,

    /// Word-wise inversion needs a whole number of 4-byte words.
    #[error("buffer of {len} bytes is not a whole number of 4-byte words")]
    NotWordAligned { len: usize },

    /// LUT scale or offset is NaN or infinite.
    #[error("LUT parameters must be finite")]
    NonFiniteParameter,
}

impl Error {
    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::UnsupportedDepth(_) => ErrorKind::UnsupportedFormat,
            _ => ErrorKind::InvalidArgument,
        }
    }
}

/// Result type alias for dibtone operations.
pub type Result<T> = core::result::Result<T, Error>;
