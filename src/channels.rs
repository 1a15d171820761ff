use bitflags::bitflags;

use crate::{Error, Result};

bitflags! {
    /// Set of BGRA channels to operate on.
    ///
    /// Bit `i` selects byte offset `i` inside a color record, matching the
    /// in-memory BGRA order: blue is byte 0, alpha (or reserved) is byte 3.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Channels: u8 {
        const BLUE = 1 << 0;
        const GREEN = 1 << 1;
        const RED = 1 << 2;
        const ALPHA = 1 << 3;
        const RGB = Self::BLUE.bits() | Self::GREEN.bits() | Self::RED.bits();
        const ALL = Self::RGB.bits() | Self::ALPHA.bits();
    }
}

impl Channels {
    /// Channels addressable in an element of `element_size` bytes.
    pub const fn fitting(element_size: usize) -> Channels {
        if element_size >= 4 {
            Channels::ALL
        } else {
            Channels::from_bits_truncate((1u8 << element_size) - 1)
        }
    }

    /// Byte offsets of the selected channels, ascending.
    pub fn offsets(self) -> impl Iterator<Item = usize> {
        (0..4).filter(move |&i| self.bits() & (1 << i) != 0)
    }

    /// Reject any selected channel whose byte lies outside the element.
    pub(crate) fn check_element(self, element_size: usize) -> Result<()> {
        if self.difference(Channels::fitting(element_size)).is_empty() {
            Ok(())
        } else {
            Err(Error::ChannelOutOfElement {
                requested: self,
                element_size,
            })
        }
    }
}
