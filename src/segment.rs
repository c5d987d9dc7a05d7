//! BCD value to segment RAM encoding.
//!
//! The glass wires segments so that each digit spills over into the RAM
//! byte of the next more significant digit. Every digit therefore has a
//! primary mask for its own byte and a carry mask for the byte above it.

use crate::constants::{
    DECIMAL_POINT, HUNDREDS, RAM_IMAGE_LEN, TENS, THOUSANDS_MARKER, UNITS,
};

/// Contents of the four segment RAM bytes for one display update.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RamImage(pub [u8; RAM_IMAGE_LEN]);

impl RamImage {
    /// All segments off.
    pub const BLANK: Self = Self([0x00; RAM_IMAGE_LEN]);

    /// Overflow glyph shown for values that are not four valid BCD digits.
    pub const ERROR: Self = Self([0x80, 0x40, 0x42, 0x00]);

    pub const fn bytes(&self) -> &[u8; RAM_IMAGE_LEN] {
        &self.0
    }
}

/// Maps a BCD `value` to its segment image.
///
/// The leading position can only show a `1`; a thousands nibble above 1, or
/// any other nibble above 9, yields [`RamImage::ERROR`] and `fraction` is
/// ignored.
pub fn encode(value: u16, fraction: bool) -> RamImage {
    if (value & 0xF000) > 0x1000
        || (value & 0x0F00) > 0x0900
        || (value & 0x00F0) > 0x0090
        || (value & 0x000F) > 0x0009
    {
        return RamImage::ERROR;
    }

    let mut image = [0u8; RAM_IMAGE_LEN];

    if fraction {
        image[1] |= DECIMAL_POINT;
    }

    if (value & 0xF000) == 0x1000 {
        image[3] |= THOUSANDS_MARKER;
    }

    // (table, nibble shift), ordered by RAM byte
    let digits: [(&[(u8, u8); 10], u16); 3] = [(&UNITS, 0), (&TENS, 4), (&HUNDREDS, 8)];
    for (byte, (table, shift)) in digits.into_iter().enumerate() {
        let nibble = ((value >> shift) & 0x000F) as usize;
        let Some(&(primary, carry)) = table.get(nibble) else {
            return RamImage::ERROR;
        };
        image[byte] |= primary;
        image[byte + 1] |= carry;
    }

    RamImage(image)
}

/// Converts a decimal number to packed BCD, or `None` past 9999.
pub fn to_bcd(number: u16) -> Option<u16> {
    if number > 9999 {
        return None;
    }
    let mut num = number;
    let mut bcd = 0;
    for i in 0..4 {
        bcd |= (num % 10) << (i * 4);
        num /= 10;
    }
    Some(bcd)
}
