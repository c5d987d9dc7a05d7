pub const LCD_ADDRESS: u8 = 0x38; // NXP PCF8576 slave address 0111000, SA0 tied low
pub const RAM_IMAGE_LEN: usize = 4;

/// RAM offset the controller expects a full image to start from.
pub const DIGITS_RAM_ORIGIN: u8 = 0x03;

pub const DECIMAL_POINT: u8 = 0x10; // byte 1
pub const THOUSANDS_MARKER: u8 = 0x20; // byte 3

/// Segment masks per digit as `(primary, carry)`. The primary mask goes into
/// the digit's own RAM byte, the carry mask into the next byte up.
pub const UNITS: [(u8, u8); 10] = [
    (0x0F, 0xA0),
    (0x06, 0x00),
    (0x0D, 0x60),
    (0x0F, 0x40),
    (0x06, 0xC0),
    (0x0B, 0xC0),
    (0x0B, 0xE0),
    (0x0E, 0x00),
    (0x0F, 0xE0),
    (0x0F, 0xC0),
];
pub const TENS: [(u8, u8); 10] = [
    (0x0F, 0xA0),
    (0x06, 0x00),
    (0x0D, 0x60),
    (0x0F, 0x40),
    (0x06, 0xC0),
    (0x0B, 0xC0),
    (0x0B, 0xE0),
    (0x0E, 0x00),
    (0x0F, 0xE0),
    (0x0F, 0xC0),
];
pub const HUNDREDS: [(u8, u8); 10] = [
    (0x1D, 0x50),
    (0x14, 0x00),
    (0x0F, 0x10),
    (0x1F, 0x00),
    (0x16, 0x40),
    (0x1B, 0x40),
    (0x1B, 0x50),
    (0x1C, 0x00),
    (0x1F, 0x50),
    (0x1F, 0x40),
];

pub mod command {
    // not from the PCF8576 command set; split so the three compose the 0x44
    // RAM-write select byte sent ahead of the origin
    pub const NEXT_COMMAND: u8 = 0x40; // bit 6 set: another command byte follows
    pub const SUBADDRESS_COMMAND: u8 = 0x04; // bit 2 set: subaddress select
    pub const SUBADDRESS_0: u8 = 0x00; // bits 1:0 clear: subaddress 0
    pub const RAM_WRITE: u8 = NEXT_COMMAND | SUBADDRESS_COMMAND | SUBADDRESS_0;

    pub const MODE_COMMAND: u8 = 0x40; // PCF8576 datasheet, mode-set: bits 6:5 = 10
    pub const DEVICE_ENABLE: u8 = 0x08; // PCF8576 mode-set bit 3 (E) set: display on
    pub const DEVICE_DISABLE: u8 = 0x00; // PCF8576 mode-set bit 3 (E) clear: display off
}

pub mod bus_config {
    pub const OUTPUT_CLOCK_HZ: u32 = 222_222;
    pub const OWN_ADDRESS: u8 = 0x00;
    pub const INPUT_CLOCK_MHZ: u8 = 4;
}
