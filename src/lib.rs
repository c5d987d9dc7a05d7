#![no_std]

mod bus;
mod constants;
mod protocol;
mod segment;
mod wait;

pub use bus::{
    AckPolicy, AddressingMode, BusConfig, BusTransport, Direction, DutyCycle, I2cPeripheral,
    TransactionEvent,
};
pub use constants::*;
pub use protocol::DisplayProtocol;
pub use segment::{encode, to_bcd, RamImage};
pub use wait::{SpinForever, SpinWithTimeout, WaitExpired, WaitPolicy, YieldAndRetry};

use num_traits::ToPrimitive;

/// One-time board bring-up the driver needs before the bus can be used.
pub trait BoardSetup {
    fn enable_bus_clock(&mut self);
    fn configure_bus_pins(&mut self);
}

pub struct SegmentLcd<P, W> {
    protocol: DisplayProtocol<P, W>,
}

impl<P, W> SegmentLcd<P, W>
where
    P: I2cPeripheral,
    W: WaitPolicy,
{
    pub fn new(peripheral: P, wait: W) -> Self {
        Self {
            protocol: DisplayProtocol::new(BusTransport::new(peripheral, wait)),
        }
    }

    pub fn destroy(self) -> (P, W) {
        self.protocol.destroy().destroy()
    }

    /// Enables the bus clock, sets up the pins, then configures and enables
    /// the peripheral. No bus traffic is generated.
    pub fn init<B: BoardSetup>(&mut self, board: &mut B) {
        board.enable_bus_clock();
        board.configure_bus_pins();
        self.protocol.transport.configure();
    }

    pub fn enable_device(&mut self) -> Result<(), LcdError> {
        self.protocol.enable_device()
    }

    pub fn disable_device(&mut self) -> Result<(), LcdError> {
        self.protocol.disable_device()
    }

    pub fn write_ram(&mut self, buffer: &[u8], origin: u8, count: u8) -> Result<(), LcdError> {
        self.protocol.write_ram(buffer, origin, count)
    }

    /// Shows a 4-digit BCD `value`, with the decimal point when `fraction` is
    /// set. Values the glass cannot show render the error glyph instead.
    pub fn draw_digits(&mut self, value: u16, fraction: bool) -> Result<(), LcdError> {
        self.write_image(&encode(value, fraction))
    }

    /// Like [`draw_digits`](Self::draw_digits) but takes a plain decimal
    /// number. Anything outside 0..=1999 renders the error glyph.
    pub fn draw_number<T>(&mut self, number: T, fraction: bool) -> Result<(), LcdError>
    where
        T: ToPrimitive,
    {
        let image = number
            .to_u16()
            .and_then(to_bcd)
            .map_or(RamImage::ERROR, |bcd| encode(bcd, fraction));
        self.write_image(&image)
    }

    pub fn clear(&mut self) -> Result<(), LcdError> {
        self.write_image(&RamImage::BLANK)
    }

    fn write_image(&mut self, image: &RamImage) -> Result<(), LcdError> {
        self.protocol
            .write_ram(image.bytes(), DIGITS_RAM_ORIGIN, RAM_IMAGE_LEN as u8)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LcdError {
    /// The wait policy gave up on this event. A stop condition has been
    /// issued.
    TransactionTimeout(TransactionEvent),
    BufferTooShort { needed: u8, available: usize },
}
