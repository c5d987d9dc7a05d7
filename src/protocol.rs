//! Display controller transactions.
//!
//! Each transaction resets and reconfigures the bus before its start
//! condition, so nothing left over from a previous exchange carries into the
//! next one.

use crate::bus::{BusTransport, Direction, I2cPeripheral};
use crate::constants::command;
use crate::wait::WaitPolicy;
use crate::LcdError;

pub struct DisplayProtocol<P, W> {
    pub transport: BusTransport<P, W>,
}

impl<P, W> DisplayProtocol<P, W>
where
    P: I2cPeripheral,
    W: WaitPolicy,
{
    pub fn new(transport: BusTransport<P, W>) -> Self {
        Self { transport }
    }

    pub fn destroy(self) -> BusTransport<P, W> {
        self.transport
    }

    pub fn enable_device(&mut self) -> Result<(), LcdError> {
        self.transaction(&[command::MODE_COMMAND | command::DEVICE_ENABLE], &[])
    }

    pub fn disable_device(&mut self) -> Result<(), LcdError> {
        self.transaction(&[command::MODE_COMMAND | command::DEVICE_DISABLE], &[])
    }

    /// Writes the first `count` bytes of `buffer` into display RAM starting
    /// at `origin`. A `count` of zero sends only the command and origin.
    pub fn write_ram(&mut self, buffer: &[u8], origin: u8, count: u8) -> Result<(), LcdError> {
        let data = buffer
            .get(..count as usize)
            .ok_or(LcdError::BufferTooShort {
                needed: count,
                available: buffer.len(),
            })?;
        self.transaction(&[command::RAM_WRITE, origin], data)
    }

    fn transaction(&mut self, header: &[u8], data: &[u8]) -> Result<(), LcdError> {
        self.transport.reset();
        self.transport.start_condition()?;
        self.transport.send_address(Direction::Transmitter)?;
        for &byte in header.iter().chain(data) {
            self.transport.send_byte(byte)?;
        }
        self.transport.stop_condition();
        Ok(())
    }
}
