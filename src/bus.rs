//! Blocking master-mode I2C transport.
//!
//! [`I2cPeripheral`] is the register-level capability a chip HAL provides.
//! [`BusTransport`] drives it through the start, address, data and stop
//! phases, gating each phase on the matching [`TransactionEvent`].

use crate::constants::{bus_config, LCD_ADDRESS};
use crate::wait::WaitPolicy;
use crate::LcdError;

/// R/W bit of the address byte.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Transmitter = 0,
    Receiver = 1,
}

/// Hardware status conditions a transaction waits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransactionEvent {
    /// Start condition generated, peripheral now in master mode.
    StartConditionGenerated,
    /// Address acknowledged, peripheral selected as transmitter.
    AddressAckAsTransmitter,
    /// Data byte shifted out and acknowledged.
    ByteTransferComplete,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DutyCycle {
    /// Tlow/Thigh = 2
    TwoToOne,
    /// Tlow/Thigh = 16/9
    SixteenToNine,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AckPolicy {
    Disabled,
    Enabled,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AddressingMode {
    SevenBit,
    TenBit,
}

/// Bus peripheral configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BusConfig {
    /// SCL frequency in Hz
    pub output_clock_hz: u32,
    pub own_address: u8,
    pub duty_cycle: DutyCycle,
    pub ack: AckPolicy,
    pub addressing: AddressingMode,
    /// Peripheral input clock in MHz
    pub input_clock_mhz: u8,
}

impl BusConfig {
    /// Settings the display controller is wired and timed for.
    pub const LCD: Self = Self {
        output_clock_hz: bus_config::OUTPUT_CLOCK_HZ,
        own_address: bus_config::OWN_ADDRESS,
        duty_cycle: DutyCycle::TwoToOne,
        ack: AckPolicy::Disabled,
        addressing: AddressingMode::SevenBit,
        input_clock_mhz: bus_config::INPUT_CLOCK_MHZ,
    };
}

impl Default for BusConfig {
    fn default() -> Self {
        Self::LCD
    }
}

/// Register-level access to an I2C peripheral in master mode.
///
/// None of these calls block; waiting is done by polling
/// [`check_event`](Self::check_event).
pub trait I2cPeripheral {
    fn set_enabled(&mut self, enabled: bool);

    /// Asserts (`true`) or releases (`false`) the peripheral's software reset.
    fn set_software_reset(&mut self, asserted: bool);

    /// Writes timing and addressing registers only; enable state is left
    /// to [`set_enabled`](Self::set_enabled).
    fn configure(&mut self, config: &BusConfig);

    fn generate_start(&mut self);

    fn generate_stop(&mut self);

    /// Loads `address << 1 | direction` into the data register.
    fn send_address(&mut self, address: u8, direction: Direction);

    fn send_data(&mut self, byte: u8);

    fn check_event(&mut self, event: TransactionEvent) -> bool;
}

impl<T: I2cPeripheral + ?Sized> I2cPeripheral for &mut T {
    fn set_enabled(&mut self, enabled: bool) {
        (**self).set_enabled(enabled)
    }

    fn set_software_reset(&mut self, asserted: bool) {
        (**self).set_software_reset(asserted)
    }

    fn configure(&mut self, config: &BusConfig) {
        (**self).configure(config)
    }

    fn generate_start(&mut self) {
        (**self).generate_start()
    }

    fn generate_stop(&mut self) {
        (**self).generate_stop()
    }

    fn send_address(&mut self, address: u8, direction: Direction) {
        (**self).send_address(address, direction)
    }

    fn send_data(&mut self, byte: u8) {
        (**self).send_data(byte)
    }

    fn check_event(&mut self, event: TransactionEvent) -> bool {
        (**self).check_event(event)
    }
}

pub struct BusTransport<P, W> {
    pub peripheral: P,
    pub wait: W,
}

impl<P, W> BusTransport<P, W>
where
    P: I2cPeripheral,
    W: WaitPolicy,
{
    pub fn new(peripheral: P, wait: W) -> Self {
        Self { peripheral, wait }
    }

    pub fn destroy(self) -> (P, W) {
        (self.peripheral, self.wait)
    }

    /// Applies [`BusConfig::LCD`] and switches the peripheral on.
    pub fn configure(&mut self) {
        self.peripheral.configure(&BusConfig::LCD);
        self.peripheral.set_enabled(true);
    }

    /// Puts the peripheral back into a freshly configured state.
    pub fn reset(&mut self) {
        #[cfg(feature = "defmt")]
        defmt::trace!("lcd bus reset");

        self.peripheral.set_enabled(false);
        self.peripheral.set_software_reset(true);
        self.peripheral.set_software_reset(false);
        self.configure();
    }

    pub fn start_condition(&mut self) -> Result<(), LcdError> {
        self.peripheral.generate_start();
        self.wait_for(TransactionEvent::StartConditionGenerated)
    }

    pub fn send_address(&mut self, direction: Direction) -> Result<(), LcdError> {
        self.peripheral.send_address(LCD_ADDRESS, direction);
        self.wait_for(TransactionEvent::AddressAckAsTransmitter)
    }

    pub fn send_byte(&mut self, value: u8) -> Result<(), LcdError> {
        self.peripheral.send_data(value);
        self.wait_for(TransactionEvent::ByteTransferComplete)
    }

    /// Fire-and-forget, stop generation is not awaited.
    pub fn stop_condition(&mut self) {
        self.peripheral.generate_stop();
    }

    fn wait_for(&mut self, event: TransactionEvent) -> Result<(), LcdError> {
        let peripheral = &mut self.peripheral;
        match self.wait.wait_until(|| peripheral.check_event(event)) {
            Ok(()) => Ok(()),
            Err(_) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("lcd bus stalled waiting for {}", event);

                // release the bus so the next transaction starts clean
                self.peripheral.generate_stop();
                Err(LcdError::TransactionTimeout(event))
            }
        }
    }
}
