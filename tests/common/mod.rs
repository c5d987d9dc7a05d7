#![allow(dead_code)]

use seglcd::{BoardSetup, BusConfig, Direction, I2cPeripheral, TransactionEvent};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Enable(bool),
    SoftwareReset(bool),
    Configure(BusConfig),
    Start,
    Stop,
    Address(u8, Direction),
    Data(u8),
}

/// Records every register-level call. Events are reported as soon as they
/// are polled, unless listed in `stalled` or the peripheral is switched off.
#[derive(Default)]
pub struct MockI2c {
    pub ops: Vec<Op>,
    pub stalled: Vec<TransactionEvent>,
    pub polls: usize,
    pub enabled: bool,
}

impl MockI2c {
    pub fn stalled_on(event: TransactionEvent) -> Self {
        Self {
            stalled: vec![event],
            ..Self::default()
        }
    }

    /// Bytes that went out on the wire, address byte included.
    pub fn wire_bytes(&self) -> Vec<u8> {
        self.ops
            .iter()
            .filter_map(|op| match *op {
                Op::Address(address, direction) => Some(address << 1 | direction as u8),
                Op::Data(byte) => Some(byte),
                _ => None,
            })
            .collect()
    }
}

impl I2cPeripheral for MockI2c {
    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        self.ops.push(Op::Enable(enabled));
    }

    fn set_software_reset(&mut self, asserted: bool) {
        self.ops.push(Op::SoftwareReset(asserted));
    }

    fn configure(&mut self, config: &BusConfig) {
        self.ops.push(Op::Configure(*config));
    }

    fn generate_start(&mut self) {
        self.ops.push(Op::Start);
    }

    fn generate_stop(&mut self) {
        self.ops.push(Op::Stop);
    }

    fn send_address(&mut self, address: u8, direction: Direction) {
        self.ops.push(Op::Address(address, direction));
    }

    fn send_data(&mut self, byte: u8) {
        self.ops.push(Op::Data(byte));
    }

    fn check_event(&mut self, event: TransactionEvent) -> bool {
        self.polls += 1;
        self.enabled && !self.stalled.contains(&event)
    }
}

#[derive(Default)]
pub struct MockBoard {
    pub calls: Vec<&'static str>,
}

impl BoardSetup for MockBoard {
    fn enable_bus_clock(&mut self) {
        self.calls.push("clock");
    }

    fn configure_bus_pins(&mut self) {
        self.calls.push("pins");
    }
}

/// Register calls of one complete transaction carrying `payload`.
pub fn transaction(payload: &[u8]) -> Vec<Op> {
    let mut ops = vec![
        Op::Enable(false),
        Op::SoftwareReset(true),
        Op::SoftwareReset(false),
        Op::Configure(BusConfig::LCD),
        Op::Enable(true),
        Op::Start,
        Op::Address(seglcd::LCD_ADDRESS, Direction::Transmitter),
    ];
    ops.extend(payload.iter().map(|&byte| Op::Data(byte)));
    ops.push(Op::Stop);
    ops
}
