//! Polling strategies for bus status events.
//!
//! Every phase of a transaction waits for a hardware flag. How long to wait,
//! and what to do between polls, is decided by a [`WaitPolicy`] handed to the
//! driver at construction.

use embedded_hal::delay::DelayNs;

/// The condition did not hold before the policy gave up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WaitExpired;

pub trait WaitPolicy {
    /// Polls `condition` until it returns `true` or the policy runs out.
    fn wait_until<F>(&mut self, condition: F) -> Result<(), WaitExpired>
    where
        F: FnMut() -> bool;
}

impl<T: WaitPolicy + ?Sized> WaitPolicy for &mut T {
    fn wait_until<F>(&mut self, condition: F) -> Result<(), WaitExpired>
    where
        F: FnMut() -> bool,
    {
        (**self).wait_until(condition)
    }
}

/// Busy-waits with no upper bound. A device that never answers hangs the
/// caller.
#[derive(Clone, Copy, Debug, Default)]
pub struct SpinForever;

impl WaitPolicy for SpinForever {
    fn wait_until<F>(&mut self, mut condition: F) -> Result<(), WaitExpired>
    where
        F: FnMut() -> bool,
    {
        while !condition() {
            core::hint::spin_loop();
        }
        Ok(())
    }
}

/// Busy-waits for at most `max_polls` checks of the condition, never fewer
/// than one.
#[derive(Clone, Copy, Debug)]
pub struct SpinWithTimeout {
    pub max_polls: u32,
}

impl SpinWithTimeout {
    pub const fn new(max_polls: u32) -> Self {
        Self { max_polls }
    }
}

impl Default for SpinWithTimeout {
    fn default() -> Self {
        // a few milliseconds at the 222 kHz bus clock on a 16 MHz core
        Self::new(10_000)
    }
}

impl WaitPolicy for SpinWithTimeout {
    fn wait_until<F>(&mut self, mut condition: F) -> Result<(), WaitExpired>
    where
        F: FnMut() -> bool,
    {
        for _ in 0..self.max_polls.max(1) {
            if condition() {
                return Ok(());
            }
            core::hint::spin_loop();
        }
        Err(WaitExpired)
    }
}

/// Sleeps `interval_us` between checks, up to `attempts` checks (at least
/// one).
pub struct YieldAndRetry<D> {
    delay: D,
    interval_us: u32,
    attempts: u32,
}

impl<D: DelayNs> YieldAndRetry<D> {
    pub fn new(delay: D, interval_us: u32, attempts: u32) -> Self {
        Self {
            delay,
            interval_us,
            attempts,
        }
    }

    pub fn destroy(self) -> D {
        self.delay
    }
}

impl<D: DelayNs> WaitPolicy for YieldAndRetry<D> {
    fn wait_until<F>(&mut self, mut condition: F) -> Result<(), WaitExpired>
    where
        F: FnMut() -> bool,
    {
        let attempts = self.attempts.max(1);
        for attempt in 0..attempts {
            if condition() {
                return Ok(());
            }
            // no point sleeping after the last check
            if attempt + 1 < attempts {
                self.delay.delay_us(self.interval_us);
            }
        }
        Err(WaitExpired)
    }
}
