//! Transmit-loop driver for a UART uplink to an FPGA, with an LED mirroring
//! the outgoing frame, built on the `embedded-hal` 0.2 traits for `no_std`
//! environments.
//!
//! # Overview
//!
//! [`Uplink`] owns a serial transmitter, an indicator pin and a delay
//! provider. Each iteration it writes one frame byte with a blocking serial
//! write, pulses the LED (high if the byte is non-zero, then low), and waits
//! out the configured period. That is the whole machine: no framing, no
//! buffering, no acknowledgment, no state beyond [`UplinkConfig`].
//!
//! # Error behavior
//!
//! Serial and pin errors are discarded. There is no retry path and no
//! reporting path; a transmitter that never completes blocks the loop
//! forever. Adding retries here would change the observable cadence on the
//! wire, so the gap is documented rather than papered over.
//!
//! # Hardware assumptions
//!
//! - The serial transmitter is already configured (baud rate, word length,
//!   parity) by the board crate.
//! - The LED pin is push-pull and active high.
//! - The delay provider is millisecond-accurate enough that the period is
//!   the dominant term of the cadence.

#![cfg_attr(not(test), no_std)]

use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::digital::v2::OutputPin;
use embedded_hal::serial::Write;
use nb::block;

/// Frame byte observed on the wire, `0b1010_0001`.
pub const DEFAULT_FRAME: u8 = 0xA1;

/// Pause between frames, in milliseconds.
pub const DEFAULT_PERIOD_MS: u32 = 100;

/// Knobs for the transmit loop.
///
/// Both values are fixed for the lifetime of the [`Uplink`]; the struct
/// exists so the constants are named in one place, not so they vary at
/// runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UplinkConfig {
    /// Byte written on every iteration.
    pub frame: u8,
    /// Delay after each LED pulse, in milliseconds.
    pub period_ms: u32,
}

impl Default for UplinkConfig {
    fn default() -> Self {
        UplinkConfig {
            frame: DEFAULT_FRAME,
            period_ms: DEFAULT_PERIOD_MS,
        }
    }
}

/// The uplink beacon: one serial transmitter, one LED, one delay.
pub struct Uplink<TX, LED, D> {
    tx: TX,
    led: LED,
    delay: D,
    config: UplinkConfig,
}

impl<TX, LED, D> Uplink<TX, LED, D>
where
    TX: Write<u8>,
    LED: OutputPin,
    D: DelayMs<u32>,
{
    pub fn new(tx: TX, led: LED, delay: D, config: UplinkConfig) -> Self {
        Uplink {
            tx,
            led,
            delay,
            config,
        }
    }

    /// Writes one frame byte, then pulses the LED.
    ///
    /// The write blocks until the transmitter accepts and drains the byte;
    /// there is no timeout. The LED goes high only for a non-zero frame and
    /// is driven low again before this returns, so the pulse width is
    /// bounded by the write itself.
    ///
    /// An earlier board revision planned MSB-first bit-banged framing here
    /// (`10100001 -> 10000101`); that framing never landed and the byte
    /// goes out as-is in a single write. Clarify the intended bit order
    /// before extending this.
    pub fn send_frame(&mut self) {
        let frame = self.config.frame;
        block!(self.tx.write(frame)).ok();
        block!(self.tx.flush()).ok();

        if frame != 0 {
            self.led.set_high().ok();
        } else {
            self.led.set_low().ok();
        }
        self.led.set_low().ok();
    }

    /// One full loop iteration: frame, pulse, pause.
    pub fn run_once(&mut self) {
        self.send_frame();
        self.delay.delay_ms(self.config.period_ms);
    }

    /// Runs the transmit loop forever.
    pub fn run(mut self) -> ! {
        loop {
            self.run_once();
        }
    }

    /// Gives the peripherals back.
    pub fn release(self) -> (TX, LED, D) {
        (self.tx, self.led, self.delay)
    }
}
