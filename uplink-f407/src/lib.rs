#![no_main]
#![no_std]

use panic_halt as _;

pub use stm32f4xx_hal as hal; // memory layout

/// Parks the core after an unrecoverable initialization failure.
///
/// Interrupts are masked first, so nothing ever reaches the serial line or
/// the LED again; the only way out is an external reset.
pub fn fatal() -> ! {
    cortex_m::interrupt::disable();
    loop {
        cortex_m::asm::nop();
    }
}
