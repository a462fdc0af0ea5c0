//! Abandoned DAC ramp, kept as a runnable experiment.
//!
//! Walks DAC channel 1 (PA4) through the full 12-bit range, one step per
//! millisecond, wrapping forever. Useful with a scope on PA4; not part of
//! the uplink beacon.

#![no_main]
#![no_std]

use cortex_m_rt::entry;
use rtt_target::{rprintln, rtt_init_print};

use uplink_f407::{fatal, hal};

use hal::dac::{DacExt, DacOut, DacPin};
use hal::{pac, prelude::*};

#[entry]
fn main() -> ! {
    rtt_init_print!();

    let dp = match pac::Peripherals::take() {
        Some(dp) => dp,
        None => fatal(),
    };

    let rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.freeze();

    let gpioa = dp.GPIOA.split();
    let mut delay = dp.TIM5.delay_us(&clocks);

    let dac_pin = gpioa.pa4.into_analog();
    let mut dac = dp.DAC.constrain(dac_pin);
    dac.enable();

    rprintln!("dac ramp ready");

    loop {
        for value in 0..=4095u16 {
            dac.set_value(value);
            delay.delay_ms(1u32);
        }
    }
}
