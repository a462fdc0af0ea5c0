//! Abandoned ADC polling path, kept as a runnable experiment.
//!
//! Samples ADC1 on PA0 and prints the raw value over USART3 (the
//! diagnostics port) every 100 ms. This never shipped in the beacon; it is
//! the polling variant that was explored before the uplink settled on a
//! fixed frame.

#![no_main]
#![no_std]

use core::fmt::Write;

use cortex_m_rt::entry;
use rtt_target::{rprintln, rtt_init_print};

use uplink_f407::{fatal, hal};

use hal::adc::config::{AdcConfig, SampleTime};
use hal::adc::Adc;
use hal::uart::Config;
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
    let gpiob = dp.GPIOB.split();

    let mut delay = dp.TIM5.delay_us(&clocks);

    let mut adc = Adc::adc1(dp.ADC1, true, AdcConfig::default());
    let sense = gpioa.pa0.into_analog();

    let tx_pin = gpiob.pb10.into_alternate();
    let mut console = match dp.USART3.tx(
        tx_pin,
        Config::default()
            .baudrate(115200.bps())
            .wordlength_8()
            .parity_none(),
        &clocks,
    ) {
        Ok(tx) => tx,
        Err(_) => {
            rprintln!("USART3 config rejected");
            fatal()
        }
    };

    rprintln!("adc poll ready");

    loop {
        let sample = adc.convert(&sense, SampleTime::Cycles_480);
        writeln!(console, "ADC Value : {}\r", sample).ok();
        delay.delay_ms(100u32);
    }
}
