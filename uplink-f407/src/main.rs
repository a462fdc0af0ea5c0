//! FPGA uplink beacon.
//!
//! Brings up the clock tree (HSI only), USART2 and the PB0 LED, then hands
//! off to the [`fpga_uplink::Uplink`] loop: one `0xA1` frame every 100 ms,
//! LED pulsed per frame. Any initialization failure parks the core.

#![no_main]
#![no_std]

use cortex_m_rt::entry;
use rtt_target::{rprintln, rtt_init_print};

use fpga_uplink::{Uplink, UplinkConfig};
use uplink_f407::{fatal, hal};

use hal::uart::Config;
use hal::{pac, prelude::*};

#[entry]
fn main() -> ! {
    rtt_init_print!();

    let dp = match pac::Peripherals::take() {
        Some(dp) => dp,
        None => fatal(),
    };

    // HSI at 16 MHz, no PLL.
    let rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.freeze();

    let gpioa = dp.GPIOA.split();
    let gpiob = dp.GPIOB.split();

    let led = gpiob.pb0.into_push_pull_output();
    let delay = dp.TIM5.delay_us(&clocks);

    // USART2 to the FPGA, TX only.
    let tx_pin = gpioa.pa2.into_alternate();
    let tx = match dp.USART2.tx(
        tx_pin,
        Config::default()
            .baudrate(115200.bps())
            .wordlength_8()
            .parity_none(),
        &clocks,
    ) {
        Ok(tx) => tx,
        Err(_) => {
            rprintln!("USART2 config rejected");
            fatal()
        }
    };

    rprintln!("uplink ready");
    Uplink::new(tx, led, delay, UplinkConfig::default()).run()
}
