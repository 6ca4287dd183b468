//! Display driver setup for the GC9A01 240x240 round panel.
//!
//! Pin mapping:
//! - CLK: GPIO10 (SPI1 CLK)
//! - MOSI: GPIO11 (SPI1 TX)
//! - DC: GPIO8
//! - CS: GPIO9
//! - Reset: GPIO12
//! - Backlight: GPIO25

use embassy_rp::gpio::Output;
use embassy_rp::peripherals::SPI1;
use embassy_rp::spi::{Blocking, Config as SpiConfig, Spi};
use embedded_hal_bus::spi::{ExclusiveDevice, NoDelay};
use mipidsi::Builder;
use mipidsi::interface::SpiInterface;
use mipidsi::models::GC9A01;
use mipidsi::options::{ColorInversion, ColorOrder};

use compass_watch::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Display type for the GC9A01 with a hardware reset pin.
pub type WatchDisplay<'d> = mipidsi::Display<
    SpiInterface<'d, ExclusiveDevice<Spi<'d, SPI1, Blocking>, Output<'d>, NoDelay>, Output<'d>>,
    GC9A01,
    Output<'d>,
>;

/// Initialize the round display.
///
/// `buffer` is the interface's pixel staging buffer, 512 bytes is plenty.
pub fn init_display<'d>(
    spi: Spi<'d, SPI1, Blocking>,
    cs: Output<'d>,
    dc: Output<'d>,
    rst: Output<'d>,
    buffer: &'d mut [u8],
) -> WatchDisplay<'d> {
    let spi_device = ExclusiveDevice::new_no_delay(spi, cs).expect("SPI device");
    let di = SpiInterface::new(spi_device, dc, buffer);

    Builder::new(GC9A01, di)
        .display_size(SCREEN_WIDTH as u16, SCREEN_HEIGHT as u16)
        .invert_colors(ColorInversion::Inverted)
        .color_order(ColorOrder::Bgr)
        .reset_pin(rst)
        .init(&mut embassy_time::Delay)
        .expect("GC9A01 init")
}

/// SPI configuration for the GC9A01.
pub fn display_spi_config() -> SpiConfig {
    let mut config = SpiConfig::default();
    config.frequency = 62_500_000;
    config
}
