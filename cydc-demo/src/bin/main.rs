#![no_std]
#![no_main]
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those     holding buffers for the duration of a data transfer."
)]

use cydc_board::{DisplayGeometry, Rgb, RgbLed, StaticRgbLed};
use cydc_touch::{initialize_touch_with, TouchConfig};
use embassy_executor::Spawner;
use embassy_time::{Delay, Duration, Timer};
use embedded_bus::i2c::{share, MutexI2cDevice};
use esp_hal::clock::CpuClock;
use esp_hal::gpio::{Level, Output, OutputConfig};
use esp_hal::i2c::master::I2c;
use esp_hal::time::Rate;
use esp_hal::timer::timg::TimerGroup;
use esp_println::println;
use log::{info, warn};

#[panic_handler]
fn panic(info: &core::panic::PanicInfo) -> ! {
    println!("{}", info);
    loop {}
}

extern crate alloc;

// This creates a default app-descriptor required by the esp-idf bootloader.
// For more information see: <https://docs.espressif.com/projects/esp-idf/en/stable/esp32/api-reference/system/app_image_format.html#application-description>
esp_bootloader_esp_idf::esp_app_desc!();

const POLL_INTERVAL: Duration = Duration::from_millis(50);
const DOT_RADIUS: u16 = 4;

/// Touch demo: one finger reports a position, a two-finger tap changes the
/// LED colour, a two-finger long press ends the demo.
#[esp_hal_embassy::main]
async fn main(_spawner: Spawner) {
    // Init logging
    esp_println::logger::init_logger(log::LevelFilter::Debug);

    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    info!("Peripherals initialized");

    esp_alloc::heap_allocator!(size: 32 * 1024);

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_hal_embassy::init(timg0.timer0);

    let _backlight = Output::new(peripherals.GPIO27, Level::High, OutputConfig::default());

    // Active low, start dark.
    let mut led = StaticRgbLed::new(
        Output::new(peripherals.GPIO4, Level::High, OutputConfig::default()),
        Output::new(peripherals.GPIO16, Level::High, OutputConfig::default()),
        Output::new(peripherals.GPIO17, Level::High, OutputConfig::default()),
    );

    let touch_config = TouchConfig::default();
    let i2c_config = esp_hal::i2c::master::Config::default()
        .with_frequency(Rate::from_hz(touch_config.bus_frequency));
    let touch_i2c = I2c::new(peripherals.I2C0, i2c_config)
        .unwrap()
        .with_scl(peripherals.GPIO32)
        .with_sda(peripherals.GPIO33);
    // The touch bus is also routed to connector P3; share it so extra
    // peripherals there cannot interleave with touch polls.
    let touch_bus = share(touch_i2c);

    let touch_int = Output::new(peripherals.GPIO21, Level::Low, OutputConfig::default());
    let touch_rst = Output::new(peripherals.GPIO25, Level::High, OutputConfig::default());

    let mut touch = match initialize_touch_with(
        touch_config,
        MutexI2cDevice::new(touch_bus.clone()),
        touch_int,
        touch_rst,
        &mut Delay,
    ) {
        Ok(touch) => touch,
        Err(err) => panic!("Touch bring-up failed: {err:?}"),
    };

    let geometry = DisplayGeometry::new(240, 320);
    let colors = [Rgb::RED, Rgb::GREEN, Rgb::BLUE];
    let mut color = 0;
    let mut long_press = false;

    info!("CYDc ready, touch the screen");
    loop {
        Timer::after(POLL_INTERVAL).await;

        let report = match touch.poll(false) {
            Ok(report) => report,
            Err(err) => {
                warn!("Skipping touch poll: {err:?}");
                continue;
            }
        };

        match report.finger_count() {
            0 => long_press = false,
            2 => {
                if long_press {
                    break;
                }
                long_press = true;
                color = (color + 1) % colors.len();
                if let Err(err) = led.set_color(colors[color]) {
                    warn!("Error setting LED: {err:?}");
                }
                Timer::after(Duration::from_millis(100)).await;
            }
            _ => {
                long_press = false;
                if let Some(point) = report.primary() {
                    let pos = geometry.clamp(geometry.map_touch(point), DOT_RADIUS);
                    info!("Touch at {pos:?} ({:?})", colors[color]);
                }
            }
        }
    }

    if let Err(err) = led.off() {
        warn!("Error switching LED off: {err:?}");
    }
    info!("== READY TO BE TURNED OFF ==");
    loop {
        Timer::after(Duration::from_secs(1)).await;
    }
}
