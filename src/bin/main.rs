#![no_std]
#![no_main]
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
#![deny(clippy::large_stack_frames)]

use embassy_executor::Spawner;
use embassy_time::Timer;
use esp_hal::{
    clock::CpuClock,
    gpio::{Input, InputConfig, Io, Pull},
    handler,
    i2c::master::{Config as I2cConfig, I2c},
    interrupt::software::SoftwareInterruptControl,
    ram,
    rtc_cntl::{SocResetReason, reset_reason, wakeup_cause},
    system::Cpu,
    time::{Instant, Rate},
    timer::timg::TimerGroup,
    uart::{self, Uart},
};
use glance_core::{
    app::{LOOP_YIELD_MS, TickResult, WatchApp},
    render::Screen,
};
use glance_hal_esp32c3::{
    input::WakeButton,
    link::{CompanionHandle, CompanionPort, uart::companion_rx_loop},
    platform::display::WatchDisplay,
    render::{FrameRenderer, watch::WatchRenderer},
};
use log::{LevelFilter, info};
use ssd1306::FrameBuffer;

#[path = "main/power.rs"]
mod power;

const DISPLAY_I2C_HZ: u32 = 400_000;
const COMPANION_BAUD: u32 = 115_200;
const SLEEP_NOTICE_MS: u64 = 120;

static COMPANION: CompanionHandle = CompanionHandle::new();
static WAKE_BUTTON: WakeButton = WakeButton::new();

#[panic_handler]
fn panic(_: &core::panic::PanicInfo) -> ! {
    loop {}
}

esp_bootloader_esp_idf::esp_app_desc!();

#[handler]
#[ram]
fn gpio_handler() {
    WAKE_BUTTON.service_interrupt();
}

#[esp_rtos::main]
async fn main(_spawner: Spawner) -> ! {
    esp_println::logger::init_logger(LevelFilter::Info);
    esp_println::println!("boot: glance starting");

    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);
    let boot_reset_reason = reset_reason(Cpu::ProCpu);
    let boot_wakeup_cause = wakeup_cause();
    let woke_from_deep_sleep = boot_reset_reason == Some(SocResetReason::CoreDeepSleep);
    info!(
        "boot reset_reason={:?} wakeup_cause={:?}",
        boot_reset_reason, boot_wakeup_cause
    );

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_int = SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_int.software_interrupt0);

    // Display wiring: SCL=GPIO9, SDA=GPIO8.
    let i2c = I2c::new(
        peripherals.I2C0,
        I2cConfig::default().with_frequency(Rate::from_hz(DISPLAY_I2C_HZ)),
    )
    .unwrap()
    .with_scl(peripherals.GPIO9)
    .with_sda(peripherals.GPIO8);

    let mut display = WatchDisplay::new(i2c);
    let mut display_fault_logged = false;
    if let Err(err) = display.initialize() {
        info!("display initialize failed: {:?}", err);
        display_fault_logged = true;
    }

    let mut renderer = WatchRenderer::new();
    let mut frame = FrameBuffer::new();

    renderer.render(
        Screen::Status {
            line1: "STARTING...",
            line2: "",
        },
        &mut frame,
    );
    if let Err(err) = display.flush_frame(&frame) {
        if !display_fault_logged {
            info!("display flush failed: {:?}", err);
            display_fault_logged = true;
        }
    }

    // Wake button wiring: GPIO2, pull-up, falling edge.
    let mut io = Io::new(peripherals.IO_MUX);
    io.set_interrupt_handler(gpio_handler);
    let button = Input::new(peripherals.GPIO2, InputConfig::default().with_pull(Pull::Up));
    WAKE_BUTTON.attach(button);

    // Companion link wiring: RX=GPIO4, TX=GPIO5.
    let uart_config = uart::Config::default().with_baudrate(COMPANION_BAUD);
    let (companion_rx, _companion_tx) = Uart::new(peripherals.UART1, uart_config)
        .unwrap()
        .with_rx(peripherals.GPIO4)
        .with_tx(peripherals.GPIO5)
        .into_async()
        .split();

    let mut app = WatchApp::new(CompanionPort::new(&COMPANION));
    if woke_from_deep_sleep {
        app.on_wake(power::classify_wake(boot_wakeup_cause), 0);
    }

    let loop_start = Instant::now();
    info!("watch started: display SCL=GPIO9 SDA=GPIO8 button=GPIO2 companion RX=GPIO4 TX=GPIO5");

    let companion_future = companion_rx_loop(companion_rx, &COMPANION);
    let ui_future = async {
        loop {
            let now_ms = loop_start.elapsed().as_millis();

            if WAKE_BUTTON.take_press() {
                app.on_button_press(now_ms);
            }

            if app.tick(now_ms) == TickResult::RenderRequested {
                app.with_screen(now_ms, |screen| renderer.render(screen, &mut frame));
                if let Err(err) = display.flush_frame(&frame) {
                    if !display_fault_logged {
                        info!("display flush failed: {:?}", err);
                        display_fault_logged = true;
                    }
                }
            }

            if app.sleep_due(now_ms) {
                info!("sleep: entering deep sleep after {}ms idle", now_ms);
                renderer.render(
                    Screen::Status {
                        line1: "SLEEPING...",
                        line2: "PRESS TO WAKE",
                    },
                    &mut frame,
                );
                let _ = display.flush_frame(&frame);
                Timer::after_millis(SLEEP_NOTICE_MS).await;
                power::enter_deep_sleep(&mut display);
            }

            Timer::after_millis(LOOP_YIELD_MS).await;
        }
    };

    let _ = embassy_futures::join::join(companion_future, ui_future).await;
    unreachable!()
}
