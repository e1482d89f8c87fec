use core::time::Duration;

use embedded_hal::i2c::I2c;
use esp_hal::{
    gpio::RtcPinWithResistors,
    peripherals::{GPIO2, LPWR},
    rtc_cntl::{
        Rtc,
        sleep::{RtcioWakeupSource, TimerWakeupSource, WakeupLevel},
    },
    system::SleepSource,
};
use glance_core::sleep::{DEEP_SLEEP_DURATION_US, WakeCause};
use glance_hal_esp32c3::platform::display::WatchDisplay;

pub(super) fn classify_wake(cause: SleepSource) -> WakeCause {
    match cause {
        SleepSource::Timer => WakeCause::TimerWake,
        SleepSource::Gpio | SleepSource::Ext0 | SleepSource::Ext1 => WakeCause::EdgeWake,
        _ => WakeCause::Other,
    }
}

/// Suspends until the wake button goes low or the wake timer fires.
/// Resumption is a reset through boot, not a return.
pub(super) fn enter_deep_sleep<I2C>(display: &mut WatchDisplay<I2C>) -> !
where
    I2C: I2c,
{
    // Put the panel in a deterministic off state before entering deep sleep.
    let _ = display.power_off();

    let mut rtc = Rtc::new(unsafe { LPWR::steal() });
    let mut wake_button = unsafe { GPIO2::steal() };
    let mut wake_pins: [(&mut dyn RtcPinWithResistors, WakeupLevel); 1] =
        [(&mut wake_button, WakeupLevel::Low)];
    let button_wake = RtcioWakeupSource::new(&mut wake_pins);
    let timer_wake = TimerWakeupSource::new(Duration::from_micros(DEEP_SLEEP_DURATION_US));

    rtc.sleep_deep(&[&button_wake, &timer_wake]);
}
