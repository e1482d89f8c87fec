use core::cell::RefCell;

use critical_section::Mutex;
use esp_hal::gpio::{Event, Input};
use portable_atomic::{AtomicBool, Ordering};

/// Wake-button plumbing shared between the GPIO interrupt handler and the
/// main loop. The handler only latches the flag; the loop is the sole
/// reader-and-clearer and does all state mutation.
pub struct WakeButton {
    input: Mutex<RefCell<Option<Input<'static>>>>,
    pressed: AtomicBool,
}

impl WakeButton {
    pub const fn new() -> Self {
        Self {
            input: Mutex::new(RefCell::new(None)),
            pressed: AtomicBool::new(false),
        }
    }

    /// Stores the configured pin and arms the falling-edge interrupt.
    pub fn attach(&self, mut input: Input<'static>) {
        critical_section::with(|cs| {
            input.listen(Event::FallingEdge);
            self.input.borrow_ref_mut(cs).replace(input);
        });
    }

    /// Called from the registered GPIO handler. Latches the press flag;
    /// repeated latching before the loop services it collapses to one.
    pub fn service_interrupt(&self) {
        critical_section::with(|cs| {
            let mut binding = self.input.borrow_ref_mut(cs);
            let Some(input) = binding.as_mut() else {
                return;
            };
            if !input.is_interrupt_set() {
                return;
            }
            input.clear_interrupt();
            self.pressed.store(true, Ordering::Release);
        });
    }

    /// Consumes the press flag.
    pub fn take_press(&self) -> bool {
        self.pressed.swap(false, Ordering::AcqRel)
    }
}

impl Default for WakeButton {
    fn default() -> Self {
        Self::new()
    }
}
