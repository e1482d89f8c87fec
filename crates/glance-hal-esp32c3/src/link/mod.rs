//! Companion UART link: deframer, shared inbox, and the polled adapter the
//! app drains each loop pass.

mod frame;
pub mod uart;

pub use frame::{Frame, FrameError, FrameParser, FrameType, MAX_PAYLOAD, SYNC};

use core::cell::RefCell;
use core::convert::Infallible;

use critical_section::Mutex;
use glance_core::companion::{ClockView, CompanionEvent, CompanionSource, ConfigKind, NavigationView};
use glance_core::state::{
    DATE_BYTES, DIRECTION_BYTES, DISTANCE_BYTES, NAV_ICON_BYTES, TIME_BYTES, assign_truncated,
};
use heapless::{Deque, String};
use log::warn;

pub const TITLE_BYTES: usize = 48;
pub const BODY_BYTES: usize = 96;
const INBOX_DEPTH: usize = 8;

/// One decoded companion message, owned so it can cross from the RX task
/// to the UI loop.
#[derive(Clone, Debug)]
pub enum Inbound {
    Connection {
        connected: bool,
    },
    Notification {
        title: String<TITLE_BYTES>,
        body: String<BODY_BYTES>,
    },
    Time {
        time: String<TIME_BYTES>,
        date: String<DATE_BYTES>,
    },
    Battery {
        charging: bool,
        level: u8,
    },
    NavData {
        active: bool,
        direction: String<DIRECTION_BYTES>,
        distance: String<DISTANCE_BYTES>,
    },
    NavIcon([u8; NAV_ICON_BYTES]),
}

/// Shared inbox between the async RX task and the UI loop.
pub struct CompanionHandle {
    inbox: Mutex<RefCell<Deque<Inbound, INBOX_DEPTH>>>,
}

impl CompanionHandle {
    pub const fn new() -> Self {
        Self {
            inbox: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Queues a message, dropping the oldest when the inbox is full so the
    /// freshest companion state always gets through.
    pub fn push(&self, inbound: Inbound) {
        critical_section::with(|cs| {
            let mut inbox = self.inbox.borrow_ref_mut(cs);
            if inbox.is_full() {
                let _ = inbox.pop_front();
                warn!("companion: inbox full, dropped oldest message");
            }
            let _ = inbox.push_back(inbound);
        });
    }

    pub fn pop(&self) -> Option<Inbound> {
        critical_section::with(|cs| self.inbox.borrow_ref_mut(cs).pop_front())
    }
}

impl Default for CompanionHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Polled adapter over a [`CompanionHandle`]. Owns the latest snapshots so
/// the accessor borrows in [`CompanionSource`] have somewhere to point.
pub struct CompanionPort {
    handle: &'static CompanionHandle,
    time: String<TIME_BYTES>,
    date: String<DATE_BYTES>,
    nav_active: bool,
    direction: String<DIRECTION_BYTES>,
    distance: String<DISTANCE_BYTES>,
    icon: [u8; NAV_ICON_BYTES],
    note_title: String<TITLE_BYTES>,
    note_body: String<BODY_BYTES>,
}

impl CompanionPort {
    pub fn new(handle: &'static CompanionHandle) -> Self {
        Self {
            handle,
            time: String::new(),
            date: String::new(),
            nav_active: false,
            direction: String::new(),
            distance: String::new(),
            icon: [0u8; NAV_ICON_BYTES],
            note_title: String::new(),
            note_body: String::new(),
        }
    }
}

impl CompanionSource for CompanionPort {
    type Error = Infallible;

    fn poll_event(&mut self) -> Result<Option<CompanionEvent<'_>>, Self::Error> {
        let Some(inbound) = self.handle.pop() else {
            return Ok(None);
        };

        Ok(Some(match inbound {
            Inbound::Connection { connected } => CompanionEvent::Connection { connected },
            Inbound::Notification { title, body } => {
                self.note_title = title;
                self.note_body = body;
                CompanionEvent::Notification {
                    title: self.note_title.as_str(),
                    body: self.note_body.as_str(),
                }
            }
            Inbound::Time { time, date } => {
                self.time = time;
                self.date = date;
                CompanionEvent::Config {
                    kind: ConfigKind::Time,
                    a: 0,
                    b: 0,
                }
            }
            Inbound::Battery { charging, level } => CompanionEvent::Config {
                kind: ConfigKind::Battery,
                a: charging as u32,
                b: level as u32,
            },
            Inbound::NavData {
                active,
                direction,
                distance,
            } => {
                self.nav_active = active;
                self.direction = direction;
                self.distance = distance;
                CompanionEvent::Config {
                    kind: ConfigKind::NavData,
                    a: 0,
                    b: 0,
                }
            }
            Inbound::NavIcon(icon) => {
                self.icon = icon;
                CompanionEvent::Config {
                    kind: ConfigKind::NavIcon,
                    a: 0,
                    b: 0,
                }
            }
        }))
    }

    fn clock(&self) -> ClockView<'_> {
        ClockView {
            time: self.time.as_str(),
            date: self.date.as_str(),
        }
    }

    fn navigation(&self) -> NavigationView<'_> {
        NavigationView {
            active: self.nav_active,
            direction: self.direction.as_str(),
            distance: self.distance.as_str(),
        }
    }

    fn navigation_icon(&self) -> &[u8; NAV_ICON_BYTES] {
        &self.icon
    }
}

pub(crate) fn decode_frame(frame: Frame<'_>) -> Option<Inbound> {
    match frame.frame_type {
        FrameType::Connection => {
            let &[flag] = frame.payload else {
                return None;
            };
            Some(Inbound::Connection {
                connected: flag != 0,
            })
        }
        FrameType::Notification => {
            let (title, body) = split_nul(frame.payload)?;
            let mut title_buf = String::new();
            let mut body_buf = String::new();
            assign_truncated(&mut title_buf, title);
            assign_truncated(&mut body_buf, body);
            Some(Inbound::Notification {
                title: title_buf,
                body: body_buf,
            })
        }
        FrameType::Time => {
            let (time, date) = split_nul(frame.payload)?;
            let mut time_buf = String::new();
            let mut date_buf = String::new();
            assign_truncated(&mut time_buf, time);
            assign_truncated(&mut date_buf, date);
            Some(Inbound::Time {
                time: time_buf,
                date: date_buf,
            })
        }
        FrameType::Battery => {
            let &[charging, level] = frame.payload else {
                return None;
            };
            Some(Inbound::Battery {
                charging: charging != 0,
                level: level.min(100),
            })
        }
        FrameType::NavData => {
            let (&active, rest) = frame.payload.split_first()?;
            let (direction, distance) = split_nul(rest)?;
            let mut direction_buf = String::new();
            let mut distance_buf = String::new();
            assign_truncated(&mut direction_buf, direction);
            assign_truncated(&mut distance_buf, distance);
            Some(Inbound::NavData {
                active: active != 0,
                direction: direction_buf,
                distance: distance_buf,
            })
        }
        FrameType::NavIcon => {
            let bytes: &[u8; NAV_ICON_BYTES] = frame.payload.try_into().ok()?;
            Some(Inbound::NavIcon(*bytes))
        }
    }
}

/// Splits a `first NUL second` payload into two UTF-8 strings.
fn split_nul(payload: &[u8]) -> Option<(&str, &str)> {
    let nul = payload.iter().position(|&b| b == 0)?;
    let first = core::str::from_utf8(&payload[..nul]).ok()?;
    let second = core::str::from_utf8(&payload[nul + 1..]).ok()?;
    Some((first, second))
}
