use super::*;
use crate::{
    companion::{ClockView, NavigationView},
    sleep::INACTIVITY_TIMEOUT_MS,
    state::NAV_ICON_BYTES,
};

/// Scripted companion: each event updates the accessor snapshot first,
/// the way the real link stores a payload before firing its callback.
#[derive(Clone, Copy)]
enum ScriptEvent {
    Connection(bool),
    Notification(&'static str, &'static str),
    Time(&'static str, &'static str),
    Battery { charging: bool, level: u32 },
    NavData {
        active: bool,
        direction: &'static str,
        distance: &'static str,
    },
    NavIcon(u8),
}

struct ScriptedCompanion<'a> {
    events: &'a [ScriptEvent],
    cursor: usize,
    time: &'static str,
    date: &'static str,
    nav_active: bool,
    direction: &'static str,
    distance: &'static str,
    icon: [u8; NAV_ICON_BYTES],
}

impl<'a> ScriptedCompanion<'a> {
    const fn new(events: &'a [ScriptEvent]) -> Self {
        Self {
            events,
            cursor: 0,
            time: "12:00",
            date: "Sat 23 Aug",
            nav_active: false,
            direction: "",
            distance: "",
            icon: [0u8; NAV_ICON_BYTES],
        }
    }
}

impl CompanionSource for ScriptedCompanion<'_> {
    type Error = ();

    fn poll_event(&mut self) -> Result<Option<CompanionEvent<'_>>, Self::Error> {
        let Some(event) = self.events.get(self.cursor).copied() else {
            return Ok(None);
        };
        self.cursor = self.cursor.saturating_add(1);

        Ok(Some(match event {
            ScriptEvent::Connection(connected) => CompanionEvent::Connection { connected },
            ScriptEvent::Notification(title, body) => CompanionEvent::Notification { title, body },
            ScriptEvent::Time(time, date) => {
                self.time = time;
                self.date = date;
                CompanionEvent::Config {
                    kind: ConfigKind::Time,
                    a: 0,
                    b: 0,
                }
            }
            ScriptEvent::Battery { charging, level } => CompanionEvent::Config {
                kind: ConfigKind::Battery,
                a: charging as u32,
                b: level,
            },
            ScriptEvent::NavData {
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
            ScriptEvent::NavIcon(fill) => {
                self.icon = [fill; NAV_ICON_BYTES];
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
            time: self.time,
            date: self.date,
        }
    }

    fn navigation(&self) -> NavigationView<'_> {
        NavigationView {
            active: self.nav_active,
            direction: self.direction,
            distance: self.distance,
        }
    }

    fn navigation_icon(&self) -> &[u8; NAV_ICON_BYTES] {
        &self.icon
    }
}

fn screen_name(screen: &Screen<'_>) -> &'static str {
    match screen {
        Screen::Clock { .. } => "clock",
        Screen::Notification { .. } => "notification",
        Screen::Navigation { .. } => "navigation",
        Screen::Status { .. } => "status",
    }
}

#[test]
fn notification_text_is_truncated_to_twenty_chars_plus_ellipsis() {
    let events = [ScriptEvent::Notification(
        "Mail",
        "New message from Alice regarding tomorrow",
    )];
    let mut app = WatchApp::new(ScriptedCompanion::new(&events));

    let _ = app.tick(100);

    let mut shown = None;
    app.with_screen(100, |screen| {
        if let Screen::Notification { text } = screen {
            shown = Some(std::string::String::from(text));
        }
    });
    assert_eq!(shown.as_deref(), Some("Mail: New message fr..."));
}

#[test]
fn notification_window_round_trips_back_to_clock() {
    let events = [ScriptEvent::Notification("Ping", "hi")];
    let mut app = WatchApp::new(ScriptedCompanion::new(&events));

    assert_eq!(app.tick(10), TickResult::RenderRequested);
    app.with_screen(1_400, |screen| assert_eq!(screen_name(&screen), "notification"));
    assert!(app.state().notification.active);

    // Window has elapsed: flag clears and a prompt redraw is requested.
    let _ = app.tick(1_520);
    assert!(!app.state().notification.active);
    assert_eq!(app.tick(1_530), TickResult::RenderRequested);
    app.with_screen(1_530, |screen| assert_eq!(screen_name(&screen), "clock"));
}

#[test]
fn notification_preempts_navigation_then_reverts_to_it() {
    let events = [
        ScriptEvent::NavData {
            active: true,
            direction: "Turn left",
            distance: "200 m",
        },
        ScriptEvent::Notification("Mail", "hello"),
    ];
    let mut app = WatchApp::new(ScriptedCompanion::new(&events));

    let _ = app.tick(0);
    app.with_screen(1_000, |screen| assert_eq!(screen_name(&screen), "notification"));

    let _ = app.tick(1_600);
    app.with_screen(1_600, |screen| assert_eq!(screen_name(&screen), "navigation"));
}

#[test]
fn charging_suppresses_sleep_through_a_full_minute_idle() {
    let events = [ScriptEvent::Battery {
        charging: true,
        level: 80,
    }];
    let mut app = WatchApp::new(ScriptedCompanion::new(&events));

    for now in (0..=60_000).step_by(1_000) {
        let _ = app.tick(now);
        assert!(!app.sleep_due(now), "slept at {now}ms while charging");
    }
}

#[test]
fn sleep_fires_on_the_first_tick_past_the_timeout() {
    let mut app = WatchApp::new(ScriptedCompanion::new(&[]));

    let _ = app.tick(0);
    assert!(!app.sleep_due(INACTIVITY_TIMEOUT_MS));
    assert!(app.sleep_due(INACTIVITY_TIMEOUT_MS + LOOP_YIELD_MS));
}

#[test]
fn repeated_button_presses_refresh_activity_once() {
    let mut app = WatchApp::new(ScriptedCompanion::new(&[]));

    // The interrupt flag is a boolean, not a counter; servicing it more
    // than once with the same timestamp must behave like once.
    app.on_button_press(5_000);
    app.on_button_press(5_000);
    app.on_button_press(5_000);
    assert_eq!(app.state().last_activity_ms, 5_000);

    assert!(!app.sleep_due(35_000));
    assert!(app.sleep_due(35_001));
}

#[test]
fn battery_update_postpones_sleep() {
    let events = [ScriptEvent::Battery {
        charging: false,
        level: 55,
    }];
    let mut app = WatchApp::new(ScriptedCompanion::new(&events));

    let _ = app.tick(5_000);
    assert_eq!(app.state().battery.level, 55);
    assert!(!app.sleep_due(35_000));
    assert!(app.sleep_due(35_001));
}

#[test]
fn connection_change_postpones_sleep() {
    let events = [ScriptEvent::Connection(true)];
    let mut app = WatchApp::new(ScriptedCompanion::new(&events));

    let _ = app.tick(5_000);
    assert!(!app.sleep_due(35_000));
    assert!(app.sleep_due(35_001));
}

#[test]
fn navigation_without_icon_renders_text_only() {
    let events = [ScriptEvent::NavData {
        active: true,
        direction: "Turn right onto Elm Street",
        distance: "50 m",
    }];
    let mut app = WatchApp::new(ScriptedCompanion::new(&events));

    let _ = app.tick(0);
    app.with_screen(0, |screen| match screen {
        Screen::Navigation {
            direction,
            distance,
            icon,
        } => {
            assert_eq!(direction, "Turn right onto Elm Street");
            assert_eq!(distance, "50 m");
            assert!(icon.is_none());
        }
        other => panic!("expected navigation screen, got {}", screen_name(&other)),
    });
}

#[test]
fn stale_icon_may_pair_with_fresh_nav_text() {
    // Icon and nav-data events are not atomic with respect to each other;
    // an icon from a previous session legitimately survives a nav-data
    // replacement. This is observed source behavior, not a bug.
    let events = [
        ScriptEvent::NavData {
            active: true,
            direction: "Turn left",
            distance: "200 m",
        },
        ScriptEvent::NavIcon(0xAA),
        ScriptEvent::NavData {
            active: true,
            direction: "Turn right",
            distance: "1.2 km",
        },
    ];
    let mut app = WatchApp::new(ScriptedCompanion::new(&events));

    let _ = app.tick(0);
    app.with_screen(0, |screen| match screen {
        Screen::Navigation {
            direction, icon, ..
        } => {
            assert_eq!(direction, "Turn right");
            assert_eq!(icon.map(|bytes| bytes[0]), Some(0xAA));
        }
        other => panic!("expected navigation screen, got {}", screen_name(&other)),
    });
}

#[test]
fn clock_screen_carries_companion_time_and_countdown() {
    let events = [ScriptEvent::Time("09:41", "Mon 1 Sep")];
    let mut app = WatchApp::new(ScriptedCompanion::new(&events));

    let _ = app.tick(0);
    app.with_screen(25_000, |screen| match screen {
        Screen::Clock {
            time,
            date,
            sleep_countdown_s,
            ..
        } => {
            assert_eq!(time, "09:41");
            assert_eq!(date, "Mon 1 Sep");
            assert_eq!(sleep_countdown_s, Some(5));
        }
        other => panic!("expected clock screen, got {}", screen_name(&other)),
    });
}

#[test]
fn wake_reset_prevents_immediate_resleep() {
    let mut app = WatchApp::new(ScriptedCompanion::new(&[]));

    app.on_wake(WakeCause::EdgeWake, 0);
    let _ = app.tick(0);
    assert!(!app.sleep_due(INACTIVITY_TIMEOUT_MS));
}
