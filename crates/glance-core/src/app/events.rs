impl<CS> WatchApp<CS>
where
    CS: CompanionSource,
{
    /// Drains pending companion signals. Each event completes its state
    /// mutation before the next one is pulled.
    fn drain_companion_events(&mut self, now_ms: u64) {
        loop {
            let (kind, a, b) = match self.source.poll_event() {
                Ok(Some(CompanionEvent::Connection { connected })) => {
                    Self::apply_connection(&mut self.state, &mut self.connected, connected, now_ms);
                    continue;
                }
                Ok(Some(CompanionEvent::Notification { title, body })) => {
                    Self::apply_notification(&mut self.state, title, body, now_ms);
                    self.pending_redraw = true;
                    continue;
                }
                Ok(Some(CompanionEvent::Config { kind, a, b })) => (kind, a, b),
                Ok(None) => break,
                Err(_) => {
                    // Absence of events is "no update"; stale state keeps
                    // rendering until overwritten.
                    debug!("companion: poll failed; treating as no update");
                    break;
                }
            };

            self.apply_config(kind, a, b, now_ms);
        }
    }

    fn apply_connection(
        state: &mut DeviceState,
        connected: &mut bool,
        now: bool,
        now_ms: u64,
    ) {
        if *connected != now {
            info!("companion: {}", if now { "connected" } else { "disconnected" });
        }
        *connected = now;
        state.mark_activity(now_ms);
    }

    fn apply_notification(state: &mut DeviceState, title: &str, body: &str, now_ms: u64) {
        let mut buf = [0u8; NOTIFICATION_TEXT_BYTES];
        let line = text_policy::notification_line(title, body, &mut buf);

        assign_truncated(&mut state.notification.text, line);
        state.notification.started_at_ms = now_ms;
        state.notification.active = true;
        state.mark_activity(now_ms);
        debug!("notification: \"{}\"", line);
    }

    fn apply_config(&mut self, kind: ConfigKind, a: u32, b: u32, now_ms: u64) {
        match kind {
            ConfigKind::Time => {
                self.refresh_clock();
                self.pending_redraw = true;
            }
            ConfigKind::Battery => {
                self.state.battery.charging = a == 1;
                self.state.battery.level = b.min(100) as u8;
                self.state.mark_activity(now_ms);
                self.pending_redraw = true;
            }
            ConfigKind::NavData => {
                let nav = self.source.navigation();
                let navigation = &mut self.state.navigation;
                navigation.active = nav.active;
                assign_truncated(&mut navigation.direction, nav.direction);
                assign_truncated(&mut navigation.distance, nav.distance);
                // Icon bytes arrive on their own event and are deliberately
                // left in place; a stale icon next to fresh text is allowed.
                if navigation.active {
                    self.state.mark_activity(now_ms);
                }
                self.pending_redraw = true;
            }
            ConfigKind::NavIcon => {
                self.state
                    .navigation
                    .icon
                    .copy_from_slice(self.source.navigation_icon());
                self.state.navigation.has_icon = true;
                self.pending_redraw = true;
            }
        }
    }

    fn refresh_clock(&mut self) {
        let clock = self.source.clock();
        assign_truncated(&mut self.state.time, clock.time);
        assign_truncated(&mut self.state.date, clock.date);
    }
}
