impl<CS> WatchApp<CS>
where
    CS: CompanionSource,
{
    pub fn new(source: CS) -> Self {
        Self {
            source,
            state: DeviceState::new(),
            connected: false,
            next_clock_refresh_ms: 0,
            pending_redraw: true,
        }
    }

    /// Current device snapshot, for diagnostics and tests.
    pub fn state(&self) -> &DeviceState {
        &self.state
    }

    pub fn set_sleep_enabled(&mut self, enabled: bool) {
        self.state.sleep_enabled = enabled;
    }

    /// Called once after the interrupt flag handoff; the interrupt context
    /// itself only sets the flag.
    pub fn on_button_press(&mut self, now_ms: u64) {
        self.state.mark_activity(now_ms);
        debug!("button: activity refreshed");
    }

    /// Post-wake bookkeeping. Classification is diagnostic only.
    pub fn on_wake(&mut self, cause: WakeCause, now_ms: u64) {
        sleep::wake_reset(&mut self.state, cause, now_ms);
    }

    /// One main-loop pass: drain companion events, refresh the clock at
    /// the 1 Hz cadence, and expire the notification window. Returns
    /// whether the caller should render and flush a frame.
    pub fn tick(&mut self, now_ms: u64) -> TickResult {
        self.drain_companion_events(now_ms);

        let mut result = if self.pending_redraw {
            self.pending_redraw = false;
            TickResult::RenderRequested
        } else {
            TickResult::NoRender
        };

        if now_ms >= self.next_clock_refresh_ms {
            self.next_clock_refresh_ms = now_ms.saturating_add(CLOCK_REFRESH_MS);
            self.refresh_clock();
            result = TickResult::RenderRequested;
        }

        self.expire_notification(now_ms);
        result
    }

    fn expire_notification(&mut self, now_ms: u64) {
        let notification = &mut self.state.notification;
        if notification.active
            && now_ms.saturating_sub(notification.started_at_ms) > screen::NOTIFICATION_DISPLAY_MS
        {
            notification.clear();
            // Revert to the underlying screen promptly instead of waiting
            // for the next clock refresh.
            self.pending_redraw = true;
            debug!("notification: expired");
        }
    }

    /// Sleep-coordinator pass. `true` means the caller must perform the
    /// non-returning suspend transition.
    pub fn sleep_due(&mut self, now_ms: u64) -> bool {
        matches!(
            sleep::evaluate(&mut self.state, now_ms),
            SleepDecision::Suspend
        )
    }
}
