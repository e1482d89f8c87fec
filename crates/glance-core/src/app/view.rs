impl<CS> WatchApp<CS>
where
    CS: CompanionSource,
{
    /// Builds the view model for the currently selected screen and hands
    /// it to the renderer closure.
    pub fn with_screen<F>(&self, now_ms: u64, f: F)
    where
        F: FnOnce(Screen<'_>),
    {
        let state = &self.state;

        match screen::select_screen(state, now_ms) {
            ScreenKind::Notification => f(Screen::Notification {
                text: state.notification.text.as_str(),
            }),
            ScreenKind::Navigation => f(Screen::Navigation {
                direction: state.navigation.direction.as_str(),
                distance: state.navigation.distance.as_str(),
                icon: state.navigation.has_icon.then_some(&state.navigation.icon),
            }),
            ScreenKind::Clock => f(Screen::Clock {
                time: state.time.as_str(),
                date: state.date.as_str(),
                battery_level: state.battery.level,
                charging: state.battery.charging,
                sleep_countdown_s: sleep::countdown_seconds(state, now_ms),
            }),
        }
    }
}
