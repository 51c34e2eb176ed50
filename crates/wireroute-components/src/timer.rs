// @generated by wireroute-gen from catalog/components.json. DO NOT EDIT.
// Component: timer (Timer Scheduler)

//! Fires exchanges on a fixed schedule.

use wireroute_endpoint::EndpointBuilder;
use wireroute_endpoint::EndpointParams;

/// Fluent endpoint builder for the `timer` component.
///
/// Fires exchanges on a fixed schedule.
#[derive(Debug, Clone)]
pub struct TimerEndpointBuilder {
    /// Name of the timer; endpoints sharing a name share a timer.
    timer_name: String,
    /// Shared parameter sink collecting the configured properties.
    params: EndpointParams,
}

impl TimerEndpointBuilder {
    /// Creates a builder from the required path segments.
    #[must_use]
    pub fn new(timer_name: impl Into<String>) -> Self {
        let mut builder = Self {
            timer_name: timer_name.into(),
            params: EndpointParams::new(),
        };
        builder.rebuild();
        builder
    }

    /// Name of the timer; endpoints sharing a name share a timer.
    #[must_use]
    pub fn timer_name(mut self, timer_name: impl Into<String>) -> Self {
        self.timer_name = timer_name.into();
        self.rebuild();
        self
    }

    /// Run the timer thread as a daemon thread.
    ///
    /// Default: `true`.
    #[must_use]
    pub fn daemon(mut self, daemon: bool) -> Self {
        self.params.property("daemon", daemon);
        self
    }

    /// Delay in milliseconds before the first exchange fires.
    ///
    /// Default: `1000`.
    #[must_use]
    pub fn delay(mut self, delay: i64) -> Self {
        self.params.property("delay", delay);
        self
    }

    /// Schedule at a fixed rate instead of a fixed delay.
    ///
    /// Default: `false`.
    #[must_use]
    pub fn fixed_rate(mut self, fixed_rate: bool) -> Self {
        self.params.property("fixedRate", fixed_rate);
        self
    }

    /// Attach firing metadata to each exchange.
    ///
    /// Default: `false`.
    #[must_use]
    pub fn include_metadata(mut self, include_metadata: bool) -> Self {
        self.params.property("includeMetadata", include_metadata);
        self
    }

    /// Period in milliseconds between subsequent exchanges.
    ///
    /// Default: `1000`.
    #[must_use]
    pub fn period(mut self, period: i64) -> Self {
        self.params.property("period", period);
        self
    }

    /// Number of exchanges to fire, 0 for unbounded.
    ///
    /// Default: `0`.
    #[must_use]
    pub fn repeat_count(mut self, repeat_count: i64) -> Self {
        self.params.property("repeatCount", repeat_count);
        self
    }

    /// Absolute first-fire time in ISO 8601 format.
    #[must_use]
    pub fn time(mut self, time: impl Into<String>) -> Self {
        self.params.property("time", time.into());
        self
    }

    /// Rebuilds the URL portion from the path segments.
    fn rebuild(&mut self) {
        let mut url = String::new();
        url.push_str(&self.timer_name);
        self.params.url(url);
    }
}

impl EndpointBuilder for TimerEndpointBuilder {
    fn scheme(&self) -> &'static str {
        "timer"
    }

    fn params(&self) -> &EndpointParams {
        &self.params
    }
}
