//! Stream configuration.

/// Configuration fixed at [`TokenStream`](crate::TokenStream) construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StreamConfig {
    /// Report every emitted and retracted token through `tracing` at
    /// `TRACE` level. Has no effect on returned values.
    pub trace_enabled: bool,
}

impl StreamConfig {
    /// Name of the environment variable consulted by [`from_env`](Self::from_env).
    pub const TRACE_ENV: &'static str = "RELAY_TOKEN_TRACE";

    /// Build a config from the process environment.
    ///
    /// `RELAY_TOKEN_TRACE` set to `1`, `true`, `yes` or `on` (any case)
    /// enables token tracing. Anything else, or unset, leaves it off.
    pub fn from_env() -> Self {
        let trace_enabled = std::env::var(Self::TRACE_ENV)
            .map(|value| flag_enabled(&value))
            .unwrap_or(false);
        StreamConfig { trace_enabled }
    }

    #[must_use]
    pub fn with_trace(mut self, enabled: bool) -> Self {
        self.trace_enabled = enabled;
        self
    }
}

fn flag_enabled(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
