//! Development-mode marker.

/// Environment variable carrying the development-mode marker.
pub const DEV_MODE_ENV: &str = "AGENTRY_DEV_MODE";

/// Whether the process runs in development mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DevMode {
    /// Development mode; startup deploys are enabled.
    Enabled,
    /// Any other mode.
    #[default]
    Disabled,
}

impl DevMode {
    /// Interprets a raw marker value.
    ///
    /// `1`, `true`, `yes` and `on` enable development mode, ignoring case and
    /// surrounding whitespace; anything else, including absence, disables it.
    #[must_use]
    pub fn from_env_value(value: Option<&str>) -> Self {
        let enabled = value.is_some_and(|raw| {
            let marker = raw.trim();
            ["1", "true", "yes", "on"]
                .iter()
                .any(|accepted| marker.eq_ignore_ascii_case(accepted))
        });
        if enabled { Self::Enabled } else { Self::Disabled }
    }

    /// Reads the marker from [`DEV_MODE_ENV`].
    #[must_use]
    pub fn detect() -> Self {
        Self::from_env_value(std::env::var(DEV_MODE_ENV).ok().as_deref())
    }

    /// Returns `true` in development mode.
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        matches!(self, Self::Enabled)
    }
}
