use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Whether the daemon loaded its native platform integrations.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize, EnumString, Display,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum NativeServicesMode {
    /// Native integrations were loaded.
    #[default]
    Enabled,
    /// Native integrations were explicitly turned off.
    Disabled,
    /// The launcher did not express a preference.
    NotSet,
}

impl NativeServicesMode {
    /// Returns `true` unless native integrations were explicitly disabled.
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        !matches!(self, Self::Disabled)
    }
}
