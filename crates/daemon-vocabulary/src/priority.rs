use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Scheduling priority requested for the daemon process.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Deserialize,
    Serialize,
    EnumString,
    Display,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum DaemonPriority {
    /// Reduced priority for background builds.
    Low,
    /// The operating system default.
    #[default]
    Normal,
}
