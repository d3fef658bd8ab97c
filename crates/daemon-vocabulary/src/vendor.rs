//! Known JVM distributors.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// A JVM vendor as the daemon prints it.
///
/// Tokens are the upper-case constant names; matching is exact so that a
/// mangled vendor is reported instead of being silently mapped to
/// [`Unknown`](Self::Unknown).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize, EnumString, Display,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum JvmVendor {
    /// Eclipse Temurin builds from Adoptium.
    Adoptium,
    /// Historical AdoptOpenJDK builds.
    #[serde(rename = "ADOPTOPENJDK")]
    #[strum(serialize = "ADOPTOPENJDK")]
    AdoptOpenJdk,
    /// Amazon Corretto.
    Amazon,
    /// Apple-supplied JDKs.
    Apple,
    /// Azul Zulu.
    Azul,
    /// BellSoft Liberica.
    Bellsoft,
    /// Oracle GraalVM.
    GraalVm,
    /// Hewlett-Packard JDKs.
    HewlettPackard,
    /// IBM JDKs.
    Ibm,
    /// JetBrains Runtime.
    #[serde(rename = "JETBRAINS")]
    #[strum(serialize = "JETBRAINS")]
    JetBrains,
    /// Microsoft Build of OpenJDK.
    Microsoft,
    /// Oracle JDK and OpenJDK builds.
    Oracle,
    /// SAP Machine.
    Sap,
    /// Tencent Kona.
    Tencent,
    /// A vendor the daemon could not identify.
    #[default]
    Unknown,
}

impl JvmVendor {
    /// Human-readable distribution name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Adoptium => "Eclipse Temurin",
            Self::AdoptOpenJdk => "AdoptOpenJDK",
            Self::Amazon => "Amazon Corretto",
            Self::Apple => "Apple",
            Self::Azul => "Azul Zulu",
            Self::Bellsoft => "BellSoft Liberica",
            Self::GraalVm => "GraalVM",
            Self::HewlettPackard => "HP-UX",
            Self::Ibm => "IBM",
            Self::JetBrains => "JetBrains",
            Self::Microsoft => "Microsoft",
            Self::Oracle => "Oracle",
            Self::Sap => "SAP SapMachine",
            Self::Tencent => "Tencent",
            Self::Unknown => "Unknown Vendor",
        }
    }
}
