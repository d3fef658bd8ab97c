//! The decoded daemon launch context.

use camino::{Utf8Path, Utf8PathBuf};
use daemon_vocabulary::{DaemonPriority, JavaLanguageVersion, JvmVendor, NativeServicesMode};

/// Identity, runtime, and configuration facts a daemon logged at startup.
///
/// Every instance is fully populated: fields absent from the source line hold
/// their documented defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaemonContext {
    pub(crate) uid: Option<String>,
    pub(crate) java_home: Utf8PathBuf,
    pub(crate) java_version: JavaLanguageVersion,
    pub(crate) java_vendor: JvmVendor,
    pub(crate) daemon_registry_dir: Utf8PathBuf,
    pub(crate) pid: Option<i64>,
    pub(crate) idle_timeout_millis: i32,
    pub(crate) jvm_options: Vec<String>,
    pub(crate) instrumentation_agent_applied: bool,
    pub(crate) native_services_mode: NativeServicesMode,
    pub(crate) priority: DaemonPriority,
}

impl DaemonContext {
    /// Daemon identity, when the line carried one.
    #[must_use]
    pub fn uid(&self) -> Option<&str> {
        self.uid.as_deref()
    }

    /// Java installation the daemon runs on.
    #[must_use]
    pub fn java_home(&self) -> &Utf8Path {
        &self.java_home
    }

    /// Java feature release; `8` for legacy lines.
    #[must_use]
    pub const fn java_version(&self) -> JavaLanguageVersion {
        self.java_version
    }

    /// JVM vendor; [`JvmVendor::Unknown`] for legacy lines.
    #[must_use]
    pub const fn java_vendor(&self) -> JvmVendor {
        self.java_vendor
    }

    /// Directory holding the daemon registry.
    #[must_use]
    pub fn daemon_registry_dir(&self) -> &Utf8Path {
        &self.daemon_registry_dir
    }

    /// Process id, unless the daemon logged `null`.
    #[must_use]
    pub const fn pid(&self) -> Option<i64> {
        self.pid
    }

    /// Idle timeout in milliseconds.
    #[must_use]
    pub const fn idle_timeout_millis(&self) -> i32 {
        self.idle_timeout_millis
    }

    /// JVM options in launch order.
    #[must_use]
    pub fn jvm_options(&self) -> &[String] {
        &self.jvm_options
    }

    /// Whether the instrumentation agent was applied.
    #[must_use]
    pub const fn instrumentation_agent_applied(&self) -> bool {
        self.instrumentation_agent_applied
    }

    /// Native-services mode.
    #[must_use]
    pub const fn native_services_mode(&self) -> NativeServicesMode {
        self.native_services_mode
    }

    /// Scheduling priority.
    #[must_use]
    pub const fn priority(&self) -> DaemonPriority {
        self.priority
    }
}
