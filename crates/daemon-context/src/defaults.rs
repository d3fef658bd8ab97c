//! Constants shared by the grammars, decoders, and version selector.

use daemon_vocabulary::{DaemonPriority, JavaLanguageVersion, JvmVendor, NativeServicesMode};

use crate::version::ToolVersion;

/// Marker that opens a context line; the closing `]` ends it.
pub const CONTEXT_MARKER: &str = "DefaultDaemonContext[";

/// Last daemon version that wrote context lines without Java version and
/// vendor.
pub const LEGACY_FORMAT_THRESHOLD: ToolVersion = ToolVersion::new(8, 7, 0);

/// Java version assumed for context lines written in the legacy format.
pub const LEGACY_JAVA_VERSION: JavaLanguageVersion = JavaLanguageVersion::JAVA_8;

/// JVM vendor assumed for context lines written in the legacy format.
pub const LEGACY_JAVA_VENDOR: JvmVendor = JvmVendor::Unknown;

/// Token the daemon prints when it did not know its own process id.
pub const NULL_SENTINEL: &str = "null";

/// Separator between JVM options in the `daemonOpts` slot.
pub const OPTION_DELIMITER: char = ',';

/// Native-services mode when the slot is absent.
pub const DEFAULT_NATIVE_SERVICES_MODE: NativeServicesMode = NativeServicesMode::Enabled;

/// Priority when the slot is absent.
pub const DEFAULT_PRIORITY: DaemonPriority = DaemonPriority::Normal;
