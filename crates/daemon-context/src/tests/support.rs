//! Context lines shared by the unit and behaviour tests.

/// A current-generation line with every optional slot omitted.
pub(crate) const CURRENT_MINIMAL: &str = concat!(
    "DefaultDaemonContext[uid=abc,javaHome=/jdk,javaVersion=17,javaVendor=ADOPTIUM,",
    "daemonRegistryDir=/reg,pid=123,idleTimeout=10000,daemonOpts=-Xmx1g,-Xms512m]",
);

/// A current-generation line with every optional slot present.
pub(crate) const CURRENT_FULL: &str = concat!(
    "DefaultDaemonContext[uid=7f3c,javaHome=/opt/jdk-21,javaVersion=21,javaVendor=AZUL,",
    "daemonRegistryDir=/home/dev/.gradle/daemon,pid=4242,idleTimeout=10800000,",
    "priority=LOW,applyInstrumentationAgent=true,nativeServicesMode=DISABLED,",
    "daemonOpts=-Xmx2g,-Dfile.encoding=UTF-8]",
);

/// A legacy-generation line.
pub(crate) const LEGACY_MINIMAL: &str = concat!(
    "DefaultDaemonContext[uid=abc,javaHome=/jdk,daemonRegistryDir=/reg,pid=123,",
    "idleTimeout=10000,daemonOpts=-Xmx1g,-Xms512m]",
);

pub(crate) fn version(text: &str) -> crate::ToolVersion {
    text.parse().expect("test version should parse")
}
