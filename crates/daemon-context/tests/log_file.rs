//! Integration tests scanning daemon log files on disk.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clarity and assertions"
)]

use std::io::Write;

use camino::Utf8PathBuf;
use daemon_context::{
    ContextError, ContextParser, DaemonLogFile, LineSource, ParserOptions, ScanPolicy,
    ToolVersion, parse_from_source,
};
use daemon_vocabulary::JvmVendor;
use rstest::{fixture, rstest};
use tempfile::TempDir;

const CONTEXT_LINE: &str = concat!(
    "2026-10-14T09:12:44.021+0000 [DEBUG] Daemon started: ",
    "DefaultDaemonContext[uid=4d1c,javaHome=/opt/jdk-17,javaVersion=17,javaVendor=ADOPTIUM,",
    "daemonRegistryDir=/home/dev/.gradle/daemon,pid=9120,idleTimeout=10800000,",
    "priority=NORMAL,applyInstrumentationAgent=true,nativeServicesMode=ENABLED,",
    "daemonOpts=-Xmx2g,-XX:+UseParallelGC]",
);

fn init_tracing() {
    let _subscriber = tracing_subscriber::fmt()
        .with_env_filter("daemon_context=debug")
        .with_test_writer()
        .try_init();
}

#[fixture]
fn log_dir() -> TempDir {
    init_tracing();
    TempDir::new().expect("temp dir")
}

#[fixture]
fn current() -> ToolVersion {
    "8.10.2".parse().expect("valid version")
}

fn write_log(dir: &TempDir, lines: &[&str]) -> DaemonLogFile {
    let path = Utf8PathBuf::from_path_buf(dir.path().join("daemon-9120.out.log"))
        .expect("utf-8 temp path");
    let mut file = std::fs::File::create(&path).expect("create log");
    for line in lines {
        writeln!(file, "{line}").expect("write log line");
    }
    DaemonLogFile::new(path)
}

#[rstest]
fn finds_context_line_among_daemon_output(log_dir: TempDir, current: ToolVersion) {
    let log = write_log(
        &log_dir,
        &[
            "2026-10-14T09:12:43.900+0000 [INFO] Starting Gradle daemon",
            CONTEXT_LINE,
            "2026-10-14T09:12:44.100+0000 [INFO] Daemon server started",
        ],
    );

    let context = parse_from_source(&log, &current)
        .expect("scan succeeds")
        .expect("context line present");

    assert_eq!(context.uid(), Some("4d1c"));
    assert_eq!(context.java_home().as_str(), "/opt/jdk-17");
    assert_eq!(context.java_vendor(), JvmVendor::Adoptium);
    assert_eq!(context.pid(), Some(9120));
    assert!(context.instrumentation_agent_applied());
    assert_eq!(context.jvm_options(), ["-Xmx2g", "-XX:+UseParallelGC"]);
}

#[rstest]
fn log_without_context_line_yields_none(log_dir: TempDir, current: ToolVersion) {
    let log = write_log(&log_dir, &["Starting Gradle daemon", "Daemon server started"]);

    let found = parse_from_source(&log, &current).expect("scan succeeds");

    assert!(found.is_none());
}

#[rstest]
fn empty_log_yields_none(log_dir: TempDir, current: ToolVersion) {
    let log = write_log(&log_dir, &[]);

    assert!(parse_from_source(&log, &current).expect("scan succeeds").is_none());
}

#[rstest]
fn missing_log_is_source_unavailable(log_dir: TempDir, current: ToolVersion) {
    let path = Utf8PathBuf::from_path_buf(log_dir.path().join("absent.log"))
        .expect("utf-8 temp path");
    let log = DaemonLogFile::new(path.clone());

    let error = parse_from_source(&log, &current).expect_err("missing file fails");

    match &error {
        ContextError::SourceUnavailable { source_name, source } => {
            assert_eq!(source_name, path.as_str());
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected SourceUnavailable, got {other:?}"),
    }
    assert_eq!(
        error.to_string(),
        format!("unable to parse DefaultDaemonContext from source: [{path}]")
    );
}

#[rstest]
fn skip_invalid_policy_reaches_a_later_line(log_dir: TempDir, current: ToolVersion) {
    let corrupt = CONTEXT_LINE.replace("pid=9120", "pid=nine");
    let log = write_log(&log_dir, &[corrupt.as_str(), CONTEXT_LINE]);
    let parser = ContextParser::new(
        ParserOptions::default().with_scan_policy(ScanPolicy::SkipInvalid),
    );

    let context = parser
        .parse_source(&log, &current)
        .expect("scan succeeds")
        .expect("second line decodes");

    assert_eq!(context.pid(), Some(9120));
}

#[rstest]
fn rescanning_a_file_starts_from_the_top(log_dir: TempDir, current: ToolVersion) {
    let log = write_log(&log_dir, &[CONTEXT_LINE]);

    let first = parse_from_source(&log, &current).expect("first scan");
    let second = parse_from_source(&log, &current).expect("second scan");

    assert_eq!(first, second);
    assert_eq!(log.describe(), log.path().as_str());
}
