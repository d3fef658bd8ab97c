//! Tests for version parsing and grammar selection.

use std::cmp::Ordering;

use rstest::rstest;

use super::support::version;
use crate::grammar::GrammarGeneration;
use crate::version::{ToolVersion, select_generation};

#[rstest]
#[case::two_components("8.7", ToolVersion::new(8, 7, 0))]
#[case::three_components("8.10.2", ToolVersion::new(8, 10, 2))]
fn parses_numeric_versions(#[case] text: &str, #[case] expected: ToolVersion) {
    assert_eq!(version(text), expected);
}

#[test]
fn keeps_qualifier_but_ignores_it_for_ordering() {
    let candidate = version("8.7-rc-1");
    assert_eq!(candidate.qualifier(), Some("rc-1"));
    assert_eq!(candidate.base_version(), ToolVersion::new(8, 7, 0));
    assert_eq!(
        candidate.base_cmp(&ToolVersion::new(8, 7, 0)),
        Ordering::Equal
    );
}

#[test]
fn snapshot_timestamps_are_qualifiers() {
    let snapshot = version("8.8-20240301000000+0000");
    assert_eq!(snapshot.base_version(), ToolVersion::new(8, 8, 0));
}

#[rstest]
#[case::empty("")]
#[case::major_only("8")]
#[case::words("eight.seven")]
#[case::too_many("8.7.1.2")]
#[case::trailing_dot("8.")]
fn rejects_malformed_versions(#[case] text: &str) {
    let error = text.parse::<ToolVersion>().expect_err("should reject");
    assert_eq!(error.input(), text);
}

#[test]
fn display_omits_zero_patch() {
    assert_eq!(version("8.7").to_string(), "8.7");
    assert_eq!(version("8.10.2").to_string(), "8.10.2");
    assert_eq!(version("8.9-rc-2").to_string(), "8.9-rc-2");
}

#[rstest]
#[case::build_metadata("8.8+build.1", "build.1")]
#[case::pre_release("8.8-milestone-3", "milestone-3")]
#[case::snapshot("8.8-20240301000000+0000", "20240301000000+0000")]
fn display_keeps_the_qualifier_separator(#[case] text: &str, #[case] qualifier: &str) {
    let parsed = version(text);
    assert_eq!(parsed.qualifier(), Some(qualifier));
    assert_eq!(parsed.to_string(), text);
}

#[rstest]
#[case::older_major("7.6.4", GrammarGeneration::Legacy)]
#[case::older_minor("8.6", GrammarGeneration::Legacy)]
#[case::threshold("8.7", GrammarGeneration::Legacy)]
#[case::threshold_candidate("8.7-rc-3", GrammarGeneration::Legacy)]
#[case::next_minor("8.8", GrammarGeneration::Current)]
#[case::patch_above("8.7.1", GrammarGeneration::Current)]
#[case::double_digit_minor("8.10", GrammarGeneration::Current)]
#[case::next_major("9.0", GrammarGeneration::Current)]
fn selects_generation_by_threshold(#[case] text: &str, #[case] expected: GrammarGeneration) {
    let candidate = version(text);
    assert_eq!(select_generation(&candidate), expected);
    assert_eq!(GrammarGeneration::for_version(&candidate), expected);
}
