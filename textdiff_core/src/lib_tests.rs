use super::*;
use crate::config::DEFAULT_MAX_LINES;

fn lines_of(count: usize) -> String {
    vec!["line"; count].join("\n")
}

#[test]
fn generate_text_diff_internal_matches_engine() {
    let result = generate_text_diff_internal("a\nb\nc", "a\nx\nc").expect("diff ok");
    assert_eq!(result, compute_diff("a\nb\nc", "a\nx\nc"));
    assert_eq!(result.stats.added, 1);
    assert_eq!(result.stats.removed, 1);
    assert_eq!(result.stats.unchanged, 2);
}

#[test]
fn generate_text_diff_internal_accepts_limit_sized_input() {
    let text = lines_of(DEFAULT_MAX_LINES);
    let result = generate_text_diff_internal(&text, "line").expect("within limits");
    assert_eq!(result.stats.unchanged, 1);
    assert_eq!(result.stats.removed, DEFAULT_MAX_LINES - 1);
}

#[test]
fn generate_text_diff_internal_rejects_oversized_input() {
    let text = lines_of(DEFAULT_MAX_LINES + 1);
    let err = generate_text_diff_internal(&text, "").unwrap_err();
    assert!(err.contains("original text"), "msg: {err}");
    assert!(err.contains("limit is"), "msg: {err}");
}

#[test]
fn generate_text_diff_internal_rejects_large_table() {
    // Both sides fit the line limit but the table would not.
    let text = lines_of(DEFAULT_MAX_LINES);
    let err = generate_text_diff_internal(&text, &text).unwrap_err();
    assert!(err.contains("cells"), "msg: {err}");
}

#[test]
fn text_diff_report_internal_includes_stats() {
    let report = text_diff_report_internal("keep\nold", "keep\nnew").expect("report ok");
    assert!(report.contains("Added lines: 1"));
    assert!(report.contains("Removed lines: 1"));
    assert!(report.contains("Unchanged lines: 1"));
    assert!(report.contains("[removed] old"));
    assert!(report.contains("[added] new"));
}

#[test]
fn unified_text_diff_internal_uses_default_context() {
    let old = "1\n2\n3\n4\n5\n6\n7\n8\n9";
    let new = "1\n2\n3\n4\nfive\n6\n7\n8\n9";
    let diff = unified_text_diff_internal(old, new, "a/file.txt", "b/file.txt").expect("diff ok");
    assert!(diff.starts_with("--- a/file.txt\n+++ b/file.txt\n"));
    assert!(diff.contains("@@ -2,7 +2,7 @@"));
    assert!(diff.contains("+five\n-5\n"));
    assert!(!diff.contains(" 1\n"));
}

#[test]
fn unified_text_diff_internal_empty_for_identical() {
    let diff = unified_text_diff_internal("same", "same", "a", "b").expect("diff ok");
    assert!(diff.is_empty());
}

#[test]
fn report_file_name_is_stable() {
    assert_eq!(text_diff_report_file_name(), "text_diff_result.txt");
}
