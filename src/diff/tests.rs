//! Tests for diff parsing.

use super::helpers::{clean_path, parse_diff_git_line, parse_hunk_header, unquote};
use super::parse_diff;
use crate::error::SandwichError;
use crate::range::LineRange;

#[test]
fn test_parse_modification() {
    let diff = r#"diff --git a/src/lib.rs b/src/lib.rs
index abc1234..def5678 100644
--- a/src/lib.rs
+++ b/src/lib.rs
@@ -3 +3 @@ fn existing_function() {
-    let x = 1;
+    let x = 42;
"#;

    let files = parse_diff(diff).unwrap();

    assert_eq!(files.len(), 1);
    let file = &files[0];
    assert_eq!(file.old_path, "src/lib.rs");
    assert_eq!(file.new_path, "src/lib.rs");
    assert!(!file.is_new);
    assert!(!file.is_deleted);
    assert_eq!(file.old_ranges, vec![LineRange::single(3)]);
    assert_eq!(file.new_ranges, vec![LineRange::single(3)]);
}

#[test]
fn test_parse_new_file() {
    let diff = r#"diff --git a/src/new_file.rs b/src/new_file.rs
new file mode 100644
index 0000000..abc1234
--- /dev/null
+++ b/src/new_file.rs
@@ -0,0 +1,3 @@
+//! New module
+
+pub fn hello() {}
"#;

    let files = parse_diff(diff).unwrap();

    assert_eq!(files.len(), 1);
    assert!(files[0].is_new);
    assert!(!files[0].is_deleted);
    assert_eq!(files[0].new_path, "src/new_file.rs");
    assert_eq!(files[0].display_path(), "src/new_file.rs");
    assert!(files[0].old_ranges.is_empty());
    assert_eq!(files[0].new_ranges, vec![LineRange::new(1, 3)]);
}

#[test]
fn test_parse_deleted_file() {
    let diff = r#"diff --git a/old.txt b/old.txt
deleted file mode 100644
index abc1234..0000000
--- a/old.txt
+++ /dev/null
@@ -1,2 +0,0 @@
-first
-second
"#;

    let files = parse_diff(diff).unwrap();

    assert_eq!(files.len(), 1);
    assert!(files[0].is_deleted);
    assert_eq!(files[0].old_path, "old.txt");
    assert_eq!(files[0].display_path(), "old.txt");
    assert_eq!(files[0].old_ranges, vec![LineRange::new(1, 2)]);
    assert!(files[0].new_ranges.is_empty());
}

#[test]
fn test_parse_multiple_hunks_keep_order_unmerged() {
    let diff = r#"diff --git a/src/main.rs b/src/main.rs
index abc1234..def5678 100644
--- a/src/main.rs
+++ b/src/main.rs
@@ -3,2 +3,2 @@
-a
-b
+A
+B
@@ -5,2 +5,2 @@
-c
-d
+C
+D
"#;

    let files = parse_diff(diff).unwrap();

    assert_eq!(
        files[0].old_ranges,
        vec![LineRange::new(3, 4), LineRange::new(5, 6)]
    );
    assert_eq!(
        files[0].new_ranges,
        vec![LineRange::new(3, 4), LineRange::new(5, 6)]
    );
}

#[test]
fn test_parse_add_only_and_delete_only_hunks() {
    let diff = r#"diff --git a/f.txt b/f.txt
--- a/f.txt
+++ b/f.txt
@@ -10,0 +11,2 @@
+one
+two
@@ -20,3 +21,0 @@
-x
-y
-z
"#;

    let files = parse_diff(diff).unwrap();

    assert_eq!(files[0].old_ranges, vec![LineRange::new(20, 22)]);
    assert_eq!(files[0].new_ranges, vec![LineRange::new(11, 12)]);
}

#[test]
fn test_parse_multiple_files() {
    let diff = r#"diff --git a/a.txt b/a.txt
--- a/a.txt
+++ b/a.txt
@@ -1 +1 @@
-old
+new
diff --git a/b.txt b/b.txt
--- a/b.txt
+++ b/b.txt
@@ -4,0 +5 @@
+added
"#;

    let files = parse_diff(diff).unwrap();

    assert_eq!(files.len(), 2);
    assert_eq!(files[0].new_path, "a.txt");
    assert_eq!(files[1].new_path, "b.txt");
    assert_eq!(files[1].new_ranges, vec![LineRange::single(5)]);
}

#[test]
fn test_parse_hunk_line_that_looks_like_header() {
    // A deleted line "-- x" renders as "--- x" and must stay in the hunk.
    let diff = r#"diff --git a/sql.txt b/sql.txt
--- a/sql.txt
+++ b/sql.txt
@@ -2 +2 @@
--- x
+++ y
"#;

    let files = parse_diff(diff).unwrap();

    assert_eq!(files.len(), 1);
    assert_eq!(files[0].old_ranges, vec![LineRange::single(2)]);
    assert_eq!(files[0].new_ranges, vec![LineRange::single(2)]);
}

#[test]
fn test_parse_no_newline_marker() {
    let diff = r#"diff --git a/f b/f
--- a/f
+++ b/f
@@ -1 +1 @@
-old
\ No newline at end of file
+new
\ No newline at end of file
"#;

    let files = parse_diff(diff).unwrap();

    assert_eq!(files[0].old_ranges, vec![LineRange::single(1)]);
    assert_eq!(files[0].new_ranges, vec![LineRange::single(1)]);
}

#[test]
fn test_parse_rename_and_binary_sections_have_no_ranges() {
    let diff = r#"diff --git a/old name.txt b/new name.txt
similarity index 100%
rename from old name.txt
rename to new name.txt
diff --git a/img.png b/img.png
index 1111111..2222222 100644
Binary files a/img.png and b/img.png differ
diff --git a/empty.txt b/empty.txt
new file mode 100644
index 0000000..e69de29
"#;

    let files = parse_diff(diff).unwrap();

    assert_eq!(files.len(), 3);
    assert_eq!(files[0].old_path, "old name.txt");
    assert_eq!(files[0].new_path, "new name.txt");
    assert!(files[0].old_ranges.is_empty());
    assert_eq!(files[1].new_path, "img.png");
    assert!(files[1].new_ranges.is_empty());
    assert!(files[2].is_new);
    assert_eq!(files[2].new_path, "empty.txt");
}

#[test]
fn test_parse_plain_unified_diff_without_git_header() {
    let diff = "--- a/x.txt\t2024-01-01 00:00:00\n+++ b/x.txt\t2024-01-02 00:00:00\n@@ -2 +2 @@\n-a\n+b\n--- a/y.txt\n+++ b/y.txt\n@@ -1 +1 @@\n-c\n+d\n";

    let files = parse_diff(diff).unwrap();

    assert_eq!(files.len(), 2);
    assert_eq!(files[0].old_path, "x.txt");
    assert_eq!(files[1].new_path, "y.txt");
}

#[test]
fn test_parse_empty_diff() {
    assert!(parse_diff("").unwrap().is_empty());
}

#[test]
fn test_malformed_hunk_header_fails() {
    let diff = "diff --git a/f b/f\n--- a/f\n+++ b/f\n@@ -x +1 @@\n+a\n";

    let err = parse_diff(diff).unwrap_err();

    match err {
        SandwichError::DiffParseError { line, .. } => assert_eq!(line, 4),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_hunk_header_range_overflow_fails() {
    let diff =
        "diff --git a/f b/f\n--- a/f\n+++ b/f\n@@ -18446744073709551615,2 +1 @@\n-a\n-b\n+c\n";

    let err = parse_diff(diff).unwrap_err();

    assert!(matches!(err, SandwichError::DiffParseError { line: 4, .. }));
}

#[test]
fn test_hunk_header_zero_start_with_lines_fails() {
    let diff = "diff --git a/f b/f\n--- a/f\n+++ b/f\n@@ -0,1 +0,1 @@\n-a\n+b\n";

    let err = parse_diff(diff).unwrap_err();

    assert!(matches!(err, SandwichError::DiffParseError { line: 4, .. }));
}

#[test]
fn test_hunk_outside_file_section_fails() {
    let err = parse_diff("@@ -1 +1 @@\n-a\n+b\n").unwrap_err();
    assert!(matches!(err, SandwichError::DiffParseError { line: 1, .. }));
}

#[test]
fn test_hunk_body_overrun_fails() {
    let diff = "diff --git a/f b/f\n--- a/f\n+++ b/f\n@@ -1 +1 @@\n-a\n+b\n+c\n";

    let err = parse_diff(diff).unwrap_err();

    assert!(matches!(err, SandwichError::DiffParseError { line: 7, .. }));
}

#[test]
fn test_truncated_hunk_fails() {
    let diff = "diff --git a/f b/f\n--- a/f\n+++ b/f\n@@ -1,3 +1 @@\n-a\n";

    let err = parse_diff(diff).unwrap_err();

    assert!(err.to_string().contains("unexpected end of diff inside hunk"));
}

#[test]
fn test_plus_header_without_minus_fails() {
    let diff = "diff --git a/f b/f\n+++ b/f\n@@ -1 +1 @@\n-a\n+b\n";

    let err = parse_diff(diff).unwrap_err();

    assert!(matches!(err, SandwichError::DiffParseError { line: 2, .. }));
}

#[test]
fn test_hunk_header_parsing() {
    let h = parse_hunk_header("@@ -10,5 +20,3 @@").unwrap();
    assert_eq!((h.old_start, h.old_count, h.new_start, h.new_count), (10, 5, 20, 3));

    let h = parse_hunk_header("@@ -10 +20 @@ fn main() {").unwrap();
    assert_eq!((h.old_start, h.old_count, h.new_start, h.new_count), (10, 1, 20, 1));

    let h = parse_hunk_header("@@ -0,0 +1,5 @@").unwrap();
    assert_eq!((h.old_count, h.new_start, h.new_count), (0, 1, 5));

    assert!(parse_hunk_header("@@ -0,1 +1 @@").is_none());
    assert!(parse_hunk_header("@@ -1 +18446744073709551615,3 @@").is_none());
    assert!(parse_hunk_header("not a hunk header").is_none());
    assert!(parse_hunk_header("@@@ -1 -1 +1 @@@").is_none());
}

#[test]
fn test_diff_git_line_parsing() {
    assert_eq!(
        parse_diff_git_line("a/src/lib.rs b/src/lib.rs"),
        Some(("src/lib.rs".to_string(), "src/lib.rs".to_string()))
    );
    assert_eq!(
        parse_diff_git_line("a/my file.txt b/my file.txt"),
        Some(("my file.txt".to_string(), "my file.txt".to_string()))
    );
    assert_eq!(
        parse_diff_git_line(r#""a/tab\there.txt" "b/tab\there.txt""#),
        Some(("tab\there.txt".to_string(), "tab\there.txt".to_string()))
    );
}

#[test]
fn test_clean_path_and_unquote() {
    assert_eq!(clean_path("a/src/lib.rs"), "src/lib.rs");
    assert_eq!(clean_path("b/src/lib.rs\t2024-01-01"), "src/lib.rs");
    assert_eq!(clean_path("plain.txt"), "plain.txt");
    assert_eq!(clean_path("src\\win\\path.rs"), "src/win/path.rs");
    assert_eq!(unquote(r#""caf\303\251.txt""#), "café.txt");
    assert_eq!(unquote("unquoted"), "unquoted");
}
