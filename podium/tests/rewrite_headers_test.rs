//! Tests for table-header rewriting.

use podium::rewrite::rewrite_headers;
use podium::test_utils::header;

#[test]
fn rewrites_two_column_header_to_three_columns() {
    let (out, count) = rewrite_headers(&header(Some("seconds")));

    assert_eq!(count, 1);
    assert!(out.contains(r#"<span class="sprint-card-label">RANK</span>"#));
    assert!(out.contains(r#"<span class="sprint-card-label">NAME</span>"#));
    assert!(out.contains(r#"<span class="sprint-card-label">RESULT (SECONDS)</span>"#));
}

#[test]
fn preserves_unit_annotation_upper_cased() {
    let (out, count) = rewrite_headers(&header(Some("count")));

    assert_eq!(count, 1);
    assert!(out.contains("RESULT (COUNT)"));
    assert!(!out.contains("Result (count)"));
}

#[test]
fn header_without_annotation_gets_plain_result_label() {
    let (out, count) = rewrite_headers(&header(None));

    assert_eq!(count, 1);
    assert!(out.contains(r#"<span class="sprint-card-label">RESULT</span>"#));
    assert!(!out.contains("RESULT ("));
}

#[test]
fn rewrites_every_header_in_the_document() {
    let doc = format!("{}\nfiller\n{}", header(Some("seconds")), header(Some("count")));
    let (out, count) = rewrite_headers(&doc);

    assert_eq!(count, 2);
    assert!(out.contains("RESULT (SECONDS)"));
    assert!(out.contains("RESULT (COUNT)"));
}

#[test]
fn rewriting_twice_equals_rewriting_once() {
    let doc = format!("{}\n{}", header(Some("seconds")), header(None));
    let (once, first) = rewrite_headers(&doc);
    let (twice, second) = rewrite_headers(&once);

    assert_eq!(first, 2);
    assert_eq!(second, 0);
    assert_eq!(once, twice);
}

#[test]
fn leaves_unrelated_markup_alone() {
    let doc = "<p>No headers here</p>";
    let (out, count) = rewrite_headers(doc);

    assert_eq!(count, 0);
    assert_eq!(out, doc);
}
