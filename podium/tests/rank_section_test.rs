//! Tests for per-section rank injection.

use podium::report::SectionStatus;
use podium::rewrite::{add_ranks_to_section, apply};
use podium::section::SectionSpec;
use podium::test_utils::{card, section_heading};

fn spec(name: &str, start: &str, end: &str) -> SectionSpec {
    SectionSpec {
        name: name.to_owned(),
        start: start.to_owned(),
        end: end.to_owned(),
    }
}

#[test]
fn ranks_cards_in_document_order_between_markers() {
    let doc = format!(
        "<!--S-->\n{}\n{}\n<!--E-->",
        card("player-card", "Anna", "12.3s", true),
        card("player-card", "Ben", "11.8s", true),
    );
    let (out, status) = add_ranks_to_section(&doc, &spec("Sprint", "<!--S-->", "<!--E-->"));

    assert_eq!(status, SectionStatus::Ranked { fragments: 2 });
    let anna = out.find("Anna").expect("Anna present");
    let ben = out.find("Ben").expect("Ben present");
    let first = out.find(">1.</span>").expect("first rank present");
    let second = out.find(">2.</span>").expect("second rank present");
    assert!(first < anna, "Anna's card carries the first rank");
    assert!(anna < second && second < ben, "Ben's card carries the second rank");
}

#[test]
fn highlighted_player_cards_get_the_highlighted_rank_span() {
    let doc = format!(
        "<!--S-->\n{}\n{}\n<!--E-->",
        card("player-card", "Anna", "12.3s", true),
        card("benchmark-card", "Benchmark", "10.0s", false),
    );
    let (out, _) = add_ranks_to_section(&doc, &spec("Sprint", "<!--S-->", "<!--E-->"));

    assert!(out.contains(
        r#"<span class="sprint-card-rank color-white font-weight-bold">1.</span>"#
    ));
    assert!(out.contains(r#"<span class="sprint-card-rank">2.</span>"#));
}

#[test]
fn plain_player_card_gets_the_plain_rank_span() {
    let doc = format!(
        "<!--S-->\n{}\n<!--E-->",
        card("player-card-secondary", "Cara", "13.1s", false),
    );
    let (out, _) = add_ranks_to_section(&doc, &spec("Sprint", "<!--S-->", "<!--E-->"));

    assert!(out.contains(r#"<span class="sprint-card-rank">1.</span>"#));
}

#[test]
fn highlighted_benchmark_card_still_gets_the_plain_rank_span() {
    // The highlighted rank styling is reserved for player variants.
    let doc = format!(
        "<!--S-->\n{}\n<!--E-->",
        card("benchmark-card", "Benchmark", "10.0s", true),
    );
    let (out, _) = add_ranks_to_section(&doc, &spec("Sprint", "<!--S-->", "<!--E-->"));

    assert!(out.contains(r#"<span class="sprint-card-rank">1.</span>"#));
    assert!(!out.contains("sprint-card-rank color-white"));
}

#[test]
fn text_outside_the_range_is_untouched() {
    // An unranked card outside the markers must stay unranked.
    let outside = card("player-card", "Zoe", "9.9s", false);
    let doc = format!(
        "{outside}\n<!--S-->\n{}\n<!--E-->\n{outside}",
        card("player-card", "Anna", "12.3s", false),
    );
    let (out, _) = add_ranks_to_section(&doc, &spec("Sprint", "<!--S-->", "<!--E-->"));

    assert!(out.starts_with(&format!("{outside}\n<!--S-->")));
    assert!(out.ends_with(&format!("<!--E-->\n{outside}")));
}

#[test]
fn ranked_sections_are_left_alone_on_a_second_pass() {
    let doc = format!(
        "<!--S-->\n{}\n{}\n<!--E-->",
        card("player-card", "Anna", "12.3s", true),
        card("benchmark-card", "Benchmark", "10.0s", false),
    );
    let section = spec("Sprint", "<!--S-->", "<!--E-->");
    let (once, _) = add_ranks_to_section(&doc, &section);
    let (twice, status) = add_ranks_to_section(&once, &section);

    assert_eq!(once, twice);
    assert_eq!(status, SectionStatus::Ranked { fragments: 0 });
}

#[test]
fn missing_start_marker_leaves_the_document_unchanged() {
    let doc = format!("{}\n<!--E-->", card("player-card", "Anna", "12.3s", false));
    let (out, status) = add_ranks_to_section(&doc, &spec("Sprint", "<!--S-->", "<!--E-->"));

    assert_eq!(out, doc);
    assert_eq!(status, SectionStatus::MissingStartMarker);
}

#[test]
fn missing_end_marker_leaves_the_document_unchanged() {
    let doc = format!("<!--S-->\n{}", card("player-card", "Anna", "12.3s", false));
    let (out, status) = add_ranks_to_section(&doc, &spec("Sprint", "<!--S-->", "<!--E-->"));

    assert_eq!(out, doc);
    assert_eq!(status, SectionStatus::MissingEndMarker);
}

#[test]
fn counter_restarts_for_every_section() {
    let doc = format!(
        "{}\n{}\n{}\n{}\n{}\n{}\n<END>",
        section_heading("Sprint"),
        card("player-card", "Anna", "12.3s", true),
        card("player-card-secondary", "Ben", "11.8s", false),
        section_heading("Dribbling"),
        card("benchmark-card", "Benchmark", "20.0s", false),
        card("player-card", "Cara", "21.4s", true),
    );
    let sections = [
        spec("Sprint", &section_heading("Sprint"), &section_heading("Dribbling")),
        spec("Dribbling", &section_heading("Dribbling"), "<END>"),
    ];
    let (out, report) = apply(&doc, &sections);

    assert_eq!(report.total_fragments(), 4);
    assert_eq!(report.skipped_sections(), 0);
    assert_eq!(out.matches(">1.</span>").count(), 2);
    assert_eq!(out.matches(">2.</span>").count(), 2);
}

#[test]
fn card_count_is_preserved() {
    let doc = format!(
        "<!--S-->\n{}\n{}\n{}\n<!--E-->",
        card("player-card", "Anna", "12.3s", true),
        card("player-card-secondary", "Ben", "11.8s", false),
        card("benchmark-card", "Benchmark", "10.0s", false),
    );
    let (out, _) = add_ranks_to_section(&doc, &spec("Sprint", "<!--S-->", "<!--E-->"));

    assert_eq!(
        doc.matches("sprint-card-name").count(),
        out.matches("sprint-card-name").count()
    );
    assert_eq!(
        doc.matches("sprint-card-result").count(),
        out.matches("sprint-card-result").count()
    );
}
