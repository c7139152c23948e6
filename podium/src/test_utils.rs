//! Test utilities: builders for the results-page markup the rewriter targets.

/// Builds a two-column header block, optionally with a unit annotation on
/// the result label.
#[must_use]
pub fn header(unit: Option<&str>) -> String {
    let result_label = unit.map_or_else(
        || "Result".to_owned(),
        |unit| format!("Result ({unit})"),
    );
    format!(
        r#"<div class="sprint-card sprint-card-header mb-2">
    <div class="d-flex justify-content-between align-items-center">
        <span class="sprint-card-label">Name</span>
        <span class="sprint-card-label">{result_label}</span>
    </div>
</div>"#
    )
}

/// Builds one unranked result card.
///
/// `variant` is the style-class variant (`benchmark-card`, `player-card` or
/// `player-card-secondary`); `highlighted` adds `bg-highlight` to the card
/// and the bold marker classes to both spans, the way the page renders the
/// player's own row.
#[must_use]
pub fn card(variant: &str, name: &str, result: &str, highlighted: bool) -> String {
    let card_classes = if highlighted {
        format!("{variant} bg-highlight")
    } else {
        variant.to_owned()
    };
    let span_classes = if highlighted {
        " color-white font-weight-bold"
    } else {
        ""
    };
    format!(
        r#"<div class="sprint-card {card_classes} mb-2">
    <div class="d-flex justify-content-between align-items-center">
        <span class="sprint-card-name{span_classes}">{name}</span>
        <span class="sprint-card-result{span_classes}">{result}</span>
    </div>
</div>"#
    )
}

/// Builds the marker heading that opens a named results table.
#[must_use]
pub fn section_heading(title: &str) -> String {
    format!(r#"<h5 class="mb-3 text-center">{title} Results</h5>"#)
}

/// Assembles a results page with one heading-delimited table per title, each
/// holding an unranked header, a benchmark card and a highlighted player
/// card. The page closes with the div run the built-in Dribbling section
/// uses as its end marker.
#[must_use]
pub fn results_page(titles: &[&str]) -> String {
    let mut page = String::from("<!DOCTYPE html>\n<html><body>\n<div>\n");
    for title in titles {
        page.push_str(&section_heading(title));
        page.push('\n');
        page.push_str(&header(Some("seconds")));
        page.push('\n');
        page.push_str(&card("benchmark-card", "Benchmark", "10.0s", false));
        page.push('\n');
        page.push_str(&card("player-card", "Player", "11.0s", true));
        page.push('\n');
    }
    page.push_str(
        "</div>\n                    </div>\n                </div>\n            </div>\n</body></html>\n",
    );
    page
}

/// The five-table page the built-in section list expects.
#[must_use]
pub fn sample_page() -> String {
    results_page(&[
        "20m Sprint",
        "Gewandtheit",
        "Ballkontrolle",
        "Balljonglieren",
        "Dribbling",
    ])
}
