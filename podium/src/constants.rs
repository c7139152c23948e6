use crate::section::SectionSpec;
use regex::Regex;
use std::sync::OnceLock;

/// Name of the optional configuration file.
pub const CONFIG_FILENAME: &str = ".podium.toml";

/// Input file processed when neither the CLI nor the config names one.
pub const DEFAULT_INPUT: &str = "index.html";

/// Class marker carried by highlighted name/result spans. A player card whose
/// pair carries this marker gets the matching highlighted rank span.
pub const HIGHLIGHT_CLASSES: &str = "color-white font-weight-bold";

/// Regex for two-column header blocks that do not yet carry a RANK column.
///
/// The first label must be `Name`, so a rewritten header (which starts with
/// `RANK`) never matches again. The `Result` label may carry a parenthesized
/// unit annotation, captured as `unit`.
///
/// # Panics
///
/// Panics if the regex pattern is invalid.
pub fn header_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| {
        Regex::new(
            r#"(?P<prefix><div class="sprint-card sprint-card-header mb-2">\s*<div class="d-flex justify-content-between align-items-center">\s*)<span class="sprint-card-label">Name</span>\s*<span class="sprint-card-label">Result(?: \((?P<unit>[^)]+)\))?</span>"#,
        )
        .expect("Invalid header regex pattern")
    })
}

/// Regex for unranked result cards.
///
/// The inner pair must begin with the name span, so a card whose flex row
/// already starts with a rank span never matches. This replaces the negative
/// lookahead the page's card shape would otherwise call for; the `regex`
/// crate has no lookaround.
///
/// # Panics
///
/// Panics if the regex pattern is invalid.
pub fn card_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| {
        Regex::new(
            r#"<div class="sprint-card (?P<classes>(?:benchmark-card|player-card(?:-secondary)?)(?: bg-highlight)? mb-2)">\s*<div class="d-flex justify-content-between align-items-center">\s*(?P<pair><span class="sprint-card-name[^"]*"[^>]*>[^<]+</span>\s*<span class="sprint-card-result[^"]*"[^>]*>[^<]+</span>)\s*</div>\s*</div>"#,
        )
        .expect("Invalid card regex pattern")
    })
}

fn heading(title: &str) -> String {
    format!(r#"<h5 class="mb-3 text-center">{title} Results</h5>"#)
}

/// Built-in section list for the results page. The 10m Sprint table already
/// carries ranks, so it is not listed. A `.podium.toml` file may replace this
/// list entirely.
pub fn default_sections() -> Vec<SectionSpec> {
    vec![
        SectionSpec {
            name: "20m Sprint".to_owned(),
            start: heading("20m Sprint"),
            end: heading("Gewandtheit"),
        },
        SectionSpec {
            name: "Gewandtheit".to_owned(),
            start: heading("Gewandtheit"),
            end: heading("Ballkontrolle"),
        },
        SectionSpec {
            name: "Ballkontrolle".to_owned(),
            start: heading("Ballkontrolle"),
            end: heading("Balljonglieren"),
        },
        SectionSpec {
            name: "Balljonglieren".to_owned(),
            start: heading("Balljonglieren"),
            end: heading("Dribbling"),
        },
        SectionSpec {
            name: "Dribbling".to_owned(),
            start: heading("Dribbling"),
            // Last table: bounded by the closing divs of the results container.
            end: "</div>\n                    </div>\n                </div>\n            </div>"
                .to_owned(),
        },
    ]
}
