use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::domain::{ProfileFields, ProfileValue, SectionStat, SectionStats};

use super::ParseError;

const PROFILE_ROWS_CSS: &str = ".main-info-pnl table tbody tr";
const SECTION_LABEL_CSS: &str = ".section-lbl";

/// Marker the result page puts in the answer cell of an unattempted question.
const IGNORED_MARKER: &str = "--";

static PROFILE_ROWS: LazyLock<Selector> = LazyLock::new(|| parse_selector(PROFILE_ROWS_CSS));
static SECTION_LABEL: LazyLock<Selector> = LazyLock::new(|| parse_selector(SECTION_LABEL_CSS));
static QUESTION_PANEL: LazyLock<Selector> = LazyLock::new(|| parse_selector(".question-pnl"));
static CELL: LazyLock<Selector> = LazyLock::new(|| parse_selector("td"));
static IMG: LazyLock<Selector> = LazyLock::new(|| parse_selector("img"));
static CORRECT_ANSWER: LazyLock<Selector> = LazyLock::new(|| parse_selector(".rightAns"));
static ANSWER_CELL: LazyLock<Selector> =
    LazyLock::new(|| parse_selector(".menu-tbl tbody tr td"));

fn parse_selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selectors are valid CSS")
}

#[derive(Debug, PartialEq)]
enum Verdict {
    Right,
    Wrong,
    Ignored,
}

/// Parses a result page and pulls out the candidate's profile table and the
/// per-section answer tallies. Never fails: anything that doesn't look like
/// the expected markup just contributes nothing.
pub fn extract(html: &str) -> (ProfileFields, SectionStats) {
    let document = Html::parse_document(html);
    (profile_fields(&document), section_stats(&document))
}

/// Same as [`extract`], but rejects documents that have no profile rows or no
/// section labels at all.
pub fn extract_strict(html: &str) -> Result<(ProfileFields, SectionStats), ParseError> {
    let document = Html::parse_document(html);

    if document.select(&PROFILE_ROWS).next().is_none() {
        return Err(ParseError::MissingElement(PROFILE_ROWS_CSS));
    }
    if document.select(&SECTION_LABEL).next().is_none() {
        return Err(ParseError::MissingElement(SECTION_LABEL_CSS));
    }

    Ok((profile_fields(&document), section_stats(&document)))
}

pub fn profile_fields(document: &Html) -> ProfileFields {
    let mut fields = ProfileFields::new();

    for row in document.select(&PROFILE_ROWS) {
        let Some(label_cell) = row.select(&CELL).next() else {
            continue;
        };
        let Some(value_cell) = row.select(&CELL).last() else {
            continue;
        };

        let label = trimmed_text(label_cell);
        let value = match value_cell.select(&IMG).next() {
            Some(img) => match img.value().attr("src") {
                Some(src) => ProfileValue::Image(src.to_string()),
                // An image without a source still supersedes an earlier row
                // with the same label, leaving the label without a value.
                None => {
                    fields.remove(&label);
                    continue;
                }
            },
            None => ProfileValue::Text(trimmed_text(value_cell)),
        };

        fields.insert(label, value);
    }

    fields
}

pub fn section_stats(document: &Html) -> SectionStats {
    let mut stats = SectionStats::new();

    for (index, label) in document.select(&SECTION_LABEL).enumerate() {
        let title = match trimmed_text(label) {
            t if t.is_empty() => format!("Section {}", index + 1),
            t => t,
        };

        let mut stat = SectionStat::default();
        for question in questions_in_section(label) {
            match score_question(question) {
                Verdict::Right => stat.right += 1,
                Verdict::Wrong => stat.wrong += 1,
                Verdict::Ignored => stat.ignored += 1,
            }
        }

        stats.insert(title, stat);
    }

    stats
}

/// Question panels among the siblings after `label`, stopping at the next
/// section label.
fn questions_in_section(label: ElementRef<'_>) -> impl Iterator<Item = ElementRef<'_>> {
    label
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .take_while(|el| !SECTION_LABEL.matches(el))
        .filter(|el| QUESTION_PANEL.matches(el))
}

fn score_question(question: ElementRef) -> Verdict {
    let correct: String = question
        .select(&CORRECT_ANSWER)
        .flat_map(|el| el.text())
        .collect();
    let selected = question
        .select(&ANSWER_CELL)
        .last()
        .map(trimmed_text)
        .unwrap_or_default();

    grade(correct.trim(), &selected)
}

// Only the first character of the key is compared; the key cell can carry
// more than the option letter.
fn grade(correct: &str, selected: &str) -> Verdict {
    if selected == IGNORED_MARKER {
        return Verdict::Ignored;
    }

    match correct.chars().next() {
        Some(c) if selected.chars().eq(std::iter::once(c)) => Verdict::Right,
        _ => Verdict::Wrong,
    }
}

fn trimmed_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}
