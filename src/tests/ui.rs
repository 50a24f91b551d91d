use super::{content_lines, px_to_cells};
use crate::config::Config;
use crate::formats::markdown::MarkdownFormat;
use crate::guide::Guide;
use crate::heading::HeadingId;
use crate::input::parse_guide;
use ratatui::text::Line;

fn source() -> String {
    format!(
        "# Handbook\n\nIntro paragraph.\n\n## Basics\n\n{}\n\nSecond paragraph.\n\n### Details\n\nShort.\n\n## Advanced\n\nLast.\n",
        "word ".repeat(30).trim_end()
    )
}

fn load(width: f64, height: f64) -> Guide {
    let parsed = parse_guide(&source(), &MarkdownFormat).unwrap();
    let mut guide = Guide::new(parsed, &Config::default());
    guide.initialize(width, height);
    guide
}

fn text(line: &Line) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}

fn assert_rows_match_geometry(guide: &Guide) {
    let line_height = guide.metrics().line_height;
    let width = guide.layout().unwrap().content_width();
    let lines = content_lines(guide, width);

    let mut shown = 0;
    for heading in guide.headings() {
        let Some(top) = guide.geometry().top(heading.id) else {
            continue;
        };
        let row = lines
            .iter()
            .position(|l| text(l).ends_with(&heading.text))
            .unwrap();
        assert_eq!(row, usize::from(px_to_cells(top, line_height)), "{}", heading.text);
        shown += 1;
    }
    assert!(shown > 0);
    assert_eq!(
        lines.len(),
        usize::from(px_to_cells(guide.geometry().height(), line_height))
    );
}

#[test]
fn test_wide_rows_match_geometry() {
    let guide = load(1000.0, 100.0);
    assert_rows_match_geometry(&guide);
}

#[test]
fn test_narrow_rows_match_geometry() {
    let mut guide = load(600.0, 100.0);
    assert_rows_match_geometry(&guide);

    assert!(guide.toggle_major_section(HeadingId(0)));
    assert_rows_match_geometry(&guide);
}

#[test]
fn test_narrow_rows_start_below_the_bar() {
    let guide = load(600.0, 100.0);
    let width = guide.layout().unwrap().content_width();
    let lines = content_lines(&guide, width);

    assert!(lines[..3].iter().all(|l| text(l).is_empty()));
    assert_eq!(text(&lines[3]), "Intro paragraph.");
}

#[test]
fn test_long_lines_wrap_to_the_measured_height() {
    let guide = load(600.0, 100.0);
    // 149 characters wrap to two rows at 75 columns, plus a blank row and one more line.
    assert!((guide.geometry().body_height(HeadingId(0)) - 64.0).abs() < f64::EPSILON);
}
