use super::{Metrics, PageGeometry};
use crate::heading::{Heading, HeadingId, HeadingLevel};
use std::collections::HashSet;

fn heading(id: usize, level: HeadingLevel, major: usize, body: &str) -> Heading {
    Heading {
        id: HeadingId(id),
        text: format!("Heading {id}"),
        level,
        major: Some(HeadingId(major)),
        anchor: format!("heading-{id}"),
        body: body.to_string(),
        line: 0,
    }
}

fn page() -> Vec<Heading> {
    vec![
        heading(0, HeadingLevel::Major, 0, "one line"),
        heading(1, HeadingLevel::Minor, 0, "first\nsecond"),
        heading(2, HeadingLevel::Major, 2, ""),
    ]
}

#[test]
fn test_text_height_wraps_at_width() {
    let metrics = Metrics::default();

    assert!(metrics.text_height("", 800.0).abs() < f64::EPSILON);
    assert!((metrics.text_height("short", 800.0) - 16.0).abs() < f64::EPSILON);
    // Ten characters fit in 80px, so twenty need two rows.
    assert!((metrics.text_height(&"x".repeat(20), 80.0) - 32.0).abs() < f64::EPSILON);
    // Blank lines still take a row.
    assert!((metrics.text_height("a\n\nb", 800.0) - 48.0).abs() < f64::EPSILON);
}

#[test]
fn test_tops_with_all_bodies_shown() {
    let shown: HashSet<_> = [HeadingId(0), HeadingId(2)].into_iter().collect();
    let geometry = PageGeometry::compute("intro", &page(), &shown, 800.0, 0.0, &Metrics::default());

    assert_eq!(geometry.top(HeadingId(0)), Some(16.0));
    assert_eq!(geometry.top(HeadingId(1)), Some(64.0));
    assert_eq!(geometry.top(HeadingId(2)), Some(128.0));
    assert!((geometry.height() - 160.0).abs() < f64::EPSILON);
}

#[test]
fn test_hidden_major_body_hides_its_minors() {
    let shown: HashSet<_> = [HeadingId(2)].into_iter().collect();
    let geometry = PageGeometry::compute("", &page(), &shown, 800.0, 0.0, &Metrics::default());

    assert_eq!(geometry.top(HeadingId(0)), Some(0.0));
    assert_eq!(geometry.top(HeadingId(1)), None);
    assert_eq!(geometry.top(HeadingId(2)), Some(32.0));
    assert_eq!(
        geometry.visible_tops(),
        vec![(HeadingId(0), 0.0), (HeadingId(2), 32.0)]
    );
}

#[test]
fn test_heading_at_position() {
    let shown: HashSet<_> = [HeadingId(0), HeadingId(2)].into_iter().collect();
    let geometry = PageGeometry::compute("intro", &page(), &shown, 800.0, 0.0, &Metrics::default());

    assert_eq!(geometry.heading_at(0.0), None);
    assert_eq!(geometry.heading_at(16.0), Some(HeadingId(0)));
    assert_eq!(geometry.heading_at(100.0), Some(HeadingId(1)));
    assert_eq!(geometry.heading_at(1000.0), Some(HeadingId(2)));
}

#[test]
fn test_top_padding_shifts_the_whole_page() {
    let shown: HashSet<_> = [HeadingId(0), HeadingId(2)].into_iter().collect();
    let geometry =
        PageGeometry::compute("intro", &page(), &shown, 800.0, 48.0, &Metrics::default());

    assert!((geometry.top_padding() - 48.0).abs() < f64::EPSILON);
    assert_eq!(geometry.top(HeadingId(0)), Some(64.0));
    assert_eq!(geometry.top(HeadingId(2)), Some(176.0));
    assert!((geometry.height() - 208.0).abs() < f64::EPSILON);
    assert_eq!(geometry.heading_at(50.0), None);
}
