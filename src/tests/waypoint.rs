use super::{crossings, Direction};
use crate::heading::HeadingId;

fn tops() -> Vec<(HeadingId, f64)> {
    vec![
        (HeadingId(0), 0.0),
        (HeadingId(1), 100.0),
        (HeadingId(2), 250.0),
    ]
}

#[test]
fn test_scrolling_down_reports_in_document_order() {
    let found = crossings(&tops(), 0.0, 300.0);
    let ids: Vec<_> = found.iter().map(|c| c.heading).collect();
    assert_eq!(ids, vec![HeadingId(1), HeadingId(2)]);
    assert!(found.iter().all(|c| c.direction == Direction::Down));
}

#[test]
fn test_scrolling_up_reports_in_reverse_order() {
    let found = crossings(&tops(), 300.0, 50.0);
    let ids: Vec<_> = found.iter().map(|c| c.heading).collect();
    assert_eq!(ids, vec![HeadingId(2), HeadingId(1)]);
    assert!(found.iter().all(|c| c.direction == Direction::Up));
}

#[test]
fn test_no_movement_no_crossing() {
    assert!(crossings(&tops(), 100.0, 100.0).is_empty());
}

#[test]
fn test_landing_exactly_on_a_heading_crosses_it() {
    let found = crossings(&tops(), 90.0, 100.0);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].heading, HeadingId(1));
}
