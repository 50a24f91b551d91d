use super::{LookupFallback, Synchronizer};
use crate::error::ConfigError;
use crate::heading::{Heading, HeadingId, HeadingLevel};
use crate::menu::Menu;
use crate::waypoint::{Crossing, Direction};

fn heading(id: usize, level: HeadingLevel, major: Option<usize>) -> Heading {
    Heading {
        id: HeadingId(id),
        text: format!("Heading {id}"),
        level,
        major: major.map(HeadingId),
        anchor: format!("heading-{id}"),
        body: String::new(),
        line: 0,
    }
}

fn headings() -> Vec<Heading> {
    vec![
        heading(0, HeadingLevel::Minor, None),
        heading(1, HeadingLevel::Major, Some(1)),
        heading(2, HeadingLevel::Minor, Some(1)),
    ]
}

/// Menu built from the major headings only, so minor headings lack entries.
fn majors_only_menu(headings: &[Heading]) -> Menu {
    let majors: Vec<_> = headings.iter().filter(|h| h.is_major()).cloned().collect();
    Menu::build(&majors)
}

fn down(id: usize) -> Crossing {
    Crossing {
        heading: HeadingId(id),
        direction: Direction::Down,
    }
}

#[test]
fn test_ancestor_fallback_highlights_major() {
    let headings = headings();
    let mut menu = majors_only_menu(&headings);
    let sync = Synchronizer::new(LookupFallback::Ancestor);

    let entry = sync.highlight(&mut menu, &headings, HeadingId(2));
    assert_eq!(entry, menu.entry_for(HeadingId(1)));
    assert_eq!(menu.focused(), entry);
}

#[test]
fn test_ignore_fallback_does_nothing() {
    let headings = headings();
    let mut menu = majors_only_menu(&headings);
    let sync = Synchronizer::new(LookupFallback::Ignore);

    assert_eq!(sync.highlight(&mut menu, &headings, HeadingId(2)), None);
    assert_eq!(menu.focused(), None);
}

#[test]
fn test_orphan_heading_is_a_no_op_under_both_policies() {
    let headings = headings();
    for fallback in [LookupFallback::Ancestor, LookupFallback::Ignore] {
        let mut menu = Menu::build(&headings);
        let sync = Synchronizer::new(fallback);
        assert_eq!(sync.resolve(&menu, &headings, HeadingId(0)), None);
        assert_eq!(sync.highlight(&mut menu, &headings, HeadingId(0)), None);
    }
}

#[test]
fn test_crossing_suppressed_while_scrolling() {
    let headings = headings();
    let mut menu = Menu::build(&headings);
    let sync = Synchronizer::new(LookupFallback::Ancestor);

    assert_eq!(sync.on_crossing(&mut menu, &headings, down(2), true, None), None);
    assert_eq!(menu.focused(), None);

    let entry = sync.on_crossing(&mut menu, &headings, down(2), false, None);
    assert_eq!(entry, menu.entry_for(HeadingId(2)));
}

#[test]
fn test_hash_in_view_wins_over_crossed_heading() {
    let headings = headings();
    let mut menu = Menu::build(&headings);
    let sync = Synchronizer::new(LookupFallback::Ancestor);

    let entry = sync.on_crossing(&mut menu, &headings, down(2), false, Some(HeadingId(1)));
    assert_eq!(entry, menu.entry_for(HeadingId(1)));
}

#[test]
fn test_fallback_parsing() {
    assert_eq!("Ancestor".parse::<LookupFallback>(), Ok(LookupFallback::Ancestor));
    assert_eq!("ignore".parse::<LookupFallback>(), Ok(LookupFallback::Ignore));
    assert_eq!(
        "parent".parse::<LookupFallback>(),
        Err(ConfigError::UnknownValue {
            setting: "lookup_fallback",
            value: "parent".to_string(),
        })
    );
}
