//! The UI renders the guide's navigation state into something visible in a terminal.
//!
//! Wide layouts draw the menu as a sidebar beside the content. Narrow layouts draw a
//! fixed bar above the content and open the menu as an overlay while it has focus.
//! Pixel geometry from the guide is mapped onto cells with the guide's metrics.

use crate::geometry::Metrics;
use crate::guide::Guide;
use crate::heading::HeadingLevel;
use crate::layout::ViewMode;
use crate::menu::{EntryId, Menu};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Which pane receives navigation keys.
pub enum Focus {
    /// Keys move the focused menu entry.
    Menu,
    /// Keys scroll the content.
    Content,
}

#[derive(Debug)]
/// Front-end state that the guide itself does not track.
pub struct Viewer {
    /// Pane receiving navigation keys.
    pub focus: Focus,
    /// Status feedback displayed in the help bar.
    pub message: Option<String>,
    /// Position in the cycle of on-screen cross-references.
    pub link_index: usize,
}

impl Default for Viewer {
    fn default() -> Self {
        Self {
            focus: Focus::Content,
            message: None,
            link_index: 0,
        }
    }
}

#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
/// Number of whole cells covering `px` pixels of size `cell`.
pub fn px_to_cells(px: f64, cell: f64) -> u16 {
    (px / cell).round().clamp(0.0, f64::from(u16::MAX)) as u16
}

#[must_use]
/// Pixel extent of `cells` cells of size `cell`.
pub fn cells_to_px(cells: u16, cell: f64) -> f64 {
    f64::from(cells) * cell
}

/// Renders the guide in the layout matching its view mode.
pub fn draw(f: &mut Frame, guide: &Guide, viewer: &Viewer) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(f.area());

    match guide.mode() {
        Some(ViewMode::Wide) | None => draw_wide(f, chunks[0], guide, viewer),
        Some(ViewMode::Narrow) => draw_narrow(f, chunks[0], guide, viewer),
    }

    let help = if let Some(ref msg) = viewer.message {
        msg.clone()
    } else if viewer.focus == Focus::Menu {
        "↑/↓: Move | Enter: Go | Tab: Content | g: Top | q: Quit".to_string()
    } else if guide.toggles_bound() {
        "↑/↓/PgUp/PgDn: Scroll | t: Toggle Section | n: Follow Link | Tab: Menu | q: Quit"
            .to_string()
    } else {
        "↑/↓/PgUp/PgDn: Scroll | n: Follow Link | Tab: Menu | g: Top | q: Quit".to_string()
    };
    let help_widget = Paragraph::new(help).block(Block::default().borders(Borders::ALL));
    f.render_widget(help_widget, chunks[1]);
}

fn draw_wide(f: &mut Frame, area: Rect, guide: &Guide, viewer: &Viewer) {
    let metrics = guide.metrics();
    let (sidebar, margin) = guide.layout().map_or((25, 27), |g| {
        (
            px_to_cells(g.sidebar_width, metrics.char_width),
            px_to_cells(g.main_margin_left, metrics.char_width),
        )
    });
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(sidebar),
            Constraint::Length(margin.saturating_sub(sidebar)),
            Constraint::Min(0),
        ])
        .split(area);

    let list = menu_list(guide.menu(), viewer.focus == Focus::Menu)
        .block(Block::default().borders(Borders::ALL).title("Contents"));
    f.render_widget(list, columns[0]);
    draw_content(f, columns[2], guide);
}

fn draw_narrow(f: &mut Frame, area: Rect, guide: &Guide, viewer: &Viewer) {
    let metrics = guide.metrics();
    let bar = guide
        .layout()
        .map_or(3, |g| px_to_cells(g.top_offset, metrics.line_height))
        .max(1);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(bar), Constraint::Min(0)])
        .split(area);

    let crumb = guide
        .menu()
        .focused()
        .map(|id| breadcrumb(guide.menu(), id))
        .unwrap_or_default();
    let bar_widget = Paragraph::new(crumb).block(
        Block::default()
            .borders(Borders::ALL)
            .title(guide.title().unwrap_or("Menu")),
    );
    // The page is padded by the bar height, so the bar is drawn over it.
    draw_content(f, area, guide);
    f.render_widget(Clear, rows[0]);
    f.render_widget(bar_widget, rows[0]);

    if viewer.focus == Focus::Menu {
        let height = u16::try_from(guide.menu().visible_entries().len())
            .unwrap_or(u16::MAX)
            .saturating_add(2)
            .min(rows[1].height);
        let overlay = Rect {
            height,
            ..rows[1]
        };
        f.render_widget(Clear, overlay);
        let list = menu_list(guide.menu(), true)
            .block(Block::default().borders(Borders::ALL).title("Contents"));
        f.render_widget(list, overlay);
    }
}

fn breadcrumb(menu: &Menu, id: EntryId) -> String {
    menu.path_to(id)
        .iter()
        .filter_map(|e| menu.entry(*e).map(|entry| entry.label.clone()))
        .collect::<Vec<_>>()
        .join(" > ")
}

/// Generate box-drawing prefix for tree structure
fn get_tree_prefix(level: usize, is_last: bool) -> &'static str {
    match (level, is_last) {
        (0, _) => "",
        (_, true) => "└── ",
        (_, false) => "├── ",
    }
}

fn is_last_sibling(menu: &Menu, id: EntryId) -> bool {
    let siblings = match menu.entry(id).and_then(|e| e.parent) {
        Some(parent) => menu.entry(parent).map_or(&[][..], |p| &p.children[..]),
        None => menu.roots(),
    };
    siblings.last() == Some(&id)
}

fn menu_list(menu: &Menu, has_focus: bool) -> List<'static> {
    let items: Vec<ListItem> = menu
        .visible_entries()
        .into_iter()
        .filter_map(|(id, depth)| {
            let entry = menu.entry(id)?;
            let prefix = get_tree_prefix(depth, is_last_sibling(menu, id));
            let marker = if entry.children.is_empty() {
                "  "
            } else if menu.expanded().contains(&id) {
                "▾ "
            } else {
                "▸ "
            };
            let label_style = if depth == 0 {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let line = Line::from(vec![
                Span::raw(prefix),
                Span::raw(marker),
                Span::styled(entry.label.clone(), label_style),
            ]);
            let style = if menu.focused() == Some(id) {
                if has_focus {
                    Style::default().add_modifier(Modifier::REVERSED)
                } else {
                    Style::default().fg(Color::Yellow)
                }
            } else {
                Style::default()
            };
            Some(ListItem::new(line).style(style))
        })
        .collect();
    List::new(items)
}

/// Content lines laid out with the same wrapping the page geometry measures.
#[must_use]
pub fn content_lines(guide: &Guide, width_px: f64) -> Vec<Line<'static>> {
    let metrics = guide.metrics();
    let padding_rows = px_to_cells(guide.geometry().top_padding(), metrics.line_height);
    let mut lines = vec![Line::default(); usize::from(padding_rows)];
    push_wrapped(&mut lines, guide.preamble(), width_px, metrics, Style::default());

    let title_rows = px_to_cells(metrics.title_height, metrics.line_height).max(1);
    for heading in guide.headings() {
        if guide.geometry().top(heading.id).is_none() {
            continue;
        }
        let style = match heading.level {
            HeadingLevel::Major => Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            HeadingLevel::Minor => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        };
        let body_shown = !heading.is_major() || guide.is_body_shown(heading.id);
        let marker = match (heading.is_major() && guide.toggles_bound(), body_shown) {
            (false, _) => "",
            (true, true) => "▾ ",
            (true, false) => "▸ ",
        };
        lines.push(Line::from(Span::styled(
            format!("{marker}{}", heading.text),
            style,
        )));
        for _ in 1..title_rows {
            lines.push(Line::default());
        }
        if body_shown {
            push_wrapped(&mut lines, &heading.body, width_px, metrics, Style::default());
        }
    }
    lines
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn push_wrapped(
    lines: &mut Vec<Line<'static>>,
    text: &str,
    width_px: f64,
    metrics: &Metrics,
    style: Style,
) {
    if text.is_empty() {
        return;
    }
    let per_line = (width_px / metrics.char_width).floor().max(1.0) as usize;
    for source_line in text.lines() {
        let chars: Vec<char> = source_line.chars().collect();
        if chars.is_empty() {
            lines.push(Line::default());
            continue;
        }
        for chunk in chars.chunks(per_line) {
            lines.push(Line::from(Span::styled(
                chunk.iter().collect::<String>(),
                style,
            )));
        }
    }
}

fn draw_content(f: &mut Frame, area: Rect, guide: &Guide) {
    let metrics = guide.metrics();
    let width_px = guide
        .layout()
        .map_or(cells_to_px(area.width, metrics.char_width), |g| g.content_width());
    let lines = content_lines(guide, width_px);
    let first_row = px_to_cells(guide.scroll_top(), metrics.line_height);
    f.render_widget(Paragraph::new(lines).scroll((first_row, 0)), area);
}

#[cfg(test)]
#[path = "tests/ui.rs"]
mod tests;
