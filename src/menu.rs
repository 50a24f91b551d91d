//! The navigation menu: a tree of entries mirroring the heading hierarchy.
//!
//! Visibility is modelled as an expanded set rather than as per-entry flags:
//! root entries are always visible, and the children of an entry are visible
//! exactly when the entry is expanded. Selecting an entry collapses everything
//! and then expands the path from its root down to it, so after a selection the
//! expanded set is precisely that path.

use crate::heading::{Heading, HeadingId, HeadingLevel};
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
/// Position of an entry in the menu's entry list.
pub struct EntryId(pub usize);

#[derive(Clone, Debug)]
/// A navigation item corresponding to one heading.
pub struct MenuEntry {
    /// Identifier of this entry.
    pub id: EntryId,
    /// Heading this entry links to.
    pub target: HeadingId,
    /// Link text, the heading's squashed text.
    pub label: String,
    /// Enclosing entry, `None` for root entries.
    pub parent: Option<EntryId>,
    /// Nested entries in document order.
    pub children: Vec<EntryId>,
}

#[derive(Clone, Debug, Default)]
/// Collapsible table of contents built once from the guide's headings.
pub struct Menu {
    entries: Vec<MenuEntry>,
    roots: Vec<EntryId>,
    by_heading: HashMap<HeadingId, EntryId>,
    expanded: BTreeSet<EntryId>,
    focused: Option<EntryId>,
}

#[derive(Debug, Serialize)]
/// Serialisable view of one menu entry and its children.
pub struct EntrySnapshot {
    /// Link text.
    pub label: String,
    /// Anchor of the target heading.
    pub anchor: String,
    /// Whether the entry's children are currently shown.
    pub expanded: bool,
    /// Nested entries.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<EntrySnapshot>,
}

impl Menu {
    #[must_use]
    /// Build the menu tree from headings in document order.
    ///
    /// Every major heading yields a root entry; every minor heading is nested
    /// under the entry of its enclosing major heading. Minor headings that
    /// precede all major headings have no section to belong to and get no entry.
    pub fn build(headings: &[Heading]) -> Self {
        let mut menu = Self::default();
        for heading in headings {
            let parent = match heading.level {
                HeadingLevel::Major => None,
                HeadingLevel::Minor => {
                    let Some(parent) = heading.major.and_then(|m| menu.by_heading.get(&m)) else {
                        continue;
                    };
                    Some(*parent)
                }
            };
            let id = EntryId(menu.entries.len());
            menu.entries.push(MenuEntry {
                id,
                target: heading.id,
                label: heading.text.clone(),
                parent,
                children: Vec::new(),
            });
            match parent {
                Some(parent) => menu.entries[parent.0].children.push(id),
                None => menu.roots.push(id),
            }
            menu.by_heading.insert(heading.id, id);
        }
        menu
    }

    #[must_use]
    /// Root entries in document order.
    pub fn roots(&self) -> &[EntryId] {
        &self.roots
    }

    #[must_use]
    /// Look up an entry by id.
    pub fn entry(&self, id: EntryId) -> Option<&MenuEntry> {
        self.entries.get(id.0)
    }

    #[must_use]
    /// All entries in creation (document) order.
    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    #[must_use]
    /// The entry linking to `heading`, if any.
    pub fn entry_for(&self, heading: HeadingId) -> Option<EntryId> {
        self.by_heading.get(&heading).copied()
    }

    #[must_use]
    /// Entries whose children are currently shown.
    pub fn expanded(&self) -> &BTreeSet<EntryId> {
        &self.expanded
    }

    #[must_use]
    /// Entry holding input focus.
    pub fn focused(&self) -> Option<EntryId> {
        self.focused
    }

    /// Hide every nested list, leaving only root entries visible.
    pub fn collapse(&mut self) {
        self.expanded.clear();
    }

    /// Show the list containing `id` and the list nested under it.
    ///
    /// The containing list is shown by expanding every ancestor.
    pub fn expand_entry(&mut self, id: EntryId) {
        let mut current = Some(id);
        while let Some(entry) = current.and_then(|c| self.entries.get(c.0)) {
            self.expanded.insert(entry.id);
            current = entry.parent;
        }
    }

    /// Hide the list nested under `id`.
    pub fn contract_entry(&mut self, id: EntryId) {
        self.expanded.remove(&id);
    }

    /// Collapse the menu, expand the path to `id` and focus it.
    pub fn select(&mut self, id: EntryId) {
        if id.0 >= self.entries.len() {
            return;
        }
        self.collapse();
        self.expand_entry(id);
        self.focused = Some(id);
    }

    #[must_use]
    /// Path from the root entry down to `id`, inclusive.
    pub fn path_to(&self, id: EntryId) -> Vec<EntryId> {
        let mut path = Vec::new();
        let mut current = Some(id);
        while let Some(entry) = current.and_then(|c| self.entries.get(c.0)) {
            path.push(entry.id);
            current = entry.parent;
        }
        path.reverse();
        path
    }

    #[must_use]
    /// Whether `id` is currently shown: a root, or a child of an expanded entry.
    pub fn is_visible(&self, id: EntryId) -> bool {
        match self.entries.get(id.0) {
            Some(entry) => entry
                .parent
                .is_none_or(|p| self.expanded.contains(&p) && self.is_visible(p)),
            None => false,
        }
    }

    #[must_use]
    /// Visible entries in depth-first document order, paired with their depth.
    pub fn visible_entries(&self) -> Vec<(EntryId, usize)> {
        let mut out = Vec::new();
        let mut stack: Vec<(EntryId, usize)> = self.roots.iter().rev().map(|r| (*r, 0)).collect();
        while let Some((id, depth)) = stack.pop() {
            out.push((id, depth));
            if self.expanded.contains(&id) {
                for child in self.entries[id.0].children.iter().rev() {
                    stack.push((*child, depth + 1));
                }
            }
        }
        out
    }

    /// Move focus to the next visible entry, wrapping at the end.
    pub fn focus_next(&mut self) {
        self.step_focus(true);
    }

    /// Move focus to the previous visible entry, wrapping at the start.
    pub fn focus_prev(&mut self) {
        self.step_focus(false);
    }

    fn step_focus(&mut self, forward: bool) {
        let visible = self.visible_entries();
        if visible.is_empty() {
            return;
        }
        let position = self
            .focused
            .and_then(|f| visible.iter().position(|(id, _)| *id == f));
        let next = match (position, forward) {
            (None, true) => 0,
            (None, false) => visible.len() - 1,
            (Some(p), true) => (p + 1) % visible.len(),
            (Some(p), false) => (p + visible.len() - 1) % visible.len(),
        };
        self.focused = Some(visible[next].0);
    }

    #[must_use]
    /// Serialisable tree of the menu, resolving anchors through `headings`.
    pub fn snapshot(&self, headings: &[Heading]) -> Vec<EntrySnapshot> {
        self.roots
            .iter()
            .map(|root| self.snapshot_entry(*root, headings))
            .collect()
    }

    fn snapshot_entry(&self, id: EntryId, headings: &[Heading]) -> EntrySnapshot {
        let entry = &self.entries[id.0];
        EntrySnapshot {
            label: entry.label.clone(),
            anchor: headings
                .get(entry.target.0)
                .map(|h| h.anchor.clone())
                .unwrap_or_default(),
            expanded: self.expanded.contains(&id),
            children: entry
                .children
                .iter()
                .map(|child| self.snapshot_entry(*child, headings))
                .collect(),
        }
    }
}

#[cfg(test)]
#[path = "tests/menu.rs"]
mod tests;
