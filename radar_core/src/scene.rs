// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scene diffing.
//!
//! A [`Scene`] holds the marks of the last layout. [`Scene::tick`] takes the
//! complete mark list of the next layout and reports what changed, which is
//! the enter/update/exit data join a host surface needs.

use alloc::boxed::Box;
use alloc::vec::Vec;

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;
use kurbo::Rect;

use crate::mark::{Mark, MarkId, MarkKind};

/// A change to one mark between two layouts.
#[derive(Clone, Debug, PartialEq)]
pub enum MarkDiff {
    /// The mark is new.
    Enter {
        /// Mark id.
        id: MarkId,
        /// Mark kind.
        kind: MarkKind,
        /// The new mark.
        new: Box<Mark>,
        /// Bounds of the new mark, when known.
        bounds: Option<Rect>,
    },
    /// The mark exists in both layouts with different content.
    Update {
        /// Mark id.
        id: MarkId,
        /// Mark kind of the new mark.
        kind: MarkKind,
        /// The previous mark.
        old: Box<Mark>,
        /// The new mark.
        new: Box<Mark>,
        /// Bounds of the previous mark, when known.
        old_bounds: Option<Rect>,
        /// Bounds of the new mark, when known.
        new_bounds: Option<Rect>,
    },
    /// The mark is gone.
    Exit {
        /// Mark id.
        id: MarkId,
        /// Mark kind.
        kind: MarkKind,
        /// Bounds of the removed mark, when known.
        bounds: Option<Rect>,
    },
}

impl MarkDiff {
    /// Returns the id of the mark this diff refers to.
    pub fn id(&self) -> MarkId {
        match self {
            Self::Enter { id, .. } | Self::Update { id, .. } | Self::Exit { id, .. } => *id,
        }
    }
}

/// The retained marks of the most recent layout.
#[derive(Debug, Default)]
pub struct Scene {
    marks: HashMap<MarkId, Mark>,
}

impl Scene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of retained marks.
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Returns `true` if no marks are retained.
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Looks up a retained mark.
    pub fn get(&self, id: MarkId) -> Option<&Mark> {
        self.marks.get(&id)
    }

    /// Replaces the retained marks with `marks` and returns the differences.
    ///
    /// Enter and update diffs follow the order of `marks`; exit diffs follow,
    /// sorted by id. Unchanged marks produce no diff. When `marks` contains the
    /// same id more than once, the last occurrence wins.
    pub fn tick(&mut self, marks: impl IntoIterator<Item = Mark>) -> Vec<MarkDiff> {
        let mut next: HashMap<MarkId, Mark> = HashMap::new();
        let mut order = Vec::new();
        for mark in marks {
            match next.entry(mark.id) {
                Entry::Occupied(mut slot) => {
                    slot.insert(mark);
                }
                Entry::Vacant(slot) => {
                    order.push(mark.id);
                    slot.insert(mark);
                }
            }
        }

        let mut diffs = Vec::new();
        for id in order {
            let new = &next[&id];
            match self.marks.get(&id) {
                None => diffs.push(MarkDiff::Enter {
                    id,
                    kind: new.kind(),
                    new: Box::new(new.clone()),
                    bounds: new.payload.bounds(),
                }),
                Some(old) if old != new => diffs.push(MarkDiff::Update {
                    id,
                    kind: new.kind(),
                    old: Box::new(old.clone()),
                    new: Box::new(new.clone()),
                    old_bounds: old.payload.bounds(),
                    new_bounds: new.payload.bounds(),
                }),
                Some(_) => {}
            }
        }

        let mut exits: Vec<&Mark> = self
            .marks
            .values()
            .filter(|m| !next.contains_key(&m.id))
            .collect();
        exits.sort_by_key(|m| m.id);
        diffs.extend(exits.into_iter().map(|m| MarkDiff::Exit {
            id: m.id,
            kind: m.kind(),
            bounds: m.payload.bounds(),
        }));

        tracing::trace!(retained = next.len(), diffs = diffs.len(), "scene tick");
        self.marks = next;
        diffs
    }

    /// Drops every retained mark, returning exit diffs for them.
    pub fn clear(&mut self) -> Vec<MarkDiff> {
        self.tick(core::iter::empty())
    }
}
