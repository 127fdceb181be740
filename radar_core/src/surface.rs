// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host rendering seam.

use alloc::vec::Vec;
use core::time::Duration;

use hashbrown::HashMap;
use kurbo::Size;
use radar_text::{HeuristicTextMeasurer, TextMeasurer};

use crate::mark::{Mark, MarkId};
use crate::scene::MarkDiff;

/// An animated change of attributes, started when a batch of diffs is applied.
///
/// Transitions are fire-and-forget: a later batch starts from the current
/// target values, whether or not the earlier animation finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Transition {
    /// Time from the current values to the new ones.
    pub duration: Duration,
}

impl Transition {
    /// A transition of `millis` milliseconds.
    #[must_use]
    pub const fn from_millis(millis: u64) -> Self {
        Self {
            duration: Duration::from_millis(millis),
        }
    }
}

/// A drawing surface supplied by the host.
///
/// The chart owns no rendering state beyond its marks: it mounts a root,
/// pushes diffs, asks for text widths, and finally unmounts.
pub trait RenderSurface {
    /// Creates the visual root for a canvas of `size`, removing any root a
    /// previous chart left at the same mount point.
    fn mount(&mut self, size: Size);

    /// Applies a batch of diffs. With a transition, position and paint changes
    /// on updated marks animate over its duration; entering and exiting marks
    /// appear and disappear immediately.
    fn apply(&mut self, diffs: &[MarkDiff], transition: Option<Transition>);

    /// Removes the visual root and everything below it.
    fn unmount(&mut self);

    /// Text measurement as the surface will render text.
    fn measurer(&self) -> &dyn TextMeasurer;
}

impl<S: RenderSurface + ?Sized> RenderSurface for &mut S {
    fn mount(&mut self, size: Size) {
        (**self).mount(size);
    }

    fn apply(&mut self, diffs: &[MarkDiff], transition: Option<Transition>) {
        (**self).apply(diffs, transition);
    }

    fn unmount(&mut self) {
        (**self).unmount();
    }

    fn measurer(&self) -> &dyn TextMeasurer {
        (**self).measurer()
    }
}

/// Summary of one [`RenderSurface::apply`] call seen by a [`RetainedSurface`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AppliedBatch {
    /// Number of diffs in the batch.
    pub diffs: usize,
    /// The transition requested for the batch.
    pub transition: Option<Transition>,
}

/// An in-memory surface that keeps the final state of every mark.
///
/// Transitions are recorded but not animated. Useful for headless rendering
/// (serialize [`RetainedSurface::marks_in_paint_order`]) and for tests.
#[derive(Debug)]
pub struct RetainedSurface<M = HeuristicTextMeasurer> {
    measurer: M,
    canvas: Option<Size>,
    marks: HashMap<MarkId, Mark>,
    mounts: usize,
    batches: Vec<AppliedBatch>,
}

impl RetainedSurface {
    /// Creates a surface that measures text heuristically.
    pub fn new() -> Self {
        Self::with_measurer(HeuristicTextMeasurer)
    }
}

impl Default for RetainedSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: TextMeasurer> RetainedSurface<M> {
    /// Creates a surface that measures text with `measurer`.
    pub fn with_measurer(measurer: M) -> Self {
        Self {
            measurer,
            canvas: None,
            marks: HashMap::new(),
            mounts: 0,
            batches: Vec::new(),
        }
    }

    /// The mounted canvas size, or `None` when nothing is mounted.
    pub fn canvas(&self) -> Option<Size> {
        self.canvas
    }

    /// Returns `true` while a root is mounted.
    pub fn is_mounted(&self) -> bool {
        self.canvas.is_some()
    }

    /// How many times a root was mounted.
    pub fn mount_count(&self) -> usize {
        self.mounts
    }

    /// Looks up a mark by id.
    pub fn mark(&self, id: MarkId) -> Option<&Mark> {
        self.marks.get(&id)
    }

    /// Number of live marks.
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Returns `true` if there are no live marks.
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Live marks sorted by `(z_index, id)`.
    pub fn marks_in_paint_order(&self) -> Vec<&Mark> {
        let mut marks: Vec<&Mark> = self.marks.values().collect();
        marks.sort_by_key(|m| (m.z_index, m.id));
        marks
    }

    /// Every batch applied since the surface was created.
    pub fn batches(&self) -> &[AppliedBatch] {
        &self.batches
    }

    /// The transition of the most recent batch.
    pub fn last_transition(&self) -> Option<Transition> {
        self.batches.last().and_then(|b| b.transition)
    }
}

impl<M: TextMeasurer> RenderSurface for RetainedSurface<M> {
    fn mount(&mut self, size: Size) {
        self.marks.clear();
        self.canvas = Some(size);
        self.mounts += 1;
    }

    fn apply(&mut self, diffs: &[MarkDiff], transition: Option<Transition>) {
        for diff in diffs {
            match diff {
                MarkDiff::Enter { id, new, .. } | MarkDiff::Update { id, new, .. } => {
                    self.marks.insert(*id, (**new).clone());
                }
                MarkDiff::Exit { id, .. } => {
                    self.marks.remove(id);
                }
            }
        }
        self.batches.push(AppliedBatch {
            diffs: diffs.len(),
            transition,
        });
    }

    fn unmount(&mut self) {
        self.marks.clear();
        self.canvas = None;
    }

    fn measurer(&self) -> &dyn TextMeasurer {
        &self.measurer
    }
}
