// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Retained mark scene for radar charts.
//!
//! Chart code describes its whole visual state as a list of [`Mark`]s, each with
//! a stable [`MarkId`]. A [`Scene`] remembers the previous list and turns the
//! next one into [`MarkDiff`]s (enter, update, exit), which a host applies to
//! its own drawing surface through the [`RenderSurface`] trait.
//!
//! The crate never touches a concrete rendering library. [`RetainedSurface`]
//! is an in-memory surface for headless hosts and tests.

#![no_std]

extern crate alloc;

mod mark;
mod scene;
mod surface;

pub use mark::{
    CircleMark, Mark, MarkId, MarkKind, MarkPayload, PathMark, RectMark, TextAnchor, TextBaseline,
    TextLine, TextMark,
};
pub use scene::{MarkDiff, Scene};
pub use surface::{AppliedBatch, RenderSurface, RetainedSurface, Transition};

pub use radar_text::{HeuristicTextMeasurer, TextMeasurer, TextMetrics, TextStyle};
