// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paint order of radar chart marks.
//!
//! Surfaces sort by `(z_index, MarkId)`; values are coarse so hosts can slot
//! their own decorations in between.

/// Concentric level rings.
pub const GRID_RINGS: i32 = -50;
/// Level value labels next to the rings.
pub const RING_LABELS: i32 = -40;
/// Spokes from the center to each axis.
pub const SPOKES: i32 = -30;
/// Axis name labels.
pub const AXIS_LABELS: i32 = -20;

/// Filled blob areas.
pub const BLOB_AREAS: i32 = 0;
/// Blob outlines.
pub const BLOB_STROKES: i32 = 10;
/// Data point dots.
pub const DOTS: i32 = 20;
/// Invisible hover targets on data points.
pub const HIT_AREAS: i32 = 30;

/// The hover tooltip.
pub const TOOLTIP: i32 = 40;

/// Legend swatches.
pub const LEGEND_SWATCHES: i32 = 60;
/// Legend labels and title.
pub const LEGEND_LABELS: i32 = 70;
