// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input events a host routes to the chart, and change notifications the
//! chart sends back.

use alloc::string::String;

use crate::part::ChartPart;

/// A pointer action on a mark, as reported by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerAction {
    /// Primary click.
    Click,
    /// Secondary click (context menu).
    ContextMenu,
    /// The pointer entered the mark.
    Enter,
    /// The pointer left the mark.
    Leave,
}

/// An interaction the chart responds to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChartEvent {
    /// An axis label was clicked: move that axis one step.
    LabelClick {
        /// Axis index.
        axis: usize,
    },
    /// An axis label's context menu was requested: invert that axis.
    LabelContextMenu {
        /// Axis index.
        axis: usize,
    },
    /// The pointer entered a blob's area: highlight it.
    BlobEnter {
        /// Entity index.
        entity: usize,
    },
    /// The pointer left a blob's area.
    BlobLeave,
    /// The pointer entered a data point: show its value.
    PointEnter {
        /// Entity index.
        entity: usize,
        /// Axis index.
        axis: usize,
    },
    /// The pointer left a data point.
    PointLeave,
}

impl ChartEvent {
    /// Maps a pointer action on `part` to the event it triggers, if any.
    pub fn from_pointer(part: ChartPart, action: PointerAction) -> Option<Self> {
        match (part, action) {
            (ChartPart::AxisLabel { axis }, PointerAction::Click) => {
                Some(Self::LabelClick { axis })
            }
            (ChartPart::AxisLabel { axis }, PointerAction::ContextMenu) => {
                Some(Self::LabelContextMenu { axis })
            }
            (ChartPart::BlobArea { entity }, PointerAction::Enter) => {
                Some(Self::BlobEnter { entity })
            }
            (ChartPart::BlobArea { .. }, PointerAction::Leave) => Some(Self::BlobLeave),
            (ChartPart::HitArea { entity, axis }, PointerAction::Enter) => {
                Some(Self::PointEnter { entity, axis })
            }
            (ChartPart::HitArea { .. }, PointerAction::Leave) => Some(Self::PointLeave),
            _ => None,
        }
    }
}

/// A dataset or style change, reported to listeners once it is applied.
#[derive(Clone, Debug, PartialEq)]
pub enum ChartChange {
    /// An entity was appended at `index`.
    EntityAppended {
        /// Index of the new entity.
        index: usize,
    },
    /// The dataset was replaced.
    DatasetReplaced {
        /// Number of entities in the new dataset.
        entities: usize,
    },
    /// Values were inverted, on every axis or on the named one.
    ValuesInverted {
        /// The inverted axis, or `None` for all axes.
        axis: Option<String>,
    },
    /// An axis moved from `from` to `to`.
    AxisReordered {
        /// Previous index.
        from: usize,
        /// New index.
        to: usize,
    },
    /// The outline interpolation changed.
    RoundStrokes(bool),
    /// The first entity moved to the end.
    EntitiesRotated,
}
