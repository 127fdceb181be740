// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed identities of the marks a chart emits.
//!
//! Every mark id encodes the part it draws, so a host that only knows the id
//! of the node under the pointer can route the event back to the chart.

use radar_core::MarkId;

const ROLE_SHIFT: u32 = 56;
const ENTITY_SHIFT: u32 = 24;
const ENTITY_MASK: u64 = (1 << (ROLE_SHIFT - ENTITY_SHIFT)) - 1;
const AXIS_MASK: u64 = (1 << ENTITY_SHIFT) - 1;

/// One visual part of a radar chart.
///
/// `level` is `1..=levels`, `axis` an axis index and `entity` an entity index
/// in the current dataset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChartPart {
    /// A level ring.
    GridRing {
        /// Ring level.
        level: usize,
    },
    /// The value label of a level ring.
    RingLabel {
        /// Ring level.
        level: usize,
    },
    /// The spoke of an axis.
    Spoke {
        /// Axis index.
        axis: usize,
    },
    /// The name label of an axis.
    AxisLabel {
        /// Axis index.
        axis: usize,
    },
    /// The filled area of an entity.
    BlobArea {
        /// Entity index.
        entity: usize,
    },
    /// The outline of an entity.
    BlobStroke {
        /// Entity index.
        entity: usize,
    },
    /// The visible dot of one data point.
    Dot {
        /// Entity index.
        entity: usize,
        /// Axis index.
        axis: usize,
    },
    /// The invisible hover target over one data point.
    HitArea {
        /// Entity index.
        entity: usize,
        /// Axis index.
        axis: usize,
    },
    /// The value tooltip.
    Tooltip,
    /// The legend title.
    LegendTitle,
    /// The color swatch of a legend row.
    LegendSwatch {
        /// Entity index.
        entity: usize,
    },
    /// The text of a legend row.
    LegendLabel {
        /// Entity index.
        entity: usize,
    },
}

impl ChartPart {
    /// The mark id of this part.
    pub fn id(self) -> MarkId {
        let (role, entity, axis) = match self {
            Self::GridRing { level } => (1, 0, level),
            Self::RingLabel { level } => (2, 0, level),
            Self::Spoke { axis } => (3, 0, axis),
            Self::AxisLabel { axis } => (4, 0, axis),
            Self::BlobArea { entity } => (5, entity, 0),
            Self::BlobStroke { entity } => (6, entity, 0),
            Self::Dot { entity, axis } => (7, entity, axis),
            Self::HitArea { entity, axis } => (8, entity, axis),
            Self::Tooltip => (9, 0, 0),
            Self::LegendTitle => (10, 0, 0),
            Self::LegendSwatch { entity } => (11, entity, 0),
            Self::LegendLabel { entity } => (12, entity, 0),
        };
        MarkId::from_raw(
            (role << ROLE_SHIFT)
                | ((entity as u64 & ENTITY_MASK) << ENTITY_SHIFT)
                | (axis as u64 & AXIS_MASK),
        )
    }

    /// Decodes a mark id produced by [`ChartPart::id`].
    pub fn from_id(id: MarkId) -> Option<Self> {
        let raw = id.raw();
        let entity = usize::try_from((raw >> ENTITY_SHIFT) & ENTITY_MASK).ok()?;
        let axis = usize::try_from(raw & AXIS_MASK).ok()?;
        let level = axis;
        Some(match raw >> ROLE_SHIFT {
            1 => Self::GridRing { level },
            2 => Self::RingLabel { level },
            3 => Self::Spoke { axis },
            4 => Self::AxisLabel { axis },
            5 => Self::BlobArea { entity },
            6 => Self::BlobStroke { entity },
            7 => Self::Dot { entity, axis },
            8 => Self::HitArea { entity, axis },
            9 => Self::Tooltip,
            10 => Self::LegendTitle,
            11 => Self::LegendSwatch { entity },
            12 => Self::LegendLabel { entity },
            _ => return None,
        })
    }
}

impl From<ChartPart> for MarkId {
    fn from(part: ChartPart) -> Self {
        part.id()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn ids_decode_to_their_part() {
        let parts = [
            ChartPart::GridRing { level: 3 },
            ChartPart::RingLabel { level: 1 },
            ChartPart::Spoke { axis: 4 },
            ChartPart::AxisLabel { axis: 0 },
            ChartPart::BlobArea { entity: 2 },
            ChartPart::BlobStroke { entity: 7 },
            ChartPart::Dot { entity: 1, axis: 5 },
            ChartPart::HitArea { entity: 12, axis: 3 },
            ChartPart::Tooltip,
            ChartPart::LegendTitle,
            ChartPart::LegendSwatch { entity: 0 },
            ChartPart::LegendLabel { entity: 9 },
        ];
        for part in parts {
            assert_eq!(ChartPart::from_id(part.id()), Some(part));
        }
    }

    #[test]
    fn ids_are_distinct_across_roles() {
        assert_ne!(
            ChartPart::Dot { entity: 1, axis: 1 }.id(),
            ChartPart::HitArea { entity: 1, axis: 1 }.id()
        );
        assert_ne!(
            ChartPart::BlobArea { entity: 0 }.id(),
            ChartPart::BlobStroke { entity: 0 }.id()
        );
    }

    #[test]
    fn foreign_ids_are_rejected() {
        assert_eq!(ChartPart::from_id(MarkId(0)), None);
        assert_eq!(ChartPart::from_id(MarkId(200 << 56)), None);
    }
}
