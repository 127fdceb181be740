// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The chart's dataset and its validated mutations.
//!
//! A [`Dataset`] holds one or more [`Entity`] values whose axis names, in
//! order, all equal the dataset's axis sequence ([`Dataset::all_axis`]). Every
//! mutation either keeps that invariant or fails without changing anything.

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::{RadarError, Result};

/// One value on one axis for one entity.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct AxisPoint {
    /// Axis name.
    pub axis: String,
    /// The value; no range is enforced.
    pub value: f64,
    /// Name of the owning entity, stamped by the dataset.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub owner: String,
}

impl AxisPoint {
    /// Creates a point not yet owned by an entity.
    pub fn new(axis: impl Into<String>, value: f64) -> Self {
        Self {
            axis: axis.into(),
            value,
            owner: String::new(),
        }
    }
}

/// One blob: a named series of values across the axes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct Entity {
    /// Entity name, shown in the legend.
    pub name: String,
    /// Values in axis order.
    pub axes: Vec<AxisPoint>,
}

impl Entity {
    /// Creates an entity from `(axis, value)` pairs.
    pub fn new<A: Into<String>>(
        name: impl Into<String>,
        axes: impl IntoIterator<Item = (A, f64)>,
    ) -> Self {
        let mut entity = Self {
            name: name.into(),
            axes: axes
                .into_iter()
                .map(|(axis, value)| AxisPoint::new(axis, value))
                .collect(),
        };
        entity.stamp_owner();
        entity
    }

    /// Axis names in order.
    pub fn axis_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.axes.iter().map(|p| p.axis.as_str())
    }

    /// Value of the axis named `axis`.
    pub fn value(&self, axis: &str) -> Option<f64> {
        self.axes.iter().find(|p| p.axis == axis).map(|p| p.value)
    }

    fn stamp_owner(&mut self) {
        for point in &mut self.axes {
            point.owner.clone_from(&self.name);
        }
    }

    fn has_axes(&self, all_axis: &[String]) -> bool {
        self.axes.len() == all_axis.len() && self.axis_names().eq(all_axis.iter().map(String::as_str))
    }
}

/// Entities sharing one axis sequence.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    entities: Vec<Entity>,
    all_axis: Vec<String>,
}

impl Dataset {
    /// Validates `entities` and takes the axis sequence from the first one.
    ///
    /// Fails on an empty list, a first entity without axes, or any entity
    /// whose axis names differ from the first entity's.
    pub fn new(entities: Vec<Entity>) -> Result<Self> {
        let all_axis = axis_sequence(&entities)?;
        let mut dataset = Self {
            entities: Vec::new(),
            all_axis,
        };
        dataset.check_all(&entities)?;
        dataset.entities = entities;
        dataset.stamp_owners();
        Ok(dataset)
    }

    /// The entities, in draw order.
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// The canonical axis names, in order.
    pub fn all_axis(&self) -> &[String] {
        &self.all_axis
    }

    /// Number of axes.
    pub fn axis_count(&self) -> usize {
        self.all_axis.len()
    }

    /// Number of entities.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Always `false` for a constructed dataset; provided for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Largest value across every entity and axis.
    pub fn data_max(&self) -> f64 {
        self.entities
            .iter()
            .flat_map(|e| e.axes.iter())
            .map(|p| p.value)
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Appends `entity` if its axis names equal [`Dataset::all_axis`] exactly.
    pub fn append(&mut self, mut entity: Entity) -> Result<()> {
        self.check(&entity)?;
        entity.stamp_owner();
        self.entities.push(entity);
        Ok(())
    }

    /// Replaces every entity.
    ///
    /// The first new entity must have as many axes as the current sequence;
    /// its names become the new sequence, which every other new entity must
    /// then match.
    pub fn replace(&mut self, entities: Vec<Entity>) -> Result<()> {
        let all_axis = axis_sequence(&entities)?;
        if all_axis.len() != self.all_axis.len() {
            return Err(RadarError::AxisCountMismatch {
                expected: self.all_axis.len(),
                found: all_axis.len(),
            });
        }
        let next = Self {
            entities: Vec::new(),
            all_axis,
        };
        next.check_all(&entities)?;
        self.all_axis = next.all_axis;
        self.entities = entities;
        self.stamp_owners();
        Ok(())
    }

    /// Replaces each value `v` with `100 - v`, on every axis or only on the
    /// axis named `axis`.
    pub fn invert(&mut self, axis: Option<&str>) {
        for point in self.entities.iter_mut().flat_map(|e| e.axes.iter_mut()) {
            if axis.is_none_or(|name| point.axis == name) {
                point.value = 100.0 - point.value;
            }
        }
    }

    /// Moves the axis at `index` one step: the last axis swaps with the first,
    /// any other moves to `index + 1`. Every entity and the axis sequence are
    /// permuted identically.
    ///
    /// Returns the axis's new index.
    pub fn reorder_axis(&mut self, index: usize) -> Result<usize> {
        let len = self.all_axis.len();
        if index >= len {
            return Err(RadarError::AxisIndexOutOfRange { index, len });
        }
        let to = if index + 1 == len {
            swap(&mut self.all_axis, index, 0);
            for entity in &mut self.entities {
                swap(&mut entity.axes, index, 0);
            }
            0
        } else {
            move_element(&mut self.all_axis, index, index + 1);
            for entity in &mut self.entities {
                move_element(&mut entity.axes, index, index + 1);
            }
            index + 1
        };
        Ok(to)
    }

    /// Moves the first entity to the end.
    pub fn rotate_entities(&mut self) {
        self.entities.rotate_left(1);
    }

    fn check(&self, entity: &Entity) -> Result<()> {
        if entity.has_axes(&self.all_axis) {
            Ok(())
        } else {
            Err(RadarError::AxisMismatch {
                expected: self.all_axis.clone(),
                found: entity.axis_names().map(String::from).collect(),
            })
        }
    }

    fn check_all(&self, entities: &[Entity]) -> Result<()> {
        entities.iter().try_for_each(|e| self.check(e))
    }

    fn stamp_owners(&mut self) {
        for entity in &mut self.entities {
            entity.stamp_owner();
        }
    }
}

fn axis_sequence(entities: &[Entity]) -> Result<Vec<String>> {
    let first = entities.first().ok_or(RadarError::EmptyDataset)?;
    if first.axes.is_empty() {
        return Err(RadarError::NoAxes);
    }
    Ok(first.axis_names().map(String::from).collect())
}

/// Removes the element at `from` and reinserts it at `to`, shifting the
/// elements in between.
pub fn move_element<T>(items: &mut [T], from: usize, to: usize) {
    if from < to {
        items[from..=to].rotate_left(1);
    } else if to < from {
        items[to..=from].rotate_right(1);
    }
}

/// Exchanges the elements at `a` and `b`.
pub fn swap<T>(items: &mut [T], a: usize, b: usize) {
    items.swap(a, b);
}
