// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polar layout of axes and values.

use core::f64::consts::{FRAC_PI_2, TAU};

use kurbo::{Point, Vec2};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::config::RadarConfig;
use crate::scale::ScaleLinear;

/// Places axes and values for a fixed axis count.
///
/// Axis `i` points at angle `i * angle_slice - π/2`: axis 0 straight up,
/// later axes clockwise. All positions are in canvas coordinates, relative to
/// the chart center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadarGeometry {
    center: Point,
    outer_radius: f64,
    axis_count: usize,
    angle_slice: f64,
    max_value: f64,
    levels: usize,
    label_factor: f64,
    scale: ScaleLinear,
}

impl RadarGeometry {
    /// Lays out `axis_count` axes for values up to `max_value`.
    pub fn new(config: &RadarConfig, axis_count: usize, max_value: f64) -> Self {
        let outer_radius = config.outer_radius();
        let angle_slice = if axis_count == 0 {
            TAU
        } else {
            TAU / axis_count as f64
        };
        Self {
            center: config.center(),
            outer_radius,
            axis_count,
            angle_slice,
            max_value,
            levels: config.levels,
            label_factor: config.label_factor,
            scale: ScaleLinear::new((0.0, max_value), (0.0, outer_radius)),
        }
    }

    /// The chart center.
    pub fn center(&self) -> Point {
        self.center
    }

    /// Radius of the outermost level ring.
    pub fn outer_radius(&self) -> f64 {
        self.outer_radius
    }

    /// Number of axes.
    pub fn axis_count(&self) -> usize {
        self.axis_count
    }

    /// Angular width of one axis, `2π / axis_count`.
    pub fn angle_slice(&self) -> f64 {
        self.angle_slice
    }

    /// The value of the outer ring.
    pub fn max_value(&self) -> f64 {
        self.max_value
    }

    /// The value-to-radius scale.
    pub fn scale(&self) -> ScaleLinear {
        self.scale
    }

    /// Angle of axis `axis` in radians.
    pub fn angle(&self, axis: usize) -> f64 {
        axis as f64 * self.angle_slice - FRAC_PI_2
    }

    /// Unit vector along axis `axis`.
    pub fn direction(&self, axis: usize) -> Vec2 {
        let angle = self.angle(axis);
        Vec2::new(angle.cos(), angle.sin())
    }

    /// Offset from the center of `value` on axis `axis`.
    pub fn offset(&self, axis: usize, value: f64) -> Vec2 {
        self.direction(axis) * self.scale.map(value)
    }

    /// Canvas position of `value` on axis `axis`.
    pub fn point(&self, axis: usize, value: f64) -> Point {
        self.center + self.offset(axis, value)
    }

    /// Radius of level ring `level` (`1..=levels`).
    pub fn ring_radius(&self, level: usize) -> f64 {
        if self.levels == 0 {
            return 0.0;
        }
        self.outer_radius * level as f64 / self.levels as f64
    }

    /// Value shown on level ring `level`.
    pub fn ring_value(&self, level: usize) -> f64 {
        if self.levels == 0 {
            return 0.0;
        }
        self.max_value * level as f64 / self.levels as f64
    }

    /// Outer end of the spoke of axis `axis`, 10% past the outer ring.
    pub fn spoke_end(&self, axis: usize) -> Point {
        self.point(axis, self.max_value * 1.1)
    }

    /// Anchor of the label of axis `axis`.
    pub fn label_anchor(&self, axis: usize) -> Point {
        self.point(axis, self.max_value * self.label_factor)
    }

    /// Anchor of the label of level ring `level`: just right of the ring's
    /// top.
    pub fn ring_label_anchor(&self, level: usize) -> Point {
        Point::new(self.center.x + 4.0, self.center.y - self.ring_radius(level))
    }
}
