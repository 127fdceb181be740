// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Turns the chart state into marks.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{BezPath, Point, Vec2};
use peniko::Color;
use peniko::color::palette::css;
use radar_core::{
    CircleMark, Mark, PathMark, TextAnchor, TextLine, TextMark, TextMeasurer, TextStyle,
    Transition,
};
use radar_text::{LINE_HEIGHT_EM, wrap_words};

use crate::color::ColorScheme;
use crate::config::RadarConfig;
use crate::curve::Interpolation;
use crate::data::{Dataset, Entity};
use crate::geometry::RadarGeometry;
use crate::legend::{LABEL_FILL, LegendItem, LegendSwatches};
use crate::part::ChartPart;
use crate::z_order;

/// Duration of re-layout animations.
pub const UPDATE_TRANSITION: Transition = Transition::from_millis(375);
/// Duration of hover highlight animations.
pub const HOVER_TRANSITION: Transition = Transition::from_millis(200);

/// Fill opacity of the blob under the pointer.
pub const HOVERED_AREA_OPACITY: f64 = 0.7;
/// Fill opacity of the other blobs while one is hovered.
pub const DIMMED_AREA_OPACITY: f64 = 0.1;
/// Fill opacity of data point dots.
pub const DOT_OPACITY: f64 = 0.8;

/// Fill and stroke of the level rings.
pub const GRID_FILL: Color = Color::from_rgb8(0xcd, 0xcd, 0xcd);

const RING_LABEL_SIZE: f64 = 10.0;
const RING_LABEL_DY: f64 = 0.4;
const AXIS_LABEL_SIZE: f64 = 11.0;
const AXIS_LABEL_DY: f64 = 0.35;
const TOOLTIP_SIZE: f64 = 12.0;
const TOOLTIP_OFFSET: Vec2 = Vec2::new(-10.0, -10.0);

/// Pointer highlight state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct HoverState {
    /// Entity whose area is highlighted.
    pub(crate) blob: Option<usize>,
    /// Data point whose value is shown, as `(entity, axis)`.
    pub(crate) point: Option<(usize, usize)>,
}

/// Everything one layout pass reads.
pub(crate) struct Frame<'a> {
    pub(crate) config: &'a RadarConfig,
    pub(crate) dataset: &'a Dataset,
    /// Leading entities of `dataset` that are drawn.
    pub(crate) laid_out: usize,
    pub(crate) geometry: &'a RadarGeometry,
    pub(crate) interpolation: Interpolation,
    pub(crate) hover: HoverState,
    pub(crate) measurer: &'a dyn TextMeasurer,
}

impl<'a> Frame<'a> {
    /// Every mark of the chart, in no particular order.
    pub(crate) fn marks(&self) -> Vec<Mark> {
        let mut out = Vec::new();
        self.grid(&mut out);
        self.axes(&mut out);
        self.blobs(&mut out);
        out.push(self.tooltip());
        self.legend(&mut out);
        out
    }

    /// Entities on screen; later appends wait for the next full layout.
    fn entities(&self) -> &'a [Entity] {
        let entities = self.dataset.entities();
        &entities[..self.laid_out.min(entities.len())]
    }

    fn label(&self, value: f64) -> String {
        format!("{}{}", self.config.format.format(value), self.config.unit)
    }

    fn grid(&self, out: &mut Vec<Mark>) {
        let center = self.geometry.center();
        for level in 1..=self.config.levels {
            out.push(
                Mark::new(
                    ChartPart::GridRing { level }.id(),
                    CircleMark::new(center, self.geometry.ring_radius(level))
                        .with_fill(GRID_FILL, self.config.opacity_circles)
                        .with_stroke(GRID_FILL, 1.0)
                        .with_glow(),
                )
                .with_z_index(z_order::GRID_RINGS),
            );
            out.push(
                Mark::new(
                    ChartPart::RingLabel { level }.id(),
                    TextMark::new(
                        self.geometry.ring_label_anchor(level),
                        self.label(self.geometry.ring_value(level)),
                        RING_LABEL_SIZE,
                    )
                    .with_dy(RING_LABEL_DY)
                    .with_fill(LABEL_FILL),
                )
                .with_z_index(z_order::RING_LABELS),
            );
        }
    }

    fn axes(&self, out: &mut Vec<Mark>) {
        let center = self.geometry.center();
        let style = TextStyle::new(AXIS_LABEL_SIZE);
        for (axis, name) in self.dataset.all_axis().iter().enumerate() {
            let mut spoke = BezPath::new();
            spoke.move_to(center);
            spoke.line_to(self.geometry.spoke_end(axis));
            out.push(
                Mark::new(
                    ChartPart::Spoke { axis }.id(),
                    PathMark::new(spoke).with_stroke(css::WHITE, 2.0),
                )
                .with_z_index(z_order::SPOKES),
            );

            let lines = wrap_words(name, self.config.wrap_width, &style, self.measurer)
                .into_iter()
                .enumerate()
                .map(|(i, text)| TextLine {
                    text,
                    dy: i as f64 * LINE_HEIGHT_EM + AXIS_LABEL_DY,
                });
            out.push(
                Mark::new(
                    ChartPart::AxisLabel { axis }.id(),
                    TextMark::new(self.geometry.label_anchor(axis), "", AXIS_LABEL_SIZE)
                        .with_lines(lines)
                        .with_anchor(TextAnchor::Middle)
                        .with_fill(css::BLACK),
                )
                .with_z_index(z_order::AXIS_LABELS)
                .interactive(),
            );
        }
    }

    fn area_opacity(&self, entity: usize) -> f64 {
        match self.hover.blob {
            None => self.config.opacity_area,
            Some(hovered) if hovered == entity => HOVERED_AREA_OPACITY,
            Some(_) => DIMMED_AREA_OPACITY,
        }
    }

    fn blobs(&self, out: &mut Vec<Mark>) {
        for (entity, data) in self.entities().iter().enumerate() {
            let color = self.config.color.color(entity, &data.name);
            let points: Vec<Point> = data
                .axes
                .iter()
                .enumerate()
                .map(|(axis, p)| self.geometry.point(axis, p.value))
                .collect();
            let outline = self.interpolation.closed_path(&points);

            out.push(
                Mark::new(
                    ChartPart::BlobArea { entity }.id(),
                    PathMark::new(outline.clone()).with_fill(color, self.area_opacity(entity)),
                )
                .with_z_index(z_order::BLOB_AREAS)
                .interactive(),
            );
            out.push(
                Mark::new(
                    ChartPart::BlobStroke { entity }.id(),
                    PathMark::new(outline)
                        .with_stroke(color, self.config.stroke_width)
                        .with_glow(),
                )
                .with_z_index(z_order::BLOB_STROKES),
            );

            for (axis, &center) in points.iter().enumerate() {
                out.push(
                    Mark::new(
                        ChartPart::Dot { entity, axis }.id(),
                        CircleMark::new(center, self.config.dot_radius)
                            .with_fill(color, DOT_OPACITY),
                    )
                    .with_z_index(z_order::DOTS),
                );
                out.push(
                    Mark::new(
                        ChartPart::HitArea { entity, axis }.id(),
                        CircleMark::new(center, self.config.dot_radius * 1.5),
                    )
                    .with_z_index(z_order::HIT_AREAS)
                    .interactive(),
                );
            }
        }
    }

    /// The tooltip is always emitted; it is hidden unless a point is hovered.
    fn tooltip(&self) -> Mark {
        let target = self.hover.point.and_then(|(entity, axis)| {
            let value = self.entities().get(entity)?.axes.get(axis)?.value;
            Some((self.geometry.point(axis, value), value))
        });
        let text = match target {
            Some((pos, value)) => {
                TextMark::new(pos + TOOLTIP_OFFSET, self.label(value), TOOLTIP_SIZE)
            }
            None => {
                TextMark::new(self.geometry.center(), "", TOOLTIP_SIZE).with_visible(false)
            }
        };
        Mark::new(
            ChartPart::Tooltip.id(),
            text.with_dy(AXIS_LABEL_DY)
                .with_anchor(TextAnchor::Middle)
                .with_fill(css::BLACK),
        )
        .with_z_index(z_order::TOOLTIP)
    }

    fn legend(&self, out: &mut Vec<Mark>) {
        let Some(legend) = &self.config.legend else {
            return;
        };
        let items = self
            .entities()
            .iter()
            .enumerate()
            .map(|(i, e)| LegendItem::new(e.name.clone(), self.config.color.color(i, &e.name)))
            .collect();
        out.extend(LegendSwatches::new(legend, self.config.width, items).marks());
    }
}
