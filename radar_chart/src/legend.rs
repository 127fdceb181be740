// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Legend mark generation.
//!
//! The legend is a vertical list of color swatches with entity names, right
//! aligned to the chart area and optionally topped by a title.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect};
use peniko::Color;
use radar_core::{Mark, RectMark, TextMark};

use crate::config::LegendConfig;
use crate::part::ChartPart;
use crate::z_order;

/// Fill of the row labels.
pub(crate) const LABEL_FILL: Color = Color::from_rgb8(0x73, 0x73, 0x73);
/// Fill of the title.
pub(crate) const TITLE_FILL: Color = Color::from_rgb8(0x40, 0x40, 0x40);

/// One legend row.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendItem {
    /// The label shown next to the swatch.
    pub label: String,
    /// The swatch color.
    pub color: Color,
}

impl LegendItem {
    /// Creates a row.
    pub fn new(label: impl Into<String>, color: Color) -> Self {
        Self {
            label: label.into(),
            color,
        }
    }
}

/// A swatch-and-label legend.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendSwatches {
    /// Origin of the legend group in canvas coordinates.
    pub origin: Point,
    /// Width of the chart area; rows are placed relative to its right edge.
    pub chart_width: f64,
    /// Optional title.
    pub title: Option<String>,
    /// Swatch square size.
    pub swatch_size: f64,
    /// Distance between row tops.
    pub row_height: f64,
    /// Label font size.
    pub font_size: f64,
    /// Title font size.
    pub title_font_size: f64,
    /// Rows in display order.
    pub items: Vec<LegendItem>,
}

impl LegendSwatches {
    /// A legend for `config`, drawn next to a chart area `chart_width` wide.
    ///
    /// The group sits 20 units below the configured offset so the title has
    /// room above the first row.
    pub fn new(config: &LegendConfig, chart_width: f64, items: Vec<LegendItem>) -> Self {
        Self {
            origin: Point::new(config.translate_x, config.translate_y + 20.0),
            chart_width,
            title: config.title.clone(),
            swatch_size: 10.0,
            row_height: 20.0,
            font_size: 11.0,
            title_font_size: 12.0,
            items,
        }
    }

    /// Generates the title (if any) and a swatch and label per row.
    pub fn marks(&self) -> Vec<Mark> {
        let mut out = Vec::with_capacity(self.items.len() * 2 + 1);
        let origin = self.origin.to_vec2();

        if let Some(title) = self.title.as_deref().filter(|t| !t.is_empty()) {
            let pos = Point::new(self.chart_width - 70.0, -10.0) + origin;
            out.push(
                Mark::new(
                    ChartPart::LegendTitle.id(),
                    TextMark::new(pos, title, self.title_font_size).with_fill(TITLE_FILL),
                )
                .with_z_index(z_order::LEGEND_LABELS),
            );
        }

        for (i, item) in self.items.iter().enumerate() {
            let y = i as f64 * self.row_height;
            let swatch = Rect::from_origin_size(
                Point::new(self.chart_width - 65.0, y) + origin,
                (self.swatch_size, self.swatch_size),
            );
            out.push(
                Mark::new(
                    ChartPart::LegendSwatch { entity: i }.id(),
                    RectMark::new(swatch, item.color),
                )
                .with_z_index(z_order::LEGEND_SWATCHES),
            );

            let label = Point::new(self.chart_width - 52.0, y + 9.0) + origin;
            out.push(
                Mark::new(
                    ChartPart::LegendLabel { entity: i }.id(),
                    TextMark::new(label, item.label.clone(), self.font_size)
                        .with_fill(LABEL_FILL),
                )
                .with_z_index(z_order::LEGEND_LABELS),
            );
        }
        out
    }
}
