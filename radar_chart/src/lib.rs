// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Radar (spider) charts on top of `radar_core`.
//!
//! A [`RadarChart`] draws one closed blob per [`Entity`] across a shared set
//! of named axes, inside concentric level rings:
//! - **Layout**: [`RadarGeometry`] places axis `i` at angle
//!   `i * 2π / n - π/2` and maps values through a linear [`ScaleLinear`] onto
//!   radii.
//! - **Dataset**: [`Dataset`] keeps every entity on the same axis sequence;
//!   appends, replacements, inversions and axis reorders are validated before
//!   they apply.
//! - **Output**: the chart emits stable-identity marks into a
//!   [`RenderSurface`], diffed so hosts can animate re-layouts. Each mark id
//!   decodes to a [`ChartPart`], so hosts route pointer input back through
//!   [`RadarChart::handle_pointer`].
//!
//! ```
//! use radar_chart::{Entity, RadarChart, RadarConfig, RetainedSurface};
//!
//! let axes = ["Battery", "Brand", "Contract"];
//! let chart = RadarChart::new(
//!     vec![
//!         Entity::new("Apple", axes.into_iter().zip([0.22, 0.28, 0.29])),
//!         Entity::new("Nokia", axes.into_iter().zip([0.27, 0.16, 0.35])),
//!     ],
//!     RetainedSurface::new(),
//!     RadarConfig::default(),
//! )
//! .unwrap();
//! assert_eq!(chart.max_value(), 0.35);
//! ```

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod chart;
mod color;
mod config;
mod curve;
mod data;
mod error;
mod event;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod geometry;
mod legend;
mod part;
mod render;
mod scale;
pub mod z_order;

#[cfg(test)]
mod chart_tests;

pub use chart::RadarChart;
pub use color::{Category10, ColorScheme};
pub use config::{LegendConfig, LegendOption, Margin, RadarConfig, RadarOptions};
pub use curve::Interpolation;
pub use data::{AxisPoint, Dataset, Entity, move_element, swap};
pub use error::{RadarError, Result};
pub use event::{ChartChange, ChartEvent, PointerAction};
pub use format::{FormatKind, NumberFormat, Sign};
pub use geometry::RadarGeometry;
pub use legend::{LegendItem, LegendSwatches};
pub use part::ChartPart;
pub use render::{
    DIMMED_AREA_OPACITY, DOT_OPACITY, GRID_FILL, HOVER_TRANSITION, HOVERED_AREA_OPACITY,
    UPDATE_TRANSITION,
};
pub use scale::ScaleLinear;

pub use radar_core::{
    HeuristicTextMeasurer, Mark, MarkDiff, MarkId, MarkPayload, RenderSurface, RetainedSurface,
    TextMeasurer, TextStyle, Transition,
};
