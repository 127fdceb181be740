// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart configuration.
//!
//! [`RadarConfig`] is the complete, typed configuration, built from defaults
//! with `with_*` setters. [`RadarOptions`] is the loose, all-optional form
//! (for example deserialized from JSON): applying it overrides only the fields
//! it sets.

use alloc::string::String;
use alloc::sync::Arc;
use core::fmt;

use kurbo::{Point, Size};

use crate::color::{Category10, ColorScheme, SchemeName};
use crate::error::Result;
use crate::format::NumberFormat;

/// Space around the chart area inside the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(default))]
pub struct Margin {
    /// Top margin.
    pub top: f64,
    /// Right margin.
    pub right: f64,
    /// Bottom margin.
    pub bottom: f64,
    /// Left margin.
    pub left: f64,
}

impl Margin {
    /// The same margin on every side.
    pub const fn uniform(margin: f64) -> Self {
        Self {
            top: margin,
            right: margin,
            bottom: margin,
            left: margin,
        }
    }
}

impl Default for Margin {
    fn default() -> Self {
        Self::uniform(20.0)
    }
}

/// Legend placement and title.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct LegendConfig {
    /// Optional title drawn above the rows.
    pub title: Option<String>,
    /// Horizontal offset of the legend group from the canvas origin.
    pub translate_x: f64,
    /// Vertical offset of the legend group from the canvas origin.
    pub translate_y: f64,
}

impl LegendConfig {
    /// A legend at the canvas origin without a title.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the group offset.
    pub fn with_translate(mut self, x: f64, y: f64) -> Self {
        self.translate_x = x;
        self.translate_y = y;
        self
    }
}

/// Rendering parameters of a radar chart. Immutable once the chart is built.
#[derive(Clone)]
pub struct RadarConfig {
    /// Width of the chart area.
    pub width: f64,
    /// Height of the chart area.
    pub height: f64,
    /// Canvas margins around the chart area.
    pub margin: Margin,
    /// Number of concentric level rings.
    pub levels: usize,
    /// Floor for the value of the outer ring; `0` derives it from the data alone.
    pub max_value: f64,
    /// Label distance from the center, as a multiple of the outer ring's value.
    pub label_factor: f64,
    /// Width after which axis labels wrap onto a new line.
    pub wrap_width: f64,
    /// Fill opacity of blob areas.
    pub opacity_area: f64,
    /// Radius of the data point dots.
    pub dot_radius: f64,
    /// Fill opacity of the level rings.
    pub opacity_circles: f64,
    /// Width of blob outlines.
    pub stroke_width: f64,
    /// Whether blob outlines are smoothed curves instead of straight segments.
    pub round_strokes: bool,
    /// Entity color assignment.
    pub color: Arc<dyn ColorScheme>,
    /// Format of ring labels and tooltips.
    pub format: NumberFormat,
    /// Suffix appended after formatted values (e.g. `"$"`).
    pub unit: String,
    /// Legend, when one should be drawn.
    pub legend: Option<LegendConfig>,
    /// Whether value inversion (`100 - v`) is available.
    pub allow_inverse_data: bool,
}

impl Default for RadarConfig {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 600.0,
            margin: Margin::default(),
            levels: 3,
            max_value: 0.0,
            label_factor: 1.25,
            wrap_width: 60.0,
            opacity_area: 0.35,
            dot_radius: 4.0,
            opacity_circles: 0.1,
            stroke_width: 2.0,
            round_strokes: false,
            color: Arc::new(Category10),
            format: NumberFormat::default(),
            unit: String::new(),
            legend: None,
            allow_inverse_data: false,
        }
    }
}

impl fmt::Debug for RadarConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RadarConfig")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("margin", &self.margin)
            .field("levels", &self.levels)
            .field("max_value", &self.max_value)
            .field("label_factor", &self.label_factor)
            .field("wrap_width", &self.wrap_width)
            .field("opacity_area", &self.opacity_area)
            .field("dot_radius", &self.dot_radius)
            .field("opacity_circles", &self.opacity_circles)
            .field("stroke_width", &self.stroke_width)
            .field("round_strokes", &self.round_strokes)
            .field("color", &SchemeName(&*self.color))
            .field("format", &self.format)
            .field("unit", &self.unit)
            .field("legend", &self.legend)
            .field("allow_inverse_data", &self.allow_inverse_data)
            .finish()
    }
}

impl RadarConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the chart area size.
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the canvas margins.
    pub fn with_margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    /// Sets the number of level rings.
    pub fn with_levels(mut self, levels: usize) -> Self {
        self.levels = levels;
        self
    }

    /// Sets the floor of the outer ring's value.
    pub fn with_max_value(mut self, max_value: f64) -> Self {
        self.max_value = max_value;
        self
    }

    /// Sets the label placement factor.
    pub fn with_label_factor(mut self, label_factor: f64) -> Self {
        self.label_factor = label_factor;
        self
    }

    /// Sets the label wrap width.
    pub fn with_wrap_width(mut self, wrap_width: f64) -> Self {
        self.wrap_width = wrap_width;
        self
    }

    /// Sets the blob area opacity.
    pub fn with_opacity_area(mut self, opacity: f64) -> Self {
        self.opacity_area = opacity;
        self
    }

    /// Sets the data point dot radius.
    pub fn with_dot_radius(mut self, radius: f64) -> Self {
        self.dot_radius = radius;
        self
    }

    /// Sets the level ring opacity.
    pub fn with_opacity_circles(mut self, opacity: f64) -> Self {
        self.opacity_circles = opacity;
        self
    }

    /// Sets the blob outline width.
    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width;
        self
    }

    /// Selects smoothed (`true`) or straight (`false`) blob outlines.
    pub fn with_round_strokes(mut self, round: bool) -> Self {
        self.round_strokes = round;
        self
    }

    /// Sets the color scheme.
    pub fn with_color(mut self, color: impl ColorScheme + 'static) -> Self {
        self.color = Arc::new(color);
        self
    }

    /// Sets the value format.
    pub fn with_format(mut self, format: NumberFormat) -> Self {
        self.format = format;
        self
    }

    /// Sets the unit suffix.
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    /// Enables the legend.
    pub fn with_legend(mut self, legend: LegendConfig) -> Self {
        self.legend = Some(legend);
        self
    }

    /// Enables or disables value inversion.
    pub fn with_inverse_data(mut self, allow: bool) -> Self {
        self.allow_inverse_data = allow;
        self
    }

    /// Applies the fields `options` sets, keeping the rest.
    ///
    /// Fails only when `options.format` is not a valid specifier.
    pub fn with_options(mut self, options: RadarOptions) -> Result<Self> {
        let RadarOptions {
            w,
            h,
            margin,
            levels,
            max_value,
            label_factor,
            wrap_width,
            opacity_area,
            dot_radius,
            opacity_circles,
            stroke_width,
            round_strokes,
            format,
            unit,
            legend,
            allow_inverse_data,
        } = options;

        if let Some(format) = format {
            self.format = NumberFormat::parse(&format)?;
        }
        self.width = w.unwrap_or(self.width);
        self.height = h.unwrap_or(self.height);
        self.margin = margin.unwrap_or(self.margin);
        self.levels = levels.unwrap_or(self.levels);
        self.max_value = max_value.unwrap_or(self.max_value);
        self.label_factor = label_factor.unwrap_or(self.label_factor);
        self.wrap_width = wrap_width.unwrap_or(self.wrap_width);
        self.opacity_area = opacity_area.unwrap_or(self.opacity_area);
        self.dot_radius = dot_radius.unwrap_or(self.dot_radius);
        self.opacity_circles = opacity_circles.unwrap_or(self.opacity_circles);
        self.stroke_width = stroke_width.unwrap_or(self.stroke_width);
        self.round_strokes = round_strokes.unwrap_or(self.round_strokes);
        if let Some(unit) = unit {
            self.unit = unit;
        }
        if let Some(legend) = legend {
            self.legend = legend.into_config();
        }
        self.allow_inverse_data = allow_inverse_data.unwrap_or(self.allow_inverse_data);
        Ok(self)
    }

    /// Size of the whole canvas: the chart area plus margins.
    pub fn canvas_size(&self) -> Size {
        Size::new(
            self.width + self.margin.left + self.margin.right,
            self.height + self.margin.top + self.margin.bottom,
        )
    }

    /// Center of the chart area in canvas coordinates.
    pub fn center(&self) -> Point {
        Point::new(
            self.margin.left + self.width / 2.0,
            self.margin.top + self.height / 2.0,
        )
    }

    /// Radius of the outermost level ring.
    pub fn outer_radius(&self) -> f64 {
        (self.width / 2.0).min(self.height / 2.0)
    }
}

/// A legend option as written in loose configuration: a flag or a full config.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(untagged))]
pub enum LegendOption {
    /// A bare flag. Only a configuration object draws a legend, so either
    /// value disables it.
    Enabled(bool),
    /// A configured legend.
    Config(LegendConfig),
}

impl LegendOption {
    fn into_config(self) -> Option<LegendConfig> {
        match self {
            Self::Enabled(_) => None,
            Self::Config(config) => Some(config),
        }
    }
}

/// Loose configuration where every field is optional.
///
/// Field names follow the chart's option keys (`w`, `h`, `maxValue`,
/// `labelFactor`, ...). Unknown keys are ignored when deserializing.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct RadarOptions {
    /// Chart area width.
    pub w: Option<f64>,
    /// Chart area height.
    pub h: Option<f64>,
    /// Canvas margins.
    pub margin: Option<Margin>,
    /// Number of level rings.
    pub levels: Option<usize>,
    /// Floor of the outer ring's value.
    pub max_value: Option<f64>,
    /// Label placement factor.
    pub label_factor: Option<f64>,
    /// Label wrap width.
    pub wrap_width: Option<f64>,
    /// Blob area opacity.
    pub opacity_area: Option<f64>,
    /// Dot radius.
    pub dot_radius: Option<f64>,
    /// Level ring opacity.
    pub opacity_circles: Option<f64>,
    /// Blob outline width.
    pub stroke_width: Option<f64>,
    /// Smoothed blob outlines.
    pub round_strokes: Option<bool>,
    /// Number format specifier, e.g. `".1f"`.
    pub format: Option<String>,
    /// Unit suffix.
    pub unit: Option<String>,
    /// Legend flag or configuration.
    pub legend: Option<LegendOption>,
    /// Whether value inversion is available.
    pub allow_inverse_data: Option<bool>,
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::error::RadarError;

    #[test]
    fn defaults_match_the_documented_values() {
        let config = RadarConfig::default();
        assert_eq!(config.canvas_size(), Size::new(640.0, 640.0));
        assert_eq!(config.center(), Point::new(320.0, 320.0));
        assert_eq!(config.outer_radius(), 300.0);
        assert_eq!(config.levels, 3);
        assert_eq!(config.label_factor, 1.25);
        assert_eq!(config.format.format(0.5), "50.00%");
        assert!(config.legend.is_none());
        assert!(!config.allow_inverse_data);
    }

    #[test]
    fn outer_radius_uses_the_smaller_side() {
        let config = RadarConfig::new().with_size(400.0, 300.0);
        assert_eq!(config.outer_radius(), 150.0);
    }

    #[test]
    fn options_override_only_present_fields() {
        let options = RadarOptions {
            w: Some(300.0),
            levels: Some(5),
            format: Some(".1f".into()),
            unit: Some("pts".into()),
            legend: Some(LegendOption::Config(LegendConfig::new().with_title("Phones"))),
            ..RadarOptions::default()
        };
        let config = RadarConfig::new()
            .with_stroke_width(3.0)
            .with_options(options)
            .unwrap();
        assert_eq!(config.width, 300.0);
        assert_eq!(config.height, 600.0);
        assert_eq!(config.levels, 5);
        assert_eq!(config.stroke_width, 3.0);
        assert_eq!(config.format.format(2.0), "2.0");
        assert_eq!(config.unit, "pts");
        assert_eq!(
            config.legend.and_then(|l| l.title).as_deref(),
            Some("Phones")
        );
    }

    #[test]
    fn only_a_legend_object_draws_a_legend() {
        let configured = RadarConfig::new()
            .with_options(RadarOptions {
                legend: Some(LegendOption::Config(LegendConfig::new().with_title("Phones"))),
                ..RadarOptions::default()
            })
            .unwrap();
        assert_eq!(
            configured.legend,
            Some(LegendConfig::new().with_title("Phones"))
        );

        for flag in [true, false] {
            let flagged = configured
                .clone()
                .with_options(RadarOptions {
                    legend: Some(LegendOption::Enabled(flag)),
                    ..RadarOptions::default()
                })
                .unwrap();
            assert_eq!(flagged.legend, None, "legend: {flag} should not draw a legend");
        }
    }

    #[test]
    fn bad_format_rejects_the_whole_options_record() {
        let err = RadarConfig::new()
            .with_options(RadarOptions {
                format: Some("%%".into()),
                ..RadarOptions::default()
            })
            .unwrap_err();
        assert_eq!(err, RadarError::InvalidFormat("%%".into()));
    }
}
