// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement hooks for radar chart labels.
//!
//! Axis labels are centered on a point outside the outer ring and broken into
//! several lines when they are wider than a configured width. Doing that needs
//! the width of a run of text as the host will render it, so chart code depends
//! on the small [`TextMeasurer`] interface instead of a shaping engine.
//!
//! The [`wrap`] module holds the greedy line-breaking used for those labels.

#![no_std]

extern crate alloc;

pub mod wrap;

pub use wrap::{LINE_HEIGHT_EM, wrap_words};

/// Measures single lines of text in the chart's coordinate system.
///
/// Implementations can be heuristic (see [`HeuristicTextMeasurer`]) or backed
/// by the host's text engine.
pub trait TextMeasurer {
    /// Measure a single line of text.
    ///
    /// `text` is treated as one line; it is never broken by the measurer.
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics;
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        (**self).measure(text, style)
    }
}

/// Text styling inputs relevant to measurement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in the chart's coordinate system (typically pixels).
    pub font_size: f64,
    /// Whether the run is set in a bold face.
    pub bold: bool,
}

impl TextStyle {
    /// Creates a regular-weight `TextStyle` with the given `font_size`.
    #[must_use]
    pub fn new(font_size: f64) -> Self {
        Self {
            font_size,
            bold: false,
        }
    }

    /// Switches to a bold face.
    #[must_use]
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(11.0)
    }
}

/// Measured metrics for a single line of text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextMetrics {
    /// The advance width of the line.
    pub advance_width: f64,
    /// Distance from baseline to the top of typical glyphs.
    pub ascent: f64,
    /// Distance from baseline to the bottom of typical glyphs.
    pub descent: f64,
}

impl TextMetrics {
    /// Returns `ascent + descent`.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.ascent + self.descent
    }
}

/// A heuristic text measurer for headless rendering and tests.
///
/// It assumes an average glyph width of 0.6em and a baseline at 0.8em.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        let bold = if style.bold {
            1.1
        } else {
            1.0
        };
        TextMetrics {
            advance_width: 0.6 * bold * style.font_size * text.chars().count() as f64,
            ascent: 0.8 * style.font_size,
            descent: 0.2 * style.font_size,
        }
    }
}
