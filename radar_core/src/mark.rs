// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mark types: the unit of identity and drawing handed to a surface.

use alloc::string::String;

use kurbo::{BezPath, Circle, Point, Rect, Shape};
use peniko::Brush;
use smallvec::SmallVec;

/// Stable identity of a mark across layouts.
///
/// Two marks with the same id in consecutive layouts are the same visual node;
/// the surface updates it in place (and may animate the change).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkId(pub u64);

impl MarkId {
    /// Creates an id from its raw value.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// The kind of visual node a mark describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkKind {
    /// An axis-aligned rectangle.
    Rect,
    /// A circle.
    Circle,
    /// An arbitrary path.
    Path,
    /// One or more lines of text.
    Text,
}

/// Horizontal text anchor, matching SVG `text-anchor`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// The position is the start of the line.
    Start,
    /// The position is the center of the line.
    Middle,
    /// The position is the end of the line.
    End,
}

/// Vertical text baseline, matching SVG `dominant-baseline`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextBaseline {
    /// Alphabetic baseline.
    Alphabetic,
    /// Vertically centered.
    Middle,
    /// Hanging baseline.
    Hanging,
}

/// A filled rectangle.
#[derive(Clone, Debug, PartialEq)]
pub struct RectMark {
    /// Rectangle in scene coordinates.
    pub rect: Rect,
    /// Fill paint.
    pub fill: Brush,
    /// Fill opacity in `0..=1`, applied on top of the brush.
    pub fill_opacity: f64,
}

impl RectMark {
    /// Creates an opaque rectangle.
    pub fn new(rect: Rect, fill: impl Into<Brush>) -> Self {
        Self {
            rect,
            fill: fill.into(),
            fill_opacity: 1.0,
        }
    }
}

/// A circle with optional stroke.
#[derive(Clone, Debug, PartialEq)]
pub struct CircleMark {
    /// Circle in scene coordinates.
    pub circle: Circle,
    /// Fill paint; `None` leaves the interior unpainted.
    pub fill: Option<Brush>,
    /// Fill opacity in `0..=1`.
    pub fill_opacity: f64,
    /// Stroke paint; `None` disables the outline.
    pub stroke: Option<Brush>,
    /// Stroke width in scene coordinates.
    pub stroke_width: f64,
    /// Whether the surface should draw a soft glow behind the shape.
    pub glow: bool,
}

impl CircleMark {
    /// Creates an unpainted circle.
    pub fn new(center: Point, radius: f64) -> Self {
        Self {
            circle: Circle::new(center, radius),
            fill: None,
            fill_opacity: 1.0,
            stroke: None,
            stroke_width: 0.0,
            glow: false,
        }
    }

    /// Sets the fill paint and opacity.
    pub fn with_fill(mut self, fill: impl Into<Brush>, opacity: f64) -> Self {
        self.fill = Some(fill.into());
        self.fill_opacity = opacity;
        self
    }

    /// Sets the stroke paint and width.
    pub fn with_stroke(mut self, stroke: impl Into<Brush>, width: f64) -> Self {
        self.stroke = Some(stroke.into());
        self.stroke_width = width;
        self
    }

    /// Enables the glow effect.
    pub fn with_glow(mut self) -> Self {
        self.glow = true;
        self
    }
}

/// A path with optional fill and stroke.
#[derive(Clone, Debug, PartialEq)]
pub struct PathMark {
    /// Path geometry in scene coordinates.
    pub path: BezPath,
    /// Fill paint; `None` leaves the interior unpainted.
    pub fill: Option<Brush>,
    /// Fill opacity in `0..=1`.
    pub fill_opacity: f64,
    /// Stroke paint; `None` disables the outline.
    pub stroke: Option<Brush>,
    /// Stroke width in scene coordinates.
    pub stroke_width: f64,
    /// Whether the surface should draw a soft glow behind the shape.
    pub glow: bool,
}

impl PathMark {
    /// Creates an unpainted path.
    pub fn new(path: BezPath) -> Self {
        Self {
            path,
            fill: None,
            fill_opacity: 1.0,
            stroke: None,
            stroke_width: 0.0,
            glow: false,
        }
    }

    /// Sets the fill paint and opacity.
    pub fn with_fill(mut self, fill: impl Into<Brush>, opacity: f64) -> Self {
        self.fill = Some(fill.into());
        self.fill_opacity = opacity;
        self
    }

    /// Sets the stroke paint and width.
    pub fn with_stroke(mut self, stroke: impl Into<Brush>, width: f64) -> Self {
        self.stroke = Some(stroke.into());
        self.stroke_width = width;
        self
    }

    /// Enables the glow effect.
    pub fn with_glow(mut self) -> Self {
        self.glow = true;
        self
    }
}

/// One line of a text mark.
#[derive(Clone, Debug, PartialEq)]
pub struct TextLine {
    /// The line content (unshaped).
    pub text: String,
    /// Vertical offset from the mark position, in ems of the mark's font size.
    pub dy: f64,
}

/// A block of text lines sharing a position and style.
#[derive(Clone, Debug, PartialEq)]
pub struct TextMark {
    /// Anchor position in scene coordinates.
    pub pos: Point,
    /// Lines in display order.
    pub lines: SmallVec<[TextLine; 2]>,
    /// Font size in scene coordinates.
    pub font_size: f64,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
    /// Vertical baseline.
    pub baseline: TextBaseline,
    /// Fill paint.
    pub fill: Brush,
    /// Whether the text is displayed.
    pub visible: bool,
}

impl TextMark {
    /// Creates a single-line, start-anchored text mark with an alphabetic baseline.
    pub fn new(pos: Point, text: impl Into<String>, font_size: f64) -> Self {
        let mut lines = SmallVec::new();
        lines.push(TextLine {
            text: text.into(),
            dy: 0.0,
        });
        Self {
            pos,
            lines,
            font_size,
            anchor: TextAnchor::Start,
            baseline: TextBaseline::Alphabetic,
            fill: Brush::default(),
            visible: true,
        }
    }

    /// Replaces the lines of this mark.
    pub fn with_lines(mut self, lines: impl IntoIterator<Item = TextLine>) -> Self {
        self.lines = lines.into_iter().collect();
        self
    }

    /// Sets the vertical offset of every line to `dy` ems.
    pub fn with_dy(mut self, dy: f64) -> Self {
        for line in &mut self.lines {
            line.dy = dy;
        }
        self
    }

    /// Sets the text anchor.
    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Sets the text baseline.
    pub fn with_baseline(mut self, baseline: TextBaseline) -> Self {
        self.baseline = baseline;
        self
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets whether the text is displayed.
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Returns the lines joined with a single space.
    pub fn joined(&self) -> String {
        let mut out = String::new();
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push_str(&line.text);
        }
        out
    }
}

/// What a mark draws.
#[derive(Clone, Debug, PartialEq)]
pub enum MarkPayload {
    /// A rectangle.
    Rect(RectMark),
    /// A circle.
    Circle(CircleMark),
    /// A path.
    Path(PathMark),
    /// Text.
    Text(TextMark),
}

impl MarkPayload {
    /// Returns the kind of node this payload describes.
    pub fn kind(&self) -> MarkKind {
        match self {
            Self::Rect(_) => MarkKind::Rect,
            Self::Circle(_) => MarkKind::Circle,
            Self::Path(_) => MarkKind::Path,
            Self::Text(_) => MarkKind::Text,
        }
    }

    /// Geometric bounds, ignoring stroke width.
    ///
    /// Text has no bounds without a text measurer and returns `None`.
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            Self::Rect(r) => Some(r.rect),
            Self::Circle(c) => Some(c.circle.bounding_box()),
            Self::Path(p) => Some(p.path.bounding_box()),
            Self::Text(_) => None,
        }
    }
}

impl From<RectMark> for MarkPayload {
    fn from(value: RectMark) -> Self {
        Self::Rect(value)
    }
}

impl From<CircleMark> for MarkPayload {
    fn from(value: CircleMark) -> Self {
        Self::Circle(value)
    }
}

impl From<PathMark> for MarkPayload {
    fn from(value: PathMark) -> Self {
        Self::Path(value)
    }
}

impl From<TextMark> for MarkPayload {
    fn from(value: TextMark) -> Self {
        Self::Text(value)
    }
}

/// A visual node: identity, paint order, and payload.
#[derive(Clone, Debug, PartialEq)]
pub struct Mark {
    /// Stable identity.
    pub id: MarkId,
    /// Rendering order. Surfaces paint by `(z_index, id)`.
    pub z_index: i32,
    /// Whether the host should route pointer events on this node back to the chart.
    pub interactive: bool,
    /// What to draw.
    pub payload: MarkPayload,
}

impl Mark {
    /// Creates a non-interactive mark at z-index 0.
    pub fn new(id: MarkId, payload: impl Into<MarkPayload>) -> Self {
        Self {
            id,
            z_index: 0,
            interactive: false,
            payload: payload.into(),
        }
    }

    /// Sets the z-index used for render ordering.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Marks this node as a pointer-event target.
    pub fn interactive(mut self) -> Self {
        self.interactive = true;
        self
    }

    /// Returns the kind of node this mark describes.
    pub fn kind(&self) -> MarkKind {
        self.payload.kind()
    }

    /// Returns the text payload, if this is a text mark.
    pub fn as_text(&self) -> Option<&TextMark> {
        match &self.payload {
            MarkPayload::Text(t) => Some(t),
            _ => None,
        }
    }

    /// Returns the path payload, if this is a path mark.
    pub fn as_path(&self) -> Option<&PathMark> {
        match &self.payload {
            MarkPayload::Path(p) => Some(p),
            _ => None,
        }
    }

    /// Returns the circle payload, if this is a circle mark.
    pub fn as_circle(&self) -> Option<&CircleMark> {
        match &self.payload {
            MarkPayload::Circle(c) => Some(c),
            _ => None,
        }
    }

    /// Returns the rect payload, if this is a rect mark.
    pub fn as_rect(&self) -> Option<&RectMark> {
        match &self.payload {
            MarkPayload::Rect(r) => Some(r),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use peniko::color::palette::css;

    use super::*;

    #[test]
    fn circle_bounds_cover_the_radius() {
        let mark = Mark::new(
            MarkId::from_raw(1),
            CircleMark::new(Point::new(10.0, 20.0), 4.0).with_fill(css::TOMATO, 0.8),
        );
        assert_eq!(mark.kind(), MarkKind::Circle);
        assert_eq!(
            mark.payload.bounds(),
            Some(Rect::new(6.0, 16.0, 14.0, 24.0))
        );
    }

    #[test]
    fn text_has_no_intrinsic_bounds() {
        let text = TextMark::new(Point::ZERO, "Speed", 11.0)
            .with_lines([
                TextLine {
                    text: "Top".into(),
                    dy: 0.35,
                },
                TextLine {
                    text: "speed".into(),
                    dy: 1.75,
                },
            ])
            .with_anchor(TextAnchor::Middle);
        assert_eq!(text.joined(), "Top speed");
        assert_eq!(MarkPayload::from(text).bounds(), None);
    }
}
