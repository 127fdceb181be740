// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Entity color assignment.

use core::fmt;

use peniko::Color;

/// Assigns a color to an entity.
///
/// The chart asks once per colored element of an entity (area, outline, dots,
/// legend swatch) with the same `(index, id)` pair, so one entity is drawn in
/// one color. `index` is the entity's position in the dataset and `id` its
/// name.
pub trait ColorScheme {
    /// Returns the color of the entity at `index` named `id`.
    fn color(&self, index: usize, id: &str) -> Color;
}

impl<F> ColorScheme for F
where
    F: Fn(usize, &str) -> Color,
{
    fn color(&self, index: usize, id: &str) -> Color {
        self(index, id)
    }
}

/// The ten-color categorical palette, cycled by entity index.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Category10;

impl Category10 {
    /// The palette, in assignment order.
    pub const COLORS: [Color; 10] = [
        Color::from_rgb8(0x1f, 0x77, 0xb4),
        Color::from_rgb8(0xff, 0x7f, 0x0e),
        Color::from_rgb8(0x2c, 0xa0, 0x2c),
        Color::from_rgb8(0xd6, 0x27, 0x28),
        Color::from_rgb8(0x94, 0x67, 0xbd),
        Color::from_rgb8(0x8c, 0x56, 0x4b),
        Color::from_rgb8(0xe3, 0x77, 0xc2),
        Color::from_rgb8(0x7f, 0x7f, 0x7f),
        Color::from_rgb8(0xbc, 0xbd, 0x22),
        Color::from_rgb8(0x17, 0xbe, 0xcf),
    ];
}

impl ColorScheme for Category10 {
    fn color(&self, index: usize, _id: &str) -> Color {
        Self::COLORS[index % Self::COLORS.len()]
    }
}

/// Debug-friendly wrapper so configurations holding a scheme can derive `Debug`.
pub(crate) struct SchemeName<'a>(pub(crate) &'a dyn ColorScheme);

impl fmt::Debug for SchemeName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let first = self.0.color(0, "").to_rgba8();
        write!(
            f,
            "ColorScheme(#{:02x}{:02x}{:02x}..)",
            first.r, first.g, first.b
        )
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use peniko::color::palette::css;

    use super::*;

    #[test]
    fn category10_cycles_by_index() {
        let scheme = Category10;
        assert_eq!(scheme.color(0, "a"), Category10::COLORS[0]);
        assert_eq!(scheme.color(10, "b"), scheme.color(0, "c"));
        assert_ne!(scheme.color(1, "a"), scheme.color(0, "a"));
    }

    #[test]
    fn closures_are_schemes() {
        let by_name = |_: usize, id: &str| if id == "Apple" { css::RED } else { css::GRAY };
        assert_eq!(by_name.color(3, "Apple"), css::RED);
        assert_eq!(by_name.color(0, "Nokia"), css::GRAY);
    }
}
