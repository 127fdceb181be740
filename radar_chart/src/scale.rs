// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Radial value scale.

/// A linear mapping from a continuous domain to a continuous range.
///
/// The radar chart maps values `0..=max_value` onto radii `0..=outer_radius`.
/// Values outside the domain extrapolate linearly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
}

impl ScaleLinear {
    /// Creates a new scale mapping `domain` values to `range` values.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Maps a value from domain space into range space.
    ///
    /// A degenerate domain maps every value to the start of the range.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = d1 - d0;
        if denom == 0.0 {
            return r0;
        }
        let t = (x - d0) / denom;
        r0 + t * (r1 - r0)
    }

    /// Returns the configured domain.
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Returns the configured range.
    pub fn range(&self) -> (f64, f64) {
        self.range
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn maps_and_extrapolates() {
        let s = ScaleLinear::new((0.0, 0.8), (0.0, 300.0));
        assert_eq!(s.map(0.0), 0.0);
        assert_eq!(s.map(0.4), 150.0);
        assert!((s.map(0.88) - 330.0).abs() < 1e-9);
    }

    #[test]
    fn degenerate_domain_maps_to_range_start() {
        let s = ScaleLinear::new((0.0, 0.0), (0.0, 300.0));
        assert_eq!(s.map(5.0), 0.0);
    }
}
