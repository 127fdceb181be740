// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Number formatting for level labels and tooltips.
//!
//! Formats are written in a subset of the d3-format mini-language:
//!
//! ```text
//! [sign][,][.precision][~][type]
//! ```
//!
//! - `sign`: `-` (default, minus for negatives only), `+`, or a space.
//! - `,`: group thousands with commas.
//! - `.precision`: digits after the point (`f`, `%`, `e`) or significant digits
//!   (no type).
//! - `~`: trim insignificant trailing zeros.
//! - `type`: `f` fixed, `%` percentage, `d` integer, `e` exponent, or none.
//!
//! Fill, alignment, width and currency symbols are not supported.

use alloc::format;
use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use crate::error::{RadarError, Result};

/// Precision used by `f`, `%` and `e` when none is given.
const DEFAULT_PRECISION: usize = 6;

/// How the sign of a value is shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sign {
    /// A minus for negative values, nothing otherwise.
    Minus,
    /// A minus for negative values, a plus otherwise.
    Plus,
    /// A minus for negative values, a space otherwise.
    Space,
}

/// The notation a [`NumberFormat`] produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormatKind {
    /// Fixed point (`f`).
    Fixed,
    /// Multiply by 100, fixed point, then `%` (`%`).
    Percent,
    /// Rounded to an integer (`d`).
    Integer,
    /// Exponent notation (`e`), e.g. `1.5e+3`.
    Exponent,
    /// Shortest representation, or `precision` significant digits (no type).
    General,
}

/// A parsed number format specifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NumberFormat {
    /// Sign display.
    pub sign: Sign,
    /// Whether to group thousands with commas.
    pub grouping: bool,
    /// Digits of precision; the meaning depends on [`NumberFormat::kind`].
    pub precision: Option<usize>,
    /// Whether to trim insignificant trailing zeros.
    pub trim: bool,
    /// Output notation.
    pub kind: FormatKind,
}

impl NumberFormat {
    /// Parses a specifier such as `.2%` or `,.1f`.
    pub fn parse(spec: &str) -> Result<Self> {
        let invalid = || RadarError::InvalidFormat(spec.to_string());
        let mut rest = spec;

        let sign = match rest.chars().next() {
            Some('-') => Sign::Minus,
            Some('+') => Sign::Plus,
            Some(' ') => Sign::Space,
            _ => Sign::Minus,
        };
        if matches!(rest.chars().next(), Some('-' | '+' | ' ')) {
            rest = &rest[1..];
        }

        let grouping = rest.starts_with(',');
        if grouping {
            rest = &rest[1..];
        }

        let mut precision = None;
        if let Some(after_dot) = rest.strip_prefix('.') {
            let digits = after_dot
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(after_dot.len());
            if digits == 0 {
                return Err(invalid());
            }
            precision = Some(after_dot[..digits].parse().map_err(|_| invalid())?);
            rest = &after_dot[digits..];
        }

        let trim = rest.starts_with('~');
        if trim {
            rest = &rest[1..];
        }

        let kind = match rest {
            "" => FormatKind::General,
            "f" => FormatKind::Fixed,
            "%" => FormatKind::Percent,
            "d" => FormatKind::Integer,
            "e" => FormatKind::Exponent,
            _ => return Err(invalid()),
        };

        Ok(Self {
            sign,
            grouping,
            precision,
            trim,
            kind,
        })
    }

    /// Formats `value`.
    pub fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return format!("{value}");
        }

        let magnitude = value.abs();
        let (mut body, suffix) = match self.kind {
            FormatKind::Fixed => (
                format!("{:.*}", self.precision.unwrap_or(DEFAULT_PRECISION), magnitude),
                "",
            ),
            FormatKind::Percent => (
                format!(
                    "{:.*}",
                    self.precision.unwrap_or(DEFAULT_PRECISION),
                    magnitude * 100.0
                ),
                "%",
            ),
            FormatKind::Integer => (format!("{magnitude:.0}"), ""),
            FormatKind::Exponent => (
                exponent(magnitude, self.precision.unwrap_or(DEFAULT_PRECISION)),
                "",
            ),
            FormatKind::General => match self.precision {
                Some(p) => (significant(magnitude, p.max(1)), ""),
                None => (format!("{magnitude}"), ""),
            },
        };

        if self.trim || (self.kind == FormatKind::General && self.precision.is_some()) {
            body = trim_zeros(&body);
        }
        if self.grouping {
            body = group_thousands(&body);
        }

        let is_zero = !body.bytes().any(|b| matches!(b, b'1'..=b'9'));
        let sign = if value < 0.0 && !is_zero {
            "-"
        } else {
            match self.sign {
                Sign::Minus => "",
                Sign::Plus => "+",
                Sign::Space => " ",
            }
        };
        format!("{sign}{body}{suffix}")
    }
}

impl Default for NumberFormat {
    /// Two-decimal percentage (`.2%`).
    fn default() -> Self {
        Self {
            sign: Sign::Minus,
            grouping: false,
            precision: Some(2),
            trim: false,
            kind: FormatKind::Percent,
        }
    }
}

impl FromStr for NumberFormat {
    type Err = RadarError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for NumberFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.sign {
            Sign::Minus => {}
            Sign::Plus => f.write_str("+")?,
            Sign::Space => f.write_str(" ")?,
        }
        if self.grouping {
            f.write_str(",")?;
        }
        if let Some(p) = self.precision {
            write!(f, ".{p}")?;
        }
        if self.trim {
            f.write_str("~")?;
        }
        f.write_str(match self.kind {
            FormatKind::Fixed => "f",
            FormatKind::Percent => "%",
            FormatKind::Integer => "d",
            FormatKind::Exponent => "e",
            FormatKind::General => "",
        })
    }
}

/// `1.50e+3` style exponent notation.
fn exponent(magnitude: f64, precision: usize) -> String {
    let raw = format!("{magnitude:.precision$e}");
    match raw.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => raw,
    }
}

/// `digits` significant digits, switching to exponent notation for very large
/// or very small magnitudes.
fn significant(magnitude: f64, digits: usize) -> String {
    let mantissa_digits = digits - 1;
    let sci = format!("{magnitude:.mantissa_digits$e}");
    let exp: i64 = sci
        .split_once('e')
        .and_then(|(_, e)| e.parse().ok())
        .unwrap_or(0);
    let digits_i = i64::try_from(digits).unwrap_or(i64::MAX);
    if exp < -6 || exp >= digits_i {
        return exponent(magnitude, digits - 1);
    }
    let decimals = usize::try_from(digits_i - 1 - exp).unwrap_or(0);
    format!("{magnitude:.decimals$}")
}

fn trim_zeros(body: &str) -> String {
    let (number, exp) = match body.split_once('e') {
        Some((n, e)) => (n, Some(e)),
        None => (body, None),
    };
    let number = if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    };
    match exp {
        Some(e) => format!("{number}e{e}"),
        None => number.to_string(),
    }
}

fn group_thousands(body: &str) -> String {
    let split = body.find(['.', 'e']).unwrap_or(body.len());
    let (int, rest) = body.split_at(split);
    let mut out = String::with_capacity(body.len() + int.len() / 3);
    for (i, c) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;

    use super::*;

    fn fmt(spec: &str, v: f64) -> String {
        NumberFormat::parse(spec).unwrap().format(v)
    }

    #[test]
    fn percent_with_precision() {
        assert_eq!(fmt(".2%", 0.2933), "29.33%");
        assert_eq!(fmt(".0%", 0.5), "50%");
        assert_eq!(fmt(".1%", 1.0), "100.0%");
    }

    #[test]
    fn default_is_two_decimal_percent() {
        assert_eq!(NumberFormat::default(), NumberFormat::parse(".2%").unwrap());
        assert_eq!(NumberFormat::default().to_string(), ".2%");
    }

    #[test]
    fn fixed_grouped_and_signed() {
        assert_eq!(fmt(",.2f", 1_234_567.891), "1,234,567.89");
        assert_eq!(fmt("+.1f", 2.0), "+2.0");
        assert_eq!(fmt(".1f", -2.26), "-2.3");
        assert_eq!(fmt(".1f", -0.01), "0.0");
        assert_eq!(fmt("f", 0.5), "0.500000");
    }

    #[test]
    fn integer_rounds() {
        assert_eq!(fmt("d", 2.6), "3");
        assert_eq!(fmt(",d", 12_345.0), "12,345");
    }

    #[test]
    fn exponent_uses_explicit_plus() {
        assert_eq!(fmt(".2e", 12_345.0), "1.23e+4");
        assert_eq!(fmt(".1e", 0.00012), "1.2e-4");
    }

    #[test]
    fn general_significant_digits() {
        assert_eq!(fmt("", 0.82), "0.82");
        assert_eq!(fmt(".2", 1234.5), "1.2e+3");
        assert_eq!(fmt(".2", 0.000_123), "0.00012");
        assert_eq!(fmt(".3", 2.5), "2.5");
    }

    #[test]
    fn trim_removes_insignificant_zeros() {
        assert_eq!(fmt(".3~f", 1.5), "1.5");
        assert_eq!(fmt(".2~%", 0.5), "50%");
    }

    #[test]
    fn non_finite_values_pass_through() {
        assert_eq!(fmt(".2%", f64::NAN), "NaN");
        assert_eq!(fmt(".2%", f64::INFINITY), "inf");
    }

    #[test]
    fn rejects_unsupported_specifiers() {
        for spec in ["x", ".%", "10f", ".2%%", "$.2f"] {
            assert_eq!(
                NumberFormat::parse(spec),
                Err(RadarError::InvalidFormat(spec.to_string())),
                "{spec} should not parse"
            );
        }
    }

    #[test]
    fn display_round_trips_the_specifier() {
        for spec in [".2%", "+,.1f", "d", ".3~e", ""] {
            assert_eq!(NumberFormat::parse(spec).unwrap().to_string(), spec);
        }
    }
}
