// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Defines the `RadarError` and `Result` types that this crate uses.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// The result type that uses [`RadarError`] as the error type.
pub type Result<T, E = RadarError> = core::result::Result<T, E>;

/// Errors reported by chart construction and dataset mutation.
///
/// Every operation that returns one of these leaves the chart unchanged.
#[derive(Clone, Debug, PartialEq)]
pub enum RadarError {
    /// An appended entity's axis names differ from the chart's axis sequence.
    AxisMismatch {
        /// The chart's axis names, in order.
        expected: Vec<String>,
        /// The entity's axis names, in order.
        found: Vec<String>,
    },
    /// A replacement dataset has a different number of axes.
    AxisCountMismatch {
        /// The chart's axis count.
        expected: usize,
        /// The replacement's axis count.
        found: usize,
    },
    /// The dataset has no entities.
    EmptyDataset,
    /// The first entity has no axes.
    NoAxes,
    /// Value inversion was requested but is not enabled in the configuration.
    InversionDisabled,
    /// An axis index is past the last axis.
    AxisIndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The axis count.
        len: usize,
    },
    /// A number format specifier could not be parsed.
    InvalidFormat(String),
}

impl core::error::Error for RadarError {}

impl fmt::Display for RadarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let radar_error = "radar chart error:";

        match self {
            Self::AxisMismatch { expected, found } => write!(
                f,
                "{radar_error} axis set mismatch: expected {expected:?}, found {found:?}"
            ),
            Self::AxisCountMismatch { expected, found } => write!(
                f,
                "{radar_error} expected {expected} axes, found {found}; \
                 the dataset can only be replaced with the same number of axes"
            ),
            Self::EmptyDataset => write!(f, "{radar_error} the dataset has no entities"),
            Self::NoAxes => write!(f, "{radar_error} the first entity has no axes"),
            Self::InversionDisabled => {
                write!(f, "{radar_error} value inversion is not enabled")
            }
            Self::AxisIndexOutOfRange { index, len } => write!(
                f,
                "{radar_error} axis index {index} is out of range for {len} axes"
            ),
            Self::InvalidFormat(spec) => {
                write!(f, "{radar_error} invalid number format {spec:?}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;
    use alloc::vec;

    use super::*;

    #[test]
    fn mismatch_message_lists_both_axis_sets() {
        let err = RadarError::AxisMismatch {
            expected: vec!["speed".into(), "power".into()],
            found: vec!["speed".into(), "agility".into()],
        };
        let msg = err.to_string();
        assert!(msg.contains("axis set mismatch"), "{msg}");
        assert!(msg.contains("agility"), "{msg}");
    }

    #[test]
    fn count_mismatch_message_names_counts() {
        let msg = RadarError::AxisCountMismatch {
            expected: 5,
            found: 4,
        }
        .to_string();
        assert!(msg.contains("expected 5 axes, found 4"), "{msg}");
    }
}
