// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Greedy word wrapping for axis labels.

use alloc::string::String;
use alloc::vec::Vec;

use crate::{TextMeasurer, TextStyle};

/// Distance between consecutive wrapped lines, in ems.
pub const LINE_HEIGHT_EM: f64 = 1.4;

/// Breaks `text` into lines no wider than `max_width`.
///
/// Words are the whitespace-delimited runs of `text`. They are appended to the
/// current line while its measured width stays within `max_width`; the word
/// that would overflow starts the next line. A single word wider than
/// `max_width` occupies a line of its own and is never split.
///
/// Returns no lines for text that contains no words.
pub fn wrap_words(
    text: &str,
    max_width: f64,
    style: &TextStyle,
    measurer: &(impl TextMeasurer + ?Sized),
) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }

        let committed = current.len();
        current.push(' ');
        current.push_str(word);
        if measurer.measure(&current, style).advance_width > max_width {
            current.truncate(committed);
            lines.push(core::mem::take(&mut current));
            current.push_str(word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
