//! "Aero Options" block extraction
//!
//! The options block looks like:
//!
//! ```text
//! Aero Options
//! ------------------  ----------------------
//! mach                0.75
//! alpha               [0.0, 1.0, 2.0,
//!                      3.0]
//! ------------------  ----------------------
//! ```
//!
//! The line below the marker is a ruler. The block ends at the next line equal
//! to the ruler. The width of the ruler's first token is the label column:
//! lines indented at least that far continue the previous option.

use super::field_parsers::parse_value;
use crate::app::models::ParsedValue;
use crate::constants::{AERO_OPTIONS_MARKER, RESULTS_MARKER};
use crate::{Error, Result};
use std::collections::BTreeMap;
use std::path::Path;

/// Location of the options block within a file's lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionsSpan {
    /// First line of the block (two below the marker)
    pub start: usize,
    /// One past the last line of the block
    pub end: usize,
    /// Width of the label column, taken from the ruler's first token
    pub label_width: usize,
}

/// Find the options block; `Ok(None)` when the file has no marker
///
/// When the ruler never recurs the block ends at the results marker, or at
/// the end of the file.
pub fn find_aero_options(lines: &[&str], file: &Path) -> Result<Option<OptionsSpan>> {
    let Some(marker) = lines.iter().position(|l| l.contains(AERO_OPTIONS_MARKER)) else {
        return Ok(None);
    };

    let ruler = lines.get(marker + 1).ok_or_else(|| {
        Error::format(file, "'Aero Options' marker is not followed by a ruler line")
    })?;

    let label_width = ruler
        .split_whitespace()
        .next()
        .map(|token| token.chars().count())
        .ok_or_else(|| Error::format(file, "ruler line below 'Aero Options' is blank"))?;

    let start = (marker + 2).min(lines.len());
    let end = (start..lines.len())
        .find(|&n| lines[n] == *ruler)
        .or_else(|| (start..lines.len()).find(|&n| lines[n].contains(RESULTS_MARKER)))
        .unwrap_or(lines.len());

    Ok(Some(OptionsSpan {
        start,
        end,
        label_width,
    }))
}

/// Parse the lines of an options block into `label → value`
pub fn read_aero_options(lines: &[&str], label_width: usize) -> BTreeMap<String, ParsedValue> {
    let mut assembled: Vec<String> = Vec::new();

    for line in lines {
        let clean = line.trim();
        if clean.is_empty() {
            continue;
        }

        if is_continuation(line, label_width) {
            if let Some(previous) = assembled.last_mut() {
                previous.push(' ');
                previous.push_str(clean);
                continue;
            }
        }
        assembled.push(clean.to_string());
    }

    let mut options = BTreeMap::new();
    for pair in &assembled {
        let split = pair
            .char_indices()
            .nth(label_width)
            .map(|(i, _)| i)
            .unwrap_or(pair.len());
        let (label, raw) = pair.split_at(split);
        options.insert(label.trim().to_string(), parse_value(raw));
    }

    options
}

/// A line is a continuation when its first `label_width` characters are spaces
fn is_continuation(line: &str, label_width: usize) -> bool {
    let mut prefix = line.chars().take(label_width);
    label_width > 0 && line.chars().count() >= label_width && prefix.all(|c| c == ' ')
}
