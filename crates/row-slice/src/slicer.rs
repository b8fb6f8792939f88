use serde::{Deserialize, Serialize};

use crate::descriptor::{describe, SliceDescriptor, Step};
use crate::error::SyntaxError;
use crate::sliceable::{stride_slice, Sliceable};

/// Applies row slice notation to a sequence of rows.
///
/// The only setting is the separator: rows inserted between consecutive selections (never before
/// the first or after the last). It defaults to empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RowSlicer<R> {
    separator: Vec<R>,
}

impl<R> Default for RowSlicer<R> {
    fn default() -> Self {
        Self {
            separator: Vec::new(),
        }
    }
}

impl<R> RowSlicer<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_separator(separator: Vec<R>) -> Self {
        Self { separator }
    }

    pub fn separator(&self) -> &[R] {
        &self.separator
    }
}

impl<R: Sliceable> RowSlicer<R> {
    /// Select the parts of `data` named by `notation` and concatenate them.
    ///
    /// An empty `data` or `notation` is returned unchanged without being parsed.
    pub fn apply(&self, data: &[R], notation: &str) -> Result<Vec<R>, SyntaxError> {
        if data.is_empty() || notation.is_empty() {
            return Ok(data.to_vec());
        }
        let descriptors = describe(notation, data.len())?;
        Ok(self.apply_descriptors(data, &descriptors))
    }

    /// Apply already resolved descriptors. An empty list returns `data` unchanged.
    ///
    /// Descriptors must have been resolved against `data.len()` rows for `e` to mean the last
    /// row.
    pub fn apply_descriptors(&self, data: &[R], descriptors: &[SliceDescriptor]) -> Vec<R> {
        if descriptors.is_empty() {
            return data.to_vec();
        }

        let mut out = Vec::new();
        for (i, descriptor) in descriptors.iter().enumerate() {
            if i > 0 {
                out.extend(self.separator.iter().cloned());
            }
            log::trace!("applying row slice {descriptor:?} to {} rows", data.len());
            out.extend(select(data, descriptor));
        }
        out
    }
}

/// Slice `data` with the default (empty) separator.
pub fn slice_rows<R: Sliceable>(data: &[R], notation: &str) -> Result<Vec<R>, SyntaxError> {
    RowSlicer::new().apply(data, notation)
}

fn select<R: Sliceable>(data: &[R], d: &SliceDescriptor) -> Vec<R> {
    let mut rows = stride_slice(data, d.start.row, d.end.row, d.step.row);

    match rows.len() {
        0 => {}
        1 => rows[0] = rows[0].slice(d.start.col, d.column_stop(), d.step.col),
        _ if d.applies_columns_uniformly() => {
            let stop = d.column_stop();
            for row in &mut rows {
                *row = row.slice(d.start.col, stop, d.step.col);
            }
        }
        n => {
            if d.spans_every_row() {
                log::debug!("column window suppressed for descending row slice {d:?}");
            }
            // Columns mark where the selection begins in the first row and ends in the last.
            rows[0] = rows[0].slice(d.start.col, None, Step::Ascending);
            rows[n - 1] = rows[n - 1].slice(None, d.end.col, Step::Ascending);
        }
    }
    rows
}
