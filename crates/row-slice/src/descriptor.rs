//! Normalized slice descriptors.
//!
//! A [`SliceDescriptor`] turns the 1-indexed, inclusive positions of a [`Segment`] into bounds
//! that can be handed straight to a stride slice:
//! - `start` bounds are **0-indexed** and inclusive.
//! - `end` bounds are the 1-indexed inclusive numbers, which double as 0-indexed exclusive stops
//!   for an ascending walk. A descending walk needs its stop reduced by 2 (see
//!   [`adjust_descending_end`]).

use serde::{Deserialize, Serialize};

use crate::error::SyntaxError;
use crate::locator::Locator;
use crate::parse::{parse, Segment};

/// Traversal direction along one axis.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Step {
    #[default]
    Ascending,
    Descending,
}

impl Step {
    /// Direction implied by a pair of 1-indexed bounds.
    ///
    /// Ascending when the end is unspecified, or when the start is specified and not past the
    /// end. An unspecified start running to a specified end walks backwards from the far side.
    #[inline]
    pub const fn between(start: Option<usize>, end: Option<usize>) -> Self {
        match (start, end) {
            (_, None) => Step::Ascending,
            (Some(s), Some(e)) if s <= e => Step::Ascending,
            _ => Step::Descending,
        }
    }

    #[inline]
    pub const fn is_descending(self) -> bool {
        matches!(self, Step::Descending)
    }
}

/// Whether a column window may be repeated on every row of a multi-row selection.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnPolicy {
    /// No descending row bound was adjusted.
    #[default]
    Unset,
    /// A descending row bound was adjusted and is still representable.
    Applicable,
    /// A descending row bound fell off the front of the data; never apply columns uniformly.
    Suppressed,
}

/// Row and column steps of a descriptor, plus its [`ColumnPolicy`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StepSpec {
    pub row: Step,
    pub col: Step,
    pub columns: ColumnPolicy,
}

/// Row/column slice bounds; `None` means "open on this side".
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bounds {
    pub row: Option<usize>,
    pub col: Option<usize>,
}

impl Bounds {
    #[inline]
    pub const fn new(row: Option<usize>, col: Option<usize>) -> Self {
        Self { row, col }
    }
}

/// One segment, resolved against a concrete row count and ready to apply.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SliceDescriptor {
    pub start: Bounds,
    pub end: Bounds,
    pub step: StepSpec,
}

impl SliceDescriptor {
    /// Build the descriptor for `segment` over data with `row_count` rows (used to resolve `e`).
    pub fn from_segment(segment: &Segment, row_count: usize) -> Self {
        match segment {
            Segment::Single(loc) => {
                let row = loc.row.map(|r| r.resolve(row_count));
                Self {
                    start: Bounds::new(zero_based(row), zero_based(loc.col)),
                    // Same row, through the last column.
                    end: Bounds::new(row, None),
                    step: StepSpec::default(),
                }
            }
            Segment::Range { start, end } => Self::from_range(start, end, row_count),
        }
    }

    fn from_range(start: &Locator, end: &Locator, row_count: usize) -> Self {
        let start_row = start.row.map(|r| r.resolve(row_count));
        let end_row = end.row.map(|r| r.resolve(row_count));

        let row_step = Step::between(start_row, end_row);
        let col_step = Step::between(start.col, end.col);

        // The column stop depends on whether the rows collapse to one, so it is only adjusted
        // when the descriptor is applied.
        let (end_row, columns) = if row_step.is_descending() {
            adjust_descending_end(end_row)
        } else {
            (end_row, ColumnPolicy::Unset)
        };

        Self {
            start: Bounds::new(zero_based(start_row), zero_based(start.col)),
            end: Bounds::new(end_row, end.col),
            step: StepSpec {
                row: row_step,
                col: col_step,
                columns,
            },
        }
    }

    /// Exclusive column stop for a column window, accounting for a descending column step.
    pub fn column_stop(&self) -> Option<usize> {
        if self.step.col.is_descending() {
            adjust_descending_end(self.end.col).0
        } else {
            self.end.col
        }
    }

    /// True when neither side named a row, i.e. the segment covers every row.
    #[inline]
    pub const fn spans_every_row(&self) -> bool {
        self.start.row.is_none() && self.end.row.is_none()
    }

    /// True when a multi-row selection should get the same column window on every row, rather
    /// than having only its first and last rows trimmed.
    #[inline]
    pub fn applies_columns_uniformly(&self) -> bool {
        self.spans_every_row() && self.step.columns != ColumnPolicy::Suppressed
    }
}

/// Convert a 1-indexed position to a 0-indexed one.
#[inline]
pub fn zero_based(n: Option<usize>) -> Option<usize> {
    n.and_then(|n| n.checked_sub(1))
}

/// Turn a 1-indexed inclusive end into the exclusive stop of a descending walk.
///
/// Subtracts 2. When that would go below zero the stop is dropped (walk to the front) and the
/// result is [`ColumnPolicy::Suppressed`].
pub fn adjust_descending_end(n: Option<usize>) -> (Option<usize>, ColumnPolicy) {
    match n {
        None => (None, ColumnPolicy::Unset),
        Some(n) => match n.checked_sub(2) {
            Some(stop) => (Some(stop), ColumnPolicy::Applicable),
            None => (None, ColumnPolicy::Suppressed),
        },
    }
}

/// Parse `notation` and resolve every segment against data with `row_count` rows.
pub fn describe(notation: &str, row_count: usize) -> Result<Vec<SliceDescriptor>, SyntaxError> {
    Ok(parse(notation)?
        .iter()
        .map(|segment| SliceDescriptor::from_segment(segment, row_count))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn single_locator_runs_to_last_column() {
        let d = describe("3.2", 5).unwrap();
        assert_eq!(
            d,
            vec![SliceDescriptor {
                start: Bounds::new(Some(2), Some(1)),
                end: Bounds::new(Some(3), None),
                step: StepSpec::default(),
            }]
        );
    }

    #[test]
    fn descending_rows_reduce_end_by_two() {
        let d = describe("4-2", 5).unwrap()[0];
        assert_eq!(d.start.row, Some(3));
        assert_eq!(d.end.row, Some(0));
        assert_eq!(d.step.row, Step::Descending);
        assert_eq!(d.step.columns, ColumnPolicy::Applicable);

        let d = describe("4-1", 5).unwrap()[0];
        assert_eq!(d.end.row, None);
        assert_eq!(d.step.columns, ColumnPolicy::Suppressed);
    }

    #[test]
    fn open_start_to_named_end_is_descending() {
        let d = describe(".3-1", 4).unwrap()[0];
        assert_eq!(d.step.row, Step::Descending);
        assert!(d.spans_every_row());
        assert!(!d.applies_columns_uniformly());

        let d = describe("2-2.3", 4).unwrap()[0];
        assert_eq!(d.step.col, Step::Descending);
        assert_eq!(d.column_stop(), Some(1));
    }

    #[test]
    fn last_row_resolves_against_row_count() {
        assert_eq!(describe("e", 3).unwrap(), describe("3", 3).unwrap());
        assert_eq!(describe("e-1", 3).unwrap(), describe("3-1", 3).unwrap());
    }

    #[test]
    fn column_only_range_is_uniform() {
        let d = describe(".2-.3", 2).unwrap()[0];
        assert!(d.applies_columns_uniformly());
        assert_eq!(d.start.col, Some(1));
        assert_eq!(d.column_stop(), Some(3));
    }

    #[test]
    fn adjust_descending_end_clamps() {
        assert_eq!(adjust_descending_end(None), (None, ColumnPolicy::Unset));
        assert_eq!(adjust_descending_end(Some(1)), (None, ColumnPolicy::Suppressed));
        assert_eq!(
            adjust_descending_end(Some(2)),
            (Some(0), ColumnPolicy::Applicable)
        );
    }

    #[test]
    fn zero_based_guards_underflow() {
        assert_eq!(zero_based(Some(1)), Some(0));
        assert_eq!(zero_based(Some(0)), None);
        assert_eq!(zero_based(None), None);
    }
}
