//! `row-slice` selects rectangular regions of a sequence of rows using a compact notation, and
//! concatenates the selections.
//!
//! Positions are **1-indexed** and inclusive, written `row.col`:
//! - `3` is row 3; `2-4` rows 2 through 4; `e` the last row.
//! - `1.2-3.4` starts at column 2 of row 1 and ends at column 4 of row 3.
//! - `.2-.3` is columns 2 through 3 of every row.
//! - A start past its end walks backwards (`3-1`, `1.4-1.2`).
//! - `,` joins selections: `1,3-4`.
//!
//! ```
//! use row_slice::slice_rows;
//!
//! let data = vec![vec![1, 2, 3, 4], vec![5, 6, 7, 8]];
//! assert_eq!(slice_rows(&data, ".2-.3").unwrap(), vec![vec![2, 3], vec![6, 7]]);
//! ```

mod descriptor;
mod error;
mod locator;
mod parse;
mod sliceable;
mod slicer;

pub use descriptor::{
    adjust_descending_end, describe, zero_based, Bounds, ColumnPolicy, SliceDescriptor, Step,
    StepSpec,
};
pub use error::SyntaxError;
pub use locator::{Locator, RowRef, LAST_ROW_TOKEN};
pub use parse::{parse, Notation, Segment};
pub use sliceable::Sliceable;
pub use slicer::{slice_rows, RowSlicer};
