use std::ops::RangeInclusive;

use crate::descriptor::Step;

/// A row that can be cut by a column window.
///
/// Bounds follow stride-slice rules: out-of-range bounds clamp, and a window that selects
/// nothing produces an empty value rather than an error.
pub trait Sliceable: Clone {
    /// Number of addressable elements.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Elements from `start` towards `stop` (exclusive) in direction `step`.
    ///
    /// Ascending defaults to `0..len`; descending starts at the last element and, without a
    /// `stop`, runs through index 0.
    fn slice(&self, start: Option<usize>, stop: Option<usize>, step: Step) -> Self;
}

impl<T: Clone> Sliceable for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn slice(&self, start: Option<usize>, stop: Option<usize>, step: Step) -> Self {
        stride_slice(self, start, stop, step)
    }
}

impl Sliceable for String {
    fn len(&self) -> usize {
        self.chars().count()
    }

    fn slice(&self, start: Option<usize>, stop: Option<usize>, step: Step) -> Self {
        let chars: Vec<char> = self.chars().collect();
        stride_slice(&chars, start, stop, step).into_iter().collect()
    }
}

/// Clone the elements of `items` selected by a stride slice, in traversal order.
pub(crate) fn stride_slice<T: Clone>(
    items: &[T],
    start: Option<usize>,
    stop: Option<usize>,
    step: Step,
) -> Vec<T> {
    match stride_window(items.len(), start, stop, step) {
        None => Vec::new(),
        Some(window) => match step {
            Step::Ascending => items[window].to_vec(),
            Step::Descending => items[window].iter().rev().cloned().collect(),
        },
    }
}

/// Inclusive index window selected by a stride slice over `len` elements, in ascending order.
///
/// Returns `None` when nothing is selected.
pub(crate) fn stride_window(
    len: usize,
    start: Option<usize>,
    stop: Option<usize>,
    step: Step,
) -> Option<RangeInclusive<usize>> {
    let last = len.checked_sub(1)?;
    match step {
        Step::Ascending => {
            let lo = start.unwrap_or(0).min(len);
            let hi = stop.unwrap_or(len).min(len);
            (lo < hi).then(|| lo..=hi - 1)
        }
        Step::Descending => {
            let hi = start.map_or(last, |s| s.min(last));
            match stop {
                None => Some(0..=hi),
                Some(stop) if stop < hi => Some(stop + 1..=hi),
                Some(_) => None,
            }
        }
    }
}
