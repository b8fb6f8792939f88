use proptest::prelude::*;
use row_slice::{slice_rows, Locator, Notation, RowRef, Segment};

fn numbered_grid(rows: usize, cols: usize) -> Vec<Vec<usize>> {
    (0..rows)
        .map(|r| (0..cols).map(|c| r * cols + c).collect())
        .collect()
}

fn row_ref() -> impl Strategy<Value = RowRef> {
    prop_oneof![(1usize..100).prop_map(RowRef::Index), Just(RowRef::Last)]
}

fn locator() -> impl Strategy<Value = Locator> {
    (
        proptest::option::of(row_ref()),
        proptest::option::of(1usize..100),
    )
        .prop_map(|(row, col)| Locator::new(row, col))
}

fn segment() -> impl Strategy<Value = Segment> {
    prop_oneof![
        locator().prop_map(Segment::Single),
        (locator(), locator()).prop_map(|(start, end)| Segment::Range { start, end }),
    ]
}

proptest! {
    #[test]
    fn row_range_selects_inclusive_count(rows in 1usize..24, a in 1usize..24, b in 1usize..24) {
        let (start, end) = (a.min(b), a.max(b));
        prop_assume!(end <= rows);
        let data = numbered_grid(rows, 3);

        let out = slice_rows(&data, &format!("{start}-{end}")).unwrap();
        prop_assert_eq!(out.len(), end - start + 1);
        prop_assert_eq!(&out[..], &data[start - 1..end]);

        let reversed = slice_rows(&data, &format!("{end}-{start}")).unwrap();
        let mut expected = data[start - 1..end].to_vec();
        expected.reverse();
        prop_assert_eq!(reversed, expected);
    }

    #[test]
    fn column_range_selects_inclusive_count(
        cols in 1usize..24,
        row in 1usize..4,
        a in 1usize..24,
        b in 1usize..24,
    ) {
        let (start, end) = (a.min(b), a.max(b));
        prop_assume!(end <= cols);
        let data = numbered_grid(3, cols);

        let out = slice_rows(&data, &format!("{row}.{start}-{row}.{end}")).unwrap();
        prop_assert_eq!(out.len(), 1);
        prop_assert_eq!(out[0].len(), end - start + 1);

        let reversed = slice_rows(&data, &format!("{row}.{end}-{row}.{start}")).unwrap();
        let mut expected = out[0].clone();
        expected.reverse();
        prop_assert_eq!(&reversed[0], &expected);
    }

    #[test]
    fn notation_text_round_trips(segments in proptest::collection::vec(segment(), 0..6)) {
        let notation = Notation::new(segments);
        let text = notation.to_string();
        let reparsed: Notation = text.parse().unwrap();
        prop_assert_eq!(reparsed, notation);
    }
}
