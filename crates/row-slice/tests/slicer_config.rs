use pretty_assertions::assert_eq;
use row_slice::RowSlicer;

#[test]
fn slicer_defaults_to_no_separator() {
    let slicer: RowSlicer<Vec<String>> = serde_json::from_str("{}").unwrap();
    assert!(slicer.separator().is_empty());
    assert_eq!(slicer, RowSlicer::new());
}

#[test]
fn slicer_separator_round_trips_through_json() {
    let slicer = RowSlicer::with_separator(vec!["---".to_string()]);
    let json = serde_json::to_string(&slicer).unwrap();
    assert_eq!(json, r#"{"separator":["---"]}"#);

    let restored: RowSlicer<String> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, slicer);

    let lines: Vec<String> = vec!["a".into(), "b".into()];
    assert_eq!(
        restored.apply(&lines, "2,1").unwrap(),
        vec!["b".to_string(), "---".to_string(), "a".to_string()]
    );
}
