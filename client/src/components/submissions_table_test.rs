use super::*;

#[test]
fn row_class_adds_modifiers() {
    assert_eq!(row_class(false, false), "data-table__row");
    assert_eq!(row_class(true, false), "data-table__row data-table__row--clickable");
    assert_eq!(
        row_class(true, true),
        "data-table__row data-table__row--clickable data-table__row--flagged"
    );
}
