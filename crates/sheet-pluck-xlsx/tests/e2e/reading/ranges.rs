//! Tests for range expansion and result assembly.

use crate::XlsxFixture;
use pretty_assertions::assert_eq;
use sheet_pluck_xlsx::{CellValue, RangeReader};

fn fixture() -> Vec<u8> {
    XlsxFixture::new()
        .sheet(&[
            ("H1", "", "1"),
            ("H2", "", "2"),
            ("H3", "", "3"),
            ("H5", "", "5"),
            ("H6", "", "6"),
            ("B2", r#"t="s""#, "0"),
        ])
        .shared_strings(&["label"])
        .build()
}

#[test]
fn test_ranges_on_same_column_do_not_overwrite() {
    let result = RangeReader::read_bytes(&fixture(), 1, &["H1-H2", "H5-H6"]).unwrap();

    let rows: Vec<u32> = result.column("H").unwrap().row_numbers().collect();
    assert_eq!(rows, vec![1, 2, 5, 6]);
    assert_eq!(result.get("H", 3), None);
}

#[test]
fn test_overlapping_ranges_merge() {
    let result = RangeReader::read_bytes(&fixture(), 1, &["H2-H3", "H1-H2"]).unwrap();

    let rows: Vec<(u32, &CellValue)> = result.column("H").unwrap().rows().collect();
    assert_eq!(
        rows,
        vec![
            (1, &CellValue::Number(1.0)),
            (2, &CellValue::Number(2.0)),
            (3, &CellValue::Number(3.0)),
        ]
    );
}

#[test]
fn test_columns_in_first_seen_order() {
    let result = RangeReader::read_bytes(&fixture(), 1, &["h5", "B1-B2", "H6"]).unwrap();

    let names: Vec<&str> = result.columns().map(|c| c.name()).collect();
    assert_eq!(names, vec!["H", "B"]);
    assert_eq!(result.get("B", 1), Some(&CellValue::Empty));
    assert_eq!(result.get("B", 2), Some(&CellValue::text("label")));
    assert_eq!(result.get("H", 6), Some(&CellValue::Number(6.0)));
}

#[test]
fn test_rows_without_cells_are_empty() {
    let result = RangeReader::read_bytes(&fixture(), 1, &["H3-H5"]).unwrap();

    assert_eq!(result.len(), 3);
    assert_eq!(result.get("H", 4), Some(&CellValue::Empty));
}

#[test]
fn test_column_with_no_cells() {
    let result = RangeReader::read_bytes(&fixture(), 1, &["Z1-Z3"]).unwrap();

    let column = result.column("Z").unwrap();
    assert_eq!(column.len(), 3);
    assert!(column.rows().all(|(_, v)| v.is_empty()));
}

#[test]
fn test_no_ranges_gives_empty_result() {
    let ranges: [&str; 0] = [];
    let result = RangeReader::read_bytes(&fixture(), 1, &ranges).unwrap();
    assert!(result.is_empty());
}

#[test]
fn test_second_sheet_is_selected_by_index() {
    let bytes = XlsxFixture::new()
        .sheet(&[("A1", "", "1")])
        .sheet(&[("A1", "", "2")])
        .build();

    let first = RangeReader::read_bytes(&bytes, 1, &["A1"]).unwrap();
    let second = RangeReader::read_bytes(&bytes, 2, &["A1"]).unwrap();

    assert_eq!(first.get("A", 1), Some(&CellValue::Number(1.0)));
    assert_eq!(second.get("A", 1), Some(&CellValue::Number(2.0)));
}

#[test]
fn test_duplicate_cell_takes_first() {
    let bytes = XlsxFixture::new()
        .raw_sheet(
            r#"<worksheet><sheetData><row r="1"><c r="A1"><v>1</v></c><c r="A1"><v>9</v></c></row></sheetData></worksheet>"#,
        )
        .build();

    let result = RangeReader::read_bytes(&bytes, 1, &["A1"]).unwrap();
    assert_eq!(result.get("A", 1), Some(&CellValue::Number(1.0)));
}
