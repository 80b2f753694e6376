//! Tests for the fail-fast error paths and the file-based entry points.

use std::io::{Cursor, Write};

use crate::XlsxFixture;
use sheet_pluck_core::Error;
use sheet_pluck_xlsx::{CellValue, RangeReader, XlsxError};

#[test]
fn test_sheet_not_found_names_index() {
    let bytes = XlsxFixture::new().sheet(&[("A1", "", "1")]).build();

    let err = RangeReader::read_bytes(&bytes, 4, &["A1"]).unwrap_err();

    assert!(matches!(err, XlsxError::SheetNotFound(4)), "got {err:?}");
    assert!(err.to_string().contains("sheet index 4"), "got {err}");
}

#[test]
fn test_invalid_range_expression() {
    let bytes = XlsxFixture::new().sheet(&[("A1", "", "1")]).build();

    let err = RangeReader::read_bytes(&bytes, 1, &["A1", "H12-I13"]).unwrap_err();

    assert!(
        matches!(err, XlsxError::Core(Error::InvalidRangeExpression(ref e)) if e == "H12-I13"),
        "got {err:?}"
    );
}

#[test]
fn test_not_a_package() {
    let err = RangeReader::read_bytes(b"plain text, not a zip", 1, &["A1"]).unwrap_err();
    assert!(matches!(err, XlsxError::Zip(_)), "got {err:?}");
}

#[test]
fn test_read_file() {
    let bytes = XlsxFixture::new()
        .sheet(&[("A1", r#"t="s""#, "0")])
        .shared_strings(&["from disk"])
        .build();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&bytes).unwrap();
    file.flush().unwrap();

    let result = RangeReader::read_file(file.path(), 1, &["A1"]).unwrap();
    assert_eq!(result.get("A", 1), Some(&CellValue::text("from disk")));
}

#[test]
fn test_read_file_missing() {
    let dir = tempfile::tempdir().unwrap();
    let err = RangeReader::read_file(dir.path().join("missing.xlsx"), 1, &["A1"]).unwrap_err();
    assert!(matches!(err, XlsxError::Io(_)), "got {err:?}");
}

#[test]
fn test_read_from_reader() {
    let bytes = XlsxFixture::new().sheet(&[("A1", "", "2.5")]).build();

    let result = RangeReader::read(Cursor::new(bytes), 1, &["A1"]).unwrap();
    assert_eq!(result.get("A", 1), Some(&CellValue::Number(2.5)));
}

#[test]
fn test_malformed_shared_strings_are_best_effort() {
    let bytes = XlsxFixture::new()
        .sheet(&[("A1", r#"t="s""#, "0"), ("A2", r#"t="s""#, "1")])
        .raw_shared_strings(r#"<sst><si><t>kept</t></si><si><t>lost</sst>"#)
        .build();

    let result = RangeReader::read_bytes(&bytes, 1, &["A1-A2"]).unwrap();
    assert_eq!(result.get("A", 1), Some(&CellValue::text("kept")));
    assert_eq!(result.get("A", 2), Some(&CellValue::Empty));
}
