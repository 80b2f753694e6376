//! Cell value resolution

use sheet_pluck_core::{CellAddress, CellValue};

use crate::date::serial_to_date_string;
use crate::sheet::SheetIndex;
use crate::shared_strings::SharedStringTable;
use crate::styles::{FormatKind, StyleTable};

/// Resolve one address to a typed value
///
/// - no cell at the address, or a cell without a value → [`CellValue::Empty`]
/// - shared-string cell → the table entry, or `Empty` if the pointer is bad
/// - non-numeric token → the token as [`CellValue::Text`]
/// - number with a date format → `dd/mm/yyyy` text
/// - any other number (no style, unknown style, percent, general) → the
///   stored [`CellValue::Number`], unscaled
pub fn resolve_cell(
    sheet: &SheetIndex,
    address: &CellAddress,
    shared_strings: &SharedStringTable,
    styles: &StyleTable,
) -> CellValue {
    let Some(cell) = sheet.get(address) else {
        return CellValue::Empty;
    };

    if cell.is_shared_string() {
        return cell
            .value
            .as_deref()
            .and_then(|pointer| shared_strings.lookup(pointer))
            .map(CellValue::text)
            .unwrap_or(CellValue::Empty);
    }

    let Some(token) = cell.value.as_deref() else {
        return CellValue::Empty;
    };

    let number = match parse_number(token) {
        Some(n) => n,
        None => return CellValue::text(token),
    };

    let Some(kind) = cell.style.and_then(|s| styles.format_kind(s)) else {
        return CellValue::Number(number);
    };

    log::trace!("{}: {} classified as {:?}", address, number, kind);

    match kind {
        FormatKind::Date => match serial_to_date_string(number) {
            Some(date) => CellValue::Text(date),
            None => CellValue::Number(number),
        },
        FormatKind::Percent | FormatKind::General => CellValue::Number(number),
    }
}

/// Parse a `<v>` token as a finite number
///
/// Rust's float parser also accepts `inf` and `NaN`; those stay text.
fn parse_number(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|n| n.is_finite())
}
