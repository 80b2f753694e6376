//! Range extraction over one worksheet

use sheet_pluck_core::{CellRange, RangeResult};

use crate::resolve::resolve_cell;
use crate::sheet::SheetIndex;
use crate::shared_strings::SharedStringTable;
use crate::styles::StyleTable;

/// Extract every cell named by `ranges` from worksheet markup
///
/// All expressions are parsed before any cell is resolved, so one invalid
/// expression fails the whole call.
pub fn extract_ranges<S: AsRef<str>>(
    sheet_xml: &str,
    ranges: &[S],
    shared_strings: &SharedStringTable,
    styles: &StyleTable,
) -> sheet_pluck_core::Result<RangeResult> {
    let ranges = parse_ranges(ranges)?;
    let sheet = SheetIndex::parse(sheet_xml);
    Ok(extract_with_index(&sheet, &ranges, shared_strings, styles))
}

/// Extract parsed ranges from an already indexed worksheet
///
/// Rows are visited in ascending order. Ranges on the same column add to
/// that column's rows; neither erases the other.
pub fn extract_with_index(
    sheet: &SheetIndex,
    ranges: &[CellRange],
    shared_strings: &SharedStringTable,
    styles: &StyleTable,
) -> RangeResult {
    let mut result = RangeResult::new();

    for range in ranges {
        for address in range.addresses() {
            let value = resolve_cell(sheet, &address, shared_strings, styles);
            result.insert(address.column(), address.row(), value);
        }
    }

    log::debug!(
        "extracted {} cells across {} ranges",
        result.len(),
        ranges.len()
    );
    result
}

pub(crate) fn parse_ranges<S: AsRef<str>>(
    ranges: &[S],
) -> sheet_pluck_core::Result<Vec<CellRange>> {
    ranges.iter().map(|r| CellRange::parse(r.as_ref())).collect()
}
