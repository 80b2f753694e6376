//! Top-level extraction from a packaged workbook

use std::io::{Read, Seek};
use std::path::Path;

use sheet_pluck_core::RangeResult;

use crate::error::{XlsxError, XlsxResult};
use crate::extract::{extract_with_index, parse_ranges};
use crate::package::{worksheet_part, PartSource, ZipPackage, SHARED_STRINGS_PART, STYLES_PART};
use crate::sheet::SheetIndex;
use crate::shared_strings::SharedStringTable;
use crate::styles::StyleTable;

/// XLSX range reader
///
/// Each call reads the worksheet, shared strings and styles parts, builds
/// its lookup tables, extracts the requested ranges and drops everything
/// else. Nothing is cached between calls.
pub struct RangeReader;

impl RangeReader {
    /// Extract ranges from a file path
    pub fn read_file<P: AsRef<Path>, S: AsRef<str>>(
        path: P,
        sheet_index: usize,
        ranges: &[S],
    ) -> XlsxResult<RangeResult> {
        let mut package = ZipPackage::open(path)?;
        Self::read_package(&mut package, sheet_index, ranges)
    }

    /// Extract ranges from raw file bytes
    pub fn read_bytes<S: AsRef<str>>(
        bytes: &[u8],
        sheet_index: usize,
        ranges: &[S],
    ) -> XlsxResult<RangeResult> {
        let mut package = ZipPackage::from_bytes(bytes)?;
        Self::read_package(&mut package, sheet_index, ranges)
    }

    /// Extract ranges from a reader
    pub fn read<R: Read + Seek, S: AsRef<str>>(
        reader: R,
        sheet_index: usize,
        ranges: &[S],
    ) -> XlsxResult<RangeResult> {
        let mut package = ZipPackage::new(reader)?;
        Self::read_package(&mut package, sheet_index, ranges)
    }

    /// Extract ranges from any part source
    ///
    /// `sheet_index` is 1-based and selects `xl/worksheets/sheet{N}.xml`.
    ///
    /// # Errors
    ///
    /// - [`XlsxError::SheetNotFound`] if the worksheet part does not exist
    /// - [`XlsxError::Core`] wrapping `InvalidRangeExpression` if any range
    ///   expression is malformed
    pub fn read_package<P: PartSource, S: AsRef<str>>(
        package: &mut P,
        sheet_index: usize,
        ranges: &[S],
    ) -> XlsxResult<RangeResult> {
        let sheet_part = worksheet_part(sheet_index);
        if sheet_index == 0 || !package.has_part(&sheet_part) {
            return Err(XlsxError::SheetNotFound(sheet_index));
        }

        let ranges = parse_ranges(ranges)?;

        let sheet_xml = package
            .read_part(&sheet_part)?
            .ok_or(XlsxError::SheetNotFound(sheet_index))?;

        // No shared strings is valid
        let shared_strings = package
            .read_part(SHARED_STRINGS_PART)?
            .map(|xml| SharedStringTable::build(&xml))
            .unwrap_or_default();

        let styles_xml = package.read_part(STYLES_PART)?;
        let styles = StyleTable::build(styles_xml.as_deref());

        let sheet = SheetIndex::parse(&sheet_xml);

        Ok(extract_with_index(&sheet, &ranges, &shared_strings, &styles))
    }
}
