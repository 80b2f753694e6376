//! Common utilities for E2E tests.

use std::io::{Cursor, Write};

const CONTENT_TYPES: &str = r#"<?xml version="1.0"?><Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="xml" ContentType="application/xml"/><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/></Types>"#;

const WORKBOOK: &str = r#"<?xml version="1.0"?><workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><sheets><sheet name="Sheet1" sheetId="1" r:id="rId1"/></sheets></workbook>"#;

/// Builder for a minimal XLSX package.
///
/// # Example
///
/// ```rust,ignore
/// let bytes = XlsxFixture::new()
///     .sheet(&[("A1", r#"t="s""#, "0")])
///     .shared_strings(&["hello"])
///     .build();
/// ```
#[derive(Default)]
pub struct XlsxFixture {
    sheets: Vec<String>,
    shared_strings: Option<String>,
    styles: Option<String>,
}

impl XlsxFixture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a worksheet from `(address, extra attributes, inner markup)` cells.
    ///
    /// Inner markup that does not start with `<` is wrapped in `<v>`.
    pub fn sheet(mut self, cells: &[(&str, &str, &str)]) -> Self {
        self.sheets.push(worksheet_xml(cells));
        self
    }

    /// Add a worksheet from raw markup.
    pub fn raw_sheet(mut self, xml: &str) -> Self {
        self.sheets.push(xml.to_string());
        self
    }

    /// Set the shared string table from plain entries.
    pub fn shared_strings(mut self, entries: &[&str]) -> Self {
        let items: String = entries
            .iter()
            .map(|s| format!("<si><t xml:space=\"preserve\">{}</t></si>", s))
            .collect();
        self.shared_strings = Some(format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><sst xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" count="{0}" uniqueCount="{0}">{1}</sst>"#,
            entries.len(),
            items
        ));
        self
    }

    /// Set the shared string table from raw markup.
    pub fn raw_shared_strings(mut self, xml: &str) -> Self {
        self.shared_strings = Some(xml.to_string());
        self
    }

    /// Set the styles part from custom formats and the cellXfs numFmtId list.
    pub fn styles(mut self, custom: &[(u32, &str)], cell_xfs: &[u32]) -> Self {
        let num_fmts: String = custom
            .iter()
            .map(|(id, code)| {
                format!(
                    "<numFmt numFmtId=\"{}\" formatCode=\"{}\"/>",
                    id,
                    code.replace('&', "&amp;").replace('"', "&quot;")
                )
            })
            .collect();
        let xfs: String = cell_xfs
            .iter()
            .map(|id| {
                format!(
                    "<xf numFmtId=\"{}\" fontId=\"0\" fillId=\"0\" borderId=\"0\" xfId=\"0\" applyNumberFormat=\"1\"/>",
                    id
                )
            })
            .collect();
        self.styles = Some(format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><styleSheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><numFmts count="{}">{}</numFmts><cellStyleXfs count="1"><xf numFmtId="0" fontId="0" fillId="0" borderId="0"/></cellStyleXfs><cellXfs count="{}">{}</cellXfs></styleSheet>"#,
            custom.len(),
            num_fmts,
            cell_xfs.len(),
            xfs
        ));
        self
    }

    /// Write the package into a zip archive.
    pub fn build(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        {
            let mut zip = zip::ZipWriter::new(Cursor::new(&mut buf));
            let options = zip::write::SimpleFileOptions::default();

            zip.start_file("[Content_Types].xml", options).unwrap();
            zip.write_all(CONTENT_TYPES.as_bytes()).unwrap();

            zip.start_file("xl/workbook.xml", options).unwrap();
            zip.write_all(WORKBOOK.as_bytes()).unwrap();

            for (i, sheet) in self.sheets.iter().enumerate() {
                zip.start_file(format!("xl/worksheets/sheet{}.xml", i + 1), options)
                    .unwrap();
                zip.write_all(sheet.as_bytes()).unwrap();
            }

            if let Some(ref sst) = self.shared_strings {
                zip.start_file("xl/sharedStrings.xml", options).unwrap();
                zip.write_all(sst.as_bytes()).unwrap();
            }

            if let Some(ref styles) = self.styles {
                zip.start_file("xl/styles.xml", options).unwrap();
                zip.write_all(styles.as_bytes()).unwrap();
            }

            zip.finish().unwrap();
        }
        buf
    }
}

/// Render worksheet markup, one `<row>` per distinct row number.
pub fn worksheet_xml(cells: &[(&str, &str, &str)]) -> String {
    let mut rows: Vec<(u32, String)> = Vec::new();

    for (addr, attrs, inner) in cells {
        let row: u32 = addr
            .trim_start_matches(|c: char| c.is_ascii_alphabetic())
            .parse()
            .expect("fixture address needs a row");
        let inner = if inner.starts_with('<') || inner.is_empty() {
            inner.to_string()
        } else {
            format!("<v>{}</v>", inner)
        };
        let cell = format!("<c r=\"{}\" {}>{}</c>", addr, attrs, inner);

        match rows.iter_mut().find(|(r, _)| *r == row) {
            Some((_, markup)) => markup.push_str(&cell),
            None => rows.push((row, cell)),
        }
    }

    let body: String = rows
        .iter()
        .map(|(r, cells)| format!("<row r=\"{}\">{}</row>", r, cells))
        .collect();

    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetData>{}</sheetData></worksheet>"#,
        body
    )
}
