//! XLSX styles (styles.xml) number-format lookup

use ahash::AHashMap;
use lazy_regex::{regex, regex_is_match};
use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

/// Built-in number format ids that display dates
pub const BUILTIN_DATE_FORMAT_IDS: [u32; 5] = [14, 15, 16, 17, 22];

/// Built-in number format ids that display percentages
pub const BUILTIN_PERCENT_FORMAT_IDS: [u32; 2] = [9, 10];

/// How a stored number should be interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatKind {
    /// Plain number (General, fixed, currency, ...)
    General,
    /// Day-count serial rendered as a calendar date
    Date,
    /// Fraction displayed as a percentage
    Percent,
}

impl FormatKind {
    /// Classify a number format id and its custom code, if any
    pub fn classify(num_fmt_id: u32, code: Option<&str>) -> Self {
        if is_date_format(num_fmt_id, code) {
            FormatKind::Date
        } else if is_percent_format(num_fmt_id, code) {
            FormatKind::Percent
        } else {
            FormatKind::General
        }
    }
}

/// Check whether a number format displays a date
///
/// True for the built-in date ids, or for a custom code that has a day,
/// month or year token outside quoted literals, bracketed sections and
/// escaped characters, and no `%` anywhere.
pub fn is_date_format(num_fmt_id: u32, code: Option<&str>) -> bool {
    if BUILTIN_DATE_FORMAT_IDS.contains(&num_fmt_id) {
        return true;
    }

    match code {
        Some(code) if !code.contains('%') => {
            let stripped = regex!(r#""[^"]*"|\[[^\]]*\]|\\.|[_*]."#).replace_all(code, "");
            regex_is_match!(r"[dDmMyY]", &stripped)
        }
        _ => false,
    }
}

/// Check whether a number format displays a percentage
pub fn is_percent_format(num_fmt_id: u32, code: Option<&str>) -> bool {
    BUILTIN_PERCENT_FORMAT_IDS.contains(&num_fmt_id) || code.is_some_and(|c| c.contains('%'))
}

/// Number-format metadata from the styles part
///
/// - a positional list mapping a cell's style index (`s` attribute) to the
///   `numFmtId` of the matching `<cellXfs>` record
/// - custom format codes declared in `<numFmts>`, keyed by id
#[derive(Debug, Clone, Default)]
pub struct StyleTable {
    xf_num_fmt_ids: Vec<u32>,
    custom_formats: AHashMap<u32, String>,
}

impl StyleTable {
    /// Build the table from the styles part
    ///
    /// An absent part gives an empty table, so every style lookup falls back
    /// to a plain number. Never fails: malformed markup stops the scan and
    /// keeps what was read.
    pub fn build(xml: Option<&str>) -> Self {
        let Some(xml) = xml else {
            log::debug!("styles: part absent, all numbers resolve as plain");
            return Self::default();
        };

        let mut reader = Reader::from_str(xml);

        let mut xf_num_fmt_ids = Vec::new();
        let mut custom_formats = AHashMap::new();
        let mut in_num_fmts = false;
        let mut in_cell_xfs = false;

        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) => match e.local_name().as_ref() {
                    b"numFmts" => in_num_fmts = true,
                    b"cellXfs" => in_cell_xfs = true,
                    b"numFmt" if in_num_fmts => read_num_fmt(&e, &mut custom_formats),
                    b"xf" if in_cell_xfs => xf_num_fmt_ids.push(read_xf_num_fmt_id(&e)),
                    _ => {}
                },
                Ok(Event::Empty(e)) => match e.local_name().as_ref() {
                    b"numFmt" if in_num_fmts => read_num_fmt(&e, &mut custom_formats),
                    b"xf" if in_cell_xfs => xf_num_fmt_ids.push(read_xf_num_fmt_id(&e)),
                    _ => {}
                },
                Ok(Event::End(e)) => match e.local_name().as_ref() {
                    b"numFmts" => in_num_fmts = false,
                    b"cellXfs" => in_cell_xfs = false,
                    _ => {}
                },
                Ok(Event::Eof) => break,
                Err(e) => {
                    log::warn!(
                        "styles: malformed markup at byte {}: {}",
                        reader.buffer_position(),
                        e
                    );
                    break;
                }
                _ => {}
            }
        }

        log::debug!(
            "styles: {} cell formats, {} custom number formats",
            xf_num_fmt_ids.len(),
            custom_formats.len()
        );

        Self {
            xf_num_fmt_ids,
            custom_formats,
        }
    }

    /// Number format id for a cell style index, if the index is in range
    pub fn num_fmt_id(&self, style_index: usize) -> Option<u32> {
        self.xf_num_fmt_ids.get(style_index).copied()
    }

    /// Custom format code declared for a number format id
    pub fn custom_format(&self, num_fmt_id: u32) -> Option<&str> {
        self.custom_formats.get(&num_fmt_id).map(String::as_str)
    }

    /// Classify the number format behind a cell style index
    ///
    /// `None` when the style index is outside the cell format list.
    pub fn format_kind(&self, style_index: usize) -> Option<FormatKind> {
        let id = self.num_fmt_id(style_index)?;
        Some(FormatKind::classify(id, self.custom_format(id)))
    }

    /// Number of cell format records
    pub fn cell_format_count(&self) -> usize {
        self.xf_num_fmt_ids.len()
    }
}

fn read_num_fmt(e: &BytesStart<'_>, custom_formats: &mut AHashMap<u32, String>) {
    let mut id: Option<u32> = None;
    let mut code: Option<String> = None;

    for attr in e.attributes().flatten() {
        match attr.key.local_name().as_ref() {
            b"numFmtId" => {
                id = attr
                    .unescape_value()
                    .ok()
                    .and_then(|s| s.trim().parse::<u32>().ok());
            }
            b"formatCode" => {
                code = attr.unescape_value().ok().map(|s| s.to_string());
            }
            _ => {}
        }
    }

    if let (Some(id), Some(code)) = (id, code) {
        custom_formats.insert(id, code);
    }
}

fn read_xf_num_fmt_id(e: &BytesStart<'_>) -> u32 {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.local_name().as_ref() == b"numFmtId")
        .and_then(|attr| {
            attr.unescape_value()
                .ok()
                .and_then(|s| s.trim().parse::<u32>().ok())
        })
        .unwrap_or(0)
}
