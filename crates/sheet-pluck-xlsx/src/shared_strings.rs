//! Shared string table (sharedStrings.xml)

use quick_xml::events::Event;
use quick_xml::reader::Reader;

/// Ordered table of shared strings
///
/// Position in the table is the declaration order of `<si>` entries, which is
/// the index space cell pointers refer to. Only the first text run of each
/// entry is kept: rich text split across several `<r>` runs loses every run
/// after the first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SharedStringTable {
    strings: Vec<String>,
}

impl SharedStringTable {
    /// Build the table from the shared strings part
    ///
    /// Never fails. Malformed markup stops the scan and keeps the entries
    /// read so far.
    pub fn build(xml: &str) -> Self {
        let mut reader = Reader::from_str(xml);

        let mut strings = Vec::new();
        // Text of the current <si>; Some once its first <t> has been seen
        let mut current: Option<String> = None;
        let mut in_si = false;
        let mut in_first_t = false;

        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) => match e.local_name().as_ref() {
                    b"si" => {
                        in_si = true;
                        current = None;
                    }
                    b"t" if in_si && current.is_none() => {
                        in_first_t = true;
                        current = Some(String::new());
                    }
                    _ => {}
                },
                Ok(Event::Empty(e)) => match e.local_name().as_ref() {
                    b"si" => strings.push(String::new()),
                    b"t" if in_si && current.is_none() => {
                        current = Some(String::new());
                    }
                    _ => {}
                },
                Ok(Event::Text(e)) if in_first_t => {
                    if let Some(text) = current.as_mut() {
                        match e.unescape() {
                            Ok(t) => text.push_str(&t),
                            Err(_) => text.push_str(&String::from_utf8_lossy(&e)),
                        }
                    }
                }
                Ok(Event::CData(e)) if in_first_t => {
                    if let Some(text) = current.as_mut() {
                        text.push_str(&String::from_utf8_lossy(&e.into_inner()));
                    }
                }
                Ok(Event::End(e)) => match e.local_name().as_ref() {
                    b"t" => in_first_t = false,
                    b"si" => {
                        let text = current.take().unwrap_or_default();
                        strings.push(decode_excel_escapes(&text));
                        in_si = false;
                        in_first_t = false;
                    }
                    _ => {}
                },
                Ok(Event::Eof) => break,
                Err(e) => {
                    log::warn!(
                        "shared strings: malformed markup at byte {}, keeping {} entries: {}",
                        reader.buffer_position(),
                        strings.len(),
                        e
                    );
                    break;
                }
                _ => {}
            }
        }

        log::debug!("shared strings: {} entries", strings.len());
        Self { strings }
    }

    /// Get a string by 0-based index
    pub fn get(&self, index: usize) -> Option<&str> {
        self.strings.get(index).map(String::as_str)
    }

    /// Resolve the textual pointer stored in a cell's `<v>` element
    ///
    /// Returns `None` when the pointer is not a non-negative integer or is
    /// outside the table.
    pub fn lookup(&self, pointer: &str) -> Option<&str> {
        pointer
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|idx| self.get(idx))
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Check if the table has no entries
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

impl From<Vec<String>> for SharedStringTable {
    fn from(strings: Vec<String>) -> Self {
        Self { strings }
    }
}

/// Replace every `_xHHHH_` token with the character whose code point is the
/// four hex digits. Control characters such as line breaks are stored this
/// way in shared strings, and a literal `_x` prefix is itself written as
/// `_x005F_x`. Tokens that are not exactly four hex digits between `_x` and
/// `_` pass through unchanged.
pub(crate) fn decode_excel_escapes(s: &str) -> String {
    if !s.contains("_x") {
        return s.to_string();
    }

    let mut result = String::with_capacity(s.len());
    let mut rest = s;

    while let Some(pos) = rest.find("_x") {
        result.push_str(&rest[..pos]);
        let candidate = &rest[pos..];

        // _xHHHH_ is exactly 7 bytes
        let decoded = candidate
            .get(2..6)
            .filter(|hex| hex.bytes().all(|b| b.is_ascii_hexdigit()))
            .filter(|_| candidate.as_bytes().get(6) == Some(&b'_'))
            .and_then(|hex| u32::from_str_radix(hex, 16).ok())
            .and_then(char::from_u32);

        match decoded {
            Some(c) => {
                result.push(c);
                rest = &candidate[7..];
            }
            None => {
                result.push('_');
                rest = &candidate[1..];
            }
        }
    }

    result.push_str(rest);
    result
}
